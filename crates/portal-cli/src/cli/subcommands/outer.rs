use clap::Subcommand;

/// Actions on the student landing page.
#[derive(Clone, Debug, Subcommand)]
pub enum OuterCommands {
    /// Summarize a module's slides and show the summary.
    SummarizeText { module_name: String },
    /// Summarize a module's audio and show the summary.
    SummarizeAudio { module_name: String },
    /// Hand file links to the doubt solver.
    UploadFiles {
        #[arg(required = true)]
        links: Vec<String>,
    },
    /// Ask the doubt solver a question.
    Ask { prompt: String },
}
