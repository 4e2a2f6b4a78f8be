use clap::Subcommand;

/// Actions on the student course page.
#[derive(Clone, Debug, Subcommand)]
pub enum StudentCommands {
    /// Print a module's quiz link.
    QuizLink {
        module_name: String,
        /// Open the quiz in the default browser.
        #[arg(long)]
        open: bool,
    },
    /// Summarize a module's slides.
    SummarizeText { module_name: String },
    /// Summarize a module's audio.
    SummarizeAudio { module_name: String },
}
