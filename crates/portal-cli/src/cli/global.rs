use std::path::PathBuf;

use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

impl OutputFormat {
    /// Parse a `[general] default_format` value, falling back to JSON.
    #[must_use]
    pub fn from_config(value: &str) -> Self {
        Self::from_str(value.trim(), true).unwrap_or(Self::Json)
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: Option<OutputFormat>,
    pub quiet: bool,
    pub verbose: bool,
    pub api_url: Option<String>,
    pub session_file: Option<PathBuf>,
}

impl GlobalFlags {
    /// Explicit `--format`, else the configured default.
    #[must_use]
    pub fn format_or(&self, configured: &str) -> OutputFormat {
        self.format
            .unwrap_or_else(|| OutputFormat::from_config(configured))
    }
}
