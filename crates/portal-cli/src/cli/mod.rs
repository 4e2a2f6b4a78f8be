use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `portal` binary.
#[derive(Debug, Parser)]
#[command(
    name = "portal",
    version,
    about = "Portal - register, log in and study course modules"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (default from [general] default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL, overriding [api] base_url
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Session file, overriding [session] path
    #[arg(long, global = true, value_name = "PATH")]
    pub session_file: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            api_url: self.api_url.clone(),
            session_file: self.session_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use portal_core::Role;
    use pretty_assertions::assert_eq;

    use super::subcommands::{OuterCommands, TeacherCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "portal",
            "--format",
            "table",
            "--api-url",
            "http://backend:9091",
            "--verbose",
            "routes",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Table));
        assert_eq!(cli.api_url.as_deref(), Some("http://backend:9091"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Routes));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["portal", "session", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Session));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["portal", "--format", "xml", "routes"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn format_defaults_to_config_value() {
        let cli = Cli::try_parse_from(["portal", "routes"]).expect("cli should parse");
        let flags = cli.global_flags();
        assert_eq!(flags.format, None);
        assert_eq!(flags.format_or("table"), OutputFormat::Table);
        assert_eq!(flags.format_or("yaml"), OutputFormat::Json);
    }

    #[test]
    fn register_takes_role_and_all_fields() {
        let cli = Cli::try_parse_from([
            "portal",
            "register",
            "teacher",
            "--id",
            "T1",
            "--email",
            "t@x.y",
            "--password",
            "pw",
            "--confirm-password",
            "pw",
        ])
        .expect("cli should parse");

        let Commands::Register(args) = cli.command else {
            panic!("expected register");
        };
        assert_eq!(Role::from(args.role), Role::Teacher);
        assert_eq!(args.id, "T1");
        assert_eq!(args.confirm_password, "pw");
    }

    #[test]
    fn login_rejects_unknown_role() {
        let parsed = Cli::try_parse_from([
            "portal", "login", "admin", "--email", "a@b", "--password", "x",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn dashboard_without_action_just_lists() {
        let cli = Cli::try_parse_from(["portal", "outer", "--expand", "C1"])
            .expect("cli should parse");
        let Commands::Outer(args) = cli.command else {
            panic!("expected outer");
        };
        assert_eq!(args.expand.as_deref(), Some("C1"));
        assert!(args.action.is_none());
    }

    #[test]
    fn upload_files_collects_every_link() {
        let cli = Cli::try_parse_from(["portal", "outer", "upload-files", "/a.pdf", "/b.csv"])
            .expect("cli should parse");
        let Commands::Outer(args) = cli.command else {
            panic!("expected outer");
        };
        assert!(matches!(
            args.action,
            Some(OuterCommands::UploadFiles { links }) if links.len() == 2
        ));
    }

    #[test]
    fn teacher_link_update_accepts_course() {
        let cli = Cli::try_parse_from([
            "portal", "teacher", "add-ppt", "Week 1", "new.pptx", "--course", "C1",
        ])
        .expect("cli should parse");
        let Commands::Teacher(args) = cli.command else {
            panic!("expected teacher");
        };
        let Some(TeacherCommands::AddPpt(link)) = args.action else {
            panic!("expected add-ppt");
        };
        assert_eq!(link.module_name, "Week 1");
        assert_eq!(link.link, "new.pptx");
        assert_eq!(link.course.as_deref(), Some("C1"));
    }
}
