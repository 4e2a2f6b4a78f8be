use clap::{Args, Subcommand, ValueEnum};
use portal_core::Role;

use crate::cli::subcommands::{OuterCommands, StudentCommands, TeacherCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List every page route.
    Routes,
    /// Resolve a route path and mount its page.
    Open(OpenArgs),
    /// Create a student or teacher account.
    Register(RegisterArgs),
    /// Log in and remember the returned id.
    Login(LoginArgs),
    /// Show the stored session.
    Session,
    /// Student landing page: courses, summaries, doubt solver.
    Outer(OuterArgs),
    /// Student course page: quizzes and summaries.
    Student(StudentArgs),
    /// Teacher course page: quizzes, links, courses and modules.
    Teacher(TeacherArgs),
    /// Print the JSON schema of a wire type.
    Schema(SchemaArgs),
}

/// Account kind on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum RoleArg {
    Student,
    Teacher,
}

impl From<RoleArg> for Role {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::Student => Self::Student,
            RoleArg::Teacher => Self::Teacher,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct OpenArgs {
    /// Route path, e.g. /teacher-dashboard.
    pub path: String,
}

#[derive(Clone, Debug, Args)]
pub struct RegisterArgs {
    #[arg(value_enum)]
    pub role: RoleArg,
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub confirm_password: String,
}

#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    #[arg(value_enum)]
    pub role: RoleArg,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct OuterArgs {
    /// Expand this course and list its modules.
    #[arg(long, value_name = "COURSE_ID")]
    pub expand: Option<String>,
    #[command(subcommand)]
    pub action: Option<OuterCommands>,
}

#[derive(Clone, Debug, Args)]
pub struct StudentArgs {
    /// Expand this course and list its modules.
    #[arg(long, value_name = "COURSE_ID")]
    pub expand: Option<String>,
    #[command(subcommand)]
    pub action: Option<StudentCommands>,
}

#[derive(Clone, Debug, Args)]
pub struct TeacherArgs {
    /// Expand this course and list its modules.
    #[arg(long, value_name = "COURSE_ID")]
    pub expand: Option<String>,
    #[command(subcommand)]
    pub action: Option<TeacherCommands>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Wire type to describe.
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Envelope,
    Course,
    Module,
    Identity,
}
