use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, app: &AppContext) -> anyhow::Result<()> {
    match command {
        Commands::Open(args) => commands::open::handle(&args, app).await,
        Commands::Register(args) => commands::register::handle(&args, app).await,
        Commands::Login(args) => commands::login::handle(&args, app).await,
        Commands::Session => commands::session::handle(app),
        Commands::Outer(args) => commands::outer::handle(&args, app).await,
        Commands::Student(args) => commands::student::handle(&args, app).await,
        Commands::Teacher(args) => commands::teacher::handle(&args, app).await,
        Commands::Routes | Commands::Schema(_) => {
            unreachable!("routes/schema are pre-dispatched in main")
        }
    }
}
