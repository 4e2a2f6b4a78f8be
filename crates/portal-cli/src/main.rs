use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("portal error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();

    match &cli.command {
        cli::Commands::Routes => {
            let format = flags.format.unwrap_or(cli::OutputFormat::Json);
            ui::init(format, flags.quiet);
            return commands::routes::handle(format);
        }
        cli::Commands::Schema(args) => {
            let format = flags.format.unwrap_or(cli::OutputFormat::Json);
            ui::init(format, flags.quiet);
            return commands::schema::handle(args, format);
        }
        _ => {}
    }

    let config = bootstrap::load_config(&flags)?;
    context::warn_unconfigured();

    let app = context::AppContext::init(config, &flags)?;
    ui::init(app.format, flags.quiet);

    commands::dispatch::dispatch(cli.command, &app).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PORTAL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
