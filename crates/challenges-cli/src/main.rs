mod cli;
mod context;
mod handlers;
mod output;

use challenges_tui::App;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("CHALLENGES_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        clap_complete::generate(*shell, &mut Cli::command(), "challenges", &mut std::io::stdout());
        return Ok(());
    }

    let ctx = CliContext::load(cli.config.as_deref(), cli.data_dir)?;

    match cli.command {
        None => {
            let mut app = App::new(ctx.config, ctx.catalog)?;
            app.run().await?;
        }
        Some(Commands::List(args)) => handlers::catalog::handle_list(&ctx, args)?,
        Some(Commands::Show { id }) => handlers::catalog::handle_show(&ctx, &id)?,
        Some(Commands::Taxonomy) => handlers::catalog::handle_taxonomy(&ctx)?,
        Some(Commands::Window(args)) => handlers::window::handle(&ctx.config.virtual_list, args)?,
        Some(Commands::Completions { .. }) => {}
    }

    Ok(())
}
