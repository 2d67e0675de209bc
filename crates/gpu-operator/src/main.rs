mod app;
mod components;
mod config;
mod k8s;
mod output;

use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use utils::version;

use crate::app::Application;
use crate::config::Cli;
use crate::config::Commands;

/// Sets up global panic hooks.
fn setup_global_hooks() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        default_hook(panic_info);
        tracing::error!("Thread panicked: {}", panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_global_hooks();
    utils::logging::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(run_args) => run_operator(run_args).await,
        Commands::AppNames(output_args) => {
            println!("{}", output::render_app_names(output_args.output)?);
            Ok(())
        }
        Commands::AppName(args) => {
            println!(
                "{}",
                output::render_app_name(args.component, args.label_selector, args.output.output)?
            );
            Ok(())
        }
    }
}

async fn run_operator(run_args: crate::config::RunArgs) -> Result<()> {
    tracing::info!("Starting gpu-operator {}", &**version::VERSION);

    let app = Application::build(run_args).await?;
    app.run(CancellationToken::new()).await
}
