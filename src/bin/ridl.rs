use clap::Parser;
use ridl_tools::cli::utils::{error_message, verbose_errors};
use ridl_tools::cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = ridl_tools::cli::run(cli).await {
        eprintln!("{}", error_message(&e, verbose_errors()));
        std::process::exit(1);
    }

    Ok(())
}
