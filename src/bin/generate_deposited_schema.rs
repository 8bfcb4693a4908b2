use anyhow::Context;
use ridl_tools::cli::utils::{error_message, verbose_errors};
use ridl_tools::config::config;
use ridl_tools::schema;
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env so RIDL_SCHEMA_INPUT / RIDL_SCHEMA_OUTPUT can be set locally
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{}", error_message(&e, verbose_errors()));
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let settings = &config().schema;

    schema::generate(&settings.input_path, &settings.output_path)
        .with_context(|| format!("failed to generate {}", settings.output_path.display()))?;

    println!("Schema for the `deposited-dataset` type has been generated");
    Ok(())
}
