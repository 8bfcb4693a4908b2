use anyhow::Context;
use clap::Subcommand;
use serde_json::json;
use std::path::PathBuf;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config::config;
use crate::schema;

#[derive(Subcommand)]
pub enum SchemaCommands {
    #[command(about = "Generate the deposited-dataset schema from the dataset schema")]
    Generate {
        #[arg(long, help = "Base dataset schema (JSON or YAML)")]
        input: Option<PathBuf>,
        #[arg(long, help = "Where to write the deposited-dataset schema")]
        output: Option<PathBuf>,
    },
}

pub async fn handle(cmd: SchemaCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        SchemaCommands::Generate { input, output } => {
            let input = input.unwrap_or_else(|| config().schema.input_path.clone());
            let output = output.unwrap_or_else(|| config().schema.output_path.clone());

            let report = schema::generate(&input, &output)
                .with_context(|| format!("failed to generate schema from {}", input.display()))?;

            output_success(
                &output_format,
                "Schema for the `deposited-dataset` type has been generated",
                Some(json!({
                    "output": output.display().to_string(),
                    "dataset_fields": report.dataset_fields,
                    "resource_fields": report.resource_fields
                })),
            )
        }
    }
}
