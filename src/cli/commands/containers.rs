use clap::Subcommand;
use std::path::PathBuf;

use crate::cli::utils::{output_record, output_summary};
use crate::cli::{CatalogArgs, OutputFormat};
use crate::config::config;
use crate::jobs;

#[derive(Subcommand)]
pub enum ContainerCommands {
    #[command(about = "Create the initial data container hierarchy from CSV")]
    Import {
        #[command(flatten)]
        catalog: CatalogArgs,
        #[arg(long, help = "CSV with root, first and second level containers")]
        csv: Option<PathBuf>,
    },

    #[command(about = "Update external visibility of data containers from CSV")]
    Visibility {
        #[command(flatten)]
        catalog: CatalogArgs,
        #[arg(long, help = "CSV with container id and Yes/No visibility")]
        csv: Option<PathBuf>,
    },
}

pub async fn handle(cmd: ContainerCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let mut report = |outcome: &jobs::RecordOutcome| output_record(&output_format, outcome);

    match cmd {
        ContainerCommands::Import { catalog, csv } => {
            let csv = csv.unwrap_or_else(|| config().imports.data_containers_csv.clone());
            let client = catalog.connect()?;
            let summary = jobs::create_data_containers(&client, &csv, &mut report).await?;

            output_summary(&output_format, "data containers", &summary)
        }
        ContainerCommands::Visibility { catalog, csv } => {
            let csv = csv.unwrap_or_else(|| config().imports.container_visibility_csv.clone());
            let client = catalog.connect()?;
            let summary = jobs::update_container_visibility(&client, &csv, &mut report).await?;

            output_summary(&output_format, "container visibility", &summary)
        }
    }
}
