use clap::Subcommand;

use crate::cli::utils::{output_record, output_summary};
use crate::cli::{CatalogArgs, OutputFormat};
use crate::jobs;

#[derive(Subcommand)]
pub enum DepositCommands {
    #[command(about = "Create the data deposit container")]
    Create {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
}

pub async fn handle(cmd: DepositCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        DepositCommands::Create { catalog } => {
            let client = catalog.connect()?;
            let summary = jobs::create_data_deposit(&client, &mut |outcome: &jobs::RecordOutcome| {
                output_record(&output_format, outcome)
            })
            .await?;

            output_summary(&output_format, "data deposit", &summary)
        }
    }
}
