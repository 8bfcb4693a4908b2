use clap::Subcommand;

use crate::catalog::UserDraft;
use crate::cli::utils::{output_record, output_summary};
use crate::cli::{CatalogArgs, OutputFormat};
use crate::jobs;

#[derive(Subcommand)]
pub enum UserCommands {
    #[command(about = "Create a user account")]
    Create {
        #[command(flatten)]
        catalog: CatalogArgs,
        #[arg(long, help = "User name")]
        name: String,
        #[arg(long, help = "Email address")]
        email: String,
        #[arg(long, help = "Initial password")]
        password: String,
        #[arg(long, help = "Full display name")]
        fullname: Option<String>,
    },
}

pub async fn handle(cmd: UserCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        UserCommands::Create { catalog, name, email, password, fullname } => {
            let client = catalog.connect()?;
            let user = UserDraft { name, email, password, fullname };

            let summary = jobs::create_user(&client, &user, &mut |outcome: &jobs::RecordOutcome| {
                output_record(&output_format, outcome)
            })
            .await?;

            output_summary(&output_format, "users", &summary)
        }
    }
}
