pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "ridl")]
#[command(about = "RIDL CLI - schema generation and catalog administration jobs")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Schema generation")]
    Schema {
        #[command(subcommand)]
        cmd: commands::schema::SchemaCommands,
    },

    #[command(about = "Data deposit management")]
    Deposit {
        #[command(subcommand)]
        cmd: commands::deposit::DepositCommands,
    },

    #[command(about = "Data container imports and updates")]
    Containers {
        #[command(subcommand)]
        cmd: commands::containers::ContainerCommands,
    },

    #[command(about = "User management")]
    User {
        #[command(subcommand)]
        cmd: commands::user::UserCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Remote catalog location shared by every catalog command
#[derive(clap::Args, Debug, Clone)]
pub struct CatalogArgs {
    #[arg(help = "Base URL of the catalog site")]
    pub url: String,

    #[arg(help = "Sysadmin API key on that site")]
    pub api_key: String,
}

impl CatalogArgs {
    pub fn connect(&self) -> anyhow::Result<crate::catalog::RemoteCatalog> {
        let settings = &crate::config::config().catalog;
        Ok(crate::catalog::RemoteCatalog::new(&self.url, self.api_key.clone(), settings)?)
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Schema { cmd } => commands::schema::handle(cmd, output_format).await,
        Commands::Deposit { cmd } => commands::deposit::handle(cmd, output_format).await,
        Commands::Containers { cmd } => commands::containers::handle(cmd, output_format).await,
        Commands::User { cmd } => commands::user::handle(cmd, output_format).await,
    }
}
