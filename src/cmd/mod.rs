use std::path::PathBuf;

use crate::{pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

mod sitemap;

#[derive(Parser)]
#[command(about = "job board service")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    Listen,
    /// writes the sitemap for the configured board
    Sitemap {
        #[arg(long, default_value = "public/sitemap.xml")]
        out: PathBuf,
    },
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::Sitemap { out }) => {
            sitemap::write(&out).await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
