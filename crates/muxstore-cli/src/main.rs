//! Muxstore CLI: drive the Mux storage adapter from the command line.
//!
//! Reads MUX_TOKEN_ID and MUX_TOKEN_SECRET (plus the optional MUX_* and
//! ENCODING_TIER settings) from the environment or a `.env` file.

use anyhow::Context;
use clap::{Parser, Subcommand};
use muxstore_cli::{default_asset_name, init_tracing};
use muxstore_core::{AssetDescriptor, MuxConfig};
use muxstore_storage::{create_storage, StorageAdapter};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "muxstore", about = "Mux storage adapter CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save a local file and print its reference URL
    Save {
        /// Path to the file to upload
        file: PathBuf,
        /// Declared MIME type (e.g. video/mp4, image/jpeg)
        #[arg(long)]
        content_type: String,
        /// Asset name; defaults to the file name
        #[arg(long)]
        name: Option<String>,
    },
    /// Print the path component of a reference URL
    UrlToPath {
        url: String,
    },
    /// Run the adapter's serve handler
    Serve {
        #[arg(long, default_value = "127.0.0.1:2368")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let config = MuxConfig::from_env().context("Failed to load Mux configuration")?;
    let storage = create_storage(&config).context(
        "Failed to create Mux storage. Set MUX_TOKEN_ID and MUX_TOKEN_SECRET",
    )?;

    match cli.command {
        Commands::Save {
            file,
            content_type,
            name,
        } => {
            let name = name.unwrap_or_else(|| default_asset_name(&file));
            let asset = AssetDescriptor::new(file, name, content_type);
            let reference = storage
                .save(&asset)
                .await
                .with_context(|| format!("Failed to save {}", asset.path.display()))?;
            println!("{}", reference);
        }
        Commands::UrlToPath { url } => {
            let path = storage.url_to_path(&url)?;
            println!("{}", path);
        }
        Commands::Serve { addr } => {
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;
            tracing::info!(addr = %addr, "Serving (all requests answer 404)");
            axum::serve(listener, storage.serve())
                .await
                .context("Server error")?;
        }
    }

    Ok(())
}
