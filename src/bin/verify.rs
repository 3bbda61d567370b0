//! Content verification CLI
//!
//! Computes content digests and verifies remote content against digests
//! recorded on-chain.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wonzimer_sdk::{ContentDigest, ContentFetcher, HttpFetcher, SdkConfig};

#[derive(Parser)]
#[command(name = "wonzimer-verify")]
#[command(about = "Digest and verify content for the Wonzimer Media Protocol")]
struct Cli {
    /// Path to a config file
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the sha256 digest of a local file
    Digest {
        /// File to digest
        file: PathBuf,

        /// Emit a JSON record instead of the bare digest
        #[arg(long)]
        json: bool,
    },

    /// Fetch a URI and verify it against a declared digest
    Verify {
        /// Content URI to fetch
        #[arg(short, long)]
        uri: String,

        /// Declared digest (bare or 0x-prefixed hex)
        #[arg(short, long)]
        digest: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match cli.config.as_deref() {
        Some(path) => SdkConfig::load_from(Some(path))?,
        None => SdkConfig::load()?,
    };

    match cli.command {
        Commands::Digest { file, json } => {
            let bytes = std::fs::read(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let digest = ContentDigest::from_bytes(&bytes);

            if json {
                let record = serde_json::json!({
                    "file": file.display().to_string(),
                    "digest": digest.as_str(),
                    "generated_at": chrono::Utc::now().to_rfc3339(),
                });
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{}", digest);
            }
            Ok(())
        }

        Commands::Verify { uri, digest } => {
            let declared = ContentDigest::from_hex(&digest)?;
            let fetcher = HttpFetcher::new(config.fetch_timeout())?;

            // a failed fetch is unverified content, not a tool error
            match fetcher.fetch(&uri) {
                Ok(bytes) => {
                    if declared.verify(&bytes) {
                        println!("✅ {} matches {}", uri, declared);
                    } else {
                        println!("❌ {} does not match {}", uri, declared);
                        std::process::exit(1);
                    }
                }
                Err(e) => {
                    println!("❌ {} could not be fetched: {}", uri, e);
                    std::process::exit(1);
                }
            }
            Ok(())
        }
    }
}
