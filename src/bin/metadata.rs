//! Metadata CLI
//!
//! Generates, parses, and validates calendar-versioned metadata documents
//! against the bundled (or a local) schema registry.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wonzimer_sdk::{MetadataEngine, SdkConfig};

#[derive(Parser)]
#[command(name = "wonzimer-metadata")]
#[command(about = "Generate, parse, and validate Wonzimer metadata")]
struct Cli {
    /// Load schemas from this directory instead of the bundled set
    #[arg(long)]
    schemas: Option<PathBuf>,

    /// Path to a config file
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the canonical metadata string for a document
    Generate {
        /// Version identifier, e.g. wonzimer-20210101
        version: String,
        /// Metadata fields as inline JSON (reads stdin when omitted)
        json: Option<String>,
    },

    /// Parse and validate a raw metadata file
    Parse {
        /// Version identifier, e.g. wonzimer-20210101
        version: String,
        /// Path to the raw JSON document
        file: PathBuf,
    },

    /// Check whether a document conforms to a schema revision
    Validate {
        /// Version identifier, e.g. wonzimer-20210101
        version: String,
        /// Candidate document as inline JSON (reads stdin when omitted)
        json: Option<String>,
    },

    /// List registered namespaces and calendar versions
    Versions {
        /// Restrict to one namespace
        namespace: Option<String>,
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
    let mut config = match cli.config.as_deref() {
        Some(path) => SdkConfig::load_from(Some(path))?,
        None => SdkConfig::load()?,
    };
    if let Some(dir) = cli.schemas {
        config.registry.schema_dir = Some(dir);
    }

    let engine = MetadataEngine::new(config.schema_registry()?);

    match cli.command {
        Commands::Generate { version, json } => {
            let fields: serde_json::Value = serde_json::from_str(&read_input(json)?)?;
            println!("{}", engine.generate(&version, &fields)?);
            Ok(())
        }

        Commands::Parse { version, file } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let document = engine.parse(&version, &raw)?;
            println!("{}", serde_json::to_string_pretty(&document)?);
            Ok(())
        }

        Commands::Validate { version, json } => {
            let candidate: serde_json::Value = serde_json::from_str(&read_input(json)?)?;
            if engine.validate(&version, &candidate)? {
                println!("✅ Document conforms to {}", version);
            } else {
                println!("❌ Document does not conform to {}", version);
                std::process::exit(1);
            }
            Ok(())
        }

        Commands::Versions { namespace } => {
            let registry = engine.registry();
            let namespaces = match &namespace {
                Some(ns) => vec![ns.as_str()],
                None => registry.namespaces(),
            };
            for ns in namespaces {
                println!("{}", ns);
                for calendar in registry.calendar_versions(ns)? {
                    println!("  └─ {}-{}", ns, calendar);
                }
            }
            Ok(())
        }
    }
}

/// Inline JSON argument, or stdin when omitted
fn read_input(inline: Option<String>) -> std::io::Result<String> {
    match inline {
        Some(json) => Ok(json),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
