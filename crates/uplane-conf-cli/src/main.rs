// crates/uplane-conf-cli/src/main.rs

//! Command line driver for the uplane-conf codec: generate the built-in
//! sample configuration, or decode an existing document and re-encode it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use uplane_conf::{load_uplane_conf_from_str, save_uplane_conf_to_string, RadioUnitConfig};

/// Default document name, matching the original tooling.
const DEFAULT_INPUT: &str = "user_plane_configuration.xml";

#[derive(Parser, Debug)]
#[command(version, about = "Generate and convert O-RAN user-plane configuration XML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode the built-in sample configuration.
    Generate {
        /// Write to this file instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Decode an XML document and re-encode it to stdout.
    Convert {
        /// Input XML document.
        #[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate { output } => {
            let xml = save_uplane_conf_to_string(&RadioUnitConfig::sample())?;
            match output {
                Some(path) => {
                    fs::write(&path, &xml)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    log::info!("wrote sample configuration to {}", path.display());
                }
                None => print!("{xml}"),
            }
        }
        Command::Convert { input } => {
            let text = fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let config = load_uplane_conf_from_str(&text)
                .with_context(|| format!("Failed to parse {}", input.display()))?;
            print!("{}", save_uplane_conf_to_string(&config)?);
        }
    }

    Ok(())
}
