mod commands;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use gistpp_config::Config;
use gistpp_markdown::Encoding;
use std::{io::stdout, path::PathBuf, process};

#[derive(Parser)]
#[command(name = "gistpp")]
#[command(version)]
#[command(about = "Checks and inspects gistpp specification files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate spec files
    Check {
        /// Files to check (default: *.md in specs_path from the config)
        files: Vec<PathBuf>,
    },
    /// Print the parsed node tree
    Outline {
        file: PathBuf,
    },
    /// Confirm a file serializes back unchanged
    Roundtrip {
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    log::debug!("Config path: {}", Config::config_path().display());
    let config = Config::load_or_default()?;
    let encoding: Encoding = config.encoding.parse()?;

    let mut out = stdout().lock();
    let ok = match cli.command {
        Commands::Check { files } => {
            let files = if files.is_empty() {
                let Some(dir) = &config.specs_path else {
                    bail!(
                        "No files given and no specs_path in {}",
                        Config::config_path().display()
                    );
                };
                commands::spec_files(dir)?
            } else {
                files
            };
            commands::check(&files, &config, encoding, &mut out)?
        }
        Commands::Outline { file } => commands::outline(&file, encoding, &mut out)?,
        Commands::Roundtrip { file } => commands::roundtrip(&file, encoding, &mut out)?,
    };

    if !ok {
        process::exit(1);
    }
    Ok(())
}
