//! LISA constants header generator CLI
//!
//! Writes `lisaconstants.h` and `lisaconstants.hpp` and inspects the catalogue.

#![allow(
    clippy::print_stdout,
    reason = "CLI tool needs to print to stdout"
)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use lc_header::Language;
use lisa_headers::{generate, list, show, Config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lisa-headers")]
#[command(about = "LISA constants header generator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the C and C++ headers
    Generate {
        /// Configuration file (defaults to lisaconstants.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output directory
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Output file stem
        #[arg(long)]
        stem: Option<String>,

        /// Target language (c or c++), repeatable
        #[arg(long = "language", short = 'l')]
        languages: Vec<Language>,
    },

    /// List every constant
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show one constant
    Show {
        /// Constant name or alias
        name: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let registry = lisa_constants::registry()?;

    match cli.command {
        Commands::Generate {
            config,
            out_dir,
            stem,
            languages,
        } => {
            let mut settings = Config::load(config.as_deref(), &std::env::current_dir()?)?;
            if let Some(out_dir) = out_dir {
                settings.out_dir = out_dir;
            }
            if let Some(stem) = stem {
                settings.stem = stem;
            }
            if !languages.is_empty() {
                settings.languages = languages;
            }
            generate::generate(&registry, &settings)?;
        }
        Commands::List { format } => match format.as_str() {
            "json" => println!("{}", list::format_json(&registry)?),
            "text" => print!("{}", list::format_text(&registry)),
            other => anyhow::bail!("Unknown output format: {other}"),
        },
        Commands::Show { name } => {
            println!("{}", show::describe(&registry, &name)?);
        }
    }

    Ok(())
}
