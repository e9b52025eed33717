use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use finscout::config::{load_config, PipelineConfig};
use finscout::news::{self, NewsConfig};
use finscout::pipeline;
use finscout::scrape::HttpJobSource;

#[derive(Parser)]
#[command(name = "finscout", version, about = "Finance job aggregator and daily headline fetcher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape job listings, filter to finance roles, and write a spreadsheet
    Jobs {
        /// TOML file overriding the built-in defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output path (.xlsx writes a spreadsheet, anything else CSV)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Drop records whose best salary bound is below this value
        #[arg(long)]
        min_salary: Option<f64>,
    },

    /// Fetch today's financial headlines and dump the raw JSON response
    News {
        /// Output path for the JSON dump
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Jobs {
            config,
            output,
            min_salary,
        } => {
            let mut cfg = match config {
                Some(path) => load_config(&path)?,
                None => PipelineConfig::default(),
            };
            if let Some(path) = output {
                cfg.output = Some(path);
            }
            if let Some(min) = min_salary {
                cfg.min_salary = Some(min);
            }

            let source = HttpJobSource::new(cfg.scrape_url.clone())?;
            pipeline::run(&cfg, &source).await?;
            Ok(())
        }

        Commands::News { output } => {
            let mut cfg = NewsConfig::default();
            if let Some(path) = output {
                cfg.output = path;
            }
            news::run(&cfg).await
        }
    }
}
