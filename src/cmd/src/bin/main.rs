use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use cmd::command::docs;
use cmd::command::generate;
use cmd::command::generate::Generate;
use cmd::command::pipeline;
use cmd::error::Error;
use cmd::error::Result;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[derive(Subcommand, Clone)]
enum Commands {
    /// Generate partner fact files and dimension tables
    Generate(Generate),
    /// Render the business documentation PDFs
    Docs,
    /// Load raw files through bronze, silver and gold
    Pipeline,
    /// Generate, render docs and run the pipeline
    All(Generate),
}

#[derive(Parser)]
#[command(propagate_version = true)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file, built-in defaults when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let mut cfg = match &args.config {
        Some(path) => cmd::config::load(path)?,
        None => common::config::Config::default(),
    };
    if args.config.is_none() {
        cfg.generation.workers = num_cpus::get();
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cfg.log.level)
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(Error::SetGlobalDefaultError)?;

    let version = env!("CARGO_PKG_VERSION");
    info!("medallion v{version}");

    match &args.command {
        Commands::Generate(flags) => {
            flags.apply(&mut cfg.generation)?;
            generate::run(&cfg)?;
        }
        Commands::Docs => docs::run(&cfg)?,
        Commands::Pipeline => {
            pipeline::run(&cfg).await?;
        }
        Commands::All(flags) => {
            flags.apply(&mut cfg.generation)?;
            generate::run(&cfg)?;
            docs::run(&cfg)?;
            pipeline::run(&cfg).await?;
        }
    }

    Ok(())
}
