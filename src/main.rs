use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use design_patterns_catalog::{Catalog, CatalogConfig, Demo, Result};

#[derive(Parser)]
#[command(name = "patterns")]
#[command(about = "Run the design patterns catalog", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run only these demos, in the given order (e.g. -o strategy,iterator)
    #[arg(short, long, value_enum, value_delimiter = ',', ignore_case = true)]
    only: Vec<Demo>,

    /// Print banners without color
    #[arg(long)]
    no_color: bool,

    /// List the demos and exit
    #[arg(long)]
    list: bool,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    // Priority: RUST_LOG env var > verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    if cli.list {
        for demo in Demo::ALL {
            println!("{}. {} ({})", demo.number(), demo, demo.title());
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };

    let demos = if cli.only.is_empty() {
        config.selected_demos()
    } else {
        cli.only
    };
    let color = config.output.color && !cli.no_color;

    let stdout = io::stdout();
    Catalog::new(demos)
        .with_color(color)
        .run(&mut stdout.lock())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
