//! Logsweep CLI - disk-space-bounded retention for rotated log files.

use clap::Parser;
use logsweep_cli::{Cli, Command, Config, Formatter};
use logsweep_sweeper::{SweepWorker, Sweeper};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> logsweep_cli::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let formatter = Formatter::new(cli.format);

    match cli.command {
        Command::Sweep(args) => {
            let (sweep_config, identity) = config.resolve(&args)?;
            let mut sweeper = Sweeper::new(sweep_config, identity)?;
            let metrics = sweeper.sweep();
            println!("{}", formatter.render(&metrics)?);
        }
        Command::Watch(args) => {
            let (mut sweep_config, identity) = config.resolve(&args.sweep)?;
            if let Some(minutes) = args.interval_minutes {
                sweep_config.sweep_interval_minutes = minutes;
            }
            let mut worker = SweepWorker::new(sweep_config, identity)?;
            worker.run().await?;
            println!("{}", formatter.render(worker.metrics())?);
        }
    }

    Ok(())
}
