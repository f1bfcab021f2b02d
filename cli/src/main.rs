use std::process::ExitCode;

use clap::Parser;
use tracing_forest::util::LevelFilter;
use tracing_forest::{ForestLayer, Printer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};
use vshuffle_cli::run::{Args, execute};

fn main() -> ExitCode {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    // stdout carries only the shuffle output.
    Registry::default()
        .with(env_filter)
        .with(ForestLayer::from(Printer::new().writer(std::io::stderr)))
        .init();

    let args = Args::parse();

    match execute(&args) {
        Ok(emitted) => {
            println!("{emitted}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
