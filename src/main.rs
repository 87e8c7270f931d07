use anyhow::Context;
use clap::{CommandFactory, Parser};
use las_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help
    if args.command.is_none() {
        let _ = Args::command().print_help();
        println!();
        process::exit(0);
    }

    if let Err(error) = run(args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;

    runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result.context("Command failed"),
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err::<(), _>(las_processor::LasError::Interrupted {
                    reason: "interrupted by user".to_string(),
                })
                .context("Command cancelled")
            }
        }
    })
}
