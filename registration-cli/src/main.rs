use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};
use registration_cli::{is_usage_error, run_replay, run_submit, ReplayArgs, SubmitArgs};

#[derive(Parser)]
#[command(name = "registration-cli")]
#[command(about = "Validate registration form submissions and keep the accepted-records table")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a single registration
    Submit(SubmitArgs),
    /// Replay a JSON lines script of submit and reset events
    Replay(ReplayArgs),
}

fn init_logging(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_with(result: Result<bool>) -> ! {
    match result {
        Ok(true) => std::process::exit(0),
        // Submission rejected by validation
        Ok(false) => std::process::exit(3),
        Err(e) if is_usage_error(&e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("Runtime Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    let result = match cli.command {
        Commands::Submit(args) => {
            init_logging(args.form.debug);
            run_submit(args, &mut stdout)
        }
        Commands::Replay(args) => {
            init_logging(args.form.debug);
            run_replay(args, &mut stdout).map(|summary| summary.rejected == 0)
        }
    };

    let _ = stdout.flush();
    exit_with(result);
}
