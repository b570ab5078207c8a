//! `neudev` command-line client.
//!
//! Successful commands print their result as pretty JSON on stdout. Failures
//! print `{"error": ..., "details": ...}` on stderr and exit with status 1.
//! The session lives in a JSON file (`--session-file`) between runs.

mod args;
mod commands;
mod input;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use neudev::{ApiError, Failure, StoreError};
use serde_json::Value;

use crate::args::Cli;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid UTF-8", .0.display())]
    NotUtf8(PathBuf),
}

impl CliError {
    fn to_failure(&self) -> Failure {
        match self {
            Self::Api(err) => err.to_failure(),
            other => Failure { error: other.to_string(), details: None },
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match commands::run(cli).await {
        Ok(value) => match print_json(&value) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => report(&err),
        },
        Err(err) => report(&err),
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

fn report(err: &CliError) -> ExitCode {
    tracing::debug!(error = %err, "command failed");
    let failure = err.to_failure();
    match serde_json::to_string_pretty(&failure) {
        Ok(rendered) => eprintln!("{rendered}"),
        Err(_) => eprintln!("{}", failure.error),
    }
    ExitCode::FAILURE
}
