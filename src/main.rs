//! Print the structure of an encoded CID.
//!
//! Run with: `cid-inspect <encoded-CID>`

use cid_inspect::inspect;
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn usage(program: &str) -> String {
    format!("Usage: {} <encoded-CID>", program)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("cid-inspect");

    if args.len() != 2 {
        println!("{}", usage(program));
        return ExitCode::FAILURE;
    }

    match inspect(&args[1]) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(stage = ?e.stage, error = ?e.source, "inspection failed");
            println!("[ERR] {}", e);
            ExitCode::FAILURE
        }
    }
}
