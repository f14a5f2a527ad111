//! sala CLI — run a sala program file.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage or input error (missing argument, missing or unreadable file)
//! - 2: Program error (lexing, resolution, or runtime)
//!
//! Set `RUST_LOG` (for example `RUST_LOG=sala_vm=trace`) to log interpreter
//! activity to stderr.

mod commands;

use std::process;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let result = match args.get(1).map(String::as_str) {
        None => {
            print_usage();
            process::exit(1);
        }
        Some("--help" | "-h") => {
            print_usage();
            process::exit(0);
        }
        Some(path) => commands::run(path),
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

/// Install a stderr subscriber, but only when `RUST_LOG` asks for one.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn print_usage() {
    eprintln!("Usage: sala <file>");
    eprintln!();
    eprintln!("Runs a sala program. Printed values go to stdout.");
}
