//! CLI command implementations.

use sala_vm::{Interpreter, WriteOutput};
use std::fs;
use std::io::{self, ErrorKind};
use tracing::debug;

/// Read and run a program file.
pub fn run(path: &str) -> Result<(), i32> {
    let text = read_source(path)?;

    let stdout = io::stdout();
    let stdin = io::stdin();
    let mut interpreter = Interpreter::new(WriteOutput::new(stdout.lock()), stdin.lock());

    match interpreter.interpret_source(&text) {
        Ok(report) => {
            debug!(path, steps = report.steps, title = ?report.metadata.title, "run complete");
            Ok(())
        }
        Err(e) => {
            eprintln!("{e}");
            Err(2)
        }
    }
}

fn read_source(path: &str) -> Result<String, i32> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            eprintln!("error: file '{path}' does not exist");
        } else {
            eprintln!("error: unable to read file '{path}': {e}");
        }
        1
    })
}
