//! sala virtual machine — runs sala programs line by line.
//!
//! A run has two passes over the lexed program:
//! 1. **Resolution**: record every `:label` and substitute every `$alias`
//!    reference, so forward jumps work and resolution errors surface early.
//! 2. **Execution**: walk the lines with an instruction pointer, dispatch
//!    directives and instructions, and follow jumps.
//!
//! # Usage
//!
//! ```
//! use sala_common::Value;
//! use sala_vm::run;
//!
//! let mut printed: Vec<Value> = Vec::new();
//! run("push 3\npush 4\nadd\nprint\n", &mut printed).unwrap();
//! assert_eq!(printed, vec![Value::Int(7)]);
//! ```
//!
//! # Logging
//!
//! Resolution and completion are logged at `debug` level, every executed
//! instruction at `trace` level together with the rendered stack. Install a
//! `tracing` subscriber to see them.

pub mod directive;
pub mod instruction;
pub mod io;
pub mod machine;
pub mod stack;

mod execute;
mod resolve;

pub use directive::{Directive, Metadata};
pub use instruction::Instruction;
pub use io::{FnInput, Input, Output, WriteOutput};
pub use machine::{Flow, Interpreter, RunReport};
pub use stack::ValueStack;

use sala_common::SalaError;

/// Lex and run program text, sending printed values to `output`.
///
/// This is the primary entry point for embedders that do not need an input
/// source.
///
/// # Errors
///
/// Returns the first [`SalaError`] from lexing, resolution, or execution.
pub fn run(source: &str, output: &mut impl Output) -> Result<RunReport, SalaError> {
    Interpreter::new(output, std::io::empty()).interpret_source(source)
}
