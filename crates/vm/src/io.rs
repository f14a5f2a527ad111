//! Input and output capabilities handed to the interpreter.

use sala_common::Value;
use std::io::{self, BufRead, Write};

/// Where `print` sends popped values.
pub trait Output {
    /// Render one value. No separator is added between values.
    fn accept(&mut self, value: &Value) -> io::Result<()>;
}

impl<T: Output + ?Sized> Output for &mut T {
    fn accept(&mut self, value: &Value) -> io::Result<()> {
        (**self).accept(value)
    }
}

/// Collects printed values, mostly useful in tests and embedders.
impl Output for Vec<Value> {
    fn accept(&mut self, value: &Value) -> io::Result<()> {
        self.push(value.clone());
        Ok(())
    }
}

/// Renders values with their `Display` form to any writer.
#[derive(Debug)]
pub struct WriteOutput<W> {
    writer: W,
}

impl<W: Write> WriteOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for WriteOutput<W> {
    fn accept(&mut self, value: &Value) -> io::Result<()> {
        write!(self.writer, "{value}")?;
        self.writer.flush()
    }
}

/// Blocking line source for instructions that read input.
///
/// No standard instruction reads input yet; the interpreter carries one so
/// that embedders can supply it up front.
pub trait Input {
    /// Read one line without its line terminator.
    fn read_line(&mut self) -> io::Result<String>;
}

impl<R: BufRead> Input for R {
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        BufRead::read_line(self, &mut line)?;
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

/// An [`Input`] backed by a closure, for embedders that produce lines
/// themselves (prompts, scripted answers).
///
/// ```
/// use sala_vm::{FnInput, Input};
///
/// let mut answers = vec!["yes".to_string()].into_iter();
/// let mut input = FnInput::new(move || Ok(answers.next().unwrap_or_default()));
/// assert_eq!(input.read_line().unwrap(), "yes");
/// assert_eq!(input.read_line().unwrap(), "");
/// ```
#[derive(Debug)]
pub struct FnInput<F> {
    read: F,
}

impl<F: FnMut() -> io::Result<String>> FnInput<F> {
    pub fn new(read: F) -> Self {
        Self { read }
    }
}

impl<F: FnMut() -> io::Result<String>> Input for FnInput<F> {
    fn read_line(&mut self) -> io::Result<String> {
        (self.read)()
    }
}
