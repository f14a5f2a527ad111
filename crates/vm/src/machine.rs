//! Interpreter state: the per-run machine and the reusable interpreter.

use crate::directive::Metadata;
use crate::io::{Input, Output};
use crate::resolve::{resolve, LabelTable};
use crate::stack::ValueStack;
use sala_common::{SalaError, Token};

/// What the execution loop does after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Continue with the next line.
    Next,
    /// Continue at the given line index.
    Jump(usize),
}

/// The outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Metadata registered by directives.
    pub metadata: Metadata,
    /// The stack as left by the program.
    pub stack: ValueStack,
    /// Number of instructions executed.
    pub steps: u64,
}

/// State owned by a single run. Created fresh for every program, so
/// independent runs never share stacks or tables.
pub(crate) struct Machine<'o> {
    /// Operand stack.
    pub(crate) stack: ValueStack,
    /// Label name to line index, complete before execution starts.
    pub(crate) labels: LabelTable,
    pub(crate) metadata: Metadata,
    /// Instruction pointer (line index).
    pub(crate) pc: usize,
    /// Set by the first label or instruction line; directives are rejected after it.
    pub(crate) after_content: bool,
    pub(crate) steps: u64,
    pub(crate) output: &'o mut dyn Output,
}

impl<'o> Machine<'o> {
    pub(crate) fn new(labels: LabelTable, output: &'o mut dyn Output) -> Self {
        Self {
            stack: ValueStack::new(),
            labels,
            metadata: Metadata::default(),
            pc: 0,
            after_content: false,
            steps: 0,
            output,
        }
    }

    /// Look up the line index of the label named by a jump argument.
    pub(crate) fn label(&self, target: &Token) -> Result<usize, SalaError> {
        self.labels
            .get(target.literal())
            .copied()
            .ok_or_else(|| SalaError::UnknownLabel {
                at: target.position(),
                name: target.literal().to_string(),
            })
    }

    pub(crate) fn finish(self) -> RunReport {
        RunReport {
            metadata: self.metadata,
            stack: self.stack,
            steps: self.steps,
        }
    }
}

/// A sala interpreter bound to an output sink and an input source.
///
/// The interpreter itself holds no program state; every call to
/// [`Interpreter::interpret`] starts from an empty stack and empty tables.
pub struct Interpreter<O, I> {
    output: O,
    input: I,
}

impl<O: Output, I: Input> Interpreter<O, I> {
    pub fn new(output: O, input: I) -> Self {
        Self { output, input }
    }

    /// Run a lexed program to completion.
    ///
    /// Labels and aliases are resolved over the whole program first, so
    /// forward jumps work and resolution errors surface before anything
    /// executes. The first error aborts the run.
    pub fn interpret(&mut self, mut lines: Vec<Vec<Token>>) -> Result<RunReport, SalaError> {
        let labels = resolve(&mut lines)?;
        let mut machine = Machine::new(labels, &mut self.output);
        machine.execute(&lines)?;
        Ok(machine.finish())
    }

    /// Lex and run program text.
    pub fn interpret_source(&mut self, text: &str) -> Result<RunReport, SalaError> {
        let lines = sala_lexer::tokenize(text)?;
        self.interpret(lines)
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn into_parts(self) -> (O, I) {
        (self.output, self.input)
    }
}
