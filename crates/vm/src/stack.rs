//! The value stack.

use sala_common::{Position, SalaError, Value};
use std::fmt;

/// Last-in-first-out stack of dynamically typed values. No fixed capacity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueStack {
    values: Vec<Value>,
}

impl ValueStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Pop the top value. `at` is the position blamed on underflow.
    pub fn pop(&mut self, at: Position) -> Result<Value, SalaError> {
        self.values.pop().ok_or(SalaError::StackUnderflow { at })
    }

    /// Pop `(a, b)` where `b` was on top. Nothing is popped on underflow.
    pub fn pop_pair(&mut self, at: Position) -> Result<(Value, Value), SalaError> {
        if self.values.len() < 2 {
            return Err(SalaError::StackUnderflow { at });
        }
        let b = self.pop(at)?;
        let a = self.pop(at)?;
        Ok((a, b))
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values from bottom to top.
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

/// Diagnostic rendering: `[]` or `[ 1, "a", 2.5 ]`.
impl fmt::Display for ValueStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.values.is_empty() {
            return f.write_str("[]");
        }
        f.write_str("[ ")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match value {
                Value::Text(s) => write!(f, "{s:?}")?,
                other => write!(f, "{other}")?,
            }
        }
        f.write_str(" ]")
    }
}
