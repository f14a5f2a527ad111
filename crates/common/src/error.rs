//! The single error type of the sala interpreter.
//!
//! Every stage (lexing, shape validation, resolution, execution) reports
//! failures through [`SalaError`]. All errors are fatal to the run.

use crate::token::{Position, TokenKind};
use thiserror::Error;

/// A fatal interpreter error with the source position it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SalaError {
    // ---- Lexing ----
    #[error("error on {at}: illegal character '{ch}'")]
    IllegalCharacter { at: Position, ch: char },

    #[error("error on {at}: invalid escape character '{ch}'")]
    InvalidEscape { at: Position, ch: char },

    /// Reported at the opening quote.
    #[error("error on {at}: unterminated string literal")]
    UnterminatedString { at: Position },

    // ---- Shape validation ----
    #[error("error on {at}: expected end of line, found '{found}'")]
    ExpectedEndOfLine { at: Position, found: TokenKind },

    /// `expected` is already formatted, e.g. `number' or 'string`.
    #[error("error on {at}: expected '{expected}', found end of line")]
    UnexpectedEndOfLine { at: Position, expected: String },

    #[error("error on {at}: expected '{expected}', found '{found}'")]
    UnexpectedKind {
        at: Position,
        expected: String,
        found: TokenKind,
    },

    #[error("error on {at}: expected '{expected}', found '{found}'")]
    UnexpectedLiteral {
        at: Position,
        expected: String,
        found: String,
    },

    // ---- Resolution ----
    #[error("error on {at}: label '{name}' already defined")]
    LabelAlreadyDefined { at: Position, name: String },

    #[error("error on {at}: label is not alone on the line")]
    LabelNotAlone { at: Position },

    #[error("error on {at}: labels cannot be empty")]
    EmptyLabel { at: Position },

    #[error("error on {at}: unknown alias '{name}'")]
    UnknownAlias { at: Position, name: String },

    #[error("error on {at}: alias '{name}' refers to another alias")]
    AliasChain { at: Position, name: String },

    // ---- Execution ----
    #[error("error on {at}: directives can only be used at the top of the file before any code")]
    DirectiveAfterCode { at: Position },

    #[error("error on {at}: unknown directive '{name}'")]
    UnknownDirective { at: Position, name: String },

    #[error("error on {at}: unknown instruction '{name}'")]
    UnknownInstruction { at: Position, name: String },

    #[error("error on {at}: unexpected '{found}'")]
    UnexpectedToken { at: Position, found: TokenKind },

    #[error("error on {at}: stack underflow")]
    StackUnderflow { at: Position },

    #[error("error on {at}: invalid types for {operation}: '{left}' and '{right}'")]
    InvalidTypes {
        at: Position,
        operation: &'static str,
        left: &'static str,
        right: &'static str,
    },

    #[error("error on {at}: division by zero")]
    DivisionByZero { at: Position },

    #[error("error on {at}: cannot repeat a string a negative number of times")]
    NegativeRepeat { at: Position },

    #[error("error on {at}: text would exceed {limit} bytes")]
    TextTooLong { at: Position, limit: usize },

    #[error("error on {at}: integer literal '{literal}' out of range")]
    IntegerOutOfRange { at: Position, literal: String },

    #[error("error on {at}: label '{name}' does not exist")]
    UnknownLabel { at: Position, name: String },

    #[error("error on {at}: failed to write output: {reason}")]
    Output { at: Position, reason: String },
}

impl SalaError {
    /// The source position the error refers to.
    pub fn position(&self) -> Position {
        match self {
            SalaError::IllegalCharacter { at, .. }
            | SalaError::InvalidEscape { at, .. }
            | SalaError::UnterminatedString { at }
            | SalaError::ExpectedEndOfLine { at, .. }
            | SalaError::UnexpectedEndOfLine { at, .. }
            | SalaError::UnexpectedKind { at, .. }
            | SalaError::UnexpectedLiteral { at, .. }
            | SalaError::LabelAlreadyDefined { at, .. }
            | SalaError::LabelNotAlone { at }
            | SalaError::EmptyLabel { at }
            | SalaError::UnknownAlias { at, .. }
            | SalaError::AliasChain { at, .. }
            | SalaError::DirectiveAfterCode { at }
            | SalaError::UnknownDirective { at, .. }
            | SalaError::UnknownInstruction { at, .. }
            | SalaError::UnexpectedToken { at, .. }
            | SalaError::StackUnderflow { at }
            | SalaError::InvalidTypes { at, .. }
            | SalaError::DivisionByZero { at }
            | SalaError::NegativeRepeat { at }
            | SalaError::TextTooLong { at, .. }
            | SalaError::IntegerOutOfRange { at, .. }
            | SalaError::UnknownLabel { at, .. }
            | SalaError::Output { at, .. } => *at,
        }
    }
}
