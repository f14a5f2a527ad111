//! sala common types.
//!
//! Types passed between the lexer, the shape checks, and the VM:
//!
//! - [`Token`], [`TokenKind`], [`Position`] — lexemes and where they came from
//! - [`Value`] — an int, float, or text on the value stack
//! - [`SalaError`] — every fatal error, from lexing to execution
//!
//! Every [`SalaError`] carries the [`Position`] of the token it blames, so
//! the lexer, the shape checks, and the VM all report `error on line L, col C`.

pub mod error;
pub mod token;
pub mod value;

pub use error::SalaError;
pub use token::{Position, Token, TokenKind};
pub use value::Value;
