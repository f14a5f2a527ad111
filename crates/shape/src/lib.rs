//! sala shapes — declarative argument validation.
//!
//! A [`Shape`] lists, position by position, which token kinds (and
//! optionally which literals) an instruction or directive accepts after its
//! head token. Checking never mutates anything; it passes or returns the
//! first mismatch as a [`SalaError`].
//!
//! # Usage
//!
//! ```
//! use sala_common::{Position, Token, TokenKind};
//! use sala_shape::Shape;
//!
//! let shape = Shape::new().expect_any(&[TokenKind::Number, TokenKind::String]);
//! let head = Token::new(TokenKind::Word, "push", Position::new(0, 0));
//! let arg = Token::new(TokenKind::Number, "3", Position::new(0, 5));
//!
//! assert!(shape.check(&head, &[arg]).is_ok());
//! assert!(shape.check(&head, &[]).is_err());
//! ```
//!
//! # Arity
//!
//! Unless the last entry is trailing, an end-of-line requirement is implied
//! after the last entry, so extra tokens are rejected. An empty shape accepts
//! only an empty argument list.

mod expected;

use expected::Expected;
use sala_common::{SalaError, Token, TokenKind};

/// The argument shape of an instruction or directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shape {
    expected: Vec<Expected>,
}

impl Shape {
    /// A shape accepting no arguments.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, entry: Expected) -> Self {
        assert!(
            !self.expected.last().is_some_and(|e| e.trailing),
            "a trailing entry must be the last entry of a shape"
        );
        self.expected.push(entry);
        self
    }

    /// Require one token of `kind`.
    pub fn expect(self, kind: TokenKind) -> Self {
        self.expect_any(&[kind])
    }

    /// Require one token of any of `kinds`.
    pub fn expect_any(self, kinds: &[TokenKind]) -> Self {
        self.push(Expected::new(kinds, &[]))
    }

    /// Require one token of `kind` whose literal is one of `literals`.
    pub fn expect_literal(self, kind: TokenKind, literals: &[&'static str]) -> Self {
        self.push(Expected::new(&[kind], literals))
    }

    /// Accept zero or more remaining tokens of any of `kinds`.
    pub fn expect_trailing(self, kinds: &[TokenKind]) -> Self {
        let mut entry = Expected::new(kinds, &[]);
        entry.trailing = true;
        self.push(entry)
    }

    /// Require the line to end here.
    pub fn expect_end(self) -> Self {
        self.push(Expected::end())
    }

    /// Check the arguments following `head` on one line.
    ///
    /// Positions past the end of `args` see an end-of-line sentinel placed
    /// at the last token of the line.
    pub fn check(&self, head: &Token, args: &[Token]) -> Result<(), SalaError> {
        let eol = Token::end_of_line(args.last().unwrap_or(head).position());

        for (i, entry) in self.expected.iter().enumerate() {
            if entry.trailing {
                return entry.check_trailing(args.get(i..).unwrap_or_default());
            }
            entry.check(args.get(i).unwrap_or(&eol))?;
        }

        let ends_explicitly = self.expected.last().is_some_and(Expected::is_end);
        if !ends_explicitly {
            Expected::end().check(args.get(self.expected.len()).unwrap_or(&eol))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sala_common::Position;

    fn head() -> Token {
        Token::new(TokenKind::Word, "op", Position::new(0, 0))
    }

    fn t(kind: TokenKind, col: usize) -> Token {
        Token::new(kind, "x", Position::new(0, col))
    }

    #[test]
    fn empty_shape_accepts_no_args() {
        assert_eq!(Shape::new().check(&head(), &[]), Ok(()));
    }

    #[test]
    fn empty_shape_rejects_args() {
        assert_eq!(
            Shape::new().check(&head(), &[t(TokenKind::Number, 3)]),
            Err(SalaError::ExpectedEndOfLine {
                at: Position::new(0, 3),
                found: TokenKind::Number,
            })
        );
    }

    #[test]
    fn missing_argument_reported_at_last_token() {
        let shape = Shape::new().expect(TokenKind::Word);
        assert_eq!(
            shape.check(&head(), &[]),
            Err(SalaError::UnexpectedEndOfLine {
                at: Position::new(0, 0),
                expected: "word".to_string(),
            })
        );
    }

    #[test]
    fn explicit_end_behaves_like_implicit() {
        let shape = Shape::new().expect(TokenKind::Word).expect_end();
        assert_eq!(shape.check(&head(), &[t(TokenKind::Word, 3)]), Ok(()));
        assert!(shape
            .check(&head(), &[t(TokenKind::Word, 3), t(TokenKind::Word, 5)])
            .is_err());
    }

    #[test]
    fn trailing_accepts_zero_tokens() {
        let shape = Shape::new()
            .expect(TokenKind::Word)
            .expect_trailing(&[TokenKind::Number]);
        assert_eq!(shape.check(&head(), &[t(TokenKind::Word, 3)]), Ok(()));
    }

    #[test]
    #[should_panic(expected = "trailing entry must be the last")]
    fn entries_after_trailing_panic() {
        let _ = Shape::new()
            .expect_trailing(&[TokenKind::Number])
            .expect(TokenKind::Word);
    }
}
