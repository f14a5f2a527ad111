//! Token model shared by the lexer, the shape validator, and the VM.

use std::fmt;

/// The lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Bare identifier: instruction names, label references, alias names.
    Word,
    /// Unsigned run of ASCII digits.
    Number,
    /// Quoted text literal. The literal holds the decoded contents.
    String,
    /// `.name`
    Directive,
    /// `:name`
    Label,
    /// `$name`, replaced by its target before execution.
    Alias,
    /// Synthetic sentinel standing in for "nothing left on the line".
    EndOfLine,
}

/// All token kinds, in definition order.
pub const ALL_TOKEN_KINDS: [TokenKind; 7] = [
    TokenKind::Word,
    TokenKind::Number,
    TokenKind::String,
    TokenKind::Directive,
    TokenKind::Label,
    TokenKind::Alias,
    TokenKind::EndOfLine,
];

impl TokenKind {
    /// Lower-case name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Word => "word",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Directive => "directive",
            TokenKind::Label => "label",
            TokenKind::Alias => "alias",
            TokenKind::EndOfLine => "end of line",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A source location. Both fields are 0-based; [`fmt::Display`] renders them 1-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, col {}", self.line + 1, self.column + 1)
    }
}

/// An immutable lexeme with its source position.
///
/// Sigils are not part of the literal: `:loop` is a [`TokenKind::Label`]
/// with literal `loop`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    literal: String,
    position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            literal: literal.into(),
            position,
        }
    }

    /// The end-of-line sentinel used while validating argument shapes.
    pub fn end_of_line(position: Position) -> Self {
        Self::new(TokenKind::EndOfLine, "", position)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// True if this token has the given kind.
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// True if this token has the given kind and literal.
    pub fn is_literal(&self, kind: TokenKind, literal: &str) -> bool {
        self.kind == kind && self.literal == literal
    }

    /// Same kind and literal, moved to another position.
    ///
    /// Alias substitution uses this so diagnostics point at the reference
    /// site rather than at the declaration.
    pub fn relocated(&self, position: Position) -> Self {
        Self {
            kind: self.kind,
            literal: self.literal.clone(),
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_display_is_one_based() {
        assert_eq!(Position::new(0, 0).to_string(), "line 1, col 1");
        assert_eq!(Position::new(4, 11).to_string(), "line 5, col 12");
    }

    #[test]
    fn kind_names_are_lower_case() {
        for kind in ALL_TOKEN_KINDS {
            assert_eq!(kind.name(), kind.name().to_lowercase());
        }
        assert_eq!(TokenKind::EndOfLine.to_string(), "end of line");
    }

    #[test]
    fn is_literal_checks_kind_and_text() {
        let t = Token::new(TokenKind::Word, "alias", Position::new(2, 0));
        assert!(t.is(TokenKind::Word));
        assert!(t.is_literal(TokenKind::Word, "alias"));
        assert!(!t.is_literal(TokenKind::Label, "alias"));
        assert!(!t.is_literal(TokenKind::Word, "push"));
    }

    #[test]
    fn relocated_keeps_kind_and_literal() {
        let t = Token::new(TokenKind::Number, "42", Position::new(0, 10));
        let moved = t.relocated(Position::new(7, 5));
        assert_eq!(moved.kind(), TokenKind::Number);
        assert_eq!(moved.literal(), "42");
        assert_eq!(moved.position(), Position::new(7, 5));
    }

    #[test]
    fn end_of_line_sentinel_is_empty() {
        let t = Token::end_of_line(Position::new(1, 3));
        assert!(t.is(TokenKind::EndOfLine));
        assert_eq!(t.literal(), "");
    }
}
