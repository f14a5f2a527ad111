//! A single argument position of a shape.

use sala_common::{SalaError, Token, TokenKind};

/// Join options for a diagnostic. The caller wraps the result in quotes:
/// `a`, `a' or 'b`, `a', 'b', or 'c`.
pub(crate) fn format_options<'a>(options: impl IntoIterator<Item = &'a str>) -> String {
    let options: Vec<&str> = options.into_iter().collect();
    match options.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first}' or '{second}"),
        [init @ .., last] => format!("{}', or '{last}", init.join("', '")),
    }
}

/// What one argument position accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Expected {
    pub(crate) kinds: Vec<TokenKind>,
    /// Empty means any literal.
    pub(crate) literals: Vec<&'static str>,
    /// Matches every remaining token. Only valid on the last entry.
    pub(crate) trailing: bool,
}

impl Expected {
    pub(crate) fn new(kinds: &[TokenKind], literals: &[&'static str]) -> Self {
        Self {
            kinds: kinds.to_vec(),
            literals: literals.to_vec(),
            trailing: false,
        }
    }

    pub(crate) fn end() -> Self {
        Self::new(&[TokenKind::EndOfLine], &[])
    }

    pub(crate) fn is_end(&self) -> bool {
        self.kinds == [TokenKind::EndOfLine]
    }

    fn format_kinds(&self) -> String {
        format_options(self.kinds.iter().map(|k| k.name()))
    }

    fn format_literals(&self) -> String {
        format_options(self.literals.iter().copied())
    }

    /// Check one token (possibly the end-of-line sentinel) against this entry.
    pub(crate) fn check(&self, token: &Token) -> Result<(), SalaError> {
        let at = token.position();

        if !self.kinds.contains(&token.kind()) {
            if self.is_end() {
                return Err(SalaError::ExpectedEndOfLine {
                    at,
                    found: token.kind(),
                });
            }
            if token.is(TokenKind::EndOfLine) {
                return Err(SalaError::UnexpectedEndOfLine {
                    at,
                    expected: self.format_kinds(),
                });
            }
            return Err(SalaError::UnexpectedKind {
                at,
                expected: self.format_kinds(),
                found: token.kind(),
            });
        }

        if !self.is_end()
            && !self.literals.is_empty()
            && !self.literals.iter().any(|l| *l == token.literal())
        {
            return Err(SalaError::UnexpectedLiteral {
                at,
                expected: self.format_literals(),
                found: token.literal().to_string(),
            });
        }

        Ok(())
    }

    /// Check every remaining token against a trailing entry. Zero tokens is fine.
    pub(crate) fn check_trailing(&self, tokens: &[Token]) -> Result<(), SalaError> {
        match tokens.iter().find(|t| !self.kinds.contains(&t.kind())) {
            Some(bad) => Err(SalaError::UnexpectedKind {
                at: bad.position(),
                expected: self.format_kinds(),
                found: bad.kind(),
            }),
            None => Ok(()),
        }
    }
}
