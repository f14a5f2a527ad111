//! sala lexer — source text to token lines.
//!
//! Every physical line is lexed independently. The result keeps one entry
//! per line, blank lines included, so that indices into it are valid
//! instruction-pointer addresses.
//!
//! # Usage
//!
//! ```
//! use sala_common::TokenKind;
//! use sala_lexer::tokenize;
//!
//! let lines = tokenize("push 1\n\n:end\n").unwrap();
//! assert_eq!(lines.len(), 3);
//! assert!(lines[1].is_empty());
//! assert!(lines[2][0].is(TokenKind::Label));
//! ```

mod lexer;

pub use lexer::tokenize_line;

use sala_common::{SalaError, Token};

/// Tokenize a whole program, one token vector per line.
///
/// Returns the first error encountered. A trailing newline does not produce
/// an extra line, and `\r\n` line endings are accepted.
pub fn tokenize(text: &str) -> Result<Vec<Vec<Token>>, SalaError> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| tokenize_line(line, idx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sala_common::{Position, TokenKind};

    #[test]
    fn empty_program() {
        assert_eq!(tokenize("").unwrap(), Vec::<Vec<Token>>::new());
    }

    #[test]
    fn blank_lines_are_kept() {
        let lines = tokenize("push 1\n\n\nprint\n").unwrap();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].is_empty());
        assert!(lines[2].is_empty());
        assert_eq!(lines[3][0].position(), Position::new(3, 0));
    }

    #[test]
    fn crlf_line_endings() {
        let lines = tokenize("push 1\r\nprint\r\n").unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].len(), 1);
        assert!(lines[1][0].is_literal(TokenKind::Word, "print"));
    }

    #[test]
    fn error_reports_correct_line() {
        let err = tokenize("push 1\npush 2\npush @\n").unwrap_err();
        assert_eq!(err.position(), Position::new(2, 5));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use sala_common::TokenKind;

    /// Inverse of the lexer's escape decoding.
    fn escape(text: &str) -> String {
        let mut out = String::new();
        for ch in text.chars() {
            match ch {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\0' => out.push_str("\\0"),
                other => out.push(other),
            }
        }
        out
    }

    fn arb_text() -> impl Strategy<Value = String> {
        let alphabet = vec![
            'a', 'Z', '7', '_', ' ', '\t', ';', '$', ':', '.', '\'', '"', '\\', '\n', '\r', '\0',
            'é',
        ];
        prop::collection::vec(prop::sample::select(alphabet), 0..40)
            .prop_map(|chars| chars.into_iter().collect())
    }

    proptest! {
        /// Lines made only of blanks produce no tokens.
        #[test]
        fn whitespace_lines_are_empty(line in "[ \t\r]*") {
            prop_assert!(tokenize_line(&line, 0).unwrap().is_empty());
        }

        /// Escaping then lexing a string literal yields the original text.
        #[test]
        fn string_escape_roundtrip(text in arb_text()) {
            let line = format!("push \"{}\"", escape(&text));
            let tokens = tokenize_line(&line, 0).unwrap();
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[1].kind(), TokenKind::String);
            prop_assert_eq!(tokens[1].literal(), text.as_str());
        }

        /// Digit runs always lex to a single number token.
        #[test]
        fn digit_runs_are_numbers(digits in "[0-9]{1,30}") {
            let tokens = tokenize_line(&digits, 0).unwrap();
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind(), TokenKind::Number);
            prop_assert_eq!(tokens[0].literal(), digits.as_str());
        }
    }
}
