//! Single-line scanner.

use sala_common::{Position, SalaError, Token, TokenKind};

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Left-to-right scanner over one physical line with one character of lookahead.
struct LineLexer {
    chars: Vec<char>,
    idx: usize,
    line: usize,
}

impl LineLexer {
    fn new(text: &str, line: usize) -> Self {
        Self {
            chars: text.chars().collect(),
            idx: 0,
            line,
        }
    }

    /// The current character, or `None` once the line is exhausted.
    fn current(&self) -> Option<char> {
        match self.chars.get(self.idx) {
            Some('\n') | None => None,
            Some(&ch) => Some(ch),
        }
    }

    fn advance(&mut self) {
        self.idx += 1;
    }

    fn here(&self) -> Position {
        Position::new(self.line, self.idx)
    }

    fn lex(mut self) -> Result<Vec<Token>, SalaError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.current() {
            match ch {
                ' ' | '\t' | '\r' => self.advance(),
                '"' => tokens.push(self.collect_string()?),
                c if c.is_ascii_digit() => tokens.push(self.collect_number()),
                '.' => tokens.push(self.collect_word(TokenKind::Directive)),
                ':' => tokens.push(self.collect_word(TokenKind::Label)),
                '$' => tokens.push(self.collect_word(TokenKind::Alias)),
                c if is_word_char(c) => tokens.push(self.collect_word(TokenKind::Word)),
                ';' => break,
                other => {
                    return Err(SalaError::IllegalCharacter {
                        at: self.here(),
                        ch: other,
                    })
                }
            }
        }

        Ok(tokens)
    }

    /// Collect a maximal run of word characters. Sigil kinds skip their
    /// leading character first; the sigil is not part of the literal.
    fn collect_word(&mut self, kind: TokenKind) -> Token {
        let start = self.here();
        if kind != TokenKind::Word {
            self.advance();
        }

        let mut literal = String::new();
        while let Some(ch) = self.current().filter(|&c| is_word_char(c)) {
            literal.push(ch);
            self.advance();
        }

        Token::new(kind, literal, start)
    }

    fn collect_number(&mut self) -> Token {
        let start = self.here();
        let mut literal = String::new();
        while let Some(ch) = self.current().filter(char::is_ascii_digit) {
            literal.push(ch);
            self.advance();
        }
        Token::new(TokenKind::Number, literal, start)
    }

    fn collect_string(&mut self) -> Result<Token, SalaError> {
        let start = self.here();
        let mut literal = String::new();
        self.advance();

        loop {
            match self.current() {
                None => return Err(SalaError::UnterminatedString { at: start }),
                Some('"') => {
                    self.advance();
                    return Ok(Token::new(TokenKind::String, literal, start));
                }
                Some('\\') => {
                    self.advance();
                    let Some(escaped) = self.current() else {
                        return Err(SalaError::UnterminatedString { at: start });
                    };
                    let decoded = match escaped {
                        '\\' | '\'' | '"' => escaped,
                        'n' => '\n',
                        'r' => '\r',
                        '0' => '\0',
                        other => {
                            return Err(SalaError::InvalidEscape {
                                at: self.here(),
                                ch: other,
                            })
                        }
                    };
                    literal.push(decoded);
                    self.advance();
                }
                Some(ch) => {
                    literal.push(ch);
                    self.advance();
                }
            }
        }
    }
}

/// Tokenize a single line of source text.
///
/// Returns an empty Vec for blank lines and comment-only lines.
/// Comments start with `;` and extend to end of line.
pub fn tokenize_line(line: &str, line_index: usize) -> Result<Vec<Token>, SalaError> {
    LineLexer::new(line, line_index).lex()
}
