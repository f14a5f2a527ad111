//! Directives: `.name` lines that register metadata before any code.

use crate::machine::Flow;
use sala_common::{SalaError, Token, TokenKind};
use sala_shape::Shape;

/// Program metadata registered by directives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Set by `.title "..."`.
    pub title: Option<String>,
}

/// The directive table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `.title STRING`
    Title,
}

/// All directives, in definition order.
pub const ALL_DIRECTIVES: [Directive; 1] = [Directive::Title];

impl Directive {
    pub fn name(self) -> &'static str {
        match self {
            Directive::Title => "title",
        }
    }

    pub fn lookup(name: &str) -> Option<Self> {
        ALL_DIRECTIVES.iter().find(|d| d.name() == name).copied()
    }

    pub fn shape(self) -> Shape {
        match self {
            Directive::Title => Shape::new().expect(TokenKind::String),
        }
    }

    /// Run the directive. Arguments have already been checked against
    /// [`Directive::shape`].
    pub(crate) fn apply(self, metadata: &mut Metadata, args: &[Token]) -> Result<Flow, SalaError> {
        match self {
            Directive::Title => {
                metadata.title = Some(args[0].literal().to_string());
            }
        }
        Ok(Flow::Next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sala_common::Position;

    #[test]
    fn lookup_by_name() {
        assert_eq!(Directive::lookup("title"), Some(Directive::Title));
        assert_eq!(Directive::lookup("Title"), None);
        assert_eq!(Directive::lookup("include"), None);
    }

    #[test]
    fn title_records_metadata() {
        let mut metadata = Metadata::default();
        let args = [Token::new(TokenKind::String, "demo", Position::new(0, 7))];
        let flow = Directive::Title.apply(&mut metadata, &args).unwrap();
        assert_eq!(flow, Flow::Next);
        assert_eq!(metadata.title.as_deref(), Some("demo"));
    }
}
