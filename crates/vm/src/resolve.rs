//! Resolution pass: record labels and substitute aliases before execution.

use sala_common::{SalaError, Token, TokenKind};
use sala_shape::Shape;
use std::collections::HashMap;
use tracing::debug;

/// The head word of an alias declaration line.
pub(crate) const ALIAS_KEYWORD: &str = "alias";

/// Label name to line index.
pub(crate) type LabelTable = HashMap<String, usize>;

/// Alias name to target token.
type AliasTable = HashMap<String, Token>;

/// `alias NAME VALUE`
fn alias_shape() -> Shape {
    Shape::new().expect(TokenKind::Word).expect_any(&[
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Word,
        TokenKind::Label,
        TokenKind::Directive,
        TokenKind::Alias,
    ])
}

/// Scan every line once, in order.
///
/// Label lines are recorded, alias lines are recorded, and every other line
/// has its alias references replaced in place. Aliases are visible only to
/// lines after their declaration; labels are visible everywhere.
pub(crate) fn resolve(lines: &mut [Vec<Token>]) -> Result<LabelTable, SalaError> {
    let mut labels = LabelTable::new();
    let mut aliases = AliasTable::new();

    for (idx, line) in lines.iter_mut().enumerate() {
        let Some(head) = line.first() else {
            continue;
        };

        if head.is(TokenKind::Label) {
            define_label(&mut labels, line, idx)?;
        } else if head.is_literal(TokenKind::Word, ALIAS_KEYWORD) {
            alias_shape().check(head, &line[1..])?;
            aliases.insert(line[1].literal().to_string(), line[2].clone());
        } else {
            for token in line.iter_mut().filter(|t| t.is(TokenKind::Alias)) {
                *token = substitute(&aliases, token)?;
            }
        }
    }

    debug!(
        labels = labels.len(),
        aliases = aliases.len(),
        "resolved program"
    );
    Ok(labels)
}

fn define_label(labels: &mut LabelTable, line: &[Token], idx: usize) -> Result<(), SalaError> {
    let label = &line[0];
    let at = label.position();

    if labels.contains_key(label.literal()) {
        return Err(SalaError::LabelAlreadyDefined {
            at,
            name: label.literal().to_string(),
        });
    }
    if line.len() > 1 {
        return Err(SalaError::LabelNotAlone { at });
    }
    if label.literal().is_empty() {
        return Err(SalaError::EmptyLabel { at });
    }

    labels.insert(label.literal().to_string(), idx);
    Ok(())
}

/// The alias target, moved to the reference's position.
fn substitute(aliases: &AliasTable, reference: &Token) -> Result<Token, SalaError> {
    let at = reference.position();
    let target = aliases
        .get(reference.literal())
        .ok_or_else(|| SalaError::UnknownAlias {
            at,
            name: reference.literal().to_string(),
        })?;

    if target.is(TokenKind::Alias) {
        return Err(SalaError::AliasChain {
            at,
            name: reference.literal().to_string(),
        });
    }

    Ok(target.relocated(at))
}
