//! Positional `{n}` templates with `{{` / `}}` escapes.

use std::collections::BTreeSet;
use std::fmt::{self, Write};

/// One parsed piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Piece<'a> {
    Literal(&'a str),
    Brace(char),
    Arg(usize),
}

/// Why a template could not be parsed or rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TemplateError {
    Malformed { offset: usize },
    UnknownPlaceholder { index: usize },
}

pub(crate) fn parse(template: &str) -> Result<Vec<Piece<'_>>, TemplateError> {
    let bytes = template.as_bytes();
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'{' => {
                if start < pos {
                    pieces.push(Piece::Literal(&template[start..pos]));
                }
                if bytes.get(pos + 1) == Some(&b'{') {
                    pieces.push(Piece::Brace('{'));
                    pos += 2;
                } else {
                    let digits_start = pos + 1;
                    let close = template[digits_start..]
                        .find('}')
                        .map(|i| digits_start + i)
                        .ok_or(TemplateError::Malformed { offset: pos })?;
                    let digits = &template[digits_start..close];
                    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                        return Err(TemplateError::Malformed { offset: pos });
                    }
                    let index = digits
                        .parse()
                        .map_err(|_| TemplateError::Malformed { offset: pos })?;
                    pieces.push(Piece::Arg(index));
                    pos = close + 1;
                }
                start = pos;
            }
            b'}' => {
                if bytes.get(pos + 1) != Some(&b'}') {
                    return Err(TemplateError::Malformed { offset: pos });
                }
                if start < pos {
                    pieces.push(Piece::Literal(&template[start..pos]));
                }
                pieces.push(Piece::Brace('}'));
                pos += 2;
                start = pos;
            }
            _ => pos += 1,
        }
    }

    if start < bytes.len() {
        pieces.push(Piece::Literal(&template[start..]));
    }
    Ok(pieces)
}

/// Placeholder indices referenced by a template.
pub(crate) fn placeholders(template: &str) -> Result<BTreeSet<usize>, TemplateError> {
    Ok(parse(template)?
        .into_iter()
        .filter_map(|piece| match piece {
            Piece::Arg(index) => Some(index),
            _ => None,
        })
        .collect())
}

pub(crate) fn render(template: &str, args: &[&dyn fmt::Display]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len() + 8 * args.len());
    for piece in parse(template)? {
        match piece {
            Piece::Literal(text) => out.push_str(text),
            Piece::Brace(c) => out.push(c),
            Piece::Arg(index) => {
                let arg = args
                    .get(index)
                    .ok_or(TemplateError::UnknownPlaceholder { index })?;
                // Writing into a String cannot fail.
                let _ = write!(out, "{arg}");
            }
        }
    }
    Ok(out)
}
