use std::fmt;

use crate::id::StringId;

/// Failure to produce a localized string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// The localizer has no string for this id.
    Missing(StringId),
    /// The template has a stray brace or a non-numeric placeholder.
    Malformed {
        id: StringId,
        offset: usize,
    },
    /// The template references an argument that was not supplied.
    UnknownPlaceholder {
        id: StringId,
        index: usize,
    },
    /// The caller supplied the wrong number of arguments for this id.
    ArgumentCount {
        id: StringId,
        expected: usize,
        got: usize,
    },
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(id) => write!(f, "no localized string for {}", id.key()),
            Self::Malformed { id, offset } => write!(
                f,
                "template {} is malformed at byte {offset}",
                id.key()
            ),
            Self::UnknownPlaceholder { id, index } => write!(
                f,
                "template {} references missing argument {{{index}}}",
                id.key()
            ),
            Self::ArgumentCount { id, expected, got } => write!(
                f,
                "template {} takes {expected} argument(s) but {got} were supplied",
                id.key()
            ),
        }
    }
}

impl std::error::Error for LocaleError {}
