use std::fmt;

use crate::error::LocaleError;
use crate::id::StringId;
use crate::template::{self, TemplateError};

/// Source of locale-specific unit names and phrase templates.
///
/// Implementors only provide [`lookup`](Self::lookup); rendering and error
/// mapping come for free. Implementations must be safe for concurrent reads.
pub trait Localizer: Send + Sync {
    /// Raw string or template for `id`, if this locale has one.
    fn lookup(&self, id: StringId) -> Option<&str>;

    /// Character placed between the integer and fractional digits of a number.
    fn decimal_separator(&self) -> char {
        '.'
    }

    /// Plain string for `id`, typically a unit name.
    fn text(&self, id: StringId) -> Result<&str, LocaleError> {
        self.lookup(id).ok_or(LocaleError::Missing(id))
    }

    /// Render the template for `id` with positional arguments.
    ///
    /// `args.len()` must equal [`StringId::arity`].
    fn render(&self, id: StringId, args: &[&dyn fmt::Display]) -> Result<String, LocaleError> {
        if args.len() != id.arity() {
            return Err(LocaleError::ArgumentCount {
                id,
                expected: id.arity(),
                got: args.len(),
            });
        }
        let template = self.text(id)?;
        template::render(template, args).map_err(|err| match err {
            TemplateError::Malformed { offset } => LocaleError::Malformed { id, offset },
            TemplateError::UnknownPlaceholder { index } => {
                LocaleError::UnknownPlaceholder { id, index }
            }
        })
    }
}
