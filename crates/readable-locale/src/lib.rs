//! Localized unit names and phrase templates for the `readable` formatters.
//!
//! Formatters never hold a global resource table. They receive a
//! [`Localizer`] and ask it for strings by [`StringId`]. The crate ships an
//! embedded English [`StringTable`] and can discover further tables on disk
//! through [`LocaleSet`].
//!
//! # Quick start
//!
//! ```no_run
//! use readable_locale::{Localizer, StringId, StringTable};
//!
//! let en = StringTable::english().unwrap();
//! let phrase = en.render(StringId::DurationDayHours, &[&1, &5]).unwrap();
//! assert_eq!(phrase, "1 day 5 hrs");
//! ```

mod error;
mod id;
mod localizer;
mod set;
mod table;
mod template;

pub use error::LocaleError;
pub use id::StringId;
pub use localizer::Localizer;
pub use set::{LocaleSet, FALLBACK_LOCALE};
pub use table::StringTable;
