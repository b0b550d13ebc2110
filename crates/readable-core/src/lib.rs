//! Human-readable formatting of byte counts, packed IPv4 addresses and
//! elapsed durations.
//!
//! Every formatter is a pure function of its inputs plus a
//! [`Localizer`](readable_locale::Localizer) lookup, and is safe to call from
//! any thread. The crate also owns the [`logging`] setup shared by binaries.

pub mod elapsed;
pub mod ip;
pub mod logging;
pub mod size;

pub use elapsed::{format_short_duration, format_short_elapsed_time, Elapsed, ShortElapsed};
#[allow(deprecated)]
pub use ip::format_ip_address;
pub use ip::{ipv4_from_packed, packed_from_ipv4};
pub use readable_locale::{LocaleError, Localizer, StringId, StringTable};
pub use size::{format_file_size, format_short_file_size, reduce, SizeUnit};
