//! Byte counts as localized size strings, e.g. `"1.20 MB"`.

use readable_locale::{LocaleError, Localizer, StringId};
use tracing::{debug, trace};

/// A value above this is reduced to the next tier.
const TIER_THRESHOLD: f32 = 900.0;
const TIER_FACTOR: f32 = 1024.0;

/// Unit tier a byte count is reported in. There is no tier above petabytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeUnit {
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
    Petabyte,
}

impl SizeUnit {
    /// The next larger tier, or `None` at petabytes.
    pub fn next(self) -> Option<Self> {
        match self {
            SizeUnit::Byte => Some(SizeUnit::Kilobyte),
            SizeUnit::Kilobyte => Some(SizeUnit::Megabyte),
            SizeUnit::Megabyte => Some(SizeUnit::Gigabyte),
            SizeUnit::Gigabyte => Some(SizeUnit::Terabyte),
            SizeUnit::Terabyte => Some(SizeUnit::Petabyte),
            SizeUnit::Petabyte => None,
        }
    }

    /// Localizer key of this tier's unit name.
    pub fn string_id(self) -> StringId {
        match self {
            SizeUnit::Byte => StringId::ByteShort,
            SizeUnit::Kilobyte => StringId::KilobyteShort,
            SizeUnit::Megabyte => StringId::MegabyteShort,
            SizeUnit::Gigabyte => StringId::GigabyteShort,
            SizeUnit::Terabyte => StringId::TerabyteShort,
            SizeUnit::Petabyte => StringId::PetabyteShort,
        }
    }
}

/// Reduce a byte count to the smallest tier whose magnitude is at most 900.
///
/// Division is by 1024 per tier and stops at petabytes however large the
/// result. Negative counts never exceed the threshold and stay in bytes.
pub fn reduce(bytes: i64) -> (f32, SizeUnit) {
    let mut value = bytes as f32;
    let mut unit = SizeUnit::Byte;
    while value > TIER_THRESHOLD {
        match unit.next() {
            Some(next) => {
                unit = next;
                value /= TIER_FACTOR;
            }
            None => break,
        }
    }
    (value, unit)
}

/// Digits after the decimal point for a reduced magnitude.
fn decimals(value: f32, shorter: bool) -> usize {
    if value < 1.0 {
        2
    } else if value < 10.0 {
        if shorter {
            1
        } else {
            2
        }
    } else if value < 100.0 {
        if shorter {
            0
        } else {
            2
        }
    } else {
        0
    }
}

fn format_magnitude(value: f32, shorter: bool, separator: char) -> String {
    round_half_up(f64::from(value), decimals(value, shorter), separator)
}

/// Round the shortest decimal form of `value` to `precision` places, with
/// ties going away from zero.
fn round_half_up(value: f64, precision: usize, separator: char) -> String {
    let text = value.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(precision))
        .collect();

    if fraction.as_bytes().get(precision).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - precision;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|&d| char::from(d)));
    if precision > 0 {
        out.push(separator);
        out.extend(digits[split..].iter().map(|&d| char::from(d)));
    }
    out
}

/// Format a byte count as bytes, kilobytes, megabytes, etc.
///
/// Returns an empty string when no localizer is available.
pub fn format_file_size(
    localizer: Option<&dyn Localizer>,
    bytes: i64,
) -> Result<String, LocaleError> {
    format_size(localizer, bytes, false)
}

/// Like [`format_file_size`], but with fewer digits of precision.
pub fn format_short_file_size(
    localizer: Option<&dyn Localizer>,
    bytes: i64,
) -> Result<String, LocaleError> {
    format_size(localizer, bytes, true)
}

fn format_size(
    localizer: Option<&dyn Localizer>,
    bytes: i64,
    shorter: bool,
) -> Result<String, LocaleError> {
    let Some(localizer) = localizer else {
        debug!(bytes, "no localizer for file size, returning empty string");
        return Ok(String::new());
    };

    let (value, unit) = reduce(bytes);
    trace!(bytes, value, ?unit, shorter, "reduced byte count");

    let number = format_magnitude(value, shorter, localizer.decimal_separator());
    let unit_name = localizer.text(unit.string_id())?;
    localizer.render(StringId::FileSizeSuffix, &[&number, &unit_name])
}
