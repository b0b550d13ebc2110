//! Elapsed durations as short localized phrases, e.g. `"1 day 5 hrs"`.
//!
//! A phrase names at most two units and goes down to seconds. When the finer
//! unit is dropped it is rounded into the coarser one.

use std::time::Duration;

use readable_locale::{LocaleError, Localizer, StringId};
use tracing::trace;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * 60;
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// A duration split into whole units, truncated to the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Elapsed {
    pub days: u64,
    /// Always in `0..24`.
    pub hours: u64,
    /// Always in `0..60`.
    pub minutes: u64,
    /// Always in `0..60`.
    pub seconds: u64,
}

impl Elapsed {
    pub fn from_millis(millis: u64) -> Self {
        let mut remaining = millis / 1000;

        let days = remaining / SECONDS_PER_DAY;
        remaining -= days * SECONDS_PER_DAY;
        let hours = remaining / SECONDS_PER_HOUR;
        remaining -= hours * SECONDS_PER_HOUR;
        let minutes = remaining / SECONDS_PER_MINUTE;
        remaining -= minutes * SECONDS_PER_MINUTE;

        Self {
            days,
            hours,
            minutes,
            seconds: remaining,
        }
    }
}

/// The phrase shape chosen for an [`Elapsed`], with rounding already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortElapsed {
    /// Two days or more; hours rounded in.
    Days(u64),
    /// One day plus hours.
    DayHours { days: u64, hours: u64 },
    /// Two hours or more; minutes rounded in.
    Hours(u64),
    HourMinutes { hours: u64, minutes: u64 },
    /// Two minutes or more; seconds rounded in.
    Minutes(u64),
    MinuteSeconds { minutes: u64, seconds: u64 },
    Seconds(u64),
}

impl ShortElapsed {
    /// Pick the phrase for `elapsed`. The first matching rule wins.
    pub fn select(elapsed: Elapsed) -> Self {
        let Elapsed {
            days,
            hours,
            minutes,
            seconds,
        } = elapsed;

        if days >= 2 {
            ShortElapsed::Days(days + (hours + 12) / 24)
        } else if days >= 1 {
            ShortElapsed::DayHours { days, hours }
        } else if hours >= 2 {
            ShortElapsed::Hours(hours + (minutes + 30) / 60)
        } else if hours >= 1 {
            ShortElapsed::HourMinutes { hours, minutes }
        } else if minutes >= 2 {
            ShortElapsed::Minutes(minutes + (seconds + 30) / 60)
        } else if minutes >= 1 {
            ShortElapsed::MinuteSeconds { minutes, seconds }
        } else {
            ShortElapsed::Seconds(seconds)
        }
    }

    /// Template for this phrase. Singular forms are picked when the trailing
    /// count is exactly one.
    pub fn string_id(self) -> StringId {
        match self {
            ShortElapsed::Days(_) => StringId::DurationDays,
            ShortElapsed::DayHours { hours: 1, .. } => StringId::DurationDayHour,
            ShortElapsed::DayHours { .. } => StringId::DurationDayHours,
            ShortElapsed::Hours(_) => StringId::DurationHours,
            ShortElapsed::HourMinutes { minutes: 1, .. } => StringId::DurationHourMinute,
            ShortElapsed::HourMinutes { .. } => StringId::DurationHourMinutes,
            ShortElapsed::Minutes(_) => StringId::DurationMinutes,
            ShortElapsed::MinuteSeconds { seconds: 1, .. } => StringId::DurationMinuteSecond,
            ShortElapsed::MinuteSeconds { .. } => StringId::DurationMinuteSeconds,
            ShortElapsed::Seconds(1) => StringId::DurationSecond,
            ShortElapsed::Seconds(_) => StringId::DurationSeconds,
        }
    }

    pub fn render(self, localizer: &dyn Localizer) -> Result<String, LocaleError> {
        let id = self.string_id();
        match self {
            ShortElapsed::Days(n)
            | ShortElapsed::Hours(n)
            | ShortElapsed::Minutes(n)
            | ShortElapsed::Seconds(n) => localizer.render(id, &[&n]),
            ShortElapsed::DayHours {
                days: major,
                hours: minor,
            }
            | ShortElapsed::HourMinutes {
                hours: major,
                minutes: minor,
            }
            | ShortElapsed::MinuteSeconds {
                minutes: major,
                seconds: minor,
            } => localizer.render(id, &[&major, &minor]),
        }
    }
}

/// Short phrase for an elapsed time in milliseconds, e.g. `"1 day 5 hrs"`.
pub fn format_short_elapsed_time(
    localizer: &dyn Localizer,
    millis: u64,
) -> Result<String, LocaleError> {
    let elapsed = Elapsed::from_millis(millis);
    let phrase = ShortElapsed::select(elapsed);
    trace!(millis, ?elapsed, ?phrase, "selected elapsed phrase");
    phrase.render(localizer)
}

/// [`format_short_elapsed_time`] for a [`Duration`]. Durations longer than
/// `u64::MAX` milliseconds saturate.
pub fn format_short_duration(
    localizer: &dyn Localizer,
    duration: Duration,
) -> Result<String, LocaleError> {
    let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
    format_short_elapsed_time(localizer, millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use readable_locale::StringTable;

    const SECOND: u64 = 1000;
    const MINUTE: u64 = 60 * SECOND;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;

    fn en(millis: u64) -> String {
        let table = StringTable::english().unwrap();
        format_short_elapsed_time(&table, millis).unwrap()
    }

    #[test]
    fn decomposition_truncates_milliseconds() {
        assert_eq!(
            Elapsed::from_millis(DAY + 2 * HOUR + 3 * MINUTE + 4 * SECOND + 999),
            Elapsed {
                days: 1,
                hours: 2,
                minutes: 3,
                seconds: 4,
            }
        );
    }

    #[test]
    fn zero_is_plural_seconds() {
        assert_eq!(en(0), "0 secs");
        assert_eq!(en(999), "0 secs");
    }

    #[test]
    fn one_second_is_singular() {
        assert_eq!(en(SECOND), "1 sec");
        assert_eq!(en(1_999), "1 sec");
    }

    #[test]
    fn seconds_only() {
        assert_eq!(en(59 * SECOND), "59 secs");
    }

    #[test]
    fn one_minute_shows_seconds() {
        assert_eq!(en(MINUTE), "1 min 0 secs");
        assert_eq!(en(MINUTE + SECOND), "1 min 1 sec");
        assert_eq!(en(MINUTE + 59 * SECOND), "1 min 59 secs");
    }

    #[test]
    fn minutes_round_on_thirty_seconds() {
        assert_eq!(en(2 * MINUTE + 29 * SECOND), "2 mins");
        assert_eq!(en(2 * MINUTE + 30 * SECOND), "3 mins");
        assert_eq!(en(59 * MINUTE + 30 * SECOND), "60 mins");
    }

    #[test]
    fn one_hour_shows_minutes() {
        assert_eq!(en(HOUR), "1 hr 0 mins");
        assert_eq!(en(HOUR + MINUTE), "1 hr 1 min");
        assert_eq!(en(HOUR + 59 * MINUTE + 59 * SECOND), "1 hr 59 mins");
    }

    #[test]
    fn hours_round_on_thirty_minutes() {
        assert_eq!(en(2 * HOUR + 29 * MINUTE), "2 hrs");
        assert_eq!(en(2 * HOUR + 30 * MINUTE), "3 hrs");
        assert_eq!(en(23 * HOUR + 59 * MINUTE), "24 hrs");
    }

    #[test]
    fn one_day_shows_hours() {
        assert_eq!(en(DAY), "1 day 0 hrs");
        assert_eq!(en(DAY + HOUR), "1 day 1 hr");
        assert_eq!(en(DAY + 5 * HOUR + 59 * MINUTE), "1 day 5 hrs");
    }

    #[test]
    fn days_round_on_twelve_hours() {
        assert_eq!(en(2 * DAY + 11 * HOUR), "2 days");
        assert_eq!(en(2 * DAY + 12 * HOUR), "3 days");
        assert_eq!(en(2 * DAY + 13 * HOUR), "3 days");
    }

    #[test]
    fn select_reports_rounded_counts() {
        let elapsed = Elapsed::from_millis(2 * DAY + 13 * HOUR);
        assert_eq!(ShortElapsed::select(elapsed), ShortElapsed::Days(3));
    }

    #[test]
    fn singular_is_chosen_by_equality_with_one() {
        assert_eq!(
            ShortElapsed::DayHours { days: 1, hours: 1 }.string_id(),
            StringId::DurationDayHour
        );
        assert_eq!(
            ShortElapsed::DayHours { days: 1, hours: 0 }.string_id(),
            StringId::DurationDayHours
        );
        assert_eq!(ShortElapsed::Seconds(0).string_id(), StringId::DurationSeconds);
    }

    #[test]
    fn huge_inputs_stay_in_days() {
        // 213503982334 days 14 hours, rounded up.
        assert_eq!(en(u64::MAX), "213503982335 days");
    }

    #[test]
    fn duration_convenience_matches_millis() {
        let table = StringTable::english().unwrap();
        assert_eq!(
            format_short_duration(&table, Duration::from_secs(90)).unwrap(),
            "1 min 30 secs"
        );
    }

    #[test]
    fn german_phrases() {
        let de = StringTable::from_toml_str(include_str!(
            "../../readable-locale/locales/de.toml"
        ))
        .unwrap();
        assert_eq!(
            format_short_elapsed_time(&de, DAY + 5 * HOUR).unwrap(),
            "1 Tag 5 Std."
        );
        assert_eq!(format_short_elapsed_time(&de, 4 * DAY).unwrap(), "4 Tage");
    }

    #[test]
    fn missing_template_propagates() {
        struct Empty;
        impl Localizer for Empty {
            fn lookup(&self, _id: StringId) -> Option<&str> {
                None
            }
        }
        assert_eq!(
            format_short_elapsed_time(&Empty, 0),
            Err(LocaleError::Missing(StringId::DurationSeconds))
        );
    }
}
