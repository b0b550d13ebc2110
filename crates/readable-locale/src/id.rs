/// Every string a formatter can ask a [`Localizer`](crate::Localizer) for.
///
/// Variant order matches the slots in a [`StringTable`](crate::StringTable),
/// so `id as usize` is a valid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StringId {
    /// Unit name for bytes (`"B"`).
    ByteShort = 0,
    /// Unit name for kilobytes (`"KB"`).
    KilobyteShort = 1,
    /// Unit name for megabytes (`"MB"`).
    MegabyteShort = 2,
    /// Unit name for gigabytes (`"GB"`).
    GigabyteShort = 3,
    /// Unit name for terabytes (`"TB"`).
    TerabyteShort = 4,
    /// Unit name for petabytes (`"PB"`).
    PetabyteShort = 5,
    /// Size with unit: `{0}` number, `{1}` unit name.
    FileSizeSuffix = 6,
    /// `{0}` days.
    DurationDays = 7,
    /// `{0}` days and exactly one hour `{1}`.
    DurationDayHour = 8,
    /// `{0}` days and `{1}` hours.
    DurationDayHours = 9,
    /// `{0}` hours.
    DurationHours = 10,
    /// `{0}` hours and exactly one minute `{1}`.
    DurationHourMinute = 11,
    /// `{0}` hours and `{1}` minutes.
    DurationHourMinutes = 12,
    /// `{0}` minutes.
    DurationMinutes = 13,
    /// `{0}` minutes and exactly one second `{1}`.
    DurationMinuteSecond = 14,
    /// `{0}` minutes and `{1}` seconds.
    DurationMinuteSeconds = 15,
    /// Exactly one second.
    DurationSecond = 16,
    /// `{0}` seconds.
    DurationSeconds = 17,
}

impl StringId {
    /// Total number of string identifiers.
    pub const COUNT: usize = 18;

    /// All identifiers in ordinal order.
    pub const ALL: [StringId; Self::COUNT] = [
        StringId::ByteShort,
        StringId::KilobyteShort,
        StringId::MegabyteShort,
        StringId::GigabyteShort,
        StringId::TerabyteShort,
        StringId::PetabyteShort,
        StringId::FileSizeSuffix,
        StringId::DurationDays,
        StringId::DurationDayHour,
        StringId::DurationDayHours,
        StringId::DurationHours,
        StringId::DurationHourMinute,
        StringId::DurationHourMinutes,
        StringId::DurationMinutes,
        StringId::DurationMinuteSecond,
        StringId::DurationMinuteSeconds,
        StringId::DurationSecond,
        StringId::DurationSeconds,
    ];

    /// Key used for this string in a table file.
    pub fn key(self) -> &'static str {
        match self {
            StringId::ByteShort => "byte",
            StringId::KilobyteShort => "kilobyte",
            StringId::MegabyteShort => "megabyte",
            StringId::GigabyteShort => "gigabyte",
            StringId::TerabyteShort => "terabyte",
            StringId::PetabyteShort => "petabyte",
            StringId::FileSizeSuffix => "file_size_suffix",
            StringId::DurationDays => "duration_days",
            StringId::DurationDayHour => "duration_day_hour",
            StringId::DurationDayHours => "duration_day_hours",
            StringId::DurationHours => "duration_hours",
            StringId::DurationHourMinute => "duration_hour_minute",
            StringId::DurationHourMinutes => "duration_hour_minutes",
            StringId::DurationMinutes => "duration_minutes",
            StringId::DurationMinuteSecond => "duration_minute_second",
            StringId::DurationMinuteSeconds => "duration_minute_seconds",
            StringId::DurationSecond => "duration_second",
            StringId::DurationSeconds => "duration_seconds",
        }
    }

    /// True for plain unit names, false for templates.
    pub fn is_unit(self) -> bool {
        (self as usize) <= StringId::PetabyteShort as usize
    }

    /// Number of arguments the string takes. Unit names take none.
    pub fn arity(self) -> usize {
        match self {
            StringId::ByteShort
            | StringId::KilobyteShort
            | StringId::MegabyteShort
            | StringId::GigabyteShort
            | StringId::TerabyteShort
            | StringId::PetabyteShort => 0,
            StringId::FileSizeSuffix
            | StringId::DurationDayHour
            | StringId::DurationDayHours
            | StringId::DurationHourMinute
            | StringId::DurationHourMinutes
            | StringId::DurationMinuteSecond
            | StringId::DurationMinuteSeconds => 2,
            StringId::DurationDays
            | StringId::DurationHours
            | StringId::DurationMinutes
            | StringId::DurationSecond
            | StringId::DurationSeconds => 1,
        }
    }
}
