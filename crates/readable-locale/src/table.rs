use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::id::StringId;
use crate::localizer::Localizer;
use crate::template;

const ENGLISH_TOML: &str = include_str!("../locales/en.toml");

/// One locale's complete set of unit names and templates.
///
/// Every [`StringId`] has a validated entry, so lookups on a table never miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTable {
    locale: String,
    decimal_separator: char,
    /// Indexed by `StringId as usize`.
    strings: Vec<String>,
}

/// On-disk schema of a string table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StringTableFile {
    locale: String,
    #[serde(default = "default_decimal_separator")]
    decimal_separator: char,
    units: BTreeMap<String, String>,
    templates: BTreeMap<String, String>,
}

fn default_decimal_separator() -> char {
    '.'
}

impl StringTable {
    /// The embedded English table.
    pub fn english() -> Result<Self> {
        Self::from_toml_str(ENGLISH_TOML).context("embedded English table is invalid")
    }

    /// Parse and validate table TOML.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let file: StringTableFile =
            toml::from_str(input).context("failed to parse string table TOML")?;
        let table = Self::from_file(file)?;
        table.validate()?;
        Ok(table)
    }

    /// Load and validate a table from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read string table at {}", path.display()))?;

        Self::from_toml_str(&raw)
            .with_context(|| format!("invalid string table at {}", path.display()))
    }

    fn from_file(file: StringTableFile) -> Result<Self> {
        for key in file.units.keys() {
            if !StringId::ALL.iter().any(|id| id.is_unit() && id.key() == key) {
                bail!("unknown key units.{key}");
            }
        }
        for key in file.templates.keys() {
            if !StringId::ALL.iter().any(|id| !id.is_unit() && id.key() == key) {
                bail!("unknown key templates.{key}");
            }
        }

        let mut strings = Vec::with_capacity(StringId::COUNT);
        for id in StringId::ALL {
            let (section, map) = if id.is_unit() {
                ("units", &file.units)
            } else {
                ("templates", &file.templates)
            };
            let value = map
                .get(id.key())
                .with_context(|| format!("missing {section}.{} in string table", id.key()))?;
            strings.push(value.clone());
        }

        Ok(Self {
            locale: file.locale,
            decimal_separator: file.decimal_separator,
            strings,
        })
    }

    /// Validate the locale tag and every string.
    ///
    /// Templates must parse and reference exactly the placeholders
    /// `{0}..{arity-1}`.
    pub fn validate(&self) -> Result<()> {
        validate_tag(&self.locale)?;

        if self.decimal_separator.is_ascii_digit() || self.decimal_separator.is_whitespace() {
            bail!(
                "decimal_separator {:?} must not be a digit or whitespace",
                self.decimal_separator
            );
        }

        for id in StringId::ALL {
            let value = &self.strings[id as usize];
            if value.trim().is_empty() {
                bail!("{} must not be empty", id.key());
            }
            if id.is_unit() {
                continue;
            }

            let found = template::placeholders(value)
                .map_err(|_| anyhow::anyhow!("template {} is malformed: {value:?}", id.key()))?;
            let expected: Vec<usize> = (0..id.arity()).collect();
            if found.iter().copied().ne(expected.iter().copied()) {
                bail!(
                    "template {} must use placeholders {:?}, found {:?}",
                    id.key(),
                    expected,
                    found
                );
            }
        }

        Ok(())
    }

    /// Locale tag as written in the table, e.g. `"de"` or `"pt-BR"`.
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl Localizer for StringTable {
    fn lookup(&self, id: StringId) -> Option<&str> {
        self.strings.get(id as usize).map(String::as_str)
    }

    fn decimal_separator(&self) -> char {
        self.decimal_separator
    }
}

/// Lowercase a tag and use `-` between subtags.
pub(crate) fn normalize_tag(tag: &str) -> String {
    tag.trim().replace('_', "-").to_ascii_lowercase()
}

fn validate_tag(tag: &str) -> Result<()> {
    if tag.trim().is_empty() {
        bail!("locale must not be empty");
    }
    let valid = tag.split(['-', '_']).all(|subtag| {
        !subtag.is_empty() && subtag.chars().all(|c| c.is_ascii_alphanumeric())
    });
    if !valid {
        bail!("locale {tag:?} is not a valid language tag");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GERMAN_TOML: &str = include_str!("../locales/de.toml");

    #[test]
    fn english_table_is_valid() {
        let en = StringTable::english().unwrap();
        assert_eq!(en.locale(), "en");
        assert_eq!(en.decimal_separator(), '.');
        assert_eq!(en.text(StringId::PetabyteShort).unwrap(), "PB");
    }

    #[test]
    fn english_renders_day_hours() {
        let en = StringTable::english().unwrap();
        assert_eq!(
            en.render(StringId::DurationDayHours, &[&1, &5]).unwrap(),
            "1 day 5 hrs"
        );
    }

    #[test]
    fn german_table_is_valid() {
        let de = StringTable::from_toml_str(GERMAN_TOML).unwrap();
        assert_eq!(de.locale(), "de");
        assert_eq!(de.decimal_separator(), ',');
        assert_eq!(de.text(StringId::KilobyteShort).unwrap(), "kB");
    }

    #[test]
    fn decimal_separator_defaults_to_dot() {
        let raw = ENGLISH_TOML.replace("decimal_separator = \".\"\n", "");
        let table = StringTable::from_toml_str(&raw).unwrap();
        assert_eq!(table.decimal_separator(), '.');
    }

    #[test]
    fn missing_template_is_rejected() {
        let raw = ENGLISH_TOML.replace("duration_seconds = \"{0} secs\"\n", "");
        let err = format!("{:#}", StringTable::from_toml_str(&raw).unwrap_err());
        assert!(err.contains("missing templates.duration_seconds"), "{err}");
    }

    #[test]
    fn unknown_template_key_is_rejected() {
        let raw = ENGLISH_TOML.replace("file_size_suffix =", "byte_suffix =");
        let err = format!("{:#}", StringTable::from_toml_str(&raw).unwrap_err());
        assert!(err.contains("unknown key templates.byte_suffix"), "{err}");
    }

    #[test]
    fn unknown_top_level_field_is_rejected() {
        let raw = format!("region = \"US\"\n{ENGLISH_TOML}");
        let err = format!("{:#}", StringTable::from_toml_str(&raw).unwrap_err());
        assert!(err.contains("failed to parse string table TOML"), "{err}");
    }

    #[test]
    fn template_with_wrong_placeholders_is_rejected() {
        let raw = ENGLISH_TOML.replace("\"{0} day {1} hrs\"", "\"{0} day hrs\"");
        let err = format!("{:#}", StringTable::from_toml_str(&raw).unwrap_err());
        assert!(
            err.contains("template duration_day_hours must use placeholders"),
            "{err}"
        );
    }

    #[test]
    fn malformed_template_is_rejected() {
        let raw = ENGLISH_TOML.replace("\"{0} mins\"", "\"{0 mins\"");
        let err = format!("{:#}", StringTable::from_toml_str(&raw).unwrap_err());
        assert!(err.contains("template duration_minutes is malformed"), "{err}");
    }

    #[test]
    fn empty_unit_is_rejected() {
        let raw = ENGLISH_TOML.replace("terabyte = \"TB\"", "terabyte = \" \"");
        let err = format!("{:#}", StringTable::from_toml_str(&raw).unwrap_err());
        assert!(err.contains("terabyte must not be empty"), "{err}");
    }

    #[test]
    fn invalid_locale_tag_is_rejected() {
        let raw = ENGLISH_TOML.replace("locale = \"en\"", "locale = \"en us\"");
        let err = format!("{:#}", StringTable::from_toml_str(&raw).unwrap_err());
        assert!(err.contains("is not a valid language tag"), "{err}");
    }

    #[test]
    fn digit_separator_is_rejected() {
        let raw = ENGLISH_TOML.replace("decimal_separator = \".\"", "decimal_separator = \"0\"");
        let err = format!("{:#}", StringTable::from_toml_str(&raw).unwrap_err());
        assert!(err.contains("must not be a digit or whitespace"), "{err}");
    }

    #[test]
    fn reordered_placeholders_are_accepted() {
        let raw = ENGLISH_TOML.replace("\"{0} {1}\"", "\"{1}: {0}\"");
        let table = StringTable::from_toml_str(&raw).unwrap();
        assert_eq!(
            table.render(StringId::FileSizeSuffix, &[&"1.00", &"MB"]).unwrap(),
            "MB: 1.00"
        );
    }

    #[test]
    fn from_path_reports_the_file() {
        let path = std::env::temp_dir().join("readable-missing-table.toml");
        let _ = std::fs::remove_file(&path);
        let err = format!("{:#}", StringTable::from_path(&path).unwrap_err());
        assert!(err.contains("failed to read string table"), "{err}");
    }

    #[test]
    fn normalize_tag_lowercases_and_dashes() {
        assert_eq!(normalize_tag(" pt_BR "), "pt-br");
    }
}
