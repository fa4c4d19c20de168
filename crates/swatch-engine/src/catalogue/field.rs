//! The five categorical swatch fields and their ordering rules.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::record::SwatchRecord;

/// A categorical metadata field of a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Dyestuff,
    Ph,
    Mordant,
    Additive,
    ExposureTime,
}

/// How the distinct values of a field are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrdering {
    /// Case-insensitive alphabetic, ties broken by exact byte order
    Alphabetic,
    /// Acidic, Neutral, Alkaline. Unrecognised labels sort ahead of all three.
    Acidity,
    /// Parsed duration in minutes ("30m", "12h" = 720). Unparseable labels count as 0.
    Minutes,
}

const ACIDITY: [&str; 3] = ["Acidic", "Neutral", "Alkaline"];

impl Field {
    /// All fields, in canonical order.
    pub const ALL: [Field; 5] = [
        Field::Dyestuff,
        Field::Ph,
        Field::Mordant,
        Field::Additive,
        Field::ExposureTime,
    ];

    /// Position of this field in [`Field::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column name used by the metadata table and exports.
    pub fn key(self) -> &'static str {
        match self {
            Field::Dyestuff => "dyestuff",
            Field::Ph => "pH",
            Field::Mordant => "mordant",
            Field::Additive => "additive",
            Field::ExposureTime => "time",
        }
    }

    /// Human-readable axis title.
    pub fn title(self) -> &'static str {
        match self {
            Field::Dyestuff => "Dyestuff",
            Field::Ph => "pH",
            Field::Mordant => "Mordant",
            Field::Additive => "Additive",
            Field::ExposureTime => "Time",
        }
    }

    /// The record's value for this field.
    pub fn value(self, record: &SwatchRecord) -> &str {
        match self {
            Field::Dyestuff => &record.dyestuff,
            Field::Ph => &record.ph,
            Field::Mordant => &record.mordant,
            Field::Additive => &record.additive,
            Field::ExposureTime => &record.exposure_time,
        }
    }

    /// Comparator used when ordering this field's distinct values.
    pub fn ordering(self) -> FieldOrdering {
        match self {
            Field::Dyestuff | Field::Mordant | Field::Additive => FieldOrdering::Alphabetic,
            Field::Ph => FieldOrdering::Acidity,
            Field::ExposureTime => FieldOrdering::Minutes,
        }
    }

    /// Annotated label for display. The raw value is still what filters match on.
    ///
    /// ```
    /// use swatch_engine::Field;
    /// assert_eq!(Field::Ph.display_label("Acidic"), "Acidic (~pH3)");
    /// assert_eq!(Field::ExposureTime.display_label("12h"), "12h (~720m)");
    /// assert_eq!(Field::Mordant.display_label("Alum"), "Alum");
    /// ```
    pub fn display_label(self, value: &str) -> Cow<'_, str> {
        match (self, value) {
            (Field::Ph, "Acidic") => Cow::Borrowed("Acidic (~pH3)"),
            (Field::Ph, "Neutral") => Cow::Borrowed("Neutral (~pH7)"),
            (Field::Ph, "Alkaline") => Cow::Borrowed("Alkaline (~pH9)"),
            (Field::ExposureTime, "12h") => Cow::Borrowed("12h (~720m)"),
            (_, v) => Cow::Owned(v.to_string()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error for an unrecognised field name.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseFieldError(pub String);

impl fmt::Display for ParseFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown field '{}' (expected dyestuff, pH, mordant, additive or time)",
            self.0
        )
    }
}

impl std::error::Error for ParseFieldError {}

impl FromStr for Field {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dyestuff" | "dye" => Ok(Field::Dyestuff),
            "ph" => Ok(Field::Ph),
            "mordant" => Ok(Field::Mordant),
            "additive" => Ok(Field::Additive),
            "time" | "exposure" | "exposuretime" | "exposure_time" => Ok(Field::ExposureTime),
            _ => Err(ParseFieldError(s.to_string())),
        }
    }
}

impl FieldOrdering {
    /// Compare two raw field values.
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            FieldOrdering::Alphabetic => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            FieldOrdering::Acidity => acidity_rank(a).cmp(&acidity_rank(b)),
            FieldOrdering::Minutes => exposure_minutes(a)
                .unwrap_or(0)
                .cmp(&exposure_minutes(b).unwrap_or(0)),
        }
    }
}

fn acidity_rank(value: &str) -> i32 {
    ACIDITY
        .iter()
        .position(|&v| v == value)
        .map_or(-1, |p| p as i32)
}

/// Parse an exposure label such as `"30m"`, `"90 m"` or `"12h"` into minutes.
///
/// The first run of digits is the count; the next non-space character is the
/// unit (`m` minutes, `h` hours). Anything else yields `None`.
///
/// ```
/// use swatch_engine::exposure_minutes;
/// assert_eq!(exposure_minutes("90m"), Some(90));
/// assert_eq!(exposure_minutes("12h"), Some(720));
/// assert_eq!(exposure_minutes("overnight"), None);
/// ```
pub fn exposure_minutes(label: &str) -> Option<u32> {
    let start = label.find(|c: char| c.is_ascii_digit())?;
    let rest = &label[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let count: u32 = rest[..end].parse().ok()?;
    match rest[end..].trim_start().chars().next() {
        Some('m') | Some('M') => Some(count),
        Some('h') | Some('H') => count.checked_mul(60),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exposure_minutes() {
        assert_eq!(exposure_minutes("30m"), Some(30));
        assert_eq!(exposure_minutes("60 m"), Some(60));
        assert_eq!(exposure_minutes("2h"), Some(120));
        assert_eq!(exposure_minutes("12h"), Some(720));
        assert_eq!(exposure_minutes("~45m"), Some(45));
        assert_eq!(exposure_minutes("45"), None);
        assert_eq!(exposure_minutes(""), None);
    }

    #[test]
    fn test_minutes_ordering() {
        let o = FieldOrdering::Minutes;
        assert_eq!(o.compare("90m", "12h"), Ordering::Less);
        assert_eq!(o.compare("30m", "30 m"), Ordering::Equal);
        // Unparseable counts as zero
        assert_eq!(o.compare("n/a", "5m"), Ordering::Less);
    }

    #[test]
    fn test_acidity_ordering() {
        let o = FieldOrdering::Acidity;
        assert_eq!(o.compare("Acidic", "Alkaline"), Ordering::Less);
        assert_eq!(o.compare("Alkaline", "Neutral"), Ordering::Greater);
        assert_eq!(o.compare("Unknown", "Acidic"), Ordering::Less);
    }

    #[test]
    fn test_alphabetic_is_case_insensitive() {
        let o = FieldOrdering::Alphabetic;
        assert_eq!(o.compare("alum", "Iron"), Ordering::Less);
        assert_eq!(o.compare("Iron", "iron"), Ordering::Less);
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("pH".parse::<Field>(), Ok(Field::Ph));
        assert_eq!("Time".parse::<Field>(), Ok(Field::ExposureTime));
        assert_eq!("exposureTime".parse::<Field>(), Ok(Field::ExposureTime));
        assert_eq!("DYESTUFF".parse::<Field>(), Ok(Field::Dyestuff));
        assert!("colour".parse::<Field>().is_err());
    }

    #[test]
    fn test_field_keys_round_trip_through_parse() {
        for field in Field::ALL {
            assert_eq!(field.key().parse::<Field>(), Ok(field));
        }
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }
}
