//! # Locale-aware date cells
//!
//! Install dates are shown the way the viewer's own calendar would print them,
//! not in one fixed format. [`DateFormatter`] pairs a [`DateLocale`] (the digit
//! layout) with a [`Zone`] (which calendar day an instant falls on).
//!
//! Accepted inputs mirror what the admin API actually sends:
//!
//! | Input | Interpretation |
//! |-------|----------------|
//! | `"2024-05-01T00:00:00Z"`, `"…+02:00"` | instant, converted to the zone |
//! | `"2024-05-01T09:30:00"` | wall-clock time already in the viewer's zone |
//! | `"2024-05-01"` | UTC midnight, converted to the zone |
//! | `1714521600000` | epoch milliseconds, converted to the zone |
//!
//! Anything else (garbage text, `NaN`, out-of-range numbers, no value at all)
//! renders as [`INVALID_DATE_LABEL`]. A bad date never fails a table or report.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, Utc};
use store::DateValue;

/// Cell text for dates that cannot be interpreted.
pub const INVALID_DATE_LABEL: &str = "Invalid Date";

/// Largest representable distance from the epoch, in milliseconds (±100,000,000 days).
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

/// Numeric date layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateLocale {
    /// `5/1/2024`
    #[default]
    EnUs,
    /// `01/05/2024`
    EnGb,
    /// `1.5.2024`
    De,
    /// `2024-05-01`
    Iso,
}

impl DateLocale {
    /// Resolve a BCP-47 (`"en-GB"`) or POSIX (`"de_DE.UTF-8"`) tag.
    /// Unknown tags fall back to [`DateLocale::EnUs`].
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim()
            .replace('_', "-")
            .to_ascii_lowercase();
        let language = tag.split('-').next().unwrap_or_default();

        match tag.as_str() {
            "iso" | "iso-8601" | "sv" | "sv-se" | "lt" | "lt-lt" => DateLocale::Iso,
            "en-gb" | "en-ie" | "en-au" | "en-nz" => DateLocale::EnGb,
            _ => match language {
                "de" => DateLocale::De,
                "fr" => DateLocale::EnGb,
                _ => DateLocale::EnUs,
            },
        }
    }

    fn render(self, date: NaiveDate) -> String {
        use chrono::Datelike;

        let (y, m, d) = (date.year(), date.month(), date.day());
        match self {
            DateLocale::EnUs => format!("{m}/{d}/{y}"),
            DateLocale::EnGb => format!("{d:02}/{m:02}/{y}"),
            DateLocale::De => format!("{d}.{m}.{y}"),
            DateLocale::Iso => format!("{y:04}-{m:02}-{d:02}"),
        }
    }
}

/// Which time zone decides the calendar day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Zone {
    /// The viewer's zone (browser or OS), DST included.
    #[default]
    Local,
    Fixed(FixedOffset),
}

/// Formats raw date values as locale-specific calendar dates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateFormatter {
    pub locale: DateLocale,
    pub zone: Zone,
}

impl DateFormatter {
    /// Formatter in the viewer's local zone.
    pub fn local(locale: DateLocale) -> Self {
        Self {
            locale,
            zone: Zone::Local,
        }
    }

    pub fn utc(locale: DateLocale) -> Self {
        Self::with_offset(locale, Utc.fix())
    }

    pub fn with_offset(locale: DateLocale, offset: FixedOffset) -> Self {
        Self {
            locale,
            zone: Zone::Fixed(offset),
        }
    }

    /// Render a cell; missing or unparseable values give [`INVALID_DATE_LABEL`].
    pub fn format(&self, value: Option<&DateValue>) -> String {
        match value.and_then(|v| self.calendar_date(v)) {
            Some(date) => self.locale.render(date),
            None => INVALID_DATE_LABEL.to_string(),
        }
    }

    /// The calendar day `value` falls on for this formatter's zone.
    pub fn calendar_date(&self, value: &DateValue) -> Option<NaiveDate> {
        match value {
            DateValue::EpochMillis(ms) => {
                if !ms.is_finite() || ms.abs() > MAX_EPOCH_MILLIS {
                    return None;
                }
                let instant = DateTime::<Utc>::from_timestamp_millis(ms.trunc() as i64)?;
                Some(self.day_in_zone(instant))
            }
            DateValue::Text(text) => self.parse_text(text.trim()),
        }
    }

    fn parse_text(&self, text: &str) -> Option<NaiveDate> {
        if text.is_empty() {
            return None;
        }
        if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
            return Some(self.day_in_zone(instant.with_timezone(&Utc)));
        }
        if let Ok(instant) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f%z") {
            return Some(self.day_in_zone(instant.with_timezone(&Utc)));
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(wall_clock) = NaiveDateTime::parse_from_str(text, fmt) {
                return Some(wall_clock.date());
            }
        }
        // Date-only strings are UTC midnight.
        let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
        let midnight = date.and_hms_opt(0, 0, 0)?.and_utc();
        Some(self.day_in_zone(midnight))
    }

    fn day_in_zone(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self.zone {
            Zone::Local => instant.with_timezone(&Local).date_naive(),
            Zone::Fixed(offset) => instant.with_timezone(&offset).date_naive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> DateValue {
        DateValue::Text(s.to_string())
    }

    fn offset_hours(h: i32) -> FixedOffset {
        FixedOffset::east_opt(h * 3600).unwrap()
    }

    #[test]
    fn test_iso_instant_per_locale() {
        let value = text("2024-05-01T00:00:00Z");
        assert_eq!(DateFormatter::utc(DateLocale::EnUs).format(Some(&value)), "5/1/2024");
        assert_eq!(DateFormatter::utc(DateLocale::EnGb).format(Some(&value)), "01/05/2024");
        assert_eq!(DateFormatter::utc(DateLocale::De).format(Some(&value)), "1.5.2024");
        assert_eq!(DateFormatter::utc(DateLocale::Iso).format(Some(&value)), "2024-05-01");
    }

    #[test]
    fn test_instant_lands_on_viewer_day() {
        let value = text("2024-05-01T00:00:00.000Z");
        let new_york = DateFormatter::with_offset(DateLocale::EnUs, offset_hours(-4));
        assert_eq!(new_york.format(Some(&value)), "4/30/2024");

        let tokyo = DateFormatter::with_offset(DateLocale::EnUs, offset_hours(9));
        assert_eq!(tokyo.format(Some(&text("2024-05-01T20:00:00+00:00"))), "5/2/2024");
    }

    #[test]
    fn test_date_only_is_utc_midnight() {
        let value = text("2024-05-01");
        let west = DateFormatter::with_offset(DateLocale::Iso, offset_hours(-5));
        assert_eq!(west.format(Some(&value)), "2024-04-30");
        let east = DateFormatter::with_offset(DateLocale::Iso, offset_hours(5));
        assert_eq!(east.format(Some(&value)), "2024-05-01");
    }

    #[test]
    fn test_wall_clock_time_is_not_shifted() {
        let value = text("2024-05-01T23:30:00");
        let east = DateFormatter::with_offset(DateLocale::EnUs, offset_hours(10));
        assert_eq!(east.format(Some(&value)), "5/1/2024");
    }

    #[test]
    fn test_epoch_millis() {
        let formatter = DateFormatter::utc(DateLocale::EnUs);
        let value = DateValue::EpochMillis(1_714_521_600_000.0);
        assert_eq!(formatter.format(Some(&value)), "5/1/2024");
        assert_eq!(formatter.format(Some(&DateValue::EpochMillis(0.0))), "1/1/1970");
    }

    #[test]
    fn test_invalid_values_render_label() {
        let formatter = DateFormatter::utc(DateLocale::EnUs);
        for value in [
            text("not a date"),
            text(""),
            text("2024-13-45"),
            DateValue::EpochMillis(f64::NAN),
            DateValue::EpochMillis(f64::INFINITY),
            DateValue::EpochMillis(9e15),
        ] {
            assert_eq!(formatter.format(Some(&value)), INVALID_DATE_LABEL, "{value:?}");
        }
        assert_eq!(formatter.format(None), INVALID_DATE_LABEL);
    }

    #[test]
    fn test_local_zone_never_panics() {
        let formatter = DateFormatter::local(DateLocale::EnUs);
        let rendered = formatter.format(Some(&text("2024-05-01T12:00:00Z")));
        assert!(rendered.ends_with("/2024"), "{rendered}");
    }

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(DateLocale::from_tag("en-US"), DateLocale::EnUs);
        assert_eq!(DateLocale::from_tag("en"), DateLocale::EnUs);
        assert_eq!(DateLocale::from_tag("en_GB.UTF-8"), DateLocale::EnGb);
        assert_eq!(DateLocale::from_tag("de-AT"), DateLocale::De);
        assert_eq!(DateLocale::from_tag("de_DE@euro"), DateLocale::De);
        assert_eq!(DateLocale::from_tag("fr-FR"), DateLocale::EnGb);
        assert_eq!(DateLocale::from_tag("sv-SE"), DateLocale::Iso);
        assert_eq!(DateLocale::from_tag("ISO"), DateLocale::Iso);
        assert_eq!(DateLocale::from_tag("C"), DateLocale::EnUs);
        assert_eq!(DateLocale::from_tag(""), DateLocale::EnUs);
    }
}
