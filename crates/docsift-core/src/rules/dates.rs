//! Date extraction.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Utc};

use super::patterns::{DATE_ISO, DATE_NUMERIC};
use super::FieldExtractor;

/// Date field extractor.
///
/// Slash/dash dates are tried before ISO dates. Within each form the first
/// candidate that names a real calendar day wins; impossible dates such as
/// `31/31/2024` are skipped.
///
/// Two-digit years resolve to the century that puts them within 50 years of
/// the reference year (the current year unless set).
pub struct DateExtractor {
    reference_year: i32,
}

impl DateExtractor {
    pub fn new() -> Self {
        Self::with_reference_year(Utc::now().year())
    }

    pub fn with_reference_year(reference_year: i32) -> Self {
        Self { reference_year }
    }

    fn parse_year(&self, s: &str) -> Option<i32> {
        let year: i32 = s.parse().ok()?;
        if s.len() > 2 {
            return Some(year);
        }

        let candidate = self.reference_year - self.reference_year.rem_euclid(100) + year;
        if candidate >= self.reference_year + 50 {
            Some(candidate - 100)
        } else if candidate < self.reference_year - 50 {
            Some(candidate + 100)
        } else {
            Some(candidate)
        }
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = NaiveDateTime;

    fn extract(&self, text: &str) -> Option<NaiveDateTime> {
        let numeric = DATE_NUMERIC.captures_iter(text).find_map(|caps| {
            let first: u32 = caps[1].parse().ok()?;
            let second: u32 = caps[2].parse().ok()?;
            let year = self.parse_year(&caps[3])?;
            // Month-first like US documents, day-first when that is the only valid reading.
            NaiveDate::from_ymd_opt(year, first, second)
                .or_else(|| NaiveDate::from_ymd_opt(year, second, first))
        });

        numeric
            .or_else(|| {
                DATE_ISO.captures_iter(text).find_map(|caps| {
                    let year: i32 = caps[1].parse().ok()?;
                    let month: u32 = caps[2].parse().ok()?;
                    let day: u32 = caps[3].parse().ok()?;
                    NaiveDate::from_ymd_opt(year, month, day)
                })
            })
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    }
}

/// Extract the first parseable date, at midnight.
pub fn extract_date(text: &str) -> Option<NaiveDateTime> {
    DateExtractor::new().extract(text)
}
