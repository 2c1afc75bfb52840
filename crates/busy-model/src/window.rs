//! Analysis window used to filter and clamp assignments.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Inclusive date range `[start, end]` with `start <= end`.
///
/// The only way to obtain a window is through [`DateWindow::new`], so every
/// window handed to the filter has already passed the date-order check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Build a window, rejecting `start > end`.
    ///
    /// # Examples
    /// ```
    /// use busy_model::DateWindow;
    /// use chrono::NaiveDate;
    ///
    /// let march = |d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
    /// assert!(DateWindow::new(march(1), march(31)).is_ok());
    /// assert!(DateWindow::new(march(31), march(1)).is_err());
    /// ```
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ModelError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Standard interval overlap test against `[start, end]`.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.end && end >= self.start
    }

    /// Intersect `[start, end]` with the window.
    ///
    /// Returns `None` when the interval does not overlap the window.
    pub fn clamp(&self, start: NaiveDate, end: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        if !self.overlaps(start, end) {
            return None;
        }
        Some((start.max(self.start), end.min(self.end)))
    }

    /// Inclusive number of days covered by the window.
    pub fn day_count(&self) -> i64 {
        inclusive_days(self.start, self.end)
    }
}

impl<'de> Deserialize<'de> for DateWindow {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            start: NaiveDate,
            end: NaiveDate,
        }
        let raw = Raw::deserialize(deserializer)?;
        DateWindow::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}

/// Inclusive day count between two dates (`end - start + 1`).
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    #[test]
    fn rejects_reversed_window() {
        let err = DateWindow::new(date(6, 1), date(5, 1)).unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidWindow {
                start: date(6, 1),
                end: date(5, 1)
            }
        );
    }

    #[test]
    fn single_day_window_is_valid() {
        let window = DateWindow::new(date(4, 2), date(4, 2)).unwrap();
        assert_eq!(window.day_count(), 1);
    }

    #[test]
    fn clamps_partial_overlap() {
        let window = DateWindow::new(date(3, 12), date(3, 31)).unwrap();
        assert_eq!(
            window.clamp(date(3, 10), date(3, 15)),
            Some((date(3, 12), date(3, 15)))
        );
        assert_eq!(window.clamp(date(2, 1), date(3, 11)), None);
        assert_eq!(window.clamp(date(4, 1), date(4, 5)), None);
    }

    #[test]
    fn touching_edges_overlap() {
        let window = DateWindow::new(date(3, 12), date(3, 31)).unwrap();
        assert!(window.overlaps(date(3, 1), date(3, 12)));
        assert!(window.overlaps(date(3, 31), date(4, 10)));
    }

    #[test]
    fn deserialize_enforces_order() {
        let ok: DateWindow =
            serde_json::from_str(r#"{"start":"2024-01-01","end":"2024-01-31"}"#).unwrap();
        assert_eq!(ok.day_count(), 31);
        let bad = serde_json::from_str::<DateWindow>(r#"{"start":"2024-02-01","end":"2024-01-31"}"#);
        assert!(bad.is_err());
    }
}
