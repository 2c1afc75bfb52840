//! Overlap filtering and clamping against an analysis window.

use busy_model::{DateWindow, ResourceRow};
use tracing::debug;

/// Keep rows overlapping `window`, with dates clamped to it.
///
/// A row is kept iff `start <= window.end && end >= window.start`. Kept rows
/// retain input order.
///
/// # Examples
/// ```
/// use busy_model::{DateWindow, ResourceRow};
/// use busy_transform::filter_window;
/// use chrono::NaiveDate;
///
/// let march = |d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
/// let row = ResourceRow {
///     assignment: 0,
///     project: "HBL".into(),
///     start: march(10),
///     end: march(15),
///     resource: "Ali".into(),
/// };
/// let window = DateWindow::new(march(12), march(31)).unwrap();
/// let kept = filter_window(&[row], &window);
/// assert_eq!((kept[0].start, kept[0].end), (march(12), march(15)));
/// assert_eq!(kept[0].duration_days(), 4);
/// ```
pub fn filter_window(rows: &[ResourceRow], window: &DateWindow) -> Vec<ResourceRow> {
    let filtered: Vec<ResourceRow> = rows
        .iter()
        .filter_map(|row| {
            let (start, end) = window.clamp(row.start, row.end)?;
            Some(ResourceRow {
                start,
                end,
                ..row.clone()
            })
        })
        .collect();
    debug!(
        window_start = %window.start(),
        window_end = %window.end(),
        input = rows.len(),
        kept = filtered.len(),
        "filtered rows to window"
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    fn row(project: &str, start: NaiveDate, end: NaiveDate) -> ResourceRow {
        ResourceRow {
            assignment: 0,
            project: project.to_string(),
            start,
            end,
            resource: "Sara".to_string(),
        }
    }

    #[test]
    fn drops_rows_outside_window() {
        let window = DateWindow::new(date(3, 12), date(3, 31)).unwrap();
        let rows = vec![
            row("before", date(2, 1), date(3, 11)),
            row("inside", date(3, 14), date(3, 20)),
            row("after", date(4, 1), date(4, 9)),
            row("spanning", date(3, 1), date(4, 30)),
        ];
        let kept = filter_window(&rows, &window);
        let projects: Vec<&str> = kept.iter().map(|row| row.project.as_str()).collect();
        assert_eq!(projects, vec!["inside", "spanning"]);
        assert_eq!((kept[0].start, kept[0].end), (date(3, 14), date(3, 20)));
        assert_eq!((kept[1].start, kept[1].end), (date(3, 12), date(3, 31)));
    }

    #[test]
    fn single_day_touch_is_kept() {
        let window = DateWindow::new(date(5, 1), date(5, 31)).unwrap();
        let kept = filter_window(&[row("edge", date(4, 20), date(5, 1))], &window);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].duration_days(), 1);
    }
}
