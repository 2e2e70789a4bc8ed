//! UI helpers - pure rendering rules shared by the draw functions

use ratatui::{prelude::*, widgets::*};

use crate::models::{IssueStatus, Priority};

/// Renders the screen tab bar
pub fn render_tabs<'a>(titles: &[&'a str], selected: usize) -> Tabs<'a> {
    let titles: Vec<Line> = titles.iter().map(|t| Line::from(*t)).collect();

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .divider("|")
}

/// Format an ISO timestamp for display ("Jan 5, 2025"). Unparseable input is
/// shown as-is rather than dropped.
pub fn format_date(iso: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(iso) {
        return dt.format("%b %-d, %Y").to_string();
    }
    // Backend timestamps carry no offset
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format("%b %-d, %Y").to_string();
    }
    iso.to_string()
}

/// Badge on the fee-payment tile; rendered only when something is owed
pub fn fee_badge(fee_due: i64) -> Option<String> {
    if fee_due > 0 {
        Some(format!("₹{}", fee_due))
    } else {
        None
    }
}

/// Fine line on an issued-book card; rendered only for a non-zero fine
pub fn fine_line(fine_amount: i64) -> Option<String> {
    if fine_amount > 0 {
        Some(format!("Fine: ₹{}", fine_amount))
    } else {
        None
    }
}

/// Empty-state views replace a list iff it has no rows and nothing is loading
pub fn shows_empty_state(len: usize, busy: bool) -> bool {
    len == 0 && !busy
}

/// Empty-state text for the search results list, depending on whether the
/// user has typed a query
pub fn search_empty_text(query: &str) -> &'static str {
    if query.is_empty() {
        "Enter search query to find books"
    } else {
        "No books found"
    }
}

pub fn issue_status_color(status: IssueStatus) -> Color {
    match status {
        IssueStatus::Issued => Color::Cyan,
        IssueStatus::Overdue => Color::Red,
        IssueStatus::Returned => Color::Green,
    }
}

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Normal => Color::Cyan,
        Priority::Low => Color::DarkGray,
    }
}

pub fn availability_color(available: bool) -> Color {
    if available {
        Color::Green
    } else {
        Color::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_naive_timestamp() {
        assert_eq!(format_date("2025-01-05T08:30:00"), "Jan 5, 2025");
        assert_eq!(format_date("2025-01-05T08:30:00.123456"), "Jan 5, 2025");
    }

    #[test]
    fn test_format_date_with_offset() {
        assert_eq!(format_date("2025-12-31T23:00:00+00:00"), "Dec 31, 2025");
    }

    #[test]
    fn test_format_date_passthrough_on_garbage() {
        assert_eq!(format_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_fee_badge_only_when_due() {
        assert_eq!(fee_badge(500), Some(String::from("₹500")));
        assert_eq!(fee_badge(0), None);
        assert_eq!(fee_badge(-10), None);
    }

    #[test]
    fn test_fine_line_only_when_positive() {
        assert_eq!(fine_line(50), Some(String::from("Fine: ₹50")));
        assert_eq!(fine_line(0), None);
    }

    #[test]
    fn test_empty_state_requires_idle_and_empty() {
        assert!(shows_empty_state(0, false));
        assert!(!shows_empty_state(0, true));
        assert!(!shows_empty_state(3, false));
    }

    #[test]
    fn test_search_empty_text_tracks_query() {
        assert_eq!(search_empty_text(""), "Enter search query to find books");
        assert_eq!(search_empty_text("algorithms"), "No books found");
    }
}
