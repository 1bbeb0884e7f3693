//! Display formatting for the UI layer.

use chrono::{DateTime, NaiveDate};
use shared_types::ContentStatus;
use shared_ui::BadgeVariant;

/// Format a backend timestamp as "Jan 20, 2026".
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates; anything else is
/// returned unchanged.
pub fn format_date_human(date_str: &str) -> String {
    let trimmed = date_str.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.format("%b %-d, %Y").to_string();
    }
    if let Some(date) = trimmed
        .get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    {
        return date.format("%b %-d, %Y").to_string();
    }
    date_str.to_string()
}

/// Badge style for a content status.
pub fn status_badge_variant(status: ContentStatus) -> BadgeVariant {
    match status {
        ContentStatus::Published => BadgeVariant::Primary,
        ContentStatus::Draft => BadgeVariant::Secondary,
        ContentStatus::Archived => BadgeVariant::Outline,
    }
}
