//! Display formatting for cards, badges and detail views.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::Date;
use time::macros::format_description;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Tools/tags shown on a card before collapsing into "+N more".
pub const CARD_BADGE_LIMIT: usize = 3;

/// Month/day/year without padding, e.g. `3/15/2024`.
#[must_use]
pub fn display_date(date: Date) -> String {
    let format = format_description!("[month padding:none]/[day padding:none]/[year]");
    date.format(format).unwrap_or_else(|_| date.to_string())
}

#[must_use]
pub fn image_or_placeholder(url: &str) -> &str {
    if url.trim().is_empty() { PLACEHOLDER_IMAGE } else { url }
}

/// Badges that fit on a card plus the number left over.
#[must_use]
pub fn badge_overflow(items: &[String], limit: usize) -> (&[String], usize) {
    let shown = items.len().min(limit);
    (&items[..shown], items.len() - shown)
}

#[must_use]
pub fn overflow_label(hidden: usize) -> Option<String> {
    (hidden > 0).then(|| format!("+{hidden} more"))
}

/// Number of filled stars for a rating, clamped to 0–5.
#[must_use]
pub fn star_count(rating: u8) -> usize {
    usize::from(rating.min(5))
}

/// CSS width for a skill bar, clamped to 0–100%.
#[must_use]
pub fn skill_width(level: u8) -> String {
    format!("{}%", level.min(100))
}

/// Staggered CSS `animation-delay` for the `index`-th item of a list.
#[must_use]
pub fn stagger_delay(base_s: f64, step_s: f64, index: usize) -> String {
    #[allow(clippy::cast_precision_loss)]
    let delay = base_s + step_s * index as f64;
    format!("animation-delay: {delay:.1}s")
}
