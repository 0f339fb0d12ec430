//! Placement of the decorative floating icons behind the page.
//!
//! Positions are pseudo-random but seeded, so the server-rendered markup and
//! the hydrated client agree.

#[cfg(test)]
#[path = "floating_test.rs"]
mod floating_test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const FLOATING_GLYPHS: &[&str] = &["🚀", "⭐", "🛸", "💫", "🌟", "</>", "{ }", "🔧"];

/// Seed for the page background layout.
pub const LAYOUT_SEED: u64 = 0x00c0_d1ac;

#[derive(Clone, Debug, PartialEq)]
pub struct FloatingIcon {
    pub glyph: &'static str,
    /// Percent of viewport width.
    pub left_pct: f64,
    /// Percent of viewport height.
    pub top_pct: f64,
    /// Seconds before the loop starts; one second apart per icon.
    pub delay_s: u32,
}

impl FloatingIcon {
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {}s",
            self.left_pct, self.top_pct, self.delay_s
        )
    }
}

#[must_use]
pub fn layout(seed: u64) -> Vec<FloatingIcon> {
    let mut rng = StdRng::seed_from_u64(seed);
    FLOATING_GLYPHS
        .iter()
        .zip(0u32..)
        .map(|(&glyph, delay_s)| FloatingIcon {
            glyph,
            left_pct: rng.random_range(0.0..100.0),
            top_pct: rng.random_range(0.0..100.0),
            delay_s,
        })
        .collect()
}
