use std::time::{Duration, Instant};

pub const SPARKLE_LIFETIME: Duration = Duration::from_millis(600);

const FRAMES: [&str; 4] = ["·", "✦", "✨", "✧"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sparkle {
    pub column: u16,
    pub row: u16,
    born: Instant,
}

impl Sparkle {
    pub fn new(column: u16, row: u16, now: Instant) -> Self {
        Self { column, row, born: now }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.born) >= SPARKLE_LIFETIME
    }

    fn progress(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.born).as_secs_f64();
        (elapsed / SPARKLE_LIFETIME.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Glyph and row for this frame; `None` once expired. The sparkle grows,
    /// spins and drifts up one row over its lifetime.
    pub fn frame(&self, now: Instant) -> Option<(&'static str, u16)> {
        if self.is_expired(now) {
            return None;
        }

        let progress = self.progress(now);
        let glyph = FRAMES[((progress * FRAMES.len() as f64) as usize).min(FRAMES.len() - 1)];
        let row = if progress >= 0.5 {
            self.row.saturating_sub(1)
        } else {
            self.row
        };
        Some((glyph, row))
    }
}
