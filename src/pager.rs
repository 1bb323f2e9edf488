//! Page navigation.

use tracing::{debug, info};

use crate::models::Landmarks;
use crate::surface::{Direction, Effect, PageView, Surface};

/// A transition the pager accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    /// Set on the first arrival at the quiz page.
    pub quiz_entered: bool,
}

/// Tracks which of a fixed set of pages is shown.
///
/// Out-of-range targets are rejected, never clamped. Arriving at the stats
/// or finale page fires its effect once for the lifetime of the pager.
#[derive(Debug)]
pub struct Pager {
    current: usize,
    total: usize,
    landmarks: Landmarks,
    stats_played: bool,
    finale_played: bool,
    quiz_visited: bool,
}

impl Pager {
    pub fn new(total: usize, landmarks: Landmarks) -> Self {
        Self {
            current: 1,
            total: total.max(1),
            landmarks,
            stats_played: false,
            finale_played: false,
            quiz_visited: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn view(&self) -> PageView {
        PageView::new(self.current, self.total, Direction::Stay)
    }

    pub fn go_to<S: Surface>(&mut self, target: usize, surface: &mut S) -> Option<PageChange> {
        if target < 1 || target > self.total {
            debug!(page = target, current = self.current, "page out of range, ignoring");
            return None;
        }

        let from = self.current;
        let direction = Direction::between(from, target);
        self.current = target;
        surface.render_page(&PageView::new(target, self.total, direction));
        info!(from, to = target, "page changed");

        if self.landmarks.stats == Some(target) && !self.stats_played {
            self.stats_played = true;
            surface.trigger_effect(Effect::CountUp);
        }

        if self.landmarks.finale == Some(target) && !self.finale_played {
            self.finale_played = true;
            surface.trigger_effect(Effect::Confetti);
        }

        let quiz_entered = self.landmarks.quiz == Some(target) && !self.quiz_visited;
        if quiz_entered {
            self.quiz_visited = true;
        }

        Some(PageChange {
            from,
            to: target,
            direction,
            quiz_entered,
        })
    }

    pub fn next<S: Surface>(&mut self, surface: &mut S) -> Option<PageChange> {
        self.go_to(self.current + 1, surface)
    }

    pub fn previous<S: Surface>(&mut self, surface: &mut S) -> Option<PageChange> {
        // on page 1 this asks for page 0, which go_to rejects
        self.go_to(self.current - 1, surface)
    }
}
