//! The contract between the card's state machines and whatever draws them.
//!
//! The pager and the quiz controller push state outward through [`Surface`];
//! they never read anything back from it.

use crate::models::Question;

/// How a single page relates to the page being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMark {
    Active,
    /// Before the active page. Used to style the slide direction.
    Prior,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Stay,
}

impl Direction {
    pub fn between(from: usize, to: usize) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Self::Forward,
            std::cmp::Ordering::Less => Self::Backward,
            std::cmp::Ordering::Equal => Self::Stay,
        }
    }
}

/// Snapshot of the pager handed to the surface after every transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// 1-based.
    pub current: usize,
    pub total: usize,
    pub direction: Direction,
    pub marks: Vec<PageMark>,
}

impl PageView {
    pub fn new(current: usize, total: usize, direction: Direction) -> Self {
        let marks = (1..=total)
            .map(|page| match page.cmp(&current) {
                std::cmp::Ordering::Equal => PageMark::Active,
                std::cmp::Ordering::Less => PageMark::Prior,
                std::cmp::Ordering::Greater => PageMark::Upcoming,
            })
            .collect();

        Self {
            current,
            total,
            direction,
            marks,
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 1
    }

    pub fn can_go_forward(&self) -> bool {
        self.current < self.total
    }

    /// Mark for a 1-based page number.
    pub fn mark(&self, page: usize) -> Option<PageMark> {
        page.checked_sub(1).and_then(|index| self.marks.get(index).copied())
    }
}

/// Feedback shown on a quiz option once an answer is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Correct,
    Incorrect,
}

/// Fire-and-forget visual effects. Nothing about them feeds back into state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Start the stats counters.
    CountUp,
    Sparkle { column: u16, row: u16 },
    Confetti,
    EasterEgg,
}

pub trait Surface {
    fn render_page(&mut self, page: &PageView);

    /// `index` is 0-based.
    fn render_question(&mut self, question: &Question, index: usize, total: usize);

    fn mark_option(&mut self, index: usize, mark: OptionMark);

    fn render_score(&mut self, score: usize, total: usize);

    /// `fraction` is in `0.0..=1.0`.
    fn set_progress(&mut self, fraction: f64);

    fn trigger_effect(&mut self, effect: Effect);
}
