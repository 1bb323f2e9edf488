//! What the terminal currently shows. The state machines write into it
//! through [`Surface`]; the widgets in this module read from it.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::effects::{ConfettiBurst, CounterAnimation, Sparkle, ease_out_cubic};
use crate::models::Question;
use crate::surface::{Direction, Effect, OptionMark, PageView, Surface};

/// Lead-in before the finale confetti goes off.
pub const FINALE_CONFETTI_DELAY: Duration = Duration::from_millis(500);
pub const EASTER_EGG_DURATION: Duration = Duration::from_millis(3000);

const SLIDE_DURATION: Duration = Duration::from_millis(250);
const SLIDE_DISTANCE: f64 = 6.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub index: usize,
    pub total: usize,
    pub text: String,
    pub options: Vec<String>,
    /// Only set when there is something to show.
    pub explanation: Option<String>,
}

#[derive(Debug)]
pub struct Scene {
    page: PageView,
    page_entered: Instant,
    question: Option<QuestionView>,
    marks: Vec<Option<OptionMark>>,
    score: Option<(usize, usize)>,
    progress: f64,
    counters: Option<CounterAnimation>,
    bursts: Vec<ConfettiBurst>,
    sparkles: Vec<Sparkle>,
    easter_egg_since: Option<Instant>,
}

impl Scene {
    pub fn new(total_pages: usize) -> Self {
        Self {
            page: PageView::new(1, total_pages.max(1), Direction::Stay),
            page_entered: Instant::now(),
            question: None,
            marks: Vec::new(),
            score: None,
            progress: 0.0,
            counters: None,
            bursts: Vec::new(),
            sparkles: Vec::new(),
            easter_egg_since: None,
        }
    }

    pub fn page(&self) -> &PageView {
        &self.page
    }

    pub fn question(&self) -> Option<&QuestionView> {
        self.question.as_ref()
    }

    pub fn mark(&self, option: usize) -> Option<OptionMark> {
        self.marks.get(option).copied().flatten()
    }

    /// True once any option carries feedback for the current question.
    pub fn is_answered(&self) -> bool {
        self.marks.iter().any(Option::is_some)
    }

    /// Set once the quiz is completed; cleared when a question is shown.
    pub fn score(&self) -> Option<(usize, usize)> {
        self.score
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn counters_started(&self) -> bool {
        self.counters.is_some()
    }

    /// Stats value to display; zero until the counters have been started.
    pub fn counter_value(&self, target: u64, now: Instant) -> u64 {
        self.counters
            .map(|anim| anim.value(target, now))
            .unwrap_or(0)
    }

    pub fn bursts(&self) -> &[ConfettiBurst] {
        &self.bursts
    }

    pub fn sparkles(&self) -> &[Sparkle] {
        &self.sparkles
    }

    pub fn easter_egg_visible(&self, now: Instant) -> bool {
        self.easter_egg_since
            .is_some_and(|since| now.saturating_duration_since(since) < EASTER_EGG_DURATION)
    }

    /// Horizontal offset of the page body while it slides in.
    pub fn slide_offset(&self, now: Instant) -> i16 {
        let elapsed = now.saturating_duration_since(self.page_entered);
        if elapsed >= SLIDE_DURATION {
            return 0;
        }

        let remaining = 1.0 - ease_out_cubic(elapsed.as_secs_f64() / SLIDE_DURATION.as_secs_f64());
        let distance = (SLIDE_DISTANCE * remaining).round() as i16;
        match self.page.direction {
            Direction::Forward => distance,
            Direction::Backward => -distance,
            Direction::Stay => 0,
        }
    }

    /// True while anything on screen is still moving.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.slide_offset(now) != 0
            || self.counters.is_some_and(|anim| !anim.is_finished(now))
            || !self.bursts.is_empty()
            || !self.sparkles.is_empty()
            || self.easter_egg_visible(now)
    }

    /// Drop effects that have run their course.
    pub fn prune(&mut self, now: Instant) {
        self.bursts.retain(|burst| !burst.is_expired(now));
        self.sparkles.retain(|sparkle| !sparkle.is_expired(now));
        if !self.easter_egg_visible(now) {
            self.easter_egg_since = None;
        }
    }

    pub fn apply_effect(&mut self, effect: Effect, now: Instant) {
        debug!(?effect, "effect triggered");
        match effect {
            Effect::CountUp => self.counters = Some(CounterAnimation::start(now)),
            Effect::Sparkle { column, row } => self.sparkles.push(Sparkle::new(column, row, now)),
            Effect::Confetti => self
                .bursts
                .push(ConfettiBurst::random(now + FINALE_CONFETTI_DELAY)),
            Effect::EasterEgg => {
                self.bursts.push(ConfettiBurst::random(now));
                self.easter_egg_since = Some(now);
            }
        }
    }
}

impl Surface for Scene {
    fn render_page(&mut self, page: &PageView) {
        self.page = page.clone();
        self.page_entered = Instant::now();
    }

    fn render_question(&mut self, question: &Question, index: usize, total: usize) {
        self.question = Some(QuestionView {
            index,
            total,
            text: question.text.clone(),
            options: question.options.clone(),
            explanation: question
                .has_explanation()
                .then(|| question.explanation.clone()),
        });
        self.marks = vec![None; question.options.len()];
        self.score = None;
    }

    fn mark_option(&mut self, index: usize, mark: OptionMark) {
        if let Some(slot) = self.marks.get_mut(index) {
            *slot = Some(mark);
        }
    }

    fn render_score(&mut self, score: usize, total: usize) {
        self.question = None;
        self.marks.clear();
        self.score = Some((score, total));
    }

    fn set_progress(&mut self, fraction: f64) {
        self.progress = fraction.clamp(0.0, 1.0);
    }

    fn trigger_effect(&mut self, effect: Effect) {
        self.apply_effect(effect, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::question;

    #[test]
    fn test_question_then_score_toggles_panels() {
        let mut scene = Scene::new(6);
        scene.render_question(&question("q", 1), 0, 3);
        assert!(scene.question().is_some());
        assert!(scene.score().is_none());
        assert!(!scene.is_answered());

        scene.mark_option(1, OptionMark::Correct);
        assert!(scene.is_answered());
        assert_eq!(scene.mark(1), Some(OptionMark::Correct));
        assert_eq!(scene.mark(0), None);

        scene.render_score(2, 3);
        assert!(scene.question().is_none());
        assert_eq!(scene.score(), Some((2, 3)));

        scene.render_question(&question("again", 0), 0, 3);
        assert!(scene.score().is_none());
        assert!(!scene.is_answered());
    }

    #[test]
    fn test_marks_out_of_range_are_ignored() {
        let mut scene = Scene::new(6);
        scene.render_question(&question("q", 1), 0, 3);
        scene.mark_option(9, OptionMark::Correct);
        assert!(!scene.is_answered());
    }

    #[test]
    fn test_blank_explanation_is_dropped() {
        let mut scene = Scene::new(6);
        let mut q = question("q", 1);
        q.explanation = "   ".to_string();
        scene.render_question(&q, 0, 3);
        assert_eq!(scene.question().unwrap().explanation, None);

        q.explanation = "Hermione says so.".to_string();
        scene.render_question(&q, 0, 3);
        assert_eq!(
            scene.question().unwrap().explanation.as_deref(),
            Some("Hermione says so.")
        );
    }

    #[test]
    fn test_counters_wait_for_count_up() {
        let now = Instant::now();
        let mut scene = Scene::new(6);
        assert_eq!(scene.counter_value(100, now), 0);

        scene.apply_effect(Effect::CountUp, now);
        assert!(scene.counters_started());
        assert_eq!(scene.counter_value(100, now + Duration::from_secs(3)), 100);
    }

    #[test]
    fn test_finale_confetti_is_delayed() {
        let now = Instant::now();
        let mut scene = Scene::new(6);
        scene.apply_effect(Effect::Confetti, now);

        assert_eq!(scene.bursts().len(), 1);
        assert!(scene.bursts()[0].frames(now).is_empty());
        assert!(!scene.bursts()[0].frames(now + Duration::from_millis(700)).is_empty());
    }

    #[test]
    fn test_easter_egg_shows_message_and_confetti() {
        let now = Instant::now();
        let mut scene = Scene::new(6);
        scene.apply_effect(Effect::EasterEgg, now);

        assert!(scene.easter_egg_visible(now));
        assert!(!scene.bursts()[0].frames(now).is_empty());
        assert!(!scene.easter_egg_visible(now + EASTER_EGG_DURATION));
    }

    #[test]
    fn test_prune_drops_finished_effects() {
        let now = Instant::now();
        let mut scene = Scene::new(6);
        scene.apply_effect(Effect::EasterEgg, now);
        scene.apply_effect(Effect::Sparkle { column: 3, row: 3 }, now);
        assert!(scene.is_animating(now));

        scene.prune(now + Duration::from_millis(100));
        assert_eq!(scene.sparkles().len(), 1);

        let later = now + Duration::from_secs(4);
        scene.prune(later);
        assert!(scene.bursts().is_empty());
        assert!(scene.sparkles().is_empty());
        assert!(!scene.is_animating(later));
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut scene = Scene::new(6);
        scene.set_progress(1.5);
        assert_eq!(scene.progress(), 1.0);
    }

    #[test]
    fn test_slide_direction_follows_page_change() {
        let mut scene = Scene::new(6);
        scene.render_page(&PageView::new(2, 6, Direction::Forward));
        let now = Instant::now();
        assert!(scene.slide_offset(now) >= 0);
        assert_eq!(scene.slide_offset(now + SLIDE_DURATION), 0);

        scene.render_page(&PageView::new(1, 6, Direction::Backward));
        assert!(scene.slide_offset(Instant::now()) <= 0);
    }
}
