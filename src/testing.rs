//! Test doubles shared by the unit tests.

use crate::models::Question;
use crate::surface::{Effect, OptionMark, PageView, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Page(PageView),
    Question { text: String, index: usize, total: usize },
    Mark(usize, OptionMark),
    Score(usize, usize),
    Progress(f64),
    Effect(Effect),
}

/// Surface that remembers every call made to it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn effects(&self) -> Vec<Effect> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Effect(effect) => Some(*effect),
                _ => None,
            })
            .collect()
    }

    pub fn count_effect(&self, effect: Effect) -> usize {
        self.effects().iter().filter(|e| **e == effect).count()
    }

    pub fn marks(&self) -> Vec<(usize, OptionMark)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Mark(index, mark) => Some((*index, *mark)),
                _ => None,
            })
            .collect()
    }

    pub fn last_page(&self) -> Option<&PageView> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Page(view) => Some(view),
            _ => None,
        })
    }

    pub fn last_progress(&self) -> Option<f64> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Progress(fraction) => Some(*fraction),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn render_page(&mut self, page: &PageView) {
        self.calls.push(SurfaceCall::Page(page.clone()));
    }

    fn render_question(&mut self, question: &Question, index: usize, total: usize) {
        self.calls.push(SurfaceCall::Question {
            text: question.text.clone(),
            index,
            total,
        });
    }

    fn mark_option(&mut self, index: usize, mark: OptionMark) {
        self.calls.push(SurfaceCall::Mark(index, mark));
    }

    fn render_score(&mut self, score: usize, total: usize) {
        self.calls.push(SurfaceCall::Score(score, total));
    }

    fn set_progress(&mut self, fraction: f64) {
        self.calls.push(SurfaceCall::Progress(fraction));
    }

    fn trigger_effect(&mut self, effect: Effect) {
        self.calls.push(SurfaceCall::Effect(effect));
    }
}

pub fn question(text: &str, correct: usize) -> Question {
    Question {
        text: text.to_string(),
        options: ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect(),
        correct,
        explanation: String::new(),
    }
}
