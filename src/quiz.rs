//! Quiz progress and scoring.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use crate::models::Question;
use crate::surface::{OptionMark, Surface};

/// How long answer feedback stays up before the next question.
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// `pending` is set once the question has been answered and is waiting
    /// for [`QuizController::advance`].
    InProgress { index: usize, pending: bool },
    Completed { score: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("the quiz is not in progress")]
    NotInProgress,
    #[error("question {0} has already been answered")]
    AlreadyAnswered(usize),
    #[error("option {option} does not exist, question has {options} options")]
    OptionOutOfRange { option: usize, options: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question: usize,
    pub chosen: usize,
    pub correct: bool,
}

/// Result of an accepted answer. `epoch` must be passed back to
/// [`QuizController::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub question: usize,
    pub chosen: usize,
    pub correct_option: usize,
    pub correct: bool,
    pub epoch: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based question number.
    pub number: usize,
    pub total: usize,
}

impl Progress {
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.number as f64 / self.total as f64
        }
    }

    pub fn label(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }
}

pub struct QuizController {
    bank: Vec<Question>,
    state: QuizState,
    score: usize,
    answers: Vec<AnswerRecord>,
    epoch: u64,
}

impl QuizController {
    /// The controller starts completed with nothing scored; call
    /// [`start`](Self::start) to begin.
    pub fn new(bank: Vec<Question>) -> Self {
        Self {
            bank,
            state: QuizState::Completed { score: 0 },
            score: 0,
            answers: Vec::new(),
            epoch: 0,
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.bank.len()
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn bank(&self) -> &[Question] {
        &self.bank
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, QuizState::Completed { .. })
    }

    /// Number of questions already left behind.
    pub fn current_index(&self) -> usize {
        match self.state {
            QuizState::InProgress { index, .. } => index,
            QuizState::Completed { .. } => self.bank.len(),
        }
    }

    pub fn progress(&self) -> Option<Progress> {
        match self.state {
            QuizState::InProgress { index, .. } => Some(Progress {
                number: index + 1,
                total: self.bank.len(),
            }),
            QuizState::Completed { .. } => None,
        }
    }

    /// Begin a fresh session. Safe to call from any state.
    pub fn start<S: Surface>(&mut self, surface: &mut S) {
        self.score = 0;
        self.answers.clear();
        self.epoch += 1;
        debug!(epoch = self.epoch, questions = self.bank.len(), "quiz started");
        self.enter(0, surface);
    }

    pub fn reset<S: Surface>(&mut self, surface: &mut S) {
        self.start(surface);
    }

    pub fn submit_answer<S: Surface>(
        &mut self,
        option: usize,
        surface: &mut S,
    ) -> Result<Feedback, AnswerError> {
        let index = match self.state {
            QuizState::InProgress { pending: true, index } => {
                return Err(AnswerError::AlreadyAnswered(index));
            }
            QuizState::InProgress { index, .. } => index,
            QuizState::Completed { .. } => return Err(AnswerError::NotInProgress),
        };

        let question = &self.bank[index];
        if option >= question.options.len() {
            return Err(AnswerError::OptionOutOfRange {
                option,
                options: question.options.len(),
            });
        }

        self.state = QuizState::InProgress {
            index,
            pending: true,
        };

        let correct = question.is_correct(option);
        if correct {
            self.score += 1;
            surface.mark_option(option, OptionMark::Correct);
        } else {
            surface.mark_option(option, OptionMark::Incorrect);
            surface.mark_option(question.correct, OptionMark::Correct);
        }

        self.answers.push(AnswerRecord {
            question: index,
            chosen: option,
            correct,
        });
        debug!(question = index, option, correct, score = self.score, "answer recorded");

        Ok(Feedback {
            question: index,
            chosen: option,
            correct_option: question.correct,
            correct,
            epoch: self.epoch,
        })
    }

    /// Move past an answered question. Returns false when there was nothing
    /// to advance, which includes timers left over from an earlier session.
    pub fn advance<S: Surface>(&mut self, epoch: u64, surface: &mut S) -> bool {
        if epoch != self.epoch {
            debug!(epoch, current = self.epoch, "stale quiz timer");
            return false;
        }

        match self.state {
            QuizState::InProgress {
                index,
                pending: true,
            } => {
                self.enter(index + 1, surface);
                true
            }
            _ => false,
        }
    }

    fn enter<S: Surface>(&mut self, index: usize, surface: &mut S) {
        if index < self.bank.len() {
            self.state = QuizState::InProgress {
                index,
                pending: false,
            };
            let total = self.bank.len();
            surface.render_question(&self.bank[index], index, total);
            surface.set_progress((index + 1) as f64 / total as f64);
        } else {
            self.state = QuizState::Completed { score: self.score };
            surface.render_score(self.score, self.bank.len());
            info!(score = self.score, total = self.bank.len(), "quiz completed");
        }
    }
}
