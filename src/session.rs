//! Practice session state for one operation.

use tracing::{debug, info};

use crate::error::Result;
use crate::generator::Generator;
use crate::models::{NUM_OPTIONS, OperationKind, Question, SessionState};
use crate::random::RandomSource;

/// Running totals for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub attempts: usize,
    pub correct: usize,
    pub streak: usize,
    pub best_streak: usize,
}

impl Tally {
    pub fn accuracy(&self) -> f64 {
        if self.attempts > 0 {
            (self.correct as f64 / self.attempts as f64) * 100.0
        } else {
            0.0
        }
    }

    fn record(&mut self, is_correct: bool) {
        self.attempts += 1;
        if is_correct {
            self.correct += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.streak = 0;
        }
    }
}

/// One practice screen's worth of state.
///
/// A wrong answer keeps the question so the learner retries it; a right
/// answer replaces it once the feedback is acknowledged.
pub struct PracticeSession {
    generator: Generator,
    operation: OperationKind,
    state: SessionState,
    question: Question,
    selected_option: usize,
    tally: Tally,
}

impl PracticeSession {
    pub fn start(
        generator: Generator,
        operation: OperationKind,
        rng: &mut impl RandomSource,
    ) -> Result<Self> {
        let question = generator.generate(operation, rng)?;
        info!(operation = %operation, "Practice session started");

        Ok(Self {
            generator,
            operation,
            state: SessionState::Presenting,
            question,
            selected_option: 0,
            tally: Tally::default(),
        })
    }

    pub fn operation(&self) -> OperationKind {
        self.operation
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn current_question(&self) -> &Question {
        &self.question
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn select_next_option(&mut self) {
        self.selected_option = (self.selected_option + 1) % NUM_OPTIONS;
    }

    pub fn select_previous_option(&mut self) {
        self.selected_option = (self.selected_option + NUM_OPTIONS - 1) % NUM_OPTIONS;
    }

    /// Moves the cursor to `index`. Out-of-range indices are ignored.
    pub fn select_option(&mut self, index: usize) {
        if index < NUM_OPTIONS {
            self.selected_option = index;
        }
    }

    /// Submits the option under the cursor.
    ///
    /// Returns `None` while feedback is still showing.
    pub fn submit_answer(&mut self) -> Option<bool> {
        let answer = self.question.options()[self.selected_option];
        self.choose(answer)
    }

    /// Submits an answer by value.
    pub fn choose(&mut self, answer: i64) -> Option<bool> {
        if self.state != SessionState::Presenting {
            return None;
        }

        let is_correct = self.question.is_correct(answer);
        self.tally.record(is_correct);
        self.state = if is_correct {
            SessionState::FeedbackCorrect
        } else {
            SessionState::FeedbackIncorrect
        };
        debug!(answer, is_correct, "Answer submitted");

        Some(is_correct)
    }

    /// Leaves the feedback state.
    pub fn acknowledge(&mut self, rng: &mut impl RandomSource) -> Result<()> {
        match self.state {
            SessionState::Presenting => {}
            SessionState::FeedbackIncorrect => {
                self.state = SessionState::Presenting;
            }
            SessionState::FeedbackCorrect => {
                self.question = self.generator.generate(self.operation, rng)?;
                self.selected_option = 0;
                self.state = SessionState::Presenting;
            }
        }

        Ok(())
    }
}
