use serde::Serialize;

use super::OperationKind;

/// Number of candidate answers shown for every question.
pub const NUM_OPTIONS: usize = 4;

/// A single multiple-choice practice problem.
///
/// For division `operand_a` is the dividend and `operand_b` the divisor.
/// Fields are private so a question can only come out of the generator
/// with its invariants intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    operation: OperationKind,
    operand_a: i64,
    operand_b: i64,
    correct_answer: i64,
    options: [i64; NUM_OPTIONS],
}

impl Question {
    pub(crate) fn new(
        operation: OperationKind,
        operand_a: i64,
        operand_b: i64,
        correct_answer: i64,
        options: [i64; NUM_OPTIONS],
    ) -> Self {
        debug_assert_eq!(
            options.iter().filter(|&&o| o == correct_answer).count(),
            1
        );

        Self {
            operation,
            operand_a,
            operand_b,
            correct_answer,
            options,
        }
    }

    pub fn operation(&self) -> OperationKind {
        self.operation
    }

    pub fn operand_a(&self) -> i64 {
        self.operand_a
    }

    pub fn operand_b(&self) -> i64 {
        self.operand_b
    }

    pub fn correct_answer(&self) -> i64 {
        self.correct_answer
    }

    pub fn options(&self) -> &[i64; NUM_OPTIONS] {
        &self.options
    }

    /// Index of the correct answer within `options`.
    pub fn correct_position(&self) -> usize {
        self.options
            .iter()
            .position(|&o| o == self.correct_answer)
            .unwrap_or_default()
    }

    pub fn is_correct(&self, answer: i64) -> bool {
        answer == self.correct_answer
    }

    /// Text shown to the learner, e.g. `What is 42 ÷ 7?`.
    pub fn prompt(&self) -> String {
        format!(
            "What is {} {} {}?",
            self.operand_a,
            self.operation.symbol(),
            self.operand_b
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new(OperationKind::Division, 42, 7, 6, [7, 4, 6, 9])
    }

    #[test]
    fn test_prompt() {
        assert_eq!(sample().prompt(), "What is 42 ÷ 7?");
    }

    #[test]
    fn test_correct_position_and_check() {
        let question = sample();
        assert_eq!(question.correct_position(), 2);
        assert!(question.is_correct(6));
        assert!(!question.is_correct(7));
    }
}
