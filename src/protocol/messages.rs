//! Records emitted by the command-line tool.
//!
//! All records are serialized as one JSON object per line.

use serde::{Deserialize, Serialize};

use crate::models::{NUM_OPTIONS, OperationKind, Question};
use crate::stats::PositionCounts;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Record {
    /// A freshly generated question.
    Question {
        operation: OperationKind,
        prompt: String,
        operand_a: i64,
        operand_b: i64,
        correct_answer: i64,
        options: [i64; NUM_OPTIONS],
    },

    /// Where the correct answer landed over many generations.
    Fairness {
        operation: OperationKind,
        samples: usize,
        shares: [f64; NUM_OPTIONS],
        max_deviation: f64,
    },
}

impl From<&Question> for Record {
    fn from(question: &Question) -> Self {
        Record::Question {
            operation: question.operation(),
            prompt: question.prompt(),
            operand_a: question.operand_a(),
            operand_b: question.operand_b(),
            correct_answer: question.correct_answer(),
            options: *question.options(),
        }
    }
}

impl Record {
    pub fn fairness(operation: OperationKind, counts: &PositionCounts) -> Self {
        Record::Fairness {
            operation,
            samples: counts.samples(),
            shares: counts.shares(),
            max_deviation: counts.max_deviation(),
        }
    }

    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
