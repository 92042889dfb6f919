//! Multiple-choice question generation.
//!
//! A question is built in a fixed draw order so that a scripted
//! [`RandomSource`] reproduces it exactly:
//!
//! 1. operand A (the divisor for division)
//! 2. operand B (the quotient for division)
//! 3. one perturbation per decoy candidate, until three are accepted
//! 4. one swap index per Fisher–Yates step, for `i = 3, 2, 1`

use tracing::{debug, trace, warn};

use crate::config::{GeneratorConfig, OperationConfig};
use crate::error::{GeneratorError, Result};
use crate::models::{NUM_OPTIONS, OperationKind, Question};
use crate::random::RandomSource;

const NUM_DECOYS: usize = NUM_OPTIONS - 1;

/// Generates a question with the default configuration.
pub fn generate(operation: OperationKind, rng: &mut impl RandomSource) -> Result<Question> {
    Generator::default().generate(operation, rng)
}

/// Question generator bound to a validated configuration.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate(&self, operation: OperationKind, rng: &mut impl RandomSource) -> Result<Question> {
        let settings = self.config.operation(operation);
        let (operand_a, operand_b, correct_answer) = draw_operands(operation, settings, rng);

        let decoys = draw_decoys(
            correct_answer,
            settings.decoy_spread,
            self.config.max_decoy_attempts,
            rng,
        )?;

        let mut options = [decoys[0], decoys[1], decoys[2], correct_answer];
        shuffle(&mut options, rng);

        let question = Question::new(operation, operand_a, operand_b, correct_answer, options);
        debug!(
            operation = %operation,
            prompt = %question.prompt(),
            answer = correct_answer,
            options = ?options,
            "Generated question"
        );

        Ok(question)
    }
}

/// Returns `(operand_a, operand_b, correct_answer)`.
fn draw_operands(
    operation: OperationKind,
    settings: &OperationConfig,
    rng: &mut impl RandomSource,
) -> (i64, i64, i64) {
    let a = rng.next_in_range(settings.operand_a.min, settings.operand_a.max);
    let b = rng.next_in_range(settings.operand_b.min, settings.operand_b.max);

    match operation {
        OperationKind::Addition => (a, b, a + b),
        OperationKind::Subtraction => (a, b, a - b),
        OperationKind::Multiplication => (a, b, a * b),
        // The quotient is picked first so the dividend always divides evenly.
        OperationKind::Division => {
            let (divisor, quotient) = (a, b);
            (divisor * quotient, divisor, quotient)
        }
    }
}

/// Rejection-samples three distinct positive decoys around `correct`.
fn draw_decoys(
    correct: i64,
    spread: i64,
    max_attempts: u32,
    rng: &mut impl RandomSource,
) -> Result<[i64; NUM_DECOYS]> {
    let mut decoys: Vec<i64> = Vec::with_capacity(NUM_DECOYS);

    for _ in 0..max_attempts {
        let candidate = correct + rng.next_in_range(-spread, spread);

        if candidate <= 0 || candidate == correct || decoys.contains(&candidate) {
            trace!(candidate, correct, "Rejected decoy");
            continue;
        }

        decoys.push(candidate);
        if decoys.len() == NUM_DECOYS {
            return Ok([decoys[0], decoys[1], decoys[2]]);
        }
    }

    warn!(
        correct,
        spread,
        max_attempts,
        found = decoys.len(),
        "Decoy search exhausted its attempt budget"
    );
    Err(GeneratorError::configuration(format!(
        "found only {} of {NUM_DECOYS} decoys for answer {correct} within ±{spread} after {max_attempts} attempts",
        decoys.len()
    )))
}

/// Fisher–Yates shuffle driven by the injected source.
fn shuffle<T>(items: &mut [T], rng: &mut impl RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.next_in_range(0, i as i64) as usize;
        items.swap(i, j);
    }
}
