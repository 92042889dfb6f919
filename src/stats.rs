//! Shuffle fairness measurement.

use tracing::debug;

use crate::error::Result;
use crate::generator::Generator;
use crate::models::{NUM_OPTIONS, OperationKind};
use crate::random::RandomSource;

/// How often the correct answer landed in each display position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionCounts {
    counts: [usize; NUM_OPTIONS],
}

impl PositionCounts {
    /// Counts one sample. Positions past the last option are ignored.
    pub fn record(&mut self, position: usize) {
        if let Some(count) = self.counts.get_mut(position) {
            *count += 1;
        }
    }

    pub fn counts(&self) -> &[usize; NUM_OPTIONS] {
        &self.counts
    }

    pub fn samples(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn shares(&self) -> [f64; NUM_OPTIONS] {
        let samples = self.samples();
        if samples == 0 {
            return [0.0; NUM_OPTIONS];
        }
        self.counts.map(|count| count as f64 / samples as f64)
    }

    /// Largest distance of any position's share from the uniform share.
    pub fn max_deviation(&self) -> f64 {
        let uniform = 1.0 / NUM_OPTIONS as f64;
        self.shares()
            .iter()
            .map(|share| (share - uniform).abs())
            .fold(0.0, f64::max)
    }
}

/// Generates `samples` questions and tallies the correct answer's position.
pub fn measure_fairness(
    generator: &Generator,
    operation: OperationKind,
    samples: usize,
    rng: &mut impl RandomSource,
) -> Result<PositionCounts> {
    let mut counts = PositionCounts::default();

    for _ in 0..samples {
        let question = generator.generate(operation, rng)?;
        counts.record(question.correct_position());
    }

    debug!(operation = %operation, counts = ?counts.counts(), "Measured shuffle fairness");
    Ok(counts)
}
