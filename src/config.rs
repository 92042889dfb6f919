//! Generator configuration.
//!
//! Operand ranges and decoy spreads differ per operation. They are plain
//! data so a deployment can tune them from a JSON file.

use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, Result};
use crate::models::OperationKind;

/// Default cap on perturbation draws while searching for decoys.
pub const DEFAULT_MAX_DECOY_ATTEMPTS: u32 = 1000;

/// Smallest spread that always leaves room for three positive decoys.
pub const MIN_DECOY_SPREAD: i64 = 3;

/// Inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: i64,
    pub max: i64,
}

impl ValueRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Ranges for one operation.
///
/// For division `operand_a` is the divisor range and `operand_b` the
/// quotient range; the dividend is derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationConfig {
    pub operand_a: ValueRange,
    pub operand_b: ValueRange,
    /// Decoys are drawn from `correct ± decoy_spread`.
    pub decoy_spread: i64,
}

impl OperationConfig {
    pub const fn new(operand_a: ValueRange, operand_b: ValueRange, decoy_spread: i64) -> Self {
        Self {
            operand_a,
            operand_b,
            decoy_spread,
        }
    }

    pub fn default_for(operation: OperationKind) -> Self {
        match operation {
            OperationKind::Addition => {
                Self::new(ValueRange::new(1, 20), ValueRange::new(1, 20), 5)
            }
            OperationKind::Subtraction => {
                Self::new(ValueRange::new(11, 20), ValueRange::new(1, 10), 5)
            }
            OperationKind::Multiplication => {
                Self::new(ValueRange::new(1, 12), ValueRange::new(1, 12), 10)
            }
            OperationKind::Division => {
                Self::new(ValueRange::new(2, 11), ValueRange::new(1, 10), 3)
            }
        }
    }

    fn validate(&self, operation: OperationKind) -> Result<()> {
        for (label, range) in [("operand_a", self.operand_a), ("operand_b", self.operand_b)] {
            if range.min > range.max {
                return Err(GeneratorError::configuration(format!(
                    "{operation}.{label}: min {} is greater than max {}",
                    range.min, range.max
                )));
            }
            if range.min < 1 {
                return Err(GeneratorError::configuration(format!(
                    "{operation}.{label}: bounds must be positive, got min {}",
                    range.min
                )));
            }
        }

        if operation == OperationKind::Subtraction && self.operand_a.min <= self.operand_b.max {
            return Err(GeneratorError::configuration(format!(
                "subtraction: minuend min {} must exceed subtrahend max {}",
                self.operand_a.min, self.operand_b.max
            )));
        }

        // Three decoys must fit above the answer even when it is 1.
        if self.decoy_spread < MIN_DECOY_SPREAD {
            return Err(GeneratorError::configuration(format!(
                "{operation}.decoy_spread: must be at least {MIN_DECOY_SPREAD}, got {}",
                self.decoy_spread
            )));
        }

        // Largest answer plus the widest decoy must stay within i64.
        let largest_answer = match operation {
            OperationKind::Addition => self.operand_a.max.checked_add(self.operand_b.max),
            OperationKind::Subtraction => Some(self.operand_a.max),
            OperationKind::Multiplication | OperationKind::Division => {
                self.operand_a.max.checked_mul(self.operand_b.max)
            }
        };
        if largest_answer
            .and_then(|answer| answer.checked_add(self.decoy_spread))
            .is_none()
        {
            return Err(GeneratorError::configuration(format!(
                "{operation}: operand ranges and decoy_spread {} overflow 64-bit answers",
                self.decoy_spread
            )));
        }

        Ok(())
    }
}

/// Full configuration for all four operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub max_decoy_attempts: u32,
    pub addition: OperationConfig,
    pub subtraction: OperationConfig,
    pub multiplication: OperationConfig,
    pub division: OperationConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_decoy_attempts: DEFAULT_MAX_DECOY_ATTEMPTS,
            addition: OperationConfig::default_for(OperationKind::Addition),
            subtraction: OperationConfig::default_for(OperationKind::Subtraction),
            multiplication: OperationConfig::default_for(OperationKind::Multiplication),
            division: OperationConfig::default_for(OperationKind::Division),
        }
    }
}

impl GeneratorConfig {
    pub fn operation(&self, operation: OperationKind) -> &OperationConfig {
        match operation {
            OperationKind::Addition => &self.addition,
            OperationKind::Subtraction => &self.subtraction,
            OperationKind::Multiplication => &self.multiplication,
            OperationKind::Division => &self.division,
        }
    }

    /// Checks every operation's ranges and the retry budget.
    pub fn validate(&self) -> Result<()> {
        if self.max_decoy_attempts == 0 {
            return Err(GeneratorError::configuration(
                "max_decoy_attempts must be at least 1",
            ));
        }

        for operation in OperationKind::ALL {
            self.operation(operation).validate(operation)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_division_ranges() {
        let config = GeneratorConfig::default();
        assert_eq!(config.division.operand_a, ValueRange::new(2, 11));
        assert_eq!(config.division.operand_b, ValueRange::new(1, 10));
        assert_eq!(config.division.decoy_spread, 3);
        assert_eq!(config.multiplication.decoy_spread, 10);
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let mut config = GeneratorConfig::default();
        config.addition.operand_b = ValueRange::new(9, 3);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, GeneratorError::Configuration(msg) if msg.contains("addition.operand_b")));
    }

    #[test]
    fn test_non_positive_operands_are_rejected() {
        let mut config = GeneratorConfig::default();
        config.multiplication.operand_a = ValueRange::new(0, 12);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overlapping_subtraction_ranges_are_rejected() {
        let mut config = GeneratorConfig::default();
        config.subtraction.operand_a = ValueRange::new(5, 20);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_narrow_spread_is_rejected() {
        let mut config = GeneratorConfig::default();
        config.division.decoy_spread = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overflowing_product_is_rejected() {
        let mut config = GeneratorConfig::default();
        config.multiplication.operand_a = ValueRange::new(4_000_000_000, 4_000_000_000);
        config.multiplication.operand_b = ValueRange::new(4_000_000_000, 4_000_000_000);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, GeneratorError::Configuration(msg) if msg.contains("multiplication")));
    }

    #[test]
    fn test_overflowing_spread_is_rejected() {
        let mut config = GeneratorConfig::default();
        config.addition.decoy_spread = i64::MAX;
        assert!(config.validate().is_err());

        let mut config = GeneratorConfig::default();
        config.division.operand_b = ValueRange::new(1, i64::MAX);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_attempt_budget_is_rejected() {
        let config = GeneratorConfig {
            max_decoy_attempts: 0,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let json = r#"{ "division": { "operand_a": {"min": 2, "max": 5}, "operand_b": {"min": 1, "max": 5}, "decoy_spread": 4 } }"#;
        let config: GeneratorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.division.decoy_spread, 4);
        assert_eq!(config.addition, OperationConfig::default_for(OperationKind::Addition));
        assert_eq!(config.max_decoy_attempts, DEFAULT_MAX_DECOY_ATTEMPTS);
    }
}
