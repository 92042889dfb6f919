use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

/// The four arithmetic operations a practice question can exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl OperationKind {
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Addition,
        OperationKind::Subtraction,
        OperationKind::Multiplication,
        OperationKind::Division,
    ];

    /// Symbol shown between the operands in a prompt.
    pub fn symbol(self) -> char {
        match self {
            OperationKind::Addition => '+',
            OperationKind::Subtraction => '-',
            OperationKind::Multiplication => '×',
            OperationKind::Division => '÷',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OperationKind::Addition => "addition",
            OperationKind::Subtraction => "subtraction",
            OperationKind::Multiplication => "multiplication",
            OperationKind::Division => "division",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperationKind {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "addition" | "add" | "+" => Ok(OperationKind::Addition),
            "subtraction" | "sub" | "-" => Ok(OperationKind::Subtraction),
            "multiplication" | "mul" | "*" | "x" | "×" => Ok(OperationKind::Multiplication),
            "division" | "div" | "/" | "÷" => Ok(OperationKind::Division),
            _ => Err(GeneratorError::UnsupportedOperation(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operation_names() {
        assert_eq!("addition".parse(), Ok(OperationKind::Addition));
        assert_eq!("SUB".parse(), Ok(OperationKind::Subtraction));
        assert_eq!(" x ".parse(), Ok(OperationKind::Multiplication));
        assert_eq!("÷".parse(), Ok(OperationKind::Division));
    }

    #[test]
    fn test_parse_unknown_operation() {
        let err = "modulo".parse::<OperationKind>().unwrap_err();
        assert_eq!(err, GeneratorError::UnsupportedOperation("modulo".to_string()));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for op in OperationKind::ALL {
            assert_eq!(op.to_string().parse(), Ok(op));
        }
    }

    #[test]
    fn test_serialization_uses_lowercase_names() {
        let json = serde_json::to_string(&OperationKind::Multiplication).unwrap();
        assert_eq!(json, "\"multiplication\"");
    }
}
