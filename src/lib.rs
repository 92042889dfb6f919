//! # arith-quiz
//!
//! Multiple-choice practice questions for the four basic arithmetic
//! operations.
//!
//! ## Usage
//!
//! ```rust
//! use arith_quiz::{generate, OperationKind, RngSource};
//!
//! let mut rng = RngSource::seeded(7);
//! let question = generate(OperationKind::Division, &mut rng).unwrap();
//!
//! assert_eq!(question.operand_a() % question.operand_b(), 0);
//! assert!(question.options().contains(&question.correct_answer()));
//! ```
//!
//! Every question carries four distinct, strictly positive options with
//! exactly one correct answer. Randomness is injected through
//! [`RandomSource`], so a [`ScriptedSource`] reproduces a question exactly.

pub mod config;
pub mod console;
mod data;
mod error;
pub mod generator;
mod models;
pub mod protocol;
pub mod random;
pub mod session;
pub mod stats;

pub use config::{GeneratorConfig, OperationConfig, ValueRange};
pub use data::{LoadError, load_config_from_json};
pub use error::{GeneratorError, Result};
pub use generator::{Generator, generate};
pub use models::{NUM_OPTIONS, OperationKind, Question, SessionState};
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use session::{PracticeSession, Tally};
