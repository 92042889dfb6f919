mod operation;
mod question;
mod state;

pub use operation::OperationKind;
pub use question::{NUM_OPTIONS, Question};
pub use state::SessionState;
