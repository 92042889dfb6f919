/// Where a practice session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// A question is shown and awaits a selection.
    #[default]
    Presenting,
    /// The last selection was right; acknowledging moves to a new question.
    FeedbackCorrect,
    /// The last selection was wrong; acknowledging retries the same question.
    FeedbackIncorrect,
}
