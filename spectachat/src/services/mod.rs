//! Service wrappers the UI calls: session resolution, the question
//! catalog, and answer submission. Each takes its collaborators as
//! injected trait objects so tests substitute in-memory doubles.
mod answers;
mod catalog;
mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use answers::AnswerSubmission;
pub use catalog::QuestionCatalog;
pub use session::AuthSession;
