mod answer;
mod category;
mod identity;
mod question;
mod vote;

pub use answer::{Answer, NewAnswer};
pub use category::Category;
pub use identity::Identity;
pub use question::{NewQuestion, Question};
pub use vote::{TargetType, VoteDirection, VoteKey, VoteRecord, VoteState};

/// Identifier of a registered user.
pub type UserId = uuid::Uuid;
/// Identifier of a question.
pub type QuestionId = uuid::Uuid;
/// Identifier of an answer.
pub type AnswerId = uuid::Uuid;
/// Identifier of a votable entity (a question or an answer).
pub type TargetId = uuid::Uuid;
