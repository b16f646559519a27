//! This module defines and re-exports the interfaces for the backing store.
//! It serves as a central point for accessing traits related to data
//! interaction.
mod answers;
mod identity;
mod questions;
mod votes;

pub use answers::AnswerRepository;
pub use identity::IdentityProvider;
pub use questions::QuestionRepository;
pub use votes::VoteRepository;
