//! # SpecTaChat Repository
//! This crate provides traits and implementations for interacting with the
//! hub's backing store. It includes definitions for errors, interfaces, and
//! concrete implementations for PostgreSQL.
pub mod errors;
pub mod interfaces;
pub mod postgres;

pub use errors::RepositoryError;
pub use interfaces::{AnswerRepository, IdentityProvider, QuestionRepository, VoteRepository};
pub use postgres::{
    PostgresAnswerRepository, PostgresIdentityProvider, PostgresQuestionRepository,
    PostgresVoteRepository,
};
