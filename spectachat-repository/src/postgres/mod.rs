//! PostgreSQL implementations of the repository interfaces.
//!
//! Connection pooling comes from `sqlx::PgPool`; the schema lives in the
//! `migrations/` directory next to this module. Queries are bound at
//! runtime so the crate builds without a reachable database.
mod answer_repository;
mod identity_provider;
mod question_repository;
mod vote_repository;

pub use answer_repository::PostgresAnswerRepository;
pub use identity_provider::PostgresIdentityProvider;
pub use question_repository::PostgresQuestionRepository;
pub use vote_repository::PostgresVoteRepository;
