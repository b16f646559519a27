use std::sync::Arc;

use spectachat_repository::{
    AnswerRepository, IdentityProvider, PostgresAnswerRepository, PostgresIdentityProvider,
    PostgresQuestionRepository, PostgresVoteRepository, QuestionRepository, VoteRepository,
};
use spectachat_shared::types::{TargetId, TargetType};
use spectachat_votes::VoteTracker;

use crate::errors::HubError;
use crate::reconcile::TallyReconciler;
use crate::services::{AnswerSubmission, AuthSession, QuestionCatalog};

/// `Dependencies` holds the wired collaborators of the service layer.
///
/// Repositories are stored as trait objects so tests and alternative
/// backends can substitute them; everything downstream is built from
/// these four seams.
pub struct Dependencies {
    pub identity: Arc<dyn IdentityProvider>,
    pub votes: Arc<dyn VoteRepository>,
    pub questions: Arc<dyn QuestionRepository>,
    pub answers: Arc<dyn AnswerRepository>,
}

impl Dependencies {
    /// Creates a new `Dependencies` instance against PostgreSQL.
    ///
    /// Reads `DATABASE_URL` (required) and `SESSION_TOKEN` (optional; its
    /// absence means an anonymous viewer) from the environment.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` on successful initialization or a
    /// `HubError` if the pool or a repository fails to initialize.
    pub async fn new() -> Result<Self, HubError> {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let session_token = std::env::var("SESSION_TOKEN").ok();

        let pool = sqlx::PgPool::connect(&database_url).await?;

        let identity: Arc<dyn IdentityProvider> =
            Arc::new(PostgresIdentityProvider::new(pool.clone(), session_token));
        let votes: Arc<dyn VoteRepository> =
            Arc::new(PostgresVoteRepository::new(pool.clone()).await?);
        let questions: Arc<dyn QuestionRepository> =
            Arc::new(PostgresQuestionRepository::new(pool.clone()).await?);
        let answers: Arc<dyn AnswerRepository> =
            Arc::new(PostgresAnswerRepository::new(pool).await?);

        Ok(Self {
            identity,
            votes,
            questions,
            answers,
        })
    }

    /// The session service for the header and route guards.
    pub fn session(&self) -> AuthSession {
        AuthSession::new(self.identity.clone())
    }

    /// The question catalog service.
    pub fn catalog(&self) -> QuestionCatalog {
        QuestionCatalog::new(
            self.questions.clone(),
            self.answers.clone(),
            self.identity.clone(),
        )
    }

    /// The answer submission service.
    pub fn answer_submission(&self) -> AnswerSubmission {
        AnswerSubmission::new(
            self.answers.clone(),
            self.questions.clone(),
            self.identity.clone(),
        )
    }

    /// Opens a vote tracker for one target, seeded with the tally the
    /// caller last read for it.
    pub async fn vote_tracker(
        &self,
        target_id: TargetId,
        target_type: TargetType,
        initial_tally: i64,
    ) -> VoteTracker {
        VoteTracker::open(
            target_id,
            target_type,
            initial_tally,
            self.identity.clone(),
            self.votes.clone(),
        )
        .await
    }

    /// The tally reconciliation job.
    pub fn reconciler(&self) -> TallyReconciler {
        TallyReconciler::new(
            self.votes.clone(),
            self.questions.clone(),
            self.answers.clone(),
        )
    }
}
