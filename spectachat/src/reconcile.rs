//! Tally reconciliation.
//!
//! The displayed tally each viewer maintains is a local approximation that
//! races with other users' votes. The authoritative number is the sum of
//! the vote rows; this job rewrites every stored counter from that sum so
//! the next full reload shows the corrected value.
use std::sync::Arc;

use tracing::info;

use spectachat_repository::{AnswerRepository, QuestionRepository, VoteRepository};
use spectachat_shared::types::TargetType;

use crate::errors::HubError;

/// How many counters a reconciliation pass rewrote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub questions: u64,
    pub answers: u64,
}

/// Recomputes question and answer vote counters from the vote rows.
pub struct TallyReconciler {
    votes: Arc<dyn VoteRepository>,
    questions: Arc<dyn QuestionRepository>,
    answers: Arc<dyn AnswerRepository>,
}

impl TallyReconciler {
    pub fn new(
        votes: Arc<dyn VoteRepository>,
        questions: Arc<dyn QuestionRepository>,
        answers: Arc<dyn AnswerRepository>,
    ) -> Self {
        Self {
            votes,
            questions,
            answers,
        }
    }

    /// Runs one full reconciliation pass over every question and answer.
    pub async fn run(&self) -> Result<ReconcileSummary, HubError> {
        let mut summary = ReconcileSummary::default();

        for id in self.questions.list_ids().await? {
            let tally = self.votes.sum_votes(id, TargetType::Question).await?;
            self.questions.set_vote_count(id, tally).await?;
            summary.questions += 1;
        }

        for id in self.answers.list_ids().await? {
            let tally = self.votes.sum_votes(id, TargetType::Answer).await?;
            self.answers.set_vote_count(id, tally).await?;
            summary.answers += 1;
        }

        info!(
            questions = summary.questions,
            answers = summary.answers,
            "tally reconciliation complete"
        );
        Ok(summary)
    }
}
