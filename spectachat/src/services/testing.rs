//! In-memory repository doubles shared by the service and reconciler tests.
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use spectachat_repository::{
    AnswerRepository, IdentityProvider, QuestionRepository, RepositoryError, VoteRepository,
};
use spectachat_shared::types::{
    Answer, AnswerId, Category, Identity, NewAnswer, NewQuestion, Question, QuestionId, TargetId,
    TargetType, UserId, VoteKey, VoteRecord, VoteState,
};

pub struct StaticIdentity {
    identity: Option<Identity>,
}

impl StaticIdentity {
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    pub fn signed_in() -> Self {
        Self {
            identity: Some(Identity {
                user_id: Uuid::new_v4(),
                email: "viewer@example.com".into(),
                username: "viewer".into(),
            }),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.identity.as_ref().expect("anonymous identity").user_id
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn current_identity(&self) -> Result<Option<Identity>, RepositoryError> {
        Ok(self.identity.clone())
    }
}

#[derive(Default)]
pub struct MemoryQuestions {
    rows: Mutex<Vec<Question>>,
    searches: Mutex<Vec<String>>,
    increments: Mutex<Vec<QuestionId>>,
}

impl MemoryQuestions {
    pub fn stored(&self) -> Vec<Question> {
        self.rows.lock().unwrap().clone()
    }

    pub fn search_queries(&self) -> Vec<String> {
        self.searches.lock().unwrap().clone()
    }

    pub fn increments(&self) -> Vec<QuestionId> {
        self.increments.lock().unwrap().clone()
    }

    pub fn votes_of(&self, id: QuestionId) -> Option<i64> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .map(|q| q.votes)
    }
}

#[async_trait]
impl QuestionRepository for MemoryQuestions {
    async fn insert_question(
        &self,
        user_id: UserId,
        question: &NewQuestion,
    ) -> Result<Question, RepositoryError> {
        let now = Utc::now();
        let stored = Question {
            id: Uuid::new_v4(),
            title: question.title.clone(),
            content: question.content.clone(),
            category: question.category,
            user_id,
            created_at: now,
            updated_at: now,
            votes: 0,
            answer_count: 0,
        };
        self.rows.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        Ok(self.rows.lock().unwrap().iter().find(|q| q.id == id).cloned())
    }

    async fn list_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<Question>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Question>, RepositoryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().rev().take(limit as usize).cloned().collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<Question>, RepositoryError> {
        self.searches.lock().unwrap().push(query.to_owned());
        let needle = query.to_lowercase();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|q| {
                q.title.to_lowercase().contains(&needle)
                    || q.content.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    async fn increment_answer_count(&self, id: QuestionId) -> Result<(), RepositoryError> {
        self.increments.lock().unwrap().push(id);
        if let Some(q) = self.rows.lock().unwrap().iter_mut().find(|q| q.id == id) {
            q.answer_count += 1;
        }
        Ok(())
    }

    async fn list_ids(&self) -> Result<Vec<QuestionId>, RepositoryError> {
        Ok(self.rows.lock().unwrap().iter().map(|q| q.id).collect())
    }

    async fn set_vote_count(&self, id: QuestionId, votes: i64) -> Result<(), RepositoryError> {
        if let Some(q) = self.rows.lock().unwrap().iter_mut().find(|q| q.id == id) {
            q.votes = votes;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryAnswers {
    rows: Mutex<Vec<Answer>>,
}

impl MemoryAnswers {
    pub fn stored(&self) -> Vec<Answer> {
        self.rows.lock().unwrap().clone()
    }

    pub fn seed_answer(&self, question_id: QuestionId, user_id: UserId) -> AnswerId {
        let now = Utc::now();
        let id = Uuid::new_v4();
        self.rows.lock().unwrap().push(Answer {
            id,
            question_id,
            content: "seeded answer".into(),
            user_id,
            created_at: now,
            updated_at: now,
            votes: 0,
            is_accepted: false,
        });
        id
    }

    pub fn votes_of(&self, id: AnswerId) -> Option<i64> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.votes)
    }
}

#[async_trait]
impl AnswerRepository for MemoryAnswers {
    async fn insert_answer(
        &self,
        user_id: UserId,
        answer: &NewAnswer,
    ) -> Result<Answer, RepositoryError> {
        let now = Utc::now();
        let stored = Answer {
            id: Uuid::new_v4(),
            question_id: answer.question_id,
            content: answer.content.clone(),
            user_id,
            created_at: now,
            updated_at: now,
            votes: 0,
            is_accepted: false,
        };
        self.rows.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn list_for_question(
        &self,
        question_id: QuestionId,
    ) -> Result<Vec<Answer>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.question_id == question_id)
            .cloned()
            .collect())
    }

    async fn list_ids(&self) -> Result<Vec<AnswerId>, RepositoryError> {
        Ok(self.rows.lock().unwrap().iter().map(|a| a.id).collect())
    }

    async fn set_vote_count(&self, id: AnswerId, votes: i64) -> Result<(), RepositoryError> {
        if let Some(a) = self.rows.lock().unwrap().iter_mut().find(|a| a.id == id) {
            a.votes = votes;
        }
        Ok(())
    }
}

/// Vote store double that only answers aggregation queries; the reconciler
/// never touches individual rows.
#[derive(Default)]
pub struct MemoryVoteSums {
    sums: Mutex<HashMap<(TargetId, TargetType), i64>>,
}

impl MemoryVoteSums {
    pub fn set_sum(&self, target_id: TargetId, target_type: TargetType, sum: i64) {
        self.sums.lock().unwrap().insert((target_id, target_type), sum);
    }
}

#[async_trait]
impl VoteRepository for MemoryVoteSums {
    async fn find_vote(&self, _key: &VoteKey) -> Result<Option<VoteRecord>, RepositoryError> {
        Ok(None)
    }

    async fn insert_vote(&self, _record: &VoteRecord) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn update_vote(
        &self,
        _key: &VoteKey,
        _state: VoteState,
    ) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn delete_vote(&self, _key: &VoteKey) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn sum_votes(
        &self,
        target_id: TargetId,
        target_type: TargetType,
    ) -> Result<i64, RepositoryError> {
        Ok(self
            .sums
            .lock()
            .unwrap()
            .get(&(target_id, target_type))
            .copied()
            .unwrap_or(0))
    }
}
