//! Question catalog: asking, browsing, searching, and question detail.
use std::sync::Arc;

use spectachat_repository::{AnswerRepository, IdentityProvider, QuestionRepository};
use spectachat_shared::types::{Answer, Category, NewQuestion, Question, QuestionId};

use crate::errors::ServiceError;

/// The question-facing service behind the home page, the ask form, the
/// search page, and the question detail page.
///
/// Reads are open to anonymous viewers; asking requires a resolved
/// identity and non-blank input, refused before any repository write.
pub struct QuestionCatalog {
    questions: Arc<dyn QuestionRepository>,
    answers: Arc<dyn AnswerRepository>,
    identity: Arc<dyn IdentityProvider>,
}

impl QuestionCatalog {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        answers: Arc<dyn AnswerRepository>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            questions,
            answers,
            identity,
        }
    }

    /// Posts a new question authored by the signed-in viewer.
    pub async fn ask(&self, question: &NewQuestion) -> Result<Question, ServiceError> {
        let viewer = self
            .identity
            .current_identity()
            .await?
            .ok_or(ServiceError::Unauthenticated)?;

        if question.title.trim().is_empty() {
            return Err(ServiceError::Validation("Title is required"));
        }
        if question.content.trim().is_empty() {
            return Err(ServiceError::Validation("Content is required"));
        }

        Ok(self
            .questions
            .insert_question(viewer.user_id, question)
            .await?)
    }

    /// Lists the questions filed under a category, newest first.
    pub async fn browse(&self, category: Category) -> Result<Vec<Question>, ServiceError> {
        Ok(self.questions.list_by_category(category).await?)
    }

    /// Lists the most recently asked questions.
    pub async fn recent(&self, limit: i64) -> Result<Vec<Question>, ServiceError> {
        Ok(self.questions.list_recent(limit).await?)
    }

    /// Searches question titles and contents, newest first.
    ///
    /// A blank query matches nothing rather than everything.
    pub async fn search(&self, query: &str) -> Result<Vec<Question>, ServiceError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.questions.search(query).await?)
    }

    /// Fetches a question together with its answers, oldest answer first.
    pub async fn detail(
        &self,
        id: QuestionId,
    ) -> Result<Option<(Question, Vec<Answer>)>, ServiceError> {
        let Some(question) = self.questions.get_question(id).await? else {
            return Ok(None);
        };
        let answers = self.answers.list_for_question(id).await?;
        Ok(Some((question, answers)))
    }
}
