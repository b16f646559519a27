//! Answer submission: posting an answer and bumping the question's
//! answer counter.
use std::sync::Arc;

use spectachat_repository::{AnswerRepository, IdentityProvider, QuestionRepository};
use spectachat_shared::types::{Answer, NewAnswer};

use crate::errors::ServiceError;

/// Posts answers on behalf of the signed-in viewer.
///
/// A successful post is an insert followed by one answer-counter
/// increment on the parent question, in that order. The pair is not
/// atomic; a crash between the two under-counts until the next reload,
/// the same tradeoff the tally makes.
pub struct AnswerSubmission {
    answers: Arc<dyn AnswerRepository>,
    questions: Arc<dyn QuestionRepository>,
    identity: Arc<dyn IdentityProvider>,
}

impl AnswerSubmission {
    pub fn new(
        answers: Arc<dyn AnswerRepository>,
        questions: Arc<dyn QuestionRepository>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            answers,
            questions,
            identity,
        }
    }

    /// Posts an answer to a question.
    ///
    /// Refuses anonymous viewers and blank content before any write.
    pub async fn post(&self, answer: &NewAnswer) -> Result<Answer, ServiceError> {
        let viewer = self
            .identity
            .current_identity()
            .await?
            .ok_or(ServiceError::Unauthenticated)?;

        if answer.content.trim().is_empty() {
            return Err(ServiceError::Validation("Answer content is required"));
        }

        let stored = self.answers.insert_answer(viewer.user_id, answer).await?;
        self.questions
            .increment_answer_count(answer.question_id)
            .await?;

        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{MemoryAnswers, MemoryQuestions, StaticIdentity};
    use spectachat_shared::types::{Category, NewQuestion};

    async fn seeded_question(
        questions: &MemoryQuestions,
        identity: &StaticIdentity,
    ) -> spectachat_shared::types::Question {
        questions
            .insert_question(
                identity.user_id(),
                &NewQuestion {
                    title: "Do polarized clip-ons fit all frames?".into(),
                    content: "Looking at magnetic clip-ons.".into(),
                    category: Category::Frames,
                },
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn post_refuses_anonymous_without_writing() {
        let answers = Arc::new(MemoryAnswers::default());
        let questions = Arc::new(MemoryQuestions::default());
        let submission = AnswerSubmission::new(
            answers.clone(),
            questions.clone(),
            Arc::new(StaticIdentity::anonymous()),
        );

        let err = submission
            .post(&NewAnswer {
                question_id: uuid::Uuid::new_v4(),
                content: "an answer".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Unauthenticated));
        assert!(answers.stored().is_empty());
        assert!(questions.increments().is_empty());
    }

    #[tokio::test]
    async fn post_refuses_blank_content() {
        let answers = Arc::new(MemoryAnswers::default());
        let questions = Arc::new(MemoryQuestions::default());
        let submission = AnswerSubmission::new(
            answers.clone(),
            questions.clone(),
            Arc::new(StaticIdentity::signed_in()),
        );

        let err = submission
            .post(&NewAnswer {
                question_id: uuid::Uuid::new_v4(),
                content: "  \n ".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(answers.stored().is_empty());
    }

    #[tokio::test]
    async fn post_inserts_and_increments_exactly_once() {
        let identity = Arc::new(StaticIdentity::signed_in());
        let answers = Arc::new(MemoryAnswers::default());
        let questions = Arc::new(MemoryQuestions::default());
        let question = seeded_question(&questions, &identity).await;

        let submission =
            AnswerSubmission::new(answers.clone(), questions.clone(), identity.clone());
        let stored = submission
            .post(&NewAnswer {
                question_id: question.id,
                content: "Magnets vary by frame bridge width.".into(),
            })
            .await
            .unwrap();

        assert_eq!(stored.question_id, question.id);
        assert_eq!(stored.user_id, identity.user_id());
        assert_eq!(questions.increments(), vec![question.id]);
        assert_eq!(
            questions.stored()[0].answer_count,
            1,
            "counter bumps once per posted answer"
        );
    }
}
