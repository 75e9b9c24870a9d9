use trivia_core::ids::{CategoryId, QuestionId};

use crate::IntoExternalModel;


#[derive(Clone, PartialEq, Eq, Debug)]
pub struct QuestionModel {
    pub id: QuestionId,

    pub question: Option<String>,

    pub answer: Option<String>,

    pub category: Option<CategoryId>,

    pub difficulty: Option<i32>,
}


#[derive(sqlx::FromRow)]
pub(super) struct InternalQuestionModel {
    pub(super) id: i32,

    pub(super) question: Option<String>,

    pub(super) answer: Option<String>,

    pub(super) category: Option<i32>,

    pub(super) difficulty: Option<i32>,
}

impl IntoExternalModel for InternalQuestionModel {
    type ExternalModel = QuestionModel;

    fn into_external_model(self) -> Self::ExternalModel {
        QuestionModel {
            id: QuestionId::new(self.id),
            question: self.question,
            answer: self.answer,
            category: self.category.map(CategoryId::new),
            difficulty: self.difficulty,
        }
    }
}
