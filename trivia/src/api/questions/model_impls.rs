use trivia_core::api_models::Question;
use trivia_database::entities;

use crate::api::traits::IntoApiModel;


impl IntoApiModel for entities::QuestionModel {
    type ApiModel = Question;

    fn into_api_model(self) -> Self::ApiModel {
        Question {
            id: self.id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}


/// Formats every question in the list.
pub fn into_api_questions(questions: Vec<entities::QuestionModel>) -> Vec<Question> {
    questions
        .into_iter()
        .map(IntoApiModel::into_api_model)
        .collect()
}



#[cfg(test)]
mod test {
    use trivia_core::ids::{CategoryId, QuestionId};

    use super::*;

    #[test]
    fn formats_all_fields() {
        let formatted = entities::QuestionModel {
            id: QuestionId::new(9),
            question: Some("What boxer's original name is Cassius Clay?".to_string()),
            answer: Some("Muhammad Ali".to_string()),
            category: Some(CategoryId::new(4)),
            difficulty: None,
        }
        .into_api_model();

        assert_eq!(
            serde_json::to_value(formatted).unwrap(),
            serde_json::json!({
                "id": 9,
                "question": "What boxer's original name is Cassius Clay?",
                "answer": "Muhammad Ali",
                "category": 4,
                "difficulty": null
            })
        );
    }
}
