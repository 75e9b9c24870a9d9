use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use utoipa::{IntoParams, ToSchema};

use super::CategoryMap;
use crate::ids::{CategoryId, QuestionId};


/// A single formatted question record.
///
/// Every field except `id` is nullable, as questions can be created
/// with any subset of their fields.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[schema(
    example = json!({
        "id": 5,
        "question": "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
        "answer": "Maya Angelou",
        "category": 4,
        "difficulty": 2
    })
)]
pub struct Question {
    pub id: QuestionId,

    pub question: Option<String>,

    pub answer: Option<String>,

    pub category: Option<CategoryId>,

    pub difficulty: Option<i32>,
}



#[derive(Serialize, Clone, PartialEq, Eq, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
pub struct QuestionsResponse {
    pub success: bool,

    pub questions: Vec<Question>,

    pub total_questions: i64,

    /// Always `null` on the plain listing.
    pub current_category: Option<String>,

    #[schema(value_type = Object)]
    pub categories: CategoryMap,
}

impl QuestionsResponse {
    pub fn new(questions: Vec<Question>, total_questions: i64, categories: CategoryMap) -> Self {
        Self {
            success: true,
            questions,
            total_questions,
            current_category: None,
            categories,
        }
    }
}



/// Request body for creating a question.
///
/// No field is required; missing fields are stored as `null`.
/// `category` and `difficulty` may be sent either as JSON integers
/// or as strings containing an integer (e.g. `"5"`).
#[serde_as]
#[derive(Deserialize, Clone, PartialEq, Eq, Debug, Default, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Serialize))]
#[schema(
    example = json!({
        "question": "What is the heaviest organ in the human body?",
        "answer": "The liver",
        "category": "1",
        "difficulty": 4
    })
)]
pub struct QuestionCreationRequest {
    pub question: Option<String>,

    pub answer: Option<String>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub category: Option<i32>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub difficulty: Option<i32>,
}


#[derive(Serialize, Clone, PartialEq, Eq, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
pub struct QuestionCreationResponse {
    pub success: bool,

    pub created_question: QuestionId,

    /// The requested page of questions, including the newly-created one
    /// if it falls on that page.
    pub questions: Vec<Question>,

    pub total_questions: i64,
}

impl QuestionCreationResponse {
    pub fn new(created_question: QuestionId, questions: Vec<Question>, total_questions: i64) -> Self {
        Self {
            success: true,
            created_question,
            questions,
            total_questions,
        }
    }
}



#[derive(Serialize, Clone, PartialEq, Eq, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
#[schema(
    example = json!({
        "success": true,
        "deleted_question_id": 12,
        "total_questions": 18
    })
)]
pub struct QuestionDeletionResponse {
    pub success: bool,

    pub deleted_question_id: QuestionId,

    /// Number of questions remaining after the deletion.
    pub total_questions: i64,
}

impl QuestionDeletionResponse {
    pub fn new(deleted_question_id: QuestionId, total_questions: i64) -> Self {
        Self {
            success: true,
            deleted_question_id,
            total_questions,
        }
    }
}



/// Query string of the search endpoint.
#[derive(Deserialize, Clone, PartialEq, Eq, Debug, IntoParams)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Serialize))]
#[into_params(parameter_in = Query)]
pub struct QuestionSearchQuery {
    /// Case-insensitive substring to look for in question texts.
    pub search: Option<String>,
}


#[derive(Serialize, Clone, PartialEq, Eq, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
pub struct QuestionSearchResponse {
    pub success: bool,

    pub questions: Vec<Question>,

    /// Number of matches across all pages.
    pub total_questions: i64,
}

impl QuestionSearchResponse {
    pub fn new(questions: Vec<Question>, total_questions: i64) -> Self {
        Self {
            success: true,
            questions,
            total_questions,
        }
    }
}



#[derive(Serialize, Clone, PartialEq, Eq, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
pub struct CategoryQuestionsResponse {
    pub success: bool,

    pub questions: Vec<Question>,

    /// Number of questions in the category across all pages.
    pub total_questions: i64,

    /// Display names of the categories with the requested ID
    /// (empty if no such category exists).
    pub current_category: Vec<String>,
}

impl CategoryQuestionsResponse {
    pub fn new(questions: Vec<Question>, total_questions: i64, current_category: Vec<String>) -> Self {
        Self {
            success: true,
            questions,
            total_questions,
            current_category,
        }
    }
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn creation_request_accepts_numeric_strings() {
        let request: QuestionCreationRequest = serde_json::from_str(
            r#"{"question": "what is my name", "answer": "Stephen", "category": "5", "difficulty": "2"}"#,
        )
        .unwrap();

        assert_eq!(request.category, Some(5));
        assert_eq!(request.difficulty, Some(2));
    }

    #[test]
    fn creation_request_accepts_integers() {
        let request: QuestionCreationRequest =
            serde_json::from_str(r#"{"category": 3, "difficulty": 1}"#).unwrap();

        assert_eq!(request.category, Some(3));
        assert_eq!(request.difficulty, Some(1));
        assert_eq!(request.question, None);
    }

    #[test]
    fn creation_request_allows_missing_and_null_fields() {
        let request: QuestionCreationRequest =
            serde_json::from_str(r#"{"answer": null, "difficulty": null}"#).unwrap();

        assert_eq!(request, QuestionCreationRequest::default());
    }

    #[test]
    fn creation_request_rejects_non_numeric_category() {
        let result = serde_json::from_str::<QuestionCreationRequest>(r#"{"category": "science"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn question_with_missing_fields_serializes_nulls() {
        let question = Question {
            id: QuestionId::new(7),
            question: Some("Q?".to_string()),
            answer: None,
            category: None,
            difficulty: Some(1),
        };

        assert_eq!(
            serde_json::to_value(question).unwrap(),
            serde_json::json!({
                "id": 7,
                "question": "Q?",
                "answer": null,
                "category": null,
                "difficulty": 1
            })
        );
    }

    #[test]
    fn questions_response_has_null_current_category() {
        let response = QuestionsResponse::new(Vec::new(), 0, CategoryMap::new());
        let value = serde_json::to_value(response).unwrap();

        assert_eq!(value["success"], serde_json::json!(true));
        assert!(value["current_category"].is_null());
        assert_eq!(value["categories"], serde_json::json!({}));
    }
}
