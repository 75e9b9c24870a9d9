use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use utoipa::ToSchema;

use super::Question;


/// The category a quiz round is played in.
///
/// Any other fields the client sends along (e.g. the display `type`) are ignored.
#[serde_as]
#[derive(Deserialize, Clone, PartialEq, Eq, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Serialize))]
pub struct QuizCategory {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub id: Option<i32>,
}


/// Request body for the next quiz question.
///
/// Both fields are required for the request to be processed;
/// they are optional here so that their absence can be reported
/// with the same error as any other malformed quiz request.
#[derive(Deserialize, Clone, PartialEq, Eq, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Serialize))]
#[schema(
    example = json!({
        "previous_questions": [20, 21],
        "quiz_category": {
            "type": "Science",
            "id": 1
        }
    })
)]
pub struct QuizQuestionRequest {
    pub previous_questions: Option<Vec<i32>>,

    pub quiz_category: Option<QuizCategory>,
}


#[derive(Serialize, Clone, PartialEq, Eq, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
pub struct QuizQuestionResponse {
    pub success: bool,

    /// `null` when every question in the category has already been asked.
    pub question: Option<Question>,
}

impl QuizQuestionResponse {
    pub fn new(question: Option<Question>) -> Self {
        Self {
            success: true,
            question,
        }
    }
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_frontend_payload() {
        let request: QuizQuestionRequest = serde_json::from_str(
            r#"{"previous_questions": [1, 4], "quiz_category": {"type": "Science", "id": "1"}}"#,
        )
        .unwrap();

        assert_eq!(request.previous_questions, Some(vec![1, 4]));
        assert_eq!(
            request.quiz_category,
            Some(QuizCategory { id: Some(1) })
        );
    }

    #[test]
    fn missing_quiz_category_is_none() {
        let request: QuizQuestionRequest =
            serde_json::from_str(r#"{"previous_questions": []}"#).unwrap();

        assert_eq!(request.quiz_category, None);
    }

    #[test]
    fn quiz_category_without_id_parses_with_none() {
        let request: QuizQuestionRequest =
            serde_json::from_str(r#"{"previous_questions": [], "quiz_category": {"type": "Art"}}"#)
                .unwrap();

        assert_eq!(
            request.quiz_category,
            Some(QuizCategory { id: None })
        );
    }

    #[test]
    fn null_question_serializes_as_null() {
        let value = serde_json::to_value(QuizQuestionResponse::new(None)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "success": true, "question": null })
        );
    }
}
