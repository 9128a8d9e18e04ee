use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use models::question;
use service::quiz_service;

use crate::errors::{ApiError, AppJson};
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// The key itself is required; an explicit `null` plays across all
    /// categories, while an absent key is a malformed request.
    pub quiz_category: Option<QuizCategory>,
    #[serde(default)]
    pub previous_questions: Vec<i32>,
}

/// The client posts its full category object; only the id matters here. A
/// `quiz_category` without an id is rejected at deserialization (a client
/// error, not a 500).
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i32,
}

#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    /// `null` once the candidate set is exhausted.
    pub question: Option<question::Model>,
}

/// POST /quizzes — one random question outside `previous_questions`,
/// narrowed to `quiz_category` when given.
pub async fn next_question(
    State(state): State<AppState>,
    AppJson(req): AppJson<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let category = req.quiz_category.map(|c| c.id);
    let question =
        quiz_service::next_question(&state.db, category, &req.previous_questions).await?;
    Ok(Json(QuizResponse { success: true, question }))
}

#[cfg(test)]
mod tests {
    use super::QuizRequest;

    #[test]
    fn missing_quiz_category_key_is_rejected() {
        assert!(serde_json::from_str::<QuizRequest>(r#"{"previous_questions":[1,2]}"#).is_err());
        assert!(serde_json::from_str::<QuizRequest>("{}").is_err());
    }

    #[test]
    fn explicit_null_category_plays_all() {
        let req: QuizRequest = serde_json::from_str(r#"{"quiz_category":null}"#).unwrap();
        assert!(req.quiz_category.is_none());
        assert!(req.previous_questions.is_empty());
    }

    #[test]
    fn category_without_id_is_rejected() {
        let body = r#"{"quiz_category":{"type":"Science"},"previous_questions":[]}"#;
        assert!(serde_json::from_str::<QuizRequest>(body).is_err());
    }

    #[test]
    fn full_request_parses() {
        let body = r#"{"quiz_category":{"id":2,"type":"Art"},"previous_questions":[5,9]}"#;
        let req: QuizRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.quiz_category.unwrap().id, 2);
        assert_eq!(req.previous_questions, vec![5, 9]);
    }
}
