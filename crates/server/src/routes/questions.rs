use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use models::question;
use service::pagination::Page;
use service::{category_service, question_service};

use crate::errors::{ApiError, AppJson};
use crate::routes::AppState;

const ALL_CATEGORIES_LABEL: &str = "All";

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

impl PageQuery {
    fn page(&self) -> Page {
        Page::new(self.page)
    }
}

#[derive(Serialize)]
pub struct QuestionList {
    pub success: bool,
    pub questions: Vec<question::Model>,
    pub total_questions: usize,
    pub current_category: String,
    /// Only the full listing carries the category mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<i32, String>>,
}

#[derive(Serialize)]
pub struct Created {
    pub success: bool,
    pub created: i32,
}

#[derive(Serialize)]
pub struct Deleted {
    pub success: bool,
    pub deleted: i32,
}

/// POST /questions serves two client actions distinguished by the body: a
/// `searchTerm` key runs a search, otherwise the body must be a full new
/// question. A body carrying both is a search, matching the client's use of
/// the shared endpoint.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum QuestionsPost {
    Search {
        #[serde(rename = "searchTerm")]
        search_term: String,
    },
    Create {
        question: String,
        answer: String,
        difficulty: i32,
        category: i32,
    },
}

/// GET /questions?page=N — id-ordered page of all questions, the total
/// count, the category mapping and the fixed "All" label; 404 only when the
/// store holds no questions at all.
pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionList>, ApiError> {
    let page = question_service::list_questions(&state.db, query.page()).await?;
    let categories = category_service::all_categories(&state.db).await?;
    Ok(Json(QuestionList {
        success: true,
        questions: page.questions,
        total_questions: page.total,
        current_category: ALL_CATEGORIES_LABEL.into(),
        categories: Some(category_service::category_map(&categories)),
    }))
}

/// POST /questions — search or create depending on the body shape.
pub async fn create_or_search(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    AppJson(body): AppJson<QuestionsPost>,
) -> Result<Response, ApiError> {
    match body {
        QuestionsPost::Search { search_term } => {
            let page =
                question_service::search_questions(&state.db, &search_term, query.page()).await?;
            Ok(Json(QuestionList {
                success: true,
                questions: page.questions,
                total_questions: page.total,
                current_category: ALL_CATEGORIES_LABEL.into(),
                categories: None,
            })
            .into_response())
        }
        QuestionsPost::Create { question, answer, difficulty, category } => {
            let created =
                question_service::create_question(&state.db, &question, &answer, category, difficulty)
                    .await?;
            Ok(Json(Created { success: true, created: created.id }).into_response())
        }
    }
}

/// DELETE /questions/{id} — 404 for unknown ids.
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Deleted>, ApiError> {
    question_service::delete_question(&state.db, id).await?;
    Ok(Json(Deleted { success: true, deleted: id }))
}

/// GET /categories/{id}/questions?page=N — questions of one category with
/// its label; 404 for an unknown category id, empty success for an existing
/// category with no questions.
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionList>, ApiError> {
    let (page, category) =
        question_service::list_by_category(&state.db, category_id, query.page()).await?;
    Ok(Json(QuestionList {
        success: true,
        questions: page.questions,
        total_questions: page.total,
        current_category: category.kind,
        categories: None,
    }))
}
