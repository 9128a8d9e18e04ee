use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::Serialize;

use service::category_service;

use crate::errors::ApiError;
use crate::routes::AppState;

#[derive(Serialize)]
pub struct CategoryList {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
}

/// GET /categories — id→label mapping of every category; 404 when none
/// exist.
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoryList>, ApiError> {
    let categories = category_service::list_categories(&state.db).await?;
    Ok(Json(CategoryList {
        success: true,
        categories: category_service::category_map(&categories),
    }))
}
