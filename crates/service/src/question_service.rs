use models::{category, question};
use sea_orm::sea_query::{extension::postgres::PgExpr, Expr};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::errors::ServiceError;
use crate::pagination::Page;

/// One page of an id-ordered question listing plus the overall match count.
#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub questions: Vec<question::Model>,
    pub total: usize,
}

fn page_of(all: Vec<question::Model>, page: Page) -> QuestionPage {
    let total = all.len();
    let questions = page.slice(&all).to_vec();
    QuestionPage { questions, total }
}

/// All questions ordered by id, sliced to `page`. `NotFound` when the store
/// holds no questions at all; a page past the end is an empty success.
pub async fn list_questions(
    db: &DatabaseConnection,
    page: Page,
) -> Result<QuestionPage, ServiceError> {
    let all = question::Entity::find()
        .order_by_asc(question::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if all.is_empty() {
        return Err(ServiceError::not_found("questions"));
    }
    Ok(page_of(all, page))
}

/// Case-insensitive substring search over the question text, delegated to
/// the database as `ILIKE '%term%'`. An empty result set is a success with
/// `total == 0`, never `NotFound`.
pub async fn search_questions(
    db: &DatabaseConnection,
    term: &str,
    page: Page,
) -> Result<QuestionPage, ServiceError> {
    let all = question::Entity::find()
        .filter(Expr::col(question::Column::Question).ilike(format!("%{}%", term)))
        .order_by_asc(question::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(page_of(all, page))
}

/// Questions of one category plus that category's row for the response
/// label. An unknown category id fails with `NotFound`; an existing category
/// with no questions is an empty success.
pub async fn list_by_category(
    db: &DatabaseConnection,
    category_id: i32,
    page: Page,
) -> Result<(QuestionPage, category::Model), ServiceError> {
    let category = category::Entity::find_by_id(category_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("category"))?;
    let all = question::Entity::find()
        .filter(question::Column::Category.eq(category_id))
        .order_by_asc(question::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok((page_of(all, page), category))
}

/// Insert a question and return the stored row. Fields are accepted as-is.
pub async fn create_question(
    db: &DatabaseConnection,
    text: &str,
    answer: &str,
    category: i32,
    difficulty: i32,
) -> Result<question::Model, ServiceError> {
    Ok(question::create(db, text, answer, category, difficulty).await?)
}

/// Delete a question by id. Missing ids are `NotFound`; removal is
/// immediate and permanent.
pub async fn delete_question(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = question::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("question"));
    }
    Ok(())
}
