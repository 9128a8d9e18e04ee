use std::collections::BTreeMap;

use models::category;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::errors::ServiceError;

/// All categories ordered by id; an empty store is an empty list here.
pub async fn all_categories(
    db: &DatabaseConnection,
) -> Result<Vec<category::Model>, ServiceError> {
    category::Entity::find()
        .order_by_asc(category::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// All categories ordered by id. Fails with `NotFound` when none exist.
pub async fn list_categories(
    db: &DatabaseConnection,
) -> Result<Vec<category::Model>, ServiceError> {
    let categories = all_categories(db).await?;
    if categories.is_empty() {
        return Err(ServiceError::not_found("categories"));
    }
    Ok(categories)
}

/// id -> label mapping as the client consumes it; integer keys serialize as
/// strings and a `BTreeMap` keeps numeric id order.
pub fn category_map(categories: &[category::Model]) -> BTreeMap<i32, String> {
    categories.iter().map(|c| (c.id, c.kind.clone())).collect()
}
