use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::{category, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "question")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub question: String,
    pub answer: String,
    /// Weak reference to `category.id`; no FK in the schema, a dangling id
    /// is tolerated.
    pub category: i32,
    pub difficulty: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Category,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::Category)
                .to(category::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a question and return the stored row with its assigned id.
/// Fields are taken as-is: empty strings, out-of-range difficulty and
/// unknown category ids are all accepted.
pub async fn create(
    db: &DatabaseConnection,
    question: &str,
    answer: &str,
    category: i32,
    difficulty: i32,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        question: Set(question.to_string()),
        answer: Set(answer.to_string()),
        category: Set(category),
        difficulty: Set(difficulty),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
