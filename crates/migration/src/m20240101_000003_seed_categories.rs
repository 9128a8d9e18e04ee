use sea_orm_migration::prelude::*;

const STOCK_CATEGORIES: [&str; 6] =
    ["Science", "Art", "Geography", "History", "Entertainment", "Sports"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(Category::Table)
            .columns([Category::Type])
            .to_owned();
        for label in STOCK_CATEGORIES {
            insert.values_panic([label.into()]);
        }
        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Category::Table)
                    .and_where(Expr::col(Category::Type).is_in(STOCK_CATEGORIES))
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Category {
    Table,
    Type,
}
