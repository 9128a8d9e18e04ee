use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // `category` carries no foreign key: it is a weak reference and a
        // dangling id must stay representable.
        manager
            .create_table(
                Table::create()
                    .table(Question::Table)
                    .if_not_exists()
                    .col(pk_auto(Question::Id))
                    .col(string(Question::Question).not_null())
                    .col(string(Question::Answer).not_null())
                    .col(integer(Question::Category).not_null())
                    .col(integer(Question::Difficulty).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Question::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Question {
    Table,
    Id,
    Question,
    Answer,
    Category,
    Difficulty,
}
