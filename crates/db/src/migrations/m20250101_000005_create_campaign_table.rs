//! Create `campaign` table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Campaign::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Campaign::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Campaign::TitleEn).string().not_null())
                    .col(ColumnDef::new(Campaign::TitleAz).string().not_null())
                    .col(ColumnDef::new(Campaign::TextEn).text().not_null())
                    .col(ColumnDef::new(Campaign::TextAz).text().not_null())
                    .col(ColumnDef::new(Campaign::Image).string().null())
                    .col(
                        ColumnDef::new(Campaign::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Campaign::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Campaign::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Campaign {
    Table,
    Id,
    TitleEn,
    TitleAz,
    TextEn,
    TextAz,
    Image,
    CreatedAt,
    UpdatedAt,
}
