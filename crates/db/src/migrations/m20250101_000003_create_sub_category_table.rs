//! Create `sub_category` table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubCategory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubCategory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SubCategory::TitleEn).string().not_null())
                    .col(ColumnDef::new(SubCategory::TitleAz).string().not_null())
                    .col(ColumnDef::new(SubCategory::Position).integer().not_null())
                    .col(ColumnDef::new(SubCategory::CategoryId).integer().not_null())
                    .col(
                        ColumnDef::new(SubCategory::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SubCategory::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sub_category_category")
                            .from(SubCategory::Table, SubCategory::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Position is unique within a category
        manager
            .create_index(
                Index::create()
                    .name("idx_sub_category_category_id_position")
                    .table(SubCategory::Table)
                    .col(SubCategory::CategoryId)
                    .col(SubCategory::Position)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubCategory::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum SubCategory {
    Table,
    Id,
    TitleEn,
    TitleAz,
    Position,
    CategoryId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Category {
    Table,
    Id,
}
