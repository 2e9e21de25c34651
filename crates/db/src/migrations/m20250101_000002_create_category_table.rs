//! Create `category` table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Category::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Category::TitleEn).string().not_null())
                    .col(ColumnDef::new(Category::TitleAz).string().not_null())
                    .col(ColumnDef::new(Category::Image).string().not_null())
                    .col(ColumnDef::new(Category::Position).integer().not_null())
                    .col(
                        ColumnDef::new(Category::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Category::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Index names carry the column so conflicts can be reported per field
        for (name, column) in [
            ("idx_category_title_en", Category::TitleEn),
            ("idx_category_title_az", Category::TitleAz),
            ("idx_category_position", Category::Position),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Category::Table)
                        .col(column)
                        .unique()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Category {
    Table,
    Id,
    TitleEn,
    TitleAz,
    Image,
    Position,
    CreatedAt,
    UpdatedAt,
}
