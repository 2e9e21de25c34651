//! Create `product` table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Product::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Product::TitleEn).string().not_null())
                    .col(ColumnDef::new(Product::TitleAz).string().not_null())
                    .col(ColumnDef::new(Product::DescEn).text().not_null())
                    .col(ColumnDef::new(Product::DescAz).text().not_null())
                    .col(ColumnDef::new(Product::Price).double().not_null())
                    .col(ColumnDef::new(Product::Gram).string().not_null())
                    .col(
                        ColumnDef::new(Product::IsCombo)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Product::IngridientsEn)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Product::IngridientsAz)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Product::Image).string().null())
                    .col(ColumnDef::new(Product::Position).integer().null())
                    .col(ColumnDef::new(Product::SubCategoryId).integer().not_null())
                    .col(
                        ColumnDef::new(Product::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Product::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_sub_category")
                            .from(Product::Table, Product::SubCategoryId)
                            .to(SubCategory::Table, SubCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_product_sub_category_id")
                    .table(Product::Table)
                    .col(Product::SubCategoryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Product {
    Table,
    Id,
    TitleEn,
    TitleAz,
    DescEn,
    DescAz,
    Price,
    Gram,
    IsCombo,
    IngridientsEn,
    IngridientsAz,
    Image,
    Position,
    SubCategoryId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum SubCategory {
    Table,
    Id,
}
