//! Create `info` table migration.
//!
//! Also seeds the single info row (id = 1) that the API updates in place.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Info::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Info::Id).integer().not_null().primary_key())
                    .col(ColumnDef::new(Info::Logo).string().null())
                    .col(ColumnDef::new(Info::BackgroundImage).string().null())
                    .col(
                        ColumnDef::new(Info::TitleEn)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Info::TitleAz)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Info::PhoneNumbers)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Info::Email).string().not_null().default(""))
                    .col(
                        ColumnDef::new(Info::AddressEn)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Info::AddressAz)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Info::Instagram)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Info::Facebook)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Info::Whatsapp)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Info::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared("INSERT INTO info (id) VALUES (1) ON CONFLICT (id) DO NOTHING")
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Info::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Info {
    Table,
    Id,
    Logo,
    BackgroundImage,
    TitleEn,
    TitleAz,
    PhoneNumbers,
    Email,
    AddressEn,
    AddressAz,
    Instagram,
    Facebook,
    Whatsapp,
    UpdatedAt,
}
