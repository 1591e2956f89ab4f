//! Create offices table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Offices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Offices::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Offices::Code).string().not_null())
                    .col(ColumnDef::new(Offices::Name).string().not_null())
                    .col(ColumnDef::new(Offices::Address).string())
                    .col(ColumnDef::new(Offices::GridRegionCode).string().not_null())
                    .col(ColumnDef::new(Offices::FloorAreaM2).double())
                    .col(
                        ColumnDef::new(Offices::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Offices::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_offices_code")
                    .table(Offices::Table)
                    .col(Offices::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_offices_name")
                    .table(Offices::Table)
                    .col(Offices::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Offices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Offices {
    Table,
    Id,
    Code,
    Name,
    Address,
    GridRegionCode,
    FloorAreaM2,
    CreatedAt,
    UpdatedAt,
}
