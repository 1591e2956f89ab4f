//! Create energy_statements table

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_offices::Offices;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EnergyStatements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EnergyStatements::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EnergyStatements::OfficeId).string().not_null())
                    .col(ColumnDef::new(EnergyStatements::Year).integer().not_null())
                    .col(ColumnDef::new(EnergyStatements::Month).integer().not_null())
                    .col(
                        ColumnDef::new(EnergyStatements::ElectricityKwh)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EnergyStatements::HeatingFuelType).string_len(24))
                    .col(ColumnDef::new(EnergyStatements::HeatingEnergyKwh).double())
                    .col(ColumnDef::new(EnergyStatements::RenewablePpasKwh).double())
                    .col(ColumnDef::new(EnergyStatements::Notes).text())
                    .col(
                        ColumnDef::new(EnergyStatements::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EnergyStatements::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_energy_statements_office_id")
                            .from(EnergyStatements::Table, EnergyStatements::OfficeId)
                            .to(Offices::Table, Offices::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing default: period descending within an office
        manager
            .create_index(
                Index::create()
                    .name("idx_energy_statements_office_period")
                    .table(EnergyStatements::Table)
                    .col(EnergyStatements::OfficeId)
                    .col(EnergyStatements::Year)
                    .col(EnergyStatements::Month)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EnergyStatements::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum EnergyStatements {
    Table,
    Id,
    OfficeId,
    Year,
    Month,
    ElectricityKwh,
    HeatingFuelType,
    HeatingEnergyKwh,
    RenewablePpasKwh,
    Notes,
    CreatedAt,
    UpdatedAt,
}
