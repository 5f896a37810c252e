//! Database migrations for the ore lot service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250826_000001_create_ore_lots::Migration)]
    }
}

mod m20250826_000001_create_ore_lots {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(OreLots::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(OreLots::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(OreLots::LotCode).string_len(50).not_null())
                        .col(
                            ColumnDef::new(OreLots::OriginMine)
                                .string_len(120)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(OreLots::IronGrade)
                                .decimal_len(5, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(OreLots::Moisture)
                                .decimal_len(5, 2)
                                .not_null(),
                        )
                        .col(ColumnDef::new(OreLots::Silica).decimal_len(5, 2))
                        .col(ColumnDef::new(OreLots::Phosphorus).decimal_len(5, 3))
                        .col(
                            ColumnDef::new(OreLots::Tonnage)
                                .decimal_len(12, 3)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(OreLots::ProductionDate)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(OreLots::Status).integer().not_null())
                        .col(
                            ColumnDef::new(OreLots::CurrentLocation)
                                .string_len(200)
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("ux_ore_lots_lot_code")
                        .table(OreLots::Table)
                        .col(OreLots::LotCode)
                        .unique()
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(OreLots::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum OreLots {
        Table,
        Id,
        LotCode,
        OriginMine,
        IronGrade,
        Moisture,
        Silica,
        Phosphorus,
        Tonnage,
        ProductionDate,
        Status,
        CurrentLocation,
    }
}
