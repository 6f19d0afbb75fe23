use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParkingLots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ParkingLots::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ParkingLots::PrimeLocationName)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ParkingLots::PricePerHour).double().not_null())
                    .col(
                        ColumnDef::new(ParkingLots::Address)
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(ParkingLots::PinCode)
                            .string_len(10)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(ParkingLots::MaximumNumberOfSpots)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Case-insensitive search on name and pin code
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_parking_lots_name_lower
                ON parking_lots (LOWER(prime_location_name));
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_parking_lots_name_lower")
            .await?;

        manager
            .drop_table(Table::drop().table(ParkingLots::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ParkingLots {
    Table,
    Id,
    PrimeLocationName,
    PricePerHour,
    Address,
    PinCode,
    MaximumNumberOfSpots,
}
