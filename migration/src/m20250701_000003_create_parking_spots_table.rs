use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParkingSpots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ParkingSpots::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ParkingSpots::LotId).integer().not_null())
                    .col(
                        ColumnDef::new(ParkingSpots::Status)
                            .string_len(1)
                            .not_null()
                            .default("A"),
                    )
                    // Deleting a lot removes its spots
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parking_spots_lot_id")
                            .from(ParkingSpots::Table, ParkingSpots::LotId)
                            .to(ParkingLots::Table, ParkingLots::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE parking_spots
                ADD CONSTRAINT chk_parking_spots_status CHECK (status IN ('A', 'O'));
                "#,
            )
            .await?;

        // Booking claims the lowest free id of a lot
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_parking_spots_lot_status
                ON parking_spots (lot_id, status, id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_parking_spots_lot_status")
            .await?;

        manager
            .drop_table(Table::drop().table(ParkingSpots::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ParkingSpots {
    Table,
    Id,
    LotId,
    Status,
}

#[derive(DeriveIden)]
enum ParkingLots {
    Table,
    Id,
}
