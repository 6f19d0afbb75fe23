use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservations::SpotId).integer().not_null())
                    .col(ColumnDef::new(Reservations::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(Reservations::ParkingTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Reservations::LeavingTime)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Reservations::CostPerHour).double().not_null())
                    // FK → parking_spots (history goes with the lot)
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_spot_id")
                            .from(Reservations::Table, Reservations::SpotId)
                            .to(ParkingSpots::Table, ParkingSpots::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // FK → users (removed explicitly by the admin delete)
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_user_id")
                            .from(Reservations::Table, Reservations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one open reservation per user
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_reservations_one_active_per_user
                ON reservations (user_id)
                WHERE leaving_time IS NULL;
                "#,
            )
            .await?;

        // At most one open reservation per spot
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_reservations_one_active_per_spot
                ON reservations (spot_id)
                WHERE leaving_time IS NULL;
                "#,
            )
            .await?;

        // Admin history view sorts by start time
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_reservations_user_parking_time
                ON reservations (user_id, parking_time DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_reservations_one_active_per_user;
                DROP INDEX IF EXISTS idx_reservations_one_active_per_spot;
                DROP INDEX IF EXISTS idx_reservations_user_parking_time;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Reservations {
    Table,
    Id,
    SpotId,
    UserId,
    ParkingTime,
    LeavingTime,
    CostPerHour,
}

#[derive(DeriveIden)]
enum ParkingSpots {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
