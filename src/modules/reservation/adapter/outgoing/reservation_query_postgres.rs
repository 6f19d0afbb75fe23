use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, FromQueryResult, Statement, Value};
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::reservation::application::domain::cost::parking_cost;
use crate::modules::reservation::application::domain::entities::ReservationView;
use crate::modules::reservation::application::ports::outgoing::reservation_query::{
    HistoryOrder, ReservationQuery, ReservationQueryError,
};

const VIEW_SELECT: &str = r#"
SELECT r.id,
       r.spot_id,
       s.lot_id,
       l.prime_location_name AS lot_name,
       r.user_id,
       u.username,
       r.parking_time,
       r.leaving_time,
       r.cost_per_hour
FROM reservations r
JOIN parking_spots s ON s.id = r.spot_id
JOIN parking_lots l ON l.id = s.lot_id
JOIN users u ON u.id = r.user_id
"#;

#[derive(Debug, FromQueryResult)]
struct ReservationViewRow {
    id: i32,
    spot_id: i32,
    lot_id: i32,
    lot_name: String,
    user_id: i32,
    username: String,
    parking_time: DateTime<Utc>,
    leaving_time: Option<DateTime<Utc>>,
    cost_per_hour: f64,
}

impl From<ReservationViewRow> for ReservationView {
    fn from(row: ReservationViewRow) -> Self {
        let total_cost = row
            .leaving_time
            .map(|end| parking_cost(row.parking_time, end, row.cost_per_hour));

        ReservationView {
            id: row.id,
            spot_id: row.spot_id,
            lot_id: row.lot_id,
            lot_name: row.lot_name,
            user_id: UserId::from(row.user_id),
            username: row.username,
            parking_time: row.parking_time,
            leaving_time: row.leaving_time,
            cost_per_hour: row.cost_per_hour,
            total_cost,
        }
    }
}

const BOOKINGS_PER_DAY: &str = r#"
SELECT (parking_time AT TIME ZONE 'UTC')::date AS day,
       COUNT(*) AS bookings
FROM reservations
GROUP BY 1
ORDER BY 1"#;

#[derive(Debug, FromQueryResult)]
struct DailyCountRow {
    day: NaiveDate,
    bookings: i64,
}

fn view_statement(filter: &str, order_by: &str, values: Vec<Value>) -> Statement {
    let sql = format!("{VIEW_SELECT}{filter}ORDER BY {order_by}");
    Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values)
}

fn history_statement(user_id: UserId, order: HistoryOrder) -> Statement {
    let order_by = match order {
        HistoryOrder::Natural => "r.id",
        HistoryOrder::NewestFirst => "r.parking_time DESC, r.id DESC",
    };
    view_statement(
        "WHERE r.user_id = $1\n",
        order_by,
        vec![user_id.value().into()],
    )
}

#[derive(Clone)]
pub struct ReservationQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReservationQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn fetch(&self, stmt: Statement) -> Result<Vec<ReservationView>, ReservationQueryError> {
        let rows = ReservationViewRow::find_by_statement(stmt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(ReservationView::from).collect())
    }
}

fn map_db_err(err: DbErr) -> ReservationQueryError {
    ReservationQueryError::DatabaseError(err.to_string())
}

#[async_trait]
impl ReservationQuery for ReservationQueryPostgres {
    async fn find_active_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<ReservationView>, ReservationQueryError> {
        let stmt = view_statement(
            "WHERE r.user_id = $1 AND r.leaving_time IS NULL\n",
            "r.id",
            vec![user_id.value().into()],
        );
        Ok(self.fetch(stmt).await?.into_iter().next())
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
        order: HistoryOrder,
    ) -> Result<Vec<ReservationView>, ReservationQueryError> {
        self.fetch(history_statement(user_id, order)).await
    }

    async fn list_all(&self) -> Result<Vec<ReservationView>, ReservationQueryError> {
        self.fetch(view_statement("", "r.id", Vec::new())).await
    }

    async fn list_active(&self) -> Result<Vec<ReservationView>, ReservationQueryError> {
        self.fetch(view_statement(
            "WHERE r.leaving_time IS NULL\n",
            "r.id",
            Vec::new(),
        ))
        .await
    }

    async fn count_bookings_per_day(
        &self,
    ) -> Result<Vec<(NaiveDate, u64)>, ReservationQueryError> {
        let rows = DailyCountRow::find_by_statement(Statement::from_string(
            DatabaseBackend::Postgres,
            BOOKINGS_PER_DAY,
        ))
        .all(&*self.db)
        .await
        .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| (row.day, row.bookings.max(0) as u64))
            .collect())
    }
}
