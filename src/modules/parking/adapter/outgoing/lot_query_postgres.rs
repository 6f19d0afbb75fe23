use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder, Statement, Value,
};
use std::sync::Arc;

use super::sea_orm_entity::parking_spots;
use crate::modules::parking::application::domain::entities::{
    LotSummary, ParkingSpot, SpotStatus,
};
use crate::modules::parking::application::ports::outgoing::lot_query::{
    LotQuery, LotQueryError, LotSearch,
};

const SUMMARY_SELECT: &str = r#"
SELECT l.id,
       l.prime_location_name,
       l.price_per_hour,
       l.address,
       l.pin_code,
       l.maximum_number_of_spots,
       COUNT(s.id) FILTER (WHERE s.status = 'A') AS available_spots,
       COUNT(s.id) FILTER (WHERE s.status = 'O') AS occupied_spots
FROM parking_lots l
LEFT JOIN parking_spots s ON s.lot_id = l.id
"#;

#[derive(Debug, FromQueryResult)]
struct LotSummaryRow {
    id: i32,
    prime_location_name: String,
    price_per_hour: f64,
    address: String,
    pin_code: String,
    maximum_number_of_spots: i32,
    available_spots: i64,
    occupied_spots: i64,
}

impl From<LotSummaryRow> for LotSummary {
    fn from(row: LotSummaryRow) -> Self {
        LotSummary {
            id: row.id,
            prime_location_name: row.prime_location_name,
            price_per_hour: row.price_per_hour,
            address: row.address,
            pin_code: row.pin_code,
            maximum_number_of_spots: row.maximum_number_of_spots,
            available_spots: row.available_spots,
            occupied_spots: row.occupied_spots,
        }
    }
}

/// Escapes LIKE wildcards so user text is matched literally.
fn like_pattern(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 2);
    escaped.push('%');
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

fn search_statement(search: &LotSearch) -> Statement {
    let mut sql = String::from(SUMMARY_SELECT);
    let mut values: Vec<Value> = Vec::new();

    if let Some(text) = &search.text {
        values.push(like_pattern(text).into());
        sql.push_str(
            "WHERE l.prime_location_name ILIKE $1 ESCAPE '\\' OR l.pin_code ILIKE $1 ESCAPE '\\'\n",
        );
    }

    sql.push_str("GROUP BY l.id\n");

    if search.available_only {
        sql.push_str("HAVING COUNT(s.id) FILTER (WHERE s.status = 'A') > 0\n");
    }

    sql.push_str("ORDER BY l.id");

    Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values)
}

fn summary_statement(lot_id: i32) -> Statement {
    let sql = format!("{SUMMARY_SELECT}WHERE l.id = $1\nGROUP BY l.id");
    Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, [lot_id.into()])
}

#[derive(Clone)]
pub struct LotQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LotQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> LotQueryError {
    LotQueryError::DatabaseError(err.to_string())
}

#[async_trait]
impl LotQuery for LotQueryPostgres {
    async fn search(&self, search: LotSearch) -> Result<Vec<LotSummary>, LotQueryError> {
        let rows = LotSummaryRow::find_by_statement(search_statement(&search))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(LotSummary::from).collect())
    }

    async fn get_summary(&self, lot_id: i32) -> Result<LotSummary, LotQueryError> {
        LotSummaryRow::find_by_statement(summary_statement(lot_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(LotSummary::from)
            .ok_or(LotQueryError::NotFound)
    }

    async fn list_spots(&self, lot_id: i32) -> Result<Vec<ParkingSpot>, LotQueryError> {
        let spots = parking_spots::Entity::find()
            .filter(parking_spots::Column::LotId.eq(lot_id))
            .order_by_asc(parking_spots::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        spots
            .into_iter()
            .map(|spot| {
                let status = SpotStatus::from_code(&spot.status).ok_or_else(|| {
                    LotQueryError::DatabaseError(format!(
                        "spot {} has unknown status {:?}",
                        spot.id, spot.status
                    ))
                })?;

                Ok(ParkingSpot {
                    id: spot.id,
                    lot_id: spot.lot_id,
                    status,
                })
            })
            .collect()
    }
}
