use sea_orm::{DbErr, SqlErr};

/// True when the database rejected a write because of a unique index.
///
/// Falls back to message sniffing for errors that never reached the driver
/// (mock connections, wrapped custom errors).
pub fn is_unique_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }

    let msg = err.to_string().to_lowercase();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}
