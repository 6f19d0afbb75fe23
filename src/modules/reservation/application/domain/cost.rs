use chrono::{DateTime, Utc};

/// Price of a stay: elapsed hours times the hourly rate, rounded to cents.
///
/// An end before the start (clock skew) costs nothing.
pub fn parking_cost(start: DateTime<Utc>, end: DateTime<Utc>, cost_per_hour: f64) -> f64 {
    let millis = (end - start).num_milliseconds().max(0);
    let hours = millis as f64 / 3_600_000.0;
    round_to_cents(hours * cost_per_hour)
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
