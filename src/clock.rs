use chrono::{DateTime, TimeZone, Utc};

/// Read the wall clock as milliseconds since the epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert a date into a millisecond timestamp
pub fn to_millis<Tz: TimeZone>(date: &DateTime<Tz>) -> f64 {
    // Precision is only lost far beyond the supported timestamp range
    #[allow(clippy::cast_precision_loss)]
    let millis = date.timestamp_millis() as f64;
    millis
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};

    use super::*;

    #[test]
    fn test_to_millis() {
        let date = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(to_millis(&date), 1_700_000_000_123.0);
        assert_eq!(to_millis(&date.with_timezone(&Local)), 1_700_000_000_123.0);
    }

    #[test]
    fn test_now_millis_advances() {
        let before = Utc::now() - Duration::seconds(1);
        assert!(now_millis() > before.timestamp_millis());
    }
}
