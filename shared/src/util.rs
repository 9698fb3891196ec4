/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Next value for an `updated_at` column.
///
/// Uses the wall clock, but never returns a value `<= previous` so every
/// mutation moves the timestamp forward even within the same millisecond.
pub fn next_timestamp(previous: i64) -> i64 {
    now_millis().max(previous + 1)
}

/// Convert Unix milliseconds to a UTC calendar date
pub fn millis_to_date(millis: i64) -> Option<chrono::NaiveDate> {
    chrono::DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
}

/// Current UTC calendar date, the same clock as [`millis_to_date`]
pub fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}
