use time::{Date, OffsetDateTime, UtcOffset};

/// Today's date in the local time zone, falling back to UTC.
pub fn local_today() -> Date {
    OffsetDateTime::now_utc()
        .to_offset(UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
        .date()
}
