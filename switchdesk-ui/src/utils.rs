use chrono::{DateTime, Local, TimeZone, Utc};

/// Format a server timestamp in the browser's local time, e.g. "3/1/2024, 9:15:00 AM"
pub fn format_local_timestamp(ts: &DateTime<Utc>) -> String {
    format_timestamp_in(ts, &Local)
}

pub fn format_timestamp_in<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_format_timestamp_in_utc() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap();
        assert_eq!(format_timestamp_in(&ts, &Utc), "3/1/2024, 9:05:07 AM");
    }

    #[test]
    fn test_format_timestamp_in_offset() {
        let ts = Utc.with_ymd_and_hms(2024, 12, 31, 20, 30, 0).unwrap();
        let plus_five = FixedOffset::east_opt(5 * 3600).unwrap();
        assert_eq!(format_timestamp_in(&ts, &plus_five), "1/1/2025, 1:30:00 AM");
    }
}
