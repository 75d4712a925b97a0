// Sample timestamps: whole seconds since 2001-01-01T00:00:00

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Seconds between the Unix epoch and 2001-01-01T00:00:00
pub const REFERENCE_UNIX_SECONDS: i64 = 978_307_200;

/// Convert a seconds offset from the reference instant to an absolute time
pub fn decode(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_nanos(0) + Duration::seconds(REFERENCE_UNIX_SECONDS + seconds)
}

/// Seconds since the reference instant for an absolute time
pub fn encode(time: &DateTime<Utc>) -> i64 {
    time.timestamp() - REFERENCE_UNIX_SECONDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_instant() {
        assert_eq!(decode(0).to_string(), "2001-01-01 00:00:00 UTC");
    }

    #[test]
    fn test_offsets() {
        assert_eq!(decode(86_400).to_string(), "2001-01-02 00:00:00 UTC");
        assert_eq!(decode(-1).to_string(), "2000-12-31 23:59:59 UTC");
        // 2018-09-08T12:00:00Z
        let t = Utc.with_ymd_and_hms(2018, 9, 8, 12, 0, 0).unwrap();
        assert_eq!(decode(encode(&t)), t);
        assert_eq!(encode(&t), 558_100_800);
    }

    #[test]
    fn test_unsigned_range() {
        let latest = decode(i64::from(u32::MAX));
        assert_eq!(encode(&latest), i64::from(u32::MAX));
    }
}
