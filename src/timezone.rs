//! Conversion from canonical timezone names to UTC offsets and local dates.

use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

/// Look up the current UTC offset for a canonical timezone name, e.g.
/// "Pacific/Auckland". Returns `None` for unknown names.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// The calendar day of an epoch-millisecond timestamp in the given timezone.
pub fn local_date(date_millis: i64, offset: UtcOffset) -> Date {
    let seconds = date_millis.div_euclid(1000);

    OffsetDateTime::from_unix_timestamp(seconds)
        .unwrap_or(OffsetDateTime::UNIX_EPOCH)
        .to_offset(offset)
        .date()
}

#[cfg(test)]
mod tests {
    use time::{UtcOffset, macros::date};

    use super::{get_local_offset, local_date};

    #[test]
    fn utc_is_a_valid_timezone() {
        assert_eq!(get_local_offset("UTC"), Some(UtcOffset::UTC));
    }

    #[test]
    fn unknown_timezone_returns_none() {
        assert_eq!(get_local_offset("Not/AZone"), None);
    }

    #[test]
    fn epoch_millis_map_to_utc_date() {
        // 2024-06-15T12:00:00Z
        let millis = 1_718_452_800_000;

        assert_eq!(local_date(millis, UtcOffset::UTC), date!(2024 - 06 - 15));
    }

    #[test]
    fn offset_can_shift_the_calendar_day() {
        // 2024-06-15T23:30:00Z is already June 16th at UTC+13.
        let millis = 1_718_494_200_000;
        let offset = UtcOffset::from_hms(13, 0, 0).unwrap();

        assert_eq!(local_date(millis, offset), date!(2024 - 06 - 16));
    }
}
