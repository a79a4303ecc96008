use chrono::{DateTime, NaiveDate, Utc};

/// Parses an expiry value coming from clients or stored documents.
///
/// Accepts RFC 3339 timestamps (`2024-01-05T10:00:00Z`) and bare calendar
/// dates (`2024-01-05`, read as midnight UTC). Anything else yields `None`,
/// which the classifier reports as an unknown expiry.
pub fn parse_expiry_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// Short US-style display date, e.g. `Jan 5, 2024`.
pub fn format_display_date(instant: DateTime<Utc>) -> String {
    instant.format("%b %-d, %Y").to_string()
}

/// Same as [`format_display_date`] but renders a missing date as an empty string.
pub fn format_optional_date(instant: Option<DateTime<Utc>>) -> String {
    instant.map(format_display_date).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn should_parse_rfc3339_timestamp() {
        let parsed = parse_expiry_instant("2024-01-05T10:30:00Z");

        assert_eq!(
            parsed,
            Some(Utc.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).unwrap())
        );
    }

    #[test]
    fn should_normalize_offset_timestamp_to_utc() {
        let parsed = parse_expiry_instant("2024-01-05T02:00:00+02:00");

        assert_eq!(
            parsed,
            Some(Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn should_parse_bare_date_as_midnight_utc() {
        let parsed = parse_expiry_instant(" 2024-02-29 ");

        assert_eq!(
            parsed,
            Some(Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn should_return_none_for_invalid_input() {
        assert_eq!(parse_expiry_instant(""), None);
        assert_eq!(parse_expiry_instant("   "), None);
        assert_eq!(parse_expiry_instant("not a date"), None);
        assert_eq!(parse_expiry_instant("2023-02-30"), None);
        assert_eq!(parse_expiry_instant("05/01/2024"), None);
    }

    #[test]
    fn should_format_display_date_without_padding() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 5, 23, 59, 0).unwrap();

        assert_eq!(format_display_date(instant), "Jan 5, 2024");
    }

    #[test]
    fn should_format_missing_date_as_empty_string() {
        assert_eq!(format_optional_date(None), "");
        assert_eq!(
            format_optional_date(Some(Utc.with_ymd_and_hms(2023, 12, 25, 0, 0, 0).unwrap())),
            "Dec 25, 2023"
        );
    }
}
