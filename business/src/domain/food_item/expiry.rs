use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::shared::dates::parse_expiry_instant;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Highest day-delta that still counts as urgent.
pub const EXPIRING_SOON_DAYS: i64 = 3;
/// Highest day-delta that still falls inside the weekly window.
pub const EXPIRING_THIS_WEEK_DAYS: i64 = 7;

/// Freshness tier of a food item.
///
/// Variants are declared from least to most fresh, so the derived `Ord`
/// can be used to sort items by urgency. `Unknown` sorts last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    /// Past due.
    Expired,
    /// Due within [`EXPIRING_SOON_DAYS`] days.
    ExpiringSoon,
    /// Due within [`EXPIRING_THIS_WEEK_DAYS`] days.
    ExpiringThisWeek,
    /// Due later than a week from now.
    Fresh,
    /// No expiry date recorded, or it could not be parsed.
    Unknown,
}

impl ExpiryStatus {
    pub const ALL: [ExpiryStatus; 5] = [
        ExpiryStatus::Expired,
        ExpiryStatus::ExpiringSoon,
        ExpiryStatus::ExpiringThisWeek,
        ExpiryStatus::Fresh,
        ExpiryStatus::Unknown,
    ];

    /// Maps a day-delta (see [`days_until_expiry`]) to its tier.
    pub fn from_days(days: Option<i64>) -> Self {
        match days {
            None => ExpiryStatus::Unknown,
            Some(d) if d < 0 => ExpiryStatus::Expired,
            Some(d) if d <= EXPIRING_SOON_DAYS => ExpiryStatus::ExpiringSoon,
            Some(d) if d <= EXPIRING_THIS_WEEK_DAYS => ExpiryStatus::ExpiringThisWeek,
            Some(_) => ExpiryStatus::Fresh,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "Expired",
            ExpiryStatus::ExpiringSoon => "Expiring Soon",
            ExpiryStatus::ExpiringThisWeek => "Expiring This Week",
            ExpiryStatus::Fresh => "Fresh",
            ExpiryStatus::Unknown => "Unknown",
        }
    }

    /// Hex color used to highlight the tier.
    pub fn severity_color(&self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "#F44336",
            ExpiryStatus::ExpiringSoon => "#FF9800",
            ExpiryStatus::ExpiringThisWeek => "#FFC107",
            ExpiryStatus::Fresh => "#4CAF50",
            ExpiryStatus::Unknown => "#757575",
        }
    }

    /// The tier an item moves into next as time passes.
    ///
    /// `Expired` has no successor and `Unknown` never changes by itself.
    pub fn next_tier(&self) -> Option<ExpiryStatus> {
        match self {
            ExpiryStatus::Fresh => Some(ExpiryStatus::ExpiringThisWeek),
            ExpiryStatus::ExpiringThisWeek => Some(ExpiryStatus::ExpiringSoon),
            ExpiryStatus::ExpiringSoon => Some(ExpiryStatus::Expired),
            ExpiryStatus::Expired | ExpiryStatus::Unknown => None,
        }
    }
}

impl std::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpiryStatus::Expired => write!(f, "expired"),
            ExpiryStatus::ExpiringSoon => write!(f, "expiring_soon"),
            ExpiryStatus::ExpiringThisWeek => write!(f, "expiring_this_week"),
            ExpiryStatus::Fresh => write!(f, "fresh"),
            ExpiryStatus::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for ExpiryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expired" => Ok(ExpiryStatus::Expired),
            "expiring_soon" => Ok(ExpiryStatus::ExpiringSoon),
            "expiring_this_week" => Ok(ExpiryStatus::ExpiringThisWeek),
            "fresh" => Ok(ExpiryStatus::Fresh),
            "unknown" => Ok(ExpiryStatus::Unknown),
            _ => Err(format!("Invalid expiry status: {}", s)),
        }
    }
}

/// Everything a list or detail view needs to render an item's freshness.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpiryAssessment {
    pub status: ExpiryStatus,
    pub days_until_expiry: Option<i64>,
    pub label: &'static str,
    pub color: &'static str,
}

/// Whole days from `now` until `expiry`, rounded up.
///
/// Returns `None` when there is no expiry date. `0` means the deadline is
/// now or less than a day behind, positive values are days remaining and
/// negative values are days overdue. A deadline 30 minutes ahead yields `1`.
pub fn days_until_expiry(expiry: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<i64> {
    let millis = (expiry? - now).num_milliseconds();
    let days = millis / MILLIS_PER_DAY;
    // Integer division truncates toward zero, which already is the ceiling
    // for negative values.
    if millis % MILLIS_PER_DAY > 0 {
        Some(days + 1)
    } else {
        Some(days)
    }
}

pub fn classify(expiry: Option<DateTime<Utc>>, now: DateTime<Utc>) -> ExpiryStatus {
    ExpiryStatus::from_days(days_until_expiry(expiry, now))
}

/// Parses a client-supplied expiry value; unparsable input counts as missing.
pub fn resolve_raw_expiry(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(parse_expiry_instant)
}

/// Classifies an expiry value that has not been parsed yet.
pub fn classify_raw(raw: Option<&str>, now: DateTime<Utc>) -> ExpiryStatus {
    classify(resolve_raw_expiry(raw), now)
}

pub fn assess(expiry: Option<DateTime<Utc>>, now: DateTime<Utc>) -> ExpiryAssessment {
    let days = days_until_expiry(expiry, now);
    let status = ExpiryStatus::from_days(days);
    ExpiryAssessment {
        status,
        days_until_expiry: days,
        label: status.label(),
        color: status.severity_color(),
    }
}

/// [`assess`] against the system clock, for call sites without an injected clock.
pub fn assess_now(expiry: Option<DateTime<Utc>>) -> ExpiryAssessment {
    assess(expiry, Utc::now())
}

/// Instant at which the item degrades into its next tier.
///
/// `None` for expired and undated items, which never change tier again.
pub fn next_transition(
    expiry: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    let expiry = expiry?;
    match classify(Some(expiry), now) {
        ExpiryStatus::Fresh => Some(expiry - Duration::days(EXPIRING_THIS_WEEK_DAYS)),
        ExpiryStatus::ExpiringThisWeek => Some(expiry - Duration::days(EXPIRING_SOON_DAYS)),
        ExpiryStatus::ExpiringSoon => Some(expiry + Duration::days(1)),
        ExpiryStatus::Expired | ExpiryStatus::Unknown => None,
    }
}

/// Human readable remaining time, e.g. `3 days left` or `2 days ago`.
pub fn describe_days(days: i64) -> String {
    if days < 0 {
        format!("{} days ago", days.unsigned_abs())
    } else {
        format!("{} days left", days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn new_year() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn day(d: u32, month: u32, year: i32) -> Option<DateTime<Utc>> {
        Some(Utc.with_ymd_and_hms(year, month, d, 0, 0, 0).unwrap())
    }

    #[test]
    fn should_classify_calendar_boundaries() {
        let now = new_year();
        let cases = [
            (day(31, 12, 2023), -1, ExpiryStatus::Expired),
            (day(1, 1, 2024), 0, ExpiryStatus::ExpiringSoon),
            (day(4, 1, 2024), 3, ExpiryStatus::ExpiringSoon),
            (day(5, 1, 2024), 4, ExpiryStatus::ExpiringThisWeek),
            (day(8, 1, 2024), 7, ExpiryStatus::ExpiringThisWeek),
            (day(9, 1, 2024), 8, ExpiryStatus::Fresh),
        ];

        for (expiry, expected_days, expected_status) in cases {
            assert_eq!(days_until_expiry(expiry, now), Some(expected_days));
            assert_eq!(classify(expiry, now), expected_status);
        }
    }

    #[test]
    fn should_round_partial_days_up() {
        let now = new_year();

        assert_eq!(
            days_until_expiry(Some(now + Duration::minutes(30)), now),
            Some(1)
        );
        assert_eq!(
            days_until_expiry(Some(now + Duration::days(3) + Duration::milliseconds(1)), now),
            Some(4)
        );
    }

    #[test]
    fn should_keep_item_expiring_soon_until_a_full_day_overdue() {
        let now = new_year();

        let twelve_hours_ago = Some(now - Duration::hours(12));
        assert_eq!(days_until_expiry(twelve_hours_ago, now), Some(0));
        assert_eq!(classify(twelve_hours_ago, now), ExpiryStatus::ExpiringSoon);

        let one_day_ago = Some(now - Duration::days(1));
        assert_eq!(classify(one_day_ago, now), ExpiryStatus::Expired);
    }

    #[test]
    fn should_report_growing_overdue_magnitude() {
        let now = new_year();

        assert_eq!(days_until_expiry(day(21, 12, 2023), now), Some(-11));
        assert_eq!(classify(day(21, 12, 2023), now), ExpiryStatus::Expired);
    }

    #[test]
    fn should_classify_representable_extremes_without_overflow() {
        let now = new_year();

        assert_eq!(classify(Some(DateTime::<Utc>::MIN_UTC), now), ExpiryStatus::Expired);
        assert_eq!(classify(Some(DateTime::<Utc>::MAX_UTC), now), ExpiryStatus::Fresh);
        assert!(next_transition(Some(DateTime::<Utc>::MAX_UTC), now).is_some());
        assert_eq!(next_transition(Some(DateTime::<Utc>::MIN_UTC), now), None);
    }

    #[test]
    fn should_return_unknown_when_expiry_is_missing() {
        assert_eq!(days_until_expiry(None, new_year()), None);
        assert_eq!(classify(None, new_year()), ExpiryStatus::Unknown);
        assert_eq!(next_transition(None, new_year()), None);
    }

    #[test]
    fn should_treat_unparsable_expiry_as_unknown() {
        let now = new_year();

        assert_eq!(classify_raw(Some("garbage"), now), ExpiryStatus::Unknown);
        assert_eq!(classify_raw(Some(""), now), ExpiryStatus::Unknown);
        assert_eq!(classify_raw(None, now), ExpiryStatus::Unknown);
        assert_eq!(
            classify_raw(Some("2024-01-05"), now),
            ExpiryStatus::ExpiringThisWeek
        );
        assert_eq!(
            classify_raw(Some("2023-12-30T12:00:00Z"), now),
            ExpiryStatus::Expired
        );
    }

    #[test]
    fn should_assess_with_label_and_color() {
        let assessment = assess(day(3, 1, 2024), new_year());

        assert_eq!(
            assessment,
            ExpiryAssessment {
                status: ExpiryStatus::ExpiringSoon,
                days_until_expiry: Some(2),
                label: "Expiring Soon",
                color: "#FF9800",
            }
        );
    }

    #[test]
    fn should_present_unknown_as_neutral_gray() {
        let assessment = assess(None, new_year());

        assert_eq!(assessment.label, "Unknown");
        assert_eq!(assessment.color, "#757575");
        assert_eq!(assessment.days_until_expiry, None);
    }

    #[test]
    fn should_assess_against_system_clock() {
        let in_a_month = Some(Utc::now() + Duration::days(30));

        assert_eq!(assess_now(in_a_month).status, ExpiryStatus::Fresh);
        assert_eq!(assess_now(None).status, ExpiryStatus::Unknown);
    }

    #[test]
    fn should_have_distinct_label_and_color_for_every_status() {
        let labels: std::collections::HashSet<_> =
            ExpiryStatus::ALL.iter().map(|s| s.label()).collect();
        let colors: std::collections::HashSet<_> =
            ExpiryStatus::ALL.iter().map(|s| s.severity_color()).collect();

        assert_eq!(labels.len(), ExpiryStatus::ALL.len());
        assert_eq!(colors.len(), ExpiryStatus::ALL.len());
        for status in ExpiryStatus::ALL {
            assert!(!status.label().is_empty());
            assert!(status.severity_color().starts_with('#'));
        }
    }

    #[test]
    fn should_round_trip_status_codes() {
        for status in ExpiryStatus::ALL {
            assert_eq!(status.to_string().parse::<ExpiryStatus>(), Ok(status));
        }
        assert!("expiring-week".parse::<ExpiryStatus>().is_err());
    }

    #[test]
    fn should_walk_tiers_in_time_order() {
        let mut status = ExpiryStatus::Fresh;
        let mut visited = vec![status];
        while let Some(next) = status.next_tier() {
            visited.push(next);
            status = next;
        }

        assert_eq!(
            visited,
            vec![
                ExpiryStatus::Fresh,
                ExpiryStatus::ExpiringThisWeek,
                ExpiryStatus::ExpiringSoon,
                ExpiryStatus::Expired,
            ]
        );
        assert_eq!(ExpiryStatus::Unknown.next_tier(), None);
    }

    #[test]
    fn should_order_statuses_by_freshness() {
        let mut statuses = vec![
            ExpiryStatus::Unknown,
            ExpiryStatus::Fresh,
            ExpiryStatus::Expired,
            ExpiryStatus::ExpiringThisWeek,
            ExpiryStatus::ExpiringSoon,
        ];
        statuses.sort();

        assert_eq!(statuses, ExpiryStatus::ALL.to_vec());
    }

    #[test]
    fn should_compute_next_transition_for_each_dated_tier() {
        let now = new_year();
        let fresh = Some(now + Duration::days(10));
        let this_week = Some(now + Duration::days(5));
        let soon = Some(now + Duration::days(1));
        let expired = Some(now - Duration::days(2));

        assert_eq!(next_transition(fresh, now), Some(now + Duration::days(3)));
        assert_eq!(next_transition(this_week, now), Some(now + Duration::days(2)));
        assert_eq!(next_transition(soon, now), Some(now + Duration::days(2)));
        assert_eq!(next_transition(expired, now), None);
    }

    #[test]
    fn should_describe_remaining_and_overdue_days() {
        assert_eq!(describe_days(3), "3 days left");
        assert_eq!(describe_days(0), "0 days left");
        assert_eq!(describe_days(-2), "2 days ago");
    }

    proptest! {
        #[test]
        fn should_never_rank_earlier_expiry_as_fresher(
            a in -2_000_000_000_000i64..2_000_000_000_000,
            b in -2_000_000_000_000i64..2_000_000_000_000,
        ) {
            let now = new_year();
            let (earlier, later) = if a <= b { (a, b) } else { (b, a) };

            let earlier_status = classify(Some(now + Duration::milliseconds(earlier)), now);
            let later_status = classify(Some(now + Duration::milliseconds(later)), now);

            prop_assert!(earlier_status <= later_status);
            prop_assert_ne!(earlier_status, ExpiryStatus::Unknown);
            prop_assert_ne!(later_status, ExpiryStatus::Unknown);
        }

        #[test]
        fn should_classify_every_day_delta(days in any::<i64>()) {
            let status = ExpiryStatus::from_days(Some(days));

            prop_assert_ne!(status, ExpiryStatus::Unknown);
            prop_assert_eq!(status == ExpiryStatus::Expired, days < 0);
            prop_assert_eq!(status == ExpiryStatus::Fresh, days > EXPIRING_THIS_WEEK_DAYS);
        }

        #[test]
        fn should_degrade_exactly_at_next_transition(
            offset in -20_000_000_000i64..20_000_000_000,
        ) {
            let now = new_year();
            let expiry = Some(now + Duration::milliseconds(offset));
            let status = classify(expiry, now);

            match next_transition(expiry, now) {
                Some(at) => {
                    prop_assert!(at > now);
                    prop_assert_eq!(classify(expiry, at - Duration::milliseconds(1)), status);
                    prop_assert_eq!(Some(classify(expiry, at)), status.next_tier());
                }
                None => prop_assert_eq!(status, ExpiryStatus::Expired),
            }
        }
    }
}
