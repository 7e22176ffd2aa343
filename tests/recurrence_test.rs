// ABOUTME: Integration tests for the occurrence calculator
// ABOUTME: Covers counting, enumeration, month-end rolling and frequency label parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc, Weekday};
use goalpace::errors::ErrorCode;
use goalpace::intelligence::Recurrence;

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

#[test]
fn test_daily_counts_half_open_interval() {
    let daily = Recurrence::Daily;

    // Midnight of the start is excluded, midnight of the end included
    assert_eq!(daily.count_occurrences(at(2026, 3, 1), at(2026, 3, 11)), 10);

    let start = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2026, 3, 11, 6, 0, 0).unwrap();
    assert_eq!(daily.count_occurrences(start, end), 10);
}

#[test]
fn test_empty_and_inverted_intervals_count_zero() {
    let daily = Recurrence::Daily;
    assert_eq!(daily.count_occurrences(at(2026, 3, 1), at(2026, 3, 1)), 0);
    assert_eq!(daily.count_occurrences(at(2026, 3, 10), at(2026, 3, 1)), 0);

    let start = Utc.with_ymd_and_hms(2026, 3, 1, 1, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2026, 3, 1, 23, 0, 0).unwrap();
    assert_eq!(daily.count_occurrences(start, end), 0);
}

#[test]
fn test_weekly_counts_listed_days() {
    let recurrence = Recurrence::weekly([Weekday::Thu, Weekday::Mon, Weekday::Mon]).unwrap();
    assert_eq!(
        recurrence,
        Recurrence::Weekly {
            days: vec![Weekday::Mon, Weekday::Thu]
        }
    );

    // 2026-03-01 is a Sunday; four full weeks hold eight Mondays and Thursdays
    assert_eq!(recurrence.count_occurrences(at(2026, 3, 1), at(2026, 3, 29)), 8);
    // Partial week: Mon 2 and Thu 5
    assert_eq!(recurrence.count_occurrences(at(2026, 3, 1), at(2026, 3, 6)), 2);
}

#[test]
fn test_weekly_count_matches_enumeration() {
    let recurrence: Recurrence = "weekly:tue,sat,sun".parse().unwrap();
    let start = at(2026, 1, 7);
    for days in [1, 5, 13, 45, 100] {
        let end = at(2026, 1, 7) + Duration::days(days);
        assert_eq!(
            usize::try_from(recurrence.count_occurrences(start, end)).unwrap(),
            recurrence.occurrences_between(start, end).len(),
            "span of {days} days"
        );
    }
}

#[test]
fn test_monthly_day_31_rolls_to_month_end() {
    let recurrence = Recurrence::monthly(31).unwrap();
    let occurrences = recurrence.occurrences_between(at(2026, 1, 1), at(2026, 5, 1));

    assert_eq!(
        occurrences,
        vec![at(2026, 1, 31), at(2026, 2, 28), at(2026, 3, 31), at(2026, 4, 30)]
    );
    assert_eq!(recurrence.count_occurrences(at(2026, 1, 1), at(2026, 12, 31)), 12);
}

#[test]
fn test_yearly_feb_29_in_common_and_leap_years() {
    let recurrence: Recurrence = "yearly:2-29".parse().unwrap();

    assert_eq!(
        recurrence.next_occurrence(at(2027, 1, 1)),
        Some(at(2027, 2, 28))
    );
    assert_eq!(
        recurrence.next_occurrence(at(2027, 3, 1)),
        Some(at(2028, 2, 29))
    );
    assert_eq!(recurrence.count_occurrences(at(2026, 1, 1), at(2030, 1, 1)), 4);
}

#[test]
fn test_every_n_days_keeps_epoch_phase() {
    let recurrence = Recurrence::every_n_days(3).unwrap();
    let occurrences = recurrence.occurrences_between(at(2026, 3, 1), at(2026, 3, 31));

    assert_eq!(occurrences.len(), 10);
    assert_eq!(occurrences.first(), Some(&at(2026, 3, 2)));
    assert_eq!(occurrences.last(), Some(&at(2026, 3, 29)));
    assert_eq!(recurrence.count_occurrences(at(2026, 3, 1), at(2026, 3, 31)), 10);
}

#[test]
fn test_every_n_days_with_anchor() {
    let recurrence: Recurrence = "every:7d@2026-03-04".parse().unwrap();
    assert_eq!(
        recurrence,
        Recurrence::EveryNDays {
            interval: 7,
            anchor: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
        }
    );

    // Anchor lies inside the interval, dates before it belong to the series too
    assert_eq!(
        recurrence.occurrences_between(at(2026, 2, 20), at(2026, 3, 12)),
        vec![at(2026, 2, 25), at(2026, 3, 4), at(2026, 3, 11)]
    );
}

#[test]
fn test_next_occurrence_is_strictly_after() {
    let daily = Recurrence::Daily;
    assert_eq!(daily.next_occurrence(at(2026, 3, 1)), Some(at(2026, 3, 2)));

    let monthly = Recurrence::monthly(15).unwrap();
    assert_eq!(monthly.next_occurrence(at(2026, 3, 15)), Some(at(2026, 4, 15)));
    assert_eq!(
        monthly.next_occurrence(Utc.with_ymd_and_hms(2026, 3, 14, 23, 59, 0).unwrap()),
        Some(at(2026, 3, 15))
    );
}

#[test]
fn test_occurrences_after_is_lazy_and_ordered() {
    let weekdays: Recurrence = "weekdays".parse().unwrap();
    let first_week: Vec<_> = weekdays.occurrences_after(at(2026, 3, 1)).take(6).collect();

    assert_eq!(first_week.len(), 6);
    assert_eq!(first_week[0], at(2026, 3, 2));
    assert_eq!(first_week[4], at(2026, 3, 6));
    // Saturday and Sunday skipped
    assert_eq!(first_week[5], at(2026, 3, 9));
    assert!(first_week.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_parse_accepts_known_labels() {
    let cases = [
        ("daily", Recurrence::Daily),
        ("Every Day", Recurrence::Daily),
        ("weekly", Recurrence::weekly([Weekday::Mon]).unwrap()),
        ("monthly", Recurrence::monthly(1).unwrap()),
        ("annually", Recurrence::yearly(1, 1).unwrap()),
        ("every 2 days", Recurrence::every_n_days(2).unwrap()),
        ("every:2d", Recurrence::every_n_days(2).unwrap()),
        ("  MONTHLY:15 ", Recurrence::monthly(15).unwrap()),
    ];

    for (label, expected) in cases {
        let parsed: Recurrence = label.parse().unwrap();
        assert_eq!(parsed, expected, "label {label:?}");
    }
}

#[test]
fn test_label_display_parses_back() {
    let recurrences = [
        Recurrence::Daily,
        Recurrence::every_n_days(4).unwrap(),
        Recurrence::weekly([Weekday::Fri, Weekday::Sun]).unwrap(),
        Recurrence::monthly(29).unwrap(),
        Recurrence::yearly(12, 25).unwrap(),
    ];

    for recurrence in recurrences {
        let parsed: Recurrence = recurrence.to_string().parse().unwrap();
        assert_eq!(parsed, recurrence);
    }
}

#[test]
fn test_parse_rejects_unknown_and_malformed_labels() {
    for label in [
        "fortnightly",
        "",
        "weekly:",
        "weekly:funday",
        "monthly:0",
        "monthly:32",
        "yearly:2-30",
        "yearly:13",
        "every:0d",
        "every:xd",
        "every:3d@not-a-date",
    ] {
        let err = label.parse::<Recurrence>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput, "label {label:?}");
    }
}

#[test]
fn test_constructors_validate_arguments() {
    assert!(Recurrence::every_n_days(0).is_err());
    assert!(Recurrence::weekly([]).is_err());
    assert!(Recurrence::monthly(0).is_err());
    assert!(Recurrence::yearly(2, 30).is_err());
    assert!(Recurrence::yearly(2, 29).is_ok());
}

#[test]
fn test_recurrence_serializes_with_pattern_tag() {
    let json = serde_json::to_value(Recurrence::monthly(10).unwrap()).unwrap();
    assert_eq!(json, serde_json::json!({ "pattern": "monthly", "day": 10 }));

    let parsed: Recurrence =
        serde_json::from_value(serde_json::json!({ "pattern": "daily" })).unwrap();
    assert_eq!(parsed, Recurrence::Daily);
}
