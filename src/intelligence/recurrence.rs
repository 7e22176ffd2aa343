// ABOUTME: Recurrence patterns and the occurrence calculator used by goal decomposition
// ABOUTME: Counts and enumerates calendar occurrences between two instants without reading the clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

//! # Occurrence Calculator
//!
//! A [`Recurrence`] is the parsed form of a frequency label. Every occurrence
//! falls at 00:00 UTC on a matching calendar date. Intervals are half-open:
//! an occurrence counts when it is strictly after the start and at or before
//! the end.
//!
//! Label grammar (case-insensitive):
//!
//! | label                  | meaning                                        |
//! |------------------------|------------------------------------------------|
//! | `daily`                | every day                                      |
//! | `every:3d`             | every 3rd day, phase anchored on 1970-01-01    |
//! | `every:3d@2026-01-05`  | every 3rd day counted from 2026-01-05          |
//! | `weekly`               | Mondays                                        |
//! | `weekly:mon,thu`       | listed weekdays                                |
//! | `weekdays`             | Monday to Friday                               |
//! | `monthly` / `monthly:31` | day 1 / day 31 (last day in shorter months)  |
//! | `yearly` / `yearly:2-29` | Jan 1 / Feb 29 (Feb 28 in common years)      |

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DAYS_PER_WEEK: i64 = 7;

/// A recurrence pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "pattern", rename_all = "snake_case")]
pub enum Recurrence {
    /// Every day
    Daily,
    /// Every `interval` days, on dates `anchor + k x interval`
    EveryNDays {
        /// Days between occurrences, at least 1
        interval: u32,
        /// Any date of the series
        anchor: NaiveDate,
    },
    /// Listed weekdays, sorted Monday first, without duplicates
    Weekly {
        /// Days of the week
        days: Vec<Weekday>,
    },
    /// Day of month; days past the month's end roll to its last day
    Monthly {
        /// Day of month, 1-31
        day: u32,
    },
    /// Month and day; Feb 29 rolls to Feb 28 in common years
    Yearly {
        /// Month, 1-12
        month: u32,
        /// Day of month, 1-31
        day: u32,
    },
}

impl Recurrence {
    /// Every `interval` days anchored on the Unix epoch
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `interval` is zero
    pub fn every_n_days(interval: u32) -> AppResult<Self> {
        Self::every_n_days_from(interval, epoch())
    }

    /// Every `interval` days counted from `anchor`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `interval` is zero
    pub fn every_n_days_from(interval: u32, anchor: NaiveDate) -> AppResult<Self> {
        if interval == 0 {
            return Err(AppError::invalid_input(
                "recurrence interval must be at least one day",
            ));
        }
        Ok(Self::EveryNDays { interval, anchor })
    }

    /// On the given weekdays
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `days` is empty
    pub fn weekly(days: impl IntoIterator<Item = Weekday>) -> AppResult<Self> {
        let mut days: Vec<Weekday> = days.into_iter().collect();
        if days.is_empty() {
            return Err(AppError::invalid_input(
                "weekly recurrence needs at least one weekday",
            ));
        }
        days.sort_by_key(Weekday::num_days_from_monday);
        days.dedup();
        Ok(Self::Weekly { days })
    }

    /// On a day of each month
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `day` is outside 1-31
    pub fn monthly(day: u32) -> AppResult<Self> {
        if !(1..=31).contains(&day) {
            return Err(AppError::invalid_input(format!(
                "day of month must be between 1 and 31, got {day}"
            )));
        }
        Ok(Self::Monthly { day })
    }

    /// On a month and day each year
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the month/day pair can never occur
    pub fn yearly(month: u32, day: u32) -> AppResult<Self> {
        // 2000 is a leap year, so Feb 29 validates
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(AppError::invalid_input(format!(
                "month/day out of range: {month}-{day}"
            )));
        }
        Ok(Self::Yearly { month, day })
    }

    /// Whether an occurrence falls on `date`
    #[must_use]
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match self {
            Self::Daily => true,
            Self::EveryNDays { interval, anchor } => {
                (date - *anchor)
                    .num_days()
                    .rem_euclid(i64::from(*interval))
                    == 0
            }
            Self::Weekly { days } => days.contains(&date.weekday()),
            Self::Monthly { day } => {
                clamped_date(date.year(), date.month(), *day).is_some_and(|d| d == date)
            }
            Self::Yearly { month, day } => {
                date.month() == *month
                    && clamped_date(date.year(), *month, *day).is_some_and(|d| d == date)
            }
        }
    }

    /// First occurrence date strictly after `date`
    #[must_use]
    pub fn next_date_after(&self, date: NaiveDate) -> Option<NaiveDate> {
        let candidate = date.succ_opt()?;
        match self {
            Self::Daily => Some(candidate),
            Self::EveryNDays { interval, anchor } => {
                let interval = i64::from(*interval);
                let offset = (candidate - *anchor).num_days().rem_euclid(interval);
                let gap = (interval - offset) % interval;
                candidate.checked_add_days(Days::new(u64::try_from(gap).ok()?))
            }
            Self::Weekly { .. } => (0..DAYS_PER_WEEK)
                .filter_map(|offset| candidate.checked_add_days(Days::new(offset.unsigned_abs())))
                .find(|d| self.occurs_on(*d)),
            Self::Monthly { day } => {
                let this_month = clamped_date(candidate.year(), candidate.month(), *day)?;
                if this_month >= candidate {
                    return Some(this_month);
                }
                let next_month = candidate.with_day(1)?.checked_add_months(Months::new(1))?;
                clamped_date(next_month.year(), next_month.month(), *day)
            }
            Self::Yearly { month, day } => {
                let this_year = clamped_date(candidate.year(), *month, *day)?;
                if this_year >= candidate {
                    return Some(this_year);
                }
                clamped_date(candidate.year() + 1, *month, *day)
            }
        }
    }

    /// First occurrence strictly after `after`.
    ///
    /// Returns `None` only past the end of the representable calendar.
    #[must_use]
    pub fn next_occurrence(&self, after: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.next_date_after(after.date_naive()).map(start_of_day)
    }

    /// Number of occurrences in `(start_exclusive, end_inclusive]`.
    ///
    /// Returns 0 when the interval is empty or inverted. Saturates at
    /// `u32::MAX`.
    #[must_use]
    pub fn count_occurrences(
        &self,
        start_exclusive: DateTime<Utc>,
        end_inclusive: DateTime<Utc>,
    ) -> u32 {
        if end_inclusive <= start_exclusive {
            return 0;
        }
        let Some(first) = start_exclusive.date_naive().succ_opt() else {
            return 0;
        };
        // Midnight of the end date is always <= end_inclusive
        let last = end_inclusive.date_naive();
        if last < first {
            return 0;
        }

        let count = match self {
            Self::Daily => (last - first).num_days() + 1,
            Self::EveryNDays { interval, anchor } => {
                let interval = i64::from(*interval);
                let through_last = (last - *anchor).num_days().div_euclid(interval);
                let before_first = ((first - *anchor).num_days() - 1).div_euclid(interval);
                through_last - before_first
            }
            Self::Weekly { days } => {
                let span = (last - first).num_days() + 1;
                let full_weeks = span / DAYS_PER_WEEK;
                let per_week = i64::try_from(days.len()).unwrap_or(DAYS_PER_WEEK);
                let tail = first
                    .checked_add_days(Days::new((full_weeks * DAYS_PER_WEEK).unsigned_abs()))
                    .map_or(0, |tail_start| {
                        (0..span % DAYS_PER_WEEK)
                            .filter_map(|offset| {
                                tail_start.checked_add_days(Days::new(offset.unsigned_abs()))
                            })
                            .filter(|d| self.occurs_on(*d))
                            .count()
                    });
                full_weeks * per_week + i64::try_from(tail).unwrap_or(0)
            }
            Self::Monthly { .. } | Self::Yearly { .. } => {
                let mut count = 0_i64;
                let mut cursor = first.pred_opt().and_then(|d| self.next_date_after(d));
                while let Some(date) = cursor.filter(|d| *d <= last) {
                    count += 1;
                    cursor = self.next_date_after(date);
                }
                count
            }
        };

        u32::try_from(count.max(0)).unwrap_or(u32::MAX)
    }

    /// Iterate occurrences strictly after `start_exclusive`, unbounded
    #[must_use]
    pub const fn occurrences_after(&self, start_exclusive: DateTime<Utc>) -> Occurrences<'_> {
        Occurrences {
            recurrence: self,
            cursor: Some(start_exclusive),
        }
    }

    /// Occurrences in `(start_exclusive, end_inclusive]`, in order
    #[must_use]
    pub fn occurrences_between(
        &self,
        start_exclusive: DateTime<Utc>,
        end_inclusive: DateTime<Utc>,
    ) -> Vec<DateTime<Utc>> {
        self.occurrences_after(start_exclusive)
            .take_while(|instant| *instant <= end_inclusive)
            .collect()
    }

    /// Canonical label, parseable by [`FromStr`]
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Daily => "daily".to_owned(),
            Self::EveryNDays { interval, anchor } if *anchor == epoch() => {
                format!("every:{interval}d")
            }
            Self::EveryNDays { interval, anchor } => {
                format!("every:{interval}d@{}", anchor.format("%Y-%m-%d"))
            }
            Self::Weekly { days } => {
                let names: Vec<&str> = days.iter().map(|d| weekday_label(*d)).collect();
                format!("weekly:{}", names.join(","))
            }
            Self::Monthly { day } => format!("monthly:{day}"),
            Self::Yearly { month, day } => format!("yearly:{month}-{day}"),
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Recurrence {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();

        match lower.as_str() {
            "daily" | "everyday" | "every day" => return Ok(Self::Daily),
            "weekly" => return Self::weekly([Weekday::Mon]),
            "weekdays" => {
                return Self::weekly([
                    Weekday::Mon,
                    Weekday::Tue,
                    Weekday::Wed,
                    Weekday::Thu,
                    Weekday::Fri,
                ])
            }
            "monthly" => return Self::monthly(1),
            "yearly" | "annually" => return Self::yearly(1, 1),
            _ => {}
        }

        if let Some(rest) = lower.strip_prefix("weekly:") {
            let days = rest
                .split(',')
                .map(|d| parse_weekday(d.trim()))
                .collect::<AppResult<Vec<_>>>()?;
            return Self::weekly(days);
        }
        if let Some(rest) = lower.strip_prefix("monthly:") {
            let day = rest.trim().parse().map_err(|_| {
                AppError::invalid_input(format!("invalid day of month: '{rest}'"))
            })?;
            return Self::monthly(day);
        }
        if let Some(rest) = lower.strip_prefix("yearly:") {
            let (month, day) = rest.trim().split_once('-').ok_or_else(|| {
                AppError::invalid_input(format!("yearly format is month-day, got '{rest}'"))
            })?;
            let month = month
                .parse()
                .map_err(|_| AppError::invalid_input(format!("invalid month: '{month}'")))?;
            let day = day
                .parse()
                .map_err(|_| AppError::invalid_input(format!("invalid day: '{day}'")))?;
            return Self::yearly(month, day);
        }
        if let Some(rest) = lower.strip_prefix("every:") {
            return parse_every(rest.trim());
        }
        if let Some(count) = lower
            .strip_prefix("every ")
            .and_then(|rest| rest.strip_suffix(" days"))
        {
            return parse_every(&format!("{}d", count.trim()));
        }

        Err(AppError::invalid_input(format!(
            "unrecognized frequency pattern: '{}'",
            s.trim()
        )))
    }
}

/// Iterator over occurrences, see [`Recurrence::occurrences_after`]
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    recurrence: &'a Recurrence,
    cursor: Option<DateTime<Utc>>,
}

impl Iterator for Occurrences<'_> {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.recurrence.next_occurrence(self.cursor?);
        self.cursor = next;
        next
    }
}

/// Midnight UTC at the start of `date`
#[must_use]
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// 1970-01-01, the default phase of `every:Nd`
fn epoch() -> NaiveDate {
    DateTime::<Utc>::UNIX_EPOCH.date_naive()
}

/// `year-month-day`, or the month's last day when `day` overflows it
fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last_day = first
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
        .map_or(31, |d| d.day());
    NaiveDate::from_ymd_opt(year, month, day.min(last_day))
}

fn parse_every(pattern: &str) -> AppResult<Recurrence> {
    let (count, anchor) = match pattern.split_once('@') {
        Some((count, anchor)) => {
            let anchor = NaiveDate::parse_from_str(anchor.trim(), "%Y-%m-%d").map_err(|_| {
                AppError::invalid_input(format!("invalid recurrence anchor date: '{anchor}'"))
            })?;
            (count, anchor)
        }
        None => (pattern, epoch()),
    };
    let count = count.trim();
    let digits = count.strip_suffix('d').unwrap_or(count);
    let interval = digits
        .parse()
        .map_err(|_| AppError::invalid_input(format!("invalid day count: '{digits}'")))?;
    Recurrence::every_n_days_from(interval, anchor)
}

fn parse_weekday(label: &str) -> AppResult<Weekday> {
    match label {
        "mon" | "monday" => Ok(Weekday::Mon),
        "tue" | "tuesday" => Ok(Weekday::Tue),
        "wed" | "wednesday" => Ok(Weekday::Wed),
        "thu" | "thursday" => Ok(Weekday::Thu),
        "fri" | "friday" => Ok(Weekday::Fri),
        "sat" | "saturday" => Ok(Weekday::Sat),
        "sun" | "sunday" => Ok(Weekday::Sun),
        other => Err(AppError::invalid_input(format!("unknown weekday: '{other}'"))),
    }
}

const fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "mon",
        Weekday::Tue => "tue",
        Weekday::Wed => "wed",
        Weekday::Thu => "thu",
        Weekday::Fri => "fri",
        Weekday::Sat => "sat",
        Weekday::Sun => "sun",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_clamped_date_rolls_to_month_end() {
        assert_eq!(clamped_date(2026, 4, 31), Some(date(2026, 4, 30)));
        assert_eq!(clamped_date(2026, 2, 30), Some(date(2026, 2, 28)));
        assert_eq!(clamped_date(2028, 2, 30), Some(date(2028, 2, 29)));
        assert_eq!(clamped_date(2026, 12, 31), Some(date(2026, 12, 31)));
    }

    #[test]
    fn test_every_n_days_defaults_to_epoch_phase() {
        assert_eq!(epoch(), date(1970, 1, 1));

        let recurrence = Recurrence::every_n_days(3).unwrap();
        assert_eq!(
            recurrence,
            Recurrence::EveryNDays {
                interval: 3,
                anchor: date(1970, 1, 1),
            }
        );
        assert_eq!(recurrence.label(), "every:3d");
        assert_eq!("every:3d".parse::<Recurrence>().unwrap(), recurrence);
    }

    #[test]
    fn test_every_n_days_next_date_respects_phase() {
        let recurrence = Recurrence::every_n_days_from(3, date(2026, 1, 1)).unwrap();
        assert_eq!(recurrence.next_date_after(date(2026, 1, 1)), Some(date(2026, 1, 4)));
        assert_eq!(recurrence.next_date_after(date(2026, 1, 2)), Some(date(2026, 1, 4)));
        assert_eq!(recurrence.next_date_after(date(2026, 1, 4)), Some(date(2026, 1, 7)));
        // Dates before the anchor stay in phase
        assert_eq!(recurrence.next_date_after(date(2025, 12, 27)), Some(date(2025, 12, 29)));
    }

    #[test]
    fn test_monthly_next_date_skips_to_following_month() {
        let recurrence = Recurrence::monthly(31).unwrap();
        assert_eq!(recurrence.next_date_after(date(2026, 1, 31)), Some(date(2026, 2, 28)));
        assert_eq!(recurrence.next_date_after(date(2026, 2, 28)), Some(date(2026, 3, 31)));
        assert_eq!(recurrence.next_date_after(date(2026, 4, 29)), Some(date(2026, 4, 30)));
    }

    #[test]
    fn test_weekly_next_date_wraps_week() {
        let recurrence: Recurrence = "weekly:mon,thu".parse().unwrap();
        // 2026-10-18 is a Sunday
        assert_eq!(recurrence.next_date_after(date(2026, 10, 18)), Some(date(2026, 10, 19)));
        assert_eq!(recurrence.next_date_after(date(2026, 10, 19)), Some(date(2026, 10, 22)));
        assert_eq!(recurrence.next_date_after(date(2026, 10, 22)), Some(date(2026, 10, 26)));
    }

    #[test]
    fn test_label_round_trips() {
        for label in [
            "daily",
            "every:3d",
            "every:2d@2026-01-05",
            "weekly:mon,wed,fri",
            "monthly:15",
            "yearly:2-29",
        ] {
            let recurrence: Recurrence = label.parse().unwrap();
            assert_eq!(recurrence.label(), label);
        }
    }
}
