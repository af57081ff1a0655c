// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dashboard analytics over bands and transactions.
//!
//! This module buckets park activity into chart-ready windows anchored at
//! an injected "today" so callers control what current means.
//!
//! ## Invariants
//!
//! - Windows are derived from `today`, never from the wall clock
//! - Daily covers today and the six days before it, one bucket per day
//! - Weekly covers four seven-day buckets, the most recent ending yesterday
//! - Monthly and six-month cover whole calendar months ending with the
//!   current month
//! - Buckets are read-only views; no records are created or modified
//!
//! ## Usage
//!
//! This logic is used by:
//! - The analytics dashboard (visitor and financial charts)
//! - The six-month summary panel
//! - The dashboard visitor trend line

use crate::error::DomainError;
use crate::report::{RangeSummary, summarize_range};
use crate::types::{Band, Transaction};
use time::{Date, Duration, Month, Weekday};

/// Represents a chart window selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalyticsPeriod {
    /// One bucket per day for the last seven days.
    Daily,
    /// Four seven-day buckets ending yesterday.
    Weekly,
    /// One bucket per calendar month for the last three months.
    Monthly,
    /// One bucket per calendar month for the last six months.
    SixMonth,
}

impl AnalyticsPeriod {
    /// Parses an analytics period from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid period.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "sixMonth" => Ok(Self::SixMonth),
            _ => Err(DomainError::InvalidAnalyticsPeriod(format!(
                "Unknown analytics period: {s}"
            ))),
        }
    }

    /// Converts this period to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::SixMonth => "sixMonth",
        }
    }
}

impl std::fmt::Display for AnalyticsPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents one computed chart bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityBucket {
    /// Chart label, e.g. "Aug 25", "Week 3", "Aug 2026".
    pub label: String,
    /// First day covered, inclusive.
    pub start: Date,
    /// Last day covered, inclusive.
    pub end: Date,
    /// Bands printed within the bucket.
    pub visitors: u32,
    /// Sum of deposit transactions within the bucket.
    pub deposits: u64,
    /// Sum of refund transactions within the bucket.
    pub refunds: u64,
}

/// Represents one point of the dashboard visitor trend line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    /// Weekday label, e.g. "Mon".
    pub label: String,
    /// The day this point covers.
    pub date: Date,
    /// Bands printed on that day.
    pub visitors: u32,
}

/// Buckets bands and transactions into chart windows for a period.
///
/// # Arguments
///
/// * `bands` - All band records
/// * `transactions` - All money movements
/// * `period` - The window selection
/// * `today` - The anchor date the windows count back from
///
/// # Returns
///
/// One [`ActivityBucket`] per window, oldest first, matching chart order.
///
/// # Errors
///
/// Returns an error if window arithmetic leaves the representable date
/// range.
pub fn bucket_activity(
    bands: &[Band],
    transactions: &[Transaction],
    period: AnalyticsPeriod,
    today: Date,
) -> Result<Vec<ActivityBucket>, DomainError> {
    let windows = match period {
        AnalyticsPeriod::Daily => daily_windows(today)?,
        AnalyticsPeriod::Weekly => weekly_windows(today)?,
        AnalyticsPeriod::Monthly => monthly_windows(today, 3)?,
        AnalyticsPeriod::SixMonth => monthly_windows(today, 6)?,
    };

    let mut buckets = Vec::with_capacity(windows.len());
    for (label, start, end) in windows {
        let summary = summarize_range(bands, transactions, start, end)?;
        buckets.push(ActivityBucket {
            label,
            start,
            end,
            visitors: summary.total_visitors,
            deposits: summary.total_deposits,
            refunds: summary.total_refunds,
        });
    }

    Ok(buckets)
}

/// Summarizes the last six calendar months ending today.
///
/// # Errors
///
/// Returns an error if the six-month lookback leaves the representable
/// date range.
pub fn six_month_summary(
    bands: &[Band],
    transactions: &[Transaction],
    today: Date,
) -> Result<RangeSummary, DomainError> {
    let start = months_back(today, 6)?;
    summarize_range(bands, transactions, start, today)
}

/// Computes the seven-day visitor trend ending today.
///
/// # Errors
///
/// Returns an error if the seven-day lookback leaves the representable
/// date range.
pub fn visitor_trend(bands: &[Band], today: Date) -> Result<Vec<TrendPoint>, DomainError> {
    let mut points = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let day = shift_days(today, -offset)?;
        let summary = summarize_range(bands, &[], day, day)?;
        points.push(TrendPoint {
            label: weekday_abbrev(day.weekday()).to_string(),
            date: day,
            visitors: summary.total_visitors,
        });
    }
    Ok(points)
}

/// One window per day, today minus six through today.
fn daily_windows(today: Date) -> Result<Vec<(String, Date, Date)>, DomainError> {
    let mut windows = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let day = shift_days(today, -offset)?;
        let label = format!("{} {}", month_abbrev(day.month()), day.day());
        windows.push((label, day, day));
    }
    Ok(windows)
}

/// Four seven-day windows, the most recent ending yesterday.
fn weekly_windows(today: Date) -> Result<Vec<(String, Date, Date)>, DomainError> {
    let mut windows = Vec::with_capacity(4);
    for index in 0..4 {
        let start = shift_days(today, -(28 - index * 7))?;
        let end = shift_days(start, 6)?;
        let label = format!("Week {}", index + 1);
        windows.push((label, start, end));
    }
    Ok(windows)
}

/// One window per calendar month, ending with the month containing today.
fn monthly_windows(today: Date, months: u8) -> Result<Vec<(String, Date, Date)>, DomainError> {
    let mut windows = Vec::with_capacity(usize::from(months));
    for offset in (0..months).rev() {
        let anchor = months_back(today, u32::from(offset))?;
        let (start, end) = month_bounds(anchor)?;
        let label = format!("{} {}", month_abbrev(anchor.month()), anchor.year());
        windows.push((label, start, end));
    }
    Ok(windows)
}

/// Shifts a date by a signed number of days.
fn shift_days(date: Date, days: i64) -> Result<Date, DomainError> {
    date.checked_add(Duration::days(days))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("shifting {date} by {days} days"),
        })
}

/// Shifts a date back a number of calendar months, clamping the day to
/// the target month's length.
fn months_back(date: Date, months: u32) -> Result<Date, DomainError> {
    let overflow = || DomainError::DateArithmeticOverflow {
        operation: format!("shifting {date} back {months} months"),
    };

    let total =
        i64::from(date.year()) * 12 + i64::from(u8::from(date.month())) - 1 - i64::from(months);
    let year = i32::try_from(total.div_euclid(12)).map_err(|_| overflow())?;
    let month_number = u8::try_from(total.rem_euclid(12) + 1).map_err(|_| overflow())?;
    let month = Month::try_from(month_number).map_err(|_| overflow())?;
    let day = date.day().min(month.length(year));

    Date::from_calendar_date(year, month, day).map_err(|_| overflow())
}

/// First and last day of the month containing the anchor date.
fn month_bounds(anchor: Date) -> Result<(Date, Date), DomainError> {
    let overflow = || DomainError::DateArithmeticOverflow {
        operation: format!("computing month bounds for {anchor}"),
    };

    let first = anchor.replace_day(1).map_err(|_| overflow())?;
    let last = anchor
        .replace_day(anchor.month().length(anchor.year()))
        .map_err(|_| overflow())?;

    Ok((first, last))
}

const fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

const fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}
