// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Range summarization over bands and transactions.
//!
//! This module computes the visitor and financial totals behind persisted
//! reports, dashboard figures, and analytics buckets.
//!
//! ## Invariants
//!
//! - Ranges are inclusive on both ends and compared by calendar date
//! - A record is in range when its timestamp's date falls inside the range
//! - Deposits and refunds are summed separately, never netted in storage
//!
//! ## Usage
//!
//! This logic is used by:
//! - Report generation (to materialize persisted report records)
//! - Analytics bucketing (one summary per bucket)
//! - Dashboard totals

use crate::error::DomainError;
use crate::types::{Band, Transaction, TransactionKind, VisitorType};
use crate::validation::validate_date_range;
use time::{Date, OffsetDateTime};

/// Computed totals for one inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeSummary {
    /// Bands printed within the range.
    pub total_visitors: u32,
    /// Adult bands printed within the range.
    pub total_adults: u32,
    /// Child bands printed within the range.
    pub total_children: u32,
    /// Sum of deposit transactions within the range.
    pub total_deposits: u64,
    /// Sum of refund transactions within the range.
    pub total_refunds: u64,
}

impl RangeSummary {
    /// Returns deposits minus refunds.
    ///
    /// Refunds never exceed deposits when every refund's deposit falls in
    /// the same range; saturates at zero otherwise.
    #[must_use]
    pub const fn balance(&self) -> u64 {
        self.total_deposits.saturating_sub(self.total_refunds)
    }
}

/// Summarizes bands and transactions over an inclusive date range.
///
/// # Arguments
///
/// * `bands` - All band records; filtered by print date
/// * `transactions` - All money movements; filtered by timestamp date
/// * `start` - First day of the range, inclusive
/// * `end` - Last day of the range, inclusive
///
/// # Returns
///
/// A [`RangeSummary`] with visitor counts split by type and deposit and
/// refund sums.
///
/// # Errors
///
/// Returns [`DomainError::InvalidDateRange`] if `start` is after `end`.
pub fn summarize_range(
    bands: &[Band],
    transactions: &[Transaction],
    start: Date,
    end: Date,
) -> Result<RangeSummary, DomainError> {
    validate_date_range(start, end)?;

    let mut summary = RangeSummary::default();

    for band in bands {
        if !in_range(band.printed_at(), start, end) {
            continue;
        }
        summary.total_visitors += 1;
        match band.visitor_type() {
            VisitorType::Adult => summary.total_adults += 1,
            VisitorType::Child => summary.total_children += 1,
        }
    }

    for transaction in transactions {
        if !in_range(transaction.timestamp(), start, end) {
            continue;
        }
        match transaction.kind() {
            TransactionKind::Deposit => {
                summary.total_deposits += u64::from(transaction.amount());
            }
            TransactionKind::Refund => {
                summary.total_refunds += u64::from(transaction.amount());
            }
        }
    }

    Ok(summary)
}

/// Checks whether a timestamp's calendar date falls inside an inclusive
/// date range.
fn in_range(at: OffsetDateTime, start: Date, end: Date) -> bool {
    (start..=end).contains(&at.date())
}
