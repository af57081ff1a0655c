// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod analytics;
mod error;
mod report;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use analytics::{
    ActivityBucket, AnalyticsPeriod, TrendPoint, bucket_activity, six_month_summary, visitor_trend,
};
pub use report::{RangeSummary, summarize_range};

// Re-export public types
pub use error::DomainError;
pub use types::{Band, BandCode, BandLifecycle, Report, Transaction, TransactionKind, VisitorType};
pub use validation::{validate_date_range, validate_quantity};
