// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Issue quantity must be at least one band.
    InvalidQuantity {
        /// The rejected quantity value.
        quantity: u32,
    },
    /// Report or analytics range has a start date after its end date.
    InvalidDateRange {
        /// The requested start date.
        start: time::Date,
        /// The requested end date.
        end: time::Date,
    },
    /// Visitor type string is not recognized.
    InvalidVisitorType(String),
    /// Transaction kind string is not recognized.
    InvalidTransactionKind(String),
    /// Band lifecycle state string is not recognized.
    InvalidLifecycleState(String),
    /// Analytics period string is not recognized.
    InvalidAnalyticsPeriod(String),
    /// No band matches the scanned code.
    BandNotFound(String),
    /// No band matches the referenced identifier.
    BandIdNotFound(i64),
    /// The band has been deactivated by a completed refund.
    BandInactive(String),
    /// The band was printed on a different calendar day.
    BandExpired {
        /// The scanned code.
        code: String,
        /// The day the band was printed.
        issued_on: time::Date,
        /// The current calendar day at scan time.
        today: time::Date,
    },
    /// An entry scan has already been recorded for the band.
    AlreadyEntered(String),
    /// An exit scan requires a prior entry scan.
    NoEntryRecorded(String),
    /// An exit scan has already been recorded for the band.
    AlreadyExited(String),
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQuantity { quantity } => {
                write!(f, "Invalid quantity: {quantity}. Must be at least 1")
            }
            Self::InvalidDateRange { start, end } => {
                write!(f, "Invalid date range: start {start} is after end {end}")
            }
            Self::InvalidVisitorType(msg) => write!(f, "Invalid visitor type: {msg}"),
            Self::InvalidTransactionKind(msg) => write!(f, "Invalid transaction kind: {msg}"),
            Self::InvalidLifecycleState(msg) => write!(f, "Invalid lifecycle state: {msg}"),
            Self::InvalidAnalyticsPeriod(msg) => write!(f, "Invalid analytics period: {msg}"),
            Self::BandNotFound(code) => write!(f, "Band not found: {code}"),
            Self::BandIdNotFound(id) => write!(f, "Band not found for id: {id}"),
            Self::BandInactive(code) => write!(f, "Band {code} is inactive"),
            Self::BandExpired {
                code,
                issued_on,
                today,
            } => {
                write!(
                    f,
                    "Band {code} expired: printed on {issued_on}, today is {today}"
                )
            }
            Self::AlreadyEntered(code) => {
                write!(f, "Entry already recorded for band {code}")
            }
            Self::NoEntryRecorded(code) => {
                write!(f, "No entry recorded for band {code}")
            }
            Self::AlreadyExited(code) => {
                write!(f, "Exit already recorded for band {code}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
