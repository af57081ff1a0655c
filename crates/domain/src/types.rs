// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Represents the type of visitor a band admits.
///
/// Serialized as the single letter that also leads the band code,
/// matching the printed barcode convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisitorType {
    /// Adult visitor.
    #[serde(rename = "A")]
    Adult,
    /// Child visitor.
    #[serde(rename = "C")]
    Child,
}

impl VisitorType {
    /// Parses a visitor type from a string.
    ///
    /// Accepts the code letter ("A"/"C") or the display name
    /// ("Adult"/"Child").
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid visitor type.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "A" | "Adult" => Ok(Self::Adult),
            "C" | "Child" => Ok(Self::Child),
            _ => Err(DomainError::InvalidVisitorType(format!(
                "Unknown visitor type: {s}"
            ))),
        }
    }

    /// Returns the display name of this visitor type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Adult => "Adult",
            Self::Child => "Child",
        }
    }

    /// Returns the single letter that leads this visitor type's band codes.
    #[must_use]
    pub const fn letter(&self) -> char {
        match self {
            Self::Adult => 'A',
            Self::Child => 'C',
        }
    }
}

impl std::fmt::Display for VisitorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents the lifecycle state of a band.
///
/// The lifecycle is strictly linear. No transition skips a stage and
/// `Refunded` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BandLifecycle {
    /// Printed and paid for. No gate activity yet.
    #[default]
    Issued,
    /// Entry scanned. The visitor is in the park.
    Entered,
    /// Exit scanned. Awaiting or undergoing refund.
    Exited,
    /// Deposit returned. The band is permanently inactive.
    Refunded,
}

impl FromStr for BandLifecycle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Issued" => Ok(Self::Issued),
            "Entered" => Ok(Self::Entered),
            "Exited" => Ok(Self::Exited),
            "Refunded" => Ok(Self::Refunded),
            _ => Err(DomainError::InvalidLifecycleState(s.to_string())),
        }
    }
}

impl std::fmt::Display for BandLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl BandLifecycle {
    /// Converts this lifecycle state to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Issued => "Issued",
            Self::Entered => "Entered",
            Self::Exited => "Exited",
            Self::Refunded => "Refunded",
        }
    }

    /// Checks if a transition from this state to another is valid.
    ///
    /// Valid transitions are:
    /// - Issued → Entered
    /// - Entered → Exited
    /// - Exited → Refunded
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Issued, Self::Entered)
                | (Self::Entered, Self::Exited)
                | (Self::Exited, Self::Refunded)
        )
    }

    /// Returns whether this state admits no further transitions.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Refunded)
    }
}

/// Represents a band's printed barcode value.
///
/// Format: `<type letter><yy><mm><dd><hh><mm><rand4>`, for example
/// `A26082510307341` for an adult band printed 2026-08-25 at 10:30. The
/// format is an external contract with already-printed wristbands and must
/// not change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BandCode(String);

impl BandCode {
    /// Generates a band code from the visitor type, the issue instant, and
    /// a random disambiguator.
    ///
    /// # Arguments
    ///
    /// * `visitor_type` - Determines the leading letter
    /// * `at` - The issue instant; minute precision ends up in the code
    /// * `suffix` - Random disambiguator, reduced modulo 10000
    ///
    /// Two bands issued in the same minute collide with probability 1/10000
    /// per pair. There is no uniqueness check against existing codes; the
    /// risk is accepted and scans resolve to the first match.
    #[must_use]
    pub fn generate(visitor_type: VisitorType, at: OffsetDateTime, suffix: u16) -> Self {
        let year = at.year().rem_euclid(100);
        let month = u8::from(at.month());
        Self(format!(
            "{letter}{year:02}{month:02}{day:02}{hour:02}{minute:02}{rand:04}",
            letter = visitor_type.letter(),
            day = at.day(),
            hour = at.hour(),
            minute = at.minute(),
            rand = suffix % 10_000,
        ))
    }

    /// Wraps a scanned code value as read from the barcode reader.
    #[must_use]
    pub fn from_scan(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    /// Returns the code string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BandCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a physical wristband issued to one visitor for one day.
///
/// A band carries a refundable deposit. Its lifecycle advances only
/// through entry and exit scans and ends when the deposit is refunded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Band {
    /// Sequential identifier assigned at creation. Immutable.
    id: i64,
    /// Printed barcode value. Immutable.
    code: BandCode,
    /// Visitor classification. Immutable.
    visitor_type: VisitorType,
    /// Deposit held for this band. Immutable.
    deposit_amount: u32,
    /// Identity reference to the issuing staff member.
    printed_by: String,
    /// Issue instant. Immutable.
    #[serde(with = "time::serde::iso8601")]
    printed_at: OffsetDateTime,
    /// Entry scan instant. Set at most once.
    #[serde(
        with = "time::serde::iso8601::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    entry_time: Option<OffsetDateTime>,
    /// Exit scan instant. Set at most once, and only after entry.
    #[serde(
        with = "time::serde::iso8601::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    exit_time: Option<OffsetDateTime>,
    /// True from creation until the refund completes.
    is_active: bool,
    /// False until the refund completes, then permanently true.
    is_refunded: bool,
}

impl Band {
    /// Creates a newly issued band with no gate activity.
    #[must_use]
    pub const fn new(
        id: i64,
        code: BandCode,
        visitor_type: VisitorType,
        deposit_amount: u32,
        printed_by: String,
        printed_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            code,
            visitor_type,
            deposit_amount,
            printed_by,
            printed_at,
            entry_time: None,
            exit_time: None,
            is_active: true,
            is_refunded: false,
        }
    }

    /// Returns the band's identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the band's printed barcode value.
    #[must_use]
    pub const fn code(&self) -> &BandCode {
        &self.code
    }

    /// Returns the visitor type this band admits.
    #[must_use]
    pub const fn visitor_type(&self) -> VisitorType {
        self.visitor_type
    }

    /// Returns the deposit held for this band.
    #[must_use]
    pub const fn deposit_amount(&self) -> u32 {
        self.deposit_amount
    }

    /// Returns the identity that issued this band.
    #[must_use]
    pub fn printed_by(&self) -> &str {
        &self.printed_by
    }

    /// Returns the issue instant.
    #[must_use]
    pub const fn printed_at(&self) -> OffsetDateTime {
        self.printed_at
    }

    /// Returns the entry scan instant, if entry has been recorded.
    #[must_use]
    pub const fn entry_time(&self) -> Option<OffsetDateTime> {
        self.entry_time
    }

    /// Returns the exit scan instant, if exit has been recorded.
    #[must_use]
    pub const fn exit_time(&self) -> Option<OffsetDateTime> {
        self.exit_time
    }

    /// Returns whether the band is still active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns whether the deposit has been refunded.
    #[must_use]
    pub const fn is_refunded(&self) -> bool {
        self.is_refunded
    }

    /// Derives the lifecycle state from the recorded timestamps and flags.
    #[must_use]
    pub const fn lifecycle(&self) -> BandLifecycle {
        if self.is_refunded {
            BandLifecycle::Refunded
        } else if self.exit_time.is_some() {
            BandLifecycle::Exited
        } else if self.entry_time.is_some() {
            BandLifecycle::Entered
        } else {
            BandLifecycle::Issued
        }
    }

    /// Returns whether the band was printed on the given calendar date.
    ///
    /// Bands are valid for their issue day only; scans on any later date
    /// are rejected as expired.
    #[must_use]
    pub fn is_printed_on(&self, date: time::Date) -> bool {
        self.printed_at.date() == date
    }

    /// Records the entry scan instant.
    ///
    /// Callers must have verified the band is active, unexpired, and has no
    /// prior entry.
    pub const fn record_entry(&mut self, at: OffsetDateTime) {
        self.entry_time = Some(at);
    }

    /// Records the exit scan instant.
    ///
    /// Callers must have verified entry was recorded and no prior exit
    /// exists.
    pub const fn record_exit(&mut self, at: OffsetDateTime) {
        self.exit_time = Some(at);
    }

    /// Marks the deposit as refunded and permanently deactivates the band.
    pub const fn mark_refunded(&mut self) {
        self.is_refunded = true;
        self.is_active = false;
    }
}

/// Represents the direction of a money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Deposit taken at band issuance.
    Deposit,
    /// Deposit returned after exit.
    Refund,
}

impl TransactionKind {
    /// Parses a transaction kind from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid kind.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "deposit" => Ok(Self::Deposit),
            "refund" => Ok(Self::Refund),
            _ => Err(DomainError::InvalidTransactionKind(format!(
                "Unknown transaction kind: {s}"
            ))),
        }
    }

    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Refund => "refund",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents an immutable money-movement record.
///
/// Exactly one deposit transaction exists per band. At most one refund
/// transaction exists per band, and only once the band is refunded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Sequential identifier assigned at creation.
    id: i64,
    /// The band this movement belongs to.
    band_id: i64,
    /// Deposit or refund.
    #[serde(rename = "type")]
    kind: TransactionKind,
    /// Amount moved. Always equals the band's deposit amount.
    amount: u32,
    /// Instant the movement was recorded.
    #[serde(with = "time::serde::iso8601")]
    timestamp: OffsetDateTime,
    /// Identity that processed the movement.
    processed_by: String,
}

impl Transaction {
    /// Creates a money-movement record.
    #[must_use]
    pub const fn new(
        id: i64,
        band_id: i64,
        kind: TransactionKind,
        amount: u32,
        timestamp: OffsetDateTime,
        processed_by: String,
    ) -> Self {
        Self {
            id,
            band_id,
            kind,
            amount,
            timestamp,
            processed_by,
        }
    }

    /// Returns the transaction's identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the identifier of the owning band.
    #[must_use]
    pub const fn band_id(&self) -> i64 {
        self.band_id
    }

    /// Returns whether this movement is a deposit or a refund.
    #[must_use]
    pub const fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Returns the amount moved.
    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.amount
    }

    /// Returns the instant the movement was recorded.
    #[must_use]
    pub const fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    /// Returns the identity that processed the movement.
    #[must_use]
    pub fn processed_by(&self) -> &str {
        &self.processed_by
    }
}

/// Represents a persisted visitor and financial summary for a date range.
///
/// Reports are computed once and never edited. Regenerating a range
/// produces a new, independent record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Sequential identifier assigned at creation.
    id: i64,
    /// First day of the summarized range, inclusive.
    start_date: time::Date,
    /// Last day of the summarized range, inclusive.
    end_date: time::Date,
    /// Bands printed within the range.
    total_visitors: u32,
    /// Adult bands printed within the range.
    total_adults: u32,
    /// Child bands printed within the range.
    total_children: u32,
    /// Sum of deposit transactions within the range.
    total_deposits: u64,
    /// Sum of refund transactions within the range.
    total_refunds: u64,
    /// Identity that requested the report.
    generated_by: String,
    /// Instant the report was computed.
    #[serde(with = "time::serde::iso8601")]
    generated_at: OffsetDateTime,
}

impl Report {
    /// Creates a report record from computed totals.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn new(
        id: i64,
        start_date: time::Date,
        end_date: time::Date,
        total_visitors: u32,
        total_adults: u32,
        total_children: u32,
        total_deposits: u64,
        total_refunds: u64,
        generated_by: String,
        generated_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            start_date,
            end_date,
            total_visitors,
            total_adults,
            total_children,
            total_deposits,
            total_refunds,
            generated_by,
            generated_at,
        }
    }

    /// Returns the report's identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the first day of the summarized range.
    #[must_use]
    pub const fn start_date(&self) -> time::Date {
        self.start_date
    }

    /// Returns the last day of the summarized range.
    #[must_use]
    pub const fn end_date(&self) -> time::Date {
        self.end_date
    }

    /// Returns the number of bands printed within the range.
    #[must_use]
    pub const fn total_visitors(&self) -> u32 {
        self.total_visitors
    }

    /// Returns the number of adult bands printed within the range.
    #[must_use]
    pub const fn total_adults(&self) -> u32 {
        self.total_adults
    }

    /// Returns the number of child bands printed within the range.
    #[must_use]
    pub const fn total_children(&self) -> u32 {
        self.total_children
    }

    /// Returns the sum of deposit transactions within the range.
    #[must_use]
    pub const fn total_deposits(&self) -> u64 {
        self.total_deposits
    }

    /// Returns the sum of refund transactions within the range.
    #[must_use]
    pub const fn total_refunds(&self) -> u64 {
        self.total_refunds
    }

    /// Returns the identity that requested the report.
    #[must_use]
    pub fn generated_by(&self) -> &str {
        &self.generated_by
    }

    /// Returns the instant the report was computed.
    #[must_use]
    pub const fn generated_at(&self) -> OffsetDateTime {
        self.generated_at
    }
}
