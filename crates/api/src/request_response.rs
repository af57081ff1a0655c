// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use parkband_activity::ActivityEntry;
use parkband_domain::{ActivityBucket, Band, Report, Transaction, TrendPoint};
use time::{Date, OffsetDateTime};

/// API request to issue a batch of bands.
///
/// This DTO is distinct from domain types and represents the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueBandsRequest {
    /// The visitor classification ("A"/"Adult" or "C"/"Child").
    pub visitor_type: String,
    /// How many bands to print. Must be at least one.
    pub quantity: u32,
    /// Deposit per band. When absent, the configured per-type default
    /// applies.
    pub deposit_amount: Option<u32>,
}

/// API response for a successful band issue.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IssueBandsResponse {
    /// The freshly printed bands, in print order.
    pub bands: Vec<BandInfo>,
    /// Label the printing layer renders on each band.
    pub park_label: String,
    /// A success message.
    pub message: String,
}

/// API request to record an entry scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntryRequest {
    /// The scanned code, as read from the barcode scanner.
    pub code: String,
}

/// API response for a successful entry scan.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScanEntryResponse {
    /// The band after the scan.
    pub band: BandInfo,
    /// A success message.
    pub message: String,
}

/// API request to record an exit scan.
///
/// The deposit refund is an inseparable follow-on step of the exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanExitRequest {
    /// The scanned code, as read from the barcode scanner.
    pub code: String,
}

/// API response for a successful exit scan.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScanExitResponse {
    /// The band after exit and refund.
    pub band: BandInfo,
    /// A success message.
    pub message: String,
}

/// API request to refund the deposit held for a band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefundDepositRequest {
    /// The band's identifier.
    pub band_id: i64,
}

/// API response for a refund request.
///
/// A refund request on a band that is not exited-and-unrefunded completes
/// as a no-op rather than an error; `refunded` distinguishes the two.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RefundDepositResponse {
    /// The band as it stands after the request.
    pub band: BandInfo,
    /// Whether a refund was actually processed.
    pub refunded: bool,
    /// A human-readable outcome message.
    pub message: String,
}

/// API request to compute and persist a report over a date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReportRequest {
    /// First day of the range, inclusive (ISO 8601).
    pub start_date: String,
    /// Last day of the range, inclusive (ISO 8601).
    pub end_date: String,
}

/// API response for a successful report generation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GenerateReportResponse {
    /// The persisted report.
    pub report: ReportInfo,
    /// A success message.
    pub message: String,
}

/// API request to list transactions within a date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionQueryRequest {
    /// First day of the range, inclusive (ISO 8601).
    pub start_date: String,
    /// Last day of the range, inclusive (ISO 8601).
    pub end_date: String,
    /// Optional kind filter ("deposit" or "refund").
    pub kind: Option<String>,
}

/// API response listing matching transactions, newest first.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransactionQueryResponse {
    /// The matching transactions, newest first.
    pub transactions: Vec<TransactionInfo>,
}

/// API request to list activity log entries within a date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityQueryRequest {
    /// First day of the range, inclusive (ISO 8601).
    pub start_date: String,
    /// Last day of the range, inclusive (ISO 8601).
    pub end_date: String,
    /// Optional case-insensitive text search over action and details.
    pub search: Option<String>,
}

/// API response listing matching activity entries, newest first.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActivityQueryResponse {
    /// The matching entries, newest first.
    pub entries: Vec<ActivityEntryInfo>,
}

/// API response with same-day counters for the scanner screen.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScannerStatsResponse {
    /// The day the counters cover.
    pub date: Date,
    /// Bands whose entry scan happened on `date`.
    pub entries_today: usize,
    /// Bands whose exit scan happened on `date`.
    pub exits_today: usize,
    /// Active bands with an entry scan and no exit scan yet.
    pub inside_now: usize,
    /// Refunded bands whose exit scan happened on `date`.
    pub refunds_today: usize,
}

/// API response with aggregated counters for the dashboard screen.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DashboardStatsResponse {
    /// The day the daily counters cover.
    pub date: Date,
    /// Bands currently active.
    pub active_bands: usize,
    /// Bands printed on `date`.
    pub visitors_today: u32,
    /// Adult bands printed on `date`.
    pub adults_today: u32,
    /// Child bands printed on `date`.
    pub children_today: u32,
    /// Sum of all deposit transactions.
    pub total_deposits: u64,
    /// Sum of all refund transactions.
    pub total_refunds: u64,
    /// Deposits minus refunds.
    pub balance: u64,
    /// Bands printed by the requesting staff member.
    pub staff_printed: usize,
    /// The five most recent activity entries, newest first.
    pub recent_activity: Vec<ActivityEntryInfo>,
    /// Per-day printed-band counts for the last seven days, oldest first.
    pub visitor_trend: Vec<TrendPointInfo>,
}

/// API request for chart buckets over an analytics period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsRequest {
    /// The window selection ("daily", "weekly", "monthly", "sixMonth").
    pub period: String,
}

/// API response with computed chart buckets, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnalyticsResponse {
    /// The window selection the buckets cover.
    pub period: String,
    /// One bucket per window, oldest first, matching chart order.
    pub buckets: Vec<ActivityBucketInfo>,
}

/// API response summarizing the last six calendar months.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SixMonthSummaryResponse {
    /// Bands printed within the window.
    pub total_visitors: u32,
    /// Adult bands printed within the window.
    pub total_adults: u32,
    /// Child bands printed within the window.
    pub total_children: u32,
    /// Sum of deposit transactions within the window.
    pub total_deposits: u64,
    /// Sum of refund transactions within the window.
    pub total_refunds: u64,
    /// Deposits minus refunds.
    pub balance: u64,
}

/// Band information for API responses.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BandInfo {
    /// The band's identifier.
    pub id: i64,
    /// The printed barcode value.
    pub code: String,
    /// The visitor classification ("Adult" or "Child").
    pub visitor_type: String,
    /// Deposit held for this band.
    pub deposit_amount: u32,
    /// Identity reference to the issuing staff member.
    pub printed_by: String,
    /// Issue instant.
    #[serde(with = "time::serde::iso8601")]
    pub printed_at: OffsetDateTime,
    /// Entry scan instant, when recorded.
    #[serde(
        with = "time::serde::iso8601::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub entry_time: Option<OffsetDateTime>,
    /// Exit scan instant, when recorded.
    #[serde(
        with = "time::serde::iso8601::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub exit_time: Option<OffsetDateTime>,
    /// True from creation until the refund completes.
    pub is_active: bool,
    /// False until the refund completes, then permanently true.
    pub is_refunded: bool,
}

impl From<&Band> for BandInfo {
    fn from(band: &Band) -> Self {
        Self {
            id: band.id(),
            code: band.code().value().to_string(),
            visitor_type: band.visitor_type().as_str().to_string(),
            deposit_amount: band.deposit_amount(),
            printed_by: band.printed_by().to_string(),
            printed_at: band.printed_at(),
            entry_time: band.entry_time(),
            exit_time: band.exit_time(),
            is_active: band.is_active(),
            is_refunded: band.is_refunded(),
        }
    }
}

/// Transaction information for API responses.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransactionInfo {
    /// The transaction's identifier.
    pub id: i64,
    /// The band the money moved for.
    pub band_id: i64,
    /// The movement direction ("deposit" or "refund").
    pub kind: String,
    /// The amount moved.
    pub amount: u32,
    /// The instant the movement was recorded.
    #[serde(with = "time::serde::iso8601")]
    pub timestamp: OffsetDateTime,
    /// Identity reference to whoever processed the movement.
    pub processed_by: String,
}

impl From<&Transaction> for TransactionInfo {
    fn from(transaction: &Transaction) -> Self {
        Self {
            id: transaction.id(),
            band_id: transaction.band_id(),
            kind: transaction.kind().as_str().to_string(),
            amount: transaction.amount(),
            timestamp: transaction.timestamp(),
            processed_by: transaction.processed_by().to_string(),
        }
    }
}

/// Activity log entry information for API responses.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActivityEntryInfo {
    /// The entry's identifier.
    pub id: i64,
    /// The actor the entry is attributed to.
    pub user_id: String,
    /// Category text, e.g. "Band Printed".
    pub action: String,
    /// Human-readable description of what happened.
    pub details: String,
    /// The instant the entry was recorded.
    #[serde(with = "time::serde::iso8601")]
    pub timestamp: OffsetDateTime,
}

impl From<&ActivityEntry> for ActivityEntryInfo {
    fn from(entry: &ActivityEntry) -> Self {
        Self {
            id: entry.id(),
            user_id: entry.user_id().to_string(),
            action: entry.action().to_string(),
            details: entry.details().to_string(),
            timestamp: entry.timestamp(),
        }
    }
}

/// Report information for API responses.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReportInfo {
    /// The report's identifier.
    pub id: i64,
    /// First day covered, inclusive.
    pub start_date: Date,
    /// Last day covered, inclusive.
    pub end_date: Date,
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
    /// Deposits minus refunds.
    pub balance: u64,
    /// Identity reference to whoever requested the report.
    pub generated_by: String,
    /// The instant the report was computed.
    #[serde(with = "time::serde::iso8601")]
    pub generated_at: OffsetDateTime,
}

impl From<&Report> for ReportInfo {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id(),
            start_date: report.start_date(),
            end_date: report.end_date(),
            total_visitors: report.total_visitors(),
            total_adults: report.total_adults(),
            total_children: report.total_children(),
            total_deposits: report.total_deposits(),
            total_refunds: report.total_refunds(),
            balance: report.total_deposits().saturating_sub(report.total_refunds()),
            generated_by: report.generated_by().to_string(),
            generated_at: report.generated_at(),
        }
    }
}

/// Chart bucket information for API responses.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActivityBucketInfo {
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

impl From<&ActivityBucket> for ActivityBucketInfo {
    fn from(bucket: &ActivityBucket) -> Self {
        Self {
            label: bucket.label.clone(),
            start: bucket.start,
            end: bucket.end,
            visitors: bucket.visitors,
            deposits: bucket.deposits,
            refunds: bucket.refunds,
        }
    }
}

/// Visitor trend point information for API responses.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TrendPointInfo {
    /// Weekday label, e.g. "Mon".
    pub label: String,
    /// The day this point covers.
    pub date: Date,
    /// Bands printed on that day.
    pub visitors: u32,
}

impl From<&TrendPoint> for TrendPointInfo {
    fn from(point: &TrendPoint) -> Self {
        Self {
            label: point.label.clone(),
            date: point.date,
            visitors: point.visitors,
        }
    }
}

// ========================================================================
// Capability Model
// ========================================================================

/// Represents whether a specific action is permitted.
///
/// This enum provides better type safety than raw booleans and serializes
/// to JSON as true/false for API compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Returns true if the capability is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Creates a capability from a boolean value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Allowed } else { Self::Denied }
    }
}

impl serde::Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bool(matches!(self, Self::Allowed))
    }
}

impl<'de> serde::Deserialize<'de> for Capability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let b = bool::deserialize(deserializer)?;
        Ok(Self::from_bool(b))
    }
}

/// Role-level capabilities for an authenticated identity.
///
/// These are advisory. The operation layer never enforces them; the
/// presentation layer consults them to enable or disable controls.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoleCapabilities {
    /// Whether the identity may issue bands.
    pub can_issue: Capability,
    /// Whether the identity may scan entries and exits.
    pub can_scan: Capability,
    /// Whether the identity may process refunds.
    pub can_refund: Capability,
    /// Whether the identity may generate reports.
    pub can_report: Capability,
    /// Whether the identity may view the analytics charts.
    pub can_view_analytics: Capability,
}
