// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the parkband wristband system.
//!
//! The presentation layer talks to this crate and nothing below it. A
//! [`Park`] bundles the in-memory ledger with its backing store and exposes
//! the five state-changing operations (issue, entry scan, exit scan,
//! refund, report) plus read-only views for the scanner, ledger, and
//! dashboard screens.
//!
//! Every mutation follows the same commit order: translate the request into
//! a command, apply it against the current ledger, save the replacement
//! ledger, then swap it in. Domain and core errors are translated into
//! [`ApiError`] so callers see one flat error surface.
//!
//! Identity is attribution, not access control. Operations accept an
//! optional [`AuthenticatedActor`] and never branch on role; the advisory
//! [`RoleCapabilities`] table exists for the presentation layer to enable
//! or disable controls.

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

mod auth;
mod capabilities;
mod config;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use auth::{AuthenticatedActor, Role};
pub use capabilities::compute_role_capabilities;
pub use config::ParkConfig;
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::Park;
pub use request_response::{
    ActivityBucketInfo, ActivityEntryInfo, ActivityQueryRequest, ActivityQueryResponse,
    AnalyticsRequest, AnalyticsResponse, BandInfo, Capability, DashboardStatsResponse,
    GenerateReportRequest, GenerateReportResponse, IssueBandsRequest, IssueBandsResponse,
    RefundDepositRequest, RefundDepositResponse, ReportInfo, RoleCapabilities, ScanEntryRequest,
    ScanEntryResponse, ScanExitRequest, ScanExitResponse, ScannerStatsResponse,
    SixMonthSummaryResponse, TransactionInfo, TransactionQueryRequest, TransactionQueryResponse,
    TrendPointInfo,
};
