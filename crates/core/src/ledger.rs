// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use parkband_activity::ActivityEntry;
use parkband_domain::{Band, BandCode, Report, Transaction};
use serde::{Deserialize, Serialize};

/// The complete park state: four append/update collections.
///
/// The ledger is the unit the store loads and saves wholesale. Engine
/// operations never mutate a ledger in place; `apply` produces a replacement
/// value and the caller swaps it in once the store write succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    /// All issued bands, in issue order.
    #[serde(default)]
    pub bands: Vec<Band>,
    /// Every deposit and refund movement, append-only.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// The audit trail of state-changing actions, append-only.
    #[serde(default)]
    pub activity_logs: Vec<ActivityEntry>,
    /// Persisted report snapshots, append-only.
    #[serde(default)]
    pub reports: Vec<Report>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bands: Vec::new(),
            transactions: Vec::new(),
            activity_logs: Vec::new(),
            reports: Vec::new(),
        }
    }

    /// Finds a band by its printed code.
    ///
    /// Codes are best-effort unique; a collision resolves to the first
    /// matching band in issue order.
    #[must_use]
    pub fn band_by_code(&self, code: &BandCode) -> Option<&Band> {
        self.bands.iter().find(|band| band.code() == code)
    }

    /// Finds a band by its identifier.
    #[must_use]
    pub fn band_by_id(&self, id: i64) -> Option<&Band> {
        self.bands.iter().find(|band| band.id() == id)
    }

    /// Next sequential band identifier.
    pub(crate) fn next_band_id(&self) -> i64 {
        self.bands.iter().map(Band::id).max().unwrap_or(0) + 1
    }

    /// Next sequential transaction identifier.
    pub(crate) fn next_transaction_id(&self) -> i64 {
        self.transactions
            .iter()
            .map(Transaction::id)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Next sequential activity log identifier.
    pub(crate) fn next_activity_id(&self) -> i64 {
        self.activity_logs
            .iter()
            .map(ActivityEntry::id)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Next sequential report identifier.
    pub(crate) fn next_report_id(&self) -> i64 {
        self.reports.iter().map(Report::id).max().unwrap_or(0) + 1
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

/// Describes the observable effect of a successfully applied command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Bands were issued and one deposit taken per band.
    BandsIssued {
        /// The freshly printed bands, in print order.
        bands: Vec<Band>,
        /// Label the printing layer renders on each band.
        park_label: String,
    },
    /// An entry scan was recorded.
    EntryRecorded {
        /// The band after the scan.
        band: Band,
    },
    /// An exit scan was recorded and the deposit refund processed.
    ExitRecorded {
        /// The band after exit and refund.
        band: Band,
    },
    /// A deposit was refunded.
    DepositRefunded {
        /// The band after the refund.
        band: Band,
    },
    /// A refund request matched a band already settled or not yet exited;
    /// nothing changed.
    RefundSkipped {
        /// The band as it stands.
        band: Band,
    },
    /// A report snapshot was computed and appended.
    ReportGenerated {
        /// The persisted report.
        report: Report,
    },
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The replacement ledger after the transition.
    pub new_ledger: Ledger,
    /// What the transition did, for display and follow-on printing.
    pub outcome: Outcome,
}
