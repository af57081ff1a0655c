// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use parkband_domain::{BandCode, VisitorType};
use time::Date;

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request ledger changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Issue a batch of bands, taking one deposit per band.
    IssueBands {
        /// The visitor classification for every band in the batch.
        visitor_type: VisitorType,
        /// How many bands to print. Must be at least one.
        quantity: u32,
        /// Deposit held per band.
        deposit_amount: u32,
        /// Label the printing layer renders on each band.
        park_label: String,
    },
    /// Record an entry scan for a band code.
    ScanEntry {
        /// The scanned code.
        code: BandCode,
    },
    /// Record an exit scan for a band code, then refund its deposit.
    /// The refund is an inseparable follow-on step of the exit.
    ScanExit {
        /// The scanned code.
        code: BandCode,
    },
    /// Refund the deposit held for a band.
    /// A no-op if the band is already refunded or has not exited.
    RefundDeposit {
        /// The band's identifier.
        band_id: i64,
    },
    /// Compute a visitor and financial summary over an inclusive date range
    /// and persist it as a report record.
    GenerateReport {
        /// First day of the range, inclusive.
        start_date: Date,
        /// Last day of the range, inclusive.
        end_date: Date,
    },
}
