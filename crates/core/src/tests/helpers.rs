// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, Ledger, Transition, apply};
use parkband_activity::Actor;
use parkband_domain::{Band, VisitorType};
use rand::SeedableRng;
use rand::rngs::StdRng;
use time::OffsetDateTime;

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("staff-1"), String::from("user"))
}

pub fn create_test_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Issues one adult band with a 50 deposit into an empty ledger.
pub fn issue_test_band(now: OffsetDateTime) -> (Ledger, Band) {
    let transition: Transition = apply(
        &Ledger::new(),
        Command::IssueBands {
            visitor_type: VisitorType::Adult,
            quantity: 1,
            deposit_amount: 50,
            park_label: String::from("MAULI"),
        },
        &create_test_actor(),
        now,
        &mut create_test_rng(),
    )
    .unwrap();

    let band: Band = transition.new_ledger.bands[0].clone();
    (transition.new_ledger, band)
}

/// Records an entry scan for a band, returning the replacement ledger.
pub fn enter_test_band(ledger: &Ledger, band: &Band, now: OffsetDateTime) -> Ledger {
    apply(
        ledger,
        Command::ScanEntry {
            code: band.code().clone(),
        },
        &create_test_actor(),
        now,
        &mut create_test_rng(),
    )
    .unwrap()
    .new_ledger
}

/// Records an exit scan for a band, returning the replacement ledger.
/// The exit auto-processes the refund.
pub fn exit_test_band(ledger: &Ledger, band: &Band, now: OffsetDateTime) -> Ledger {
    apply(
        ledger,
        Command::ScanExit {
            code: band.code().clone(),
        },
        &create_test_actor(),
        now,
        &mut create_test_rng(),
    )
    .unwrap()
    .new_ledger
}
