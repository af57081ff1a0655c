// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use parkband_activity::Actor;
use parkband_core::{Command, Ledger, apply};
use parkband_domain::VisitorType;
use rand::SeedableRng;
use rand::rngs::StdRng;
use time::macros::datetime;

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("staff-1"), String::from("user"))
}

/// Builds a ledger with two issued adult bands, one of which has entered.
///
/// Every collection except `reports` is populated, which makes the result a
/// useful round-trip fixture.
pub fn create_test_ledger() -> Ledger {
    let actor: Actor = create_test_actor();
    let mut rng: StdRng = StdRng::seed_from_u64(7);

    let issued = apply(
        &Ledger::new(),
        Command::IssueBands {
            visitor_type: VisitorType::Adult,
            quantity: 2,
            deposit_amount: 50,
            park_label: String::from("MAULI"),
        },
        &actor,
        datetime!(2026-08-25 10:30 UTC),
        &mut rng,
    )
    .unwrap();

    let code = issued.new_ledger.bands[0].code().clone();
    apply(
        &issued.new_ledger,
        Command::ScanEntry { code },
        &actor,
        datetime!(2026-08-25 11:00 UTC),
        &mut rng,
    )
    .unwrap()
    .new_ledger
}
