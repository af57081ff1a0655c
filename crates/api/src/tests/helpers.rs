// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use parkband_activity::Actor;
use parkband_core::{Command, FixedClock, Ledger, apply};
use parkband_domain::{Band, BandCode, Transaction, TransactionKind, VisitorType};
use parkband_persistence::{LedgerStore, MemoryStore, StoreError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use crate::{AuthenticatedActor, IssueBandsRequest, Park, ParkConfig, Role};

/// The pinned instant every test park runs at.
pub const TEST_NOW: OffsetDateTime = datetime!(2026-08-25 10:30 UTC);

/// The afternoon before [`TEST_NOW`], for expiry fixtures.
pub const YESTERDAY: OffsetDateTime = datetime!(2026-08-24 14:00 UTC);

pub fn create_test_staff() -> AuthenticatedActor {
    AuthenticatedActor::new(
        String::from("staff-1"),
        String::from("Sam Keller"),
        Role::Staff,
    )
}

pub fn create_test_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(
        String::from("admin-1"),
        String::from("Ada Moore"),
        Role::Admin,
    )
}

/// Opens a park over the given store, pinned to [`TEST_NOW`] with seeded
/// randomness.
pub fn open_test_park(store: MemoryStore) -> Park<MemoryStore, FixedClock> {
    Park::open_with_rng(
        ParkConfig::default(),
        store,
        FixedClock::new(TEST_NOW),
        StdRng::seed_from_u64(7),
    )
    .expect("test park should open")
}

/// Opens a park over a fresh in-memory store.
pub fn create_test_park() -> Park<MemoryStore, FixedClock> {
    open_test_park(MemoryStore::new())
}

/// Returns a store already holding the given ledger.
pub fn store_with(ledger: &Ledger) -> MemoryStore {
    let mut store: MemoryStore = MemoryStore::new();
    store.save(ledger).expect("seed save should succeed");
    store
}

/// Issues one adult band as the test staff member, returning its code.
pub fn issue_one_adult(park: &mut Park<MemoryStore, FixedClock>) -> String {
    let response = park
        .issue_bands(
            Some(&create_test_staff()),
            IssueBandsRequest {
                visitor_type: String::from("Adult"),
                quantity: 1,
                deposit_amount: None,
            },
        )
        .expect("issue should succeed");
    response.bands[0].code.clone()
}

/// Issues adult bands into an empty ledger at the given instant, via the
/// engine so every collection stays consistent.
pub fn create_issued_ledger(printed_at: OffsetDateTime, quantity: u32) -> Ledger {
    apply(
        &Ledger::new(),
        Command::IssueBands {
            visitor_type: VisitorType::Adult,
            quantity,
            deposit_amount: 50,
            park_label: String::from("MAULI"),
        },
        &Actor::new(String::from("staff-1"), String::from("staff")),
        printed_at,
        &mut StdRng::seed_from_u64(11),
    )
    .expect("seed issue should succeed")
    .new_ledger
}

/// Builds a ledger holding one exited band whose refund never ran, the
/// shape older store documents can carry.
pub fn create_exited_band_ledger(printed_at: OffsetDateTime) -> Ledger {
    let mut band: Band = Band::new(
        1,
        BandCode::generate(VisitorType::Adult, printed_at, 1234),
        VisitorType::Adult,
        50,
        String::from("staff-1"),
        printed_at,
    );
    band.record_entry(printed_at + Duration::hours(1));
    band.record_exit(printed_at + Duration::hours(3));

    let mut ledger: Ledger = Ledger::new();
    ledger.transactions.push(Transaction::new(
        1,
        band.id(),
        TransactionKind::Deposit,
        band.deposit_amount(),
        printed_at,
        String::from("staff-1"),
    ));
    ledger.bands.push(band);
    ledger
}

/// A store whose saves always fail, for commit-order tests.
#[derive(Debug)]
pub struct FailingStore;

impl LedgerStore for FailingStore {
    fn load(&self) -> Result<Ledger, StoreError> {
        Ok(Ledger::new())
    }

    fn save(&mut self, _ledger: &Ledger) -> Result<(), StoreError> {
        Err(StoreError::Io(std::io::Error::other("disk full")))
    }
}
