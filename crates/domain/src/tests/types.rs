// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Band, BandCode, BandLifecycle, DomainError, Transaction, TransactionKind, VisitorType,
};
use time::macros::{date, datetime};

fn create_test_band(id: i64, visitor_type: VisitorType) -> Band {
    let printed_at = datetime!(2026-08-25 10:30 UTC);
    Band::new(
        id,
        BandCode::generate(visitor_type, printed_at, 7341),
        visitor_type,
        50,
        String::from("staff-1"),
        printed_at,
    )
}

#[test]
fn test_visitor_type_parse() {
    assert_eq!(VisitorType::parse("A").unwrap(), VisitorType::Adult);
    assert_eq!(VisitorType::parse("Adult").unwrap(), VisitorType::Adult);
    assert_eq!(VisitorType::parse("C").unwrap(), VisitorType::Child);
    assert_eq!(VisitorType::parse("Child").unwrap(), VisitorType::Child);
}

#[test]
fn test_visitor_type_parse_rejects_invalid() {
    let result: Result<VisitorType, DomainError> = VisitorType::parse("Senior");
    assert!(matches!(result, Err(DomainError::InvalidVisitorType(_))));
}

#[test]
fn test_visitor_type_as_str_and_letter() {
    assert_eq!(VisitorType::Adult.as_str(), "Adult");
    assert_eq!(VisitorType::Child.as_str(), "Child");
    assert_eq!(VisitorType::Adult.letter(), 'A');
    assert_eq!(VisitorType::Child.letter(), 'C');
}

#[test]
fn test_band_lifecycle_round_trip() {
    for state in [
        BandLifecycle::Issued,
        BandLifecycle::Entered,
        BandLifecycle::Exited,
        BandLifecycle::Refunded,
    ] {
        let parsed: BandLifecycle = state.as_str().parse().unwrap();
        assert_eq!(parsed, state);
    }
}

#[test]
fn test_band_lifecycle_rejects_invalid_state() {
    let result: Result<BandLifecycle, DomainError> = "Cancelled".parse();
    assert!(matches!(result, Err(DomainError::InvalidLifecycleState(_))));
}

#[test]
fn test_band_lifecycle_transitions_are_linear() {
    // Valid transitions
    assert!(BandLifecycle::Issued.can_transition_to(BandLifecycle::Entered));
    assert!(BandLifecycle::Entered.can_transition_to(BandLifecycle::Exited));
    assert!(BandLifecycle::Exited.can_transition_to(BandLifecycle::Refunded));

    // No stage may be skipped
    assert!(!BandLifecycle::Issued.can_transition_to(BandLifecycle::Exited));
    assert!(!BandLifecycle::Issued.can_transition_to(BandLifecycle::Refunded));
    assert!(!BandLifecycle::Entered.can_transition_to(BandLifecycle::Refunded));

    // No going back
    assert!(!BandLifecycle::Entered.can_transition_to(BandLifecycle::Issued));
    assert!(!BandLifecycle::Refunded.can_transition_to(BandLifecycle::Exited));

    // Refunded is terminal
    assert!(!BandLifecycle::Refunded.can_transition_to(BandLifecycle::Issued));
    assert!(!BandLifecycle::Refunded.can_transition_to(BandLifecycle::Entered));
    assert!(BandLifecycle::Refunded.is_terminal());
    assert!(!BandLifecycle::Issued.is_terminal());
}

#[test]
fn test_band_code_format() {
    let at = datetime!(2026-08-25 10:30 UTC);

    let adult: BandCode = BandCode::generate(VisitorType::Adult, at, 7341);
    assert_eq!(adult.value(), "A26082510307341");

    let child: BandCode = BandCode::generate(VisitorType::Child, at, 7341);
    assert_eq!(child.value(), "C26082510307341");
}

#[test]
fn test_band_code_zero_pads_components() {
    let at = datetime!(2026-01-05 09:05 UTC);

    let code: BandCode = BandCode::generate(VisitorType::Adult, at, 7);
    assert_eq!(code.value(), "A26010509050007");
}

#[test]
fn test_band_code_reduces_suffix_modulo_ten_thousand() {
    let at = datetime!(2026-08-25 10:30 UTC);

    let code: BandCode = BandCode::generate(VisitorType::Adult, at, 12_345);
    assert_eq!(code.value(), "A26082510302345");
}

#[test]
fn test_band_code_from_scan_trims_whitespace() {
    let code: BandCode = BandCode::from_scan("  A26082510307341\n");
    assert_eq!(code.value(), "A26082510307341");
}

#[test]
fn test_band_starts_issued_and_active() {
    let band: Band = create_test_band(1, VisitorType::Adult);

    assert_eq!(band.id(), 1);
    assert_eq!(band.visitor_type(), VisitorType::Adult);
    assert_eq!(band.deposit_amount(), 50);
    assert_eq!(band.printed_by(), "staff-1");
    assert!(band.entry_time().is_none());
    assert!(band.exit_time().is_none());
    assert!(band.is_active());
    assert!(!band.is_refunded());
    assert_eq!(band.lifecycle(), BandLifecycle::Issued);
}

#[test]
fn test_band_lifecycle_follows_recorded_state() {
    let mut band: Band = create_test_band(1, VisitorType::Adult);

    band.record_entry(datetime!(2026-08-25 11:00 UTC));
    assert_eq!(band.lifecycle(), BandLifecycle::Entered);
    assert_eq!(band.entry_time(), Some(datetime!(2026-08-25 11:00 UTC)));

    band.record_exit(datetime!(2026-08-25 15:00 UTC));
    assert_eq!(band.lifecycle(), BandLifecycle::Exited);
    assert_eq!(band.exit_time(), Some(datetime!(2026-08-25 15:00 UTC)));
    assert!(band.is_active());

    band.mark_refunded();
    assert_eq!(band.lifecycle(), BandLifecycle::Refunded);
    assert!(!band.is_active());
    assert!(band.is_refunded());
}

#[test]
fn test_band_is_printed_on() {
    let band: Band = create_test_band(1, VisitorType::Adult);

    assert!(band.is_printed_on(date!(2026 - 08 - 25)));
    assert!(!band.is_printed_on(date!(2026 - 08 - 24)));
    assert!(!band.is_printed_on(date!(2026 - 08 - 26)));
}

#[test]
fn test_transaction_kind_parse() {
    assert_eq!(
        TransactionKind::parse("deposit").unwrap(),
        TransactionKind::Deposit
    );
    assert_eq!(
        TransactionKind::parse("refund").unwrap(),
        TransactionKind::Refund
    );

    let result: Result<TransactionKind, DomainError> = TransactionKind::parse("transfer");
    assert!(matches!(result, Err(DomainError::InvalidTransactionKind(_))));
}

#[test]
fn test_transaction_kind_as_str() {
    assert_eq!(TransactionKind::Deposit.as_str(), "deposit");
    assert_eq!(TransactionKind::Refund.as_str(), "refund");
}

#[test]
fn test_band_serializes_with_camel_case_keys() {
    let band: Band = create_test_band(1, VisitorType::Adult);

    let json: String = serde_json::to_string(&band).unwrap();

    assert!(json.contains("\"visitorType\":\"A\""));
    assert!(json.contains("\"depositAmount\":50"));
    assert!(json.contains("\"printedBy\":\"staff-1\""));
    assert!(json.contains("\"isActive\":true"));
    assert!(json.contains("\"isRefunded\":false"));
    // Unset scan times are omitted entirely
    assert!(!json.contains("entryTime"));
    assert!(!json.contains("exitTime"));
}

#[test]
fn test_band_serde_round_trip() {
    let mut band: Band = create_test_band(3, VisitorType::Child);
    band.record_entry(datetime!(2026-08-25 11:00 UTC));

    let json: String = serde_json::to_string(&band).unwrap();
    let restored: Band = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, band);
}

#[test]
fn test_transaction_serializes_kind_as_type_key() {
    let transaction: Transaction = Transaction::new(
        1,
        1,
        TransactionKind::Deposit,
        50,
        datetime!(2026-08-25 10:30 UTC),
        String::from("staff-1"),
    );

    let json: String = serde_json::to_string(&transaction).unwrap();

    assert!(json.contains("\"type\":\"deposit\""));
    assert!(json.contains("\"bandId\":1"));
    assert!(json.contains("\"processedBy\":\"staff-1\""));
}
