// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;
use time::macros::date;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidQuantity { quantity: 0 };
    assert_eq!(format!("{err}"), "Invalid quantity: 0. Must be at least 1");

    let err: DomainError = DomainError::InvalidDateRange {
        start: date!(2026 - 08 - 25),
        end: date!(2026 - 08 - 24),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid date range: start 2026-08-25 is after end 2026-08-24"
    );

    let err: DomainError = DomainError::InvalidVisitorType(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid visitor type: test");

    let err: DomainError = DomainError::InvalidTransactionKind(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid transaction kind: test");

    let err: DomainError = DomainError::InvalidLifecycleState(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid lifecycle state: test");

    let err: DomainError = DomainError::InvalidAnalyticsPeriod(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid analytics period: test");

    let err: DomainError = DomainError::BandNotFound(String::from("A26082510307341"));
    assert_eq!(format!("{err}"), "Band not found: A26082510307341");

    let err: DomainError = DomainError::BandIdNotFound(42);
    assert_eq!(format!("{err}"), "Band not found for id: 42");

    let err: DomainError = DomainError::BandInactive(String::from("A26082510307341"));
    assert_eq!(format!("{err}"), "Band A26082510307341 is inactive");

    let err: DomainError = DomainError::BandExpired {
        code: String::from("A26082410307341"),
        issued_on: date!(2026 - 08 - 24),
        today: date!(2026 - 08 - 25),
    };
    assert_eq!(
        format!("{err}"),
        "Band A26082410307341 expired: printed on 2026-08-24, today is 2026-08-25"
    );

    let err: DomainError = DomainError::AlreadyEntered(String::from("A26082510307341"));
    assert_eq!(
        format!("{err}"),
        "Entry already recorded for band A26082510307341"
    );

    let err: DomainError = DomainError::NoEntryRecorded(String::from("A26082510307341"));
    assert_eq!(
        format!("{err}"),
        "No entry recorded for band A26082510307341"
    );

    let err: DomainError = DomainError::AlreadyExited(String::from("A26082510307341"));
    assert_eq!(
        format!("{err}"),
        "Exit already recorded for band A26082510307341"
    );

    let err: DomainError = DomainError::DateArithmeticOverflow {
        operation: String::from("testing"),
    };
    assert_eq!(format!("{err}"), "Date arithmetic overflow while testing");
}
