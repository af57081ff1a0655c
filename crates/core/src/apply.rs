// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::ledger::{Ledger, Outcome, Transition};
use parkband_activity::{ActivityEntry, ActivityKind, Actor};
use parkband_domain::{
    Band, BandCode, DomainError, RangeSummary, Report, Transaction, TransactionKind,
    summarize_range, validate_quantity,
};
use rand::{Rng, RngExt};
use time::OffsetDateTime;

/// Resolves a scanned code to a band position, enforcing the shared scan
/// preconditions in order: not found, then inactive, then expired.
fn find_scannable(
    ledger: &Ledger,
    code: &BandCode,
    now: OffsetDateTime,
) -> Result<usize, CoreError> {
    let Some(position) = ledger.bands.iter().position(|band| band.code() == code) else {
        return Err(CoreError::DomainViolation(DomainError::BandNotFound(
            code.value().to_string(),
        )));
    };

    let band: &Band = &ledger.bands[position];
    if !band.is_active() {
        return Err(CoreError::DomainViolation(DomainError::BandInactive(
            code.value().to_string(),
        )));
    }

    let today: time::Date = now.date();
    if !band.is_printed_on(today) {
        return Err(CoreError::DomainViolation(DomainError::BandExpired {
            code: code.value().to_string(),
            issued_on: band.printed_at().date(),
            today,
        }));
    }

    Ok(position)
}

/// Marks a band refunded and appends the refund transaction and log entry.
///
/// Callers must have verified the band has an exit time and is not yet
/// refunded.
fn settle_refund(ledger: &mut Ledger, position: usize, actor: &Actor, now: OffsetDateTime) {
    ledger.bands[position].mark_refunded();

    let band: &Band = &ledger.bands[position];
    let band_id: i64 = band.id();
    let amount: u32 = band.deposit_amount();
    let code: String = band.code().value().to_string();

    let transaction_id: i64 = ledger.next_transaction_id();
    ledger.transactions.push(Transaction::new(
        transaction_id,
        band_id,
        TransactionKind::Refund,
        amount,
        now,
        actor.id.clone(),
    ));

    let log_id: i64 = ledger.next_activity_id();
    ledger.activity_logs.push(ActivityEntry::record(
        log_id,
        actor,
        ActivityKind::DepositRefunded,
        format!("Deposit of ${amount} refunded for band {code}"),
        now,
    ));
}

/// Applies a command to the current ledger, producing a replacement ledger
/// and an outcome describing what happened.
///
/// The function is pure: the clock and the code randomness are injected, no
/// I/O happens here, and the input ledger is never mutated. A failed
/// precondition leaves everything untouched; a successful application
/// carries the band mutation, transaction appends, and activity log appends
/// together in the returned ledger.
///
/// # Arguments
///
/// * `ledger` - The current ledger (immutable)
/// * `command` - The command to apply
/// * `actor` - The identity performing this action, for attribution
/// * `now` - The current instant from the injected clock
/// * `rng` - Randomness source for band code suffixes
///
/// # Returns
///
/// * `Ok(Transition)` containing the replacement ledger and the outcome
/// * `Err(CoreError)` if a validation or lifecycle precondition fails
///
/// # Errors
///
/// Returns an error if:
/// - The command's arguments violate domain rules
/// - A scanned band is missing, inactive, expired, or in the wrong
///   lifecycle state for the scan
/// - A report range runs backwards
#[allow(clippy::too_many_lines)]
pub fn apply<R: Rng>(
    ledger: &Ledger,
    command: Command,
    actor: &Actor,
    now: OffsetDateTime,
    rng: &mut R,
) -> Result<Transition, CoreError> {
    match command {
        Command::IssueBands {
            visitor_type,
            quantity,
            deposit_amount,
            park_label,
        } => {
            validate_quantity(quantity)?;

            let mut new_ledger: Ledger = ledger.clone();
            let base_band_id: i64 = new_ledger.next_band_id();
            let mut printed: Vec<Band> = Vec::new();

            for offset in 0..quantity {
                let band_id: i64 = base_band_id + i64::from(offset);
                let suffix: u16 = rng.random_range(0..10_000);
                let code: BandCode = BandCode::generate(visitor_type, now, suffix);
                let band: Band = Band::new(
                    band_id,
                    code.clone(),
                    visitor_type,
                    deposit_amount,
                    actor.id.clone(),
                    now,
                );
                new_ledger.bands.push(band.clone());

                let transaction_id: i64 = new_ledger.next_transaction_id();
                new_ledger.transactions.push(Transaction::new(
                    transaction_id,
                    band_id,
                    TransactionKind::Deposit,
                    deposit_amount,
                    now,
                    actor.id.clone(),
                ));

                let log_id: i64 = new_ledger.next_activity_id();
                new_ledger.activity_logs.push(ActivityEntry::record(
                    log_id,
                    actor,
                    ActivityKind::BandPrinted,
                    format!(
                        "Band {code} printed for {visitor_type} with deposit of ${deposit_amount}"
                    ),
                    now,
                ));

                printed.push(band);
            }

            Ok(Transition {
                new_ledger,
                outcome: Outcome::BandsIssued {
                    bands: printed,
                    park_label,
                },
            })
        }
        Command::ScanEntry { code } => {
            let position: usize = find_scannable(ledger, &code, now)?;

            let band: &Band = &ledger.bands[position];
            if band.entry_time().is_some() {
                return Err(CoreError::DomainViolation(DomainError::AlreadyEntered(
                    code.value().to_string(),
                )));
            }

            let mut new_ledger: Ledger = ledger.clone();
            new_ledger.bands[position].record_entry(now);

            let log_id: i64 = new_ledger.next_activity_id();
            new_ledger.activity_logs.push(ActivityEntry::record(
                log_id,
                actor,
                ActivityKind::VisitorEntry,
                format!("Band {code} scanned for entry"),
                now,
            ));

            let band: Band = new_ledger.bands[position].clone();
            Ok(Transition {
                new_ledger,
                outcome: Outcome::EntryRecorded { band },
            })
        }
        Command::ScanExit { code } => {
            let position: usize = find_scannable(ledger, &code, now)?;

            let band: &Band = &ledger.bands[position];
            if band.entry_time().is_none() {
                return Err(CoreError::DomainViolation(DomainError::NoEntryRecorded(
                    code.value().to_string(),
                )));
            }
            if band.exit_time().is_some() {
                return Err(CoreError::DomainViolation(DomainError::AlreadyExited(
                    code.value().to_string(),
                )));
            }

            let mut new_ledger: Ledger = ledger.clone();
            new_ledger.bands[position].record_exit(now);

            let log_id: i64 = new_ledger.next_activity_id();
            new_ledger.activity_logs.push(ActivityEntry::record(
                log_id,
                actor,
                ActivityKind::VisitorExit,
                format!("Band {code} scanned for exit"),
                now,
            ));

            // The refund is an inseparable follow-on step of the exit scan.
            settle_refund(&mut new_ledger, position, actor, now);

            let band: Band = new_ledger.bands[position].clone();
            Ok(Transition {
                new_ledger,
                outcome: Outcome::ExitRecorded { band },
            })
        }
        Command::RefundDeposit { band_id } => {
            let Some(position) = ledger.bands.iter().position(|band| band.id() == band_id) else {
                return Err(CoreError::DomainViolation(DomainError::BandIdNotFound(
                    band_id,
                )));
            };

            let band: &Band = &ledger.bands[position];
            if band.is_refunded() || band.exit_time().is_none() {
                // A refund runs once, and only after exit.
                return Ok(Transition {
                    new_ledger: ledger.clone(),
                    outcome: Outcome::RefundSkipped { band: band.clone() },
                });
            }

            let mut new_ledger: Ledger = ledger.clone();
            settle_refund(&mut new_ledger, position, actor, now);

            let band: Band = new_ledger.bands[position].clone();
            Ok(Transition {
                new_ledger,
                outcome: Outcome::DepositRefunded { band },
            })
        }
        Command::GenerateReport {
            start_date,
            end_date,
        } => {
            let summary: RangeSummary =
                summarize_range(&ledger.bands, &ledger.transactions, start_date, end_date)?;

            let mut new_ledger: Ledger = ledger.clone();
            let report_id: i64 = new_ledger.next_report_id();
            let report: Report = Report::new(
                report_id,
                start_date,
                end_date,
                summary.total_visitors,
                summary.total_adults,
                summary.total_children,
                summary.total_deposits,
                summary.total_refunds,
                actor.id.clone(),
                now,
            );
            new_ledger.reports.push(report.clone());

            let log_id: i64 = new_ledger.next_activity_id();
            new_ledger.activity_logs.push(ActivityEntry::record(
                log_id,
                actor,
                ActivityKind::ReportGenerated,
                format!("Report generated for period {start_date} to {end_date}"),
                now,
            ));

            Ok(Transition {
                new_ledger,
                outcome: Outcome::ReportGenerated { report },
            })
        }
    }
}
