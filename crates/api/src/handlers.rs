// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The park operation surface: state-changing handlers and read-only views.

use parkband_activity::Actor;
use parkband_core::{Clock, Command, Ledger, Outcome, Transition, apply};
use parkband_domain::{
    AnalyticsPeriod, BandCode, RangeSummary, TransactionKind, VisitorType, bucket_activity,
    summarize_range, validate_date_range, visitor_trend,
};
use parkband_persistence::LedgerStore;
use rand::make_rng;
use rand::rngs::StdRng;
use time::{Date, OffsetDateTime};
use tracing::{debug, info, warn};

use crate::auth::AuthenticatedActor;
use crate::config::ParkConfig;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    ActivityBucketInfo, ActivityEntryInfo, ActivityQueryRequest, ActivityQueryResponse,
    AnalyticsRequest, AnalyticsResponse, BandInfo, DashboardStatsResponse, GenerateReportRequest,
    GenerateReportResponse, IssueBandsRequest, IssueBandsResponse, RefundDepositRequest,
    RefundDepositResponse, ReportInfo, ScanEntryRequest, ScanEntryResponse, ScanExitRequest,
    ScanExitResponse, ScannerStatsResponse, SixMonthSummaryResponse, TransactionInfo,
    TransactionQueryRequest, TransactionQueryResponse, TrendPointInfo,
};

/// Parses an ISO-8601 date string from a request field.
fn parse_date(value: &str, field: &str) -> Result<Date, ApiError> {
    Date::parse(value, &time::format_description::well_known::Iso8601::DEFAULT)
        .map_err(|_| ApiError::InvalidInput {
            field: String::from(field),
            message: format!("Invalid date format: {value}"),
        })
}

/// The operation surface over one park's ledger.
///
/// A `Park` owns the in-memory ledger, the backing store, the injected
/// clock, and the randomness used for band code suffixes. Mutations follow
/// a fixed commit order: apply the command to the current ledger, save the
/// replacement ledger, then swap it in. A failed save leaves the in-memory
/// ledger untouched.
#[derive(Debug)]
pub struct Park<S, C> {
    config: ParkConfig,
    store: S,
    clock: C,
    rng: StdRng,
    ledger: Ledger,
}

impl<S: LedgerStore, C: Clock> Park<S, C> {
    /// Opens a park over a store, loading the persisted ledger.
    ///
    /// # Arguments
    ///
    /// * `config` - Park-level settings
    /// * `store` - The backing ledger store
    /// * `clock` - The source of the current instant
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot load the ledger.
    pub fn open(config: ParkConfig, store: S, clock: C) -> Result<Self, ApiError> {
        Self::open_with_rng(config, store, clock, make_rng::<StdRng>())
    }

    /// Opens a park with caller-provided randomness for band code suffixes.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot load the ledger.
    pub fn open_with_rng(
        config: ParkConfig,
        store: S,
        clock: C,
        rng: StdRng,
    ) -> Result<Self, ApiError> {
        let ledger: Ledger = store.load()?;
        debug!("Opened park ledger with {} band(s)", ledger.bands.len());
        Ok(Self {
            config,
            store,
            clock,
            rng,
            ledger,
        })
    }

    /// Returns the current in-memory ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the park configuration.
    #[must_use]
    pub const fn config(&self) -> &ParkConfig {
        &self.config
    }

    /// Applies a command, persists the replacement ledger, then swaps it in.
    ///
    /// The save happens before the swap so a store failure leaves the
    /// in-memory ledger on the last persisted state.
    fn commit(
        &mut self,
        command: Command,
        identity: Option<&AuthenticatedActor>,
    ) -> Result<Outcome, ApiError> {
        let actor: Actor =
            identity.map_or_else(Actor::system, AuthenticatedActor::to_activity_actor);
        debug!("Applying command as actor: {}", actor.id);

        let now: OffsetDateTime = self.clock.now();
        let transition: Transition = apply(&self.ledger, command, &actor, now, &mut self.rng)
            .map_err(translate_core_error)?;

        self.store.save(&transition.new_ledger)?;
        self.ledger = transition.new_ledger;
        Ok(transition.outcome)
    }

    /// Issues a batch of bands, taking one deposit per band.
    ///
    /// This operation:
    /// - Validates the quantity and visitor type
    /// - Falls back to the configured per-type deposit when the request
    ///   does not name one
    /// - Appends one deposit transaction and one log entry per band
    ///
    /// # Arguments
    ///
    /// * `identity` - The authenticated identity, or `None` to attribute
    ///   the action to the system
    /// * `request` - The issue request
    ///
    /// # Returns
    ///
    /// The printed bands and the label to render on them.
    ///
    /// # Errors
    ///
    /// Returns an error if the quantity is zero, the visitor type is not
    /// recognized, or the store cannot save the ledger.
    pub fn issue_bands(
        &mut self,
        identity: Option<&AuthenticatedActor>,
        request: IssueBandsRequest,
    ) -> Result<IssueBandsResponse, ApiError> {
        let IssueBandsRequest {
            visitor_type,
            quantity,
            deposit_amount,
        } = request;

        let visitor_type: VisitorType =
            VisitorType::parse(&visitor_type).map_err(translate_domain_error)?;
        let deposit_amount: u32 =
            deposit_amount.unwrap_or_else(|| self.config.deposit_for(visitor_type));

        let command: Command = Command::IssueBands {
            visitor_type,
            quantity,
            deposit_amount,
            park_label: self.config.park_label.clone(),
        };

        let outcome: Outcome = self.commit(command, identity)?;
        let Outcome::BandsIssued { bands, park_label } = outcome else {
            return Err(ApiError::Internal {
                message: String::from("Issue command produced an unexpected outcome"),
            });
        };

        info!("Issued {} {} band(s)", bands.len(), visitor_type);
        Ok(IssueBandsResponse {
            bands: bands.iter().map(BandInfo::from).collect(),
            park_label,
            message: format!(
                "Successfully issued {quantity} {visitor_type} band(s) with deposit of ${deposit_amount} each"
            ),
        })
    }

    /// Records an entry scan for a band code.
    ///
    /// # Errors
    ///
    /// Returns an error if the code resolves to no band, the band is
    /// inactive, the band was printed on a different day, an entry is
    /// already recorded, or the store cannot save the ledger.
    pub fn scan_entry(
        &mut self,
        identity: Option<&AuthenticatedActor>,
        request: ScanEntryRequest,
    ) -> Result<ScanEntryResponse, ApiError> {
        let ScanEntryRequest { code } = request;
        let code: BandCode = BandCode::from_scan(&code);

        let outcome: Outcome = self.commit(Command::ScanEntry { code }, identity)?;
        let Outcome::EntryRecorded { band } = outcome else {
            return Err(ApiError::Internal {
                message: String::from("Entry scan produced an unexpected outcome"),
            });
        };

        info!("Entry recorded for band: {}", band.code().value());
        let message: String = format!("Entry recorded for band {}", band.code().value());
        Ok(ScanEntryResponse {
            band: BandInfo::from(&band),
            message,
        })
    }

    /// Records an exit scan for a band code, then refunds its deposit.
    ///
    /// The refund is an inseparable follow-on step: the exit mark, the
    /// refund transaction, and both log entries land in one transition.
    ///
    /// # Errors
    ///
    /// Returns an error if the code resolves to no band, the band is
    /// inactive or from another day, no entry is recorded, an exit is
    /// already recorded, or the store cannot save the ledger.
    pub fn scan_exit(
        &mut self,
        identity: Option<&AuthenticatedActor>,
        request: ScanExitRequest,
    ) -> Result<ScanExitResponse, ApiError> {
        let ScanExitRequest { code } = request;
        let code: BandCode = BandCode::from_scan(&code);

        let outcome: Outcome = self.commit(Command::ScanExit { code }, identity)?;
        let Outcome::ExitRecorded { band } = outcome else {
            return Err(ApiError::Internal {
                message: String::from("Exit scan produced an unexpected outcome"),
            });
        };

        info!(
            "Exit recorded and deposit refunded for band: {}",
            band.code().value()
        );
        let message: String = format!(
            "Exit recorded for band {}; deposit of ${} refunded",
            band.code().value(),
            band.deposit_amount()
        );
        Ok(ScanExitResponse {
            band: BandInfo::from(&band),
            message,
        })
    }

    /// Refunds the deposit held for a band.
    ///
    /// A band that is not exited-and-unrefunded completes as a no-op with
    /// `refunded: false` rather than an error, so a double-tap on the
    /// refund control cannot move money twice.
    ///
    /// # Errors
    ///
    /// Returns an error if no band has the given id or the store cannot
    /// save the ledger.
    pub fn refund_deposit(
        &mut self,
        identity: Option<&AuthenticatedActor>,
        request: RefundDepositRequest,
    ) -> Result<RefundDepositResponse, ApiError> {
        let RefundDepositRequest { band_id } = request;

        let outcome: Outcome = self.commit(Command::RefundDeposit { band_id }, identity)?;
        match outcome {
            Outcome::DepositRefunded { band } => {
                info!("Deposit refunded for band: {}", band.code().value());
                let message: String = format!(
                    "Deposit of ${} refunded for band {}",
                    band.deposit_amount(),
                    band.code().value()
                );
                Ok(RefundDepositResponse {
                    band: BandInfo::from(&band),
                    refunded: true,
                    message,
                })
            }
            Outcome::RefundSkipped { band } => {
                warn!("Refund skipped for band: {}", band.code().value());
                let message: String = format!("No refund due for band {}", band.code().value());
                Ok(RefundDepositResponse {
                    band: BandInfo::from(&band),
                    refunded: false,
                    message,
                })
            }
            _ => Err(ApiError::Internal {
                message: String::from("Refund command produced an unexpected outcome"),
            }),
        }
    }

    /// Computes a visitor and financial summary over an inclusive date
    /// range and persists it as a report record.
    ///
    /// # Errors
    ///
    /// Returns an error if a date string is malformed, the range runs
    /// backwards, or the store cannot save the ledger.
    pub fn generate_report(
        &mut self,
        identity: Option<&AuthenticatedActor>,
        request: GenerateReportRequest,
    ) -> Result<GenerateReportResponse, ApiError> {
        let GenerateReportRequest {
            start_date,
            end_date,
        } = request;
        let start_date: Date = parse_date(&start_date, "start_date")?;
        let end_date: Date = parse_date(&end_date, "end_date")?;

        let command: Command = Command::GenerateReport {
            start_date,
            end_date,
        };
        let outcome: Outcome = self.commit(command, identity)?;
        let Outcome::ReportGenerated { report } = outcome else {
            return Err(ApiError::Internal {
                message: String::from("Report command produced an unexpected outcome"),
            });
        };

        info!(
            "Report {} generated for {} to {}",
            report.id(),
            start_date,
            end_date
        );
        Ok(GenerateReportResponse {
            report: ReportInfo::from(&report),
            message: format!("Report generated for period {start_date} to {end_date}"),
        })
    }

    /// Bands printed by one staff member, in issue order.
    #[must_use]
    pub fn bands_for_staff(&self, staff_id: &str) -> Vec<BandInfo> {
        self.ledger
            .bands
            .iter()
            .filter(|band| band.printed_by() == staff_id)
            .map(BandInfo::from)
            .collect()
    }

    /// Bands still holding a deposit, in issue order.
    #[must_use]
    pub fn active_bands(&self) -> Vec<BandInfo> {
        self.ledger
            .bands
            .iter()
            .filter(|band| band.is_active())
            .map(BandInfo::from)
            .collect()
    }

    /// Transactions within an inclusive date range, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if a date string is malformed, the range runs
    /// backwards, or the kind filter is not recognized.
    pub fn query_transactions(
        &self,
        request: TransactionQueryRequest,
    ) -> Result<TransactionQueryResponse, ApiError> {
        let TransactionQueryRequest {
            start_date,
            end_date,
            kind,
        } = request;
        let start_date: Date = parse_date(&start_date, "start_date")?;
        let end_date: Date = parse_date(&end_date, "end_date")?;
        validate_date_range(start_date, end_date).map_err(translate_domain_error)?;
        let kind: Option<TransactionKind> = kind
            .map(|raw| TransactionKind::parse(&raw).map_err(translate_domain_error))
            .transpose()?;

        let transactions: Vec<TransactionInfo> = self
            .ledger
            .transactions
            .iter()
            .rev()
            .filter(|transaction| {
                (start_date..=end_date).contains(&transaction.timestamp().date())
            })
            .filter(|transaction| kind.is_none_or(|k| transaction.kind() == k))
            .map(TransactionInfo::from)
            .collect();

        Ok(TransactionQueryResponse { transactions })
    }

    /// Activity log entries within an inclusive date range, newest first,
    /// optionally narrowed by a case-insensitive text search.
    ///
    /// # Errors
    ///
    /// Returns an error if a date string is malformed or the range runs
    /// backwards.
    pub fn query_activity(
        &self,
        request: ActivityQueryRequest,
    ) -> Result<ActivityQueryResponse, ApiError> {
        let ActivityQueryRequest {
            start_date,
            end_date,
            search,
        } = request;
        let start_date: Date = parse_date(&start_date, "start_date")?;
        let end_date: Date = parse_date(&end_date, "end_date")?;
        validate_date_range(start_date, end_date).map_err(translate_domain_error)?;

        let entries: Vec<ActivityEntryInfo> = self
            .ledger
            .activity_logs
            .iter()
            .rev()
            .filter(|entry| (start_date..=end_date).contains(&entry.timestamp().date()))
            .filter(|entry| {
                search
                    .as_ref()
                    .is_none_or(|needle| entry.matches_search(needle))
            })
            .map(ActivityEntryInfo::from)
            .collect();

        Ok(ActivityQueryResponse { entries })
    }

    /// Same-day counters for the scanner screen.
    #[must_use]
    pub fn scanner_stats(&self) -> ScannerStatsResponse {
        let today: Date = self.clock.now().date();

        let mut entries_today: usize = 0;
        let mut exits_today: usize = 0;
        let mut inside_now: usize = 0;
        let mut refunds_today: usize = 0;
        for band in &self.ledger.bands {
            if band.entry_time().is_some_and(|at| at.date() == today) {
                entries_today += 1;
            }
            if band.exit_time().is_some_and(|at| at.date() == today) {
                exits_today += 1;
                if band.is_refunded() {
                    refunds_today += 1;
                }
            }
            if band.is_active() && band.entry_time().is_some() && band.exit_time().is_none() {
                inside_now += 1;
            }
        }

        ScannerStatsResponse {
            date: today,
            entries_today,
            exits_today,
            inside_now,
            refunds_today,
        }
    }

    /// Aggregated counters for the dashboard screen, plus the most recent
    /// activity and the seven-day visitor trend.
    ///
    /// # Arguments
    ///
    /// * `staff_id` - The viewing staff member, for their printed-band
    ///   count
    ///
    /// # Errors
    ///
    /// Returns an error if the seven-day trend lookback leaves the
    /// representable date range.
    pub fn dashboard_stats(&self, staff_id: &str) -> Result<DashboardStatsResponse, ApiError> {
        let today: Date = self.clock.now().date();

        let mut total_deposits: u64 = 0;
        let mut total_refunds: u64 = 0;
        for transaction in &self.ledger.transactions {
            match transaction.kind() {
                TransactionKind::Deposit => total_deposits += u64::from(transaction.amount()),
                TransactionKind::Refund => total_refunds += u64::from(transaction.amount()),
            }
        }

        let today_summary: RangeSummary = summarize_range(&self.ledger.bands, &[], today, today)
            .map_err(translate_domain_error)?;
        let trend = visitor_trend(&self.ledger.bands, today).map_err(translate_domain_error)?;

        Ok(DashboardStatsResponse {
            date: today,
            active_bands: self
                .ledger
                .bands
                .iter()
                .filter(|band| band.is_active())
                .count(),
            visitors_today: today_summary.total_visitors,
            adults_today: today_summary.total_adults,
            children_today: today_summary.total_children,
            total_deposits,
            total_refunds,
            balance: total_deposits.saturating_sub(total_refunds),
            staff_printed: self
                .ledger
                .bands
                .iter()
                .filter(|band| band.printed_by() == staff_id)
                .count(),
            recent_activity: self
                .ledger
                .activity_logs
                .iter()
                .rev()
                .take(5)
                .map(ActivityEntryInfo::from)
                .collect(),
            visitor_trend: trend.iter().map(TrendPointInfo::from).collect(),
        })
    }

    /// Chart buckets for an analytics period, windows pinned to today.
    ///
    /// # Errors
    ///
    /// Returns an error if the period string is not recognized or window
    /// arithmetic leaves the representable date range.
    pub fn analytics(&self, request: AnalyticsRequest) -> Result<AnalyticsResponse, ApiError> {
        let AnalyticsRequest { period } = request;
        let period: AnalyticsPeriod =
            AnalyticsPeriod::parse(&period).map_err(translate_domain_error)?;
        let today: Date = self.clock.now().date();

        let buckets = bucket_activity(&self.ledger.bands, &self.ledger.transactions, period, today)
            .map_err(translate_domain_error)?;
        debug!("Computed {} {} bucket(s)", buckets.len(), period);

        Ok(AnalyticsResponse {
            period: period.as_str().to_string(),
            buckets: buckets.iter().map(ActivityBucketInfo::from).collect(),
        })
    }

    /// Visitor and money totals over the last six calendar months.
    ///
    /// # Errors
    ///
    /// Returns an error if the six-month lookback leaves the representable
    /// date range.
    pub fn six_month_summary(&self) -> Result<SixMonthSummaryResponse, ApiError> {
        let today: Date = self.clock.now().date();
        let summary: RangeSummary = parkband_domain::six_month_summary(
            &self.ledger.bands,
            &self.ledger.transactions,
            today,
        )
        .map_err(translate_domain_error)?;

        Ok(SixMonthSummaryResponse {
            total_visitors: summary.total_visitors,
            total_adults: summary.total_adults,
            total_children: summary.total_children,
            total_deposits: summary.total_deposits,
            total_refunds: summary.total_refunds,
            balance: summary.balance(),
        })
    }
}
