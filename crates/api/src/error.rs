// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use parkband_core::CoreError;
use parkband_domain::DomainError;
use parkband_persistence::StoreError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The backing store could not load or save the ledger.
    ///
    /// In-memory state prior to the failed write is not corrupted; the
    /// effect is simply not durable until a retry succeeds.
    StoreUnavailable {
        /// A description of the store failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::StoreUnavailable { message } => {
                write!(f, "Store unavailable: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::StoreUnavailable {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidQuantity { quantity } => ApiError::InvalidInput {
            field: String::from("quantity"),
            message: format!("Invalid quantity: {quantity}. Must be at least 1"),
        },
        DomainError::InvalidDateRange { start, end } => ApiError::InvalidInput {
            field: String::from("date_range"),
            message: format!("Invalid date range: start {start} is after end {end}"),
        },
        DomainError::InvalidVisitorType(msg) => ApiError::InvalidInput {
            field: String::from("visitor_type"),
            message: msg,
        },
        DomainError::InvalidTransactionKind(msg) => ApiError::InvalidInput {
            field: String::from("transaction_kind"),
            message: msg,
        },
        DomainError::InvalidLifecycleState(msg) => ApiError::InvalidInput {
            field: String::from("lifecycle_state"),
            message: msg,
        },
        DomainError::InvalidAnalyticsPeriod(msg) => ApiError::InvalidInput {
            field: String::from("period"),
            message: msg,
        },
        DomainError::BandNotFound(code) => ApiError::ResourceNotFound {
            resource_type: String::from("Band"),
            message: format!("No band matches code {code}"),
        },
        DomainError::BandIdNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Band"),
            message: format!("No band matches id {id}"),
        },
        DomainError::BandInactive(code) => ApiError::DomainRuleViolation {
            rule: String::from("band_active"),
            message: format!("Band {code} is inactive"),
        },
        DomainError::BandExpired {
            code,
            issued_on,
            today,
        } => ApiError::DomainRuleViolation {
            rule: String::from("same_day_use"),
            message: format!("Band {code} expired: printed on {issued_on}, today is {today}"),
        },
        DomainError::AlreadyEntered(code) => ApiError::DomainRuleViolation {
            rule: String::from("single_entry"),
            message: format!("Entry already recorded for band {code}"),
        },
        DomainError::NoEntryRecorded(code) => ApiError::DomainRuleViolation {
            rule: String::from("entry_before_exit"),
            message: format!("No entry recorded for band {code}"),
        },
        DomainError::AlreadyExited(code) => ApiError::DomainRuleViolation {
            rule: String::from("single_exit"),
            message: format!("Exit already recorded for band {code}"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::Internal {
            message: format!("Date arithmetic overflow while {operation}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    let CoreError::DomainViolation(domain_err) = err;
    translate_domain_error(domain_err)
}
