// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::Date;

/// Validates an issuance quantity.
///
/// # Arguments
///
/// * `quantity` - The number of bands requested in one issuance
///
/// # Returns
///
/// * `Ok(())` if at least one band is requested
/// * `Err(DomainError)` if the quantity is zero
///
/// # Errors
///
/// Returns an error if `quantity` is zero.
pub const fn validate_quantity(quantity: u32) -> Result<(), DomainError> {
    // Rule: an issuance prints at least one band
    if quantity == 0 {
        return Err(DomainError::InvalidQuantity { quantity });
    }

    Ok(())
}

/// Validates that a date range runs forward.
///
/// Single-day ranges where `start` equals `end` are valid.
///
/// # Arguments
///
/// * `start` - First day of the range, inclusive
/// * `end` - Last day of the range, inclusive
///
/// # Returns
///
/// * `Ok(())` if the range is valid
/// * `Err(DomainError)` if `start` is after `end`
///
/// # Errors
///
/// Returns an error if `start` is after `end`.
pub fn validate_date_range(start: Date, end: Date) -> Result<(), DomainError> {
    if start > end {
        return Err(DomainError::InvalidDateRange { start, end });
    }

    Ok(())
}
