// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Park-level settings consumed by the operation layer.

use parkband_domain::VisitorType;
use serde::{Deserialize, Serialize};

/// Park-level settings: the printed band label and per-type deposit
/// defaults.
///
/// Issue requests may omit a deposit amount, in which case the configured
/// default for the visitor type applies. There is no file or environment
/// loading layer; callers construct the value or take [`Default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkConfig {
    /// Label the printing layer renders on each band.
    pub park_label: String,
    /// Deposit taken per adult band when a request does not name one.
    pub adult_deposit: u32,
    /// Deposit taken per child band when a request does not name one.
    pub child_deposit: u32,
}

impl ParkConfig {
    /// Returns the configured default deposit for a visitor type.
    #[must_use]
    pub const fn deposit_for(&self, visitor_type: VisitorType) -> u32 {
        match visitor_type {
            VisitorType::Adult => self.adult_deposit,
            VisitorType::Child => self.child_deposit,
        }
    }
}

impl Default for ParkConfig {
    fn default() -> Self {
        Self {
            park_label: String::from("MAULI"),
            adult_deposit: 50,
            child_deposit: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config: ParkConfig = ParkConfig::default();

        assert_eq!(config.park_label, "MAULI");
        assert_eq!(config.adult_deposit, 50);
        assert_eq!(config.child_deposit, 30);
    }

    #[test]
    fn test_deposit_for_selects_by_visitor_type() {
        let config: ParkConfig = ParkConfig {
            park_label: String::from("LAGOON"),
            adult_deposit: 80,
            child_deposit: 40,
        };

        assert_eq!(config.deposit_for(VisitorType::Adult), 80);
        assert_eq!(config.deposit_for(VisitorType::Child), 40);
    }
}
