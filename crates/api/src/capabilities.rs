// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for role-aware UI gating.
//!
//! Capabilities expose what actions an identity is expected to perform
//! without leaking domain internals. They are advisory only; the operation
//! layer runs every request it is handed regardless of role.

use crate::auth::{AuthenticatedActor, Role};
use crate::request_response::{Capability, RoleCapabilities};

/// Computes the capability table for an authenticated identity.
///
/// Staff may issue bands and scan entries and exits. Admins and owners may
/// additionally process refunds, generate reports, and view analytics.
///
/// # Arguments
///
/// * `actor` - The authenticated identity
///
/// # Returns
///
/// A `RoleCapabilities` struct with all capability flags set.
#[must_use]
pub const fn compute_role_capabilities(actor: &AuthenticatedActor) -> RoleCapabilities {
    match actor.role {
        Role::Staff => RoleCapabilities {
            can_issue: Capability::Allowed,
            can_scan: Capability::Allowed,
            can_refund: Capability::Denied,
            can_report: Capability::Denied,
            can_view_analytics: Capability::Denied,
        },
        Role::Admin | Role::Owner => RoleCapabilities {
            can_issue: Capability::Allowed,
            can_scan: Capability::Allowed,
            can_refund: Capability::Allowed,
            can_report: Capability::Allowed,
            can_view_analytics: Capability::Allowed,
        },
    }
}
