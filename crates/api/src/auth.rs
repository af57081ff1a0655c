// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identity types for attributing operations.
//!
//! The operation layer never blocks on role. An identity, when present, is
//! carried through so ledger records name who acted; when absent, actions
//! are attributed to the system placeholder.

use std::str::FromStr;

use parkband_activity::Actor;

use crate::error::ApiError;

/// Actor roles for capability computation.
///
/// Roles never gate operations. They feed the advisory capability table the
/// presentation layer uses to enable or disable controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Staff role: gate and counter workers who issue bands and scan
    /// entries and exits.
    Staff,
    /// Admin role: supervisors who additionally process refunds and run
    /// reports.
    Admin,
    /// Owner role: full access, identical to Admin in capability terms.
    Owner,
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Admin => "admin",
            Self::Owner => "owner",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "staff" => Ok(Self::Staff),
            "admin" => Ok(Self::Admin),
            "owner" => Ok(Self::Owner),
            _ => Err(ApiError::InvalidInput {
                field: String::from("role"),
                message: format!("Unknown role: {s}"),
            }),
        }
    }
}

/// An authenticated identity with an associated role.
///
/// Authentication itself happens outside this crate; callers hand over an
/// already-resolved identity, or none at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this identity.
    pub id: String,
    /// The display name for this identity.
    pub name: String,
    /// The role assigned to this identity.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this identity
    /// * `name` - The display name for this identity
    /// * `role` - The role assigned to this identity
    #[must_use]
    pub const fn new(id: String, name: String, role: Role) -> Self {
        Self { id, name, role }
    }

    /// Converts this authenticated actor into an activity log Actor.
    ///
    /// This is used when recording ledger entries to attribute actions to
    /// the identity that performed them.
    #[must_use]
    pub fn to_activity_actor(&self) -> Actor {
        Actor::new(self.id.clone(), self.role.as_str().to_string())
    }
}
