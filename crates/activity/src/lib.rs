// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Represents the entity performing an action.
///
/// An actor is any identifiable entity that initiates a state change.
/// This is either an authenticated user or the system placeholder used
/// when no identity is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "user", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }

    /// Creates the system placeholder actor.
    ///
    /// Used to attribute actions taken with no authenticated identity.
    #[must_use]
    pub fn system() -> Self {
        Self {
            id: String::from("system"),
            actor_type: String::from("system"),
        }
    }
}

/// Represents the category of a state-changing action.
///
/// Every category maps to the fixed text recorded in the activity log's
/// `action` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    /// A band was issued and its deposit taken.
    BandPrinted,
    /// An entry scan advanced a band into the park.
    VisitorEntry,
    /// An exit scan recorded a visitor leaving.
    VisitorExit,
    /// A deposit was returned and its band deactivated.
    DepositRefunded,
    /// A report record was computed and persisted.
    ReportGenerated,
}

impl ActivityKind {
    /// Converts this category to the text recorded in the log.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BandPrinted => "Band Printed",
            Self::VisitorEntry => "Visitor Entry",
            Self::VisitorExit => "Visitor Exit",
            Self::DepositRefunded => "Deposit Refunded",
            Self::ReportGenerated => "Report Generated",
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable activity log entry.
///
/// Every successful state change appends exactly one entry per transition.
/// Entries are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    /// Sequential identifier assigned at append time.
    id: i64,
    /// The actor the entry is attributed to.
    user_id: String,
    /// Category text, e.g. "Band Printed".
    action: String,
    /// Human-readable description of what happened.
    details: String,
    /// Instant the entry was recorded.
    #[serde(with = "time::serde::iso8601")]
    timestamp: OffsetDateTime,
}

impl ActivityEntry {
    /// Records an activity entry attributed to an actor.
    ///
    /// # Arguments
    ///
    /// * `id` - Sequential identifier for the entry
    /// * `actor` - The actor to attribute the entry to
    /// * `kind` - The action category
    /// * `details` - Human-readable description
    /// * `timestamp` - The instant being recorded
    #[must_use]
    pub fn record(
        id: i64,
        actor: &Actor,
        kind: ActivityKind,
        details: String,
        timestamp: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            user_id: actor.id.clone(),
            action: kind.as_str().to_string(),
            details,
            timestamp,
        }
    }

    /// Returns the entry's identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the actor id the entry is attributed to.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the category text.
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Returns the instant the entry was recorded.
    #[must_use]
    pub const fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    /// Checks whether the entry matches a case-insensitive text search
    /// over its action and details.
    #[must_use]
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.action.to_lowercase().contains(&needle)
            || self.details.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_actor_creation_requires_all_fields() {
        let actor: Actor = Actor::new(String::from("staff-1"), String::from("user"));

        assert_eq!(actor.id, "staff-1");
        assert_eq!(actor.actor_type, "user");
    }

    #[test]
    fn test_system_actor_placeholder() {
        let actor: Actor = Actor::system();

        assert_eq!(actor.id, "system");
        assert_eq!(actor.actor_type, "system");
    }

    #[test]
    fn test_activity_kind_texts_are_fixed() {
        assert_eq!(ActivityKind::BandPrinted.as_str(), "Band Printed");
        assert_eq!(ActivityKind::VisitorEntry.as_str(), "Visitor Entry");
        assert_eq!(ActivityKind::VisitorExit.as_str(), "Visitor Exit");
        assert_eq!(ActivityKind::DepositRefunded.as_str(), "Deposit Refunded");
        assert_eq!(ActivityKind::ReportGenerated.as_str(), "Report Generated");
    }

    #[test]
    fn test_entry_records_actor_and_category() {
        let actor: Actor = Actor::new(String::from("staff-1"), String::from("user"));
        let entry: ActivityEntry = ActivityEntry::record(
            1,
            &actor,
            ActivityKind::BandPrinted,
            String::from("Band A26082510307341 printed for Adult with deposit of $50"),
            datetime!(2026-08-25 10:30 UTC),
        );

        assert_eq!(entry.id(), 1);
        assert_eq!(entry.user_id(), "staff-1");
        assert_eq!(entry.action(), "Band Printed");
        assert_eq!(entry.timestamp(), datetime!(2026-08-25 10:30 UTC));
    }

    #[test]
    fn test_matches_search_is_case_insensitive() {
        let actor: Actor = Actor::system();
        let entry: ActivityEntry = ActivityEntry::record(
            1,
            &actor,
            ActivityKind::DepositRefunded,
            String::from("Deposit of $50 refunded for band A26082510307341"),
            datetime!(2026-08-25 15:00 UTC),
        );

        assert!(entry.matches_search("deposit refunded"));
        assert!(entry.matches_search("REFUNDED"));
        assert!(entry.matches_search("A2608251030"));
        assert!(!entry.matches_search("entry"));
    }

    #[test]
    fn test_entry_serializes_with_camel_case_keys() {
        let actor: Actor = Actor::system();
        let entry: ActivityEntry = ActivityEntry::record(
            7,
            &actor,
            ActivityKind::VisitorEntry,
            String::from("Band A26082510307341 scanned for entry"),
            datetime!(2026-08-25 11:00 UTC),
        );

        let json: String = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"userId\":\"system\""));
        assert!(json.contains("\"action\":\"Visitor Entry\""));
        assert!(json.contains("\"details\":\"Band A26082510307341 scanned for entry\""));

        let restored: ActivityEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, entry);
    }
}
