//! Rejection events - review history records
//!
//! Created server-side when a reviewer rejects a proposed transition;
//! read-only here. The status pair captures what was in effect when the
//! reviewer acted, which is all the notice formatter needs to phrase the
//! rejected request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Status;

/// Reviewer who recorded a change, identified by email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reviewer {
    email: String,
}

impl Reviewer {
    /// Create a reviewer with the given email.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Get the reviewer's email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Immutable record of a rejected transition request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RejectionEvent {
    message: String,
    changed_on: DateTime<Utc>,
    changed_by: Reviewer,
    #[serde(skip_serializing_if = "Option::is_none")]
    old_status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    old_status_next: Option<Status>,
}

impl RejectionEvent {
    /// Create a rejection event.
    ///
    /// # Arguments
    ///
    /// * `message` - Reviewer's free-text reason
    /// * `changed_on` - When the rejection was recorded
    /// * `changed_by` - Reviewer who rejected
    /// * `old_status` - Lifecycle status in effect at rejection time
    /// * `old_status_next` - Requested transition target at rejection time
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        changed_on: DateTime<Utc>,
        changed_by: Reviewer,
        old_status: Option<Status>,
        old_status_next: Option<Status>,
    ) -> Self {
        Self {
            message: message.into(),
            changed_on,
            changed_by,
            old_status,
            old_status_next,
        }
    }

    /// Get the reviewer's free-text reason.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the rejection timestamp.
    #[must_use]
    pub const fn changed_on(&self) -> DateTime<Utc> {
        self.changed_on
    }

    /// Get the reviewer who rejected.
    #[must_use]
    pub const fn changed_by(&self) -> &Reviewer {
        &self.changed_by
    }

    /// Get the lifecycle status that was in effect when the reviewer acted.
    #[must_use]
    pub const fn old_status(&self) -> Option<Status> {
        self.old_status
    }

    /// Get the requested transition target that was in effect.
    #[must_use]
    pub const fn old_status_next(&self) -> Option<Status> {
        self.old_status_next
    }
}

/// Format a timestamp the way the console renders dates: `"Dec 2, 2021"`.
#[must_use]
pub fn human_date(datetime: DateTime<Utc>) -> String {
    datetime.format("%b %-d, %Y").to_string()
}
