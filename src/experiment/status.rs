//! Lifecycle and publish status enums
//!
//! Both enums mirror the console API's wire identifiers exactly
//! (SCREAMING_SNAKE_CASE), so snapshots deserialize straight off the
//! payloads the API client hands over.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Primary lifecycle stage of an experiment.
///
/// Experiments progress `Draft -> Preview -> Live -> Complete`; the ordering
/// on this type follows that progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Being drafted; editable, not yet visible to clients.
    Draft,
    /// Pushed to a preview audience for a smoke check before review.
    Preview,
    /// Enrolling or delivering in the wild.
    Live,
    /// Finished; results may be pending or ready.
    Complete,
}

impl Status {
    /// All stages in progression order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Draft, Self::Preview, Self::Live, Self::Complete]
    }

    /// Wire identifier for this stage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Preview => "PREVIEW",
            Self::Live => "LIVE",
            Self::Complete => "COMPLETE",
        }
    }

    /// Numeric index of this stage in the progression (for ordering).
    #[must_use]
    const fn index(self) -> u8 {
        match self {
            Self::Draft => 0,
            Self::Preview => 1,
            Self::Live => 2,
            Self::Complete => 3,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "DRAFT" => Ok(Self::Draft),
            "PREVIEW" => Ok(Self::Preview),
            "LIVE" => Ok(Self::Live),
            "COMPLETE" => Ok(Self::Complete),
            other => Err(Error::UnknownStatus(other.to_string())),
        }
    }
}

impl PartialOrd for Status {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Status {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

/// State of the review/approval workflow that gates a pending transition.
///
/// Independent of [`Status`]: a live experiment can simultaneously be under
/// review for an end-enrollment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PublishStatus {
    /// No publish workflow in flight.
    Idle,
    /// A requested transition awaits reviewer sign-off.
    Review,
    /// A reviewer approved the transition; not yet picked up.
    Approved,
    /// Approved and handed to the delivery pipeline.
    Waiting,
}

impl PublishStatus {
    /// Wire identifier for this workflow state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Review => "REVIEW",
            Self::Approved => "APPROVED",
            Self::Waiting => "WAITING",
        }
    }
}

impl fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PublishStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "IDLE" => Ok(Self::Idle),
            "REVIEW" => Ok(Self::Review),
            "APPROVED" => Ok(Self::Approved),
            "WAITING" => Ok(Self::Waiting),
            other => Err(Error::UnknownPublishStatus(other.to_string())),
        }
    }
}
