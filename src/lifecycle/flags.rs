//! Derived status flags
//!
//! One pure constructor turns a snapshot's raw lifecycle fields into named
//! booleans the console screens branch on. Total over any input: an absent
//! snapshot or absent fields yield false for every equality-derived flag.

use serde::{Deserialize, Serialize};

use crate::experiment::{ExperimentRecord, PublishStatus, Status};

/// Named status predicates derived from one experiment snapshot.
///
/// `archived` passes through the snapshot's tri-state field; every other
/// flag is a plain boolean. The two request flags are mutually exclusive:
/// `pause_requested` needs `status_next == Live`, `end_requested` needs
/// `status_next == Complete`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFlags {
    /// Archived passthrough; `None` when the snapshot omitted the field.
    pub archived: Option<bool>,
    /// Lifecycle status is Draft.
    pub draft: bool,
    /// Lifecycle status is Preview.
    pub preview: bool,
    /// Lifecycle status is Live.
    pub live: bool,
    /// Lifecycle status is Complete.
    pub complete: bool,
    /// Publish workflow is idle.
    pub idle: bool,
    /// Publish workflow holds an approved transition.
    pub approved: bool,
    /// Publish workflow awaits reviewer sign-off.
    pub review: bool,
    /// Publish workflow handed an approved transition to delivery.
    pub waiting: bool,
    /// A pause-enrollment change is requested on a live experiment.
    pub pause_requested: bool,
    /// An end request is pending on a live experiment.
    pub end_requested: bool,
    /// The experiment is or was out in the wild (live or complete).
    pub launched: bool,
}

impl StatusFlags {
    /// Classify a snapshot into its derived flags.
    ///
    /// Total and deterministic: `None` input behaves as a snapshot with
    /// every lifecycle field absent.
    #[must_use]
    pub fn classify(experiment: Option<&ExperimentRecord>) -> Self {
        let status = experiment.and_then(ExperimentRecord::status);
        let status_next = experiment.and_then(ExperimentRecord::status_next);
        let publish_status = experiment.and_then(ExperimentRecord::publish_status);
        let pause_pending = experiment.and_then(ExperimentRecord::is_enrollment_pause_pending);

        let live = status == Some(Status::Live);
        let launched = matches!(status, Some(Status::Live | Status::Complete));

        Self {
            archived: experiment.and_then(ExperimentRecord::is_archived),
            draft: status == Some(Status::Draft),
            preview: status == Some(Status::Preview),
            live,
            complete: status == Some(Status::Complete),
            idle: publish_status == Some(PublishStatus::Idle),
            approved: publish_status == Some(PublishStatus::Approved),
            review: publish_status == Some(PublishStatus::Review),
            waiting: publish_status == Some(PublishStatus::Waiting),
            pause_requested: live && status_next == Some(Status::Live) && pause_pending == Some(true),
            end_requested: live && status_next == Some(Status::Complete),
            launched,
        }
    }

    /// Archived passthrough resolved to a plain boolean.
    #[must_use]
    pub fn is_archived(&self) -> bool {
        self.archived == Some(true)
    }

    /// Whether a publish review is anywhere in flight.
    #[must_use]
    pub const fn has_pending_review(&self) -> bool {
        self.review || self.approved || self.waiting
    }
}

impl From<&ExperimentRecord> for StatusFlags {
    fn from(experiment: &ExperimentRecord) -> Self {
        Self::classify(Some(experiment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_record() -> ExperimentRecord {
        ExperimentRecord::builder("demo-slug", "Demo")
            .status(Status::Live)
            .publish_status(PublishStatus::Idle)
            .build()
    }

    #[test]
    fn test_classify_none_is_all_false() {
        let flags = StatusFlags::classify(None);
        assert_eq!(flags, StatusFlags::default());
        assert!(flags.archived.is_none());
        assert!(!flags.is_archived());
        assert!(!flags.launched);
        assert!(!flags.has_pending_review());
    }

    #[test]
    fn test_classify_lifecycle_stages() {
        for (status, expect) in [
            (Status::Draft, [true, false, false, false]),
            (Status::Preview, [false, true, false, false]),
            (Status::Live, [false, false, true, false]),
            (Status::Complete, [false, false, false, true]),
        ] {
            let record = ExperimentRecord::builder("demo-slug", "Demo")
                .status(status)
                .build();
            let flags = StatusFlags::from(&record);
            assert_eq!(
                [flags.draft, flags.preview, flags.live, flags.complete],
                expect,
                "stage flags for {status}"
            );
        }
    }

    #[test]
    fn test_launched_covers_live_and_complete() {
        for status in Status::all() {
            let record = ExperimentRecord::builder("demo-slug", "Demo")
                .status(status)
                .build();
            let expected = matches!(status, Status::Live | Status::Complete);
            assert_eq!(StatusFlags::from(&record).launched, expected);
        }
    }

    #[test]
    fn test_pause_requested_needs_all_three_fields() {
        let record = ExperimentRecord::builder("demo-slug", "Demo")
            .status(Status::Live)
            .status_next(Status::Live)
            .enrollment_pause_pending(true)
            .build();
        let flags = StatusFlags::from(&record);
        assert!(flags.pause_requested);
        assert!(!flags.end_requested);

        // Missing the pending bit: no pause request.
        let record = ExperimentRecord::builder("demo-slug", "Demo")
            .status(Status::Live)
            .status_next(Status::Live)
            .build();
        assert!(!StatusFlags::from(&record).pause_requested);
    }

    #[test]
    fn test_end_requested() {
        let record = ExperimentRecord::builder("demo-slug", "Demo")
            .status(Status::Live)
            .status_next(Status::Complete)
            .build();
        let flags = StatusFlags::from(&record);
        assert!(flags.end_requested);
        assert!(!flags.pause_requested);
    }

    #[test]
    fn test_request_flags_ignore_status_next_outside_live() {
        // Draft + Complete has no defined requested-action semantics.
        let record = ExperimentRecord::builder("demo-slug", "Demo")
            .status(Status::Draft)
            .status_next(Status::Complete)
            .enrollment_pause_pending(true)
            .build();
        let flags = StatusFlags::from(&record);
        assert!(!flags.pause_requested);
        assert!(!flags.end_requested);
    }

    #[test]
    fn test_publish_workflow_flags() {
        for (publish, expect) in [
            (PublishStatus::Idle, [true, false, false, false]),
            (PublishStatus::Approved, [false, true, false, false]),
            (PublishStatus::Review, [false, false, true, false]),
            (PublishStatus::Waiting, [false, false, false, true]),
        ] {
            let record = ExperimentRecord::builder("demo-slug", "Demo")
                .publish_status(publish)
                .build();
            let flags = StatusFlags::from(&record);
            assert_eq!(
                [flags.idle, flags.approved, flags.review, flags.waiting],
                expect,
                "workflow flags for {publish}"
            );
        }
        let flags = StatusFlags::from(&live_record());
        assert!(flags.idle);
        assert!(!flags.has_pending_review());
    }

    #[test]
    fn test_archived_passthrough() {
        let record = ExperimentRecord::builder("demo-slug", "Demo")
            .archived(true)
            .build();
        let flags = StatusFlags::from(&record);
        assert_eq!(flags.archived, Some(true));
        assert!(flags.is_archived());

        let record = ExperimentRecord::builder("demo-slug", "Demo")
            .archived(false)
            .build();
        assert!(!StatusFlags::from(&record).is_archived());
    }
}
