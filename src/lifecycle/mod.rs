//! Lifecycle classification
//!
//! Pure derivations over one experiment snapshot: named status flags, the
//! summary-page action label, the edit-page redirect decision, and rejection
//! notice phrasing. No I/O, no shared state; safe from any number of
//! concurrent readers.
//!
//! ## Usage
//!
//! ```rust
//! use rollout_console::experiment::{ExperimentRecord, PublishStatus, Status};
//! use rollout_console::lifecycle::{
//!     summary_action_label, FlowCatalog, StatusFlags,
//! };
//!
//! let experiment = ExperimentRecord::builder("demo-slug", "Demo")
//!     .status(Status::Live)
//!     .status_next(Status::Complete)
//!     .publish_status(PublishStatus::Review)
//!     .build();
//!
//! let flags = StatusFlags::from(&experiment);
//! assert!(flags.end_requested);
//!
//! let flows = FlowCatalog::default();
//! let label = summary_action_label(&flags, false, &flows);
//! assert_eq!(label, Some("Requested End"));
//! ```

mod actions;
mod flags;
mod flows;

pub use actions::{
    rejection_action_description, rejection_notice, requires_summary_redirect,
    summary_action_label, REQUEST_LAUNCH_LABEL,
};
pub use flags::StatusFlags;
pub use flows::{FlowCatalog, FlowLabels, ReviewFlow};
