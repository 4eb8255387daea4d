//! Experiment snapshot schema
//!
//! Read-only projections of experiments as supplied by the console's API
//! client. Every type here is an immutable snapshot; the lifecycle and
//! listing modules derive from these without mutating them.
//!
//! ## Schema Overview
//!
//! ```text
//! ExperimentRecord ──┬── Status / PublishStatus (lifecycle fields)
//!                    ├── FeatureConfig, Owner (display fields)
//!                    └── RejectionEvent (review history, fetched separately)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use rollout_console::experiment::{ExperimentRecord, PublishStatus, Status};
//!
//! let experiment = ExperimentRecord::builder("demo-slug", "Demo Experiment")
//!     .status(Status::Live)
//!     .publish_status(PublishStatus::Idle)
//!     .build();
//!
//! assert_eq!(experiment.status(), Some(Status::Live));
//! ```

mod record;
mod rejection;
mod status;

pub use record::{ExperimentRecord, ExperimentRecordBuilder, FeatureConfig, Owner};
pub use rejection::{human_date, RejectionEvent, Reviewer};
pub use status::{PublishStatus, Status};
