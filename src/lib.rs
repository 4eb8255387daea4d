//! # Rollout Console: Experiment Lifecycle Core
//!
//! Core logic for an A/B testing console: pure classification of an
//! experiment's lifecycle fields into the flags, labels, and redirect
//! decisions the console screens consume, plus the sort machinery behind
//! the experiment list page.
//!
//! The GraphQL transport, rendering, and routing live with the embedding
//! web application; this crate takes immutable snapshots in and yields
//! plain values out. Every function is synchronous, deterministic, and
//! safe to call from any number of concurrent readers.
//!
//! ## Example Usage
//!
//! ```rust
//! use rollout_console::experiment::{ExperimentRecord, PublishStatus, Status};
//! use rollout_console::lifecycle::{requires_summary_redirect, StatusFlags};
//!
//! let experiment = ExperimentRecord::builder("demo-slug", "Demo Experiment")
//!     .status(Status::Draft)
//!     .publish_status(PublishStatus::Idle)
//!     .build();
//!
//! let flags = StatusFlags::from(&experiment);
//! assert!(flags.draft);
//! assert!(!requires_summary_redirect(&flags));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod experiment;
pub mod lifecycle;
pub mod listing;

pub use error::{Error, Result};
