//! Listing: sort keys, comparators, and the experiment directory
//!
//! Everything the console's list page needs once snapshots are in hand:
//! a directory to hold them, column key derivations, and a comparator
//! factory with numeric handling for version columns.
//!
//! ## Usage
//!
//! ```rust
//! use rollout_console::experiment::ExperimentRecord;
//! use rollout_console::listing::{
//!     ExperimentDirectory, SortField, SortOrder, VersionCatalog,
//! };
//!
//! let versions = VersionCatalog::from_pairs([
//!     ("FIREFOX_83", "83.0"),
//!     ("FIREFOX_91", "91.0"),
//! ]);
//!
//! let directory: ExperimentDirectory = [
//!     ExperimentRecord::builder("newer", "Newer").min_version("FIREFOX_91").build(),
//!     ExperimentRecord::builder("older", "Older").min_version("FIREFOX_83").build(),
//! ]
//! .into_iter()
//! .collect();
//!
//! let rows = directory.sorted(SortField::MinVersion, SortOrder::Ascending, &versions);
//! assert_eq!(rows[0].slug(), "older");
//! ```

mod directory;
mod sort;
mod versions;

pub use directory::ExperimentDirectory;
pub use sort::{comparator, SortField, SortOrder};
pub use versions::VersionCatalog;
