//! Sort key extraction and comparison
//!
//! The list page sorts experiments by whichever column the user clicks.
//! Each column is a [`SortField`] that derives a string key from a
//! snapshot; [`comparator`] turns a field, a direction, and a version
//! catalog into an ordering function for a stable sort.
//!
//! Collation is pinned to byte-wise Unicode code-point order (`str::cmp`)
//! so results are identical on every host. Version fields compare
//! numerically on the leading segment of their resolved dot versions.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::experiment::ExperimentRecord;

use super::VersionCatalog;

/// Sort direction for listing experiments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Ascending order (smallest key first).
    Ascending,
    /// Descending order (largest key first).
    Descending,
}

impl SortOrder {
    /// Apply this direction to an ascending ordering.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Sortable column of the experiment list.
///
/// Each variant is a key derivation over one snapshot; absent fields
/// derive the empty string so partially populated snapshots still sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Experiment name.
    Name,
    /// Feature configuration name.
    FeatureConfigName,
    /// Owner's username.
    OwnerUsername,
    /// Target application identifier.
    Application,
    /// Release channel identifier.
    Channel,
    /// Population percentage (decimal string, compared as text).
    PopulationPercent,
    /// Minimum version bound (numeric compare via the version catalog).
    MinVersion,
    /// Maximum version bound (numeric compare via the version catalog).
    MaxVersion,
    /// Launch timestamp.
    StartDate,
    /// Computed end timestamp.
    ComputedEndDate,
    /// Instant the enrollment window closes.
    EnrollmentEnd,
    /// Whether analysis results are ready.
    ResultsReady,
}

impl SortField {
    /// Derive this field's sort key from a snapshot.
    ///
    /// Timestamps render as RFC 3339 so their text order matches their
    /// chronological order; absent values become the empty string.
    #[must_use]
    pub fn key(self, experiment: &ExperimentRecord) -> String {
        match self {
            Self::Name => experiment.name().to_string(),
            Self::FeatureConfigName => experiment
                .feature_config()
                .map(|config| config.name().to_string())
                .unwrap_or_default(),
            Self::OwnerUsername => experiment
                .owner()
                .map(|owner| owner.username().to_string())
                .unwrap_or_default(),
            Self::Application => experiment.application().unwrap_or_default().to_string(),
            Self::Channel => experiment.channel().unwrap_or_default().to_string(),
            Self::PopulationPercent => {
                experiment.population_percent().unwrap_or_default().to_string()
            }
            Self::MinVersion => experiment.min_version().unwrap_or_default().to_string(),
            Self::MaxVersion => experiment.max_version().unwrap_or_default().to_string(),
            Self::StartDate => experiment
                .start_date()
                .map(|date| date.to_rfc3339())
                .unwrap_or_default(),
            Self::ComputedEndDate => experiment
                .computed_end_date()
                .map(|date| date.to_rfc3339())
                .unwrap_or_default(),
            Self::EnrollmentEnd => experiment.enrollment_end_date().map_or_else(
                || {
                    experiment
                        .proposed_enrollment()
                        .map(|days| days.to_string())
                        .unwrap_or_default()
                },
                |date| date.to_rfc3339(),
            ),
            Self::ResultsReady => {
                if experiment.results_ready() == Some(true) {
                    "1".to_string()
                } else {
                    "0".to_string()
                }
            }
        }
    }

    /// Whether this field's keys resolve through the version catalog.
    #[must_use]
    pub const fn is_version(self) -> bool {
        matches!(self, Self::MinVersion | Self::MaxVersion)
    }
}

/// Leading numeric segment of a dot version (`"91.0.1"` -> `91`).
fn major_version(dot_version: &str) -> Option<u32> {
    dot_version.split('.').next()?.parse().ok()
}

/// Build an ordering function over experiment snapshots.
///
/// Non-version fields compare their keys in code-point order. Version
/// fields resolve each key through `versions` and compare the numeric
/// major segment; an unresolved or unparsable major orders before any
/// resolved one, and equal majors tie-break on the full dot version.
/// Fully equal keys return `Ordering::Equal`, so a stable sort preserves
/// input order.
///
/// ## Example
///
/// ```rust
/// use rollout_console::experiment::ExperimentRecord;
/// use rollout_console::listing::{comparator, SortField, SortOrder, VersionCatalog};
///
/// let versions = VersionCatalog::from_pairs([("FIREFOX_83", "83.0"), ("FIREFOX_91", "91.0")]);
/// let newer = ExperimentRecord::builder("a", "A").min_version("FIREFOX_91").build();
/// let older = ExperimentRecord::builder("b", "B").min_version("FIREFOX_83").build();
///
/// let mut list = vec![&newer, &older];
/// list.sort_by(|a, b| {
///     comparator(SortField::MinVersion, SortOrder::Ascending, &versions)(a, b)
/// });
/// assert_eq!(list[0].slug(), "b");
/// ```
pub fn comparator<'a>(
    field: SortField,
    order: SortOrder,
    versions: &'a VersionCatalog,
) -> impl Fn(&ExperimentRecord, &ExperimentRecord) -> Ordering + 'a {
    move |a, b| {
        let key_a = field.key(a);
        let key_b = field.key(b);
        let ordering = if field.is_version() {
            let dot_a = versions.dot_version(&key_a);
            let dot_b = versions.dot_version(&key_b);
            let major_a = dot_a.and_then(major_version);
            let major_b = dot_b.and_then(major_version);
            major_a
                .cmp(&major_b)
                .then_with(|| dot_a.unwrap_or("").cmp(dot_b.unwrap_or("")))
        } else {
            key_a.cmp(&key_b)
        };
        order.apply(ordering)
    }
}
