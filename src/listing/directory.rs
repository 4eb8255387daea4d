//! Experiment directory - in-memory holder behind the list page
//!
//! Keeps every snapshot the console has fetched, keyed by slug, and serves
//! the list page's sorted and tab-filtered views. Selections borrow; the
//! directory never hands out mutable access to a snapshot.

use std::collections::HashMap;

use tracing::debug;

use crate::experiment::ExperimentRecord;
use crate::lifecycle::StatusFlags;

use super::{comparator, SortField, SortOrder, VersionCatalog};

/// Slug-keyed collection of experiment snapshots.
#[derive(Debug, Clone, Default)]
pub struct ExperimentDirectory {
    experiments: HashMap<String, ExperimentRecord>,
}

impl ExperimentDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of snapshots held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    /// Whether the directory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }

    /// Ingest a snapshot, replacing any earlier snapshot of the same slug.
    pub fn insert(&mut self, experiment: ExperimentRecord) {
        let slug = experiment.slug().to_string();
        if self.experiments.insert(slug.clone(), experiment).is_some() {
            debug!(%slug, "replaced experiment snapshot");
        }
    }

    /// Get a snapshot by slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&ExperimentRecord> {
        self.experiments.get(slug)
    }

    /// Iterate over all snapshots in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &ExperimentRecord> {
        self.experiments.values()
    }

    /// All snapshots ordered by a list column.
    ///
    /// Pre-orders by slug before applying the stable column sort, so equal
    /// keys come out in a deterministic order regardless of map iteration.
    #[must_use]
    pub fn sorted(
        &self,
        field: SortField,
        order: SortOrder,
        versions: &VersionCatalog,
    ) -> Vec<&ExperimentRecord> {
        let mut experiments: Vec<&ExperimentRecord> = self.experiments.values().collect();
        experiments.sort_by_key(|experiment| experiment.slug().to_string());
        let compare = comparator(field, order, versions);
        experiments.sort_by(|a, b| compare(a, b));
        experiments
    }

    /// Snapshots whose derived flags satisfy a predicate.
    pub fn matching(&self, predicate: impl Fn(&StatusFlags) -> bool) -> Vec<&ExperimentRecord> {
        self.experiments
            .values()
            .filter(|experiment| predicate(&StatusFlags::from(*experiment)))
            .collect()
    }

    /// Experiments that are or were out in the wild.
    #[must_use]
    pub fn launched(&self) -> Vec<&ExperimentRecord> {
        self.matching(|flags| flags.launched && !flags.is_archived())
    }

    /// Editable drafts, excluding archived ones.
    #[must_use]
    pub fn drafts(&self) -> Vec<&ExperimentRecord> {
        self.matching(|flags| flags.draft && !flags.is_archived())
    }

    /// Experiments with a publish review anywhere in flight.
    #[must_use]
    pub fn review_queue(&self) -> Vec<&ExperimentRecord> {
        self.matching(StatusFlags::has_pending_review)
    }

    /// Archived experiments.
    #[must_use]
    pub fn archived(&self) -> Vec<&ExperimentRecord> {
        self.matching(StatusFlags::is_archived)
    }
}

impl FromIterator<ExperimentRecord> for ExperimentDirectory {
    fn from_iter<I: IntoIterator<Item = ExperimentRecord>>(iter: I) -> Self {
        let mut directory = Self::new();
        for experiment in iter {
            directory.insert(experiment);
        }
        directory
    }
}
