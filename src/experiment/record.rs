//! Experiment snapshot - read-only projection supplied by the API client
//!
//! Snapshots arrive partially populated depending on which console screen
//! requested them, so everything beyond the identity fields is optional.
//! This crate never mutates a snapshot; it only derives values from one.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{PublishStatus, Status};

const MILLIS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// Feature configuration attached to an experiment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureConfig {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<serde_json::Value>,
}

impl FeatureConfig {
    /// Create a feature config with the given name and no payload.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Create a feature config carrying a free-form payload.
    #[must_use]
    pub fn with_value(name: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
        }
    }

    /// Get the feature name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the feature payload, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&serde_json::Value> {
        self.value.as_ref()
    }
}

/// Owner of an experiment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

impl Owner {
    /// Create an owner with the given username.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: None,
        }
    }

    /// Create an owner with username and email.
    #[must_use]
    pub fn with_email(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: Some(email.into()),
        }
    }

    /// Get the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the email, if known.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// Experiment snapshot as fetched from the console API.
///
/// `slug` and `name` always arrive; the remaining fields depend on the
/// query that produced the snapshot. Absent fields degrade gracefully in
/// every derivation ([`crate::lifecycle::StatusFlags`], sort keys).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentRecord {
    slug: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_next: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    publish_status: Option<PublishStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_enrollment_pause_pending: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    results_ready: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    application: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    population_percent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_enrolled_clients: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    proposed_enrollment: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    proposed_duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    computed_end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    feature_config: Option<FeatureConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    owner: Option<Owner>,
}

impl ExperimentRecord {
    /// Create a minimal snapshot with identity fields only.
    ///
    /// # Arguments
    ///
    /// * `slug` - URL-safe unique identifier
    /// * `name` - Human-readable experiment name
    #[must_use]
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            status: None,
            status_next: None,
            publish_status: None,
            is_enrollment_pause_pending: None,
            is_archived: None,
            results_ready: None,
            application: None,
            channel: None,
            population_percent: None,
            total_enrolled_clients: None,
            proposed_enrollment: None,
            proposed_duration: None,
            start_date: None,
            computed_end_date: None,
            min_version: None,
            max_version: None,
            feature_config: None,
            owner: None,
        }
    }

    /// Create a builder for a snapshot with optional fields.
    #[must_use]
    pub fn builder(slug: impl Into<String>, name: impl Into<String>) -> ExperimentRecordBuilder {
        ExperimentRecordBuilder::new(slug, name)
    }

    /// Get the slug.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Get the experiment name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the lifecycle status, if present.
    #[must_use]
    pub const fn status(&self) -> Option<Status> {
        self.status
    }

    /// Get the requested-but-unapplied lifecycle status, if present.
    ///
    /// Only meaningful while [`status`](Self::status) is [`Status::Live`].
    #[must_use]
    pub const fn status_next(&self) -> Option<Status> {
        self.status_next
    }

    /// Get the publish workflow state, if present.
    #[must_use]
    pub const fn publish_status(&self) -> Option<PublishStatus> {
        self.publish_status
    }

    /// Whether a pause-enrollment change is requested and unapplied.
    #[must_use]
    pub const fn is_enrollment_pause_pending(&self) -> Option<bool> {
        self.is_enrollment_pause_pending
    }

    /// Whether the experiment is archived.
    #[must_use]
    pub const fn is_archived(&self) -> Option<bool> {
        self.is_archived
    }

    /// Whether analysis results are ready.
    #[must_use]
    pub const fn results_ready(&self) -> Option<bool> {
        self.results_ready
    }

    /// Get the target application identifier, if present.
    #[must_use]
    pub fn application(&self) -> Option<&str> {
        self.application.as_deref()
    }

    /// Get the release channel identifier, if present.
    #[must_use]
    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    /// Get the population percentage as the API's decimal string.
    #[must_use]
    pub fn population_percent(&self) -> Option<&str> {
        self.population_percent.as_deref()
    }

    /// Get the expected client enrollment count, if present.
    #[must_use]
    pub const fn total_enrolled_clients(&self) -> Option<u64> {
        self.total_enrolled_clients
    }

    /// Get the proposed enrollment window in days (fractional), if present.
    #[must_use]
    pub const fn proposed_enrollment(&self) -> Option<f64> {
        self.proposed_enrollment
    }

    /// Get the proposed total duration in days, if present.
    #[must_use]
    pub const fn proposed_duration(&self) -> Option<f64> {
        self.proposed_duration
    }

    /// Get the launch timestamp, if the experiment has started.
    #[must_use]
    pub const fn start_date(&self) -> Option<DateTime<Utc>> {
        self.start_date
    }

    /// Get the computed end timestamp, if known.
    #[must_use]
    pub const fn computed_end_date(&self) -> Option<DateTime<Utc>> {
        self.computed_end_date
    }

    /// Get the raw minimum-version identifier (e.g. `FIREFOX_83`).
    #[must_use]
    pub fn min_version(&self) -> Option<&str> {
        self.min_version.as_deref()
    }

    /// Get the raw maximum-version identifier.
    #[must_use]
    pub fn max_version(&self) -> Option<&str> {
        self.max_version.as_deref()
    }

    /// Get the feature configuration, if present.
    #[must_use]
    pub const fn feature_config(&self) -> Option<&FeatureConfig> {
        self.feature_config.as_ref()
    }

    /// Get the owner, if present.
    #[must_use]
    pub const fn owner(&self) -> Option<&Owner> {
        self.owner.as_ref()
    }

    /// Instant at which the proposed enrollment window closes.
    ///
    /// Derived as `start_date + proposed_enrollment` fractional days.
    /// Returns `None` until both fields are populated.
    #[must_use]
    pub fn enrollment_end_date(&self) -> Option<DateTime<Utc>> {
        let start = self.start_date?;
        let days = self.proposed_enrollment?;
        #[allow(clippy::cast_possible_truncation)]
        let millis = (days * MILLIS_PER_DAY) as i64;
        Some(start + Duration::milliseconds(millis))
    }
}

/// Builder for [`ExperimentRecord`].
#[derive(Debug)]
pub struct ExperimentRecordBuilder {
    record: ExperimentRecord,
}

impl ExperimentRecordBuilder {
    /// Create a new builder with the identity fields.
    #[must_use]
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            record: ExperimentRecord::new(slug, name),
        }
    }

    /// Set the lifecycle status.
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.record.status = Some(status);
        self
    }

    /// Set the requested-but-unapplied lifecycle status.
    #[must_use]
    pub const fn status_next(mut self, status_next: Status) -> Self {
        self.record.status_next = Some(status_next);
        self
    }

    /// Set the publish workflow state.
    #[must_use]
    pub const fn publish_status(mut self, publish_status: PublishStatus) -> Self {
        self.record.publish_status = Some(publish_status);
        self
    }

    /// Mark whether a pause-enrollment change is pending.
    #[must_use]
    pub const fn enrollment_pause_pending(mut self, pending: bool) -> Self {
        self.record.is_enrollment_pause_pending = Some(pending);
        self
    }

    /// Mark whether the experiment is archived.
    #[must_use]
    pub const fn archived(mut self, archived: bool) -> Self {
        self.record.is_archived = Some(archived);
        self
    }

    /// Mark whether analysis results are ready.
    #[must_use]
    pub const fn results_ready(mut self, ready: bool) -> Self {
        self.record.results_ready = Some(ready);
        self
    }

    /// Set the target application identifier.
    #[must_use]
    pub fn application(mut self, application: impl Into<String>) -> Self {
        self.record.application = Some(application.into());
        self
    }

    /// Set the release channel identifier.
    #[must_use]
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.record.channel = Some(channel.into());
        self
    }

    /// Set the population percentage (decimal string, as on the wire).
    #[must_use]
    pub fn population_percent(mut self, percent: impl Into<String>) -> Self {
        self.record.population_percent = Some(percent.into());
        self
    }

    /// Set the expected client enrollment count.
    #[must_use]
    pub const fn total_enrolled_clients(mut self, clients: u64) -> Self {
        self.record.total_enrolled_clients = Some(clients);
        self
    }

    /// Set the proposed enrollment window in days (fractional).
    #[must_use]
    pub const fn proposed_enrollment(mut self, days: f64) -> Self {
        self.record.proposed_enrollment = Some(days);
        self
    }

    /// Set the proposed total duration in days.
    #[must_use]
    pub const fn proposed_duration(mut self, days: f64) -> Self {
        self.record.proposed_duration = Some(days);
        self
    }

    /// Set the launch timestamp.
    #[must_use]
    pub const fn start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.record.start_date = Some(start_date);
        self
    }

    /// Set the computed end timestamp.
    #[must_use]
    pub const fn computed_end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.record.computed_end_date = Some(end_date);
        self
    }

    /// Set the raw minimum-version identifier.
    #[must_use]
    pub fn min_version(mut self, version: impl Into<String>) -> Self {
        self.record.min_version = Some(version.into());
        self
    }

    /// Set the raw maximum-version identifier.
    #[must_use]
    pub fn max_version(mut self, version: impl Into<String>) -> Self {
        self.record.max_version = Some(version.into());
        self
    }

    /// Set the feature configuration.
    #[must_use]
    pub fn feature_config(mut self, feature_config: FeatureConfig) -> Self {
        self.record.feature_config = Some(feature_config);
        self
    }

    /// Set the owner.
    #[must_use]
    pub fn owner(mut self, owner: Owner) -> Self {
        self.record.owner = Some(owner);
        self
    }

    /// Build the [`ExperimentRecord`].
    #[must_use]
    pub fn build(self) -> ExperimentRecord {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_new_minimal() {
        let record = ExperimentRecord::new("demo-slug", "Demo Experiment");
        assert_eq!(record.slug(), "demo-slug");
        assert_eq!(record.name(), "Demo Experiment");
        assert!(record.status().is_none());
        assert!(record.publish_status().is_none());
        assert!(record.enrollment_end_date().is_none());
    }

    #[test]
    fn test_record_builder_sets_lifecycle_fields() {
        let record = ExperimentRecord::builder("demo-slug", "Demo")
            .status(Status::Live)
            .status_next(Status::Complete)
            .publish_status(PublishStatus::Review)
            .enrollment_pause_pending(false)
            .archived(false)
            .build();

        assert_eq!(record.status(), Some(Status::Live));
        assert_eq!(record.status_next(), Some(Status::Complete));
        assert_eq!(record.publish_status(), Some(PublishStatus::Review));
        assert_eq!(record.is_enrollment_pause_pending(), Some(false));
        assert_eq!(record.is_archived(), Some(false));
    }

    #[test]
    fn test_enrollment_end_date_from_fractional_days() {
        let start = Utc.with_ymd_and_hms(2021, 12, 2, 0, 0, 0).unwrap();
        let record = ExperimentRecord::builder("demo-slug", "Demo")
            .start_date(start)
            .proposed_enrollment(1.5)
            .build();

        let end = record.enrollment_end_date().unwrap();
        assert_eq!(end, start + Duration::hours(36));
    }

    #[test]
    fn test_enrollment_end_date_requires_both_fields() {
        let record = ExperimentRecord::builder("demo-slug", "Demo")
            .proposed_enrollment(7.0)
            .build();
        assert!(record.enrollment_end_date().is_none());
    }

    #[test]
    fn test_record_serde_camel_case() {
        let record = ExperimentRecord::builder("demo-slug", "Demo")
            .status(Status::Draft)
            .population_percent("40")
            .total_enrolled_clients(68_000)
            .build();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["slug"], "demo-slug");
        assert_eq!(json["status"], "DRAFT");
        assert_eq!(json["populationPercent"], "40");
        assert_eq!(json["totalEnrolledClients"], 68_000);
        // Absent optionals stay off the wire.
        assert!(json.get("statusNext").is_none());

        let back: ExperimentRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_feature_config_and_owner() {
        let record = ExperimentRecord::builder("demo-slug", "Demo")
            .feature_config(FeatureConfig::with_value(
                "picture-in-picture",
                serde_json::json!({ "enabled": true }),
            ))
            .owner(Owner::with_email("alpha-example", "alpha-example@example.com"))
            .build();

        assert_eq!(
            record.feature_config().unwrap().name(),
            "picture-in-picture"
        );
        assert_eq!(record.owner().unwrap().username(), "alpha-example");
        assert_eq!(
            record.owner().unwrap().email(),
            Some("alpha-example@example.com")
        );
    }
}
