//! Property-based tests for the lifecycle core
//!
//! - Classification invariants must hold for every field combination
//! - The comparator must be a lawful, key-consistent total order
//! - Run with `ProptestConfig::with_cases(100)`

use std::cmp::Ordering;

use proptest::prelude::*;
use rollout_console::experiment::{ExperimentRecord, PublishStatus, Status};
use rollout_console::lifecycle::{
    requires_summary_redirect, summary_action_label, FlowCatalog, StatusFlags,
};
use rollout_console::listing::{comparator, SortField, SortOrder, VersionCatalog};

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

fn arb_status() -> impl Strategy<Value = Option<Status>> {
    prop_oneof![
        Just(None),
        Just(Some(Status::Draft)),
        Just(Some(Status::Preview)),
        Just(Some(Status::Live)),
        Just(Some(Status::Complete)),
    ]
}

fn arb_publish_status() -> impl Strategy<Value = Option<PublishStatus>> {
    prop_oneof![
        Just(None),
        Just(Some(PublishStatus::Idle)),
        Just(Some(PublishStatus::Review)),
        Just(Some(PublishStatus::Approved)),
        Just(Some(PublishStatus::Waiting)),
    ]
}

prop_compose! {
    /// Generate a snapshot across every lifecycle field combination.
    fn arb_experiment()(
        slug in "[a-z]{1,8}-[a-z]{1,8}",
        name in "[A-Za-z0-9 ]{0,16}",
        status in arb_status(),
        status_next in arb_status(),
        publish_status in arb_publish_status(),
        pause_pending in proptest::option::of(any::<bool>()),
        archived in proptest::option::of(any::<bool>()),
        channel in proptest::option::of("[A-Z]{3,8}"),
        raw_version in proptest::option::of(prop_oneof![
            Just("FIREFOX_83".to_string()),
            Just("FIREFOX_91".to_string()),
            Just("FIREFOX_91_1".to_string()),
            Just("FIREFOX_999".to_string()),
        ]),
    ) -> ExperimentRecord {
        let mut builder = ExperimentRecord::builder(slug, name);
        if let Some(status) = status {
            builder = builder.status(status);
        }
        if let Some(status_next) = status_next {
            builder = builder.status_next(status_next);
        }
        if let Some(publish_status) = publish_status {
            builder = builder.publish_status(publish_status);
        }
        if let Some(pending) = pause_pending {
            builder = builder.enrollment_pause_pending(pending);
        }
        if let Some(archived) = archived {
            builder = builder.archived(archived);
        }
        if let Some(channel) = channel {
            builder = builder.channel(channel);
        }
        if let Some(raw) = raw_version {
            builder = builder.min_version(raw);
        }
        builder.build()
    }
}

fn release_versions() -> VersionCatalog {
    VersionCatalog::from_pairs([
        ("FIREFOX_83", "83.0"),
        ("FIREFOX_91", "91.0"),
        ("FIREFOX_91_1", "91.1"),
    ])
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ========================================================================
    // Classification Properties
    // ========================================================================

    /// Property: request flags are mutually exclusive and imply live.
    #[test]
    fn prop_request_flags_exclusive_and_live(experiment in arb_experiment()) {
        let flags = StatusFlags::from(&experiment);
        prop_assert!(!(flags.pause_requested && flags.end_requested));
        if flags.pause_requested || flags.end_requested {
            prop_assert!(flags.live);
        }
    }

    /// Property: exactly one lifecycle flag is set when status is present,
    /// none when absent.
    #[test]
    fn prop_stage_flags_partition(experiment in arb_experiment()) {
        let flags = StatusFlags::from(&experiment);
        let set = [flags.draft, flags.preview, flags.live, flags.complete]
            .iter()
            .filter(|flag| **flag)
            .count();
        prop_assert_eq!(set, usize::from(experiment.status().is_some()));
    }

    /// Property: launched equals live or complete.
    #[test]
    fn prop_launched_definition(experiment in arb_experiment()) {
        let flags = StatusFlags::from(&experiment);
        prop_assert_eq!(flags.launched, flags.live || flags.complete);
    }

    /// Property: the redirect decision matches its definition.
    #[test]
    fn prop_redirect_definition(experiment in arb_experiment()) {
        let flags = StatusFlags::from(&experiment);
        prop_assert_eq!(
            requires_summary_redirect(&flags),
            flags.launched || !flags.idle || flags.preview || flags.is_archived()
        );
    }

    /// Property: a pending review always yields a label, whoever is looking.
    #[test]
    fn prop_pending_review_always_labeled(experiment in arb_experiment(), can_review in any::<bool>()) {
        let flags = StatusFlags::from(&experiment);
        let flows = FlowCatalog::default();
        if flags.has_pending_review() {
            prop_assert!(summary_action_label(&flags, can_review, &flows).is_some());
        }
    }

    // ========================================================================
    // Comparator Properties
    // ========================================================================

    /// Property: the comparator is antisymmetric.
    #[test]
    fn prop_comparator_antisymmetric(
        a in arb_experiment(),
        b in arb_experiment(),
        descending in any::<bool>(),
    ) {
        let versions = release_versions();
        let order = if descending { SortOrder::Descending } else { SortOrder::Ascending };
        for field in [SortField::Name, SortField::Channel, SortField::MinVersion] {
            let compare = comparator(field, order, &versions);
            prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
        }
    }

    /// Property: the comparator is transitive.
    #[test]
    fn prop_comparator_transitive(
        a in arb_experiment(),
        b in arb_experiment(),
        c in arb_experiment(),
    ) {
        let versions = release_versions();
        for field in [SortField::Channel, SortField::MinVersion] {
            let compare = comparator(field, SortOrder::Ascending, &versions);
            if compare(&a, &b) != Ordering::Greater && compare(&b, &c) != Ordering::Greater {
                prop_assert_ne!(compare(&a, &c), Ordering::Greater);
            }
        }
    }

    /// Property: equal keys compare equal, so stable sorts cannot reorder.
    #[test]
    fn prop_comparator_key_consistent(a in arb_experiment(), b in arb_experiment()) {
        let versions = release_versions();
        let field = SortField::Channel;
        let compare = comparator(field, SortOrder::Ascending, &versions);
        if field.key(&a) == field.key(&b) {
            prop_assert_eq!(compare(&a, &b), Ordering::Equal);
        }
    }

    /// Property: descending is the exact reverse of ascending.
    #[test]
    fn prop_descending_reverses_ascending(a in arb_experiment(), b in arb_experiment()) {
        let versions = release_versions();
        for field in [SortField::Name, SortField::MinVersion] {
            let ascending = comparator(field, SortOrder::Ascending, &versions);
            let descending = comparator(field, SortOrder::Descending, &versions);
            prop_assert_eq!(ascending(&a, &b), descending(&a, &b).reverse());
        }
    }

    /// Property: sorting ascending yields keys in non-decreasing order.
    #[test]
    fn prop_sorted_names_non_decreasing(
        mut experiments in proptest::collection::vec(arb_experiment(), 0..20),
    ) {
        let versions = release_versions();
        let compare = comparator(SortField::Name, SortOrder::Ascending, &versions);
        experiments.sort_by(|a, b| compare(a, b));
        for pair in experiments.windows(2) {
            prop_assert!(SortField::Name.key(&pair[0]) <= SortField::Name.key(&pair[1]));
        }
    }
}
