//! Console Overview Example
//!
//! Walks the lifecycle core end to end: ingest snapshots, classify them,
//! pick summary labels and redirect decisions, and sort the directory the
//! way the list page does.
//!
//! Run with: cargo run --example console_overview

use anyhow::Result;
use chrono::{TimeZone, Utc};
use rollout_console::experiment::{
    ExperimentRecord, Owner, PublishStatus, RejectionEvent, Reviewer, Status,
};
use rollout_console::lifecycle::{
    rejection_notice, requires_summary_redirect, summary_action_label, FlowCatalog, StatusFlags,
};
use rollout_console::listing::{ExperimentDirectory, SortField, SortOrder, VersionCatalog};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Rollout Console Lifecycle Core ===\n");

    let flows = FlowCatalog::default();
    let versions = VersionCatalog::from_pairs([
        ("FIREFOX_83", "83.0"),
        ("FIREFOX_91", "91.0"),
        ("FIREFOX_100", "100.0"),
    ]);

    // -------------------------------------------------------------------------
    // 1. Ingest a few snapshots the API client fetched
    // -------------------------------------------------------------------------
    println!("1. Ingesting experiment snapshots...");

    let mut directory = ExperimentDirectory::new();
    directory.insert(
        ExperimentRecord::builder("picture-in-picture-v2", "Picture-in-Picture V2")
            .status(Status::Live)
            .status_next(Status::Complete)
            .publish_status(PublishStatus::Review)
            .owner(Owner::new("alpha-example"))
            .min_version("FIREFOX_91")
            .build(),
    );
    directory.insert(
        ExperimentRecord::builder("new-tab-layout", "New Tab Layout")
            .status(Status::Draft)
            .publish_status(PublishStatus::Idle)
            .owner(Owner::new("beta-example"))
            .min_version("FIREFOX_83")
            .build(),
    );
    directory.insert(
        ExperimentRecord::builder("search-banner", "Search Banner")
            .status(Status::Complete)
            .publish_status(PublishStatus::Idle)
            .results_ready(true)
            .min_version("FIREFOX_100")
            .build(),
    );

    println!("   Directory holds {} experiments", directory.len());

    // -------------------------------------------------------------------------
    // 2. Classify and decide what each summary page shows
    // -------------------------------------------------------------------------
    println!("\n2. Classifying...");

    for experiment in directory.sorted(SortField::Name, SortOrder::Ascending, &versions) {
        let flags = StatusFlags::from(experiment);
        let label = summary_action_label(&flags, false, &flows).unwrap_or("-");
        println!(
            "   {:24} launched={:5} redirect={:5} action={label}",
            experiment.slug(),
            flags.launched,
            requires_summary_redirect(&flags),
        );
    }

    // -------------------------------------------------------------------------
    // 3. Sort the list page by minimum version
    // -------------------------------------------------------------------------
    println!("\n3. Sorting by minimum version (ascending)...");

    for experiment in directory.sorted(SortField::MinVersion, SortOrder::Ascending, &versions) {
        let raw = experiment.min_version().unwrap_or("-");
        let dot = versions.dot_version(raw).unwrap_or("?");
        println!("   {:24} {raw} -> {dot}", experiment.slug());
    }

    // -------------------------------------------------------------------------
    // 4. Phrase a rejection notice
    // -------------------------------------------------------------------------
    println!("\n4. Rendering a rejection notice...");

    let rejection = RejectionEvent::new(
        "Enrollment window is too short for the target population",
        Utc.with_ymd_and_hms(2021, 12, 2, 10, 30, 0).unwrap(),
        Reviewer::new("reviewer@example.com"),
        Some(Status::Live),
        Some(Status::Live),
    );
    if let Some(notice) = rejection_notice(&rejection, &flows) {
        for line in notice.lines() {
            println!("   {line}");
        }
    }

    println!("\nDone.");
    Ok(())
}
