//! Review flows and their display labels
//!
//! Every reviewable transition belongs to one of three flows. The wording
//! for each flow lives in a [`FlowCatalog`] the embedding console passes in,
//! keeping the classifier functions pure and the copy swappable without a
//! code change. [`FlowCatalog::default`] carries the console's stock wording.

use serde::{Deserialize, Serialize};

use super::StatusFlags;

/// A reviewable lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewFlow {
    /// Take a draft experiment live.
    Launch,
    /// Stop enrolling new clients while staying live.
    Pause,
    /// End a live experiment.
    End,
}

impl ReviewFlow {
    /// Pick the flow a pending review is about, from derived flags.
    ///
    /// Pause wins over End; Launch is the default when neither request flag
    /// is set.
    #[must_use]
    pub const fn from_flags(flags: &StatusFlags) -> Self {
        if flags.pause_requested {
            Self::Pause
        } else if flags.end_requested {
            Self::End
        } else {
            Self::Launch
        }
    }
}

/// Display strings for one review flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowLabels {
    /// Verb phrase naming the action ("launch this experiment").
    pub description: String,
    /// Requester-facing summary shown while review is pending.
    pub request_summary: String,
    /// Reviewer-facing summary prompting the review.
    pub review_summary: String,
    /// Label for the action button that starts the flow.
    pub button_title: String,
}

impl FlowLabels {
    fn new(
        description: &str,
        request_summary: &str,
        review_summary: &str,
        button_title: &str,
    ) -> Self {
        Self {
            description: description.to_string(),
            request_summary: request_summary.to_string(),
            review_summary: review_summary.to_string(),
            button_title: button_title.to_string(),
        }
    }
}

/// Label table for all three review flows.
///
/// Supplied by the embedding console; the core only indexes into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowCatalog {
    launch: FlowLabels,
    pause: FlowLabels,
    end: FlowLabels,
}

impl FlowCatalog {
    /// Build a catalog from explicit per-flow labels.
    #[must_use]
    pub const fn new(launch: FlowLabels, pause: FlowLabels, end: FlowLabels) -> Self {
        Self { launch, pause, end }
    }

    /// Get the labels for a flow.
    #[must_use]
    pub const fn labels(&self, flow: ReviewFlow) -> &FlowLabels {
        match flow {
            ReviewFlow::Launch => &self.launch,
            ReviewFlow::Pause => &self.pause,
            ReviewFlow::End => &self.end,
        }
    }
}

impl Default for FlowCatalog {
    /// The console's stock wording.
    fn default() -> Self {
        Self {
            launch: FlowLabels::new(
                "launch this experiment",
                "Requested Launch",
                "Review Launch Request",
                "Launch Experiment",
            ),
            pause: FlowLabels::new(
                "end enrollment for this experiment",
                "Requested End Enrollment",
                "Review End Enrollment Request",
                "End Enrollment for Experiment",
            ),
            end: FlowLabels::new(
                "end this experiment",
                "Requested End",
                "Review End Request",
                "End Experiment",
            ),
        }
    }
}
