//! Action labels and redirect decisions
//!
//! The decision tables the console screens consume: which summary label to
//! show, whether an edit page must bounce to the summary view, and how to
//! phrase a rejection notice. All pure; the embedding router and view layer
//! perform the actual navigation and rendering.

use crate::experiment::{human_date, RejectionEvent, Status};

use super::{FlowCatalog, ReviewFlow, StatusFlags};

/// Literal label for an experiment that has not requested anything yet.
pub const REQUEST_LAUNCH_LABEL: &str = "Request Launch";

/// Summary-page action label for an experiment.
///
/// First match wins:
/// 1. A publish review in flight: the pending flow's requester- or
///    reviewer-facing summary, by `can_review`.
/// 2. Not launched and not archived: [`REQUEST_LAUNCH_LABEL`].
/// 3. Otherwise no label.
#[must_use]
pub fn summary_action_label<'a>(
    flags: &StatusFlags,
    can_review: bool,
    flows: &'a FlowCatalog,
) -> Option<&'a str> {
    if flags.has_pending_review() {
        let labels = flows.labels(ReviewFlow::from_flags(flags));
        let label = if can_review {
            labels.review_summary.as_str()
        } else {
            labels.request_summary.as_str()
        };
        return Some(label);
    }

    if !flags.launched && !flags.is_archived() {
        return Some(REQUEST_LAUNCH_LABEL);
    }
    None
}

/// Whether an edit page must redirect to the summary view.
///
/// True once the experiment is launched, whenever a publish workflow is in
/// flight, in preview, or archived. The embedding router performs the
/// navigation; this only yields the decision.
#[must_use]
pub fn requires_summary_redirect(flags: &StatusFlags) -> bool {
    flags.launched || !flags.idle || flags.preview || flags.is_archived()
}

/// Describe the action a reviewer rejected, from the status pair recorded
/// with the rejection.
///
/// Live + Live was a pause request, Live + anything else an end request,
/// Draft a launch request. Other pairs carry no defined request semantics
/// and yield `None`; the notice simply renders without a description.
#[must_use]
pub fn rejection_action_description<'a>(
    old_status: Option<Status>,
    old_status_next: Option<Status>,
    flows: &'a FlowCatalog,
) -> Option<&'a str> {
    match old_status {
        Some(Status::Live) => {
            let flow = if old_status_next == Some(Status::Live) {
                ReviewFlow::Pause
            } else {
                ReviewFlow::End
            };
            Some(flows.labels(flow).description.as_str())
        }
        Some(Status::Draft) => Some(flows.labels(ReviewFlow::Launch).description.as_str()),
        _ => None,
    }
}

/// Render the full human-facing rejection notice.
///
/// Returns `None` when the recorded status pair has no describable action.
#[must_use]
pub fn rejection_notice(event: &RejectionEvent, flows: &FlowCatalog) -> Option<String> {
    let description =
        rejection_action_description(event.old_status(), event.old_status_next(), flows)?;
    Some(format!(
        "The request to {description} was Rejected due to:\n{email} on {date}:\n{message}",
        email = event.changed_by().email(),
        date = human_date(event.changed_on()),
        message = event.message(),
    ))
}
