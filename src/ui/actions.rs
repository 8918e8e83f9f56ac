/// The two user-triggered operations of the console
///
/// Each action is one linear request/response sequence: write an in-progress
/// message, call the backend, then write either the result or an error
/// message into the region. All failures are terminal here; nothing is
/// retried or escalated beyond the region text and a diagnostic log entry.
use crate::{
    api::RecommendationBackend,
    error::ClientError,
    models::RecommendationRequest,
    ui::region::OutputRegion,
};

pub const SEED_IN_PROGRESS: &str = "Loading demo data...";
pub const SEED_FAILED: &str = "Error loading demo data.";
pub const RECS_IN_PROGRESS: &str = "Fetching recommendations...";
pub const RECS_FAILED: &str = "Error fetching recommendations.";
pub const EMPTY_USER_ID: &str = "Enter a user id.";

/// Fallback when an error body carries no `detail` field
const DETAIL_FALLBACK: &str = "error";

/// Seeds demo data on the backend, reporting into the status region
///
/// Reads no input fields. Any failure, HTTP-level or transport-level,
/// collapses to the fixed generic message.
pub async fn seed_demo(backend: &dyn RecommendationBackend, status: &OutputRegion) {
    let ticket = status.begin(SEED_IN_PROGRESS);
    match backend.seed_demo().await {
        Ok(seeded) => {
            ticket.complete(format!("OK: {}", seeded.message));
        }
        Err(e) => {
            tracing::error!(error = %e, "Seed request failed");
            ticket.complete(SEED_FAILED);
        }
    }
}

/// Fetches recommendations for the user id and count typed into the inputs
///
/// An empty (after trimming) user id short-circuits into an inline
/// validation message with no network call. A blank count defaults to "5".
pub async fn fetch_recommendations(
    backend: &dyn RecommendationBackend,
    output: &OutputRegion,
    user_id_input: &str,
    k_input: &str,
) {
    if user_id_input.trim().is_empty() {
        tracing::warn!("Recommendations requested without a user id");
        output.replace(EMPTY_USER_ID);
        return;
    }

    let request = RecommendationRequest::from_inputs(user_id_input, k_input);
    let ticket = output.begin(RECS_IN_PROGRESS);

    match backend.recommendations(&request).await {
        Ok(payload) => {
            ticket.complete(render_payload(&payload));
        }
        Err(ClientError::Api { status, detail }) => {
            ticket.complete(format!(
                "Error: {} - {}",
                status,
                detail.as_deref().unwrap_or(DETAIL_FALLBACK)
            ));
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                user_id = %request.user_id,
                "Recommendations request failed"
            );
            ticket.complete(RECS_FAILED);
        }
    }
}

/// Pretty-prints a payload for display, verbatim and unvalidated
fn render_payload(payload: &serde_json::Value) -> String {
    serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
}
