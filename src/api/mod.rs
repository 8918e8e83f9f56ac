/// Recommendation backend abstraction
///
/// The console only ever talks to the backend through this trait, which keeps
/// the UI actions testable without a live server and leaves room for
/// alternate transports.
use crate::{
    error::ClientResult,
    models::{RecommendationRequest, SeedResponse},
};

pub mod http;

pub use http::HttpBackend;

/// Trait for the recommendation backend reachable over the two endpoints
///
/// `seed_demo` populates demo records on the backend; `recommendations`
/// fetches the top-k items for a user. Both payloads are owned by the
/// backend: the seed response is opaque beyond its `message` field, and the
/// recommendations body is arbitrary JSON rendered verbatim.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationBackend: Send + Sync {
    /// Ask the backend to seed its demo data
    async fn seed_demo(&self) -> ClientResult<SeedResponse>;

    /// Fetch recommendations for a user
    ///
    /// Returns the raw JSON payload; callers decide how to present it.
    async fn recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> ClientResult<serde_json::Value>;
}
