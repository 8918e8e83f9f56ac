/// HTTP implementation of the recommendation backend
///
/// Wire contract:
/// - `POST /demo/seed` — no body; success returns `{"message": ...}`.
/// - `GET /recommendations/{user_id}?k={k}` — success returns arbitrary JSON;
///   failure returns a status code plus an optional `{"detail": ...}` body.
///
/// Every request carries a generated `x-request-id` header so client and
/// backend logs can be correlated; the backend is free to ignore it.
use crate::{
    api::RecommendationBackend,
    error::{ClientError, ClientResult},
    models::{ApiErrorBody, RecommendationRequest, SeedResponse},
};
use reqwest::Client as HttpClient;
use url::Url;
use uuid::Uuid;

/// HTTP header name for the request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
pub struct HttpBackend {
    http_client: HttpClient,
    base_url: Url,
}

impl HttpBackend {
    /// Creates a backend client for the given base URL
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let base_url = Url::parse(base_url)?;
        Ok(Self {
            http_client: HttpClient::new(),
            base_url,
        })
    }

    /// Builds an endpoint URL, percent-encoding each path segment
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Converts a non-success response into the API error branch
    ///
    /// The error body is parsed tolerantly: a missing or malformed body
    /// yields `detail: None` rather than a decode error.
    fn api_error(request_id: Uuid, status: reqwest::StatusCode, body: &str) -> ClientError {
        let detail = serde_json::from_str::<ApiErrorBody>(body)
            .unwrap_or_default()
            .detail;
        tracing::warn!(
            request_id = %request_id,
            status = status.as_u16(),
            detail = ?detail,
            "Backend returned an error status"
        );
        ClientError::Api {
            status: status.as_u16(),
            detail,
        }
    }
}

#[async_trait::async_trait]
impl RecommendationBackend for HttpBackend {
    async fn seed_demo(&self) -> ClientResult<SeedResponse> {
        let request_id = Uuid::new_v4();
        let url = self.endpoint(&["demo", "seed"])?;

        let response = self
            .http_client
            .post(url)
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::api_error(request_id, status, &body));
        }

        let seeded: SeedResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                request_id = %request_id,
                error = %e,
                body = %body,
                "Failed to decode seed response"
            );
            e
        })?;

        tracing::info!(
            request_id = %request_id,
            message = %seeded.message,
            "Demo data seeded"
        );

        Ok(seeded)
    }

    async fn recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> ClientResult<serde_json::Value> {
        let request_id = Uuid::new_v4();
        let mut url = self.endpoint(&["recommendations", &request.user_id])?;
        url.query_pairs_mut().append_pair("k", &request.k);

        let response = self
            .http_client
            .get(url)
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::api_error(request_id, status, &body));
        }

        let payload: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                request_id = %request_id,
                error = %e,
                body = %body,
                "Failed to decode recommendations response"
            );
            e
        })?;

        tracing::info!(
            request_id = %request_id,
            user_id = %request.user_id,
            k = %request.k,
            "Recommendations fetched"
        );

        Ok(payload)
    }
}
