use std::future::Future;

use reqwest::Url;
use thiserror::Error;
use tracing::debug;
use tripplan_types::{PlanResponse, TripRequestPayload};

const PLAN_TRIP_PATH: &str = "plan-trip";

/// Why a request to the planning service did not produce a usable response
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid planning service URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Planning service returned HTTP {0}")]
    Status(u16),

    #[error("Request to planning service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Planning service returned malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Something that turns a validated trip request into a plan
pub trait PlanningService {
    fn plan_trip(
        &self,
        payload: &TripRequestPayload,
    ) -> impl Future<Output = Result<PlanResponse, PlanError>> + Send;
}

/// HTTP client for `POST {base_url}/plan-trip`.
///
/// No retries and no timeout: one attempt per call.
#[derive(Debug, Clone)]
pub struct HttpPlanningClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpPlanningClient {
    pub fn new(base_url: &str) -> Result<Self, PlanError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, PlanError> {
        let endpoint = endpoint_for(base_url)?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl PlanningService for HttpPlanningClient {
    async fn plan_trip(&self, payload: &TripRequestPayload) -> Result<PlanResponse, PlanError> {
        debug!(endpoint = %self.endpoint, origin = %payload.origin, destination = %payload.destination, "sending trip request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlanError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let value: serde_json::Value = serde_json::from_slice(&body)?;
        debug!(status = status.as_u16(), bytes = body.len(), "planning service responded");

        Ok(PlanResponse::new(value))
    }
}

/// Planning client whose base URL is checked per request instead of up front.
///
/// A front end can keep a form usable with a misconfigured URL; the problem
/// surfaces as [`PlanError::InvalidBaseUrl`] from the first submission.
#[derive(Debug, Clone)]
pub struct DeferredPlanningClient {
    base_url: String,
    client: Result<HttpPlanningClient, String>,
}

impl DeferredPlanningClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let client = HttpPlanningClient::new(&base_url).map_err(|err| match err {
            PlanError::InvalidBaseUrl { reason, .. } => reason,
            other => other.to_string(),
        });
        Self { base_url, client }
    }

    /// The resolved endpoint, when the base URL is usable
    pub fn endpoint(&self) -> Option<&Url> {
        self.client.as_ref().ok().map(HttpPlanningClient::endpoint)
    }
}

impl PlanningService for DeferredPlanningClient {
    async fn plan_trip(&self, payload: &TripRequestPayload) -> Result<PlanResponse, PlanError> {
        match &self.client {
            Ok(client) => client.plan_trip(payload).await,
            Err(reason) => Err(PlanError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: reason.clone(),
            }),
        }
    }
}

/// Build the `/plan-trip` URL, ignoring a trailing slash on the base
fn endpoint_for(base_url: &str) -> Result<Url, PlanError> {
    let invalid = |reason: String| PlanError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let trimmed = base_url.trim().trim_end_matches('/');
    let base = Url::parse(&format!("{}/", trimmed)).map_err(|e| invalid(e.to_string()))?;

    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", base.scheme())));
    }

    base.join(PLAN_TRIP_PATH)
        .map_err(|e| invalid(e.to_string()))
}
