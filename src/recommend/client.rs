//! HTTP client for the prediction backend.
//!
//! One `POST {base_url}/recommend` per submission, JSON in and JSON out.
//! No retries, no caching.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::source::{RecommendationSource, RequestError};
use super::types::{RecommendRequest, Recommendation};

/// Recommendation source backed by the remote prediction endpoint.
pub struct HttpRecommendationClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpRecommendationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/recommend", self.base_url)
    }
}

#[async_trait]
impl RecommendationSource for HttpRecommendationClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn recommend(
        &self,
        request: &RecommendRequest,
    ) -> Result<Vec<Recommendation>, RequestError> {
        let url = self.endpoint();
        info!(
            "Recommendation request: url={}, year={}, season={}, state={}",
            url, request.crop_year, request.season, request.state
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Recommendation response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                body
            };
            warn!("Recommendation API error: {} - {}", status.as_u16(), message);
            return Err(RequestError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        let recommendations: Vec<Recommendation> =
            serde_json::from_str(&body).map_err(|e| {
                warn!("Unparseable recommendation body ({} bytes): {}", body.len(), e);
                RequestError::Parse(e.to_string())
            })?;

        info!("Received {} recommendations", recommendations.len());
        Ok(recommendations)
    }
}
