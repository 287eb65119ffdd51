//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::core::config::ResolvedConfig;
use crate::core::form::FormFields;
use crate::core::state::App;
use crate::recommend::{RecommendRequest, Recommendation, RecommendationSource, RequestError};

/// A source that answers every request with a fixed result.
pub struct StubSource {
    pub result: Result<Vec<Recommendation>, RequestError>,
}

#[async_trait]
impl RecommendationSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn recommend(
        &self,
        _request: &RecommendRequest,
    ) -> Result<Vec<Recommendation>, RequestError> {
        self.result.clone()
    }
}

/// Creates a test App backed by a stub that returns no recommendations.
pub fn test_app() -> App {
    App::new(
        Arc::new(StubSource { result: Ok(vec![]) }),
        &ResolvedConfig::default(),
    )
}

/// A test App whose form passes validation.
pub fn filled_app() -> App {
    let mut app = test_app();
    app.form = FormFields {
        crop_year: "2024".to_string(),
        season: "Kharif".to_string(),
        state: "Punjab".to_string(),
        area: "10".to_string(),
        fertilizer: "50".to_string(),
        pesticide: "5".to_string(),
        annual_rainfall: String::new(),
    };
    app
}
