use serde::{Deserialize, Serialize};

/// The validated, type-coerced form data sent to the prediction endpoint.
///
/// Only `core::validate::validate` builds one of these, so every value that
/// leaves the client has already passed the range checks.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RecommendRequest {
    #[serde(rename = "Crop_Year")]
    pub crop_year: i32,
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Area")]
    pub area: f64,
    #[serde(rename = "Fertilizer")]
    pub fertilizer: f64,
    #[serde(rename = "Pesticide")]
    pub pesticide: f64,
    /// Serialized as `null` when absent; the backend expects the key.
    #[serde(rename = "Annual_Rainfall")]
    pub annual_rainfall: Option<f64>,
}

/// One (crop, probability) pair returned by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Recommendation {
    #[serde(rename = "Crop")]
    pub crop: String,
    #[serde(rename = "Probability")]
    pub probability: f64,
}

impl Recommendation {
    pub fn new(crop: impl Into<String>, probability: f64) -> Self {
        Self {
            crop: crop.into(),
            probability,
        }
    }
}
