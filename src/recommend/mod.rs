pub mod client;
pub mod source;
pub mod types;

pub use client::HttpRecommendationClient;
pub use source::{RecommendationSource, RequestError};
pub use types::{RecommendRequest, Recommendation};
