//! Reliability rating for an analysis.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AnalysisConfidence {
    High,
    Medium,
    Low,
    /// No reviews were analysed.
    #[serde(rename = "None")]
    NoData,
}

/// Rates an analysis from its review volume and aspect coverage.
/// `aspect_count` must not include the `General` placeholder.
pub fn confidence(review_count: usize, aspect_count: usize) -> AnalysisConfidence {
    if review_count >= 20 && aspect_count >= 5 {
        AnalysisConfidence::High
    } else if review_count >= 10 && aspect_count >= 3 {
        AnalysisConfidence::Medium
    } else {
        AnalysisConfidence::Low
    }
}
