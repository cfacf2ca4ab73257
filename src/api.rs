//! HTTP handlers over the analysis core.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::analyzer::{AnalysisResult, ReviewAnalyzer};
use crate::category::{detect_brand, detect_category, Category};
use crate::config::Settings;
use crate::review::ingest;
use crate::sentiment::SentenceScore;
use crate::stats::{review_stats, ReviewStats};

pub struct AppState {
    pub analyzer: ReviewAnalyzer,
    pub settings: Settings,
}

impl AppState {
    pub fn from_settings(settings: Settings) -> Self {
        Self {
            analyzer: ReviewAnalyzer::from_settings(&settings),
            settings,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    pub product_name: String,
    /// Plain strings or objects carrying `review_text`, `review`, `text`,
    /// `body` or `content`, plus optional `rating`, `reviewer`, `date` and
    /// `source`.
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub reviews: Vec<Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub analysis: AnalysisResult,
    pub stats: ReviewStats,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SentimentRequest {
    pub text: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub product_name: String,
    pub category: Category,
    pub detected_brand: Option<String>,
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "system"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Aspect analysis and review statistics", body = AnalyzeResponse),
        (status = 413, description = "Too many reviews in one request")
    ),
    tag = "analysis"
)]
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, StatusCode> {
    let limit = state.settings.max_reviews_per_request;
    if req.reviews.len() > limit {
        warn!("Rejected analysis of {} reviews (limit {})", req.reviews.len(), limit);
        return Err(StatusCode::PAYLOAD_TOO_LARGE);
    }

    let reviews = ingest(&req.reviews);
    let analysis = state.analyzer.analyze(&req.product_name, &reviews);
    let stats = review_stats(&reviews, state.analyzer.classifier());

    let analysis_id = Uuid::new_v4();
    info!(
        "Analysis {} for '{}': {} aspects, confidence {:?}",
        analysis_id,
        analysis.product_name,
        analysis.aspects.len(),
        analysis.analysis_confidence
    );

    Ok(Json(AnalyzeResponse {
        analysis_id,
        generated_at: Utc::now(),
        analysis,
        stats,
    }))
}

#[utoipa::path(
    post,
    path = "/sentiment",
    request_body = SentimentRequest,
    responses((status = 200, description = "Sentence-level sentiment", body = SentenceScore)),
    tag = "analysis"
)]
pub async fn sentiment(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SentimentRequest>,
) -> Json<SentenceScore> {
    Json(state.analyzer.classifier().score(&req.text))
}

#[utoipa::path(
    get,
    path = "/category/{product_name}",
    params(("product_name" = String, Path, description = "Product name as listed by the seller")),
    responses((status = 200, description = "Detected category and brand", body = CategoryResponse)),
    tag = "analysis"
)]
pub async fn category(Path(product_name): Path<String>) -> Json<CategoryResponse> {
    Json(CategoryResponse {
        category: detect_category(&product_name),
        detected_brand: detect_brand(&product_name).map(str::to_string),
        product_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confidence::AnalysisConfidence;
    use crate::sentiment::Sentiment;
    use serde_json::json;

    fn state(max_reviews: usize) -> Arc<AppState> {
        Arc::new(AppState::from_settings(Settings {
            max_reviews_per_request: max_reviews,
            ..Settings::default()
        }))
    }

    #[tokio::test]
    async fn test_health() {
        let Json(body) = health().await;
        assert_eq!(body.status, "ok");
        assert!(!body.version.is_empty());
    }

    #[tokio::test]
    async fn test_analyze_returns_analysis_and_stats() {
        let req = AnalyzeRequest {
            product_name: "Samsung Galaxy M34 5G".to_string(),
            reviews: vec![
                json!({"review_text": "Excellent battery life! Lasts 2 days easily.", "rating": 5}),
                json!("Display is vibrant and bright. AMOLED quality is superb."),
                json!({"body": "Heats during heavy gaming.", "rating": "2"}),
                json!({"rating": 4}),
            ],
        };
        let Json(body) = analyze(State(state(100)), Json(req)).await.unwrap();

        assert_eq!(body.analysis.review_count, 3);
        assert_eq!(body.analysis.category, Category::Mobile);
        assert!(body.analysis.aspects.contains_key("Battery"));
        assert_eq!(body.stats.total_reviews, 3);
        assert_eq!(body.stats.rated_reviews, 2);
        assert_eq!(body.stats.average_rating, Some(3.5));
        assert_eq!(body.analysis_id.get_version_num(), 4);
    }

    #[tokio::test]
    async fn test_analyze_without_reviews() {
        let req = AnalyzeRequest {
            product_name: "Unknown Gadget".to_string(),
            reviews: Vec::new(),
        };
        let Json(body) = analyze(State(state(100)), Json(req)).await.unwrap();
        assert_eq!(body.analysis.analysis_confidence, AnalysisConfidence::NoData);
        assert_eq!(body.stats.summary_text, "No reviews available.");
    }

    #[tokio::test]
    async fn test_analyze_rejects_oversized_batches() {
        let req = AnalyzeRequest {
            product_name: "Samsung phone".to_string(),
            reviews: vec![json!("Great phone"); 3],
        };
        let status = analyze(State(state(2)), Json(req)).await.unwrap_err();
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_sentiment_endpoint() {
        let req = SentimentRequest {
            text: "Terrible phone, total waste of money.".to_string(),
        };
        let Json(score) = sentiment(State(state(100)), Json(req)).await;
        assert_eq!(score.sentiment, Sentiment::Negative);
        assert!(score.negative_hits >= 2);
    }

    #[tokio::test]
    async fn test_category_endpoint() {
        let Json(body) = category(Path("Dell Inspiron 15 laptop".to_string())).await;
        assert_eq!(body.category, Category::Laptop);
        assert_eq!(body.detected_brand.as_deref(), Some("Dell"));

        let Json(body) = category(Path("mystery box".to_string())).await;
        assert_eq!(body.category, Category::General);
        assert_eq!(body.detected_brand, None);
    }

    #[test]
    fn test_request_accepts_missing_reviews() {
        let req: AnalyzeRequest = serde_json::from_value(json!({"product_name": "Boat Airdopes"})).unwrap();
        assert!(req.reviews.is_empty());
    }
}
