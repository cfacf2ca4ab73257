use axum::{
    routing::{get, post},
    Router,
};
use dotenv::dotenv;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use review_insights::{analyzer, api, aspects, category, confidence, config::Settings, recommend, sentiment, stats, themes};

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health,
        api::analyze,
        api::sentiment,
        api::category
    ),
    components(
        schemas(
            api::HealthResponse,
            api::AnalyzeRequest,
            api::AnalyzeResponse,
            api::SentimentRequest,
            api::CategoryResponse,
            analyzer::AnalysisResult,
            aspects::AspectVerdict,
            aspects::Distribution,
            themes::Theme,
            recommend::Recommendation,
            category::Category,
            confidence::AnalysisConfidence,
            sentiment::Sentiment,
            sentiment::SentenceScore,
            stats::ReviewStats,
            stats::SentimentShare
        )
    ),
    tags(
        (name = "analysis", description = "Review Analysis API"),
        (name = "system", description = "Service Health")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let settings = Settings::from_env()?;
    info!(
        "Analyzer backends: lemmatizer={}, pos_tagger={}, polarity={}",
        settings.lemmatizer, settings.pos_tagger, settings.polarity
    );
    let bind_addr = settings.bind_addr.clone();
    let state = Arc::new(api::AppState::from_settings(settings));

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(api::health))
        .route("/analyze", post(api::analyze))
        .route("/sentiment", post(api::sentiment))
        .route("/category/:product_name", get(api::category))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
