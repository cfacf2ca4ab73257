//! Aspect-based product review analysis.
//!
//! Given a product name and its reviews, [`ReviewAnalyzer`] infers the
//! product category, extracts per-aspect sentiment scoped to that category,
//! picks out cross-cutting themes, and suggests competing brands when an
//! aspect draws complaints.
//!
//! ```no_run
//! use review_insights::ReviewAnalyzer;
//!
//! let analyzer = ReviewAnalyzer::new();
//! let result = analyzer.analyze_texts("Samsung Galaxy M34 5G", &["Excellent battery life!"]);
//! println!("{}", result.overall_feedback);
//! ```

pub mod analyzer;
pub mod api;
pub mod aspects;
pub mod authenticity;
pub mod category;
pub mod confidence;
pub mod config;
pub mod nlp;
pub mod recommend;
pub mod registry;
pub mod review;
pub mod sentiment;
pub mod stats;
pub mod themes;

pub use analyzer::{AnalysisResult, ReviewAnalyzer};
pub use category::{detect_brand, detect_category, Category};
pub use confidence::AnalysisConfidence;
pub use review::Review;
pub use sentiment::{SentenceClassifier, Sentiment};
