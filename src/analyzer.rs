//! End-to-end review analysis.
//!
//! [`ReviewAnalyzer`] wires the category detector, aspect extractor, verdict
//! formatter, theme synthesizer, recommender and confidence estimator into a
//! single call that turns a product name and its reviews into an
//! [`AnalysisResult`]. The analyzer holds no per-call state, so one instance
//! can be shared across threads.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;
use tracing::info;
use utoipa::ToSchema;

use crate::aspects::{verdicts, AspectExtractor, AspectVerdict, GENERAL_ASPECT};
use crate::category::{detect_brand, detect_category, Category};
use crate::confidence::{confidence, AnalysisConfidence};
use crate::config::Settings;
use crate::nlp::{Lemmatizer, LexiconPosTagger, PolarityScorer, PosTagger, RuleLemmatizer, Unavailable};
use crate::recommend::{recommend, Recommendation};
use crate::registry::{AspectRegistry, DEFAULT_REGISTRY};
use crate::review::{clean_text, ingest, Review};
use crate::sentiment::{SentenceClassifier, Sentiment};
use crate::themes::{aspect_summary, extract_themes, overall_feedback, Theme};

pub const NO_REVIEWS_FEEDBACK: &str = "No reviews available for analysis";
pub const NO_REVIEWS_SUMMARY: &str = "No customer feedback found";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    pub product_name: String,
    pub category: Category,
    pub detected_brand: Option<String>,
    pub overall_feedback: String,
    /// Keyed by capitalized aspect name, alphabetical.
    pub aspects: BTreeMap<String, AspectVerdict>,
    pub summary: String,
    pub key_themes: Vec<Theme>,
    pub recommended_products: Vec<Recommendation>,
    pub review_count: usize,
    pub analysis_confidence: AnalysisConfidence,
}

impl AnalysisResult {
    fn empty(product_name: &str, category: Category, detected_brand: Option<String>) -> Self {
        Self {
            product_name: product_name.to_string(),
            category,
            detected_brand,
            overall_feedback: NO_REVIEWS_FEEDBACK.to_string(),
            aspects: BTreeMap::new(),
            summary: NO_REVIEWS_SUMMARY.to_string(),
            key_themes: Vec::new(),
            recommended_products: Vec::new(),
            review_count: 0,
            analysis_confidence: AnalysisConfidence::NoData,
        }
    }
}

pub struct ReviewAnalyzer {
    registry: Cow<'static, AspectRegistry>,
    classifier: SentenceClassifier,
    lemmatizer: Box<dyn Lemmatizer>,
    tagger: Box<dyn PosTagger>,
}

impl Default for ReviewAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewAnalyzer {
    /// Analyzer over the built-in registry with every rule-based backend enabled.
    pub fn new() -> Self {
        Self {
            registry: Cow::Borrowed(&*DEFAULT_REGISTRY),
            classifier: SentenceClassifier::default(),
            lemmatizer: Box::new(RuleLemmatizer::new()),
            tagger: Box::new(LexiconPosTagger::new()),
        }
    }

    /// Every optional backend disabled: lowercase substring matching, no
    /// adjective–noun mining and a lexicon-only sentiment vote.
    pub fn lexicon_only() -> Self {
        Self {
            registry: Cow::Borrowed(&*DEFAULT_REGISTRY),
            classifier: SentenceClassifier::new(Unavailable),
            lemmatizer: Box::new(Unavailable),
            tagger: Box::new(Unavailable),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut analyzer = Self::new();
        if !settings.lemmatizer {
            analyzer = analyzer.with_lemmatizer(Unavailable);
        }
        if !settings.pos_tagger {
            analyzer = analyzer.with_pos_tagger(Unavailable);
        }
        if !settings.polarity {
            analyzer = analyzer.with_polarity(Unavailable);
        }
        analyzer
    }

    /// Replaces the keyword registry. The lemmatizer keeps its own
    /// vocabulary; pair this with [`Self::with_lemmatizer`] when the new
    /// registry introduces keywords the default vocabulary lacks.
    pub fn with_registry(mut self, registry: AspectRegistry) -> Self {
        self.registry = Cow::Owned(registry);
        self
    }

    pub fn with_lemmatizer(mut self, lemmatizer: impl Lemmatizer + 'static) -> Self {
        self.lemmatizer = Box::new(lemmatizer);
        self
    }

    pub fn with_pos_tagger(mut self, tagger: impl PosTagger + 'static) -> Self {
        self.tagger = Box::new(tagger);
        self
    }

    pub fn with_polarity(mut self, scorer: impl PolarityScorer + 'static) -> Self {
        self.classifier = SentenceClassifier::new(scorer);
        self
    }

    pub fn classifier(&self) -> &SentenceClassifier {
        &self.classifier
    }

    pub fn registry(&self) -> &AspectRegistry {
        &self.registry
    }

    /// Raw upstream records (strings or objects) are normalised first;
    /// malformed ones are dropped.
    pub fn analyze_records(&self, product_name: &str, records: &[Value]) -> AnalysisResult {
        self.analyze(product_name, &ingest(records))
    }

    pub fn analyze_texts<S: AsRef<str>>(&self, product_name: &str, texts: &[S]) -> AnalysisResult {
        let reviews: Vec<Review> = texts.iter().map(|t| Review::new(clean_text(t.as_ref()))).collect();
        self.analyze(product_name, &reviews)
    }

    pub fn analyze(&self, product_name: &str, reviews: &[Review]) -> AnalysisResult {
        let category = detect_category(product_name);
        let detected_brand = detect_brand(product_name).map(str::to_string);

        let texts: Vec<String> = reviews
            .iter()
            .map(|r| r.text.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        info!(
            "Analyzing '{}' (category: {}): {} reviews, {} usable",
            product_name,
            category,
            reviews.len(),
            texts.len()
        );

        if texts.is_empty() {
            return AnalysisResult::empty(product_name, category, detected_brand);
        }

        let extractor = AspectExtractor {
            registry: self.registry.as_ref(),
            classifier: &self.classifier,
            lemmatizer: self.lemmatizer.as_ref(),
            tagger: self.tagger.as_ref(),
        };
        let tallies = extractor.extract(&texts, category);
        let aspects = verdicts(&tallies);

        let feedback = overall_feedback(&texts, &self.classifier, &aspects, &self.registry);
        let key_themes = extract_themes(&texts, &self.classifier);

        let weak_aspects: Vec<String> = aspects
            .iter()
            .filter(|(_, v)| v.sentiment == Sentiment::Negative)
            .map(|(name, _)| name.clone())
            .collect();
        let recommended_products = recommend(product_name, category, &weak_aspects);

        let aspect_count = aspects.keys().filter(|name| name.as_str() != GENERAL_ASPECT).count();
        let analysis_confidence = confidence(texts.len(), aspect_count);

        AnalysisResult {
            product_name: product_name.to_string(),
            category,
            detected_brand,
            overall_feedback: feedback,
            summary: aspect_summary(&aspects, &self.registry),
            aspects,
            key_themes,
            recommended_products,
            review_count: texts.len(),
            analysis_confidence,
        }
    }
}
