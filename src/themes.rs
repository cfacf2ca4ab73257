//! Cross-category feedback themes and narrative summaries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::aspects::AspectVerdict;
use crate::category::capitalize;
use crate::registry::AspectRegistry;
use crate::sentiment::{SentenceClassifier, Sentiment};

/// Maximum number of themes reported.
pub const MAX_THEMES: usize = 5;

const THEME_PATTERNS: &[(&str, &[&str])] = &[
    ("Value for Money", &["value", "price", "worth", "money", "vfm"]),
    ("Build Quality", &["quality", "build", "premium", "material", "construction"]),
    ("User Experience", &["experience", "easy", "user", "interface", "usability"]),
    ("Reliability", &["reliable", "durable", "lasting", "trust", "dependable"]),
    ("After Sales", &["service", "support", "warranty", "replacement", "customer"]),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Theme {
    pub theme: String,
    pub sentiment: Sentiment,
    pub reason: String,
    pub mention_count: usize,
}

/// Themes mentioned by at least one review, most mentioned first, at most
/// [`MAX_THEMES`]. Ties keep table order.
pub fn extract_themes(reviews: &[String], classifier: &SentenceClassifier) -> Vec<Theme> {
    let mut themes: Vec<Theme> = THEME_PATTERNS
        .iter()
        .filter_map(|(name, keywords)| {
            let mentions: Vec<&String> = reviews
                .iter()
                .filter(|r| {
                    let lowered = r.to_lowercase();
                    keywords.iter().any(|k| lowered.contains(k))
                })
                .collect();
            if mentions.is_empty() {
                return None;
            }

            let (sentiment, reason) = theme_sentiment(&mentions, classifier);
            Some(Theme {
                theme: name.to_string(),
                sentiment,
                reason,
                mention_count: mentions.len(),
            })
        })
        .collect();

    themes.sort_by(|a, b| b.mention_count.cmp(&a.mention_count));
    themes.truncate(MAX_THEMES);
    themes
}

fn theme_sentiment(mentions: &[&String], classifier: &SentenceClassifier) -> (Sentiment, String) {
    let (mut positive, mut negative) = (0usize, 0usize);
    for mention in mentions {
        match classifier.classify(mention) {
            Sentiment::Positive => positive += 1,
            Sentiment::Negative => negative += 1,
            Sentiment::Neutral => {}
        }
    }
    let total = mentions.len();

    if positive > negative {
        (Sentiment::Positive, format!("Positive feedback in {}/{} reviews", positive, total))
    } else if negative > positive {
        (Sentiment::Negative, format!("Concerns raised in {}/{} reviews", negative, total))
    } else {
        (Sentiment::Neutral, format!("Mixed opinions across {} reviews", total))
    }
}

/// One-paragraph verdict built from the share of positive and negative
/// reviews plus the strongest and weakest aspects, named in registry order.
pub fn overall_feedback(
    reviews: &[String],
    classifier: &SentenceClassifier,
    aspects: &BTreeMap<String, AspectVerdict>,
    registry: &AspectRegistry,
) -> String {
    let (mut positive, mut negative) = (0usize, 0usize);
    for review in reviews {
        match classifier.classify(review) {
            Sentiment::Positive => positive += 1,
            Sentiment::Negative => negative += 1,
            Sentiment::Neutral => {}
        }
    }
    let total = reviews.len().max(1) as f64;
    let pos_pct = positive as f64 / total * 100.0;
    let neg_pct = negative as f64 / total * 100.0;

    let ordered = registry_order(aspects, registry);
    let strengths = aspect_names(&ordered, Sentiment::Positive);
    let weaknesses = aspect_names(&ordered, Sentiment::Negative);

    let mut feedback = String::new();
    if pos_pct > 60.0 {
        feedback.push_str(&format!("Highly recommended product with {:.0}% positive reviews. ", pos_pct));
        if !strengths.is_empty() {
            feedback.push_str(&format!("Strong points: {}. ", join_first(&strengths, 3)));
        }
        if !weaknesses.is_empty() {
            feedback.push_str(&format!("Minor concerns: {}.", join_first(&weaknesses, 2)));
        }
    } else if neg_pct > 50.0 {
        feedback.push_str(&format!("Product has significant issues ({:.0}% negative reviews). ", neg_pct));
        if !weaknesses.is_empty() {
            feedback.push_str(&format!("Main problems: {}. ", join_first(&weaknesses, 3)));
        }
        feedback.push_str("Consider alternatives carefully.");
    } else {
        feedback.push_str(&format!(
            "Mixed reviews ({:.0}% positive, {:.0}% negative). ",
            pos_pct, neg_pct
        ));
        if !strengths.is_empty() {
            feedback.push_str(&format!("Strengths: {}. ", join_first(&strengths, 2)));
        }
        if !weaknesses.is_empty() {
            feedback.push_str(&format!("Weaknesses: {}.", join_first(&weaknesses, 2)));
        }
    }

    feedback.trim().to_string()
}

/// Up to five bullet lines, most mentioned aspects first. Ties keep
/// registry order.
pub fn aspect_summary(aspects: &BTreeMap<String, AspectVerdict>, registry: &AspectRegistry) -> String {
    let mut ranked = registry_order(aspects, registry);
    ranked.sort_by(|a, b| b.1.count.cmp(&a.1.count));

    let lines: Vec<String> = ranked
        .into_iter()
        .take(5)
        .map(|(name, verdict)| {
            format!("• {}: {} - {}", name, capitalize(verdict.sentiment.as_str()), verdict.reason)
        })
        .collect();

    if lines.is_empty() {
        "Limited feedback available".to_string()
    } else {
        lines.join("\n")
    }
}

/// Registered aspects in registration order, then mined ones alphabetically.
fn registry_order<'a>(
    aspects: &'a BTreeMap<String, AspectVerdict>,
    registry: &AspectRegistry,
) -> Vec<(&'a str, &'a AspectVerdict)> {
    let mut ordered: Vec<(&str, &AspectVerdict)> = aspects.iter().map(|(n, v)| (n.as_str(), v)).collect();
    ordered.sort_by_key(|(name, _)| registry.position(name).unwrap_or(usize::MAX));
    ordered
}

fn aspect_names<'a>(ordered: &[(&'a str, &AspectVerdict)], sentiment: Sentiment) -> Vec<&'a str> {
    ordered
        .iter()
        .filter(|(_, v)| v.sentiment == sentiment)
        .map(|(name, _)| *name)
        .collect()
}

fn join_first(names: &[&str], n: usize) -> String {
    names.iter().take(n).copied().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::Distribution;
    use crate::registry::DEFAULT_REGISTRY;

    fn reviews(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    fn verdict(sentiment: Sentiment, count: usize) -> AspectVerdict {
        AspectVerdict {
            sentiment,
            reason: format!("{} x{}", sentiment, count),
            count,
            distribution: Distribution::default(),
        }
    }

    #[test]
    fn test_themes_sorted_by_mentions() {
        let classifier = SentenceClassifier::default();
        let themes = extract_themes(
            &reviews(&[
                "Great value for money",
                "Worth the price, good build",
                "Customer service was terrible",
            ]),
            &classifier,
        );
        assert_eq!(themes[0].theme, "Value for Money");
        assert_eq!(themes[0].mention_count, 2);
        assert_eq!(themes[0].sentiment, Sentiment::Positive);
        assert_eq!(themes[0].reason, "Positive feedback in 2/2 reviews");

        let after_sales = themes.iter().find(|t| t.theme == "After Sales").unwrap();
        assert_eq!(after_sales.sentiment, Sentiment::Negative);
        assert_eq!(after_sales.reason, "Concerns raised in 1/1 reviews");
        assert!(themes.iter().all(|t| t.theme != "Reliability"));
    }

    #[test]
    fn test_theme_tie_is_neutral() {
        let classifier = SentenceClassifier::default();
        let themes = extract_themes(&reviews(&["Great build", "Terrible build"]), &classifier);
        assert_eq!(themes.len(), 1);
        assert_eq!(themes[0].sentiment, Sentiment::Neutral);
        assert_eq!(themes[0].reason, "Mixed opinions across 2 reviews");
    }

    #[test]
    fn test_no_themes_without_keywords() {
        let classifier = SentenceClassifier::default();
        assert!(extract_themes(&reviews(&["good"]), &classifier).is_empty());
    }

    #[test]
    fn test_overall_feedback_branches() {
        let classifier = SentenceClassifier::default();
        let mut aspects = BTreeMap::new();
        aspects.insert("Battery".to_string(), verdict(Sentiment::Positive, 3));
        aspects.insert("Heating".to_string(), verdict(Sentiment::Negative, 1));

        let praise = overall_feedback(
            &reviews(&["great", "excellent", "good"]),
            &classifier,
            &aspects,
            &DEFAULT_REGISTRY,
        );
        assert_eq!(
            praise,
            "Highly recommended product with 100% positive reviews. Strong points: Battery. Minor concerns: Heating."
        );

        let warning = overall_feedback(
            &reviews(&["terrible", "awful", "fine"]),
            &classifier,
            &aspects,
            &DEFAULT_REGISTRY,
        );
        assert!(warning.starts_with("Product has significant issues (67% negative reviews)."));
        assert!(warning.contains("Main problems: Heating."));
        assert!(warning.ends_with("Consider alternatives carefully."));

        let mixed = overall_feedback(
            &reviews(&["great", "terrible"]),
            &classifier,
            &aspects,
            &DEFAULT_REGISTRY,
        );
        assert_eq!(
            mixed,
            "Mixed reviews (50% positive, 50% negative). Strengths: Battery. Weaknesses: Heating."
        );
    }

    #[test]
    fn test_aspects_named_in_registry_order() {
        let classifier = SentenceClassifier::default();
        let mut aspects = BTreeMap::new();
        for name in ["Battery", "Camera", "Design", "Display", "Plastic"] {
            aspects.insert(name.to_string(), verdict(Sentiment::Positive, 1));
        }
        let praise = overall_feedback(
            &reviews(&["great"]),
            &classifier,
            &aspects,
            &DEFAULT_REGISTRY,
        );
        assert_eq!(
            praise,
            "Highly recommended product with 100% positive reviews. Strong points: Battery, Display, Design."
        );

        let summary = aspect_summary(&aspects, &DEFAULT_REGISTRY);
        let names: Vec<&str> = summary
            .lines()
            .map(|l| l.trim_start_matches("• ").split(':').next().unwrap_or(""))
            .collect();
        assert_eq!(names, vec!["Battery", "Display", "Design", "Camera", "Plastic"]);
    }

    #[test]
    fn test_summary_orders_by_count() {
        let mut aspects = BTreeMap::new();
        aspects.insert("Battery".to_string(), verdict(Sentiment::Positive, 1));
        aspects.insert("Display".to_string(), verdict(Sentiment::Negative, 4));
        let summary = aspect_summary(&aspects, &DEFAULT_REGISTRY);
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines[0], "• Display: Negative - negative x4");
        assert_eq!(lines[1], "• Battery: Positive - positive x1");
        assert_eq!(aspect_summary(&BTreeMap::new(), &DEFAULT_REGISTRY), "Limited feedback available");
    }
}
