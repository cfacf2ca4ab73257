//! Aspect extraction and verdict formatting.
//!
//! Every review is classified once, then matched against the aspect keywords
//! that are active for the product category. Each matching aspect records the
//! review's sentiment. An optional second pass mines adjective–noun pairs
//! ("cheap plastic") and records the noun as an ad-hoc aspect.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, warn};
use utoipa::ToSchema;

use crate::category::{capitalize, Category};
use crate::nlp::{words, Lemmatizer, PosTag, PosTagger};
use crate::registry::AspectRegistry;
use crate::sentiment::{is_negative_word, is_positive_word, SentenceClassifier, Sentiment};

/// Length, in characters, of the review excerpt kept per mention.
pub const EXCERPT_CHARS: usize = 150;

/// Name and reason of the placeholder aspect used when nothing matched.
pub const GENERAL_ASPECT: &str = "General";
pub const GENERAL_REASON: &str = "No specific aspects identified in reviews";

/// Running counts for one aspect during a single analysis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AspectTally {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub mentions: Vec<String>,
}

impl AspectTally {
    pub fn record(&mut self, sentiment: Sentiment, review: &str) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
        self.mentions.push(excerpt(review));
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Distribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl Distribution {
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AspectVerdict {
    pub sentiment: Sentiment,
    pub reason: String,
    pub count: usize,
    pub distribution: Distribution,
}

impl AspectVerdict {
    fn general() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            reason: GENERAL_REASON.to_string(),
            count: 0,
            distribution: Distribution::default(),
        }
    }
}

/// Turns a tally into a verdict.
///
/// A sentiment wins only with a strict majority: `positive / total > 0.5`,
/// else `negative / total > 0.5`, else neutral. An exact 0.5 split is
/// therefore neutral.
pub fn format_verdict(aspect: &str, tally: &AspectTally) -> AspectVerdict {
    let total = tally.total();
    let distribution = Distribution {
        positive: tally.positive,
        negative: tally.negative,
        neutral: tally.neutral,
    };
    if total == 0 {
        return AspectVerdict {
            sentiment: Sentiment::Neutral,
            reason: "Not mentioned".to_string(),
            count: 0,
            distribution,
        };
    }

    let pos_ratio = tally.positive as f64 / total as f64;
    let neg_ratio = tally.negative as f64 / total as f64;
    let sentiment = if pos_ratio > 0.5 {
        Sentiment::Positive
    } else if neg_ratio > 0.5 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    let reason = match sentiment {
        Sentiment::Positive => format!("Users praised {} in {}/{} mentions", aspect, tally.positive, total),
        Sentiment::Negative => format!("Users complained about {} in {}/{} mentions", aspect, tally.negative, total),
        Sentiment::Neutral => format!("Mixed opinions on {} across {} mentions", aspect, total),
    };

    AspectVerdict {
        sentiment,
        reason,
        count: total,
        distribution,
    }
}

/// Formats every tally with at least one mention, keyed by the capitalized
/// aspect name. Falls back to a single neutral `General` entry when nothing
/// was mentioned.
pub fn verdicts(tallies: &BTreeMap<String, AspectTally>) -> BTreeMap<String, AspectVerdict> {
    let mut out = BTreeMap::new();
    for (aspect, tally) in tallies {
        if tally.total() >= 1 {
            debug!(
                "{}: {} mentions (+{} -{} ={})",
                aspect,
                tally.total(),
                tally.positive,
                tally.negative,
                tally.neutral
            );
            out.insert(capitalize(aspect), format_verdict(aspect, tally));
        }
    }

    if out.is_empty() {
        warn!("No aspects detected in any reviews");
        out.insert(GENERAL_ASPECT.to_string(), AspectVerdict::general());
    }
    out
}

/// Borrowed view over the backends one extraction run needs.
pub struct AspectExtractor<'a> {
    pub registry: &'a AspectRegistry,
    pub classifier: &'a SentenceClassifier,
    pub lemmatizer: &'a dyn Lemmatizer,
    pub tagger: &'a dyn PosTagger,
}

impl<'a> AspectExtractor<'a> {
    /// Per-aspect tallies keyed by lowercase aspect name. Blank reviews are
    /// skipped. A registered aspect counts at most once per review; mined
    /// nouns count once per adjective–noun bigram.
    pub fn extract(&self, reviews: &[String], category: Category) -> BTreeMap<String, AspectTally> {
        let active = self.registry.active_aspects(category);
        let mut tallies: BTreeMap<String, AspectTally> = BTreeMap::new();

        for (idx, review) in reviews.iter().enumerate() {
            if review.trim().is_empty() {
                continue;
            }

            let sentiment = self.classifier.classify(review);
            let lowered = review.to_lowercase();
            let lemmatized = match self.lemmatizer.lemmatize(review) {
                Some(lemmas) => lemmas,
                None => {
                    debug!("lemmatizer unavailable, matching on lowercase text only");
                    lowered.clone()
                }
            };
            debug!("Review #{} ({}): '{}'", idx + 1, sentiment, excerpt_n(review, 80));

            let mut matched: BTreeSet<&str> = BTreeSet::new();
            for (aspect, keywords) in &active {
                let hit = keywords
                    .iter()
                    .find(|k| lowered.contains(k.as_str()) || lemmatized.contains(k.as_str()));
                if let Some(keyword) = hit {
                    debug!("  matched {}({})", aspect, keyword);
                    tallies.entry(aspect.to_string()).or_default().record(sentiment, review);
                    matched.insert(*aspect);
                }
            }

            for (noun, noun_sentiment) in self.adjective_noun_pairs(review, category) {
                if matched.contains(noun.as_str()) {
                    continue;
                }
                debug!("  POS detected: {} ({})", noun, noun_sentiment);
                tallies.entry(noun).or_default().record(noun_sentiment, review);
            }
        }

        let names: Vec<&str> = tallies.keys().map(String::as_str).collect();
        info!("Detected aspects: {:?}", names);
        tallies
    }

    /// Nouns directly preceded by a sentiment-bearing adjective, one entry
    /// per bigram, so "great phone, terrible phone" yields two mentions.
    ///
    /// Keywords of this category's active aspects are skipped since the
    /// keyword pass already counted them. Keywords of aspects another
    /// category activates are skipped too, keeping e.g. camera out of
    /// television results. Aspects no category activates stay minable.
    fn adjective_noun_pairs(&self, review: &str, category: Category) -> Vec<(String, Sentiment)> {
        let cleaned: String = review
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect();
        let tokens = words(&cleaned);
        let tags = match self.tagger.tag(&tokens) {
            Some(tags) if tags.len() == tokens.len() => tags,
            Some(_) => {
                debug!("POS tagger returned mismatched tags, skipping");
                return Vec::new();
            }
            None => return Vec::new(),
        };

        let mut pairs = Vec::new();
        for i in 0..tokens.len().saturating_sub(1) {
            if tags[i] != PosTag::Adjective || tags[i + 1] != PosTag::Noun {
                continue;
            }
            let noun = &tokens[i + 1];
            if self.registry.is_scoped_keyword(noun, category) {
                continue;
            }
            if is_positive_word(&tokens[i]) {
                pairs.push((noun.clone(), Sentiment::Positive));
            } else if is_negative_word(&tokens[i]) {
                pairs.push((noun.clone(), Sentiment::Negative));
            }
        }
        pairs
    }
}

fn excerpt(review: &str) -> String {
    excerpt_n(review, EXCERPT_CHARS)
}

fn excerpt_n(review: &str, chars: usize) -> String {
    review.chars().take(chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{LexiconPosTagger, RuleLemmatizer, Unavailable};
    use crate::registry::DEFAULT_REGISTRY;

    fn tally(positive: usize, negative: usize, neutral: usize) -> AspectTally {
        AspectTally {
            positive,
            negative,
            neutral,
            mentions: Vec::new(),
        }
    }

    fn extract(reviews: &[&str], category: Category) -> BTreeMap<String, AspectTally> {
        let classifier = SentenceClassifier::default();
        let lemmatizer = RuleLemmatizer::new();
        let tagger = LexiconPosTagger::new();
        let extractor = AspectExtractor {
            registry: &DEFAULT_REGISTRY,
            classifier: &classifier,
            lemmatizer: &lemmatizer,
            tagger: &tagger,
        };
        let reviews: Vec<String> = reviews.iter().map(|r| r.to_string()).collect();
        extractor.extract(&reviews, category)
    }

    #[test]
    fn test_even_split_is_neutral() {
        let verdict = format_verdict("battery", &tally(1, 1, 0));
        assert_eq!(verdict.sentiment, Sentiment::Neutral);
        assert_eq!(verdict.reason, "Mixed opinions on battery across 2 mentions");
    }

    #[test]
    fn test_majority_templates() {
        let positive = format_verdict("battery", &tally(3, 1, 0));
        assert_eq!(positive.sentiment, Sentiment::Positive);
        assert_eq!(positive.reason, "Users praised battery in 3/4 mentions");

        let negative = format_verdict("heating", &tally(0, 2, 1));
        assert_eq!(negative.sentiment, Sentiment::Negative);
        assert_eq!(negative.reason, "Users complained about heating in 2/3 mentions");
        assert_eq!(negative.count, negative.distribution.total());
    }

    #[test]
    fn test_zero_total_is_not_mentioned() {
        let verdict = format_verdict("camera", &AspectTally::default());
        assert_eq!(verdict.reason, "Not mentioned");
        assert_eq!(verdict.count, 0);
    }

    #[test]
    fn test_single_mention_is_kept() {
        let tallies = extract(&["The camera is great"], Category::Mobile);
        let out = verdicts(&tallies);
        assert_eq!(out["Camera"].count, 1);
        assert_eq!(out["Camera"].sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_category_scopes_keywords() {
        let tv = extract(&["The camera is great"], Category::Television);
        assert!(!tv.contains_key("camera"));
        let mobile = extract(&["The camera is great"], Category::Mobile);
        assert!(mobile.contains_key("camera"));
    }

    #[test]
    fn test_lemmatized_form_matches() {
        let registry = AspectRegistry::new().with_aspect("battery", ["battery"]);
        let classifier = SentenceClassifier::default();
        let lemmatizer = RuleLemmatizer::with_vocabulary(["battery"]);
        let reviews = vec!["Both batteries died".to_string(), "Batt died".to_string()];

        // "batteries" does not contain "battery" as a substring but lemmatizes to it.
        let extractor = AspectExtractor {
            registry: &registry,
            classifier: &classifier,
            lemmatizer: &lemmatizer,
            tagger: &Unavailable,
        };
        let tallies = extractor.extract(&reviews, Category::General);
        assert_eq!(tallies["battery"].total(), 1);
        assert_eq!(tallies["battery"].mentions, vec!["Both batteries died".to_string()]);

        let lowercase_only = AspectExtractor {
            lemmatizer: &Unavailable,
            ..extractor
        };
        assert!(lowercase_only.extract(&reviews, Category::General).is_empty());
    }

    #[test]
    fn test_adjective_noun_mining_adds_unregistered_aspects() {
        // "plastic" is in no category's vocabulary; the mined aspect still appears.
        let tallies = extract(&["Cheap plastic everywhere"], Category::Footwear);
        assert_eq!(tallies["plastic"].negative, 1);

        let tv = extract(&["Great camera honestly"], Category::Television);
        assert!(!tv.contains_key("camera"), "registered keywords are never mined");
    }

    #[test]
    fn test_mining_does_not_double_count_a_review() {
        let tallies = extract(&["Great battery life"], Category::Mobile);
        assert_eq!(tallies["battery"].total(), 1);
    }

    #[test]
    fn test_never_activated_aspects_are_minable() {
        let tallies = extract(&["Defective compressor", "Poor remote"], Category::HomeAppliance);
        assert_eq!(tallies["compressor"].negative, 1);
        assert_eq!(tallies["remote"].negative, 1);

        let tv = extract(&["Terrible remote"], Category::Television);
        assert_eq!(tv["remote"].negative, 1);
    }

    #[test]
    fn test_each_bigram_is_tallied() {
        let tallies = extract(&["Great phone, terrible phone"], Category::Mobile);
        assert_eq!(tallies["phone"].positive, 1);
        assert_eq!(tallies["phone"].negative, 1);
        assert_eq!(tallies["phone"].mentions.len(), 2);
    }

    #[test]
    fn test_fallbacks_when_backends_unavailable() {
        let classifier = SentenceClassifier::new(Unavailable);
        let extractor = AspectExtractor {
            registry: &DEFAULT_REGISTRY,
            classifier: &classifier,
            lemmatizer: &Unavailable,
            tagger: &Unavailable,
        };
        let reviews = vec!["Good battery, cheap plastic".to_string(), "   ".to_string()];
        let tallies = extractor.extract(&reviews, Category::Mobile);
        assert_eq!(tallies["battery"].total(), 1);
        assert!(!tallies.contains_key("plastic"));
    }

    #[test]
    fn test_empty_tallies_yield_general() {
        let out = verdicts(&BTreeMap::new());
        assert_eq!(out.len(), 1);
        assert_eq!(out[GENERAL_ASPECT].reason, GENERAL_REASON);
        assert_eq!(out[GENERAL_ASPECT].sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_excerpt_is_char_safe() {
        let long = "é".repeat(400);
        let mut t = AspectTally::default();
        t.record(Sentiment::Neutral, &long);
        assert_eq!(t.mentions[0].chars().count(), EXCERPT_CHARS);
    }
}
