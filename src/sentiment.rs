//! Sentence-level sentiment classification.
//!
//! A hybrid of a lexicon vote (counting known positive and negative words)
//! and a continuous polarity score from a [`PolarityScorer`]. When no scorer
//! is available the polarity is taken as `0.0`, which reduces the decision to
//! the lexicon vote alone.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;
use utoipa::ToSchema;

use crate::nlp::{words, LexiconPolarity, PolarityScorer};

// Words that vote for a positive review
static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    vec![
        "good", "great", "excellent", "amazing", "fantastic", "love", "loved", "best",
        "awesome", "perfect", "superb", "outstanding", "brilliant", "nice", "satisfied",
        "happy", "impressed", "impressive", "recommend", "recommended", "solid", "worth",
        "pleased", "delighted", "wonderful", "fabulous", "incredible", "superior", "top",
    ].into_iter().collect()
});

// Words that vote for a negative review
static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    vec![
        "bad", "poor", "terrible", "worst", "awful", "disappointing", "disappointed",
        "useless", "waste", "pathetic", "horrible", "issue", "issues", "problem",
        "problems", "defect", "defective", "broken", "regret", "avoid", "faulty",
        "damaged", "fail", "fails", "failed", "cheap", "hate", "hated", "never", "not",
    ].into_iter().collect()
});

/// Polarity beyond which the continuous score decides on its own.
const POLARITY_MARGIN: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_positive_word(word: &str) -> bool {
    POSITIVE_WORDS.contains(word)
}

pub fn is_negative_word(word: &str) -> bool {
    NEGATIVE_WORDS.contains(word)
}

/// Full breakdown of one classification.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SentenceScore {
    pub sentiment: Sentiment,
    pub polarity: f64,
    pub positive_hits: usize,
    pub negative_hits: usize,
}

pub struct SentenceClassifier {
    scorer: Box<dyn PolarityScorer>,
}

impl Default for SentenceClassifier {
    fn default() -> Self {
        Self::new(LexiconPolarity::new())
    }
}

impl fmt::Debug for SentenceClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentenceClassifier").finish_non_exhaustive()
    }
}

impl SentenceClassifier {
    pub fn new(scorer: impl PolarityScorer + 'static) -> Self {
        Self { scorer: Box::new(scorer) }
    }

    pub fn classify(&self, text: &str) -> Sentiment {
        self.score(text).sentiment
    }

    pub fn score(&self, text: &str) -> SentenceScore {
        let tokens = words(text);
        let positive_hits = tokens.iter().filter(|w| is_positive_word(w)).count();
        let negative_hits = tokens.iter().filter(|w| is_negative_word(w)).count();

        let polarity = match self.scorer.polarity(text) {
            Some(p) => p,
            None => {
                debug!("polarity backend unavailable, using lexicon vote only");
                0.0
            }
        };

        SentenceScore {
            sentiment: decide(positive_hits, negative_hits, polarity),
            polarity,
            positive_hits,
            negative_hits,
        }
    }
}

fn decide(pos: usize, neg: usize, polarity: f64) -> Sentiment {
    if pos > neg && polarity >= 0.0 {
        Sentiment::Positive
    } else if neg > pos && polarity <= 0.0 {
        Sentiment::Negative
    } else if polarity > POLARITY_MARGIN {
        Sentiment::Positive
    } else if polarity < -POLARITY_MARGIN {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
