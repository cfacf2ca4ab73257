//! Pluggable language backends.
//!
//! Lemmatization, part-of-speech tagging and continuous polarity scoring are
//! optional capabilities. Each one sits behind a trait whose methods return
//! `None` when the backend cannot serve the request; callers then take their
//! documented fallback path instead of failing. [`Unavailable`] is the stub
//! that implements all three traits and never answers.

mod lemma;
mod polarity;
mod pos;

pub use lemma::RuleLemmatizer;
pub use polarity::LexiconPolarity;
pub use pos::LexiconPosTagger;

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Lowercased word tokens. Punctuation never sticks to a token.
pub fn words(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Reduces words to their dictionary base form.
pub trait Lemmatizer: Send + Sync {
    /// Lowercased text with every token replaced by its lemma, joined by
    /// single spaces. `None` when no lemmatizer is available.
    fn lemmatize(&self, text: &str) -> Option<String>;
}

/// Coarse part-of-speech classes, enough for adjective–noun mining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Adjective,
    Noun,
    Verb,
    Adverb,
    Determiner,
    Pronoun,
    Preposition,
    Conjunction,
    Number,
}

pub trait PosTagger: Send + Sync {
    /// One tag per input token. `None` when no tagger is available.
    fn tag(&self, tokens: &[String]) -> Option<Vec<PosTag>>;
}

/// General-purpose continuous sentiment signal.
pub trait PolarityScorer: Send + Sync {
    /// Deterministic polarity in `[-1.0, 1.0]`. `None` when no scorer is available.
    fn polarity(&self, text: &str) -> Option<f64>;
}

/// Stub backend: every capability reports itself as unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl Lemmatizer for Unavailable {
    fn lemmatize(&self, _text: &str) -> Option<String> {
        None
    }
}

impl PosTagger for Unavailable {
    fn tag(&self, _tokens: &[String]) -> Option<Vec<PosTag>> {
        None
    }
}

impl PolarityScorer for Unavailable {
    fn polarity(&self, _text: &str) -> Option<f64> {
        None
    }
}
