use std::collections::HashSet;

use super::{words, Lemmatizer};
use crate::registry::DEFAULT_REGISTRY;

const IRREGULAR: &[(&str, &str)] = &[
    ("was", "be"),
    ("were", "be"),
    ("is", "be"),
    ("are", "be"),
    ("has", "have"),
    ("had", "have"),
    ("broke", "break"),
    ("bought", "buy"),
    ("got", "get"),
    ("felt", "feel"),
    ("built", "build"),
    ("ran", "run"),
];

/// Base forms that are not aspect keywords but show up in review language.
const BASE_FORMS: &[&str] = &[
    "review", "product", "phone", "day", "week", "month", "work", "use", "buy", "feel",
    "issue", "problem", "feature", "game", "user", "experience", "recommend", "return",
    "refund", "seller", "order", "deliver", "ship", "pack", "look", "perform", "update",
    "install", "scratch", "heat", "charge", "drain", "last", "break", "hang", "lag",
];

/// Dictionary-backed suffix lemmatizer.
///
/// Candidate base forms are produced by stripping inflectional suffixes and
/// are only accepted when they are in the vocabulary. Tokens without an
/// accepted candidate pass through unchanged.
#[derive(Debug, Clone)]
pub struct RuleLemmatizer {
    vocabulary: HashSet<String>,
}

impl Default for RuleLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleLemmatizer {
    /// Vocabulary made of the default aspect keywords plus common review words.
    pub fn new() -> Self {
        Self::with_vocabulary(
            DEFAULT_REGISTRY
                .single_word_keywords()
                .chain(BASE_FORMS.iter().copied()),
        )
    }

    pub fn with_vocabulary<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            vocabulary: vocabulary.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lemma(&self, token: &str) -> String {
        if let Some((_, base)) = IRREGULAR.iter().find(|(form, _)| *form == token) {
            return base.to_string();
        }
        candidates(token)
            .into_iter()
            .find(|c| self.vocabulary.contains(c))
            .unwrap_or_else(|| token.to_string())
    }
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize(&self, text: &str) -> Option<String> {
        let lemmas: Vec<String> = words(text).iter().map(|t| self.lemma(t)).collect();
        Some(lemmas.join(" "))
    }
}

fn candidates(token: &str) -> Vec<String> {
    let mut out = Vec::new();

    if let Some(stem) = token.strip_suffix("ies") {
        out.push(format!("{stem}y"));
    }
    if let Some(stem) = token.strip_suffix("es") {
        out.push(stem.to_string());
    }
    if let Some(stem) = token.strip_suffix('s') {
        if !token.ends_with("ss") {
            out.push(stem.to_string());
        }
    }
    if let Some(stem) = token.strip_suffix("ing") {
        push_verb_stems(stem, &mut out);
    }
    if let Some(stem) = token.strip_suffix("ed") {
        push_verb_stems(stem, &mut out);
    }

    out.retain(|c| c.len() >= 2);
    out
}

/// `stem`, `stem + e`, and `stem` with a doubled final consonant undone
/// ("lagg" → "lag").
fn push_verb_stems(stem: &str, out: &mut Vec<String>) {
    out.push(stem.to_string());
    out.push(format!("{stem}e"));
    let mut tail = stem.chars().rev();
    if let (Some(last), Some(prev)) = (tail.next(), tail.next()) {
        if last == prev {
            out.push(stem[..stem.len() - last.len_utf8()].to_string());
        }
    }
}
