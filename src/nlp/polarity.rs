use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::{words, PolarityScorer};

/// Word valences in `[-1, 1]`, tuned for product-review language.
static VALENCE: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("excellent", 1.0), ("superb", 1.0), ("perfect", 1.0), ("best", 1.0),
        ("outstanding", 0.9), ("amazing", 0.9), ("awesome", 0.9), ("fantastic", 0.9),
        ("wonderful", 0.9), ("brilliant", 0.9), ("incredible", 0.9), ("fabulous", 0.9),
        ("love", 0.8), ("loved", 0.8), ("great", 0.8), ("delighted", 0.8),
        ("impressive", 0.7), ("impressed", 0.7), ("good", 0.7), ("superior", 0.7),
        ("happy", 0.7), ("beautiful", 0.8), ("premium", 0.5), ("nice", 0.6),
        ("satisfied", 0.5), ("pleased", 0.5), ("recommend", 0.5), ("recommended", 0.5),
        ("vibrant", 0.5), ("bright", 0.6), ("smooth", 0.4), ("sleek", 0.5),
        ("sturdy", 0.5), ("solid", 0.4), ("reliable", 0.5), ("durable", 0.5),
        ("affordable", 0.4), ("worth", 0.3), ("easy", 0.4), ("easily", 0.4),
        ("clean", 0.4), ("decent", 0.2), ("fine", 0.4), ("better", 0.5),
        ("top", 0.5), ("quick", 0.3), ("clear", 0.3), ("comfortable", 0.5),
        ("terrible", -1.0), ("worst", -1.0), ("horrible", -1.0), ("pathetic", -1.0),
        ("awful", -1.0), ("useless", -0.8), ("waste", -0.8), ("hate", -0.8),
        ("hated", -0.8), ("bad", -0.7), ("poor", -0.6), ("disappointing", -0.6),
        ("disappointed", -0.75), ("defective", -0.7), ("faulty", -0.7),
        ("broken", -0.6), ("damaged", -0.6), ("regret", -0.6), ("fail", -0.5),
        ("fails", -0.5), ("failed", -0.5), ("worse", -0.6), ("slow", -0.3),
        ("laggy", -0.5), ("lag", -0.4), ("lags", -0.4), ("hangs", -0.4),
        ("drain", -0.5), ("drains", -0.5), ("draining", -0.5), ("heats", -0.4),
        ("overheats", -0.6), ("overheating", -0.6), ("heavy", -0.2), ("noisy", -0.4),
        ("fragile", -0.4), ("expensive", -0.4), ("overpriced", -0.6), ("cheap", -0.2),
        ("weak", -0.4), ("average", -0.15), ("problem", -0.4), ("problems", -0.4),
        ("issue", -0.3), ("issues", -0.3), ("annoying", -0.6), ("avoid", -0.5),
    ]
    .into_iter()
    .collect()
});

static INTENSIFIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("very", 1.3), ("really", 1.2), ("extremely", 1.5), ("absolutely", 1.5),
        ("highly", 1.4), ("totally", 1.4), ("super", 1.3), ("so", 1.2), ("too", 1.2),
        ("quite", 1.1), ("slightly", 0.5), ("somewhat", 0.7), ("bit", 0.6),
    ]
    .into_iter()
    .collect()
});

const NEGATORS: &[&str] = &["not", "no", "never", "nothing", "hardly", "barely", "without"];

/// Contraction stems whose trailing `t` token negates ("don't" → "don", "t").
const NEGATED_CONTRACTIONS: &[&str] = &[
    "don", "doesn", "didn", "isn", "wasn", "aren", "weren", "won", "can", "couldn",
    "shouldn", "wouldn", "haven", "hasn",
];

/// How many tokens a negator stays active for.
const NEGATION_WINDOW: usize = 3;

/// Averaged-valence polarity scorer with intensifiers and negation.
///
/// Each valence word contributes its score, multiplied by a preceding
/// intensifier and flipped at half strength inside a negation window. The
/// result is the mean over contributing words, clamped to `[-1, 1]`; text
/// with no valence words scores `0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconPolarity;

impl LexiconPolarity {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, text: &str) -> f64 {
        let tokens = words(text);
        let mut contributions = Vec::new();
        let mut intensity = 1.0;
        let mut negation_left = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let token = token.as_str();
            let negates = NEGATORS.contains(&token)
                || (token == "t" && i > 0 && NEGATED_CONTRACTIONS.contains(&tokens[i - 1].as_str()));
            if negates {
                negation_left = NEGATION_WINDOW;
                continue;
            }
            if let Some(factor) = INTENSIFIERS.get(token) {
                intensity *= factor;
                continue;
            }

            if let Some(valence) = VALENCE.get(token) {
                let mut value = valence * intensity;
                if negation_left > 0 {
                    value *= -0.5;
                    negation_left = 0;
                }
                contributions.push(value);
            } else {
                negation_left = negation_left.saturating_sub(1);
            }
            intensity = 1.0;
        }

        if contributions.is_empty() {
            return 0.0;
        }
        let mean = contributions.iter().sum::<f64>() / contributions.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

impl PolarityScorer for LexiconPolarity {
    fn polarity(&self, text: &str) -> Option<f64> {
        Some(self.score(text))
    }
}
