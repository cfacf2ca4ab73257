use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::{PosTag, PosTagger};

static LEXICON: Lazy<HashMap<&'static str, PosTag>> = Lazy::new(|| {
    let mut map = HashMap::new();
    let groups: &[(PosTag, &[&str])] = &[
        (
            PosTag::Determiner,
            &[
                "the", "a", "an", "this", "that", "these", "those", "my", "your", "his",
                "her", "its", "our", "their", "some", "any", "every", "each", "no",
            ],
        ),
        (
            PosTag::Pronoun,
            &["i", "you", "he", "she", "it", "we", "they", "me", "him", "them", "us"],
        ),
        (
            PosTag::Preposition,
            &[
                "in", "on", "at", "for", "with", "of", "to", "from", "by", "during",
                "after", "before", "about", "under", "over", "than", "into", "within",
                "without", "across", "per",
            ],
        ),
        (
            PosTag::Conjunction,
            &["and", "or", "but", "yet", "nor", "because", "though", "although", "while", "if"],
        ),
        (
            PosTag::Verb,
            &[
                "is", "are", "was", "were", "be", "been", "am", "has", "have", "had",
                "do", "does", "did", "will", "would", "can", "could", "should", "must",
                "may", "might", "feel", "feels", "felt", "work", "works", "buy", "bought",
                "get", "got", "gets", "come", "comes", "came", "lasts", "drains", "heats",
                "makes", "make", "use", "used", "hangs", "lags", "go", "goes", "went",
            ],
        ),
        (
            PosTag::Adverb,
            &[
                "not", "never", "very", "really", "too", "quite", "so", "also", "just",
                "only", "even", "still", "always", "well", "much", "more", "most", "less",
                "again", "here", "there", "now", "then",
            ],
        ),
        (
            PosTag::Adjective,
            &[
                "good", "great", "excellent", "amazing", "fantastic", "awesome", "perfect",
                "superb", "outstanding", "brilliant", "nice", "solid", "wonderful",
                "fabulous", "incredible", "superior", "top", "best", "better", "impressive",
                "satisfied", "happy", "pleased", "delighted", "bad", "poor", "terrible",
                "worst", "worse", "awful", "disappointing", "disappointed", "useless",
                "pathetic", "horrible", "defective", "broken", "faulty", "damaged", "cheap",
                "big", "small", "heavy", "light", "new", "old", "long", "short", "high",
                "low", "average", "decent", "clean", "vibrant", "bright", "smooth", "slow",
                "fast", "premium", "sleek", "sturdy", "fragile", "loud", "quiet", "noisy",
                "expensive", "affordable", "easy", "hard", "weak", "strong", "beautiful",
                "overall", "daily", "first",
            ],
        ),
    ];
    for (tag, words) in groups {
        for word in *words {
            map.insert(*word, *tag);
        }
    }
    map
});

const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "ous", "ive", "able", "ible", "less", "ish"];

/// Closed-class lexicon plus suffix heuristics; unknown words default to
/// nouns.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconPosTagger;

impl LexiconPosTagger {
    pub fn new() -> Self {
        Self
    }

    fn tag_word(word: &str) -> PosTag {
        if let Some(tag) = LEXICON.get(word) {
            return *tag;
        }
        if word.chars().any(|c| c.is_ascii_digit()) {
            return PosTag::Number;
        }
        if word.len() > 4 && word.ends_with("ly") {
            return PosTag::Adverb;
        }
        if word.len() > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return PosTag::Adjective;
        }
        if word.len() > 4 && (word.ends_with("ing") || word.ends_with("ed")) {
            return PosTag::Verb;
        }
        PosTag::Noun
    }
}

impl PosTagger for LexiconPosTagger {
    fn tag(&self, tokens: &[String]) -> Option<Vec<PosTag>> {
        Some(tokens.iter().map(|t| Self::tag_word(t)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::words;

    fn tags(text: &str) -> Vec<PosTag> {
        LexiconPosTagger::new().tag(&words(text)).unwrap()
    }

    #[test]
    fn test_adjective_noun_pair() {
        assert_eq!(
            tags("Good value for money"),
            vec![PosTag::Adjective, PosTag::Noun, PosTag::Preposition, PosTag::Noun]
        );
    }

    #[test]
    fn test_heuristics() {
        assert_eq!(LexiconPosTagger::tag_word("easily"), PosTag::Adverb);
        assert_eq!(LexiconPosTagger::tag_word("colourful"), PosTag::Adjective);
        assert_eq!(LexiconPosTagger::tag_word("charging"), PosTag::Verb);
        assert_eq!(LexiconPosTagger::tag_word("5g"), PosTag::Number);
        assert_eq!(LexiconPosTagger::tag_word("plastic"), PosTag::Noun);
        assert_eq!(LexiconPosTagger::tag_word("not"), PosTag::Adverb);
    }
}
