//! Heuristic screen for reviews that look fabricated.

use serde::Serialize;
use utoipa::ToSchema;

use crate::review::Review;

const MIN_CHARS: usize = 10;
const MAX_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuthenticityCheck {
    pub is_suspicious: bool,
    pub label: String,
}

pub fn assess(review: &Review) -> AuthenticityCheck {
    let length = review.text.chars().count();
    let extreme_rating = matches!(review.rating, Some(r) if r == 1.0 || r == 5.0);

    let label = if length < MIN_CHARS {
        Some("Review too short")
    } else if length > MAX_CHARS {
        Some("Review unusually long")
    } else if extreme_rating && review.text.contains("!!!") {
        Some("Extreme rating with suspicious text")
    } else {
        None
    };

    AuthenticityCheck {
        is_suspicious: label.is_some(),
        label: label.unwrap_or("Looks genuine").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_rules() {
        assert_eq!(assess(&Review::new("ok")).label, "Review too short");
        assert_eq!(assess(&Review::new("x".repeat(501))).label, "Review unusually long");
    }

    #[test]
    fn test_extreme_rating_with_exclamations() {
        let review = Review::new("Best phone ever!!!").with_rating(5.0);
        let check = assess(&review);
        assert!(check.is_suspicious);
        assert_eq!(check.label, "Extreme rating with suspicious text");

        let review = Review::new("Best phone ever!!!").with_rating(4.0);
        assert!(!assess(&review).is_suspicious);
    }

    #[test]
    fn test_genuine() {
        let check = assess(&Review::new("Battery lasts a full day with gaming."));
        assert!(!check.is_suspicious);
        assert_eq!(check.label, "Looks genuine");
    }
}
