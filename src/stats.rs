//! Aggregate statistics over a batch of reviews.

use serde::Serialize;
use utoipa::ToSchema;

use crate::aspects::Distribution;
use crate::authenticity;
use crate::review::Review;
use crate::sentiment::{SentenceClassifier, Sentiment};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, ToSchema)]
pub struct SentimentShare {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ReviewStats {
    pub total_reviews: usize,
    pub sentiment_counts: Distribution,
    /// Percentages, 0–100.
    pub sentiment_distribution: SentimentShare,
    pub average_polarity: f64,
    /// Mean over reviews that carry a rating.
    pub average_rating: Option<f64>,
    pub rated_reviews: usize,
    pub suspicious_reviews: usize,
    pub summary_text: String,
}

impl ReviewStats {
    fn empty() -> Self {
        Self {
            total_reviews: 0,
            sentiment_counts: Distribution::default(),
            sentiment_distribution: SentimentShare::default(),
            average_polarity: 0.0,
            average_rating: None,
            rated_reviews: 0,
            suspicious_reviews: 0,
            summary_text: "No reviews available.".to_string(),
        }
    }
}

pub fn review_stats(reviews: &[Review], classifier: &SentenceClassifier) -> ReviewStats {
    if reviews.is_empty() {
        return ReviewStats::empty();
    }

    let mut counts = Distribution::default();
    let mut polarity_sum = 0.0;
    for review in reviews {
        let score = classifier.score(&review.text);
        polarity_sum += score.polarity;
        match score.sentiment {
            Sentiment::Positive => counts.positive += 1,
            Sentiment::Negative => counts.negative += 1,
            Sentiment::Neutral => counts.neutral += 1,
        }
    }

    let total = reviews.len();
    let pct = |n: usize| n as f64 / total as f64 * 100.0;
    let share = SentimentShare {
        positive: pct(counts.positive),
        neutral: pct(counts.neutral),
        negative: pct(counts.negative),
    };

    let ratings: Vec<f64> = reviews.iter().filter_map(|r| r.rating).collect();
    let average_rating = (!ratings.is_empty()).then(|| ratings.iter().sum::<f64>() / ratings.len() as f64);

    let suspicious_reviews = reviews
        .iter()
        .filter(|r| authenticity::assess(r).is_suspicious)
        .count();

    ReviewStats {
        total_reviews: total,
        sentiment_counts: counts,
        sentiment_distribution: share,
        average_polarity: polarity_sum / total as f64,
        average_rating,
        rated_reviews: ratings.len(),
        suspicious_reviews,
        summary_text: summary_text(&share, average_rating, total),
    }
}

fn summary_text(share: &SentimentShare, average_rating: Option<f64>, total: usize) -> String {
    let overall = if share.positive >= 60.0 {
        "overwhelmingly positive"
    } else if share.positive >= 45.0 {
        "mostly positive"
    } else if share.negative >= 45.0 {
        "mostly negative"
    } else if share.negative >= 30.0 {
        "mixed with concerns"
    } else {
        "mixed"
    };

    let mut summary = format!("Based on {} reviews, customer sentiment is {}. ", total, overall);
    summary.push_str(&format!(
        "{:.1}% of reviews are positive, {:.1}% are neutral, and {:.1}% are negative. ",
        share.positive, share.neutral, share.negative
    ));
    if let Some(rating) = average_rating {
        summary.push_str(&format!(
            "The average rating is {:.1}/5.0 ({}). ",
            rating,
            rating_description(rating)
        ));
    }

    let interpretation = if share.positive > 60.0 {
        "Customers generally love this product and recommend it highly."
    } else if share.positive > 45.0 && share.negative < 20.0 {
        "Most customers are satisfied, though there are some areas for improvement."
    } else if share.negative > 40.0 {
        "Many customers express dissatisfaction. Significant improvements may be needed."
    } else {
        "Customer opinions are divided. The product works well for some but not others."
    };
    summary.push_str(interpretation);
    summary
}

fn rating_description(rating: f64) -> &'static str {
    if rating >= 4.5 {
        "excellent"
    } else if rating >= 4.0 {
        "very good"
    } else if rating >= 3.5 {
        "good"
    } else if rating >= 3.0 {
        "average"
    } else {
        "below average"
    }
}
