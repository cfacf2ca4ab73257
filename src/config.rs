//! Service settings read from the environment.

use anyhow::{bail, Context, Result};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_REVIEWS: usize = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    /// Rule lemmatizer; off means lowercase-only keyword matching.
    pub lemmatizer: bool,
    /// Adjective–noun mining.
    pub pos_tagger: bool,
    /// Continuous polarity; off means a lexicon-only vote.
    pub polarity: bool,
    pub max_reviews_per_request: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            lemmatizer: true,
            pos_tagger: true,
            polarity: true,
            max_reviews_per_request: DEFAULT_MAX_REVIEWS,
        }
    }
}

impl Settings {
    /// Reads the process environment. Call `dotenv().ok()` first to pick up
    /// a local `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let bind_addr = lookup("BIND_ADDR")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.bind_addr);

        let max_reviews_per_request = match lookup("MAX_REVIEWS_PER_REQUEST") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("MAX_REVIEWS_PER_REQUEST must be a positive integer, got '{}'", raw))?,
            None => defaults.max_reviews_per_request,
        };
        if max_reviews_per_request == 0 {
            bail!("MAX_REVIEWS_PER_REQUEST must be greater than zero");
        }

        Ok(Self {
            bind_addr,
            lemmatizer: flag(&lookup, "ANALYZER_LEMMATIZER", defaults.lemmatizer)?,
            pos_tagger: flag(&lookup, "ANALYZER_POS_TAGGER", defaults.pos_tagger)?,
            polarity: flag(&lookup, "ANALYZER_POLARITY", defaults.polarity)?,
            max_reviews_per_request,
        })
    }
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> Result<bool> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        other => bail!("{} must be one of on/off, true/false, yes/no, 1/0; got '{}'", key, other),
    }
}
