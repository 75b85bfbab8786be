//! Headline sentiment scoring.
//!
//! A small polarity lexicon scores each headline in [-1, 1]; the average
//! over the headlines decides the overall label. This reproduces the
//! shape of the upstream commentary (an overall label plus three scored
//! headlines) without any remote call.

use std::fmt;

const POSITIVE_WORDS: &[&str] = &[
    "upward", "optimism", "optimistic", "bullish", "gain", "gains", "strong", "growth", "record",
    "beats", "surge", "rally", "upbeat",
];

const NEGATIVE_WORDS: &[&str] = &[
    "concern", "concerns", "bearish", "loss", "losses", "weak", "decline", "drop", "misses",
    "slump", "downturn", "worries", "selloff",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Negative => write!(f, "Negative"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentReport {
    pub symbol: String,
    pub label: SentimentLabel,
    pub headlines: Vec<String>,
}

/// Polarity of a single headline: mean of +1/-1 over recognized words,
/// 0.0 when no lexicon word appears.
pub fn score_text(text: &str) -> f64 {
    let mut score = 0i32;
    let mut matched = 0u32;

    for token in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
    {
        let word = token.to_lowercase();
        if POSITIVE_WORDS.contains(&word.as_str()) {
            score += 1;
            matched += 1;
        } else if NEGATIVE_WORDS.contains(&word.as_str()) {
            score -= 1;
            matched += 1;
        }
    }

    if matched == 0 {
        0.0
    } else {
        score as f64 / matched as f64
    }
}

/// Overall label from the average headline polarity.
pub fn classify(average_polarity: f64) -> SentimentLabel {
    if average_polarity > 0.0 {
        SentimentLabel::Positive
    } else if average_polarity < 0.0 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}
