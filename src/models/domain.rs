//! Domain Records
//!
//! Payloads produced by the comment-fetch and LLM-analysis collaborators and
//! stored by the cache.

use serde::{Deserialize, Serialize};

// == Comment ==
/// A single top-level comment on a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Plain-text comment body
    pub text: String,
    /// Display name of the author
    #[serde(default = "default_author")]
    pub author: String,
    /// Like count at fetch time
    #[serde(default)]
    pub likes: u64,
    /// Publication date (YYYY-MM-DD)
    #[serde(default)]
    pub published_at: String,
}

fn default_author() -> String {
    "Anonymous".to_string()
}

// == Video Metadata ==
/// Title, channel and engagement counters for a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    pub channel: String,
    #[serde(default)]
    pub published_at: String,
    /// Medium-resolution thumbnail URL
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub comment_count: u64,
}

// == Analysis Result ==
/// Suitability verdict for a persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Fit,
    NoFit,
    Caution,
}

/// Difficulty level inferred from the comment section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Mixed,
}

/// Percentages of positive, neutral and negative comments.
///
/// Signed and wide so out-of-range model output reaches `validate` instead
/// of failing deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: i64,
    pub neutral: i64,
    pub negative: i64,
}

/// Structured verdict returned by the LLM-analysis service for one
/// (video, persona) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub verdict: Verdict,
    /// Model confidence, 0-100
    pub confidence_score: i64,
    /// Two or three sentence summary of community consensus
    pub summary: String,
    #[serde(default)]
    pub positive_aspects: Vec<String>,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub sentiment_breakdown: SentimentBreakdown,
    #[serde(default)]
    pub top_keywords: Vec<String>,
    #[serde(default)]
    pub community_tips: Vec<String>,
    pub difficulty_level: DifficultyLevel,
    #[serde(default = "default_version_concerns")]
    pub version_concerns: String,
    /// One actionable sentence for the persona
    pub recommendation: String,
}

fn is_percentage(value: i64) -> bool {
    (0..=100).contains(&value)
}

fn default_version_concerns() -> String {
    "None".to_string()
}

impl AnalysisResult {
    /// Returns an error message if a percentage field is out of range.
    pub fn validate(&self) -> Option<String> {
        if !is_percentage(self.confidence_score) {
            return Some("confidence_score must be between 0 and 100".to_string());
        }
        let s = &self.sentiment_breakdown;
        if ![s.positive, s.neutral, s.negative].into_iter().all(is_percentage) {
            return Some("sentiment percentages must be between 0 and 100".to_string());
        }
        None
    }
}
