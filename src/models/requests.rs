//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::models::AnalysisResult;

/// Maximum accepted video identifier length in bytes
pub const MAX_VIDEO_ID_LENGTH: usize = 256;

/// Validates a video identifier taken from the request path.
///
/// Returns an error message if validation fails, None if valid.
pub fn validate_video_id(video_id: &str) -> Option<String> {
    if video_id.is_empty() {
        return Some("Video id cannot be empty".to_string());
    }
    if video_id.len() > MAX_VIDEO_ID_LENGTH {
        return Some(format!(
            "Video id exceeds maximum length of {} bytes",
            MAX_VIDEO_ID_LENGTH
        ));
    }
    None
}

/// Query string for GET /analysis/:video_id
///
/// An absent `persona` is the empty persona, which is a distinct cache entry
/// from any non-empty one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisQuery {
    #[serde(default)]
    pub persona: String,
}

/// Request body for PUT /analysis/:video_id
#[derive(Debug, Clone, Deserialize)]
pub struct SetAnalysisRequest {
    /// Raw persona description the analysis was produced for
    #[serde(default)]
    pub persona: String,
    /// The LLM verdict to cache
    pub result: AnalysisResult,
}

impl SetAnalysisRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        self.result.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_video_id() {
        assert!(validate_video_id("dQw4w9WgXcQ").is_none());
        assert!(validate_video_id("").is_some());
        assert!(validate_video_id(&"x".repeat(MAX_VIDEO_ID_LENGTH + 1)).is_some());
    }

    #[test]
    fn test_analysis_query_default_persona() {
        let query = AnalysisQuery::default();
        assert_eq!(query.persona, "");
    }

    #[test]
    fn test_set_analysis_request_deserialize() {
        let json = r#"{
            "persona": "beginner on Windows 11",
            "result": {
                "verdict": "CAUTION",
                "confidence_score": 64,
                "summary": "Mixed.",
                "difficulty_level": "Mixed",
                "recommendation": "Check the pinned comment."
            }
        }"#;
        let req: SetAnalysisRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.persona, "beginner on Windows 11");
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_set_analysis_request_out_of_range() {
        let json = r#"{
            "result": {
                "verdict": "FIT",
                "confidence_score": 140,
                "summary": "",
                "difficulty_level": "Advanced",
                "recommendation": ""
            }
        }"#;
        let req: SetAnalysisRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.persona, "");
        assert!(req.validate().is_some());
    }
}
