//! Core data types for a style analysis call.
//!
//! A request is transient and validated before any network activity; a result
//! is the only long-lived value and is immutable once constructed.

use crate::error::{Result, StylistError};
use serde::Serialize;

/// Default response language.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Everything needed to ask the model about one product.
#[derive(Debug, Clone)]
pub struct StyleAnalysisRequest {
    images: Vec<String>,
    style_profile: String,
    language: String,
}

impl StyleAnalysisRequest {
    /// Create a request, rejecting an empty image list.
    pub fn new(images: &[String], style_profile: &str, language: &str) -> Result<Self> {
        if images.is_empty() {
            return Err(StylistError::InvalidInput(
                "The image URLs array cannot be empty.".to_string(),
            ));
        }
        let language = if language.trim().is_empty() {
            DEFAULT_LANGUAGE
        } else {
            language
        };
        Ok(Self {
            images: images.to_vec(),
            style_profile: style_profile.to_string(),
            language: language.to_string(),
        })
    }

    /// Image references (URLs or paths), in caller order.
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Free-text description of the user's clothing preferences.
    pub fn style_profile(&self) -> &str {
        &self.style_profile
    }

    /// Language the model must answer in.
    pub fn language(&self) -> &str {
        &self.language
    }
}

/// The model's verdict on whether a product fits the user's style.
///
/// Only built by the response interpreter after all five keys validated,
/// so every instance is complete. Fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleAnalysisResult {
    /// Neutral, factual description of the product
    objective_description: String,

    /// Personalized comparison to the user's style
    style_analysis: String,

    /// Final recommendation
    is_style_match: bool,

    /// Complete-outfit suggestion, only for matches
    outfit_suggestion: Option<String>,

    /// Occasions the item suits
    occasion_analysis: String,
}

impl StyleAnalysisResult {
    pub(crate) fn new(
        objective_description: String,
        style_analysis: String,
        is_style_match: bool,
        outfit_suggestion: Option<String>,
        occasion_analysis: String,
    ) -> Self {
        Self {
            objective_description,
            style_analysis,
            is_style_match,
            outfit_suggestion,
            occasion_analysis,
        }
    }

    pub fn objective_description(&self) -> &str {
        &self.objective_description
    }

    pub fn style_analysis(&self) -> &str {
        &self.style_analysis
    }

    pub fn is_style_match(&self) -> bool {
        self.is_style_match
    }

    pub fn outfit_suggestion(&self) -> Option<&str> {
        self.outfit_suggestion.as_deref()
    }

    pub fn occasion_analysis(&self) -> &str {
        &self.occasion_analysis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_rejects_empty_images() {
        let err = StyleAnalysisRequest::new(&[], "navy blazers", "en").unwrap_err();
        assert!(matches!(err, StylistError::InvalidInput(_)));
    }

    #[test]
    fn test_request_blank_language_defaults_to_en() {
        let images = vec!["https://example.com/a.jpg".to_string()];
        let request = StyleAnalysisRequest::new(&images, "profile", "  ").unwrap();
        assert_eq!(request.language(), "en");
    }

    #[test]
    fn test_result_serializes_with_wire_names() {
        let result = StyleAnalysisResult::new(
            "d".into(),
            "s".into(),
            false,
            None,
            "a".into(),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["objectiveDescription"], "d");
        assert_eq!(json["isStyleMatch"], false);
        assert!(json["outfitSuggestion"].is_null());
        assert_eq!(json["occasionAnalysis"], "a");
    }
}
