/// Wire and view types for the inference backend
///
/// These mirror the JSON the backend speaks. `RawCompareResponse` is the
/// loose shape as it arrives (old deployments only send two similarity
/// scalars); `ComparisonResult` is the display-ready shape after
/// normalization.
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::AppError;

/// Response of the predict endpoint. Labels are free-form and displayed
/// verbatim; either one may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub model1_prediction: Option<String>,
    pub model2_prediction: Option<String>,
}

/// Per-pair similarity verdict, either sent by the backend as-is or
/// synthesized client-side from a raw score. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetails {
    /// Authoritative score in [0.0, 1.0].
    pub similarity_score: f64,
    /// Score as a percentage, rounded to 2 decimals.
    pub similarity_percentage: f64,
    pub match_status: String,
    pub confidence_level: String,
    /// Display hex color for the tier, e.g. `#10b981`.
    pub color: String,
    pub recommendation: String,
    /// Lowercase tier key: excellent / high / moderate / low / none.
    pub match_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Aggregate statistics over the two pairs, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub average_similarity: f64,
    pub similarity_difference: f64,
    /// "High" / "Moderate" / "Low".
    pub consistency: String,
}

/// Cross-pair similarity. Only a backend can compute this; synthesized
/// results carry a zeroed placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossComparison {
    pub muzzle_similarity: f64,
    pub face_similarity: f64,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub pair1_match: String,
    pub pair2_match: String,
    pub overall_confidence: String,
}

/// Compare response exactly as it comes off the wire.
///
/// New backends send `pair1`/`pair2` (plus the optional blocks); legacy
/// backends send only `pair1_similarity`/`pair2_similarity` scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCompareResponse {
    pub success: Option<bool>,
    pub timestamp: Option<String>,
    pub pair1: Option<MatchDetails>,
    pub pair2: Option<MatchDetails>,
    pub pair1_similarity: Option<f64>,
    pub pair2_similarity: Option<f64>,
    pub analysis: Option<Analysis>,
    pub cross_comparison: Option<CrossComparison>,
    pub summary: Option<Summary>,
}

/// Display-ready comparison, produced by `normalize_response`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub success: Option<bool>,
    pub timestamp: Option<String>,
    pub pair1: MatchDetails,
    pub pair2: MatchDetails,
    pub analysis: Option<Analysis>,
    pub cross_comparison: Option<CrossComparison>,
    pub summary: Option<Summary>,
}

/// One image file ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePart {
    pub filename: String,
    pub bytes: Vec<u8>,
    /// Sniffed content type, e.g. `image/jpeg`.
    pub mime: &'static str,
}

impl ImagePart {
    pub fn new(path: &PathBuf, bytes: Vec<u8>, mime: &'static str) -> Self {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());

        ImagePart {
            filename,
            bytes,
            mime,
        }
    }
}

/// A validated predict submission. Constructing one proves the
/// precondition held: a request cannot exist without a selected file.
#[derive(Debug, Clone)]
pub struct PredictionRequest {
    pub image: ImagePart,
}

impl PredictionRequest {
    pub fn new(image: Option<ImagePart>) -> Result<Self, AppError> {
        let image = image.ok_or_else(|| AppError::validation("Please select an image"))?;
        Ok(PredictionRequest { image })
    }
}

/// A validated compare submission: endpoint plus the four images, in
/// `img1..img4` order (muzzle 1, face 1, muzzle 2, face 2).
///
/// Preconditions are checked in order, first failure wins:
/// 1. the backend base URL must be configured,
/// 2. all four slots must be populated.
#[derive(Debug, Clone)]
pub struct ComparisonRequest {
    pub endpoint: String,
    pub images: [ImagePart; 4],
}

impl ComparisonRequest {
    pub fn new(config: &Config, slots: [Option<ImagePart>; 4]) -> Result<Self, AppError> {
        let endpoint = config.compare_endpoint().ok_or(AppError::Configuration)?;

        let [muzzle1, face1, muzzle2, face2] = slots;
        match (muzzle1, face1, muzzle2, face2) {
            (Some(img1), Some(img2), Some(img3), Some(img4)) => Ok(ComparisonRequest {
                endpoint,
                images: [img1, img2, img3, img4],
            }),
            _ => Err(AppError::validation("Upload all 4 images")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(name: &str) -> ImagePart {
        ImagePart {
            filename: name.to_string(),
            bytes: vec![0xFF, 0xD8, 0xFF],
            mime: "image/jpeg",
        }
    }

    fn configured() -> Config {
        Config {
            api_base_url: Some("https://api.example.com".to_string()),
        }
    }

    #[test]
    fn test_comparison_request_requires_config_first() {
        // Even with all four images missing, the configuration check wins.
        let err = ComparisonRequest::new(&Config::default(), [None, None, None, None])
            .unwrap_err();
        assert_eq!(err, AppError::Configuration);
    }

    #[test]
    fn test_comparison_request_requires_all_four_images() {
        let slots = [Some(part("a.jpg")), Some(part("b.jpg")), None, Some(part("d.jpg"))];
        let err = ComparisonRequest::new(&configured(), slots).unwrap_err();
        assert_eq!(err, AppError::validation("Upload all 4 images"));
    }

    #[test]
    fn test_comparison_request_maps_slots_in_order() {
        let slots = [
            Some(part("m1.jpg")),
            Some(part("f1.jpg")),
            Some(part("m2.jpg")),
            Some(part("f2.jpg")),
        ];
        let request = ComparisonRequest::new(&configured(), slots).unwrap();

        assert_eq!(request.endpoint, "https://api.example.com/compare/");
        let names: Vec<&str> = request
            .images
            .iter()
            .map(|image| image.filename.as_str())
            .collect();
        assert_eq!(names, vec!["m1.jpg", "f1.jpg", "m2.jpg", "f2.jpg"]);
    }

    #[test]
    fn test_prediction_request_requires_an_image() {
        let err = PredictionRequest::new(None).unwrap_err();
        assert_eq!(err, AppError::validation("Please select an image"));
        assert!(PredictionRequest::new(Some(part("dog.png"))).is_ok());
    }

    #[test]
    fn test_legacy_wire_shape_decodes() {
        // What an old backend actually sends: two scalars, nothing else.
        let json = r#"{"pair1_similarity": 0.97, "pair2_similarity": 0.60}"#;

        let raw: RawCompareResponse = serde_json::from_str(json).unwrap();

        assert_eq!(raw.pair1_similarity, Some(0.97));
        assert_eq!(raw.pair2_similarity, Some(0.60));
        assert!(raw.pair1.is_none());
        assert!(raw.pair2.is_none());
        assert!(raw.analysis.is_none());
    }

    #[test]
    fn test_annotated_wire_shape_decodes() {
        let json = r##"{
            "success": true,
            "timestamp": "2024-05-01T10:00:00.000Z",
            "pair1": {
                "similarity_score": 0.91,
                "similarity_percentage": 91.0,
                "match_status": "High",
                "confidence_level": "High",
                "color": "#22c55e",
                "recommendation": "Likely same",
                "match_level": "high",
                "label": "P1"
            },
            "pair2": {
                "similarity_score": 0.42,
                "similarity_percentage": 42.0,
                "match_status": "No Match",
                "confidence_level": "Very Low",
                "color": "#dc2626",
                "recommendation": "Different animals",
                "match_level": "none"
            },
            "analysis": {
                "average_similarity": 66.5,
                "similarity_difference": 49.0,
                "consistency": "Low"
            },
            "summary": {
                "pair1_match": "High",
                "pair2_match": "No Match",
                "overall_confidence": "High"
            },
            "model_version": "2.3.1"
        }"##;

        let raw: RawCompareResponse = serde_json::from_str(json).unwrap();

        let pair1 = raw.pair1.unwrap();
        assert_eq!(pair1.similarity_score, 0.91);
        assert_eq!(pair1.label.as_deref(), Some("P1"));

        // A pair without a label is still valid, and unknown fields
        // from newer backends are ignored.
        let pair2 = raw.pair2.unwrap();
        assert_eq!(pair2.label, None);
        assert_eq!(pair2.match_status, "No Match");

        assert_eq!(raw.analysis.unwrap().consistency, "Low");
        assert_eq!(raw.summary.unwrap().overall_confidence, "High");
        assert!(raw.cross_comparison.is_none());
    }

    #[test]
    fn test_pair_without_score_is_rejected_as_malformed() {
        let json = r#"{"pair1": {"match_status": "High"}, "pair2_similarity": 0.5}"#;
        assert!(serde_json::from_str::<RawCompareResponse>(json).is_err());
    }

    #[test]
    fn test_prediction_result_decodes_with_missing_labels() {
        let raw: PredictionResult =
            serde_json::from_str(r#"{"model1_prediction": "labrador"}"#).unwrap();
        assert_eq!(raw.model1_prediction.as_deref(), Some("labrador"));
        assert_eq!(raw.model2_prediction, None);
    }
}
