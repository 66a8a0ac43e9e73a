/// Compare-response normalization
///
/// Old deployments of the compare backend only return two raw similarity
/// scalars; newer ones return fully annotated pair details. This module
/// folds both shapes into one display-ready `ComparisonResult`:
/// a response that already carries `pair1`/`pair2` passes through untouched,
/// a legacy response is synthesized from its scalars with the tier table
/// below.
use chrono::{SecondsFormat, Utc};

use super::types::{
    Analysis, ComparisonResult, CrossComparison, MatchDetails, RawCompareResponse, Summary,
};

/// Ordinal match tier derived from a similarity score.
///
/// Boundaries are inclusive on the lower bound: a score of exactly 0.95
/// is Excellent, exactly 0.85 is High, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Excellent,
    High,
    Moderate,
    Low,
    NoMatch,
}

impl MatchTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.95 {
            MatchTier::Excellent
        } else if score >= 0.85 {
            MatchTier::High
        } else if score >= 0.70 {
            MatchTier::Moderate
        } else if score >= 0.50 {
            MatchTier::Low
        } else {
            MatchTier::NoMatch
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            MatchTier::Excellent => "Excellent",
            MatchTier::High => "High",
            MatchTier::Moderate => "Moderate",
            MatchTier::Low => "Low",
            MatchTier::NoMatch => "No Match",
        }
    }

    pub fn confidence(&self) -> &'static str {
        match self {
            MatchTier::Excellent => "Very High",
            MatchTier::High => "High",
            MatchTier::Moderate => "Moderate",
            MatchTier::Low => "Low",
            MatchTier::NoMatch => "Very Low",
        }
    }

    /// Display color, not behaviorally load-bearing but part of the
    /// backend's contract for annotated results.
    pub fn color(&self) -> &'static str {
        match self {
            MatchTier::Excellent => "#10b981",
            MatchTier::High => "#22c55e",
            MatchTier::Moderate => "#f59e0b",
            MatchTier::Low => "#ef4444",
            MatchTier::NoMatch => "#dc2626",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            MatchTier::Excellent => "Same animal",
            MatchTier::High => "Likely same",
            MatchTier::Moderate => "Verify manually",
            MatchTier::Low => "Unlikely same",
            MatchTier::NoMatch => "Different animals",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            MatchTier::Excellent => "excellent",
            MatchTier::High => "high",
            MatchTier::Moderate => "moderate",
            MatchTier::Low => "low",
            MatchTier::NoMatch => "none",
        }
    }
}

/// Round to 2 decimals, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build full pair details from a raw similarity score.
pub fn match_details(score: f64, label: &str) -> MatchDetails {
    let tier = MatchTier::from_score(score);

    MatchDetails {
        similarity_score: score,
        similarity_percentage: round2(score * 100.0),
        match_status: tier.status().to_string(),
        confidence_level: tier.confidence().to_string(),
        color: tier.color().to_string(),
        recommendation: tier.recommendation().to_string(),
        match_level: tier.key().to_string(),
        label: Some(label.to_string()),
    }
}

/// Consistency of the two pair scores. Bounds are exclusive on the lower
/// tier: a difference of exactly 0.10 is already Moderate, 0.20 is Low.
fn consistency(difference: f64) -> &'static str {
    if difference < 0.10 {
        "High"
    } else if difference < 0.20 {
        "Moderate"
    } else {
        "Low"
    }
}

/// Fold a raw compare response into the display shape.
///
/// Annotated responses pass through unchanged; legacy responses are
/// synthesized from their two scalars (a missing scalar counts as 0.0).
/// The timestamp on a synthesized result is the client's clock, not any
/// server time.
pub fn normalize_response(raw: RawCompareResponse) -> ComparisonResult {
    if let (Some(pair1), Some(pair2)) = (raw.pair1, raw.pair2) {
        return ComparisonResult {
            success: raw.success,
            timestamp: raw.timestamp,
            pair1,
            pair2,
            analysis: raw.analysis,
            cross_comparison: raw.cross_comparison,
            summary: raw.summary,
        };
    }

    let score1 = raw.pair1_similarity.unwrap_or(0.0);
    let score2 = raw.pair2_similarity.unwrap_or(0.0);
    let average = (score1 + score2) / 2.0;
    let difference = (score1 - score2).abs();
    let best = if score1 > score2 { score1 } else { score2 };

    let pair1 = match_details(score1, "P1");
    let pair2 = match_details(score2, "P2");

    let summary = Summary {
        pair1_match: pair1.match_status.clone(),
        pair2_match: pair2.match_status.clone(),
        overall_confidence: MatchTier::from_score(best).confidence().to_string(),
    };

    ComparisonResult {
        success: Some(true),
        timestamp: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        pair1,
        pair2,
        analysis: Some(Analysis {
            average_similarity: round2(average * 100.0),
            similarity_difference: round2(difference * 100.0),
            consistency: consistency(difference).to_string(),
        }),
        cross_comparison: Some(CrossComparison {
            muzzle_similarity: 0.0,
            face_similarity: 0.0,
            interpretation: "Cross-comparison not available".to_string(),
        }),
        summary: Some(summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy(score1: f64, score2: f64) -> RawCompareResponse {
        RawCompareResponse {
            success: None,
            timestamp: None,
            pair1: None,
            pair2: None,
            pair1_similarity: Some(score1),
            pair2_similarity: Some(score2),
            analysis: None,
            cross_comparison: None,
            summary: None,
        }
    }

    #[test]
    fn test_tier_boundaries_are_inclusive_on_the_lower_bound() {
        assert_eq!(MatchTier::from_score(1.0), MatchTier::Excellent);
        assert_eq!(MatchTier::from_score(0.95), MatchTier::Excellent);
        assert_eq!(MatchTier::from_score(0.9499999), MatchTier::High);
        assert_eq!(MatchTier::from_score(0.85), MatchTier::High);
        assert_eq!(MatchTier::from_score(0.8499999), MatchTier::Moderate);
        assert_eq!(MatchTier::from_score(0.70), MatchTier::Moderate);
        assert_eq!(MatchTier::from_score(0.6999999), MatchTier::Low);
        assert_eq!(MatchTier::from_score(0.50), MatchTier::Low);
        assert_eq!(MatchTier::from_score(0.4999999), MatchTier::NoMatch);
        assert_eq!(MatchTier::from_score(0.0), MatchTier::NoMatch);
    }

    #[test]
    fn test_percentage_rounds_to_two_decimals() {
        let details = match_details(0.8734567, "P1");
        assert_eq!(details.similarity_percentage, 87.35);
        assert_eq!(details.similarity_score, 0.8734567);
    }

    #[test]
    fn test_tier_strings() {
        let details = match_details(0.96, "P1");
        assert_eq!(details.match_status, "Excellent");
        assert_eq!(details.confidence_level, "Very High");
        assert_eq!(details.color, "#10b981");
        assert_eq!(details.recommendation, "Same animal");
        assert_eq!(details.match_level, "excellent");
        assert_eq!(details.label.as_deref(), Some("P1"));

        let details = match_details(0.3, "P2");
        assert_eq!(details.match_status, "No Match");
        assert_eq!(details.confidence_level, "Very Low");
        assert_eq!(details.color, "#dc2626");
        assert_eq!(details.recommendation, "Different animals");
        assert_eq!(details.match_level, "none");
    }

    #[test]
    fn test_consistency_boundaries() {
        assert_eq!(consistency(0.099999), "High");
        assert_eq!(consistency(0.10), "Moderate");
        assert_eq!(consistency(0.199999), "Moderate");
        assert_eq!(consistency(0.20), "Low");
        assert_eq!(consistency(0.37), "Low");
    }

    #[test]
    fn test_legacy_response_is_synthesized() {
        let result = normalize_response(legacy(0.97, 0.60));

        assert_eq!(result.success, Some(true));
        assert!(result.timestamp.is_some());

        assert_eq!(result.pair1.match_status, "Excellent");
        assert_eq!(result.pair2.match_status, "Low");
        assert_eq!(result.pair1.similarity_percentage, 97.0);
        assert_eq!(result.pair2.similarity_percentage, 60.0);

        let analysis = result.analysis.unwrap();
        assert_eq!(analysis.average_similarity, 78.5);
        assert_eq!(analysis.similarity_difference, 37.0);
        assert_eq!(analysis.consistency, "Low");

        let summary = result.summary.unwrap();
        assert_eq!(summary.pair1_match, "Excellent");
        assert_eq!(summary.pair2_match, "Low");
        assert_eq!(summary.overall_confidence, "Very High");

        let cross = result.cross_comparison.unwrap();
        assert_eq!(cross.muzzle_similarity, 0.0);
        assert_eq!(cross.face_similarity, 0.0);
        assert_eq!(cross.interpretation, "Cross-comparison not available");
    }

    #[test]
    fn test_legacy_missing_scalars_default_to_zero() {
        let mut raw = legacy(0.0, 0.0);
        raw.pair1_similarity = None;
        raw.pair2_similarity = None;

        let result = normalize_response(raw);
        assert_eq!(result.pair1.similarity_score, 0.0);
        assert_eq!(result.pair2.match_status, "No Match");
    }

    #[test]
    fn test_annotated_response_passes_through_unchanged() {
        let raw = RawCompareResponse {
            success: Some(true),
            timestamp: Some("2024-05-01T10:00:00.000Z".to_string()),
            pair1: Some(match_details(0.91, "P1")),
            pair2: Some(match_details(0.42, "P2")),
            pair1_similarity: None,
            pair2_similarity: None,
            analysis: Some(Analysis {
                average_similarity: 66.5,
                similarity_difference: 49.0,
                consistency: "Low".to_string(),
            }),
            cross_comparison: Some(CrossComparison {
                muzzle_similarity: 0.81,
                face_similarity: 0.77,
                interpretation: "Pairs are cross-consistent".to_string(),
            }),
            summary: None,
        };

        let result = normalize_response(raw.clone());

        // Passthrough keeps the backend's data verbatim, server
        // timestamp included.
        assert_eq!(result.timestamp, raw.timestamp);
        assert_eq!(Some(result.pair1), raw.pair1);
        assert_eq!(Some(result.pair2), raw.pair2);
        assert_eq!(result.analysis, raw.analysis);
        assert_eq!(result.cross_comparison, raw.cross_comparison);
        assert_eq!(result.summary, None);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let first = normalize_response(legacy(0.88, 0.86));

        // Feed the normalized result back in as an annotated response.
        let again = normalize_response(RawCompareResponse {
            success: first.success,
            timestamp: first.timestamp.clone(),
            pair1: Some(first.pair1.clone()),
            pair2: Some(first.pair2.clone()),
            pair1_similarity: None,
            pair2_similarity: None,
            analysis: first.analysis.clone(),
            cross_comparison: first.cross_comparison.clone(),
            summary: first.summary.clone(),
        });

        assert_eq!(again, first);
    }
}
