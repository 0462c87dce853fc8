use serde::{Deserialize, Serialize};

use crate::engine::VerificationResult;

/// Body of `POST /verify_title`. A missing `title` is treated as empty.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct VerifyRequest {
    #[serde(default)]
    pub title: String,
}

/// Body returned for every completed verification, accepted or rejected.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VerifyResponse {
    pub status: String,
    /// Human-readable rejection message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_title: Option<String>,
    /// Fused score rounded to 3 decimals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_probability: Option<f64>,
}

impl From<&VerificationResult> for VerifyResponse {
    fn from(result: &VerificationResult) -> Self {
        Self {
            status: result.status.as_str().to_string(),
            reason: result.reason.as_ref().map(|r| r.message()),
            reason_code: result.reason.as_ref().map(|r| r.code().to_string()),
            matched_title: result.matched_title.clone(),
            similarity_score: result.similarity_score.map(round_score),
            verification_probability: result.verification_probability,
        }
    }
}

fn round_score(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}
