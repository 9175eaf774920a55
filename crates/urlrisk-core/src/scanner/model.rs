//! Scan request/result models.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Incoming scan request.
///
/// `url` stays optional so that an absent field reaches the scanner as a
/// `MissingInput` error rather than failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScanRequest {
    #[serde(default, deserialize_with = "falsy_as_none")]
    pub url: Option<String>,
}

/// `null`, `false`, `0` and `""` all mean "no URL given". Any other
/// non-string value is rejected.
fn falsy_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Ok(Some(s)),
        Value::String(_) | Value::Null | Value::Bool(false) => Ok(None),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(None),
        other => Err(de::Error::custom(format!(
            "expected a URL string, found {other}"
        ))),
    }
}

/// Outcome of scoring a single URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// The input exactly as received.
    pub url: String,
    pub score: u32,
    /// One entry per triggered rule, in evaluation order.
    pub reasons: Vec<String>,
    pub verdict: Verdict,
}

/// Risk band derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Likely Phishing")]
    LikelyPhishing,
    #[serde(rename = "Suspicious")]
    Suspicious,
    #[serde(rename = "Caution")]
    Caution,
    #[serde(rename = "No major flags")]
    NoMajorFlags,
}

impl Verdict {
    /// Map a score to its band, checking from the highest threshold down.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 75 => Self::LikelyPhishing,
            s if s >= 50 => Self::Suspicious,
            s if s >= 25 => Self::Caution,
            _ => Self::NoMajorFlags,
        }
    }

    /// Human-readable label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LikelyPhishing => "Likely Phishing",
            Self::Suspicious => "Suspicious",
            Self::Caution => "Caution",
            Self::NoMajorFlags => "No major flags",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
