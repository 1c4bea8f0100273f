//! Wire DTOs for the voice-analysis record service.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON. Shapes are checked once at
//! the service boundary (`net::api::parse_record_page`) so page and component
//! code can index tracked metrics without re-validating.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Metric key for speech clarity.
pub const METRIC_CLARITY: &str = "명료도(Clarity)";
/// Metric key for utterance energy.
pub const METRIC_ENERGY: &str = "발화의 에너지(Utterance Energy)";
/// Metric key for the melody (intonation) index.
pub const METRIC_MELODY: &str = "멜로디 지수(Melody Index)";

/// Metrics rendered inline on every record row, as `(key, label)` pairs.
pub const TRACKED_METRICS: [(&str, &str); 3] = [
    (METRIC_CLARITY, "명료도"),
    (METRIC_ENERGY, "발화 에너지"),
    (METRIC_MELODY, "멜로디"),
];

/// Standard backend response envelope. Only `data` is consumed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// One page of analysis records as returned by `GET /record`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPage {
    /// Records on this page, in server order.
    pub content: Vec<AnalysisRecord>,
    /// Total number of pages for the current page size.
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub total_pages: u32,
}

/// A stored voice-analysis result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    /// Stable, unique record identifier.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub record_id: i64,
    pub title: String,
    /// Creation timestamp exactly as formatted by the backend.
    pub created_at: String,
    pub analyze_result: AnalyzeResult,
}

/// Analysis payload attached to a record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResult {
    #[serde(default)]
    pub metrics: BTreeMap<String, MetricResult>,
}

impl AnalyzeResult {
    /// Look up a metric by its exact backend key.
    pub fn metric(&self, key: &str) -> Option<&MetricResult> {
        self.metrics.get(key)
    }

    /// Grades of every metric present, in key order.
    pub fn grades(&self) -> impl Iterator<Item = &Grade> {
        self.metrics.values().map(|m| &m.grade)
    }
}

/// Result for a single metric.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    pub grade: Grade,
}

/// Per-metric quality tier.
///
/// Unknown tiers (e.g. `"poor"`, `"fair"`) are kept verbatim so they can still
/// be displayed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Grade {
    Excellent,
    Good,
    Other(String),
}

impl Grade {
    /// Wire/display text for this grade.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Grade {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "excellent" => Self::Excellent,
            "good" => Self::Good,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for Grade {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_owned())
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        match grade {
            Grade::Other(raw) => raw,
            other => other.as_str().to_owned(),
        }
    }
}

fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_i64_from_number(deserializer)?;
    u32::try_from(value).map_err(|_| D::Error::custom(format!("value {value} out of range for u32")))
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
