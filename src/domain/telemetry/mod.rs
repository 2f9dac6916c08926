//! Telemetry value types and the fixed model tier enumeration.
//!
//! Everything here is a plain immutable value: constructed once, never
//! mutated, safe to hand to any serialization layer. The catalog in
//! [`catalog`] is the only producer.

mod catalog;

pub use catalog::{list_models, performance_data};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Headline statistics for a trained model.
///
/// All fields are non-negative finite numbers. `best_lap_time` is in
/// seconds, `avg_completion` is a percentage, `training_time` is in
/// hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub best_lap_time: f64,
    pub avg_completion: f64,
    pub total_reward: f64,
    pub training_time: f64,
}

/// One point on the episode-indexed training curve.
///
/// A sequence of these has strictly increasing episode indices;
/// `completion` is a percentage in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingProgressPoint {
    pub episode: u32,
    pub reward: f64,
    pub completion: f64,
}

/// A single lap and its time in seconds.
///
/// Lap numbers start at 1 and are contiguous within a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LapTime {
    pub lap: u32,
    pub time: f64,
}

/// Average speed through one track segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedMetric {
    pub segment: TrackSegment,
    pub speed: f64,
}

/// Reward accumulated under one reward-function category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardBreakdownEntry {
    pub category: RewardCategory,
    pub value: f64,
}

/// Full telemetry bundle for one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceData {
    pub metrics: PerformanceMetrics,
    pub training_progress: Vec<TrainingProgressPoint>,
    pub lap_times: Vec<LapTime>,
    pub speed_metrics: Vec<SpeedMetric>,
    pub reward_breakdown: Vec<RewardBreakdownEntry>,
}

/// A known model identifier paired with its bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    pub model_id: String,
    pub data: PerformanceData,
}

/// The fixed set of track segments speed is reported for.
///
/// Wire labels are fixed: `Straight`, `Curve-Light`, `Curve-Sharp`,
/// `Hairpin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackSegment {
    Straight,
    #[serde(rename = "Curve-Light")]
    CurveLight,
    #[serde(rename = "Curve-Sharp")]
    CurveSharp,
    Hairpin,
}

impl fmt::Display for TrackSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackSegment::Straight => write!(f, "Straight"),
            TrackSegment::CurveLight => write!(f, "Curve-Light"),
            TrackSegment::CurveSharp => write!(f, "Curve-Sharp"),
            TrackSegment::Hairpin => write!(f, "Hairpin"),
        }
    }
}

/// The fixed set of reward-function categories.
///
/// Wire labels are fixed: `Center Line`, `Speed`, `Progress`,
/// `Heading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardCategory {
    #[serde(rename = "Center Line")]
    CenterLine,
    Speed,
    Progress,
    Heading,
}

impl fmt::Display for RewardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewardCategory::CenterLine => write!(f, "Center Line"),
            RewardCategory::Speed => write!(f, "Speed"),
            RewardCategory::Progress => write!(f, "Progress"),
            RewardCategory::Heading => write!(f, "Heading"),
        }
    }
}

/// Performance tier backing each known model identifier.
///
/// The mapping from identifier strings is total: the three known
/// identifiers map to their own tier, every other string resolves to
/// `Intermediate`. No identifier is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    Beginner,
    Intermediate,
    Advanced,
}

impl ModelTier {
    /// Every tier, in the fixed listing order (v1, v2, v3).
    pub const ALL: [ModelTier; 3] = [
        ModelTier::Beginner,
        ModelTier::Intermediate,
        ModelTier::Advanced,
    ];

    /// Resolves an identifier string to its tier.
    ///
    /// Matching is exact (case-sensitive). Unknown identifiers fall
    /// back to the intermediate tier.
    pub fn from_model_id(model_id: &str) -> Self {
        match model_id {
            "model-v1" => ModelTier::Beginner,
            "model-v3" => ModelTier::Advanced,
            _ => ModelTier::Intermediate,
        }
    }

    /// The canonical identifier string for this tier.
    pub fn model_id(self) -> &'static str {
        match self {
            ModelTier::Beginner => "model-v1",
            ModelTier::Intermediate => "model-v2",
            ModelTier::Advanced => "model-v3",
        }
    }
}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.model_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_identifiers_resolve_to_their_tier() {
        assert_eq!(ModelTier::from_model_id("model-v1"), ModelTier::Beginner);
        assert_eq!(
            ModelTier::from_model_id("model-v2"),
            ModelTier::Intermediate
        );
        assert_eq!(ModelTier::from_model_id("model-v3"), ModelTier::Advanced);
    }

    #[test]
    fn test_unknown_identifiers_fall_back_to_intermediate() {
        assert_eq!(ModelTier::from_model_id(""), ModelTier::Intermediate);
        assert_eq!(
            ModelTier::from_model_id("model-v4"),
            ModelTier::Intermediate
        );
        // Matching is case-sensitive.
        assert_eq!(
            ModelTier::from_model_id("MODEL-V1"),
            ModelTier::Intermediate
        );
        assert_eq!(
            ModelTier::from_model_id("Model-V3"),
            ModelTier::Intermediate
        );
    }

    #[test]
    fn test_tier_identifiers_round_trip() {
        for tier in ModelTier::ALL {
            assert_eq!(ModelTier::from_model_id(tier.model_id()), tier);
        }
    }

    #[test]
    fn test_segment_wire_labels() {
        let json = serde_json::to_string(&TrackSegment::CurveLight).expect("serialize");
        assert_eq!(json, "\"Curve-Light\"");
        let json = serde_json::to_string(&TrackSegment::CurveSharp).expect("serialize");
        assert_eq!(json, "\"Curve-Sharp\"");
        assert_eq!(TrackSegment::Hairpin.to_string(), "Hairpin");
    }

    #[test]
    fn test_category_wire_labels() {
        let json = serde_json::to_string(&RewardCategory::CenterLine).expect("serialize");
        assert_eq!(json, "\"Center Line\"");
        assert_eq!(RewardCategory::Heading.to_string(), "Heading");
    }
}
