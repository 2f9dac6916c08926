//! The fixed model performance catalog.
//!
//! Three known identifiers, each backed by a literal telemetry bundle.
//! Both operations are pure functions over compiled-in literals: no
//! state, no I/O, deterministic output for a given identifier.

use super::{
    LapTime, ModelRecord, ModelTier, PerformanceData, PerformanceMetrics, RewardBreakdownEntry,
    RewardCategory, SpeedMetric, TrackSegment, TrainingProgressPoint,
};

/// Returns the telemetry bundle for `model_id`.
///
/// Known identifiers return their own bundle; any other string returns
/// the intermediate (`model-v2`) bundle. This is a fallback policy,
/// not an error path: no identifier can cause a failure.
pub fn performance_data(model_id: &str) -> PerformanceData {
    tier_data(ModelTier::from_model_id(model_id))
}

/// Returns every known model with its bundle, in the fixed order
/// `model-v1`, `model-v2`, `model-v3`.
///
/// Each bundle is built independently per identifier.
pub fn list_models() -> Vec<ModelRecord> {
    ModelTier::ALL
        .into_iter()
        .map(|tier| ModelRecord {
            model_id: tier.model_id().to_string(),
            data: tier_data(tier),
        })
        .collect()
}

fn tier_data(tier: ModelTier) -> PerformanceData {
    match tier {
        ModelTier::Beginner => beginner_data(),
        ModelTier::Intermediate => intermediate_data(),
        ModelTier::Advanced => advanced_data(),
    }
}

fn progress(episode: u32, reward: f64, completion: f64) -> TrainingProgressPoint {
    TrainingProgressPoint {
        episode,
        reward,
        completion,
    }
}

fn lap(lap: u32, time: f64) -> LapTime {
    LapTime { lap, time }
}

fn speed(segment: TrackSegment, speed: f64) -> SpeedMetric {
    SpeedMetric { segment, speed }
}

fn reward(category: RewardCategory, value: f64) -> RewardBreakdownEntry {
    RewardBreakdownEntry { category, value }
}

// Beginner tier: slower but steady.
fn beginner_data() -> PerformanceData {
    PerformanceData {
        metrics: PerformanceMetrics {
            best_lap_time: 22.8,
            avg_completion: 68.5,
            total_reward: 145.2,
            training_time: 3.8,
        },
        training_progress: vec![
            progress(0, 8.0, 12.0),
            progress(10, 35.0, 28.0),
            progress(20, 65.0, 45.0),
            progress(30, 95.0, 58.0),
            progress(40, 125.0, 65.0),
            progress(50, 145.0, 68.0),
        ],
        lap_times: vec![
            lap(1, 32.5),
            lap(2, 28.3),
            lap(3, 25.7),
            lap(4, 24.1),
            lap(5, 22.8),
        ],
        speed_metrics: vec![
            speed(TrackSegment::Straight, 2.8),
            speed(TrackSegment::CurveLight, 2.2),
            speed(TrackSegment::CurveSharp, 1.5),
            speed(TrackSegment::Hairpin, 1.1),
        ],
        reward_breakdown: vec![
            reward(RewardCategory::CenterLine, 45.0),
            reward(RewardCategory::Speed, 28.0),
            reward(RewardCategory::Progress, 38.0),
            reward(RewardCategory::Heading, 34.0),
        ],
    }
}

// Intermediate tier: balanced. Also serves as the fallback bundle.
fn intermediate_data() -> PerformanceData {
    PerformanceData {
        metrics: PerformanceMetrics {
            best_lap_time: 18.2,
            avg_completion: 87.3,
            total_reward: 192.5,
            training_time: 4.2,
        },
        training_progress: vec![
            progress(0, 12.0, 15.0),
            progress(10, 55.0, 42.0),
            progress(20, 98.0, 65.0),
            progress(30, 145.0, 78.0),
            progress(40, 175.0, 85.0),
            progress(50, 192.0, 87.0),
        ],
        lap_times: vec![
            lap(1, 28.4),
            lap(2, 24.1),
            lap(3, 21.8),
            lap(4, 19.5),
            lap(5, 18.2),
        ],
        speed_metrics: vec![
            speed(TrackSegment::Straight, 3.5),
            speed(TrackSegment::CurveLight, 2.8),
            speed(TrackSegment::CurveSharp, 2.0),
            speed(TrackSegment::Hairpin, 1.4),
        ],
        reward_breakdown: vec![
            reward(RewardCategory::CenterLine, 58.0),
            reward(RewardCategory::Speed, 42.0),
            reward(RewardCategory::Progress, 52.0),
            reward(RewardCategory::Heading, 40.0),
        ],
    }
}

// Advanced tier: fast and aggressive.
fn advanced_data() -> PerformanceData {
    PerformanceData {
        metrics: PerformanceMetrics {
            best_lap_time: 15.6,
            avg_completion: 94.8,
            total_reward: 248.7,
            training_time: 5.1,
        },
        training_progress: vec![
            progress(0, 18.0, 22.0),
            progress(10, 72.0, 55.0),
            progress(20, 128.0, 75.0),
            progress(30, 185.0, 88.0),
            progress(40, 225.0, 92.0),
            progress(50, 248.0, 94.0),
        ],
        lap_times: vec![
            lap(1, 24.2),
            lap(2, 20.1),
            lap(3, 17.8),
            lap(4, 16.5),
            lap(5, 15.6),
        ],
        speed_metrics: vec![
            speed(TrackSegment::Straight, 4.2),
            speed(TrackSegment::CurveLight, 3.4),
            speed(TrackSegment::CurveSharp, 2.6),
            speed(TrackSegment::Hairpin, 1.8),
        ],
        reward_breakdown: vec![
            reward(RewardCategory::CenterLine, 72.0),
            reward(RewardCategory::Speed, 65.0),
            reward(RewardCategory::Progress, 68.0),
            reward(RewardCategory::Heading, 43.0),
        ],
    }
}
