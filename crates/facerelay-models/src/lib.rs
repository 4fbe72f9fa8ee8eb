//! Shared data models for facerelay detector adapters.
//!
//! This crate provides Serde-serializable types for:
//! - Bounding boxes and their canonical top/left/width/height form
//! - Raw detector responses (predictions) and canonical match records
//! - Training outcomes
//! - Per-camera detection thresholds
//! - The pluggable post-decision check hook

pub mod checks;
pub mod detection;
pub mod match_record;
pub mod rect;
pub mod thresholds;
pub mod train;

// Re-export common types
pub use checks::{AcceptAll, CheckVerdict, DecisionCheck, DecisionContext};
pub use detection::{DetectorResponse, Prediction};
pub use match_record::{round_confidence, MatchRecord};
pub use rect::{BoundingBox, FaceBox};
pub use thresholds::{DetectConfig, DetectSettings, MatchThresholds, UnknownThresholds};
pub use train::{TrainOutcome, TrainStatus};
