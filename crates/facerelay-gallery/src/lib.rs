//! Detector adapter for a self-hosted photo-gallery backend.
//!
//! The gallery runs its own ML face detection and recognition behind an
//! asynchronous job queue. This adapter translates the aggregator's
//! recognize/train/remove/normalize contract into that REST surface:
//! upload, trigger backend processing, poll with a bounded retry budget,
//! collect results, optionally clean up.

pub mod adapter;
pub mod cleanup;
pub mod client;
pub mod config;
pub mod error;
pub mod jobs;
pub mod normalize;
pub mod people;
pub mod pipeline;
pub mod store;
pub mod types;

pub use adapter::GalleryDetector;
pub use cleanup::Advisory;
pub use client::GalleryClient;
pub use config::GalleryConfig;
pub use error::{GalleryError, GalleryResult};
pub use jobs::ensure_job_idle;
pub use store::{MemoryTrainStore, StoreError, TrainStore};
pub use types::{AssetStatus, Face, JobName, JobStatus, Person, UploadedAsset};
