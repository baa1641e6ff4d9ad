//! Tracking module - landmark data model, frame ingestion, pinch detection
//!
//! This module provides:
//! - The hand-landmark data model shared with the external pose estimator
//! - Newline-delimited-JSON frame ingestion
//! - The pinch gesture classifier

mod feed;
mod gesture;
pub mod landmarks;

pub use feed::{Frame, FrameReader};
pub use gesture::PinchClassifier;
pub use landmarks::{HandObservation, Landmark};
