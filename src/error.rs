//! Error types for pinch-rs.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum PinchError {
    #[error("Volume backend error: {0}")]
    Volume(#[from] VolumeError),

    #[error("Tracking error: {0}")]
    Tracking(#[from] TrackingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the platform volume backends.
///
/// Construction-time errors are fatal: the control loop must not start
/// without a working backend. Per-frame `set_volume` failures are caught at
/// the loop boundary and downgraded to a logged, skipped actuation.
#[derive(Error, Debug)]
pub enum VolumeError {
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Audio device unavailable: {0}")]
    DeviceUnavailable(String),
}

/// Malformed landmark data from the upstream hand-pose estimator.
///
/// Transient estimator glitches are expected; the control loop treats these
/// as "no gesture this frame" rather than crashing.
#[derive(Error, Debug)]
pub enum TrackingError {
    #[error("Missing landmark index {index}")]
    MissingLandmark { index: usize },
}

pub type Result<T> = std::result::Result<T, PinchError>;
