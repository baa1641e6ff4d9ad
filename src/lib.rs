//! pinch-rs - gesture-driven system volume control
//!
//! Consumes a per-frame stream of hand-landmark observations from an external
//! hand-pose estimator and turns a pinch gesture into a smooth, bounded
//! system volume: pinch thumb and index finger together, then raise or lower
//! the hand.
//!
//! # Architecture
//!
//! - `tracking`: landmark data model, frame ingestion, pinch detection
//! - `control`: position-to-volume mapping, smoothing and rate limiting, the
//!   per-frame loop
//! - `volume`: platform volume backends behind one capability trait
//! - `settings`: tunable parameters
//! - `error`: error types
//!
//! # Example
//!
//! ```no_run
//! use pinch_rs::{default_sink, ControlLoop, Settings};
//!
//! let settings = Settings::default();
//! let sink = default_sink(std::env::consts::OS).unwrap();
//! let mut control = ControlLoop::new(&settings, sink);
//!
//! // Per frame, with observations from the estimator:
//! let hands = vec![];
//! control.process(&hands);
//! println!("volume is {}%", control.volume());
//! ```

pub mod control;
pub mod error;
pub mod settings;
pub mod tracking;
pub mod volume;

// Re-exports for convenience
pub use control::{ControlLoop, PositionMapper, SignalConditioner};
pub use error::{PinchError, Result, TrackingError, VolumeError};
pub use settings::Settings;
pub use tracking::{FrameReader, HandObservation, Landmark, PinchClassifier};
pub use volume::{default_sink, VolumeSink};
