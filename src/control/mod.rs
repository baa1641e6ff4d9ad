//! Control module - the signal path from landmarks to applied volume
//!
//! This module provides:
//! - Position-to-volume mapping with dead-zone margins
//! - Exponential smoothing and per-frame rate limiting
//! - The per-frame control loop

mod mapper;
mod runner;
mod smoother;

pub use mapper::PositionMapper;
pub use runner::ControlLoop;
pub use smoother::{rate_limit, ExponentialSmoother, SignalConditioner};
