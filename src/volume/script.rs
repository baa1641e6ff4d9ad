//! macOS volume backend via `osascript`.

use std::process::{Command, Stdio};

use super::VolumeSink;
use crate::error::VolumeError;

/// Sets the output volume by spawning `osascript` per call.
///
/// No persistent handle: each call is a short-lived, synchronous subprocess
/// with stdout/stderr suppressed. The blocking wait is the loop's
/// backpressure point on this platform; slow volume-setting stalls frame
/// processing instead of queueing stale commands.
pub struct OsascriptVolume;

impl OsascriptVolume {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OsascriptVolume {
    fn default() -> Self {
        Self::new()
    }
}

impl VolumeSink for OsascriptVolume {
    fn set_volume(&mut self, percent: u8) -> Result<(), VolumeError> {
        let percent = percent.min(100);
        let status = Command::new("osascript")
            .args(["-e", &format!("set volume output volume {}", percent)])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| VolumeError::DeviceUnavailable(format!("osascript: {}", e)))?;

        if !status.success() {
            return Err(VolumeError::DeviceUnavailable(format!(
                "osascript exited with {:?}",
                status.code()
            )));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "osascript"
    }
}
