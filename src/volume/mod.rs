//! Volume module - platform backends behind one capability trait
//!
//! Each backend owns its native handle for the process lifetime and applies a
//! percentage to the host's default audio output. The backend is picked once
//! at startup from the host OS identity; an unrecognized OS is a fatal error,
//! not a silent no-op.
//!
//! Calls into the native audio APIs carry no timeout. A hung audio server
//! hangs the control loop; only the latest volume matters, so stalling beats
//! queueing stale commands.

use crate::error::VolumeError;

#[cfg(target_os = "windows")]
mod endpoint;
#[cfg(target_os = "linux")]
mod pulse;
#[cfg(target_os = "macos")]
mod script;

#[cfg(target_os = "windows")]
pub use endpoint::EndpointVolume;
#[cfg(target_os = "linux")]
pub use pulse::PulseVolume;
#[cfg(target_os = "macos")]
pub use script::OsascriptVolume;

/// The thing that can change the OS's output volume, whatever the platform.
///
/// `set_volume` is idempotent and side-effecting only on the host audio
/// subsystem; values above 100 are clamped.
pub trait VolumeSink {
    fn set_volume(&mut self, percent: u8) -> Result<(), VolumeError>;

    /// Human-readable backend name for logs.
    fn name(&self) -> &'static str;
}

/// Build the volume backend for the given host OS identity
/// (`std::env::consts::OS`).
///
/// Selection happens exactly once; the returned sink is held for the process
/// lifetime. Device acquisition failure is fatal here: there is no fallback
/// enumeration and the control loop must not start without a working sink.
pub fn default_sink(os: &str) -> Result<Box<dyn VolumeSink>, VolumeError> {
    match os {
        #[cfg(target_os = "windows")]
        "windows" => Ok(Box::new(EndpointVolume::new()?)),
        #[cfg(target_os = "linux")]
        "linux" => Ok(Box::new(PulseVolume::new()?)),
        #[cfg(target_os = "macos")]
        "macos" => Ok(Box::new(OsascriptVolume::new())),
        other => Err(VolumeError::UnsupportedPlatform(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_platform_is_fatal() {
        let err = default_sink("bsd").err().unwrap();
        assert!(matches!(err, VolumeError::UnsupportedPlatform(ref os) if os == "bsd"));
    }

    #[test]
    fn empty_platform_is_fatal() {
        assert!(default_sink("").is_err());
    }
}
