//! Windows volume backend via the WASAPI endpoint-volume interface.

use windows::Win32::Media::Audio::Endpoints::IAudioEndpointVolume;
use windows::Win32::Media::Audio::{eMultimedia, eRender, IMMDeviceEnumerator, MMDeviceEnumerator};
use windows::Win32::System::Com::{
    CoCreateInstance, CoInitializeEx, CLSCTX_ALL, COINIT_MULTITHREADED,
};

use super::VolumeSink;
use crate::error::VolumeError;

/// Master-volume handle for the default render endpoint.
///
/// COM is initialized and the endpoint interface acquired once at startup,
/// then held for the process lifetime. If the default device can't be
/// acquired, construction fails; there is no fallback enumeration.
pub struct EndpointVolume {
    endpoint: IAudioEndpointVolume,
}

impl EndpointVolume {
    pub fn new() -> Result<Self, VolumeError> {
        unsafe {
            CoInitializeEx(None, COINIT_MULTITHREADED)
                .ok()
                .map_err(|e| VolumeError::DeviceUnavailable(format!("COM init: {}", e)))?;

            let enumerator: IMMDeviceEnumerator =
                CoCreateInstance(&MMDeviceEnumerator, None, CLSCTX_ALL).map_err(|e| {
                    VolumeError::DeviceUnavailable(format!("device enumerator: {}", e))
                })?;

            let device = enumerator
                .GetDefaultAudioEndpoint(eRender, eMultimedia)
                .map_err(|e| {
                    VolumeError::DeviceUnavailable(format!("no default endpoint: {}", e))
                })?;

            let endpoint = device
                .Activate::<IAudioEndpointVolume>(CLSCTX_ALL, None)
                .map_err(|e| VolumeError::DeviceUnavailable(format!("endpoint volume: {}", e)))?;

            log::info!("WASAPI: default render endpoint acquired");
            Ok(Self { endpoint })
        }
    }
}

impl VolumeSink for EndpointVolume {
    fn set_volume(&mut self, percent: u8) -> Result<(), VolumeError> {
        let scalar = f32::from(percent.min(100)) / 100.0;
        unsafe {
            self.endpoint
                .SetMasterVolumeLevelScalar(scalar, std::ptr::null())
                .map_err(|e| VolumeError::DeviceUnavailable(e.to_string()))
        }
    }

    fn name(&self) -> &'static str {
        "wasapi-endpoint"
    }
}
