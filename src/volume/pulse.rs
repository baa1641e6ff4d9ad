//! Linux volume backend via a PulseAudio client connection.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use libpulse_binding::callbacks::ListResult;
use libpulse_binding::context::{Context, FlagSet as ContextFlagSet, State};
use libpulse_binding::mainloop::standard::{IterateResult, Mainloop};
use libpulse_binding::operation::{Operation, State as OperationState};
use libpulse_binding::volume::{ChannelVolumes, Volume};

use super::VolumeSink;
use crate::error::VolumeError;

/// Volume handle for the first sink the audio server reports.
///
/// One client connection is opened at startup and held for the process
/// lifetime. There is no sink-disappearance recovery: if the sink goes away
/// mid-run, later `set_volume` calls fail and the control loop skips those
/// frames.
pub struct PulseVolume {
    mainloop: Mainloop,
    context: Context,
    sink_index: u32,
    channels: u8,
}

impl PulseVolume {
    pub fn new() -> Result<Self, VolumeError> {
        let mut mainloop = Mainloop::new()
            .ok_or_else(|| VolumeError::DeviceUnavailable("mainloop allocation failed".into()))?;
        let mut context = Context::new(&mainloop, "pinch-rs")
            .ok_or_else(|| VolumeError::DeviceUnavailable("context allocation failed".into()))?;

        context
            .connect(None, ContextFlagSet::NOFLAGS, None)
            .map_err(|e| VolumeError::DeviceUnavailable(format!("connect: {}", e)))?;
        wait_for_ready(&mut mainloop, &context)?;

        // The first sink reported is the target for the whole run.
        let found: Rc<RefCell<Option<(u32, u8)>>> = Rc::new(RefCell::new(None));
        let op = {
            let found = Rc::clone(&found);
            context.introspect().get_sink_info_list(move |list| {
                if let ListResult::Item(info) = list {
                    let mut slot = found.borrow_mut();
                    if slot.is_none() {
                        *slot = Some((info.index, info.volume.len()));
                    }
                }
            })
        };
        drain(&mut mainloop, op)?;

        let (sink_index, channels) = (*found.borrow())
            .ok_or_else(|| VolumeError::DeviceUnavailable("no sinks reported".into()))?;
        log::info!(
            "PulseAudio: targeting sink #{} ({} channels)",
            sink_index,
            channels
        );

        Ok(Self {
            mainloop,
            context,
            sink_index,
            channels,
        })
    }
}

impl VolumeSink for PulseVolume {
    fn set_volume(&mut self, percent: u8) -> Result<(), VolumeError> {
        let scalar = f64::from(percent.min(100)) / 100.0;
        let raw = (f64::from(Volume::NORMAL.0) * scalar).round() as u32;

        let mut volumes = ChannelVolumes::default();
        volumes.set(self.channels, Volume(raw));

        let ok = Rc::new(Cell::new(false));
        let op = {
            let ok = Rc::clone(&ok);
            self.context.introspect().set_sink_volume_by_index(
                self.sink_index,
                &volumes,
                Some(Box::new(move |success| ok.set(success))),
            )
        };
        drain(&mut self.mainloop, op)?;

        if ok.get() {
            Ok(())
        } else {
            Err(VolumeError::DeviceUnavailable(
                "sink rejected volume change".into(),
            ))
        }
    }

    fn name(&self) -> &'static str {
        "pulseaudio"
    }
}

impl Drop for PulseVolume {
    fn drop(&mut self) {
        self.context.disconnect();
    }
}

/// Pump the mainloop until the context reaches `Ready`.
fn wait_for_ready(mainloop: &mut Mainloop, context: &Context) -> Result<(), VolumeError> {
    loop {
        match mainloop.iterate(false) {
            IterateResult::Quit(_) | IterateResult::Err(_) => {
                return Err(VolumeError::DeviceUnavailable("mainloop terminated".into()));
            }
            IterateResult::Success(_) => {}
        }
        match context.get_state() {
            State::Ready => return Ok(()),
            State::Failed | State::Terminated => {
                return Err(VolumeError::DeviceUnavailable(
                    "connection to the audio server failed".into(),
                ));
            }
            _ => {}
        }
    }
}

/// Pump the mainloop until a pending operation completes.
fn drain<G: ?Sized>(mainloop: &mut Mainloop, op: Operation<G>) -> Result<(), VolumeError> {
    while op.get_state() == OperationState::Running {
        match mainloop.iterate(false) {
            IterateResult::Quit(_) | IterateResult::Err(_) => {
                return Err(VolumeError::DeviceUnavailable("mainloop terminated".into()));
            }
            IterateResult::Success(_) => {}
        }
    }
    Ok(())
}
