//! Per-frame orchestration: gesture gate, mapping, conditioning, actuation.

use crate::settings::Settings;
use crate::tracking::landmarks::INDEX_TIP;
use crate::tracking::{HandObservation, PinchClassifier};
use crate::volume::VolumeSink;

use super::mapper::PositionMapper;
use super::smoother::SignalConditioner;

/// Drives the pipeline once per frame.
///
/// Two states, re-derived every frame from the classifier: **Active** runs
/// map → condition → actuate; **Inactive** (no hand, no pinch, or malformed
/// landmarks) mutates nothing, so the last applied volume holds. The running
/// applied volume is the only state carried across frames besides the
/// smoother's.
pub struct ControlLoop {
    classifier: PinchClassifier,
    mapper: PositionMapper,
    conditioner: SignalConditioner,
    sink: Box<dyn VolumeSink>,
    applied: u8,
}

impl ControlLoop {
    pub fn new(settings: &Settings, sink: Box<dyn VolumeSink>) -> Self {
        Self {
            classifier: PinchClassifier::new(settings.pinch_threshold),
            mapper: PositionMapper::new(settings.top_margin, settings.bottom_margin),
            conditioner: SignalConditioner::new(settings.alpha, settings.max_step),
            sink,
            applied: 0,
        }
    }

    /// The volume last applied (or intended; see [`Self::process`]).
    ///
    /// Read-only to display layers that want to draw a level indicator.
    pub fn volume(&self) -> u8 {
        self.applied
    }

    /// Consume one frame's observations. Returns whether the gesture was
    /// active this frame.
    ///
    /// At most one hand is used, arbitrarily the first reported. A failed
    /// `set_volume` is logged and skipped for this frame; the in-memory
    /// applied volume keeps the intended level so the next successful call
    /// resumes from it.
    pub fn process(&mut self, hands: &[HandObservation]) -> bool {
        let Some(hand) = hands.first() else {
            return false;
        };

        let pinching = match self.classifier.is_pinching(hand) {
            Ok(pinching) => pinching,
            Err(e) => {
                log::warn!("Dropping frame: {}", e);
                return false;
            }
        };
        if !pinching {
            return false;
        }

        // is_pinching already proved the index fingertip exists
        let fingertip = match hand.landmark(INDEX_TIP) {
            Ok(landmark) => landmark,
            Err(e) => {
                log::warn!("Dropping frame: {}", e);
                return false;
            }
        };

        let raw = self.mapper.map_to_volume(fingertip.y);
        self.applied = self.conditioner.condition(raw, self.applied);

        if let Err(e) = self.sink.set_volume(self.applied) {
            log::error!("Failed to set volume to {}%: {}", self.applied, e);
        }

        true
    }
}
