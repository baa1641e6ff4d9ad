//! Signal conditioning: exponential smoothing and per-frame rate limiting.
//!
//! Raw per-frame hand positions jitter; mapped straight to the device the
//! result is audibly erratic. Two stages fix that:
//!
//! 1. A single-pole IIR low-pass filter ([`ExponentialSmoother`]) suppresses
//!    frame-to-frame jitter.
//! 2. A per-step clamp ([`rate_limit`]) bounds the worst-case change per
//!    frame, so a tracking glitch that snaps the hand reading across the
//!    frame can't slam the volume.

/// Single-pole low-pass filter over a stream of samples.
///
/// The first sample is taken verbatim, establishing the initial condition
/// without a ramp-up transient. State is never reset after that.
#[derive(Clone, Copy, Debug)]
pub struct ExponentialSmoother {
    /// Blend weight in (0, 1]. Lower = smoother and laggier.
    alpha: f32,
    value: Option<f32>,
}

impl ExponentialSmoother {
    pub fn new(alpha: f32) -> Self {
        Self { alpha, value: None }
    }

    /// Blend a new sample into the filter state and return the result.
    pub fn update(&mut self, sample: f32) -> f32 {
        let next = match self.value {
            None => sample,
            Some(previous) => self.alpha * sample + (1.0 - self.alpha) * previous,
        };
        self.value = Some(next);
        next
    }
}

/// Clamp the step from `old` toward `new` to at most `max_step` per call.
///
/// Passes `new` through untouched when it is already within reach.
pub fn rate_limit(new: f32, old: f32, max_step: f32) -> f32 {
    let delta = new - old;
    if delta.abs() > max_step {
        old + max_step.copysign(delta)
    } else {
        new
    }
}

/// Composes smoothing and rate limiting into one per-frame step.
///
/// The smoother state lives here; the previously applied volume is supplied
/// by the caller. That split is what makes hold-last-value free: on an
/// inactive frame the caller simply doesn't call `condition`, and neither
/// stage moves.
#[derive(Clone, Copy, Debug)]
pub struct SignalConditioner {
    smoother: ExponentialSmoother,
    max_step: f32,
}

impl SignalConditioner {
    pub fn new(alpha: f32, max_step: u8) -> Self {
        Self {
            smoother: ExponentialSmoother::new(alpha),
            max_step: f32::from(max_step),
        }
    }

    /// Turn a raw target volume into the next applied volume.
    pub fn condition(&mut self, raw_target: u8, previous_applied: u8) -> u8 {
        let smoothed = self.smoother.update(f32::from(raw_target));
        let limited = rate_limit(smoothed, f32::from(previous_applied), self.max_step);
        limited.round().clamp(0.0, 100.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_passes_verbatim() {
        let mut smoother = ExponentialSmoother::new(0.3);
        assert_eq!(smoother.update(42.0), 42.0);
    }

    #[test]
    fn alpha_one_disables_smoothing() {
        let mut smoother = ExponentialSmoother::new(1.0);
        for sample in [10.0, 90.0, 3.0, 55.0] {
            assert_eq!(smoother.update(sample), sample);
        }
    }

    #[test]
    fn smoothing_blends_toward_new_samples() {
        let mut smoother = ExponentialSmoother::new(0.3);
        smoother.update(0.0);
        let blended = smoother.update(100.0);
        assert!((blended - 30.0).abs() < 1e-4);
    }

    #[test]
    fn rate_limit_clamps_large_steps_both_ways() {
        assert_eq!(rate_limit(100.0, 0.0, 5.0), 5.0);
        assert_eq!(rate_limit(0.0, 100.0, 5.0), 95.0);
    }

    #[test]
    fn rate_limit_passes_small_steps_through() {
        assert_eq!(rate_limit(42.0, 40.0, 5.0), 42.0);
        assert_eq!(rate_limit(40.0, 42.0, 5.0), 40.0);
        assert_eq!(rate_limit(42.0, 42.0, 5.0), 42.0);
    }

    #[test]
    fn conditioned_step_never_exceeds_max_step() {
        let mut conditioner = SignalConditioner::new(0.7, 5);
        let mut applied: u8 = 50;
        for raw in [0, 100, 100, 0, 73, 12, 100, 0] {
            let next = conditioner.condition(raw, applied);
            let step = i16::from(next) - i16::from(applied);
            assert!(step.abs() <= 5, "step {} exceeds limit", step);
            applied = next;
        }
    }

    #[test]
    fn full_raise_walks_up_in_max_steps() {
        // Hand pinched at the top of the frame, starting from silence:
        // raw 100 each frame, smoothed stays 100, applied climbs 5 at a time.
        let mut conditioner = SignalConditioner::new(0.3, 5);
        let first = conditioner.condition(100, 0);
        assert_eq!(first, 5);
        let second = conditioner.condition(100, first);
        assert_eq!(second, 10);
    }
}
