//! Pinch detection.
//!
//! A pinch is active when the thumb tip and index fingertip are closer than a
//! threshold distance in normalized image coordinates. Stateless: the
//! classifier looks at one frame at a time and keeps no history.

use crate::error::TrackingError;

use super::landmarks::{HandObservation, INDEX_TIP, THUMB_TIP};

/// Classifies the pinch gesture from a single hand observation.
#[derive(Clone, Copy, Debug)]
pub struct PinchClassifier {
    /// Distance below which (strictly) the gesture is active.
    threshold: f32,
}

impl PinchClassifier {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// True iff thumb tip and index fingertip are strictly closer than the
    /// threshold. A pair at exactly the threshold is not a pinch.
    pub fn is_pinching(&self, hand: &HandObservation) -> Result<bool, TrackingError> {
        let thumb = hand.landmark(THUMB_TIP)?;
        let index = hand.landmark(INDEX_TIP)?;
        Ok(thumb.distance_2d(&index) < self.threshold)
    }
}

impl Default for PinchClassifier {
    fn default() -> Self {
        Self::new(crate::Settings::default().pinch_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::landmarks::{Landmark, LANDMARK_COUNT};

    fn hand_with_tips(thumb: Landmark, index: Landmark) -> HandObservation {
        let mut landmarks = vec![Landmark::default(); LANDMARK_COUNT];
        landmarks[THUMB_TIP] = thumb;
        landmarks[INDEX_TIP] = index;
        HandObservation::new(landmarks)
    }

    #[test]
    fn close_fingertips_pinch() {
        let hand = hand_with_tips(
            Landmark::new(0.50, 0.50, 0.0),
            Landmark::new(0.51, 0.50, 0.0),
        );
        assert!(PinchClassifier::new(0.04).is_pinching(&hand).unwrap());
    }

    #[test]
    fn distant_fingertips_do_not_pinch() {
        let hand = hand_with_tips(
            Landmark::new(0.2, 0.2, 0.0),
            Landmark::new(0.8, 0.8, 0.0),
        );
        assert!(!PinchClassifier::new(0.04).is_pinching(&hand).unwrap());
    }

    #[test]
    fn exact_threshold_is_not_a_pinch() {
        // Exactly-representable coordinates so the distance equals the
        // threshold bit-for-bit: strict inequality must reject it.
        let classifier = PinchClassifier::new(0.25);
        let hand = hand_with_tips(
            Landmark::new(0.5, 0.50, 0.0),
            Landmark::new(0.5, 0.75, 0.0),
        );
        assert!(!classifier.is_pinching(&hand).unwrap());

        let barely = hand_with_tips(
            Landmark::new(0.5, 0.50, 0.0),
            Landmark::new(0.5, 0.7499, 0.0),
        );
        assert!(classifier.is_pinching(&barely).unwrap());
    }

    #[test]
    fn short_landmark_list_is_invalid_input() {
        let hand = HandObservation::new(vec![Landmark::default(); 5]);
        assert!(PinchClassifier::new(0.04).is_pinching(&hand).is_err());
    }
}
