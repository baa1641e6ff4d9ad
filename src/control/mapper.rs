//! Vertical position to volume mapping.

/// Maps a normalized vertical coordinate onto a volume percentage.
///
/// Normalized y grows downward, volume grows as the hand rises, so the
/// mapping is inverted. Margins reserve dead zones at the frame edges: a hand
/// at the very top or bottom of the frame doesn't need pixel-perfect
/// placement to reach 100% or 0%.
#[derive(Clone, Copy, Debug)]
pub struct PositionMapper {
    top_margin: f32,
    bottom_margin: f32,
}

impl PositionMapper {
    pub fn new(top_margin: f32, bottom_margin: f32) -> Self {
        Self {
            top_margin,
            bottom_margin,
        }
    }

    /// Map normalized y (0 top, 1 bottom) to a volume in 0..=100.
    ///
    /// Exactly 100 at or above the top margin, exactly 0 at or below the
    /// bottom margin, linear in between.
    pub fn map_to_volume(&self, y_norm: f32) -> u8 {
        let clamped = y_norm.clamp(self.top_margin, self.bottom_margin);
        let scaled = (clamped - self.top_margin) / (self.bottom_margin - self.top_margin);
        ((1.0 - scaled) * 100.0).round() as u8
    }
}

impl Default for PositionMapper {
    fn default() -> Self {
        let settings = crate::Settings::default();
        Self::new(settings.top_margin, settings.bottom_margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_margin_and_above_is_full_volume() {
        let mapper = PositionMapper::new(0.1, 0.9);
        assert_eq!(mapper.map_to_volume(0.1), 100);
        assert_eq!(mapper.map_to_volume(0.05), 100);
        assert_eq!(mapper.map_to_volume(0.0), 100);
    }

    #[test]
    fn bottom_margin_and_below_is_silence() {
        let mapper = PositionMapper::new(0.1, 0.9);
        assert_eq!(mapper.map_to_volume(0.9), 0);
        assert_eq!(mapper.map_to_volume(0.95), 0);
        assert_eq!(mapper.map_to_volume(1.0), 0);
    }

    #[test]
    fn midpoint_is_half_volume() {
        let mapper = PositionMapper::new(0.1, 0.9);
        assert_eq!(mapper.map_to_volume(0.5), 50);
    }

    #[test]
    fn monotonically_non_increasing_in_y() {
        let mapper = PositionMapper::new(0.1, 0.9);
        let mut previous = mapper.map_to_volume(0.0);
        for step in 1..=100 {
            let y = step as f32 / 100.0;
            let volume = mapper.map_to_volume(y);
            assert!(
                volume <= previous,
                "volume rose from {} to {} at y={}",
                previous,
                volume,
                y
            );
            previous = volume;
        }
    }
}
