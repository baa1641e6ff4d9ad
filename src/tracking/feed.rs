//! Landmark frame ingestion.
//!
//! Camera capture and pose estimation live in an external process (any
//! MediaPipe-style estimator works); it pipes one JSON object per line into
//! our stdin:
//!
//! ```text
//! {"hands": [[[x, y, z], ... 21 triples ...], ...]}
//! ```
//!
//! Malformed lines are skipped with a warning rather than ending the stream;
//! transient estimator glitches are expected and the next frame is the
//! natural retry.

use std::io::BufRead;

use serde::Deserialize;

use super::landmarks::{HandObservation, Landmark};

/// One frame on the wire: zero or more hands, each an ordered landmark list.
#[derive(Debug, Default, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub hands: Vec<Vec<[f32; 3]>>,
}

impl Frame {
    /// Convert the wire representation into per-hand observations.
    pub fn into_observations(self) -> Vec<HandObservation> {
        self.hands
            .into_iter()
            .map(|hand| {
                HandObservation::new(
                    hand.into_iter()
                        .map(|[x, y, z]| Landmark::new(x, y, z))
                        .collect(),
                )
            })
            .collect()
    }
}

/// Reads newline-delimited JSON frames from any buffered source.
///
/// The iterator ends when the source does (or on a read error); each item is
/// the hands observed in one frame, possibly empty.
pub struct FrameReader<R> {
    lines: std::io::Lines<R>,
}

impl<R: BufRead> FrameReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for FrameReader<R> {
    type Item = Vec<HandObservation>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    log::warn!("Frame stream read error: {}", e);
                    return None;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<Frame>(&line) {
                Ok(frame) => return Some(frame.into_observations()),
                Err(e) => {
                    log::warn!("Skipping malformed frame: {}", e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::landmarks::{INDEX_TIP, THUMB_TIP};

    #[test]
    fn parses_a_single_hand_frame() {
        let line = r#"{"hands": [[[0.1, 0.2, 0.0], [0.3, 0.4, 0.0]]]}"#;
        let mut reader = FrameReader::new(line.as_bytes());

        let hands = reader.next().unwrap();
        assert_eq!(hands.len(), 1);
        assert_eq!(hands[0].len(), 2);
        assert_eq!(hands[0].landmark(0).unwrap(), Landmark::new(0.1, 0.2, 0.0));
        assert!(reader.next().is_none());
    }

    #[test]
    fn empty_hands_is_a_valid_frame() {
        let mut reader = FrameReader::new(r#"{"hands": []}"#.as_bytes());
        assert!(reader.next().unwrap().is_empty());
    }

    #[test]
    fn missing_hands_field_means_no_hands() {
        let mut reader = FrameReader::new(b"{}".as_slice());
        assert!(reader.next().unwrap().is_empty());
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let input = "not json\n\n{\"hands\": [[[0.5, 0.5, 0.0]]]}\n";
        let mut reader = FrameReader::new(input.as_bytes());

        let hands = reader.next().unwrap();
        assert_eq!(hands.len(), 1);
        assert!(reader.next().is_none());
    }

    #[test]
    fn full_hand_round_trips_tip_indices() {
        let triples: Vec<String> = (0..21)
            .map(|i| format!("[{:.2}, {:.2}, 0.0]", i as f32 / 100.0, 0.5))
            .collect();
        let line = format!(r#"{{"hands": [[{}]]}}"#, triples.join(", "));
        let mut reader = FrameReader::new(line.as_bytes());

        let hands = reader.next().unwrap();
        let hand = &hands[0];
        assert_eq!(hand.landmark(THUMB_TIP).unwrap().x, 0.04);
        assert_eq!(hand.landmark(INDEX_TIP).unwrap().x, 0.08);
    }
}
