//! pinch-rs - gesture volume control
//!
//! Reads landmark frames from stdin (one JSON object per line, produced by an
//! external hand-pose estimator) and drives the system volume from the pinch
//! gesture. See the crate docs for the wire format.

use std::io;

use pinch_rs::{default_sink, ControlLoop, FrameReader, Settings};

fn main() {
    env_logger::init();
    log::info!("Starting pinch-rs");

    let settings = Settings::load();

    let sink = match default_sink(std::env::consts::OS) {
        Ok(sink) => sink,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Volume backend: {}", sink.name());

    let mut control = ControlLoop::new(&settings, sink);

    let stdin = io::stdin();
    let mut was_active = false;
    let mut last_volume = control.volume();

    for hands in FrameReader::new(stdin.lock()) {
        let active = control.process(&hands);

        if active != was_active {
            was_active = active;
            log::debug!("Gesture {}", if active { "active" } else { "inactive" });
        }
        if control.volume() != last_volume {
            last_volume = control.volume();
            log::info!("Volume: {}%", last_volume);
        }
    }

    log::info!("Frame stream ended, holding volume at {}%", last_volume);
}
