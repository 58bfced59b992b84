//! Sample Link - Demo Entry Point
//!
//! Feeds a synthetic sample ramp through the link and logs each frame.
//! Usage: `sample-link [config.toml]`

use sample_link::{init_logging, LinkConfig, SampleLink};
use std::path::PathBuf;
use tracing::info;

/// Staging buffer capacity in samples
const BUFFER_CAPACITY: usize = 64;

/// Samples generated by the demo ramp
const RAMP_LENGTH: u16 = 200;

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    info!("=== Sample Link v{} ===", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = LinkConfig::load(config_path.as_deref())?;
    let mut link: SampleLink<u16, BUFFER_CAPACITY> = SampleLink::new(config)?;

    let mut frames = 0usize;
    for sample in (0..RAMP_LENGTH).map(|i| i.wrapping_mul(257)) {
        if link.buffer().is_full() {
            if let Some(bytes) = link.next_encoded()? {
                info!("Frame {}: {}", frames, to_hex(&bytes));
                frames += 1;
            }
        }
        link.record(sample)?;
    }

    while let Some(bytes) = link.next_encoded()? {
        info!("Frame {}: {}", frames, to_hex(&bytes));
        frames += 1;
    }

    info!(
        "Sent {} frames, {} samples dropped, buffer stats: {:?}",
        frames,
        link.dropped(),
        link.buffer().stats()
    );
    Ok(())
}
