//! Sample Link
//!
//! Stages sensor samples in a fixed-capacity ring buffer and drains them
//! into frames whose multi-byte fields are big-endian on the wire.

mod error;
mod frame;
mod link;
mod settings;

pub use error::LinkError;
pub use frame::{SampleFrame, HEADER_LEN};
pub use link::SampleLink;
pub use settings::{LinkConfig, OverflowPolicy};

use tracing::{subscriber::SetGlobalDefaultError, Level};
use tracing_subscriber::FmtSubscriber;

/// Initialize logging
pub fn init_logging() -> Result<(), SetGlobalDefaultError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}
