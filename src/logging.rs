//! Log output goes to a file; the terminal belongs to the card.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::CardError;

/// Install a global subscriber writing to `path`. `RUST_LOG` takes
/// precedence over `level`.
pub fn init(path: &Path, level: &str) -> Result<(), CardError> {
    let file = File::create(path)?;
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| CardError::Logging(e.to_string()))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| CardError::Logging(e.to_string()))
}
