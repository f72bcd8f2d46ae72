//! Logging setup.
//!
//! Logs go to stderr so `--json` output on stdout stays machine-readable.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::error::{AppError, ErrorKind};

/// Map the `-v` count to a default level for this crate.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `-v` when set.
pub fn init_logging(verbosity: u8) -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level_for_verbosity(verbosity).as_str().to_ascii_lowercase();
        EnvFilter::new(format!("eco_plan={level}"))
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::new(ErrorKind::Runtime, format!("Failed to set global default subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_for_verbosity(0), Level::WARN);
        assert_eq!(level_for_verbosity(1), Level::INFO);
        assert_eq!(level_for_verbosity(2), Level::DEBUG);
        assert_eq!(level_for_verbosity(7), Level::DEBUG);
    }
}
