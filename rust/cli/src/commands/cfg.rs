//! Configuration command handler.
//!
//! Prints the resolved settings with the source of each one (default,
//! file, or env).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "difficulty": {
//!     "value": "medium",
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "difficulty": {
            "value": config.difficulty,
            "source": sources.difficulty,
        },
        "default_raise": {
            "value": config.default_raise,
            "source": sources.default_raise,
        },
        "bots": {
            "value": config.bots,
            "source": sources.bots,
        },
        "think_ms": {
            "value": config.think_ms,
            "source": sources.think_ms,
        },
        "chips_file": {
            "value": config.chips_file,
            "source": sources.chips_file,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
