//! Configuration command handler.
//!
//! Prints the resolved configuration with the source of every value
//! (default, file or env):
//!
//! ```json
//! {
//!   "seats": { "value": 6, "source": "default" },
//!   "seed": { "value": null, "source": "default" },
//!   "ascii": { "value": false, "source": "default" }
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;
    if resolved.sources.seed != config::ValueSource::Default {
        ui::display_warning(err, "a configured seed gives the same deal every run")?;
    }

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seats": {
            "value": config.seats,
            "source": sources.seats,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "ascii": {
            "value": config.ascii,
            "source": sources.ascii,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cfg_displays_json_output() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        handle_cfg_command(&mut out, &mut err).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["seats"]["value"], 6);
        assert_eq!(json["seats"]["source"], "default");
        assert!(json["seed"]["value"].is_null());
        assert!(err.is_empty());
    }
}
