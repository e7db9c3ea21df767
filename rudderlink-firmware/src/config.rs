//! Embedded link configuration
//!
//! `link.toml` is compiled into the image and checked by `build.rs`; the
//! core parser turns it into a `LinkConfig` at boot.

use defmt::*;

use rudderlink_core::config::LinkConfig;
use rudderlink_protocol::MAX_FRAME_LEN;

/// Edit link.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../link.toml");

/// Parse the embedded configuration, falling back to defaults on error
pub fn load() -> LinkConfig {
    let config = parse();
    info!(
        "RX: {}ms to frame start, {}ms per line (max frame {})",
        config.serial.read_timeout_ms,
        config.line_budget_ms(),
        MAX_FRAME_LEN
    );
    config
}

fn parse() -> LinkConfig {
    match LinkConfig::parse(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Config: travel={}deg deadband={}deg baud={}",
                config.rudder.travel_deg, config.rudder.deadband_deg, config.serial.baudrate
            );
            config
        }
        Err(e) => {
            warn!("link.toml rejected ({}), using defaults", e);
            LinkConfig::default()
        }
    }
}
