//! Build script for rudderlink-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates link.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate link.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=link.toml");

    let config_path = Path::new("link.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: link.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds link.toml at compile time.                  ║\n\
            ║  Please create one in the rudderlink-firmware directory.         ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read link.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in link.toml                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_rudder(&config, &mut errors);
    validate_sensor(&config, &mut errors);
    validate_positive(&config, "serial", &["baudrate", "read_timeout_ms"], &mut errors);
    validate_positive(
        &config,
        "timing",
        &["tx_interval_ms", "rx_interval_ms", "blink_ms"],
        &mut errors,
    );

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid settings in link.toml                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=link.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only the known sections, each a table
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(root) = config.as_table() else {
        return;
    };
    for (name, value) in root {
        if !["rudder", "sensor", "serial", "timing"].contains(&name.as_str()) {
            errors.push(format!("unknown section [{}]", name));
        } else if !value.is_table() {
            errors.push(format!("[{}] must be a table", name));
        }
    }
}

fn number(config: &toml::Value, section: &str, key: &str) -> Option<f64> {
    match config.get(section)?.get(key)? {
        toml::Value::Integer(i) => Some(*i as f64),
        toml::Value::Float(f) => Some(*f),
        _ => None,
    }
}

fn validate_rudder(config: &toml::Value, errors: &mut Vec<String>) {
    let travel = number(config, "rudder", "travel_deg").unwrap_or(120.0);
    let deadband = number(config, "rudder", "deadband_deg").unwrap_or(1.0);

    if travel <= 0.0 {
        errors.push("[rudder] travel_deg must be positive".to_string());
    }
    if deadband < 0.0 || deadband * 2.0 >= travel {
        errors.push("[rudder] deadband_deg must be below half of travel_deg".to_string());
    }

    if let Some(gesture) = config.get("rudder").and_then(|r| r.get("gesture")) {
        match gesture.as_str() {
            Some("hold") | Some("toggle") => {}
            _ => errors.push("[rudder] gesture must be 'hold' or 'toggle'".to_string()),
        }
    }
}

fn validate_sensor(config: &toml::Value, errors: &mut Vec<String>) {
    let min = number(config, "sensor", "min").unwrap_or(288.0);
    let max = number(config, "sensor", "max").unwrap_or(65435.0);
    let center = number(config, "sensor", "center").unwrap_or(32500.0);

    for (key, value) in [("min", min), ("max", max), ("center", center)] {
        if !(0.0..=65535.0).contains(&value) {
            errors.push(format!("[sensor] {} must be 0-65535", key));
        }
    }
    if !(min < max && min <= center && center <= max) {
        errors.push("[sensor] bounds must satisfy min <= center <= max".to_string());
    }

    for key in ["live_samples", "precise_samples"] {
        if let Some(n) = number(config, "sensor", key) {
            if !(1.0..=65535.0).contains(&n) {
                errors.push(format!("[sensor] {} must be 1-65535", key));
            }
        }
    }
}

fn validate_positive(config: &toml::Value, section: &str, keys: &[&str], errors: &mut Vec<String>) {
    for key in keys {
        if let Some(n) = number(config, section, key) {
            if n <= 0.0 {
                errors.push(format!("[{}] {} must be positive", section, key));
            }
        }
    }
}
