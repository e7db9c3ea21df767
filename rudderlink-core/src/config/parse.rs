//! Minimal TOML parser for `link.toml`
//!
//! Handles only the subset the link configuration needs:
//! - `[section]` headers
//! - `key = value` with integers, floats and quoted strings
//! - Comments (`# ...`), whole-line or trailing
//!
//! Keys that are not set keep their defaults. Unknown keys are skipped with
//! a warning.

use core::str::FromStr;

use super::{ConfigError, LinkConfig};
use crate::calibration::Gesture;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Rudder,
    Sensor,
    Serial,
    Timing,
}

impl LinkConfig {
    /// Parse and validate a `link.toml` document
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let mut config = LinkConfig::default();
        let mut section = Section::Root;

        for (index, line) in input.lines().enumerate() {
            let line_no = index as u32 + 1;
            let line = strip_comment(line).trim();
            if line.is_empty() {
                continue;
            }

            if line.starts_with('[') {
                section = parse_section_header(line)
                    .ok_or(ConfigError::InvalidSection { line: line_no })?;
                continue;
            }

            let (key, value) =
                parse_key_value(line).ok_or(ConfigError::InvalidLine { line: line_no })?;
            let applied = apply_value(&mut config, section, key, value)
                .map_err(|_| ConfigError::InvalidValue { line: line_no })?;
            if !applied {
                log_warn!("link.toml line {}: ignoring unknown key '{}'", line_no, key);
            }
        }

        config.validate()?;
        Ok(config)
    }
}

/// Drop a trailing `#` comment that is not inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

fn parse_section_header(line: &str) -> Option<Section> {
    let name = line.strip_prefix('[')?.strip_suffix(']')?.trim();
    match name {
        "rudder" => Some(Section::Rudder),
        "sensor" => Some(Section::Sensor),
        "serial" => Some(Section::Serial),
        "timing" => Some(Section::Timing),
        _ => None,
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Marker for a value that failed to parse
struct BadValue;

fn parse_string(value: &str) -> Result<&str, BadValue> {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or(BadValue)
}

fn parse_number<T: FromStr>(value: &str) -> Result<T, BadValue> {
    value.parse().map_err(|_| BadValue)
}

fn parse_gesture(value: &str) -> Result<Gesture, BadValue> {
    match parse_string(value)? {
        "hold" => Ok(Gesture::HoldToSweep),
        "toggle" => Ok(Gesture::PressToggle),
        _ => Err(BadValue),
    }
}

/// Store one value; `Ok(false)` means the key is unknown
fn apply_value(
    config: &mut LinkConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<bool, BadValue> {
    match (section, key) {
        (Section::Rudder, "travel_deg") => config.rudder.travel_deg = parse_number(value)?,
        (Section::Rudder, "deadband_deg") => config.rudder.deadband_deg = parse_number(value)?,
        (Section::Rudder, "gesture") => config.rudder.gesture = parse_gesture(value)?,

        (Section::Sensor, "min") => config.sensor.min = parse_number(value)?,
        (Section::Sensor, "max") => config.sensor.max = parse_number(value)?,
        (Section::Sensor, "center") => config.sensor.center = parse_number(value)?,
        (Section::Sensor, "live_samples") => config.sensor.live_samples = parse_number(value)?,
        (Section::Sensor, "precise_samples") => {
            config.sensor.precise_samples = parse_number(value)?
        }

        (Section::Serial, "baudrate") => config.serial.baudrate = parse_number(value)?,
        (Section::Serial, "read_timeout_ms") => config.serial.read_timeout_ms = parse_number(value)?,

        (Section::Timing, "tx_interval_ms") => config.timing.tx_interval_ms = parse_number(value)?,
        (Section::Timing, "rx_interval_ms") => config.timing.rx_interval_ms = parse_number(value)?,
        (Section::Timing, "blink_ms") => config.timing.blink_ms = parse_number(value)?,

        _ => return Ok(false),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
# Rudder link
[rudder]
travel_deg = 90        # narrower tiller
deadband_deg = 0.5
gesture = "toggle"

[sensor]
min = 1000
max = 64000
center = 33000
live_samples = 50
precise_samples = 500

[serial]
baudrate = 115200
read_timeout_ms = 20

[timing]
tx_interval_ms = 20
rx_interval_ms = 5
blink_ms = 2
"#;

    #[test]
    fn test_parse_full_document() {
        let config = LinkConfig::parse(FULL).unwrap();
        assert_eq!(config.rudder.travel_deg, 90.0);
        assert_eq!(config.rudder.deadband_deg, 0.5);
        assert_eq!(config.rudder.gesture, Gesture::PressToggle);
        assert_eq!(config.sensor.min, 1000);
        assert_eq!(config.sensor.max, 64000);
        assert_eq!(config.sensor.center, 33000);
        assert_eq!(config.sensor.live_samples, 50);
        assert_eq!(config.sensor.precise_samples, 500);
        assert_eq!(config.serial.baudrate, 115200);
        assert_eq!(config.serial.read_timeout_ms, 20);
        assert_eq!(config.timing.tx_interval_ms, 20);
        assert_eq!(config.timing.rx_interval_ms, 5);
        assert_eq!(config.timing.blink_ms, 2);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(LinkConfig::parse(""), Ok(LinkConfig::default()));
        assert_eq!(LinkConfig::parse("# nothing\n\n"), Ok(LinkConfig::default()));
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = LinkConfig::parse("[serial]\nbaudrate = 9600\n").unwrap();
        assert_eq!(config.serial.baudrate, 9600);
        assert_eq!(config.serial.read_timeout_ms, 10);
        assert_eq!(config.rudder, LinkConfig::default().rudder);
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let config = LinkConfig::parse("[timing]\nfoo = 3\nblink_ms = 7\n").unwrap();
        assert_eq!(config.timing.blink_ms, 7);
    }

    #[test]
    fn test_key_outside_section_is_ignored() {
        assert_eq!(LinkConfig::parse("blink_ms = 7\n"), Ok(LinkConfig::default()));
    }

    #[test]
    fn test_unknown_section() {
        assert_eq!(
            LinkConfig::parse("[rudder]\ntravel_deg = 120\n[motor]\n"),
            Err(ConfigError::InvalidSection { line: 3 })
        );
        assert_eq!(
            LinkConfig::parse("[rudder\n"),
            Err(ConfigError::InvalidSection { line: 1 })
        );
    }

    #[test]
    fn test_line_without_value() {
        assert_eq!(
            LinkConfig::parse("[rudder]\ntravel_deg\n"),
            Err(ConfigError::InvalidLine { line: 2 })
        );
        assert_eq!(
            LinkConfig::parse("[rudder]\ntravel_deg =  # none\n"),
            Err(ConfigError::InvalidLine { line: 2 })
        );
    }

    #[test]
    fn test_bad_values() {
        assert_eq!(
            LinkConfig::parse("[sensor]\nmin = -5\n"),
            Err(ConfigError::InvalidValue { line: 2 })
        );
        assert_eq!(
            LinkConfig::parse("[sensor]\nmax = 70000\n"),
            Err(ConfigError::InvalidValue { line: 2 })
        );
        assert_eq!(
            LinkConfig::parse("[rudder]\ngesture = \"wave\"\n"),
            Err(ConfigError::InvalidValue { line: 2 })
        );
        assert_eq!(
            LinkConfig::parse("[rudder]\ngesture = hold\n"),
            Err(ConfigError::InvalidValue { line: 2 })
        );
    }

    #[test]
    fn test_hash_inside_string_is_not_a_comment() {
        assert_eq!(strip_comment("gesture = \"a#b\" # c"), "gesture = \"a#b\" ");
    }

    #[test]
    fn test_inconsistent_settings_rejected() {
        assert_eq!(
            LinkConfig::parse("[rudder]\ntravel_deg = 10\ndeadband_deg = 5\n"),
            Err(ConfigError::InvalidDeadband)
        );
        assert_eq!(
            LinkConfig::parse("[sensor]\nlive_samples = 0\n"),
            Err(ConfigError::ZeroSamples)
        );
    }
}
