//! Real-time clock widget configuration.
//!
//! - `CLOCK_TICK_MS`: refresh period (default: 1000)
//! - `CLOCK_UTC_OFFSET_HOURS`: displayed time zone offset (default: 7)
//! - `CLOCK_ZONE_LABEL`: caption under the date

use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockConfig {
    pub tick: Duration,
    pub utc_offset_hours: i32,
    pub zone_label: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
            utc_offset_hours: 7,
            zone_label: "Western Indonesia Time (GMT+7)".to_string(),
        }
    }
}

impl ClockConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let tick_ms: u64 = crate::parse_or(lookup, "CLOCK_TICK_MS", 1000);
        let utc_offset_hours = crate::parse_or(lookup, "CLOCK_UTC_OFFSET_HOURS", 7i32);

        Self {
            // A zero period would make the interval panic.
            tick: Duration::from_millis(tick_ms.max(1)),
            utc_offset_hours: if (-23..=23).contains(&utc_offset_hours) {
                utc_offset_hours
            } else {
                defaults.utc_offset_hours
            },
            zone_label: lookup("CLOCK_ZONE_LABEL").unwrap_or(defaults.zone_label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClockConfig::from_lookup(&|_| None);
        assert_eq!(config, ClockConfig::default());
        assert_eq!(config.tick, Duration::from_secs(1));
    }

    #[test]
    fn test_zero_tick_is_clamped() {
        let config = ClockConfig::from_lookup(&|key| (key == "CLOCK_TICK_MS").then(|| "0".into()));
        assert_eq!(config.tick, Duration::from_millis(1));
    }

    #[test]
    fn test_out_of_range_offset_falls_back() {
        let config =
            ClockConfig::from_lookup(&|key| (key == "CLOCK_UTC_OFFSET_HOURS").then(|| "30".into()));
        assert_eq!(config.utc_offset_hours, 7);
    }
}
