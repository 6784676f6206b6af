//! Camera configuration.
//!
//! # Environment Variables
//!
//! - `CAMERA_FACING_MODE`: `environment` (rear, default) or `user` (front)
//! - `CAMERA_IDEAL_WIDTH`: preferred capture width (default: 1280)
//! - `CAMERA_IDEAL_HEIGHT`: preferred capture height (default: 720)
//! - `CAMERA_SIMULATION`: behaviour of the simulated device: `granted`
//!   (default), `denied`, `missing` or `busy`
//! - `CAMERA_LATENCY_MS`: simulated permission-prompt latency (default: 150)

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// Which camera the capture request prefers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacingMode {
    /// Rear-facing.
    #[default]
    Environment,
    /// Front-facing.
    User,
}

impl FromStr for FacingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "environment" | "rear" => Ok(FacingMode::Environment),
            "user" | "front" => Ok(FacingMode::User),
            other => Err(format!("unknown facing mode: {other}")),
        }
    }
}

/// How the simulated capture device answers permission requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraSimulation {
    #[default]
    Granted,
    Denied,
    Missing,
    Busy,
}

impl FromStr for CameraSimulation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "granted" => Ok(CameraSimulation::Granted),
            "denied" => Ok(CameraSimulation::Denied),
            "missing" => Ok(CameraSimulation::Missing),
            "busy" => Ok(CameraSimulation::Busy),
            other => Err(format!("unknown camera simulation: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CameraConfig {
    pub facing_mode: FacingMode,
    pub ideal_width: u32,
    pub ideal_height: u32,
    pub simulation: CameraSimulation,
    pub latency: Duration,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            facing_mode: FacingMode::Environment,
            ideal_width: 1280,
            ideal_height: 720,
            simulation: CameraSimulation::Granted,
            latency: Duration::from_millis(150),
        }
    }
}

impl CameraConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            facing_mode: crate::parse_or(lookup, "CAMERA_FACING_MODE", defaults.facing_mode),
            ideal_width: crate::parse_or(lookup, "CAMERA_IDEAL_WIDTH", defaults.ideal_width),
            ideal_height: crate::parse_or(lookup, "CAMERA_IDEAL_HEIGHT", defaults.ideal_height),
            simulation: crate::parse_or(lookup, "CAMERA_SIMULATION", defaults.simulation),
            latency: Duration::from_millis(crate::parse_or(lookup, "CAMERA_LATENCY_MS", 150)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefers_rear_hd() {
        let config = CameraConfig::default();
        assert_eq!(config.facing_mode, FacingMode::Environment);
        assert_eq!((config.ideal_width, config.ideal_height), (1280, 720));
        assert_eq!(config.simulation, CameraSimulation::Granted);
    }

    #[test]
    fn test_from_lookup() {
        let config = CameraConfig::from_lookup(&|key| match key {
            "CAMERA_FACING_MODE" => Some("user".into()),
            "CAMERA_SIMULATION" => Some("DENIED".into()),
            "CAMERA_LATENCY_MS" => Some("0".into()),
            _ => None,
        });
        assert_eq!(config.facing_mode, FacingMode::User);
        assert_eq!(config.simulation, CameraSimulation::Denied);
        assert_eq!(config.latency, Duration::ZERO);
        assert_eq!(config.ideal_width, 1280);
    }

    #[test]
    fn test_facing_mode_serializes_lowercase() {
        let json = serde_json::to_string(&FacingMode::Environment).unwrap();
        assert_eq!(json, r#""environment""#);
    }
}
