//! Data-association and fusion core for the radar-camera perception
//! platform.
//!
//! The modules reconcile image-plane detections from a camera object
//! detector with polar range/azimuth radar plots while providing safe
//! abstractions, explicit sensor configuration, and well-defined
//! per-cycle components.

pub mod fusion;
pub mod math;
pub mod prelude;
pub mod sensor_interface;
pub mod telemetry;

use sensor_interface::{BoundingBox, CameraDetection, RadarPlot};
use serde::{Deserialize, Serialize};

/// Guard against division by zero for degenerate (zero-height) boxes.
pub const RANGE_EPS: f32 = 1e-6;

/// Sensor-model configuration shared by the plot simulator and the
/// association engine so the two cannot silently diverge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Image width in pixels used for the azimuth-from-pixel mapping.
    pub frame_width_px: f32,
    /// Horizontal field of view in degrees; center-x maps to +/- fov/2.
    pub fov_deg: f32,
    /// Association gate: maximum camera/radar azimuth difference, degrees.
    pub max_azimuth_diff_deg: f32,
    /// Range heuristic constant K in `range = K / box_height`, meter-pixels.
    pub range_scale: f32,
    /// Per-invocation probability of one uncorrelated clutter plot.
    pub clutter_probability: f64,
    /// Additive range noise stddev for correlated plots, meters.
    pub range_noise_std: f32,
    /// Additive azimuth noise stddev for correlated plots, degrees.
    pub azimuth_noise_std: f32,
    /// Radial velocity stddev for correlated plots, m/s.
    pub velocity_std: f32,
    /// Radial velocity stddev for clutter plots, m/s.
    pub clutter_velocity_std: f32,
    /// Uniform range bounds for clutter plots, meters.
    pub clutter_range_bounds: (f32, f32),
    /// Uniform azimuth bounds for clutter plots, degrees.
    pub clutter_azimuth_bounds: (f32, f32),
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            frame_width_px: 640.0,
            fov_deg: 60.0,
            max_azimuth_diff_deg: 10.0,
            range_scale: 500.0,
            clutter_probability: 0.3,
            range_noise_std: 0.5,
            azimuth_noise_std: 1.0,
            velocity_std: 2.0,
            clutter_velocity_std: 5.0,
            clutter_range_bounds: (5.0, 50.0),
            clutter_azimuth_bounds: (-45.0, 45.0),
        }
    }
}

impl FusionConfig {
    /// Maps a horizontal pixel position to a signed azimuth in degrees.
    pub fn azimuth_from_center_x(&self, center_x: f32) -> f32 {
        ((center_x / self.frame_width_px) - 0.5) * self.fov_deg
    }

    /// Azimuth estimate for a camera detection, from its box center.
    pub fn camera_azimuth(&self, bbox: &BoundingBox) -> f32 {
        self.azimuth_from_center_x(bbox.center_x())
    }
}

/// Common error type for fusion-cycle execution.
#[derive(thiserror::Error, Debug)]
pub enum FusionError {
    #[error("invalid geometry for detection {index}: {detail}")]
    InvalidGeometry { index: usize, detail: String },
    #[error("invalid confidence {value} for detection {index}")]
    InvalidConfidence { index: usize, value: f32 },
    #[error("internal failure: {0}")]
    Internal(String),
}

pub type FusionResult<T> = Result<T, FusionError>;

/// Trait describing per-cycle radar plot providers, simulated or hardware.
pub trait RadarSource {
    fn detect(&mut self, camera: &[CameraDetection]) -> Vec<RadarPlot>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_sensor_model() {
        let config = FusionConfig::default();
        assert_eq!(config.frame_width_px, 640.0);
        assert_eq!(config.fov_deg, 60.0);
        assert_eq!(config.max_azimuth_diff_deg, 10.0);
        assert_eq!(config.range_scale, 500.0);
        assert_eq!(config.clutter_probability, 0.3);
    }

    #[test]
    fn azimuth_mapping_spans_field_of_view() {
        let config = FusionConfig::default();
        assert_eq!(config.azimuth_from_center_x(0.0), -30.0);
        assert_eq!(config.azimuth_from_center_x(320.0), 0.0);
        assert_eq!(config.azimuth_from_center_x(640.0), 30.0);

        let bbox = BoundingBox::new(100.0, 100.0, 140.0, 220.0);
        assert!((config.camera_azimuth(&bbox) + 18.75).abs() < 1e-4);
    }
}
