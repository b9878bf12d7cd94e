use crate::sensor_interface::{CameraDetection, RadarPlot, CLUTTER_SOURCE_ID};
use crate::{FusionConfig, RadarSource, RANGE_EPS};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Synthesizes plausible radar plots correlated with camera detections,
/// plus occasional uncorrelated clutter, absent real radar hardware.
///
/// Each instance owns its seedable generator stream; concurrent cycles
/// need independent instances.
pub struct RadarPlotSimulator {
    config: FusionConfig,
    rng: StdRng,
}

impl RadarPlotSimulator {
    pub fn new(config: FusionConfig, seed: u64) -> Self {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Callers that manage their own generator stream inject it here.
    pub fn from_rng(config: FusionConfig, rng: StdRng) -> Self {
        Self { config, rng }
    }

    fn gaussian(&mut self, std_dev: f32) -> f32 {
        let draw: f32 = self.rng.sample(StandardNormal);
        draw * std_dev.max(0.0)
    }
}

impl RadarSource for RadarPlotSimulator {
    fn detect(&mut self, camera: &[CameraDetection]) -> Vec<RadarPlot> {
        let mut plots = Vec::with_capacity(camera.len() + 1);

        for detection in camera {
            // Smaller box reads as a farther object.
            let range = self.config.range_scale / (detection.bbox.height() + RANGE_EPS)
                + self.gaussian(self.config.range_noise_std);
            let azimuth = self.config.camera_azimuth(&detection.bbox)
                + self.gaussian(self.config.azimuth_noise_std);
            let velocity = self.gaussian(self.config.velocity_std);

            plots.push(RadarPlot::new(range, azimuth, velocity, detection.class_id));
        }

        if self.rng.gen::<f64>() < self.config.clutter_probability {
            let (range_lo, range_hi) = self.config.clutter_range_bounds;
            let (azimuth_lo, azimuth_hi) = self.config.clutter_azimuth_bounds;
            plots.push(RadarPlot::new(
                self.rng.gen_range(range_lo..range_hi),
                self.rng.gen_range(azimuth_lo..azimuth_hi),
                self.gaussian(self.config.clutter_velocity_std),
                CLUTTER_SOURCE_ID,
            ));
        }

        plots
    }
}
