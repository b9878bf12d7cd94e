use anyhow::Context;
use fusioncore::prelude::FusionConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowConfig {
    pub frame_width_px: f32,
    pub fov_deg: f32,
    pub max_azimuth_diff_deg: f32,
    pub seed: u64,
    pub cycles: u64,
    pub simulate_radar: bool,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        frame_width_px: f32,
        fov_deg: f32,
        max_azimuth_diff_deg: f32,
        seed: u64,
        cycles: u64,
        simulate_radar: bool,
    ) -> Self {
        Self {
            frame_width_px,
            fov_deg,
            max_azimuth_diff_deg,
            seed,
            cycles,
            simulate_radar,
        }
    }

    /// Geometry and gating flow into the core config; noise and clutter
    /// parameters keep their sensor-model defaults.
    pub fn to_fusion_config(&self) -> FusionConfig {
        FusionConfig {
            frame_width_px: self.frame_width_px,
            fov_deg: self.fov_deg,
            max_azimuth_diff_deg: self.max_azimuth_diff_deg,
            ..FusionConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_produces_fusion_config() {
        let cfg = WorkflowConfig::from_args(1280.0, 90.0, 12.0, 5, 3, true);
        let fusion = cfg.to_fusion_config();
        assert_eq!(fusion.frame_width_px, 1280.0);
        assert_eq!(fusion.fov_deg, 90.0);
        assert_eq!(fusion.max_azimuth_diff_deg, 12.0);
        assert_eq!(fusion.clutter_probability, 0.3);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"frame_width_px: 640.0\nfov_deg: 60.0\nmax_azimuth_diff_deg: 10.0\nseed: 7\ncycles: 4\nsimulate_radar: true\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.cycles, 4);
        assert!(cfg.simulate_radar);
    }
}
