use anyhow::ensure;
use fusioncore::sensor_interface::{BoundingBox, CameraDetection, CameraFrame};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for synthesizing camera frames offline, standing in for
/// the external object detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub object_count: usize,
    pub frame_width_px: f32,
    pub frame_height_px: f32,
    pub min_box_px: f32,
    pub max_box_px: f32,
    pub min_confidence: f32,
    pub class_count: i32,
    pub seed: u64,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            object_count: 3,
            frame_width_px: 640.0,
            frame_height_px: 480.0,
            min_box_px: 24.0,
            max_box_px: 160.0,
            min_confidence: 0.4,
            class_count: 8,
            seed: 0,
            name: None,
            description: None,
        }
    }
}

impl ScenarioConfig {
    fn normalized_box_bounds(&self) -> (f32, f32) {
        let hi = self
            .max_box_px
            .min(self.frame_width_px)
            .min(self.frame_height_px)
            .max(1.0);
        let lo = self.min_box_px.clamp(1.0, hi);
        (lo, hi)
    }

    fn normalized_class_count(&self) -> i32 {
        self.class_count.max(1)
    }
}

pub fn build_camera_frame(config: &ScenarioConfig) -> anyhow::Result<CameraFrame> {
    ensure!(
        config.frame_width_px.is_finite() && config.frame_height_px.is_finite(),
        "scenario frame dimensions must be finite"
    );

    let (box_lo, box_hi) = config.normalized_box_bounds();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut detections = Vec::with_capacity(config.object_count);

    for _ in 0..config.object_count {
        let width = rng.gen_range(box_lo..=box_hi);
        let height = rng.gen_range(box_lo..=box_hi);
        let x1 = rng.gen_range(0.0..=(config.frame_width_px - width).max(0.0));
        let y1 = rng.gen_range(0.0..=(config.frame_height_px - height).max(0.0));
        let confidence = rng.gen_range(config.min_confidence.clamp(0.0, 1.0)..=1.0);
        let class_id = rng.gen_range(0..config.normalized_class_count());

        detections.push(CameraDetection::new(
            BoundingBox::new(x1, y1, x1 + width, y1 + height),
            confidence,
            class_id,
        ));
    }

    Ok(CameraFrame::new(detections, Some(0.0)))
}

pub fn build_frame(object_count: usize, seed: u64) -> anyhow::Result<CameraFrame> {
    let config = ScenarioConfig {
        object_count,
        seed,
        ..Default::default()
    };
    build_camera_frame(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_builds_expected_detection_count() {
        let frame = build_frame(5, 21).unwrap();
        assert_eq!(frame.detections.len(), 5);
    }

    #[test]
    fn generated_boxes_are_well_formed() {
        let config = ScenarioConfig {
            object_count: 16,
            seed: 42,
            ..Default::default()
        };
        let frame = build_camera_frame(&config).unwrap();

        for detection in &frame.detections {
            assert!(detection.bbox.is_well_formed());
            assert!(detection.bbox.x2 <= config.frame_width_px);
            assert!(detection.bbox.y2 <= config.frame_height_px);
            assert!((0.0..=1.0).contains(&detection.confidence));
            assert!(detection.class_id >= 0 && detection.class_id < config.class_count);
        }
    }

    #[test]
    fn same_seed_reproduces_frame() {
        let first = build_frame(4, 9).unwrap();
        let second = build_frame(4, 9).unwrap();
        assert_eq!(first.detections, second.detections);
    }
}
