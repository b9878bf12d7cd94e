use crate::sensor_interface::{CameraDetection, FusedObject, RadarPlot};
use crate::FusionConfig;

/// Greedy azimuth-proximity matcher producing one fused object per
/// camera detection.
pub struct AssociationEngine {
    config: FusionConfig,
}

impl AssociationEngine {
    pub fn new(config: FusionConfig) -> Self {
        Self { config }
    }

    /// Associates each camera detection with at most one radar plot.
    ///
    /// Single greedy pass in input order: earlier detections have first
    /// claim on the closest available plot, and a consumed plot is
    /// ineligible for later detections. A plot only qualifies when its
    /// azimuth difference is strictly below the configured gate; ties
    /// keep the first plot found in scan order.
    pub fn fuse(&self, camera: &[CameraDetection], plots: &[RadarPlot]) -> Vec<FusedObject> {
        let mut fused = Vec::with_capacity(camera.len());
        let mut consumed = vec![false; plots.len()];

        for detection in camera {
            let cam_azimuth = self.config.camera_azimuth(&detection.bbox);

            let mut best_index = None;
            let mut min_diff = self.config.max_azimuth_diff_deg;
            for (index, plot) in plots.iter().enumerate() {
                if consumed[index] {
                    continue;
                }
                let diff = (plot.azimuth_deg - cam_azimuth).abs();
                if diff < min_diff {
                    min_diff = diff;
                    best_index = Some(index);
                }
            }

            let mut fused_object = FusedObject::from_camera(detection);
            if let Some(index) = best_index {
                consumed[index] = true;
                fused_object.radar = Some(plots[index].clone());
            }
            fused.push(fused_object);
        }

        fused
    }
}
