use crate::sensor_interface::camera::{BoundingBox, CameraDetection};
use crate::sensor_interface::radar::RadarPlot;
use serde::{Deserialize, Serialize};

/// Camera detection enriched with at most one associated radar plot.
///
/// The camera is the anchor modality: every fused object originates from
/// exactly one camera detection, and radar plots with no camera match are
/// dropped rather than promoted to objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusedObject {
    pub bbox: BoundingBox,
    pub class_id: i32,
    pub confidence: f32,
    pub radar: Option<RadarPlot>,
}

impl FusedObject {
    /// Unmatched fused object carrying only the camera fields.
    pub fn from_camera(detection: &CameraDetection) -> Self {
        Self {
            bbox: detection.bbox.clone(),
            class_id: detection.class_id,
            confidence: detection.confidence,
            radar: None,
        }
    }

    pub fn has_radar(&self) -> bool {
        self.radar.is_some()
    }
}
