use serde::{Deserialize, Serialize};

/// Axis-aligned box in pixel coordinates with `x1 <= x2` and `y1 <= y2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl BoundingBox {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    pub fn center_x(&self) -> f32 {
        (self.x1 + self.x2) / 2.0
    }

    /// True when the corners are ordered and all coordinates non-negative.
    pub fn is_well_formed(&self) -> bool {
        self.x1 >= 0.0 && self.y1 >= 0.0 && self.x1 <= self.x2 && self.y1 <= self.y2
    }
}

/// Detection emitted by the external camera object detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraDetection {
    pub bbox: BoundingBox,
    pub confidence: f32,
    pub class_id: i32,
}

impl CameraDetection {
    pub fn new(bbox: BoundingBox, confidence: f32, class_id: i32) -> Self {
        Self {
            bbox,
            confidence,
            class_id,
        }
    }
}

/// Per-cycle input payload: one frame worth of camera detections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraFrame {
    pub detections: Vec<CameraDetection>,
    pub timestamp: Option<f64>,
}

impl CameraFrame {
    pub fn new(detections: Vec<CameraDetection>, timestamp: Option<f64>) -> Self {
        Self {
            detections,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_box_accepts_ordered_corners() {
        assert!(BoundingBox::new(0.0, 0.0, 64.0, 64.0).is_well_formed());
        assert!(BoundingBox::new(10.0, 50.0, 30.0, 50.0).is_well_formed());
    }

    #[test]
    fn malformed_box_is_rejected() {
        assert!(!BoundingBox::new(64.0, 0.0, 0.0, 64.0).is_well_formed());
        assert!(!BoundingBox::new(0.0, 64.0, 64.0, 0.0).is_well_formed());
        assert!(!BoundingBox::new(-4.0, 0.0, 64.0, 64.0).is_well_formed());
    }

    #[test]
    fn box_geometry_helpers() {
        let bbox = BoundingBox::new(100.0, 100.0, 140.0, 220.0);
        assert_eq!(bbox.width(), 40.0);
        assert_eq!(bbox.height(), 120.0);
        assert_eq!(bbox.center_x(), 120.0);
    }
}
