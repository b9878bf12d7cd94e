use serde::{Deserialize, Serialize};

/// Source id marking a plot as clutter rather than a correlated return.
pub const CLUTTER_SOURCE_ID: i32 = -1;

/// Single radar plot in polar sensor coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPlot {
    pub range_m: f32,
    pub azimuth_deg: f32,
    pub velocity_mps: f32,
    pub source_id: i32,
}

impl RadarPlot {
    pub fn new(range_m: f32, azimuth_deg: f32, velocity_mps: f32, source_id: i32) -> Self {
        Self {
            range_m,
            azimuth_deg,
            velocity_mps,
            source_id,
        }
    }

    pub fn is_clutter(&self) -> bool {
        self.source_id == CLUTTER_SOURCE_ID
    }
}
