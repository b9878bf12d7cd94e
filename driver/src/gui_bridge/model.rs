use fusioncore::sensor_interface::{FusedObject, RadarPlot};
use serde::{Deserialize, Serialize};

/// JSON payload consumed by the external display layer: the fused boxes
/// plus the raw radar table for the current cycle.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VisualizationModel {
    pub cycle_index: u64,
    pub fused_objects: Vec<FusedObject>,
    pub radar_plots: Vec<RadarPlot>,
    pub matched_count: usize,
    pub clutter_count: usize,
}
