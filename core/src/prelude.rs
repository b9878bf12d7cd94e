pub use crate::fusion::{AssociationEngine, CycleOutput, FusionPipeline, RadarPlotSimulator};
pub use crate::sensor_interface::{
    BoundingBox, CameraDetection, CameraFrame, FusedObject, RadarPlot, CLUTTER_SOURCE_ID,
};
pub use crate::{FusionConfig, FusionError, FusionResult, RadarSource};
