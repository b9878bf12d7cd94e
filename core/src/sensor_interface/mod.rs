pub mod camera;
pub mod fused;
pub mod radar;

pub use camera::{BoundingBox, CameraDetection, CameraFrame};
pub use fused::FusedObject;
pub use radar::{RadarPlot, CLUTTER_SOURCE_ID};
