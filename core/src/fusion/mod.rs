pub mod association;
pub mod pipeline;
pub mod simulator;

pub use association::AssociationEngine;
pub use pipeline::{CycleOutput, FusionPipeline};
pub use simulator::RadarPlotSimulator;
