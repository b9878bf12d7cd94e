use crate::fusion::association::AssociationEngine;
use crate::fusion::simulator::RadarPlotSimulator;
use crate::sensor_interface::{CameraFrame, FusedObject, RadarPlot};
use crate::telemetry::log::LogManager;
use crate::{FusionConfig, FusionError, FusionResult, RadarSource};

/// Output of one fusion cycle: the fused list plus the radar plots that
/// were considered, simulated or externally supplied.
#[derive(Debug, Clone)]
pub struct CycleOutput {
    pub fused: Vec<FusedObject>,
    pub radar_plots: Vec<RadarPlot>,
}

/// Composes a radar plot source with the association engine, one cycle
/// at a time. Holds no cross-cycle state beyond the source's generator
/// stream; a failed cycle leaves no partial output.
pub struct FusionPipeline {
    engine: AssociationEngine,
    radar: Option<Box<dyn RadarSource>>,
    logger: LogManager,
}

impl FusionPipeline {
    /// Pipeline fed by externally supplied plots only.
    pub fn new(config: FusionConfig) -> Self {
        Self {
            engine: AssociationEngine::new(config),
            radar: None,
            logger: LogManager::new(),
        }
    }

    /// Pipeline with the built-in plot simulator as its radar source.
    pub fn with_simulator(config: FusionConfig, seed: u64) -> Self {
        let simulator = RadarPlotSimulator::new(config.clone(), seed);
        Self::with_radar_source(config, Box::new(simulator))
    }

    pub fn with_radar_source(config: FusionConfig, radar: Box<dyn RadarSource>) -> Self {
        Self {
            engine: AssociationEngine::new(config),
            radar: Some(radar),
            logger: LogManager::new(),
        }
    }

    /// Runs one full cycle: boundary validation, plot acquisition,
    /// association.
    pub fn run_cycle(&mut self, frame: &CameraFrame) -> FusionResult<CycleOutput> {
        if let Err(err) = validate_frame(frame) {
            self.logger.warn(&format!("rejecting camera frame: {}", err));
            return Err(err);
        }

        let radar_plots = match self.radar.as_mut() {
            Some(source) => source.detect(&frame.detections),
            None => Vec::new(),
        };
        let fused = self.engine.fuse(&frame.detections, &radar_plots);

        let matched = fused.iter().filter(|f| f.has_radar()).count();
        self.logger.record(&format!(
            "FusionPipeline cycle: {} detections, {} plots, {} matched",
            frame.detections.len(),
            radar_plots.len(),
            matched
        ));

        Ok(CycleOutput { fused, radar_plots })
    }

    /// Fuses against plots supplied by an external radar feed.
    pub fn run_cycle_with_plots(
        &self,
        frame: &CameraFrame,
        plots: &[RadarPlot],
    ) -> FusionResult<Vec<FusedObject>> {
        if let Err(err) = validate_frame(frame) {
            self.logger.warn(&format!("rejecting camera frame: {}", err));
            return Err(err);
        }
        Ok(self.engine.fuse(&frame.detections, plots))
    }
}

/// Boundary validation: the engine and the simulator assume well-formed
/// input, so malformed detections are rejected here with their index.
fn validate_frame(frame: &CameraFrame) -> FusionResult<()> {
    for (index, detection) in frame.detections.iter().enumerate() {
        if !detection.bbox.is_well_formed() {
            return Err(FusionError::InvalidGeometry {
                index,
                detail: format!(
                    "corners ({}, {}) to ({}, {}) must be ordered and non-negative",
                    detection.bbox.x1, detection.bbox.y1, detection.bbox.x2, detection.bbox.y2
                ),
            });
        }
        if !(0.0..=1.0).contains(&detection.confidence) {
            return Err(FusionError::InvalidConfidence {
                index,
                value: detection.confidence,
            });
        }
    }
    Ok(())
}
