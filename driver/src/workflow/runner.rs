use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use fusioncore::prelude::FusionPipeline;
use fusioncore::sensor_interface::{CameraFrame, FusedObject, RadarPlot};
use fusioncore::telemetry::{MetricsRecorder, MetricsSnapshot};
use std::sync::Arc;

pub struct CycleSummary {
    pub fused: Vec<FusedObject>,
    pub radar_plots: Vec<RadarPlot>,
    pub matched_count: usize,
    pub clutter_count: usize,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
    metrics: Arc<MetricsRecorder>,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            metrics: Arc::new(MetricsRecorder::new()),
        }
    }

    /// Runs one fusion cycle. Cycles are independent: the simulator is
    /// re-seeded per cycle index, so replayed or concurrent cycles
    /// reproduce the same plot stream.
    pub fn execute(&self, frame: &CameraFrame, cycle: u64) -> anyhow::Result<CycleSummary> {
        let fusion_config = self.config.to_fusion_config();
        let mut pipeline = if self.config.simulate_radar {
            FusionPipeline::with_simulator(fusion_config, self.config.seed.wrapping_add(cycle))
        } else {
            FusionPipeline::new(fusion_config)
        };

        let output = pipeline
            .run_cycle(frame)
            .map_err(|err| {
                self.metrics.record_error();
                err
            })
            .context("running fusion cycle")?;

        let matched_count = output.fused.iter().filter(|f| f.has_radar()).count();
        let clutter_count = output.radar_plots.iter().filter(|p| p.is_clutter()).count();
        self.metrics.record_cycle(matched_count, clutter_count);

        Ok(CycleSummary {
            fused: output.fused,
            radar_plots: output.radar_plots,
            matched_count,
            clutter_count,
        })
    }

    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::scenario::build_frame;
    use fusioncore::sensor_interface::{BoundingBox, CameraDetection};

    fn test_config() -> WorkflowConfig {
        WorkflowConfig::from_args(640.0, 60.0, 10.0, 3, 1, true)
    }

    #[test]
    fn runner_executes_cycle() {
        let runner = Runner::new(test_config());
        let frame = build_frame(4, 3).unwrap();

        let summary = runner.execute(&frame, 0).unwrap();
        assert_eq!(summary.fused.len(), 4);
        assert!(summary.radar_plots.len() >= 4 && summary.radar_plots.len() <= 5);
        assert!(summary.matched_count <= summary.fused.len());
        assert_eq!(runner.metrics_snapshot().cycles, 1);
    }

    #[test]
    fn runner_records_rejected_frames() {
        let runner = Runner::new(test_config());
        let frame = CameraFrame::new(
            vec![CameraDetection::new(
                BoundingBox::new(64.0, 0.0, 0.0, 64.0),
                0.9,
                0,
            )],
            None,
        );

        assert!(runner.execute(&frame, 0).is_err());
        let snapshot = runner.metrics_snapshot();
        assert_eq!(snapshot.errors, 1);
        assert_eq!(snapshot.cycles, 0);
    }

    #[test]
    fn camera_only_runner_yields_unmatched_objects() {
        let config = WorkflowConfig::from_args(640.0, 60.0, 10.0, 3, 1, false);
        let runner = Runner::new(config);
        let frame = build_frame(3, 3).unwrap();

        let summary = runner.execute(&frame, 0).unwrap();
        assert_eq!(summary.fused.len(), 3);
        assert!(summary.radar_plots.is_empty());
        assert_eq!(summary.matched_count, 0);
    }
}
