use anyhow::Context;
use clap::Parser;
use fusioncore::math::StatsHelper;
use generator::scenario::{build_camera_frame, ScenarioConfig};
use gui_bridge::bridge::GuiBridge;
use gui_bridge::model::VisualizationModel;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod generator;
mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Offline driver for the radar-camera fusion core")]
struct Args {
    /// Run a batch of offline fusion cycles and emit a baseline summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    #[arg(long, default_value_t = 640.0)]
    frame_width: f32,
    #[arg(long, default_value_t = 60.0)]
    fov: f32,
    #[arg(long, default_value_t = 10.0)]
    azimuth_gate: f32,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 8)]
    cycles: u64,
    /// Skip radar simulation and fuse camera detections alone
    #[arg(long, default_value_t = false)]
    camera_only: bool,
    /// Keep the GUI bridge alive for incoming real-time frames
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(
            args.frame_width,
            args.fov,
            args.azimuth_gate,
            args.seed,
            args.cycles,
            !args.camera_only,
        )
    };
    log::info!(
        "workflow: {} cycles, radar simulation {}",
        workflow_config.cycles,
        if workflow_config.simulate_radar { "on" } else { "off" }
    );

    let runner = Arc::new(Runner::new(workflow_config.clone()));
    let gui_bridge = GuiBridge::new(runner.clone());

    if args.offline {
        let mut matched_per_cycle = Vec::new();
        let mut last_model = VisualizationModel::default();

        for cycle in 0..workflow_config.cycles {
            let scenario = ScenarioConfig {
                seed: workflow_config.seed.wrapping_add(cycle),
                ..ScenarioConfig::default()
            };
            let frame = build_camera_frame(&scenario)?;
            let summary = runner
                .execute(&frame, cycle)
                .with_context(|| format!("executing cycle {}", cycle))?;

            matched_per_cycle.push(summary.matched_count as f32);
            last_model = VisualizationModel {
                cycle_index: cycle,
                fused_objects: summary.fused,
                radar_plots: summary.radar_plots,
                matched_count: summary.matched_count,
                clutter_count: summary.clutter_count,
            };
        }

        let metrics = runner.metrics_snapshot();
        println!(
            "Offline run -> cycles {}, matched {}, clutter {}, mean matched/cycle {:.2}",
            metrics.cycles,
            metrics.matched,
            metrics.clutter,
            StatsHelper::mean(&matched_per_cycle)
        );

        gui_bridge.publish(&last_model)?;
        gui_bridge.publish_status("Offline fusion results ready.");

        let report = format!(
            "cycles={} matched={} clutter={} errors={} mean_matched={:.2}\n",
            metrics.cycles,
            metrics.matched,
            metrics.clutter,
            metrics.errors,
            StatsHelper::mean(&matched_per_cycle)
        );
        let report_path = PathBuf::from("tools/data/offline_fusion.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        file.write_all(report.as_bytes())?;
    }
    if args.serve {
        gui_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
