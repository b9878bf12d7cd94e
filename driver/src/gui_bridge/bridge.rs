use crate::generator::scenario::{build_camera_frame, ScenarioConfig};
use crate::gui_bridge::model::VisualizationModel;
use crate::workflow::runner::{CycleSummary, Runner};
use anyhow::Result;
use fusioncore::sensor_interface::CameraFrame;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, RwLock,
    },
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn gui_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

#[derive(Debug)]
struct WarpError;

impl warp::reject::Reject for WarpError {}

fn model_from_summary(cycle: u64, summary: &CycleSummary) -> VisualizationModel {
    VisualizationModel {
        cycle_index: cycle,
        fused_objects: summary.fused.clone(),
        radar_plots: summary.radar_plots.clone(),
        matched_count: summary.matched_count,
        clutter_count: summary.clutter_count,
    }
}

/// Bridge that hosts the fusion HTTP endpoint and processes incoming
/// camera frames.
pub struct GuiBridge {
    state: Arc<RwLock<VisualizationModel>>,
}

impl GuiBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        let state = Arc::new(RwLock::new(VisualizationModel::default()));
        let cycle_counter = Arc::new(AtomicU64::new(0));
        let state_for_filter = state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());
        let runner_filter = warp::any().map(move || runner.clone());
        let counter_filter = warp::any().map(move || cycle_counter.clone());

        let get_route = warp::path("payload")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<RwLock<VisualizationModel>>| {
                warp::reply::json(&*state.read().unwrap())
            });

        let ingest_route = warp::path("ingest")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter.clone())
            .and(runner_filter.clone())
            .and(counter_filter.clone())
            .and_then(
                |frame: CameraFrame,
                 state: Arc<RwLock<VisualizationModel>>,
                 runner: Arc<Runner>,
                 counter: Arc<AtomicU64>| async move {
                    let cycle = counter.fetch_add(1, Ordering::SeqCst);
                    match runner.execute(&frame, cycle) {
                        Ok(summary) => {
                            let mut guard = state.write().unwrap();
                            *guard = model_from_summary(cycle, &summary);
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(
                                    &json!({"status": "ok", "matched": summary.matched_count}),
                                ),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("ingest error: {}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        let scenario_route = warp::path("ingest-scenario")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter)
            .and(runner_filter)
            .and(counter_filter)
            .and_then(
                |config: ScenarioConfig,
                 state: Arc<RwLock<VisualizationModel>>,
                 runner: Arc<Runner>,
                 counter: Arc<AtomicU64>| async move {
                    let cycle = counter.fetch_add(1, Ordering::SeqCst);
                    match build_camera_frame(&config)
                        .and_then(|frame| runner.execute(&frame, cycle))
                    {
                        Ok(summary) => {
                            let mut guard = state.write().unwrap();
                            *guard = model_from_summary(cycle, &summary);
                            if let Some(name) = config.name.as_ref() {
                                println!(
                                    "[GUI] Scenario {} -> matched {}",
                                    name, summary.matched_count
                                );
                            }
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": "ok",
                                    "matched": summary.matched_count,
                                    "description": config.description.clone().unwrap_or_default()
                                })),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("ingest-scenario error: {}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        thread::spawn(move || {
            let routes = get_route.or(ingest_route).or(scenario_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(gui_bind_address()).await;
            });
        });

        Self { state }
    }

    pub fn publish(&self, model: &VisualizationModel) -> Result<()> {
        let mut guard = self.state.write().unwrap();
        *guard = model.clone();
        println!(
            "[GUI] fused objects: {}, matched: {}",
            guard.fused_objects.len(),
            guard.matched_count
        );
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        println!("[GUI] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> VisualizationModel {
        self.state.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::scenario::build_frame;
    use crate::workflow::config::WorkflowConfig;
    use crate::workflow::runner::Runner;
    use std::sync::Arc;

    #[test]
    fn gui_bridge_updates_state() {
        let cfg = WorkflowConfig::from_args(640.0, 60.0, 10.0, 2, 1, true);
        let runner = Arc::new(Runner::new(cfg));
        let gui = GuiBridge::new(runner.clone());

        let frame = build_frame(3, 2).unwrap();
        let summary = runner.execute(&frame, 0).unwrap();
        let model = model_from_summary(0, &summary);

        gui.publish(&model).unwrap();
        assert_eq!(gui.snapshot().fused_objects.len(), 3);
        assert_eq!(gui.snapshot().matched_count, summary.matched_count);
    }
}
