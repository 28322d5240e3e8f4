use anyhow::{Context, Result};
use log::{info, warn};
use std::collections::HashMap;
use tokio::task::JoinSet;
use trajectory_rollout::{RolloutParams, TrajectorySample};

/// Forward-simulate a holonomic robot under a constant velocity command
fn generate(
    params: &RolloutParams,
    start: (f64, f64, f64),
    cmd: (f64, f64, f64),
) -> TrajectorySample {
    let mut traj = params.seed(cmd.0, cmd.1, cmd.2);
    let dt = traj.time_delta;
    let (mut x, mut y, mut th) = start;

    for _ in 0..params.num_steps() {
        x += (cmd.0 * th.cos() - cmd.1 * th.sin()) * dt;
        y += (cmd.0 * th.sin() + cmd.1 * th.cos()) * dt;
        th += cmd.2 * dt;
        traj.add_point(x, y, th);
    }

    traj
}

/// Distance from the trajectory's endpoint to the goal
fn score(traj: &mut TrajectorySample, goal: (f64, f64)) -> Result<()> {
    let end = traj.endpoint()?;
    let dist = ((goal.0 - end.x).powi(2) + (goal.1 - end.y).powi(2)).sqrt();
    traj.set_cost(dist);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    info!("Initializing trajectory rollout...");

    let mut params = RolloutParams::new();
    let mut config = HashMap::new();
    config.insert("sim_time".to_string(), 1.5);
    config.insert("sim_granularity".to_string(), 0.05);
    params
        .configure(&config)
        .context("failed to configure rollout")?;

    let start = (0.0, 0.0, 0.0);
    let goal = (1.0, 0.5);
    info!("Rolling out from {:?} towards {:?}", start, goal);

    let mut tasks = JoinSet::new();
    for i in 0..=4 {
        for j in -3..=3 {
            let cmd = (0.2 * i as f64, 0.0, 0.3 * j as f64);
            let params = params.clone();
            tasks.spawn_blocking(move || {
                let mut traj = generate(&params, start, cmd);
                score(&mut traj, goal).map(|_| traj)
            });
        }
    }

    let mut candidates = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined? {
            Ok(traj) => candidates.push(traj),
            Err(e) => warn!("Dropping candidate: {}", e),
        }
    }

    let best = candidates
        .iter()
        .filter_map(|traj| traj.cost().map(|cost| (cost, traj)))
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, traj)| traj)
        .context("no scored candidates")?;

    let end = best.endpoint()?;
    info!(
        "Best of {} candidates: command={:?}, cost={:?}, \
         endpoint=({:.3}, {:.3}, {:.3}) after {:.2}s",
        candidates.len(),
        best.command(),
        best.cost(),
        end.x,
        end.y,
        end.theta,
        best.duration()
    );

    Ok(())
}
