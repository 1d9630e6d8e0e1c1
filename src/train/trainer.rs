use std::time::Instant;

use tracing::{debug, info};

use crate::error::Result;
use crate::network::Topology;
use crate::optim::Sgd;
use crate::train::backprop::{check_dataset, run_epoch};
use crate::train::epoch_stats::EpochStats;
use crate::train::monitor::Monitor;
use crate::train::train_config::TrainConfig;

/// Per-epoch training curve returned by `train`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    /// Mean cost of each epoch, in order; one entry per epoch.
    pub errors: Vec<f64>,
}

impl TrainReport {
    pub fn final_error(&self) -> Option<f64> {
        self.errors.last().copied()
    }
}

/// Runs `epochs` epochs of `backpropagate` over the dataset, mutating
/// `topology` in place.
///
/// The dataset is validated once up front. If a monitor is given it is
/// called after every epoch whose 0-based index is a multiple of its
/// frequency, before the next epoch starts.
pub fn train(
    topology: &mut Topology,
    inputs: &[Vec<f64>],
    outputs: &[Vec<f64>],
    epochs: usize,
    config: &TrainConfig,
    mut monitor: Option<Monitor<'_>>,
) -> Result<TrainReport> {
    check_dataset(topology, inputs, outputs)?;
    config.validate()?;

    info!(
        epochs,
        samples = inputs.len(),
        activation = config.activation.name(),
        cost = config.cost.name(),
        "starting training"
    );

    let optimizer = Sgd::from_config(config);
    let mut errors = Vec::with_capacity(epochs);

    for epoch in 0..epochs {
        let t_start = Instant::now();
        let error = run_epoch(topology, inputs, outputs, config, &optimizer)?;
        errors.push(error);

        if let Some(monitor) = monitor.as_mut() {
            if monitor.is_due(epoch) {
                debug!(epoch, error, "epoch finished");
                let stats = EpochStats {
                    epoch,
                    total_epochs: epochs,
                    error,
                    elapsed_ms: t_start.elapsed().as_millis() as u64,
                };
                monitor.notify(stats, topology);
            }
        }
    }

    let report = TrainReport { errors };
    info!(final_error = ?report.final_error(), "training finished");
    Ok(report)
}
