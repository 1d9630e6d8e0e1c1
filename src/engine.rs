use crate::error::Result;
use crate::network::{self, Topology};
use crate::train::{self, ConfigOptions, Monitor, TrainConfig, TrainReport};

/// Owns one `TrainConfig` so it can be configured once and reused across
/// many forward, training and evaluation calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    config: TrainConfig,
}

impl Engine {
    pub fn new() -> Engine {
        Engine::default()
    }

    pub fn with_config(config: TrainConfig) -> Result<Engine> {
        config.validate()?;
        Ok(Engine { config })
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Merges `options` into the owned configuration; later calls see the
    /// new settings, finished calls are unaffected.
    pub fn configure(&mut self, options: ConfigOptions) -> Result<()> {
        self.config.configure(options)
    }

    pub fn init<'a>(&self, topology: &'a mut Topology) -> &'a mut Topology {
        network::init(topology)
    }

    pub fn feed_forward(&self, topology: &mut Topology, inputs: &[f64]) -> Result<Vec<f64>> {
        topology.feed_forward(inputs, &self.config.activation)
    }

    pub fn predict(&self, topology: &mut Topology, inputs: &[f64]) -> Result<Vec<f64>> {
        topology.predict(inputs, &self.config.activation)
    }

    pub fn backpropagate(
        &self,
        topology: &mut Topology,
        inputs: &[Vec<f64>],
        outputs: &[Vec<f64>],
    ) -> Result<f64> {
        train::backpropagate(topology, inputs, outputs, &self.config)
    }

    pub fn train(
        &self,
        topology: &mut Topology,
        inputs: &[Vec<f64>],
        outputs: &[Vec<f64>],
        epochs: usize,
        monitor: Option<Monitor<'_>>,
    ) -> Result<TrainReport> {
        train::train(topology, inputs, outputs, epochs, &self.config, monitor)
    }

    pub fn calculate_error(
        &self,
        topology: &mut Topology,
        inputs: &[Vec<f64>],
        expected_outputs: &[Vec<f64>],
    ) -> Result<f64> {
        train::calculate_error(topology, inputs, expected_outputs, &self.config)
    }
}
