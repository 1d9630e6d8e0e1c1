use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::activation::Activation;
use crate::cost::Cost;
use crate::error::{NetworkError, Result};

/// Settings read by forward propagation, training and evaluation.
///
/// # Fields
/// - `activation`: applied by every non-input neuron
/// - `cost`: reduces (expected, predicted) to the training error
/// - `learning_rate`: step size, must be finite and > 0
/// - `momentum`: fraction of the previous step carried over, in [0, 1)
/// - `use_momentum`: whether `momentum` is applied at all
#[derive(Debug, Clone, Copy)]
pub struct TrainConfig {
    pub activation: Activation,
    pub cost: Cost,
    pub learning_rate: f64,
    pub momentum: f64,
    pub use_momentum: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            activation: Activation::Sigmoid,
            cost: Cost::CrossEntropy,
            learning_rate: 0.1,
            momentum: 0.9,
            use_momentum: false,
        }
    }
}

impl TrainConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(NetworkError::InvalidConfig(format!(
                "learning_rate must be a positive number, got {}",
                self.learning_rate
            )));
        }
        if !(0.0..1.0).contains(&self.momentum) {
            return Err(NetworkError::InvalidConfig(format!(
                "momentum must be in [0, 1), got {}",
                self.momentum
            )));
        }
        Ok(())
    }

    /// Merges `options` into this configuration. Keys left as `None` keep
    /// their current value. On error nothing is changed.
    pub fn configure(&mut self, options: ConfigOptions) -> Result<()> {
        let mut next = *self;
        if let Some(activation) = options.activation {
            next.activation = activation;
        }
        if let Some(cost) = options.cost {
            next.cost = cost;
        }
        if let Some(learning_rate) = options.learning_rate {
            next.learning_rate = learning_rate;
        }
        if let Some(momentum) = options.momentum {
            next.momentum = momentum;
        }
        if let Some(use_momentum) = options.use_momentum {
            next.use_momentum = use_momentum;
        }
        next.validate()?;

        debug!(
            activation = next.activation.name(),
            cost = next.cost.name(),
            learning_rate = next.learning_rate,
            momentum = next.momentum,
            use_momentum = next.use_momentum,
            "configuration updated"
        );
        *self = next;
        Ok(())
    }
}

/// A partial `TrainConfig`, as passed to `configure`.
///
/// Deserializes from JSON with functions given by registry name:
///
/// ```json
/// { "activation": "tanh", "cost": "mae", "learning_rate": 0.05, "use_momentum": true }
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOptions {
    pub activation: Option<Activation>,
    pub cost: Option<Cost>,
    pub learning_rate: Option<f64>,
    pub momentum: Option<f64>,
    pub use_momentum: Option<bool>,
}

impl ConfigOptions {
    pub fn new() -> Self {
        ConfigOptions::default()
    }

    pub fn activation(mut self, activation: Activation) -> Self {
        self.activation = Some(activation);
        self
    }

    pub fn cost(mut self, cost: Cost) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = Some(learning_rate);
        self
    }

    pub fn momentum(mut self, momentum: f64) -> Self {
        self.momentum = Some(momentum);
        self
    }

    pub fn use_momentum(mut self, use_momentum: bool) -> Self {
        self.use_momentum = Some(use_momentum);
        self
    }

    pub fn from_json_str(json: &str) -> Result<ConfigOptions> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads options from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<ConfigOptions> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TrainConfig::default();
        assert!(matches!(config.activation, Activation::Sigmoid));
        assert!(matches!(config.cost, Cost::CrossEntropy));
        assert_eq!(config.learning_rate, 0.1);
        assert_eq!(config.momentum, 0.9);
        assert!(!config.use_momentum);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unspecified_keys_are_kept() {
        let mut config = TrainConfig::default();
        config.configure(ConfigOptions::new().learning_rate(0.05).use_momentum(true)).unwrap();
        config.configure(ConfigOptions::new().activation(Activation::Tanh)).unwrap();

        assert!(matches!(config.activation, Activation::Tanh));
        assert!(matches!(config.cost, Cost::CrossEntropy));
        assert_eq!(config.learning_rate, 0.05);
        assert_eq!(config.momentum, 0.9);
        assert!(config.use_momentum);
    }

    #[test]
    fn rejected_update_changes_nothing() {
        let mut config = TrainConfig::default();
        let err = config
            .configure(ConfigOptions::new().cost(Cost::Mae).momentum(1.0))
            .unwrap_err();
        assert!(matches!(err, NetworkError::InvalidConfig(_)));
        assert!(matches!(config.cost, Cost::CrossEntropy));
        assert_eq!(config.momentum, 0.9);

        assert!(config.configure(ConfigOptions::new().learning_rate(0.0)).is_err());
        assert!(config.configure(ConfigOptions::new().learning_rate(f64::NAN)).is_err());
        assert!(config.configure(ConfigOptions::new().momentum(-0.1)).is_err());
        assert_eq!(config.learning_rate, 0.1);
    }

    #[test]
    fn parses_partial_json() {
        let options = ConfigOptions::from_json_str(
            r#"{ "activation": "relu", "cost": "mse", "momentum": 0.5 }"#,
        ).unwrap();
        assert!(matches!(options.activation, Some(Activation::Relu)));
        assert!(matches!(options.cost, Some(Cost::Mse)));
        assert_eq!(options.momentum, Some(0.5));
        assert_eq!(options.learning_rate, None);
        assert_eq!(options.use_momentum, None);
    }

    #[test]
    fn json_rejects_unknown_names() {
        assert!(matches!(
            ConfigOptions::from_json_str(r#"{ "activation": "softmax" }"#),
            Err(NetworkError::Json(_))
        ));
        assert!(ConfigOptions::from_json_str(r#"{ "learning_rte": 0.1 }"#).is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ConfigOptions::load_json("/nonexistent/hnet.json").unwrap_err();
        assert!(matches!(err, NetworkError::Io(_)));
    }
}
