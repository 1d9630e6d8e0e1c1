use crate::network::Topology;
use crate::train::train_config::TrainConfig;

/// Online gradient-descent update with optional momentum.
///
/// Every weight moves by `-learning_rate · delta · input` (the bias by
/// `-learning_rate · delta`). With momentum `m` the previous step, scaled by
/// `m`, is added on and the sum is remembered in `weight_changes` /
/// `bias_change` for the next step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
    pub momentum: Option<f64>,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate, momentum: None }
    }

    pub fn with_momentum(learning_rate: f64, momentum: f64) -> Sgd {
        Sgd { learning_rate, momentum: Some(momentum) }
    }

    pub fn from_config(config: &TrainConfig) -> Sgd {
        if config.use_momentum {
            Sgd::with_momentum(config.learning_rate, config.momentum)
        } else {
            Sgd::new(config.learning_rate)
        }
    }

    /// Applies one update to every non-input layer using the deltas and
    /// values left by the latest forward/backward pass.
    pub fn step(&self, topology: &mut Topology) {
        let layers = topology.layers_mut();
        for layer in 1..layers.len() {
            let (behind, ahead) = layers.split_at_mut(layer);
            let previous = &behind[layer - 1];
            for neuron in ahead[0].iter_mut() {
                for (i, input) in previous.iter().enumerate() {
                    let step = -self.learning_rate * neuron.delta * input.value;
                    let change = self.with_history(step, &mut neuron.weight_changes[i]);
                    neuron.weights[i] += change;
                }
                let step = -self.learning_rate * neuron.delta;
                let change = self.with_history(step, &mut neuron.bias_change);
                neuron.bias += change;
            }
        }
    }

    fn with_history(&self, step: f64, last: &mut f64) -> f64 {
        match self.momentum {
            Some(momentum) => {
                let change = step + momentum * *last;
                *last = change;
                change
            }
            None => step,
        }
    }
}
