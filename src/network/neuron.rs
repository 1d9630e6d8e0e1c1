/// One computational unit. Input-layer neurons only use `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    pub bias: f64,
    /// Last applied bias step; only read when momentum is on.
    pub bias_change: f64,
    /// One weight per neuron of the previous layer, in that layer's order.
    pub weights: Vec<f64>,
    /// Last applied weight steps, aligned with `weights`.
    pub weight_changes: Vec<f64>,
    /// Weighted sum plus bias from the latest forward pass.
    pub net_input: f64,
    /// Activated output from the latest forward pass (raw input for layer 0).
    pub value: f64,
    /// Error signal from the latest training step.
    pub delta: f64,
}

impl Neuron {
    /// An unwired neuron; `init` gives it weights.
    pub fn new() -> Neuron {
        Neuron {
            bias: 1.0,
            bias_change: 0.0,
            weights: Vec::new(),
            weight_changes: Vec::new(),
            net_input: 0.0,
            value: 0.0,
            delta: 0.0,
        }
    }

    /// A neuron with fixed weights and bias, for hand-wired networks.
    pub fn with_weights(weights: Vec<f64>, bias: f64) -> Neuron {
        let weight_changes = vec![0.0; weights.len()];
        Neuron {
            bias,
            weights,
            weight_changes,
            ..Neuron::new()
        }
    }
}

impl Default for Neuron {
    fn default() -> Self {
        Neuron::new()
    }
}
