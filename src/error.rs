use thiserror::Error;

/// Error type shared by every fallible operation in the crate.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("topology has no layers")]
    EmptyTopology,

    #[error("layer {layer} has no neurons")]
    EmptyLayer { layer: usize },

    /// Input vector does not match the input layer.
    #[error("input has {actual} values but the input layer has {expected} neurons")]
    InputShape { expected: usize, actual: usize },

    /// Target vector does not match the output layer.
    #[error("target has {actual} values but the output layer has {expected} neurons")]
    TargetShape { expected: usize, actual: usize },

    #[error("got {inputs} input samples but {outputs} target samples")]
    SampleCount { inputs: usize, outputs: usize },

    #[error("dataset is empty")]
    EmptyDataset,

    /// A non-input neuron has no weights; `init` was never called.
    #[error("uninitialized network: neuron {neuron} in layer {layer} has no weights (call init first)")]
    Uninitialized { layer: usize, neuron: usize },

    #[error("neuron {neuron} in layer {layer} has {actual} weights, expected {expected}")]
    WeightShape {
        layer: usize,
        neuron: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("could not parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not read configuration: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
