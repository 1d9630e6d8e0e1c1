pub mod activation;
pub mod cost;
pub mod engine;
pub mod error;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::Activation;
pub use cost::Cost;
pub use engine::Engine;
pub use error::{NetworkError, Result};
pub use network::{init, init_with_rng, Neuron, Topology};
pub use optim::Sgd;
pub use train::{
    backpropagate, calculate_error, train, ConfigOptions, EpochStats, Monitor, TrainConfig,
    TrainReport,
};
