pub mod init;
pub mod network;
pub mod neuron;

pub use init::{init, init_with_rng};
pub use network::Topology;
pub use neuron::Neuron;
