pub mod backprop;
pub mod epoch_stats;
pub mod evaluate;
pub mod monitor;
pub mod train_config;
pub mod trainer;

pub use backprop::backpropagate;
pub use epoch_stats::EpochStats;
pub use evaluate::calculate_error;
pub use monitor::Monitor;
pub use train_config::{ConfigOptions, TrainConfig};
pub use trainer::{train, TrainReport};
