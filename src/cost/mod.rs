pub mod mse;
pub mod mae;
pub mod cross_entropy;
pub mod cost_type;

pub use mse::MseCost;
pub use mae::MaeCost;
pub use cross_entropy::CrossEntropyCost;
pub use cost_type::{Cost, CustomCost};
