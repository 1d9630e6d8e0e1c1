use serde::{Serialize, Deserialize};
use std::str::FromStr;

use crate::cost::{CrossEntropyCost, MaeCost, MseCost};
use crate::error::NetworkError;

/// A caller-supplied cost. Both functions take `(expected, predicted)`;
/// `derivative` returns one partial per output neuron.
#[derive(Debug, Clone, Copy)]
pub struct CustomCost {
    pub function: fn(&[f64], &[f64]) -> f64,
    pub derivative: fn(&[f64], &[f64]) -> Vec<f64>,
}

/// Selects which cost function training and evaluation use.
///
/// - `Mse`: mean-squared error; pair with Linear or Sigmoid output.
/// - `CrossEntropy`: binary cross-entropy; pair with Sigmoid output.
/// - `Mae`: mean absolute error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cost {
    Mse,
    CrossEntropy,
    Mae,
    #[serde(skip)]
    Custom(CustomCost),
}

impl Cost {
    pub fn available() -> [Cost; 3] {
        [Cost::Mse, Cost::CrossEntropy, Cost::Mae]
    }

    pub fn custom(
        function: fn(&[f64], &[f64]) -> f64,
        derivative: fn(&[f64], &[f64]) -> Vec<f64>,
    ) -> Cost {
        Cost::Custom(CustomCost { function, derivative })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cost::Mse => "mse",
            Cost::CrossEntropy => "cross_entropy",
            Cost::Mae => "mae",
            Cost::Custom(_) => "custom",
        }
    }

    pub fn from_name(name: &str) -> Option<Cost> {
        Cost::available().into_iter().find(|c| c.name() == name)
    }

    /// Scalar cost for one sample.
    pub fn function(&self, expected: &[f64], predicted: &[f64]) -> f64 {
        match self {
            Cost::Mse => MseCost::function(expected, predicted),
            Cost::CrossEntropy => CrossEntropyCost::function(expected, predicted),
            Cost::Mae => MaeCost::function(expected, predicted),
            Cost::Custom(custom) => (custom.function)(expected, predicted),
        }
    }

    /// Gradient of the cost with respect to each predicted output.
    pub fn derivative(&self, expected: &[f64], predicted: &[f64]) -> Vec<f64> {
        match self {
            Cost::Mse => MseCost::derivative(expected, predicted),
            Cost::CrossEntropy => CrossEntropyCost::derivative(expected, predicted),
            Cost::Mae => MaeCost::derivative(expected, predicted),
            Cost::Custom(custom) => (custom.derivative)(expected, predicted),
        }
    }
}

impl Default for Cost {
    fn default() -> Self {
        Cost::CrossEntropy
    }
}

impl FromStr for Cost {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cost::from_name(s)
            .ok_or_else(|| NetworkError::InvalidConfig(format!("unknown cost `{s}`")))
    }
}
