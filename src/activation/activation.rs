use serde::{Serialize, Deserialize};
use std::f64::consts::E;
use std::str::FromStr;

use crate::error::NetworkError;

/// A caller-supplied activation: the function and its derivative with
/// respect to the pre-activation input.
#[derive(Debug, Clone, Copy)]
pub struct CustomActivation {
    pub function: fn(f64) -> f64,
    pub derivative: fn(f64) -> f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    Relu,
    Sigmoid,
    Tanh,
    Linear,
    /// Not representable in a config file; set it in code.
    #[serde(skip)]
    Custom(CustomActivation),
}

impl Activation {
    /// Built-in entries, in registry order.
    pub fn available() -> [Activation; 4] {
        [Activation::Relu, Activation::Sigmoid, Activation::Tanh, Activation::Linear]
    }

    pub fn custom(function: fn(f64) -> f64, derivative: fn(f64) -> f64) -> Activation {
        Activation::Custom(CustomActivation { function, derivative })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Activation::Relu => "relu",
            Activation::Sigmoid => "sigmoid",
            Activation::Tanh => "tanh",
            Activation::Linear => "linear",
            Activation::Custom(_) => "custom",
        }
    }

    pub fn from_name(name: &str) -> Option<Activation> {
        Activation::available().into_iter().find(|a| a.name() == name)
    }

    pub fn function(&self, x: f64) -> f64 {
        match self {
            Activation::Relu => if x > 0.0 { x } else { 0.0 },
            Activation::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            Activation::Tanh => x.tanh(),
            Activation::Linear => x,
            Activation::Custom(custom) => (custom.function)(x),
        }
    }

    /// Local derivative evaluated at the pre-activation input `x`, not at the
    /// activated value stored on the neuron.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            Activation::Relu => if x > 0.0 { 1.0 } else { 0.0 },
            Activation::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
            Activation::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
            Activation::Linear => 1.0,
            Activation::Custom(custom) => (custom.derivative)(x),
        }
    }
}

impl Default for Activation {
    fn default() -> Self {
        Activation::Sigmoid
    }
}

impl FromStr for Activation {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Activation::from_name(s)
            .ok_or_else(|| NetworkError::InvalidConfig(format!("unknown activation `{s}`")))
    }
}
