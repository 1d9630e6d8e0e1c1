/// Binary cross-entropy summed over the output neurons, meant for a sigmoid
/// output layer.
pub struct CrossEntropyCost;

/// Predictions are clamped into [EPS, 1 - EPS] before taking logarithms.
pub const EPS: f64 = 1e-15;

impl CrossEntropyCost {
    /// L = -sum(t·log(p) + (1 - t)·log(1 - p)), with p clamped.
    ///
    /// The clamp works on a local copy; `predicted` is left as given.
    pub fn function(expected: &[f64], predicted: &[f64]) -> f64 {
        -expected.iter().zip(predicted.iter())
            .map(|(t, &p)| {
                let p = p.clamp(EPS, 1.0 - EPS);
                t * p.ln() + (1.0 - t) * (1.0 - p).ln()
            })
            .sum::<f64>()
    }

    /// Combined sigmoid + cross-entropy gradient: predicted - expected.
    ///
    /// With a sigmoid output the true ∂L/∂p is (p - t) / (p·(1 - p)); the
    /// trainer still multiplies by the activation derivative, so this form
    /// keeps the step bounded and points the same way.
    pub fn derivative(expected: &[f64], predicted: &[f64]) -> Vec<f64> {
        expected.iter().zip(predicted.iter())
            .map(|(t, p)| p - t)
            .collect()
    }
}
