pub struct MseCost;

impl MseCost {
    /// Scalar MSE: mean((expected - predicted)²)
    pub fn function(expected: &[f64], predicted: &[f64]) -> f64 {
        let n = expected.len() as f64;
        expected.iter().zip(predicted.iter())
            .map(|(t, p)| (t - p).powi(2))
            .sum::<f64>() / n
    }

    /// Per-output gradient: 2·(predicted - expected) / n
    pub fn derivative(expected: &[f64], predicted: &[f64]) -> Vec<f64> {
        let n = expected.len() as f64;
        expected.iter().zip(predicted.iter())
            .map(|(t, p)| 2.0 * (p - t) / n)
            .collect()
    }
}
