pub struct MaeCost;

impl MaeCost {
    /// Scalar MAE: mean(|expected - predicted|)
    pub fn function(expected: &[f64], predicted: &[f64]) -> f64 {
        let n = expected.len() as f64;
        expected.iter().zip(predicted.iter())
            .map(|(t, p)| (t - p).abs())
            .sum::<f64>() / n
    }

    /// Per-output step direction: 1 when predicted > expected, otherwise -1.
    /// Not scaled by n; ties count as -1.
    pub fn derivative(expected: &[f64], predicted: &[f64]) -> Vec<f64> {
        expected.iter().zip(predicted.iter())
            .map(|(t, p)| if p > t { 1.0 } else { -1.0 })
            .collect()
    }
}
