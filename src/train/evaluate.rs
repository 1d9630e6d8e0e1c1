use crate::error::Result;
use crate::network::Topology;
use crate::train::backprop::check_dataset;
use crate::train::train_config::TrainConfig;

/// Mean cost over a dataset. Weights and biases are not touched; neuron
/// `value`/`net_input` are overwritten by the forward passes.
pub fn calculate_error(
    topology: &mut Topology,
    inputs: &[Vec<f64>],
    expected_outputs: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<f64> {
    check_dataset(topology, inputs, expected_outputs)?;

    let mut total_cost = 0.0;
    for (input, expected) in inputs.iter().zip(expected_outputs.iter()) {
        topology.propagate(input, &config.activation);
        total_cost += config.cost.function(expected, &topology.output_values());
    }

    Ok(total_cost / inputs.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::Activation;
    use crate::cost::Cost;
    use crate::network::Neuron;
    use approx::assert_relative_eq;

    #[test]
    fn averages_cost_without_updating() {
        let mut topology = Topology::from_layers(vec![
            vec![Neuron::new()],
            vec![Neuron::with_weights(vec![2.0], 1.0)],
        ]).unwrap();
        let config = TrainConfig {
            activation: Activation::Linear,
            cost: Cost::Mae,
            ..TrainConfig::default()
        };
        // predictions 1, 3, 5 against 1, 4, 3
        let error = calculate_error(
            &mut topology,
            &[vec![0.0], vec![1.0], vec![2.0]],
            &[vec![1.0], vec![4.0], vec![3.0]],
            &config,
        ).unwrap();

        assert_relative_eq!(error, 1.0);
        let neuron = topology.neuron(1, 0).unwrap();
        assert_eq!(neuron.weights, vec![2.0]);
        assert_eq!(neuron.bias, 1.0);
        assert_eq!(neuron.value, 5.0);
    }
}
