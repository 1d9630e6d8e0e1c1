use crate::activation::Activation;
use crate::error::{NetworkError, Result};
use crate::network::Topology;
use crate::optim::Sgd;
use crate::train::train_config::TrainConfig;

/// One epoch of online training: for each sample, forward pass, cost,
/// backward pass, then an immediate weight update.
///
/// Returns the mean cost over the samples, each measured before that
/// sample's own update.
pub fn backpropagate(
    topology: &mut Topology,
    inputs: &[Vec<f64>],
    outputs: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<f64> {
    check_dataset(topology, inputs, outputs)?;
    config.validate()?;
    run_epoch(topology, inputs, outputs, config, &Sgd::from_config(config))
}

/// Validates a whole dataset against the topology before anything is mutated.
pub(crate) fn check_dataset(
    topology: &Topology,
    inputs: &[Vec<f64>],
    outputs: &[Vec<f64>],
) -> Result<()> {
    if inputs.len() != outputs.len() {
        return Err(NetworkError::SampleCount {
            inputs: inputs.len(),
            outputs: outputs.len(),
        });
    }
    if inputs.is_empty() {
        return Err(NetworkError::EmptyDataset);
    }
    topology.check_wiring()?;
    for input in inputs {
        topology.check_input(input)?;
    }
    let expected = topology.output_size();
    if let Some(target) = outputs.iter().find(|t| t.len() != expected) {
        return Err(NetworkError::TargetShape { expected, actual: target.len() });
    }
    Ok(())
}

/// Unchecked epoch; `check_dataset` must have passed.
pub(crate) fn run_epoch(
    topology: &mut Topology,
    inputs: &[Vec<f64>],
    outputs: &[Vec<f64>],
    config: &TrainConfig,
    optimizer: &Sgd,
) -> Result<f64> {
    let mut total_cost = 0.0;

    for (input, target) in inputs.iter().zip(outputs.iter()) {
        topology.propagate(input, &config.activation);
        let predicted = topology.output_values();

        total_cost += config.cost.function(target, &predicted);

        let cost_grad = config.cost.derivative(target, &predicted);
        if cost_grad.len() != predicted.len() {
            return Err(NetworkError::InvalidConfig(format!(
                "cost derivative returned {} values for {} outputs",
                cost_grad.len(),
                predicted.len()
            )));
        }

        compute_deltas(topology, &cost_grad, &config.activation);
        optimizer.step(topology);
    }

    Ok(total_cost / inputs.len() as f64)
}

/// Backward pass: output deltas from the cost gradient, then each hidden
/// layer's deltas from the layer after it, down to (not including) layer 0.
fn compute_deltas(topology: &mut Topology, cost_grad: &[f64], activation: &Activation) {
    let last = topology.depth() - 1;
    let layers = topology.layers_mut();

    for (neuron, grad) in layers[last].iter_mut().zip(cost_grad) {
        neuron.delta = grad * activation.derivative(neuron.net_input);
    }

    for layer in (1..last).rev() {
        let (behind, ahead) = layers.split_at_mut(layer + 1);
        let next = &ahead[0];
        for (n, neuron) in behind[layer].iter_mut().enumerate() {
            // Error reaching `n` through the weight each downstream neuron gives it.
            let error: f64 = next.iter().map(|m| m.delta * m.weights[n]).sum();
            neuron.delta = error * activation.derivative(neuron.net_input);
        }
    }
}
