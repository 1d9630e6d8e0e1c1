use crate::activation::Activation;
use crate::error::{NetworkError, Result};
use crate::network::neuron::Neuron;

/// Ordered layers of neurons. Layer 0 is the input layer, the last layer is
/// the output layer. Neurons are addressed by (layer, position); a neuron's
/// `weights[i]` belongs to the connection from neuron `i` of the layer before.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    layers: Vec<Vec<Neuron>>,
}

impl Topology {
    /// Builds a topology of unwired neurons from layer sizes (input → output).
    pub fn new(sizes: &[usize]) -> Result<Topology> {
        Topology::from_layers(
            sizes.iter().map(|&size| vec![Neuron::new(); size]).collect()
        )
    }

    /// Wraps caller-built layers.
    pub fn from_layers(layers: Vec<Vec<Neuron>>) -> Result<Topology> {
        if layers.is_empty() {
            return Err(NetworkError::EmptyTopology);
        }
        if let Some(layer) = layers.iter().position(|l| l.is_empty()) {
            return Err(NetworkError::EmptyLayer { layer });
        }
        Ok(Topology { layers })
    }

    pub fn layers(&self) -> &[Vec<Neuron>] {
        &self.layers
    }

    pub(crate) fn layers_mut(&mut self) -> &mut [Vec<Neuron>] {
        &mut self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&[Neuron]> {
        self.layers.get(index).map(|l| l.as_slice())
    }

    pub fn neuron(&self, layer: usize, index: usize) -> Option<&Neuron> {
        self.layers.get(layer)?.get(index)
    }

    pub fn neuron_mut(&mut self, layer: usize, index: usize) -> Option<&mut Neuron> {
        self.layers.get_mut(layer)?.get_mut(index)
    }

    /// Number of layers, input layer included.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    pub fn input_size(&self) -> usize {
        self.layers[0].len()
    }

    pub fn output_size(&self) -> usize {
        self.layers[self.layers.len() - 1].len()
    }

    /// `value` of every output neuron, in order.
    pub fn output_values(&self) -> Vec<f64> {
        self.layers[self.layers.len() - 1].iter().map(|n| n.value).collect()
    }

    /// True once every non-input neuron is wired to its previous layer.
    pub fn is_initialized(&self) -> bool {
        self.check_wiring().is_ok()
    }

    /// Checks that every non-input neuron carries one weight (and one weight
    /// change) per neuron of the previous layer.
    pub fn check_wiring(&self) -> Result<()> {
        for layer in 1..self.layers.len() {
            let expected = self.layers[layer - 1].len();
            for (neuron, n) in self.layers[layer].iter().enumerate() {
                if n.weights.is_empty() {
                    return Err(NetworkError::Uninitialized { layer, neuron });
                }
                let actual = if n.weights.len() != expected {
                    n.weights.len()
                } else if n.weight_changes.len() != expected {
                    n.weight_changes.len()
                } else {
                    continue;
                };
                return Err(NetworkError::WeightShape { layer, neuron, expected, actual });
            }
        }
        Ok(())
    }

    pub(crate) fn check_input(&self, inputs: &[f64]) -> Result<()> {
        if inputs.len() != self.input_size() {
            return Err(NetworkError::InputShape {
                expected: self.input_size(),
                actual: inputs.len(),
            });
        }
        Ok(())
    }

    /// Forward pass; stores `net_input` and `value` on every neuron for
    /// backprop and returns the output layer's values.
    pub fn feed_forward(&mut self, inputs: &[f64], activation: &Activation) -> Result<Vec<f64>> {
        self.check_input(inputs)?;
        self.check_wiring()?;
        self.propagate(inputs, activation);
        Ok(self.output_values())
    }

    /// Inference entry point; same as `feed_forward`.
    pub fn predict(&mut self, inputs: &[f64], activation: &Activation) -> Result<Vec<f64>> {
        self.feed_forward(inputs, activation)
    }

    /// Unchecked forward pass. Callers validate shapes first.
    pub(crate) fn propagate(&mut self, inputs: &[f64], activation: &Activation) {
        for (neuron, &x) in self.layers[0].iter_mut().zip(inputs) {
            neuron.value = x;
        }

        for layer in 1..self.layers.len() {
            let (behind, ahead) = self.layers.split_at_mut(layer);
            let previous = &behind[layer - 1];
            for neuron in ahead[0].iter_mut() {
                let net_input = neuron.bias + neuron.weights.iter().zip(previous)
                    .map(|(w, p)| w * p.value)
                    .sum::<f64>();
                neuron.net_input = net_input;
                neuron.value = activation.function(net_input);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn wired(weight: f64, bias: f64, sizes: &[usize]) -> Topology {
        let layers = sizes.iter().enumerate()
            .map(|(l, &size)| {
                if l == 0 {
                    vec![Neuron::new(); size]
                } else {
                    vec![Neuron::with_weights(vec![weight; sizes[l - 1]], bias); size]
                }
            })
            .collect();
        Topology::from_layers(layers).unwrap()
    }

    #[test]
    fn linear_two_layer_scenario() {
        let mut topology = wired(1.0, 0.0, &[2, 2, 1]);
        let output = topology.feed_forward(&[1.0, 2.0], &Activation::Linear).unwrap();

        let hidden: Vec<f64> = topology.layer(1).unwrap().iter().map(|n| n.value).collect();
        assert_eq!(hidden, vec![3.0, 3.0]);
        assert_eq!(output, vec![6.0]);
    }

    #[test]
    fn single_sigmoid_neuron() {
        let mut topology = wired(0.5, 0.0, &[1, 1]);
        let output = topology.feed_forward(&[2.0], &Activation::Sigmoid).unwrap();
        assert_relative_eq!(output[0], 0.7310585786300049, epsilon = 1e-9);
    }

    #[test]
    fn input_layer_holds_raw_values() {
        let mut topology = wired(0.1, 0.0, &[3, 1]);
        topology.feed_forward(&[4.0, -1.0, 0.5], &Activation::Relu).unwrap();
        let values: Vec<f64> = topology.layers()[0].iter().map(|n| n.value).collect();
        assert_eq!(values, vec![4.0, -1.0, 0.5]);
    }

    #[test]
    fn rejects_wrong_input_length() {
        let mut topology = wired(1.0, 0.0, &[2, 1]);
        let err = topology.feed_forward(&[1.0], &Activation::Linear).unwrap_err();
        assert!(matches!(err, NetworkError::InputShape { expected: 2, actual: 1 }));
    }

    #[test]
    fn rejects_uninitialized_network() {
        let mut topology = Topology::new(&[2, 3, 1]).unwrap();
        assert!(!topology.is_initialized());
        let err = topology.feed_forward(&[1.0, 1.0], &Activation::Sigmoid).unwrap_err();
        assert!(matches!(err, NetworkError::Uninitialized { layer: 1, neuron: 0 }));
    }

    #[test]
    fn rejects_miswired_neuron() {
        let mut topology = wired(1.0, 0.0, &[2, 2, 1]);
        topology.neuron_mut(2, 0).unwrap().weights.push(1.0);
        let err = topology.check_wiring().unwrap_err();
        assert!(matches!(
            err,
            NetworkError::WeightShape { layer: 2, neuron: 0, expected: 2, actual: 3 }
        ));
    }

    #[test]
    fn shape_accessors() {
        let topology = Topology::new(&[3, 5, 2]).unwrap();
        assert_eq!(topology.depth(), 3);
        assert_eq!(topology.input_size(), 3);
        assert_eq!(topology.output_size(), 2);
        assert_eq!(topology.layer(1).map(|l| l.len()), Some(5));
        assert!(topology.layer(3).is_none());
        assert!(topology.neuron(2, 2).is_none());
    }

    #[test]
    fn rejects_empty_shapes() {
        assert!(matches!(Topology::new(&[]), Err(NetworkError::EmptyTopology)));
        assert!(matches!(Topology::new(&[2, 0, 1]), Err(NetworkError::EmptyLayer { layer: 1 })));
    }

    #[test]
    fn input_only_topology_echoes_inputs() {
        let mut topology = Topology::new(&[2]).unwrap();
        let output = topology.feed_forward(&[0.3, 0.7], &Activation::Sigmoid).unwrap();
        assert_eq!(output, vec![0.3, 0.7]);
    }
}
