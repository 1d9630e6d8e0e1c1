use rand::Rng;
use tracing::trace;

use crate::network::network::Topology;

/// Wires every non-input neuron to the whole previous layer with weights and
/// bias drawn uniformly from [-1, 1], and clears the momentum accumulators.
/// Layer 0 is left untouched. Returns the same topology.
pub fn init(topology: &mut Topology) -> &mut Topology {
    init_with_rng(topology, &mut rand::thread_rng())
}

/// `init` with an explicit random source, e.g. a seeded `StdRng` in tests.
pub fn init_with_rng<'a, R: Rng>(topology: &'a mut Topology, rng: &mut R) -> &'a mut Topology {
    let sizes: Vec<usize> = topology.layers().iter().map(|l| l.len()).collect();

    for (layer, neurons) in topology.layers_mut().iter_mut().enumerate().skip(1) {
        let fan_in = sizes[layer - 1];
        trace!(layer, neurons = neurons.len(), fan_in, "initializing layer");
        for neuron in neurons.iter_mut() {
            neuron.bias = rng.gen_range(-1.0..=1.0);
            neuron.bias_change = 0.0;
            neuron.weights = (0..fan_in).map(|_| rng.gen_range(-1.0..=1.0)).collect();
            neuron.weight_changes = vec![0.0; fan_in];
        }
    }

    topology
}
