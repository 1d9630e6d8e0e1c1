// Forward propagation properties over randomly initialized networks.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use hnet::{init_with_rng, Activation, Neuron, Topology};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn seeded(sizes: &[usize], seed: u64) -> Topology {
    let mut topology = Topology::new(sizes).unwrap();
    init_with_rng(&mut topology, &mut StdRng::seed_from_u64(seed));
    topology
}

#[test]
fn output_length_matches_last_layer() {
    for (seed, sizes) in [vec![1, 1], vec![3, 5, 2], vec![4, 3, 3, 6], vec![2, 8, 8, 8, 1]]
        .iter()
        .enumerate()
    {
        let mut topology = seeded(sizes, seed as u64);
        let inputs = vec![0.5; sizes[0]];
        let output = topology.feed_forward(&inputs, &Activation::Tanh).unwrap();
        assert_eq!(output.len(), *sizes.last().unwrap());
    }
}

#[test]
fn net_input_is_bias_plus_dot_product() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut topology = seeded(&[4, 6, 3, 2], 21);
    let inputs: Vec<f64> = (0..4).map(|_| rng.gen_range(-2.0..2.0)).collect();

    topology.feed_forward(&inputs, &Activation::Sigmoid).unwrap();

    let layers = topology.layers();
    for layer in 1..layers.len() {
        for neuron in &layers[layer] {
            let dot: f64 = neuron.weights.iter().zip(&layers[layer - 1])
                .map(|(w, p)| w * p.value)
                .sum();
            assert_abs_diff_eq!(neuron.net_input, neuron.bias + dot, epsilon = 1e-9);
            assert_abs_diff_eq!(
                neuron.value,
                Activation::Sigmoid.function(neuron.net_input),
                epsilon = 1e-12
            );
        }
    }
}

#[test]
fn inference_is_deterministic() {
    let mut topology = seeded(&[3, 4, 2], 8);
    let first = topology.feed_forward(&[0.1, -0.4, 0.9], &Activation::Relu).unwrap();
    let second = topology.feed_forward(&[0.1, -0.4, 0.9], &Activation::Relu).unwrap();
    assert_eq!(first, second);
}

#[test]
fn hand_wired_linear_network() {
    let ones = |n: usize| Neuron::with_weights(vec![1.0; n], 0.0);
    let mut topology = Topology::from_layers(vec![
        vec![Neuron::new(), Neuron::new()],
        vec![ones(2), ones(2)],
        vec![ones(2)],
    ]).unwrap();

    let output = topology.feed_forward(&[1.0, 2.0], &Activation::Linear).unwrap();

    assert_eq!(topology.neuron(1, 0).unwrap().value, 3.0);
    assert_eq!(topology.neuron(1, 1).unwrap().value, 3.0);
    assert_eq!(output, vec![6.0]);
}

#[test]
fn single_neuron_sigmoid() {
    let mut topology = Topology::from_layers(vec![
        vec![Neuron::new()],
        vec![Neuron::with_weights(vec![0.5], 0.0)],
    ]).unwrap();
    let output = topology.predict(&[2.0], &Activation::Sigmoid).unwrap();
    assert_relative_eq!(output[0], 0.7310586, epsilon = 1e-7);
}
