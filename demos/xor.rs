use hnet::{Activation, ConfigOptions, Cost, Engine, Monitor, Topology};

const INPUTS: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
const OUTPUTS: [f64; 4] = [0.0, 1.0, 1.0, 0.0];

fn softsign(x: f64) -> f64 {
    x / (1.0 + x.abs())
}

fn softsign_derivative(x: f64) -> f64 {
    1.0 / (1.0 + x.abs()).powi(2)
}

fn huber(expected: &[f64], predicted: &[f64]) -> f64 {
    let n = expected.len() as f64;
    expected.iter().zip(predicted)
        .map(|(t, p)| {
            let x = (t - p).abs();
            if x < 1.0 { 0.5 * x * x } else { x - 0.5 }
        })
        .sum::<f64>() / n
}

fn huber_derivative(expected: &[f64], predicted: &[f64]) -> Vec<f64> {
    expected.iter().zip(predicted)
        .map(|(t, p)| (p - t).clamp(-1.0, 1.0))
        .collect()
}

fn run(engine: &Engine, label: &str, epochs: usize) -> hnet::Result<()> {
    let inputs: Vec<Vec<f64>> = INPUTS.iter().map(|i| i.to_vec()).collect();
    let outputs: Vec<Vec<f64>> = OUTPUTS.iter().map(|&o| vec![o]).collect();

    let mut topology = Topology::new(&[2, 4, 1])?;
    engine.init(&mut topology);

    println!("\n{label}");
    let monitor = Monitor::new(1000, |epoch, error, _| {
        println!("Epoch {epoch}: error = {error:.6}");
    })?;
    engine.train(&mut topology, &inputs, &outputs, epochs, Some(monitor))?;

    for (input, expected) in inputs.iter().zip(&outputs) {
        let output = engine.predict(&mut topology, input)?;
        println!("Input: {:?} -> Output: {:.4} (expected {})", input, output[0], expected[0]);
    }
    Ok(())
}

fn main() -> hnet::Result<()> {
    let activations: Vec<&str> = Activation::available().iter().map(|a| a.name()).collect();
    let costs: Vec<&str> = Cost::available().iter().map(|c| c.name()).collect();
    println!("Available activations: {activations:?}");
    println!("Available costs: {costs:?}");

    let mut engine = Engine::new();
    engine.configure(
        ConfigOptions::new()
            .activation(Activation::Tanh)
            .cost(Cost::Mae)
            .learning_rate(0.05)
            .use_momentum(true)
            .momentum(0.9),
    )?;
    run(&engine, "tanh + mae, with momentum", 10_000)?;

    engine.configure(ConfigOptions::new().activation(Activation::Relu).cost(Cost::Mse))?;
    run(&engine, "relu + mse", 5_000)?;

    engine.configure(
        ConfigOptions::new()
            .activation(Activation::custom(softsign, softsign_derivative))
            .cost(Cost::custom(huber, huber_derivative))
            .learning_rate(0.02),
    )?;
    run(&engine, "softsign + huber (custom)", 5_000)?;

    Ok(())
}
