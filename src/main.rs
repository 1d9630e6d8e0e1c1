// Trains a 2-4-1 network on XOR and prints its predictions.
// An optional JSON config (see `ConfigOptions`) can be given as the first argument:
//   cargo run -- config.json
use hnet::{ConfigOptions, Engine, Monitor, Topology};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let level = if std::env::var_os("HNET_DEBUG").is_some() { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut engine = Engine::new();
    if let Some(path) = std::env::args().nth(1) {
        info!("Loading configuration from {}", path);
        engine.configure(ConfigOptions::load_json(&path)?)?;
    }

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let outputs = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];

    let mut topology = Topology::new(&[2, 4, 1])?;
    engine.init(&mut topology);

    let monitor = Monitor::new(1000, |epoch, error, _| {
        info!("Epoch {epoch}: error = {error:.6}");
    })?;
    let report = engine.train(&mut topology, &inputs, &outputs, 10_000, Some(monitor))?;

    for (input, expected) in inputs.iter().zip(&outputs) {
        let output = engine.predict(&mut topology, input)?;
        println!("Input: {:?} -> Output: {:.4} (expected {})", input, output[0], expected[0]);
    }
    if let Some(error) = report.final_error() {
        println!("Final training error: {error:.6}");
    }

    Ok(())
}
