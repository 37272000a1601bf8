use branchly::flow::{Flow, FlowBuilder, FlowOption, NodeBuilder};
use branchly::flow::document::to_json_pretty;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;

/// A CLI tool to generate random flows for exercising layout and playback
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flows.json")]
    output: String,

    /// Number of flows to generate
    #[arg(long, default_value_t = 1)]
    flows: usize,

    /// Number of nodes per flow
    #[arg(long, default_value_t = 50)]
    nodes: usize,

    /// Maximum number of options per node
    #[arg(long, default_value_t = 3)]
    max_options: usize,

    /// Probability that an option points back to an earlier node
    #[arg(long, default_value_t = 0.1)]
    cycle_rate: f64,

    /// Probability that an option is an external link
    #[arg(long, default_value_t = 0.05)]
    external_rate: f64,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.nodes == 0 {
        eprintln!("Error: --nodes must be at least 1");
        std::process::exit(1);
    }
    for (name, rate) in [("cycle-rate", cli.cycle_rate), ("external-rate", cli.external_rate)] {
        if !(0.0..=1.0).contains(&rate) {
            eprintln!("Error: --{} ({}) must be between 0 and 1", name, rate);
            std::process::exit(1);
        }
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!(
        "Generating {} flow(s) of {} nodes (up to {} options per node)...",
        cli.flows, cli.nodes, cli.max_options
    );

    let flows: Vec<Flow> = (0..cli.flows)
        .map(|i| generate_flow(&mut rng, i, &cli))
        .collect();

    fs::write(&cli.output, to_json_pretty(&flows)?)?;
    println!("Successfully generated and saved flows to '{}'", cli.output);

    Ok(())
}

/// Builds a flow whose forward edges only point at later nodes, then sprinkles in
/// back-edges and external links. Nodes never targeted stay orphans.
fn generate_flow(rng: &mut StdRng, index: usize, cli: &Cli) -> Flow {
    let id = format!("generated-{}", index + 1);
    let mut builder = FlowBuilder::new(&id, &format!("Generated flow {}", index + 1))
        .description("Randomly generated flow");

    for n in 0..cli.nodes {
        let node_id = format!("n{}", n);
        let option_count = if n + 1 == cli.nodes {
            0
        } else {
            rng.random_range(0..=cli.max_options)
        };
        let mut options = Vec::with_capacity(option_count);
        for o in 0..option_count {
            let option_id = format!("{}-opt-{}", node_id, o + 1);
            let label = format!("Choice {}", o + 1);
            let option = if rng.random_bool(cli.external_rate) {
                FlowOption::external(option_id, label, format!("https://example.com/{}", node_id))
            } else if n > 0 && rng.random_bool(cli.cycle_rate) {
                let target = format!("n{}", rng.random_range(0..n));
                FlowOption::internal(option_id, label, Some(target.as_str()))
            } else {
                let target = format!("n{}", rng.random_range(n + 1..cli.nodes));
                FlowOption::internal(option_id, label, Some(target.as_str()))
            };
            options.push(option);
        }

        let title = format!("Step {}", n);
        let configure = |mut node: NodeBuilder| {
            for option in options {
                node = node.with_option(option);
            }
            node
        };
        builder = if option_count > 1 {
            builder.decision(&node_id, &title, configure)
        } else {
            builder.information(&node_id, &title, configure)
        };
    }

    builder.start("n0").build()
}
