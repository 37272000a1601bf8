use branchly::flow::samples;
use branchly::prelude::*;
use clap::{Parser, Subcommand};
use itertools::Itertools;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Lay out, inspect and play branching guidance flows
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the hierarchical layout of a flow and print or save it
    Layout {
        /// Path to the flow JSON file (one flow or an array of flows)
        flow_path: String,
        /// Id of the flow to use; defaults to the first flow in the file
        #[arg(long)]
        flow: Option<String>,
        /// Write the laid-out flows to this path instead of printing positions
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        spacing: SpacingArgs,
    },
    /// Print the structure of a flow: rows, outcomes, orphans and dangling targets
    Inspect {
        flow_path: String,
        #[arg(long)]
        flow: Option<String>,
    },
    /// Walk through a flow interactively
    Play {
        flow_path: String,
        #[arg(long)]
        flow: Option<String>,
    },
    /// Write the built-in demo flows to a file
    Demo {
        #[arg(short, long, default_value = "demo_flows.json")]
        output: String,
    },
}

/// Layout overrides. Flags left out keep the engine's defaults.
#[derive(clap::Args, Debug)]
struct SpacingArgs {
    /// Horizontal distance between nodes on the same row [default: 300]
    #[arg(long)]
    horizontal_spacing: Option<f64>,
    /// Vertical distance between rows [default: 250]
    #[arg(long)]
    vertical_spacing: Option<f64>,
    /// X coordinate every row is centered about [default: 600]
    #[arg(long)]
    center_x: Option<f64>,
    /// Y coordinate of the start row [default: 100]
    #[arg(long)]
    base_offset: Option<f64>,
    /// Row used for nodes unreachable from the start [default: 99]
    #[arg(long)]
    orphan_level: Option<usize>,
}

impl SpacingArgs {
    fn to_config(&self) -> LayoutConfig {
        let defaults = LayoutConfig::default();
        LayoutConfig {
            horizontal_spacing: self.horizontal_spacing.unwrap_or(defaults.horizontal_spacing),
            vertical_spacing: self.vertical_spacing.unwrap_or(defaults.vertical_spacing),
            center_x: self.center_x.unwrap_or(defaults.center_x),
            base_offset: self.base_offset.unwrap_or(defaults.base_offset),
            orphan_level: self.orphan_level.unwrap_or(defaults.orphan_level),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Layout {
            flow_path,
            flow,
            output,
            spacing,
        } => run_layout(&flow_path, flow.as_deref(), output, spacing),
        Command::Inspect { flow_path, flow } => run_inspect(&flow_path, flow.as_deref()),
        Command::Play { flow_path, flow } => run_play(&flow_path, flow.as_deref()),
        Command::Demo { output } => run_demo(&output),
    }
}

fn load_document(path: &str) -> FlowDocument {
    FlowDocument::from_file(path).unwrap_or_else(|e| exit_with_error(&e.to_string()))
}

fn select_flow<'a>(document: &'a FlowDocument, id: Option<&str>) -> &'a Flow {
    document
        .find(id)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()))
}

fn run_layout(path: &str, flow_id: Option<&str>, output: Option<String>, spacing: SpacingArgs) {
    let document = load_document(path);
    let engine = LayoutEngine::new(spacing.to_config());

    if let Some(output) = output {
        let start = Instant::now();
        let selected: Vec<&Flow> = match flow_id {
            Some(_) => vec![select_flow(&document, flow_id)],
            None => document.flows().iter().collect(),
        };
        let laid_out: Vec<Flow> = selected
            .into_iter()
            .map(|flow| engine.layout(flow).apply(flow))
            .collect();
        let elapsed = start.elapsed();
        let json = branchly::flow::document::to_json_pretty(&laid_out)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        fs::write(&output, json).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to write layout to '{}': {}", output, e))
        });
        println!(
            "Laid out {} flow(s) in {:?} -> '{}'",
            laid_out.len(),
            elapsed,
            output
        );
        return;
    }

    let flow = select_flow(&document, flow_id);
    let layout = engine.layout(flow);
    println!("Layout of '{}' ({} nodes)", flow.title, layout.len());
    for node in &flow.nodes {
        if let (Some(pos), Some(level)) = (layout.position(&node.id), layout.level(&node.id)) {
            println!(
                "  {:<24} level {:>3}  x {:>8.1}  y {:>8.1}",
                node.id, level, pos.x, pos.y
            );
        }
    }
}

fn run_inspect(path: &str, flow_id: Option<&str>) {
    let document = load_document(path);
    let flow = select_flow(&document, flow_id);
    let layout = LayoutEngine::default().layout(flow);

    println!("Flow: {} ({})", flow.title, flow.id);
    if !flow.description.is_empty() {
        println!("  {}", flow.description);
    }
    match flow.start_node() {
        Some(start) => println!("Start: {} - {}", start.id, start.content.title),
        None => println!("Start: '{}' (not found in flow)", flow.start_node_id),
    }

    println!("\n--- Rows ---");
    for (level, members) in layout.levels().rows() {
        let tag = if Some(level) == layout.levels().orphan_level() {
            " (unreachable)"
        } else {
            ""
        };
        println!("  {:>3}{}: {}", level, tag, members.iter().join(", "));
    }

    println!("\n--- Outcomes ---");
    for node in flow.outcome_nodes() {
        println!("  {} - {}", node.id, node.content.title);
    }

    let dangling = flow.dangling_targets();
    if !dangling.is_empty() {
        println!("\n--- Dangling targets ---");
        for (option_id, target) in dangling {
            println!("  option {} -> {}", option_id, target);
        }
    }
    println!();
}

fn run_play(path: &str, flow_id: Option<&str>) {
    let document = load_document(path);
    let flow = select_flow(&document, flow_id).clone();
    let mut session = Session::new(Arc::new(flow));

    println!("--- {} ---", session.flow().title);
    loop {
        let Some(node) = session.current_node() else {
            println!("This flow has no content.");
            return;
        };
        println!("\n{}\n", node.content.title);
        if !node.content.body_text.is_empty() {
            println!("{}\n", node.content.body_text);
        }
        if let Some(image) = &node.content.image_url {
            println!("[image: {}]\n", image);
        }

        let options: Vec<FlowOption> = session.available_options().to_vec();
        for (i, opt) in options.iter().enumerate() {
            let marker = if opt.is_external_link { " (external)" } else { "" };
            println!("  {}: {}{}", i + 1, opt.label, marker);
        }
        if session.is_at_outcome() {
            println!("  -- end of guidance --");
        }
        let mut controls = vec!["r: start again", "q: quit"];
        if session.can_go_back() {
            controls.insert(0, "b: back");
        }
        println!("  [{}]", controls.join(", "));

        let Some(input) = prompt_for_input("Choose") else {
            break;
        };
        match input.as_str() {
            "q" => break,
            "b" => {
                session.back();
            }
            "r" => session.restart(),
            other => {
                let picked = other
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| options.get(i));
                match picked.map(|opt| session.choose(&opt.id)) {
                    Some(Choice::External { url }) => println!("-> Open {}", url),
                    Some(Choice::Advanced { .. }) => {}
                    Some(Choice::Ignored) => println!("That option leads nowhere."),
                    None => println!("Invalid choice."),
                }
            }
        }
    }

    println!("\n--- Path taken ---");
    println!("{}", session.transcript());
}

fn run_demo(output: &str) {
    let flows = samples::all();
    let json = branchly::flow::document::to_json_pretty(&flows)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    fs::write(output, json).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to write demo flows to '{}': {}", output, e))
    });
    println!("Wrote {} demo flows to '{}'", flows.len(), output);
}

/// Prompts the user and reads a trimmed line. Returns `None` once stdin is closed.
fn prompt_for_input(prompt_text: &str) -> Option<String> {
    let mut line = String::new();

    print!("> {}: ", prompt_text);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to flush stdout: {}", e));
    }
    match io::stdin().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(e) => exit_with_error(&format!("Failed to read line: {}", e)),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
