//! Truthtable - combinational circuit truth table generator
//!
//! Prints one line per input assignment: the input bits, a bar, then the
//! output bits.
//!
//! # Usage
//!
//! ```bash
//! truthtable circuits/full_adder.txt
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use truthtable_core::{
    circuit::{validate_circuit, Circuit},
    dsl,
    error::Result,
    table::print_table,
    Simulator, SimulatorConfig,
};

/// Combinational circuit truth table generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the circuit description file
    #[arg(value_name = "CIRCUIT_FILE")]
    circuit_file: PathBuf,

    /// Maximum evaluation passes per row (default: 4 x (gates + 1))
    #[arg(long, value_name = "N")]
    max_passes: Option<usize>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    // Only fails if a subscriber is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Parse the circuit file
    let ast = dsl::parse_file(&args.circuit_file)?;

    // Build the circuit
    let circuit = Circuit::from_ast(ast)?;

    // Validate
    validate_circuit(&circuit)?;

    let mut config = SimulatorConfig::new();
    if let Some(max_passes) = args.max_passes {
        config = config.with_max_passes(max_passes);
    }

    info!(
        file = %args.circuit_file.display(),
        inputs = circuit.num_inputs(),
        outputs = circuit.num_outputs(),
        gates = circuit.gates.len(),
        "generating truth table"
    );

    let mut simulator = Simulator::with_config(circuit, config);
    let rows = print_table(&mut simulator)?;

    info!(rows, "done");
    Ok(())
}
