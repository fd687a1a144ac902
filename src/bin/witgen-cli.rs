//! CLI tool for computing witnesses with the built-in circuit
//!
//! Reads a witness request (JSON mapping of input-signal names to values),
//! evaluates the voter-eligibility circuit, and writes the witness.
//!
//! # Examples
//!
//! Compute a witness from an input file:
//! ```bash
//! witgen-cli --inputs inputs.json
//! ```
//!
//! Write the witness to a file instead of stdout:
//! ```bash
//! witgen-cli --inputs inputs.json --output witness.json
//! ```
//!
//! Show the built-in circuit's layout:
//! ```bash
//! witgen-cli --info
//! ```

use std::fs;
use std::process;

use witgen_core::api::{compute_voter_eligibility, WitnessRequest};
use witgen_core::circuits;
use witgen_core::graph::SignalKind;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    // Engine diagnostics go to stderr, controlled by RUST_LOG (off by default).
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let mut inputs_file: Option<String> = None;
    let mut output_file: Option<String> = None;
    let mut show_info = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--inputs" | "-i" => {
                if i + 1 < args.len() {
                    inputs_file = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --inputs requires a value");
                    process::exit(1);
                }
            }
            "--output" | "-o" => {
                if i + 1 < args.len() {
                    output_file = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --output requires a value");
                    process::exit(1);
                }
            }
            "--info" => {
                show_info = true;
                i += 1;
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            "--version" | "-v" => {
                println!("witgen-cli {}", VERSION);
                process::exit(0);
            }
            _ => {
                eprintln!("Error: Unknown option '{}'", args[i]);
                print_usage();
                process::exit(1);
            }
        }
    }

    if show_info {
        print_circuit_info();
        process::exit(0);
    }

    let inputs_file = match inputs_file {
        Some(path) => path,
        None => {
            eprintln!("Error: --inputs is required");
            print_usage();
            process::exit(1);
        }
    };

    let request_json = match fs::read_to_string(&inputs_file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: Failed to read '{}': {}", inputs_file, e);
            process::exit(1);
        }
    };

    let request: WitnessRequest = match serde_json::from_str(&request_json) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: Invalid request JSON: {}", e);
            process::exit(1);
        }
    };

    let response = match compute_voter_eligibility(&request) {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let response_json = match serde_json::to_string_pretty(&response) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error: Failed to serialize response: {}", e);
            process::exit(1);
        }
    };

    match output_file {
        Some(path) => {
            if let Err(e) = fs::write(&path, response_json) {
                eprintln!("Error: Failed to write '{}': {}", path, e);
                process::exit(1);
            }
            println!("Witness written to {}", path);
        }
        None => println!("{}", response_json),
    }
}

/// Print the signal layout of the built-in circuit.
fn print_circuit_info() {
    let def = match circuits::circuit_def() {
        Ok(def) => def,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    println!("Circuit: {}", def.ty(def.main()).name());
    for ty in def.types() {
        println!();
        println!("Component type {} ({} slot(s)):", ty.name(), ty.block_size());
        for (name, slot) in ty.signals() {
            let dims: String = slot.dims.iter().map(|d| format!("[{}]", d)).collect();
            let role = match slot.kind {
                SignalKind::Input { public: true } => "input",
                SignalKind::Input { public: false } => "private input",
                SignalKind::Output => "output",
                SignalKind::Intermediate => "intermediate",
            };
            println!("  signal {:<14} {}{}  (offset {})", role, name, dims, slot.offset);
        }
        for (name, sub_type) in ty.subs() {
            println!("  component {} = {}()", name, sub_type);
        }
    }
}

fn print_usage() {
    println!("witgen-cli {} - witness calculator for the voter-eligibility circuit", VERSION);
    println!();
    println!("USAGE:");
    println!("    witgen-cli --inputs <FILE> [--output <FILE>]");
    println!("    witgen-cli --info");
    println!();
    println!("OPTIONS:");
    println!("    -i, --inputs <FILE>    JSON witness request (input signal values)");
    println!("    -o, --output <FILE>    Write the witness JSON to FILE instead of stdout");
    println!("        --info             Show the built-in circuit's signal layout");
    println!("    -h, --help             Show this help");
    println!("    -v, --version          Show version");
    println!();
    println!("INPUT FORMAT:");
    println!("    {{");
    println!("      \"inputs\": {{");
    println!("        \"regionHash\":   {{ \"value\": \"11\" }},");
    println!("        \"electionId\":   {{ \"value\": \"1\" }},");
    println!("        \"voterAddress\": {{ \"value\": \"0x2a\", \"encoding\": \"hex\" }},");
    println!("        \"region\":       {{ \"value\": \"3\" }},");
    println!("        \"isRegistered\": {{ \"value\": \"1\" }},");
    println!("        \"isEligible\":   {{ \"value\": \"1\" }}");
    println!("      }}");
    println!("    }}");
}
