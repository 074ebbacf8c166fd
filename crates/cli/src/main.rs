//! Pipeline simulator CLI.
//!
//! This binary is the entry point for the simulator. It performs:
//! 1. **Input:** Reads an assembly-text program file and parses it into
//!    decoded instruction records.
//! 2. **Simulation:** Runs the five-stage pipeline to completion.
//! 3. **Output:** Prints the final register file and memory contents, and
//!    optionally the per-run statistics.

use clap::{Parser, Subcommand};
use std::{fs, process};

use mipsim_core::asm;
use mipsim_core::output;
use mipsim_core::{Pipeline, SimConfig};

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "Cycle-accurate five-stage MIPS-like pipeline simulator",
    long_about = "Run an assembly program through a cycle-accurate five-stage\n\
                  in-order pipeline and print the final architectural state.\n\n\
                  Examples:\n  \
                  mipsim run -f programs/hazard.asm\n  \
                  mipsim run -f programs/loop.asm --trace --stats"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an assembly program to completion.
    Run {
        /// Assembly program to execute.
        #[arg(short, long)]
        file: String,

        /// Emit one pipeline trace line per cycle to stderr.
        #[arg(long)]
        trace: bool,

        /// Print simulation statistics after the run.
        #[arg(long)]
        stats: bool,

        /// Data memory size in words (overrides the config file).
        #[arg(long)]
        mem_words: Option<usize>,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            trace,
            stats,
            mem_words,
            config,
        } => cmd_run(file, trace, stats, mem_words, config),
    }
}

/// Loads the configuration, honoring flag overrides.
fn load_config(path: Option<String>, trace: bool, mem_words: Option<usize>) -> SimConfig {
    let mut cfg = match path {
        Some(p) => {
            let text = fs::read_to_string(&p).unwrap_or_else(|e| {
                eprintln!("Error reading config {}: {}", p, e);
                process::exit(1);
            });
            serde_json::from_str(&text).unwrap_or_else(|e| {
                eprintln!("Error parsing config {}: {}", p, e);
                process::exit(1);
            })
        }
        None => SimConfig::default(),
    };
    if trace {
        cfg.trace = true;
    }
    if let Some(words) = mem_words {
        cfg.memory_words = words;
    }
    cfg
}

/// Parses the program, runs the pipeline to completion, and prints results.
///
/// Exits with code 1 if the file cannot be opened, contains zero
/// instructions, or the simulation faults.
fn cmd_run(
    file: String,
    trace: bool,
    stats: bool,
    mem_words: Option<usize>,
    config: Option<String>,
) {
    let cfg = load_config(config, trace, mem_words);

    let source = fs::read_to_string(&file).unwrap_or_else(|e| {
        eprintln!("Error: could not open {}: {}", file, e);
        process::exit(1);
    });

    let program = asm::parse_program(&source);
    if program.is_empty() {
        eprintln!("Error: no instructions found in {}", file);
        process::exit(1);
    }

    let mut sim = Pipeline::from_config(program, &cfg);
    if let Err(e) = sim.run() {
        eprintln!("\n[!] FATAL: {}", e);
        process::exit(1);
    }

    output::print_final_state(sim.regs(), sim.mem());
    println!("Total cycles: {}", sim.cycles());

    if stats {
        sim.stats().print();
    }
}
