//! Booth multiplier simulator CLI.
//!
//! This binary provides a single entry point for all simulation modes. It performs:
//! 1. **Single run:** Multiply one operand pair and write the 34-line trace.
//! 2. **Session run:** Execute a whole driver scenario (built-in or JSON) with
//!    continuous cycle numbering and optional statistics.

use clap::{Parser, Subcommand, ValueEnum};
use std::fs::{self, File};
use std::io::{self, Write};
use std::process;

use booth_core::config::ScenarioConfig;
use booth_core::core::BoothMultiplier;
use booth_core::sim::Session;
use booth_core::trace::WriterSink;

#[derive(Parser, Debug)]
#[command(
    name = "boothsim",
    version,
    about = "Cycle-accurate Booth radix-2 multiplier simulator",
    long_about = "Multiply one signed 32-bit pair, or run a whole driver session.\n\nTraces go to stdout unless -o/--output names a file.\n\nExamples:\n  boothsim run -m -8 -c -2\n  boothsim run -m 5 -c 4 -o booth_trace.txt\n  boothsim session --builtin swsim2 -o booth_trace_swsim2.txt --stats\n  boothsim session --scenario scenario.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Multiply one signed 32-bit pair, cycle counter starting at 0.
    Run {
        /// Multiplier (loaded into the low half of the product register).
        #[arg(short, long, allow_hyphen_values = true)]
        multiplier: i32,

        /// Multiplicand (added or subtracted per Booth recoding).
        #[arg(short = 'c', long, allow_hyphen_values = true)]
        multiplicand: i32,

        /// Trace output file (stdout when omitted).
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run a driver session: header line, then runs with continuous cycles.
    Session {
        /// Built-in scenario to run.
        #[arg(long, value_enum, default_value_t = Builtin::Swsim1, conflicts_with = "scenario")]
        builtin: Builtin,

        /// JSON scenario file (header, start_cycle, pairs).
        #[arg(long)]
        scenario: Option<String>,

        /// Trace output file (stdout when omitted).
        #[arg(short, long)]
        output: Option<String>,

        /// Print session statistics to stdout afterwards.
        #[arg(long)]
        stats: bool,
    },
}

/// Built-in scenarios mirroring the reference driver programs.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Builtin {
    /// Two runs: -8 * -2, then 5 * 4.
    Swsim1,
    /// Nine runs including the signed extremes.
    Swsim2,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            multiplier,
            multiplicand,
            output,
        } => cmd_run(multiplier, multiplicand, output),
        Commands::Session {
            builtin,
            scenario,
            output,
            stats,
        } => cmd_session(builtin, scenario, output, stats),
    }
}

/// Opens the trace sink, exiting nonzero on failure before any trace output.
fn open_sink(path: Option<&str>) -> WriterSink<Box<dyn Write>> {
    match path {
        Some(p) => match File::create(p) {
            Ok(f) => WriterSink::new(Box::new(f)),
            Err(e) => {
                eprintln!("Failed to open {}: {}", p, e);
                process::exit(1);
            }
        },
        None => WriterSink::new(Box::new(io::stdout())),
    }
}

/// Runs a single multiplication with the cycle counter starting at 0.
fn cmd_run(multiplier: i32, multiplicand: i32, output: Option<String>) {
    let mut sink = open_sink(output.as_deref());
    let mut cycle = 0u64;

    if let Err(e) = BoothMultiplier::run(multiplier, multiplicand, &mut cycle, &mut sink) {
        eprintln!("Simulation failed: {}", e);
        process::exit(1);
    }
}

/// Runs a whole scenario: built-in unless a JSON file is given.
fn cmd_session(builtin: Builtin, scenario: Option<String>, output: Option<String>, stats: bool) {
    let config = match scenario {
        Some(path) => {
            let json = fs::read_to_string(&path).unwrap_or_else(|e| {
                eprintln!("Error reading scenario {}: {}", path, e);
                process::exit(1);
            });
            ScenarioConfig::from_json(&json).unwrap_or_else(|e| {
                eprintln!("Error parsing scenario {}: {}", path, e);
                process::exit(1);
            })
        }
        None => match builtin {
            Builtin::Swsim1 => ScenarioConfig::swsim1(),
            Builtin::Swsim2 => ScenarioConfig::swsim2(),
        },
    };

    let sink = open_sink(output.as_deref());
    let mut session = match Session::open(sink, &config.header, config.start_cycle) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to open session: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = session.run_all(&config.pairs) {
        eprintln!("Simulation failed: {}", e);
        process::exit(1);
    }

    if stats {
        session.stats().print();
    }
}
