//! Cache simulator CLI.
//!
//! This binary is the single entry point for trace-driven simulation runs. It performs:
//! 1. **Configuration:** Geometry from `-s`/`-E`/`-b` flags or a JSON config file.
//! 2. **Trace run:** Streams the trace file through the cache model.
//! 3. **Reporting:** Prints the canonical `hits:H misses:M evictions:E` summary,
//!    plus a detailed breakdown with `--verbose`.

use std::fs::File;
use std::io::BufReader;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cachesim_core::{SimConfig, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "csim",
    author,
    version,
    about = "Trace-driven set-associative LRU cache simulator",
    long_about = "Replay a Valgrind-style memory trace against a cache of configurable \
geometry and report aggregate hit, miss, and eviction counts.\n\nExamples:\n  \
csim -s 4 -E 1 -b 4 -t traces/yi.trace\n  csim --config cache.json -t traces/long.trace -v"
)]
struct Cli {
    /// Number of set-index bits (the cache has 2^s sets).
    #[arg(short = 's', long = "set-bits")]
    set_bits: Option<u32>,

    /// Associativity: number of lines per set.
    #[arg(short = 'E', long = "ways")]
    ways: Option<usize>,

    /// Number of block-offset bits.
    #[arg(short = 'b', long = "block-bits")]
    block_bits: Option<u32>,

    /// Trace file to replay.
    #[arg(short = 't', long = "trace")]
    trace: String,

    /// JSON configuration file; flags override individual fields.
    #[arg(long)]
    config: Option<String>,

    /// Print the detailed statistics block after the summary line.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = build_config(&cli);

    let mut sim = Simulator::new(&config).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    });

    let file = File::open(&cli.trace).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: could not open trace '{}': {}", cli.trace, e);
        process::exit(1);
    });

    let stats = sim.run(BufReader::new(file)).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    });

    println!("{stats}");
    if cli.verbose {
        stats.print();
    }
}

/// Builds the geometry from the config file (if any) with flag overrides.
///
/// Exits the process with an error message if the file cannot be read or parsed.
fn build_config(cli: &Cli) -> SimConfig {
    let mut config = cli.config.as_ref().map_or_else(SimConfig::default, |path| {
        let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("[!] FATAL: could not read config '{path}': {e}");
            process::exit(1);
        });
        serde_json::from_str(&text).unwrap_or_else(|e| {
            eprintln!("[!] FATAL: invalid config '{path}': {e}");
            process::exit(1);
        })
    });

    if let Some(s) = cli.set_bits {
        config.set_bits = s;
    }
    if let Some(ways) = cli.ways {
        config.ways = ways;
    }
    if let Some(b) = cli.block_bits {
        config.block_bits = b;
    }
    config
}
