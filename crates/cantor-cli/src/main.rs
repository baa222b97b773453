//! Cantor CLI - Command-line interface for Cantor normal form encoding and verification.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

use commands::{coeff, digest, encode, eval, verify};

#[derive(Parser)]
#[command(name = "cantor")]
#[command(about = "Cantor normal form encoding, lookup and verification CLI")]
struct Cli {
    /// Fail instead of emitting more than N terms
    #[arg(long, global = true, env = "CANTOR_MAX_TERMS")]
    max_terms: Option<usize>,
    /// Refuse to evaluate values wider than N bits
    #[arg(long, global = true, env = "CANTOR_MAX_BITS", default_value_t = 1 << 20)]
    max_bits: u64,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the normal form of a value
    Encode {
        /// Base of the expansion
        base: String,
        /// Value to encode
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate a normal form written as `b^e*c + ...`
    Eval {
        /// Base of the expansion
        base: String,
        /// Terms, leading term first (`0` for the empty form)
        notation: String,
        /// Accept terms that are not in normal form
        #[arg(long)]
        lenient: bool,
    },
    /// Show coefficients of a value's normal form
    Coeff {
        /// Base of the expansion
        base: String,
        /// Value to encode
        value: String,
        /// Single exponent to look up (default: the whole support)
        exponent: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a JSON normal form document
    Verify {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Exit with error code if the document is invalid
        #[arg(long)]
        strict: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the content digest of a value's normal form
    Digest {
        /// Base of the expansion
        base: String,
        /// Value to encode
        value: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CANTOR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let max_terms = cli.max_terms;
    let max_bits = cli.max_bits;

    let result = match cli.command {
        Commands::Encode { base, value, json } => encode::run(base, value, json, max_terms),
        Commands::Eval {
            base,
            notation,
            lenient,
        } => eval::run(base, notation, lenient, max_bits),
        Commands::Coeff {
            base,
            value,
            exponent,
            json,
        } => coeff::run(base, value, exponent, json, max_terms),
        Commands::Verify {
            input,
            strict,
            json,
        } => verify::run(input, strict, json, max_bits),
        Commands::Digest { base, value } => digest::run(base, value, max_terms),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
