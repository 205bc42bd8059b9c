//! Command-line harness for the hypercomplex kernel and block codec.
//!
//! # Usage
//!
//! ```bash
//! hypercomplex bench --iterations 1000000
//! hypercomplex encrypt --seed 12345 "Hello, hypercomplex world!"
//! hypercomplex roundtrip --seed 12345 "Hello, hypercomplex world!"
//! ```
//!
//! Set `RUST_LOG=debug` for per-step detail.

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, error, info};

use hypercomplex::constants::bench::DEFAULT_ITERATIONS;
use hypercomplex::{codec, derive_key, perf, HcError};

#[derive(Parser)]
#[command(name = "hypercomplex")]
#[command(about = "Quaternion arithmetic kernel and demonstration block codec")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Time the quaternion multiplication kernel
    Bench {
        /// Number of multiplications to time
        #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: usize,
    },
    /// Encrypt a message and print the ciphertext as hex
    Encrypt {
        /// Key derivation seed
        #[arg(short, long)]
        seed: u64,
        /// Message to encrypt
        message: String,
    },
    /// Encrypt then decrypt a message and verify the result
    Roundtrip {
        /// Key derivation seed
        #[arg(short, long)]
        seed: u64,
        /// Message to round-trip
        message: String,
    },
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args.command) {
        error!("{} (code {})", e, e.code());
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), HcError> {
    match command {
        Command::Bench { iterations } => {
            info!("Benchmarking {} multiplications", iterations);
            let stats = perf::benchmark(iterations)?;
            info!("  ops/s:      {}", stats.operations_per_second);
            info!("  latency:    {:.3} ns", stats.average_latency_ns);
            info!("  bytes:      {}", stats.bytes_processed);
            info!("  throughput: {:.1} MiB/s", stats.throughput_mib_s());
        }
        Command::Encrypt { seed, message } => {
            let encoded = encrypt_hex(seed, message.as_bytes())?;
            info!(
                "Encrypted {} bytes into {} bytes",
                message.len(),
                encoded.len() / 2
            );
            println!("{}", encoded);
        }
        Command::Roundtrip { seed, message } => {
            let key = derive_key(seed)?;
            debug!("Derived key {}", key);
            let ciphertext = codec::encrypt_to_vec(message.as_bytes(), &key)?;
            let recovered = codec::decrypt_to_vec(&ciphertext, &key)?;
            if recovered != message.as_bytes() {
                return Err(HcError::InvalidData);
            }
            info!(
                "Round trip OK: {} bytes -> {} bytes -> {} bytes",
                message.len(),
                ciphertext.len(),
                recovered.len()
            );
        }
    }
    Ok(())
}

/// Encrypts `message` under the key derived from `seed`, hex-encoded.
fn encrypt_hex(seed: u64, message: &[u8]) -> Result<String, HcError> {
    let key = derive_key(seed)?;
    debug!("Derived key {}", key);
    let ciphertext = codec::encrypt_to_vec(message, &key)?;
    Ok(hex::encode(ciphertext))
}
