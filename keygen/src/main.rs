//! `bn254-keygen`: print the BN254 key record for a private scalar.

use std::process::ExitCode;

use bn254_curve::G2Layout;
use bn254_keygen::{KeyError, KeyRecord, KeyReport, SigningKey};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum LayoutArg {
    /// X.c0, X.c1, Y.c0, Y.c1
    RealFirst,
    /// X.c1, X.c0, Y.c1, Y.c0 (EIP-197)
    ImaginaryFirst,
}

impl From<LayoutArg> for G2Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::RealFirst => G2Layout::RealFirst,
            LayoutArg::ImaginaryFirst => G2Layout::ImaginaryFirst,
        }
    }
}

#[derive(Parser)]
#[command(name = "bn254-keygen")]
#[command(about = "Derive BN254 G1/G2 public keys from a private scalar", long_about = None)]
#[command(version)]
#[command(after_help = "Examples:\n  bn254-keygen 12345\n  bn254-keygen 0x1a2b3c4d5e6f")]
struct Cli {
    /// Private scalar, decimal or 0x-prefixed hex, with 0 < scalar < r
    scalar: String,

    /// Limb order of the G2 public key
    #[arg(long, value_enum, default_value_t = LayoutArg::RealFirst)]
    g2_layout: LayoutArg,

    /// Print only the JSON key record
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<String, KeyError> {
    let pair = cli.scalar.parse::<SigningKey>()?.key_pair();
    let json = KeyRecord::new(&pair).to_json_pretty()?;
    if cli.json {
        return Ok(json);
    }
    let report = KeyReport::new(&pair, cli.g2_layout.into());
    Ok(format!("Generated BN254 Key:\n{json}\n\n{report}"))
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version are not failures
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_tracing();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Usage: bn254-keygen <SCALAR>  (see --help)");
            ExitCode::FAILURE
        }
    }
}
