//! `bn254-diagnose`: report which curve a coordinate pair lies on and how it
//! relates to a reference base point.

use std::process::ExitCode;

use bn254_curve::{BaseField, BasePointConvention, CurveDiagnostics};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ConventionArg {
    /// Reference point (1, 2)
    Standard,
    /// Reference point (1, p - 2)
    BackendDefault,
}

impl From<ConventionArg> for BasePointConvention {
    fn from(arg: ConventionArg) -> Self {
        match arg {
            ConventionArg::Standard => BasePointConvention::StandardBasePoint,
            ConventionArg::BackendDefault => BasePointConvention::BackendDefaultBasePoint,
        }
    }
}

#[derive(Parser)]
#[command(name = "bn254-diagnose")]
#[command(about = "Classify a BN254 G1 coordinate pair", long_about = None)]
#[command(version)]
struct Cli {
    /// X coordinate, decimal or 0x-prefixed hex
    x: String,

    /// Y coordinate, decimal or 0x-prefixed hex
    y: String,

    /// Base point the pair is compared against
    #[arg(long, value_enum, default_value_t = ConventionArg::Standard)]
    convention: ConventionArg,

    /// Candidate b coefficients for y^2 = x^3 + b
    #[arg(long, value_delimiter = ',', default_values_t = [0u64, 1, 2, 3, 4, 5])]
    candidates: Vec<u64>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let (x, y) = match (cli.x.parse::<BaseField>(), cli.y.parse::<BaseField>()) {
        (Ok(x), Ok(y)) => (x, y),
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let diagnostics = CurveDiagnostics::new(cli.candidates, cli.convention.into());
    let diagnosis = diagnostics.diagnose(&x, &y);
    tracing::debug!(matches = diagnosis.matching_b.len(), "classified point");
    println!("{diagnosis}");
    ExitCode::SUCCESS
}
