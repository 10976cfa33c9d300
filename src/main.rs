use std::env;
use std::ffi::OsString;
use std::iter;

use clap::Parser;
use royalbit_predict::cli;
use royalbit_predict::error::ForecastError;
use royalbit_predict::types::ForecastRecord;
use tracing::error;

#[derive(Parser)]
#[command(name = "predict")]
#[command(about = "Project next-period revenue from current revenue and a growth rate")]
#[command(long_about = "Predict - single-period revenue forecast

USAGE:
  predict <current_revenue> <growth_rate>

  growth_rate is a decimal fraction (0.05 = 5%).

OUTPUT:
  Exactly one JSON line on stdout. The process always exits 0;
  check the 'status' field ('success' or 'error').

  {\"status\":\"success\",\"forecast\":1050.0,\"confidence\":\"92%\",\"current_revenue\":1000.0,\"growth_rate\":0.05}

Diagnostics go to stderr. Set RUST_LOG=debug to see them.")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Positional tokens: <current_revenue> <growth_rate>
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    args: Vec<OsString>,
}

/// Process argv with an end-of-options marker after the program name, so every
/// user token (a literal `--` included) lands in `args`.
fn positional_argv() -> impl Iterator<Item = OsString> {
    let mut argv = env::args_os();
    argv.next()
        .into_iter()
        .chain(iter::once(OsString::from("--")))
        .chain(argv)
}

fn init_tracing() {
    // stdout carries the result record only
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "royalbit_predict=warn,predict=warn".into()),
        )
        .init();
}

fn main() {
    init_tracing();

    let record = match Cli::try_parse_from(positional_argv()) {
        Ok(cli) => {
            // Undecodable bytes become U+FFFD and fail as an invalid number.
            let args: Vec<String> = cli
                .args
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect();
            cli::run(&args)
        }
        Err(e) => {
            error!(error = %e, "argument parsing failed");
            ForecastRecord::from(ForecastError::Unexpected(e.kind().to_string()))
        }
    };

    // Exit status stays 0 either way; callers branch on `status`.
    if let Err(e) = cli::emit(std::io::stdout().lock(), &record) {
        error!("{e:#}");
    }
}
