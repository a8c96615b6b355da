//! Batch runner: drive the solver over directories of compiled instances.

use std::path::PathBuf;
use std::process::ExitCode;

use tgr_core::{BatchDriver, SolverConfig};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = match parse_args(&args[1..]) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            eprintln!();
            print_usage(&args[0]);
            return ExitCode::FAILURE;
        }
    };

    match BatchDriver::new(config).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "batch run failed");
            ExitCode::FAILURE
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} <encoding.lp> <instance_dir>... [options]");
    eprintln!("\nOptions:");
    eprintln!("  --solver <bin>     Solver binary (default: clingo)");
    eprintln!("  --timeout <secs>   Per-instance timeout (default: 30)");
    eprintln!("  --out <path>       Result file (default: results.json)");
}

/// Build a `SolverConfig` from the arguments after the program name.
/// Every malformed argument is a hard error; the run never proceeds
/// with a config the user did not ask for.
fn parse_args(args: &[String]) -> Result<SolverConfig, String> {
    let Some(encoding) = args.first() else {
        return Err("Missing encoding file".to_string());
    };

    let mut config = SolverConfig {
        encoding: PathBuf::from(encoding),
        ..SolverConfig::default()
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--solver" => {
                let value = option_value(args, &mut i)?;
                config.solver_bin = Some(value.clone());
            }
            "--timeout" => {
                let value = option_value(args, &mut i)?;
                let secs = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid value for --timeout: {value:?}"))?;
                config.timeout_secs = Some(secs);
            }
            "--out" => {
                let value = option_value(args, &mut i)?;
                config.output_path = Some(PathBuf::from(value));
            }
            option if option.starts_with("--") => {
                return Err(format!("Unknown option: {option}"));
            }
            dir => config.instance_dirs.push(PathBuf::from(dir)),
        }
        i += 1;
    }

    if config.instance_dirs.is_empty() {
        return Err("No instance directories given".to_string());
    }
    Ok(config)
}

/// The value following an option flag; errors when the flag is last.
fn option_value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a String, String> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i).ok_or_else(|| format!("Missing value for {flag}"))
}
