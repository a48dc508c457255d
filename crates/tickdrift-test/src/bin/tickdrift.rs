//! tickdrift runner
//!
//! Usage: `tickdrift [CONFIG.json] [--json] [--compare]`
//!
//! Runs one simulation, logs the deviation bound and skew summary, and
//! optionally prints the slot table as JSON on stdout.

use std::env;
use std::process::ExitCode;

use tickdrift_core::SimConfig;
use tickdrift_sim::{simulate_with, ProgressObserver, SkewSummary};
use tickdrift_test::{compare_strategies, HarnessError, HarnessResult};

struct Args {
    config_path: Option<String>,
    json: bool,
    compare: bool,
}

fn parse_args() -> HarnessResult<Args> {
    let mut args = Args {
        config_path: None,
        json: false,
        compare: false,
    };
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => args.json = true,
            "--compare" => args.compare = true,
            flag if flag.starts_with("--") => {
                return Err(HarnessError::Usage(format!("unknown flag {}", flag)));
            }
            path if args.config_path.is_none() => args.config_path = Some(path.to_string()),
            extra => {
                return Err(HarnessError::Usage(format!("unexpected argument {}", extra)));
            }
        }
    }
    Ok(args)
}

fn run() -> HarnessResult<()> {
    let args = parse_args()?;
    let config = match &args.config_path {
        Some(path) => SimConfig::from_file(path)?,
        None => SimConfig::default(),
    };

    if args.compare {
        let cmp = compare_strategies(&config)?;
        tracing::info!("{}", cmp.bound);
        tracing::info!(
            seed = cmp.seed,
            corrected_spread = cmp.corrected.final_spread,
            uncorrected_spread = cmp.uncorrected.final_spread,
            ratio = cmp.spread_ratio(),
            "correction effect"
        );
        return Ok(());
    }

    let mut progress = ProgressObserver::new();
    let report = simulate_with(&config, &mut progress)?;
    let summary = SkewSummary::from_state(&report.state);

    tracing::info!("{}", report.bound);
    tracing::info!(
        seed = report.seed,
        max_skew = summary.max_abs_skew,
        slot = summary.max_skew_slot,
        mean_skew = summary.mean_abs_skew,
        final_spread = summary.final_spread,
        within_bound = summary.within(report.bound.nominal_tick_count),
        "observed skew"
    );

    if args.json {
        println!("{}", report.state.to_json()?);
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tickdrift=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
