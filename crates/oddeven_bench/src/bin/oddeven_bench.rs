//! # ODDEVEN Benchmark Runner
//!
//! Times the odd-even transposition sort over several list sizes and thread
//! counts and appends the results to a CSV log.
//!
//! ## Usage
//!
//! ```bash
//! oddeven_bench --sizes 50000,100000 --threads 1,2,4 --output results.csv
//! RUST_LOG=debug oddeven_bench --config bench.toml --reps 3
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use oddeven_bench::config::parse_list;
use oddeven_bench::report::size_report;
use oddeven_bench::{BenchConfig, BenchError, BenchResult, BenchmarkSuite, CsvRecorder};
use oddeven_core::Schedule;
use tracing_subscriber::EnvFilter;

/// Command-line overrides. Anything unset keeps the config/env value.
#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    sizes: Option<Vec<usize>>,
    threads: Option<Vec<usize>>,
    seed: Option<u64>,
    reps: Option<u32>,
    schedule: Option<Schedule>,
    help: bool,
}

fn print_help() {
    println!("Usage: oddeven_bench [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --config <FILE>        TOML config file");
    println!("  -o, --output <FILE>        Result CSV, appended to (default: results.csv)");
    println!("  -s, --sizes <LIST>         List sizes, e.g. 50000,100000,500000");
    println!("  -t, --threads <LIST>       Thread counts, e.g. 1,2,4");
    println!("      --seed <N>             Generator seed (default: clock)");
    println!("  -r, --reps <N>             Timed runs per measurement, median reported");
    println!("      --schedule <KIND>      static | dynamic:<chunk> | guided:<min_chunk>");
    println!("  -h, --help                 Show this help");
    println!();
    println!("Environment: ODDEVEN_SIZES, ODDEVEN_THREADS, ODDEVEN_SEED, ODDEVEN_REPS,");
    println!("             ODDEVEN_OUTPUT, RUST_LOG");
}

fn invalid(flag: &str, value: &str) -> BenchError {
    BenchError::InvalidConfig(format!("{flag}: bad value {value:?}"))
}

fn parse_args(args: &[String]) -> BenchResult<CliArgs> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter().skip(1);

    while let Some(flag) = iter.next() {
        if matches!(flag.as_str(), "--help" | "-h") {
            cli.help = true;
            continue;
        }

        let value = iter
            .next()
            .ok_or_else(|| BenchError::InvalidConfig(format!("{flag}: missing value")))?;

        match flag.as_str() {
            "--config" | "-c" => cli.config = Some(PathBuf::from(value)),
            "--output" | "-o" => cli.output = Some(PathBuf::from(value)),
            "--sizes" | "-s" => cli.sizes = Some(parse_list(value)?),
            "--threads" | "-t" => cli.threads = Some(parse_list(value)?),
            "--seed" => cli.seed = Some(value.parse().map_err(|_| invalid(flag, value))?),
            "--reps" | "-r" => cli.reps = Some(value.parse().map_err(|_| invalid(flag, value))?),
            "--schedule" => cli.schedule = Some(value.parse()?),
            _ => {
                return Err(BenchError::InvalidConfig(format!("unknown flag {flag:?}")));
            }
        }
    }

    Ok(cli)
}

fn build_config(cli: CliArgs) -> BenchResult<BenchConfig> {
    let mut config = match &cli.config {
        Some(path) => BenchConfig::load(path)?,
        None => BenchConfig::default(),
    };

    config.apply_env()?;

    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(sizes) = cli.sizes {
        config.sizes = sizes;
    }
    if let Some(threads) = cli.threads {
        config.threads = threads;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(reps) = cli.reps {
        config.repetitions = reps;
    }
    if let Some(schedule) = cli.schedule {
        config.schedule = schedule;
    }

    Ok(config)
}

fn run(config: BenchConfig) -> BenchResult<()> {
    let mut recorder = CsvRecorder::open(&config.output)?;
    let mut suite = BenchmarkSuite::new(config)?;

    println!("seed: {}", suite.seed());
    println!();

    suite.run_with(&mut recorder, |report| {
        println!("{}", size_report(report));
    })?;

    println!();
    println!("results appended to {}", recorder.path().display());
    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let result = parse_args(&args).and_then(|cli| {
        if cli.help {
            print_help();
            return Ok(None);
        }
        build_config(cli).map(Some)
    });

    let config = match result {
        Ok(Some(config)) => config,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "invalid arguments");
            return ExitCode::FAILURE;
        }
    };

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║         ODDEVEN - PARALLEL TRANSPOSITION SORT BENCHMARK          ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "benchmark failed");
            ExitCode::FAILURE
        }
    }
}
