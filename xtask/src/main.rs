use std::path::Path;
use std::process::{exit, Command};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the fare-split workspace",
    long_about = "A unified CLI for running demo quotes, benchmarks,\n\
                  and CI checks in the fare-split workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote a trip plan with the fare-split CLI
    Quote {
        /// Trip plan TOML file
        #[arg(long, default_value = DEMO_TRIP)]
        trip: String,
        /// Use the configured online services instead of offline lookups
        #[arg(long)]
        online: bool,
        /// Service configuration TOML file (online only)
        #[arg(long, default_value = DEMO_CONFIG)]
        config: String,
    },
    /// Run Criterion benchmarks
    Bench,
    /// Benchmark the stashed-away HEAD as a baseline, then the working tree against it
    BenchCompare,
    /// Run CI checks (fmt, clippy, tests, demo quote, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Quote the demo trip offline
    Demo,
    /// Run benchmarks
    Bench,
    /// Run check + demo + bench
    All,
}

const PACKAGES: [&str; 4] = ["fare_core", "fare_adapters", "fare_store", "fare_cli"];
const DEMO_TRIP: &str = "demos/trip.toml";
const DEMO_CONFIG: &str = "demos/fare.toml";
const BASELINE: &str = "main";

// ── argument builders ──────────────────────────────────────────────

fn bench_args(criterion_args: &[&str]) -> Vec<String> {
    let mut args: Vec<String> = ["bench", "-p", "fare_core", "--bench", "performance"]
        .map(String::from)
        .to_vec();
    if !criterion_args.is_empty() {
        args.push("--".into());
        args.extend(criterion_args.iter().map(|a| a.to_string()));
    }
    args
}

fn quote_args(trip: &str, online: bool, config: &str) -> Vec<String> {
    let mut args: Vec<String> = ["run", "-p", "fare_cli", "--", "quote", "--trip", trip]
        .map(String::from)
        .to_vec();
    if online {
        args.extend(["--config".to_string(), config.to_string()]);
    } else {
        args.push("--offline".into());
    }
    args
}

// ── process helpers ────────────────────────────────────────────────

fn banner(label: &str) {
    eprintln!("\n=== {label} ===");
}

/// Run `program` and report whether it succeeded. Failing to spawn counts as failure.
fn try_run<S: AsRef<str>>(program: &str, args: &[S]) -> Result<(), i32> {
    let args: Vec<&str> = args.iter().map(|a| a.as_ref()).collect();
    eprintln!("+ {program} {}", args.join(" "));
    match Command::new(program).args(&args).status() {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(status.code().unwrap_or(1)),
        Err(err) => {
            eprintln!("failed to execute {program}: {err}");
            Err(1)
        }
    }
}

/// Run `program`, exiting with its code on failure.
fn run<S: AsRef<str>>(program: &str, args: &[S]) {
    if let Err(code) = try_run(program, args) {
        exit(code);
    }
}

// ── tasks ──────────────────────────────────────────────────────────

fn ci_check() {
    banner("Check formatting");
    run("cargo", &["fmt", "--all", "--", "--check"]);

    banner("Clippy");
    run(
        "cargo",
        &["clippy", "--all-targets", "--all-features", "--", "-D", "warnings"],
    );

    for package in PACKAGES {
        banner(&format!("Test {package}"));
        run("cargo", &["test", "-p", package]);
    }
}

fn ci_demo() {
    banner(&format!("Quote {DEMO_TRIP} offline"));
    run("cargo", &quote_args(DEMO_TRIP, false, DEMO_CONFIG));
}

fn bench() {
    banner("Run benchmarks");
    run("cargo", &bench_args(&[]));
}

/// The stash is popped even when the baseline run fails, so local changes
/// are never left stranded.
fn bench_compare() {
    let criterion_dir = Path::new("target/criterion");
    if criterion_dir.exists() {
        banner("Clearing previous benchmark data");
        if let Err(err) = std::fs::remove_dir_all(criterion_dir) {
            eprintln!("failed to remove {}: {err}", criterion_dir.display());
            exit(1);
        }
    }

    banner("Stashing working tree");
    run("git", &["stash", "push", "-m", "xtask bench-compare"]);

    banner(&format!("Baseline '{BASELINE}' from HEAD"));
    let baseline = try_run("cargo", &bench_args(&["--save-baseline", BASELINE]));

    banner("Restoring working tree");
    run("git", &["stash", "pop"]);
    if let Err(code) = baseline {
        exit(code);
    }

    banner(&format!("Working tree against '{BASELINE}'"));
    run("cargo", &bench_args(&["--baseline", BASELINE]));
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Quote {
            trip,
            online,
            config,
        } => run("cargo", &quote_args(&trip, online, &config)),
        Commands::Bench => bench(),
        Commands::BenchCompare => bench_compare(),
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Demo => ci_demo(),
                CiJob::Bench => bench(),
                CiJob::All => {
                    ci_check();
                    ci_demo();
                    bench();
                }
            }
            eprintln!("\nCI job passed.");
        }
    }
}
