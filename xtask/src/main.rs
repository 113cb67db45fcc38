use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the tailwatch workspace",
    long_about = "A unified CLI for launching the traffic monitor,\n\
                  running benchmarks, and running CI checks."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the traffic monitor GUI
    Ui,
    /// Run Criterion benchmarks
    Bench,
    /// Run CI checks (fmt, clippy, tests)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CiJob {
    /// Formatting check
    Fmt,
    /// Clippy with warnings denied
    Clippy,
    /// Workspace test suite
    Test,
    /// All of the above
    Check,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn ci(job: CiJob) {
    match job {
        CiJob::Fmt => {
            step("Check formatting");
            run_cargo(&["fmt", "--all", "--check"]);
        }
        CiJob::Clippy => {
            step("Clippy");
            run_cargo(&[
                "clippy",
                "--workspace",
                "--all-targets",
                "--",
                "-D",
                "warnings",
            ]);
        }
        CiJob::Test => {
            step("Tests");
            run_cargo(&["test", "--workspace"]);
        }
        CiJob::Check => {
            ci(CiJob::Fmt);
            ci(CiJob::Clippy);
            ci(CiJob::Test);
        }
    }
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ui => {
            run_cargo(&["run", "-p", "traffic_ui"]);
        }
        Commands::Bench => {
            run_cargo(&["bench", "--package", "traffic_core", "--bench", "tick"]);
        }
        Commands::Ci { job } => ci(job),
    }
}
