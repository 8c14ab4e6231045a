use std::io;
use std::sync::atomic::AtomicBool;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use typodict::config::{Args, BuildArgs, Command};
use typodict::pipeline;

#[derive(Copy, Clone)]
enum ExitStatus {
    Success,
    ConfigError,
    RuntimeError,
}

impl ExitStatus {
    const fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::ConfigError => 1,
            Self::RuntimeError => 2,
        }
    }
}

fn run_build(args: BuildArgs) -> ExitStatus {
    let config = match args.resolve() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err}", "configuration error:".red().bold());
            return ExitStatus::ConfigError;
        }
    };

    // Best-effort: a second `build_global` call (e.g. under a test
    // harness that already initialized one) is a no-op failure we can
    // ignore, since the default global pool is already sized sensibly.
    let _ = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build_global();

    let cancel = AtomicBool::new(false);
    match pipeline::run(&config, &cancel) {
        Ok(summary) => {
            println!(
                "{} {} corrections, {} patterns, {} graveyarded, {} emitted.",
                "Build finished:".green().bold(),
                summary.corrections,
                summary.patterns,
                summary.graveyard,
                summary.emitted,
            );
            ExitStatus::Success
        }
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitStatus::RuntimeError
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let status = match args.command {
        Command::Build(build_args) => run_build(build_args),
        Command::GenerateCompletions { shell } => {
            let mut cmd = Args::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
            ExitStatus::Success
        }
    };

    std::process::exit(status.code());
}
