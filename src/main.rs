// src/main.rs

use clap::{CommandFactory, Parser};
use git_difftree_bench::cli::Args;
use git_difftree_bench::{engines, report};
use std::fs;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // clap sends help/version to stdout and usage errors to stderr.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };
    if args.url == "help" {
        // The original CLI surface accepts a literal "help" argument.
        let _ = Args::command().print_help();
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let entries = engines::select(args.engines.as_deref())?;
    fs::create_dir_all(args.output.join("repos"))?;

    // Fail fast: the first engine that errors stops the whole run.
    for entry in entries {
        let clone_dir = args.output.join("repos").join(entry.name);
        if clone_dir.exists() {
            // Every run is a cold pass; a leftover clone would defeat that.
            log::warn!("removing stale clone at {}", clone_dir.display());
            fs::remove_dir_all(&clone_dir)?;
        }

        let start = Instant::now();
        let result = (entry.run)(&args.url, &clone_dir)?;
        log::info!(
            "[{}] benchmarked {} commits in {:.2?}",
            entry.name,
            result.data.len(),
            start.elapsed()
        );

        let report_path = args.output.join(format!("{}.dat", entry.name));
        report::write(&result, &report_path)?;
        log::info!("[{}] report written to {}", entry.name, report_path.display());
    }

    Ok(())
}
