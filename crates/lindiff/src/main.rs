mod args;
mod config;
mod input;
mod render;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use lindiff_core::DiffEngine;

use args::{Args, Format};

/// Runs the comparison and returns whether the files matched
fn run(args: &Args) -> Result<bool> {
    let options = config::resolve(args)?;
    log::debug!("options: {:?}", options);

    let old = input::read_lines(&args.file_a)?;
    let new = input::read_lines(&args.file_b)?;

    let result = DiffEngine::from_options(options).diff_lines(&old, &new)?;

    let mut out = String::new();
    if args.stats_only {
        out.push_str(&render::stats(&result.stats()));
    } else {
        match args.format {
            Format::Simple => out.push_str(&render::simple(result.script(), args.show_equal)),
            Format::Unified => out.push_str(&render::unified(
                &result,
                &args.file_a.display().to_string(),
                &args.file_b.display().to_string(),
            )),
            Format::Json => out.push_str(&render::json(&result)?),
        }
        if args.format != Format::Json {
            if args.stats {
                out.push('\n');
                out.push_str(&render::stats(&result.stats()));
            }
            if args.ranges && !result.is_identical() {
                out.push('\n');
                out.push_str(&render::ranges(&result.change_ranges()));
            }
        }
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;

    Ok(result.is_identical())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("lindiff: {:#}", e);
            ExitCode::from(2)
        }
    }
}
