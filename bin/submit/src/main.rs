//! Submit Binary
//!
//! Prints the `PYSPARK_SUBMIT_ARGS` assignment for the given packages and
//! jars, or runs a trailing command with it set in the child environment.
//!
//! ```text
//! submit --package org.postgresql:postgresql:42.2.5 --jar pg.jar --dir lib -- spark-submit job.py
//! ```
use clap::Parser;
use std::path::PathBuf;
use std::process::Command;

#[derive(Parser, Debug)]
#[command(about = "Build Spark submit arguments")]
struct Args {
    /// Maven coordinate, repeatable
    #[arg(long = "package", short = 'p')]
    packages: Vec<String>,
    /// Jar file name under --dir, repeatable
    #[arg(long = "jar", short = 'j')]
    jars: Vec<String>,
    /// Directory holding the local jars
    #[arg(long, default_value = ".")]
    dir: PathBuf,
    /// Command to run with the variable set
    #[arg(last = true)]
    command: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    nfl_core::log();
    let args = Args::parse();
    let submit = nfl_spark::build_submit_args(&args.packages, &args.jars, &args.dir);
    let Some((program, rest)) = args.command.split_first() else {
        println!("{}", submit);
        return Ok(());
    };
    let status = submit.apply(&mut Command::new(program)).args(rest).status()?;
    log::info!("{} exited with {}", program, status);
    std::process::exit(status.code().unwrap_or(1));
}
