//! The gendata CLI tool

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use env_logger::{Builder, Target};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;

use gendata::Dataset;

#[derive(Parser)]
#[command(name = "gendata", author, version, about, long_about = None)]
struct Cli {
    #[arg(long, hide = true)]
    markdown_help: bool,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    /// Number of rows/columns of the square matrices.
    dim_size: Option<u32>,
}

#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let args = Cli::parse();

    let mut builder = Builder::new();
    builder
        .filter_level(args.log_level)
        .parse_default_env()
        // stdout carries the generated header, so logs go to stderr
        .target(Target::Stderr)
        .init();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return ExitCode::SUCCESS;
    }

    let Some(dim_size) = args.dim_size else {
        eprintln!("{}", Cli::command().render_usage());
        return ExitCode::FAILURE;
    };

    match generate(dim_size as usize) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn generate(dim_size: usize) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("generating a {dim_size}x{dim_size} matmul dataset");
    let mut rng = StdRng::from_entropy();
    let dataset = Dataset::generate(dim_size, &mut rng)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{dataset}")?;
    stdout.flush()?;
    Ok(())
}
