use clap::Parser;
use ginger_driver::{Driver, DriverOptions};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// ginger ninja build file generator
#[derive(Parser, Debug)]
#[command(name = "ginger")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input ginger file
    #[arg(short = 'i', value_name = "FILE", default_value = "build.ginger")]
    input: PathBuf,

    /// Output ninja file
    #[arg(short = 'o', value_name = "FILE", default_value = "build.ninja")]
    output: PathBuf,

    /// Print the ninja file to stdout instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging and detailed error reports
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(?cli, "starting");

    let driver = Driver::new(DriverOptions {
        description: cli.input,
        output: cli.output,
        ..DriverOptions::default()
    });

    let result = if cli.dry_run {
        driver.render().map(|ninja| print!("{}", ninja))
    } else {
        driver.run().map(|_| ())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if cli.verbose {
                eprintln!("{:?}", miette::Report::new(err));
            } else {
                eprintln!("{}", err);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("warn,ginger=debug,ginger_build=debug,ginger_ninja=debug,ginger_driver=debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}
