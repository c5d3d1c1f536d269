use std::io::{BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use deepcode::timing::TimingGuard;

/// Print the fixed deep code transcript.
///
/// Set DEEPCODE_TIMING to report stage timings on stderr.
#[derive(Parser)]
#[command(name = "deepcode", version)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();
    deepcode::timing::init();

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = {
        let _total = TimingGuard::new("total");
        deepcode::run(&mut out)
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
