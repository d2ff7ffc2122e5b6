//! Header generator binary.
//!
//! Writes either the renaming header or the prototype block for one vector
//! extension to stdout, depending on how many positional parameters are given.

use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use mkrename::{GenError, Generator, Invocation, FUNC_LIST};

/// Every token is positional, including `-` and anything that looks like a flag.
#[derive(Parser)]
#[command(name = "mkrename")]
#[command(about = "Generate SLEEF renaming headers and function prototypes")]
#[command(disable_help_flag = true)]
struct Cli {
    /// Positional parameters selecting the mode
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    params: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "mkrename".to_string());

    let invocation = match Invocation::from_params(&program, &cli.params) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = Generator::new(FUNC_LIST)
        .run(&invocation, &mut out)
        .and_then(|()| out.flush().map_err(GenError::from));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
