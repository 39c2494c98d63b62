//! Binary entrypoint for the `genid` CLI.

use std::process::ExitCode;

use genid::Error;

fn main() -> ExitCode {
    // A missing .env file is fine; variables may come from the real environment.
    let _ = dotenvy::dotenv();
    genid::logging::setup_tracing();

    // Recording is handled in commands::dispatch via GENID_RECORD=<path>.
    match genid::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Usage(err)) => err.exit(),
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
