use remotive_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable ({:#}); logging to stderr", err);
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("remotive-csv error: {:#}", err);
        std::process::exit(1);
    }
}
