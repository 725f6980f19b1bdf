use findoutlie_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; falls back to stderr on its own.
    let sink = logging::init_logging();
    tracing::debug!("log sink: {:?}", sink);

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("findoutlie error: {:#}", err);
        std::process::exit(1);
    }
}
