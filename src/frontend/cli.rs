use compy_runtime::logging::log_runtime_error;
use tracing::{error, info};

use crate::error::{Error, Result};
use crate::frontend::config::Config;
use crate::infrastructure::logging::init_logging;
use crate::programs::{ProgramKind, StdConsole};

/// Entry point shared by every program binary. Takes no arguments.
///
/// Returns the process exit code: 0 on success, 1 on any failure.
pub fn main(kind: ProgramKind) -> i32 {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let _guard = match config.logging.to_log_config() {
        Ok(log_config) => init_logging(log_config),
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    info!(program = kind.name(), "starting");

    match run(kind, &config) {
        Ok(()) => 0,
        Err(e) => {
            report_failure(kind, &e);
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Run a program against the process's stdio
pub fn run(kind: ProgramKind, config: &Config) -> Result<()> {
    let mut console = StdConsole::stdio();
    kind.run(&mut console, &config.programs)
}

fn report_failure(kind: ProgramKind, error: &Error) {
    match error {
        Error::Runtime(runtime) => log_runtime_error(runtime, kind.name()),
        other => error!(program = kind.name(), error = %other, "program failed"),
    }
}
