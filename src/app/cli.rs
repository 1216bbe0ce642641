use std::env;
use std::io::{self, BufWriter, Stdout, Write};
use std::process;

use tracing::error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use super::error::AppError;

/// Output handles passed to the application's main function
pub struct Writers<W = BufWriter<Stdout>> {
    pub stdout: W,
}

/// Reusable CLI application runner that handles:
/// - Logging setup (stderr, `RUST_LOG` overrides the default level)
/// - Stdout buffering and flushing
/// - Exit codes (0 = success, 1 = error)
pub struct CliApp {
    name: String,
    default_level: LevelFilter,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            default_level: LevelFilter::INFO,
        }
    }

    /// Level used when `RUST_LOG` is unset or invalid
    pub fn with_default_level(mut self, level: LevelFilter) -> Self {
        self.default_level = level;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach the argument parser producing the main function's input
    pub fn with_args<A, P>(self, parse: P) -> CliRunner<P>
    where
        P: FnOnce(Vec<String>) -> Result<A, AppError>,
    {
        CliRunner { app: self, parse }
    }

    /// Install the global tracing subscriber; later calls are no-ops
    pub fn init_logging(&self) {
        let filter = EnvFilter::builder()
            .with_default_directive(self.default_level.into())
            .from_env_lossy();

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init();
    }
}

/// CLI application with its argument parser attached
pub struct CliRunner<P> {
    app: CliApp,
    parse: P,
}

impl<P> CliRunner<P> {
    /// Run with process arguments and buffered stdout, then exit
    ///
    /// This function never returns - it calls std::process::exit with the appropriate code
    pub fn run<A, F>(self, main_fn: F) -> !
    where
        P: FnOnce(Vec<String>) -> Result<A, AppError>,
        F: FnOnce(&mut Writers, A) -> Result<(), AppError>,
    {
        self.app.init_logging();
        let writers = Writers {
            stdout: BufWriter::new(io::stdout()),
        };
        let code = self.run_with(env::args().collect(), writers, main_fn);
        process::exit(code);
    }

    /// Parse `args`, run `main_fn`, flush, and return the exit code
    pub fn run_with<A, W, F>(self, args: Vec<String>, mut writers: Writers<W>, main_fn: F) -> i32
    where
        P: FnOnce(Vec<String>) -> Result<A, AppError>,
        W: Write,
        F: FnOnce(&mut Writers<W>, A) -> Result<(), AppError>,
    {
        let result = (self.parse)(args)
            .and_then(|input| main_fn(&mut writers, input))
            .and_then(|()| writers.stdout.flush().map_err(AppError::from));

        match result {
            Ok(()) => 0,
            Err(e) => {
                error!(app = %self.app.name, error = %e, "Run failed");
                eprintln!("Error: {}", e);
                1
            }
        }
    }
}
