use tracing::Level;
use tracing_subscriber::EnvFilter;

/// The binary and the library it drives.
const FLORES_TARGETS: [&str; 2] = ["flores", "flores_solis"];

/// Level for a `-v` count: navigation changes are `debug`, quiet ticks `trace`.
const fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn directives(level: Level) -> String {
    FLORES_TARGETS
        .map(|target| format!("{target}={level}"))
        .join(",")
}

/// Sends log events to stderr so `--json` output on stdout stays clean.
/// A set `RUST_LOG` replaces the `-v` mapping entirely.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level_for(verbosity))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
