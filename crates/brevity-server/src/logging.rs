use std::io::Write;
use std::time::Instant;

const SLOW_THRESHOLD_MS: u128 = 10_000;

/// Filter directives for the global logger. An explicit `level` (from
/// `--log-level` or `RUST_LOG`) wins over `debug`.
pub fn log_filter(debug: bool, level: Option<&str>) -> &str {
    match level.map(str::trim).filter(|l| !l.is_empty()) {
        Some(level) => level,
        None if debug => "debug",
        None => "info",
    }
}

/// Initialise the global logger with the service's line format:
/// `2024-05-01T12:00:00.123 INFO  brevity_server::handlers: message`.
pub fn init_logging(debug: bool, level: Option<&str>) {
    env_logger::Builder::new()
        .parse_filters(log_filter(debug, level))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Measures how long an operation takes and warns when it runs slow.
pub struct Timer {
    name: String,
    start: Instant,
}

impl Timer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.start.elapsed().as_millis()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let elapsed = self.elapsed_ms();
        if elapsed > SLOW_THRESHOLD_MS {
            log::warn!("{} took {}ms (slow!)", self.name, elapsed);
        } else {
            log::debug!("{} completed in {}ms", self.name, elapsed);
        }
    }
}
