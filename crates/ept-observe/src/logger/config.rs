use std::io::IsTerminal;

use crate::logger::format::LoggerFormat;

/// Settings consumed by [`logger_init`](crate::logger_init).
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    /// `EnvFilter` directive, e.g. `info` or `ept_client=debug,info`.
    pub level: String,
    /// Print the event target (module path) next to each record.
    pub with_targets: bool,
    /// ANSI colors; only honored by the text format.
    pub use_color: bool,
}

impl LoggerConfig {
    /// Targets on; colors only when stdout is a terminal.
    pub fn new(format: LoggerFormat, level: impl Into<String>) -> Self {
        Self {
            format,
            level: level.into(),
            with_targets: true,
            use_color: std::io::stdout().is_terminal(),
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new(LoggerFormat::Text, "info")
    }
}
