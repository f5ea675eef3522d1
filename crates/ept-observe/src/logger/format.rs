use std::{fmt, str::FromStr};

use crate::logger::error::LoggerError;

/// Output sink and encoding of log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerFormat {
    /// Human-readable lines on stdout.
    Text,
    /// One JSON object per record on stdout.
    Json,
    /// Native systemd journal fields (linux + `journald` feature only).
    Journald,
}

impl LoggerFormat {
    const NAMES: [(&'static str, LoggerFormat); 4] = [
        ("text", LoggerFormat::Text),
        ("json", LoggerFormat::Json),
        ("journald", LoggerFormat::Journald),
        ("journal", LoggerFormat::Journald),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoggerFormat::Text => "text",
            LoggerFormat::Json => "json",
            LoggerFormat::Journald => "journald",
        }
    }

    fn is_available(&self) -> bool {
        match self {
            LoggerFormat::Journald => cfg!(all(target_os = "linux", feature = "journald")),
            LoggerFormat::Text | LoggerFormat::Json => true,
        }
    }
}

impl FromStr for LoggerFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        let format = Self::NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
            .map(|(_, format)| *format)
            .ok_or_else(|| LoggerError::InvalidFormat(s.to_string()))?;

        if !format.is_available() {
            return Err(LoggerError::JournaldNotSupported);
        }
        Ok(format)
    }
}

impl fmt::Display for LoggerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
