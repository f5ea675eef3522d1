//! Logger bootstrap shared by the exporter binaries.

mod logger;
pub use logger::*;
