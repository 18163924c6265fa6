//! Cross-cutting infrastructure shared by every program binary

pub mod logging;

pub use logging::{init_logging, LogConfig, LogFormat, LogOutput};
