//! Logging utilities.
//!
//! Centralizes logger initialization. Library code only depends on the `log`
//! facade; `env_logger` is installed once by the binary.

mod init;

pub use init::{init_logging, LoggingConfig};
