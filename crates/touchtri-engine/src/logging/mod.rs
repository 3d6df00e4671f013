//! Logger setup.
//!
//! Library code only talks to the `log` facade; binaries call
//! [`init_logging`] once at startup to route it through `env_logger`.

mod init;

pub use init::{LoggingConfig, init_logging};
