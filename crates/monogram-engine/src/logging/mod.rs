//! Logging utilities.
//!
//! This module centralizes logger initialization. Library code only talks to
//! the `log` facade; hosts that want output call [`init_logging`] once.

mod init;

pub use init::{LoggingConfig, init_logging};
