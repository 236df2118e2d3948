//! Logger bootstrap for binaries embedding the scene engine.

mod init;

pub use init::{LoggingConfig, init_logging};
