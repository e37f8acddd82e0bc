//! # terminal-core
//!
//! Ambient services shared by the terminal front end: environment-driven
//! configuration, structured logging, and the explicitly owned session
//! that replaces a global auth token and socket singleton.

pub mod config;
pub mod logging;
pub mod session;

pub use config::{AppConfig, ConfigError, ConfigSource, Environment};
pub use logging::{init_logging, LoggingConfig};
pub use session::{ConnectionState, ReconnectPolicy, SessionError, TerminalSession};
