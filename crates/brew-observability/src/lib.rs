//! Structured logging for the Brew coffee storefront.
//!
//! This crate provides:
//! - `SessionId` - Identifier correlating the log lines of one browsing session
//! - `StructuredLogger` - Structured logging with session and route context
//! - `LogSink` - Where lines go: stderr, a console callback, or memory
//! - `LoggingConfig` - Level and format as read from configuration

mod config;
mod logging;
mod session;

pub use config::*;
pub use logging::*;
pub use session::*;
