//! Logging configuration.

use serde::{Deserialize, Serialize};

use crate::logging::{LogFormat, LogLevel, LogSink, StructuredLogger};
use crate::session::SessionId;

/// `[logging]` section of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level emitted.
    #[serde(default)]
    pub level: LogLevel,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Build a logger for a fresh session writing to `sink`.
    pub fn logger(&self, component: &str, sink: LogSink) -> StructuredLogger {
        StructuredLogger::new(SessionId::generate())
            .with_component(component)
            .with_min_level(self.level)
            .with_format(self.format)
            .with_sink(sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemoryLog;

    #[test]
    fn test_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn test_logger_applies_level() {
        let config = LoggingConfig {
            level: LogLevel::Warn,
            format: LogFormat::Human,
        };
        let log = MemoryLog::new();
        let logger = config.logger("brew", LogSink::Memory(log.clone()));

        logger.info("dropped");
        logger.warn("kept");

        let entries = log.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].component.as_deref(), Some("brew"));
    }

    #[test]
    fn test_deserialize() {
        let config: LoggingConfig =
            serde_json::from_str(r#"{"level":"debug","format":"human"}"#).unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.format, LogFormat::Human);
    }
}
