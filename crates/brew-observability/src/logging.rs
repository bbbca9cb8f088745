//! Structured logging with session context.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::session::SessionId;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Session ID for correlation.
    pub session_id: String,
    /// Component or tool emitting the line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Route path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] {}", self.level, self.message);

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

/// Entries captured by a [`LogSink::Memory`] sink.
#[derive(Debug, Clone, Default)]
pub struct MemoryLog(Arc<Mutex<Vec<LogEntry>>>);

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.0.lock().map(|entries| entries.clone()).unwrap_or_default()
    }

    fn push(&self, entry: LogEntry) {
        if let Ok(mut entries) = self.0.lock() {
            entries.push(entry);
        }
    }
}

/// Destination of formatted log lines.
#[derive(Clone, Default)]
pub enum LogSink {
    /// Write to stderr.
    #[default]
    Stderr,
    /// Hand each formatted line to a callback (e.g. the browser console).
    Console(Arc<dyn Fn(&str) + Send + Sync>),
    /// Keep entries in memory.
    Memory(MemoryLog),
}

impl LogSink {
    /// Sink that forwards formatted lines to `write`.
    pub fn console(write: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self::Console(Arc::new(write))
    }
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stderr => write!(f, "Stderr"),
            Self::Console(_) => write!(f, "Console"),
            Self::Memory(log) => f.debug_tuple("Memory").field(log).finish(),
        }
    }
}

/// Structured logger with session context.
///
/// Cheap to clone; clones share the sink.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    session_id: SessionId,
    component: Option<String>,
    route: Option<String>,
    min_level: LogLevel,
    format: LogFormat,
    sink: LogSink,
}

impl StructuredLogger {
    /// Create a new logger for a session.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            component: None,
            route: None,
            min_level: LogLevel::Info,
            format: LogFormat::Json,
            sink: LogSink::Stderr,
        }
    }

    /// Set the component name.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Set the route path.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the output sink.
    pub fn with_sink(mut self, sink: LogSink) -> Self {
        self.sink = sink;
        self
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, BTreeMap::new());
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    /// Log at warn level.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, BTreeMap::new());
    }

    /// Log at error level.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, BTreeMap::new());
    }

    /// Whether a line at `level` would be emitted.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        if !self.enabled(level) {
            return;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            session_id: self.session_id.to_string(),
            component: self.component.clone(),
            route: self.route.clone(),
            fields,
        };

        match &self.sink {
            LogSink::Stderr => eprintln!("{}", self.render(&entry)),
            LogSink::Console(write) => write(&self.render(&entry)),
            LogSink::Memory(log) => log.push(entry),
        }
    }

    fn render(&self, entry: &LogEntry) -> String {
        match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        }
    }

    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a warn log entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Start building an error log entry.
    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Error, message)
    }

    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an integer field.
    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}
