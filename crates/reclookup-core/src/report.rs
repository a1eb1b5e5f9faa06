use std::sync::Mutex;

pub use tracing::Level;

/// Diagnostics sink handed to the loader, classifier and pipeline
pub trait Reporter: Send + Sync {
    fn log(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.log(Level::INFO, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::WARN, message);
    }

    fn debug(&self, message: &str) {
        self.log(Level::DEBUG, message);
    }
}

/// Forwards every event to the installed `tracing` subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn log(&self, level: Level, message: &str) {
        // tracing needs the level at compile time
        match level {
            Level::ERROR => tracing::error!("{message}"),
            Level::WARN => tracing::warn!("{message}"),
            Level::INFO => tracing::info!("{message}"),
            Level::DEBUG => tracing::debug!("{message}"),
            _ => tracing::trace!("{message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedEvent {
    pub level: Level,
    pub message: String,
}

/// Keeps every event in memory so callers can assert on them
#[derive(Debug, Default)]
pub struct CapturingReporter {
    events: Mutex<Vec<ReportedEvent>>,
}

impl CapturingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportedEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Messages logged at exactly `level`, in order
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e.level == level)
            .map(|e| e.message)
            .collect()
    }
}

impl Reporter for CapturingReporter {
    fn log(&self, level: Level, message: &str) {
        let event = ReportedEvent {
            level,
            message: message.to_string(),
        };
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}
