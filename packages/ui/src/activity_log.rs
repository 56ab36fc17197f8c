use dioxus::prelude::*;

/// Upper bound on retained entries; the oldest are dropped first.
pub const MAX_LOG_ENTRIES: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

/// Developer-facing record of fetches, exports and failures.
#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
}

impl ActivityLog {
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>) {
        if self.entries.len() >= MAX_LOG_ENTRIES {
            let excess = self.entries.len() + 1 - MAX_LOG_ENTRIES;
            self.entries.drain(..excess);
        }
        self.entries.push(LogEntry {
            timestamp: current_time(),
            level,
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.level == LogLevel::Error)
    }

    /// Matching entries, newest first.
    pub fn filtered(&self, filter: LogFilter) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev().filter(move |e| filter.matches(e.level))
    }

    pub fn count(&self, filter: LogFilter) -> usize {
        self.filtered(filter).count()
    }
}

/// Which entries the panel shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFilter {
    #[default]
    All,
    /// Warnings and errors: failed fetches, exports and deletes.
    Problems,
    /// Completed fetches, exports and deletes.
    Completed,
}

impl LogFilter {
    pub const ALL: [LogFilter; 3] = [LogFilter::All, LogFilter::Problems, LogFilter::Completed];

    pub fn label(self) -> &'static str {
        match self {
            LogFilter::All => "All",
            LogFilter::Problems => "Problems",
            LogFilter::Completed => "Completed",
        }
    }

    pub fn matches(self, level: LogLevel) -> bool {
        match self {
            LogFilter::All => true,
            LogFilter::Problems => matches!(level, LogLevel::Warning | LogLevel::Error),
            LogFilter::Completed => level == LogLevel::Success,
        }
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

/// Append to the in-app log and mirror the entry to `tracing`.
pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    match level {
        LogLevel::Error => tracing::error!("{message}"),
        LogLevel::Warning => tracing::warn!("{message}"),
        LogLevel::Info | LogLevel::Success => tracing::info!("{message}"),
    }
    log.write().push(level, message);
}

fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
