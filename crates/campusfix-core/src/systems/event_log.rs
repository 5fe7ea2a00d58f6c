//! Event log - timestamped, human-readable history of notable occurrences
//!
//! This is game state shown to the player, separate from process logging.
//! Every entry is also forwarded to the `log` facade.

use std::collections::VecDeque;
use std::fmt;

use campusfix_logic::time::SimTime;
use serde::{Deserialize, Serialize};

/// What kind of occurrence an entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogKind {
    /// A random incident was generated
    IncidentReported,
    /// Staff filed an incident through the manual form
    StaffReport,
    /// An incident crossed its overdue threshold
    Overdue,
    /// A repair was refused for lack of budget
    BudgetShortfall,
    /// Work began on an incident
    WorkStarted,
    /// Fast-response bonus awarded
    FastResponse,
    /// An incident was resolved
    Resolved,
    /// Free-form note appended by the presentation layer
    Note,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub time: SimTime,
    pub kind: LogKind,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.time, self.message)
    }
}

/// Append-only log, optionally capped to the most recent entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
    retention: Option<usize>,
    /// Entries ever appended, including ones dropped by the cap
    total: u64,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log that keeps at most `retention` of the newest entries, if set.
    pub fn with_retention(retention: Option<usize>) -> Self {
        Self {
            retention,
            ..Self::default()
        }
    }

    pub fn push(&mut self, time: SimTime, kind: LogKind, message: impl Into<String>) {
        let entry = LogEntry {
            time,
            kind,
            message: message.into(),
        };
        match kind {
            LogKind::Note => log::debug!("{}", entry),
            _ => log::info!("{}", entry),
        }

        self.entries.push_back(entry);
        self.total += 1;
        if let Some(cap) = self.retention {
            while self.entries.len() > cap {
                self.entries.pop_front();
            }
        }
    }

    /// Retained entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn of_kind(&self, kind: LogKind) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_appended(&self) -> u64 {
        self.total
    }
}
