//! Event logging for emitted launch requests.
//!
//! Append-only NDJSON log (one JSON object per line) recording each emitted
//! launch request, for audit of what the scheduler handed to the transport.
//!
//! # Event Format
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: the action performed (currently only `emit`)
//! - `actor`: the owner string (e.g., `user@HOST`)
//! - `details`: freeform object with action-specific details
//!
//! Logging is best-effort: callers print a warning on failure rather than
//! failing the emit itself.

use crate::error::{Result, SparkError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// A launch request was emitted.
    Emit,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Emit => write!(f, "emit"),
        }
    }
}

/// An event record for the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// The actor who performed the action (e.g., `user@HOST`).
    pub actor: String,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event with the given action.
    ///
    /// The timestamp is set to the current time, and the actor is
    /// determined from the environment (USER@HOSTNAME).
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| SparkError::UserError(format!("failed to serialize event to JSON: {}", e)))
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the events log at `path`.
///
/// The file is created if it doesn't exist. Each append results in one line
/// with a trailing newline.
pub fn append_event<P: AsRef<Path>>(path: P, event: &Event) -> Result<()> {
    let path = path.as_ref();
    let json_line = event.to_ndjson_line()?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            SparkError::UserError(format!(
                "failed to open events log '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        SparkError::UserError(format!(
            "failed to write to events log '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn event_serializes_to_single_line() {
        let event = Event::new(EventAction::Emit).with_details(json!({"location": "hello.world"}));
        let line = event.to_ndjson_line().unwrap();

        assert!(!line.contains('\n'));
        assert!(line.contains("\"action\":\"emit\""));
        assert!(line.contains("hello.world"));
    }

    #[test]
    fn actor_has_user_at_host_shape() {
        let event = Event::new(EventAction::Emit);
        assert!(event.actor.contains('@'));
    }

    #[test]
    fn append_event_creates_and_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.ndjson");

        append_event(&path, &Event::new(EventAction::Emit)).unwrap();
        append_event(&path, &Event::new(EventAction::Emit)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let parsed: Event = serde_json::from_str(line).unwrap();
            assert_eq!(parsed.action, EventAction::Emit);
        }
    }

    #[test]
    fn event_action_display() {
        assert_eq!(EventAction::Emit.to_string(), "emit");
    }
}
