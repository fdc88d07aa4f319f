use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use serde_json::{json, Value};
use tracing::warn;

/// How poll bodies are written to the device traffic log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLogMode {
    /// Every poll body in full.
    Full,
    /// Full body only when it differs from the previous poll.
    Changes,
}

pub(crate) struct MessageLogger {
    mode: MessageLogMode,
    file: File,
    previous_poll: Option<Value>,
}

impl MessageLogger {
    pub fn new(mode: MessageLogMode, path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            mode,
            file,
            previous_poll: None,
        })
    }

    pub fn log_request(&mut self, method: &str, path: &str) {
        let entry = json!({
            "ts": Utc::now().to_rfc3339(),
            "dir": "req",
            "method": method,
            "path": path,
        });
        self.write_line(&entry);
    }

    pub fn log_command(&mut self, action: &str, body: &Value) {
        let entry = json!({
            "ts": Utc::now().to_rfc3339(),
            "dir": "cmd",
            "action": action,
            "body": body,
        });
        self.write_line(&entry);
    }

    pub fn log_poll(&mut self, status: u16, body: &Value) {
        let unchanged = self.mode == MessageLogMode::Changes
            && self.previous_poll.as_ref() == Some(body);

        let entry = if unchanged {
            json!({
                "ts": Utc::now().to_rfc3339(),
                "dir": "poll",
                "status": status,
                "unchanged": true,
            })
        } else {
            json!({
                "ts": Utc::now().to_rfc3339(),
                "dir": "poll",
                "status": status,
                "body": body,
            })
        };
        self.write_line(&entry);
        self.previous_poll = Some(body.clone());
    }

    fn write_line(&mut self, entry: &Value) {
        if let Ok(line) = serde_json::to_string(entry)
            && let Err(e) = writeln!(self.file, "{line}")
        {
            warn!("failed to write log entry: {e}");
        }
    }
}
