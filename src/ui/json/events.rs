//! JSON documents printed by `--json`.
//!
//! Every command prints exactly one document: a `result` on success or an
//! `error` on failure.

use serde::Serialize;

/// Successful command output
#[derive(Debug, Clone, Serialize)]
pub struct ResultEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    pub data: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl<'a, T: Serialize> ResultEvent<'a, T> {
    pub fn new(command: &'a str, data: T) -> Self {
        Self {
            event: "result",
            command,
            data,
            warnings: Vec::new(),
        }
    }
}

/// Failed command output
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub event: &'static str,
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl ErrorEvent {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            code,
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_event_omits_empty_warnings() {
        let json = serde_json::to_value(ResultEvent::new("pen list", vec!["P001"])).unwrap();
        assert_eq!(json["event"], "result");
        assert_eq!(json["command"], "pen list");
        assert_eq!(json["data"][0], "P001");
        assert!(json.get("warnings").is_none());
    }

    #[test]
    fn error_event_serializes_help_when_present() {
        let event = ErrorEvent::new("corrupted", "farm data file corrupted").with_help("restore a backup");
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json["event"], "error");
        assert_eq!(json["code"], "corrupted");
        assert_eq!(json["help"], "restore a backup");
    }
}
