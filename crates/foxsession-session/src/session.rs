//! Session and window structures

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::tab::Tab;
use crate::Result;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Session {
    /// Open windows in document order
    #[serde(default)]
    pub windows: Vec<Window>,
    /// Snapshot bookkeeping written by Firefox
    #[serde(default)]
    pub session: Option<SessionMeta>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionMeta {
    /// Milliseconds since the Unix epoch
    #[serde(rename = "lastUpdate", default)]
    pub last_update: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Window {
    /// Tab group definitions, passed through untouched
    #[serde(default)]
    pub groups: Vec<Value>,
    #[serde(default)]
    pub tabs: Vec<Tab>,
}

impl Session {
    /// Parse decompressed session bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        let session: Session = serde_json::from_str(text)?;

        tracing::debug!(
            windows = session.windows.len(),
            tabs = session.tab_count(),
            "Parsed session document"
        );

        Ok(session)
    }

    /// When Firefox last wrote this snapshot, if recorded
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.session
            .as_ref()
            .and_then(|meta| meta.last_update)
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }

    /// Tabs across all windows
    pub fn tab_count(&self) -> usize {
        self.windows.iter().map(|w| w.tabs.len()).sum()
    }
}

impl Window {
    /// Groups as indented, ASCII-escaped JSON, the way they appear in the
    /// report
    pub fn groups_pretty(&self) -> Result<String> {
        Ok(crate::json::to_ascii_pretty(&self.groups)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Session {
        Session::from_slice(value.to_string().as_bytes()).unwrap()
    }

    #[test]
    fn test_parse_windows_in_order() {
        let session = parse(json!({
            "windows": [
                {"tabs": [{"entries": [{"url": "https://a.example/"}], "index": 1}]},
                {"tabs": [], "groups": [{"id": "g1"}]},
            ]
        }));

        assert_eq!(session.windows.len(), 2);
        assert_eq!(session.windows[0].tabs.len(), 1);
        assert!(session.windows[0].groups.is_empty());
        assert_eq!(session.windows[1].groups.len(), 1);
        assert_eq!(session.tab_count(), 1);
    }

    #[test]
    fn test_missing_windows_is_empty() {
        let session = parse(json!({"version": ["sessionrestore", 1]}));
        assert!(session.windows.is_empty());
        assert!(session.last_update().is_none());
    }

    #[test]
    fn test_last_update() {
        let session = parse(json!({"windows": [], "session": {"lastUpdate": 1707654321000i64}}));
        let when = session.last_update().unwrap();
        assert_eq!(when.timestamp_millis(), 1707654321000);
    }

    #[test]
    fn test_invalid_utf8() {
        let result = Session::from_slice(&[b'{', 0xFF, b'}']);
        assert!(matches!(result, Err(crate::SessionError::Utf8(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = Session::from_slice(br#"{"windows": ["#);
        assert!(matches!(result, Err(crate::SessionError::Json(_))));
    }

    #[test]
    fn test_groups_pretty_keeps_key_order() {
        let session = parse(json!({
            "windows": [{"groups": [{"name": "Work", "id": "g1", "color": "blue"}]}]
        }));
        let pretty = session.windows[0].groups_pretty().unwrap();

        let name = pretty.find("\"name\"").unwrap();
        let id = pretty.find("\"id\"").unwrap();
        assert!(name < id);
        assert!(pretty.starts_with("[\n  {\n    \"name\": \"Work\""));
    }

    #[test]
    fn test_groups_pretty_escapes_non_ascii() {
        let session = parse(json!({
            "windows": [{"groups": [{"name": "Überblick 🦊"}]}]
        }));
        let pretty = session.windows[0].groups_pretty().unwrap();

        assert_eq!(
            pretty,
            "[\n  {\n    \"name\": \"\\u00dcberblick \\ud83e\\udd8a\"\n  }\n]"
        );
        assert!(pretty.is_ascii());
    }

    #[test]
    fn test_empty_groups_pretty() {
        let window = Window::default();
        assert_eq!(window.groups_pretty().unwrap(), "[]");
    }
}
