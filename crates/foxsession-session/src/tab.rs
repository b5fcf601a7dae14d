//! Tab and history entry structures
//!
//! A tab keeps its navigation history in `entries`; `index` is the 1-based
//! position of the entry currently shown.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::SessionError;
use crate::Result;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tab {
    /// Navigation history, oldest first. Firefox may omit it or write `null`.
    #[serde(default)]
    pub entries: Option<Vec<Entry>>,
    /// 1-based index of the active entry
    #[serde(default)]
    pub index: Option<i64>,
    /// Group reference. `None` only when the key is absent; `null` is kept
    /// as `Some(Value::Null)`.
    #[serde(default, deserialize_with = "present")]
    pub group: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub url: Option<String>,
}

fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Tab {
    /// The entry the tab is showing.
    ///
    /// `Ok(None)` when the tab has no history at all. With a non-empty
    /// history the index must be present and within `1..=entries.len()`;
    /// anything else is an error rather than a guess.
    pub fn active_entry(&self) -> Result<Option<&Entry>> {
        let entries = match self.entries.as_deref() {
            Some(entries) if !entries.is_empty() => entries,
            _ => return Ok(None),
        };

        let index = self.index.ok_or(SessionError::MissingIndex {
            entries: entries.len(),
        })?;

        let position = usize::try_from(index)
            .ok()
            .and_then(|i| i.checked_sub(1))
            .filter(|&i| i < entries.len())
            .ok_or(SessionError::IndexOutOfRange {
                index,
                entries: entries.len(),
            })?;

        Ok(Some(&entries[position]))
    }

    /// URL of the active entry, empty when there is none
    pub fn active_url(&self) -> Result<&str> {
        Ok(self
            .active_entry()?
            .and_then(|entry| entry.url.as_deref())
            .unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tab(value: Value) -> Tab {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_active_entry_uses_one_based_index() {
        let tab = tab(json!({
            "entries": [{"url": "https://a.example/"}, {"url": "https://b.example/"}],
            "index": 2
        }));

        assert_eq!(tab.active_url().unwrap(), "https://b.example/");
    }

    #[test]
    fn test_no_entries_gives_placeholder() {
        for value in [
            json!({"entries": [], "index": 3}),
            json!({"entries": null, "index": 1}),
            json!({"index": 7}),
            json!({}),
        ] {
            let tab = tab(value);
            assert!(tab.active_entry().unwrap().is_none());
            assert_eq!(tab.active_url().unwrap(), "");
        }
    }

    #[test]
    fn test_entry_without_url() {
        let tab = tab(json!({"entries": [{"title": "New Tab"}], "index": 1}));
        assert_eq!(tab.active_entry().unwrap(), Some(&Entry::default()));
        assert_eq!(tab.active_url().unwrap(), "");
    }

    #[test]
    fn test_missing_index_rejected() {
        let tab = tab(json!({"entries": [{"url": "https://a.example/"}]}));
        assert!(matches!(
            tab.active_entry(),
            Err(SessionError::MissingIndex { entries: 1 })
        ));
    }

    #[test]
    fn test_index_out_of_range_rejected() {
        for index in [0, -1, 3] {
            let tab = tab(json!({
                "entries": [{"url": "https://a.example/"}, {"url": "https://b.example/"}],
                "index": index
            }));
            match tab.active_entry() {
                Err(SessionError::IndexOutOfRange {
                    index: got,
                    entries,
                }) => {
                    assert_eq!(got, index);
                    assert_eq!(entries, 2);
                }
                other => panic!("expected out of range for {}, got {:?}", index, other),
            }
        }
    }

    #[test]
    fn test_group_presence() {
        assert_eq!(tab(json!({})).group, None);
        assert_eq!(tab(json!({"group": null})).group, Some(Value::Null));
        assert_eq!(tab(json!({"group": "g1"})).group, Some(json!("g1")));
    }
}
