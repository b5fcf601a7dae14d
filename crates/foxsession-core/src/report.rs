//! Human-readable session summary
//!
//! One block per window:
//!
//! ```text
//! === Window 0 ===
//! Groups: [ ...pretty JSON, cut to a character budget... ]
//!
//! Tab 0: group="MISSING", url=https://example.com/
//! ... total 12 tabs
//! ```
//!
//! The profile listing is one `name (path)` line per profile, with
//! ` [default]` appended to the default one.

use serde_json::Value;
use std::io::Write;

use foxsession_session::{Session, Tab, Window};
use foxsession_storage::Profile;

use crate::config::ReportLimits;
use crate::Result;

const MISSING_GROUP: &str = "MISSING";

pub struct Reporter {
    limits: ReportLimits,
}

impl Reporter {
    pub fn new(limits: ReportLimits) -> Self {
        Self { limits }
    }

    /// Write every window in document order. Lines are written as they are
    /// produced, so output before a failing tab is kept.
    pub fn write_session<W: Write>(&self, session: &Session, out: &mut W) -> Result<()> {
        for (i, window) in session.windows.iter().enumerate() {
            self.write_window(i, window, out)?;
        }
        Ok(())
    }

    pub fn write_window<W: Write>(&self, index: usize, window: &Window, out: &mut W) -> Result<()> {
        writeln!(out, "=== Window {} ===", index)?;

        let groups = window.groups_pretty()?;
        writeln!(
            out,
            "Groups: {}",
            truncate_chars(&groups, self.limits.groups_chars)
        )?;
        writeln!(out)?;

        for (j, tab) in window.tabs.iter().take(self.limits.max_tabs).enumerate() {
            self.write_tab(j, tab, out)?;
        }

        writeln!(out, "... total {} tabs", window.tabs.len())?;
        out.flush()?;
        Ok(())
    }

    fn write_tab<W: Write>(&self, index: usize, tab: &Tab, out: &mut W) -> Result<()> {
        let url = tab.active_url()?;
        writeln!(
            out,
            "Tab {}: group={}, url={}",
            index,
            group_label(tab.group.as_ref()),
            truncate_chars(url, self.limits.url_chars)
        )?;
        Ok(())
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(ReportLimits::default())
    }
}

/// Write one line per profile
pub fn write_profiles<W: Write>(profiles: &[Profile], out: &mut W) -> Result<()> {
    for profile in profiles {
        let suffix = if profile.is_default { " [default]" } else { "" };
        writeln!(
            out,
            "{} ({}){}",
            profile.name,
            profile.path.display(),
            suffix
        )?;
    }
    out.flush()?;
    Ok(())
}

/// Quoted group id, or compact JSON for anything that is not a string
fn group_label(group: Option<&Value>) -> String {
    match group {
        None => format!("{:?}", MISSING_GROUP),
        Some(Value::String(id)) => format!("{:?}", id),
        Some(other) => other.to_string(),
    }
}

/// First `max` characters of `s`
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
