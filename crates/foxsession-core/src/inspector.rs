//! Session file inspection pipeline

use std::io::Write;
use std::path::Path;

use foxsession_session::Session;
use foxsession_storage::read_session_file;

use crate::config::Config;
use crate::report::{write_profiles, Reporter};
use crate::Result;

/// Runs locate → read → decode → parse → report
pub struct Inspector {
    config: Config,
}

impl Inspector {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Locate the configured snapshot and parse it
    pub fn load(&self) -> Result<Session> {
        let path = self.config.session_path()?;
        Self::load_from(&path)
    }

    /// Read, decode and parse one snapshot file
    pub fn load_from(path: &Path) -> Result<Session> {
        let data = read_session_file(path)?;
        let decoded = foxsession_mozlz4::decode(&data)?;
        let session = Session::from_slice(&decoded)?;

        tracing::info!(
            path = %path.display(),
            windows = session.windows.len(),
            tabs = session.tab_count(),
            last_update = ?session.last_update(),
            "Loaded session"
        );

        Ok(session)
    }

    /// Load the snapshot and write the report to `out`
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let session = self.load()?;
        Reporter::new(self.config.limits).write_session(&session, out)
    }

    /// Write the usable profiles of the configured Firefox directory
    pub fn list_profiles<W: Write>(&self, out: &mut W) -> Result<()> {
        let profiles = self.config.profiles()?;
        write_profiles(&profiles, out)
    }
}
