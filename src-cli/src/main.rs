//! foxsession - Firefox session snapshot inspector
//!
//! Usage: `foxsession [SESSION_FILE]` or `foxsession profiles`
//!
//! Without an argument the file comes from `FOXSESSION_FILE`, or from the
//! selected Firefox profile (`FOXSESSION_PROFILE`, default profile otherwise).
//! `profiles` lists the profiles that hold a session snapshot.

use anyhow::{bail, Context};
use std::path::PathBuf;

use foxsession_core::{Config, Inspector};

const USAGE: &str = "usage: foxsession [SESSION_FILE] | foxsession profiles";

fn main() -> anyhow::Result<()> {
    foxsession_core::init_logging();

    let args: Vec<_> = std::env::args_os().skip(1).collect();
    if args.len() > 1 {
        bail!(USAGE);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let config = Config::from_env();

    if args.first().is_some_and(|arg| arg == "profiles") {
        let inspector = Inspector::new(config);
        return inspector
            .list_profiles(&mut out)
            .context("Failed to list Firefox profiles");
    }

    let config = match args.into_iter().next() {
        Some(path) => config.with_session_file(PathBuf::from(path)),
        None => config,
    };

    let inspector = Inspector::new(config);
    tracing::debug!(config = ?inspector.config(), "Starting inspection");

    inspector
        .run(&mut out)
        .context("Failed to inspect Firefox session")?;

    tracing::debug!("Report complete");
    Ok(())
}
