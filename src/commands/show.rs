//! Persisted-state commands: `show` and `reset`

use crate::config::Settings;
use crate::error::Result;
use crate::output::print_session;
use crate::session::Session;
use crate::state::StateStore;
use colored::Colorize;

/// Print the saved log, its constraints and the candidates
pub fn run_show(session: &Session) {
    print_session(session);
}

/// Delete the saved state
///
/// # Errors
///
/// Returns an error if the state file exists but cannot be removed.
pub fn run_reset(settings: &Settings) -> Result<()> {
    StateStore::new(settings.state_path.clone()).clear()?;
    println!(
        "{} {}",
        "Cleared".green(),
        settings.state_path.display()
    );
    Ok(())
}
