//! Raw-mode terminal setup and teardown.

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

use super::Result;

/// Environment switch that skips raw mode and input handling (tests, CI).
pub const HEADLESS_ENV: &str = "HNVIEW_TEST_HEADLESS";

/// Whether the runtime should skip terminal setup.
pub fn is_headless() -> bool {
    std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1")
}

/// Enter raw mode and the alternate screen.
pub fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen)?;
    Ok(())
}

/// Leave raw mode and the alternate screen.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
