//! Terminal takeover and restoration
//!
//! The panic hook is installed before raw mode so a crash anywhere in the
//! draw/update loop leaves the user's shell usable.

use safeplace_core::{Error, Result};

/// Enter raw mode and the alternate screen, with a panic hook that restores
/// the terminal before the panic propagates.
pub fn init() -> Result<ratatui::DefaultTerminal> {
    install_panic_hook();
    ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))
}

/// Leave the alternate screen and disable raw mode.
pub fn restore() -> Result<()> {
    ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()))
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}
