//! Terminal setup and restoration

use skydeck_core::prelude::*;

/// Install a panic hook that restores the terminal before the report prints
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enter raw mode and the alternate screen
pub fn init() -> Result<ratatui::DefaultTerminal> {
    ratatui::try_init().map_err(init_error)
}

fn init_error(e: std::io::Error) -> Error {
    Error::TerminalInit(e.to_string())
}
