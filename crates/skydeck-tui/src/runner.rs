//! Main TUI runner - entry point and event loop
//!
//! The [`Engine`] owns state and background fetches; this module only adds
//! the terminal: draw the view, poll keys, feed messages back in.

use skydeck_app::{DataProvider, Engine};
use skydeck_core::prelude::*;

use super::{event, render, terminal};

/// Run the dashboard until the user quits or a signal arrives
pub async fn run<P>(mut engine: Engine<P>) -> Result<()>
where
    P: DataProvider + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    engine.start();
    let result = run_loop(&mut term, &mut engine);
    if let Err(e) = &result {
        error!("TUI loop failed: {}", e);
    }

    engine.shutdown().await;
    ratatui::restore();

    result
}

fn run_loop<P>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<P>) -> Result<()>
where
    P: DataProvider + Sync + 'static,
{
    while !engine.should_quit() {
        // Fetch completions, signal-handler quits
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
