//! UI run loop: wires the terminal, the event channel, and the app together.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use crate::backend::{SummarizeBackend, SummarizeClient};
use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: Config) -> anyhow::Result<()> {
    // Background work (HTTP, timers) runs on tokio; the UI loop itself stays
    // synchronous and is the only mutator of app state.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let backend: Arc<dyn SummarizeBackend> =
        Arc::new(SummarizeClient::new(&config).context("failed to build backend client")?);
    let clipboard = Box::new(SystemClipboard::new());

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let tick_rate = Duration::from_millis(100);
    let events = EventHandler::new(tick_rate);

    let mut app = App::new(
        config,
        backend,
        clipboard,
        events.sender(),
        runtime.handle().clone(),
    );

    loop {
        terminal.draw(|frame| draw(frame, app.state()))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            // draw() picks up the new size on the next pass.
            Ok(AppEvent::Resize(..)) => {}
            Ok(event) => app.handle_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
