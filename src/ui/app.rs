//! Application controller: owns the summarizer state and drives side effects.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use crate::backend::SummarizeBackend;
use crate::backend::EMPTY_INPUT_MESSAGE;
use crate::clipboard::ClipboardWriter;
use crate::config::Config;
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;
use crate::ui::summarizer::{
    SummarizerIntent, SummarizerReducer, SummarizerState, COPY_CONFIRMATION_MS,
};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Summarizer view state (MVI pattern).
    summarizer: SummarizerState,
    config: Config,
    /// Network capability (resource, managed outside MVI).
    backend: Arc<dyn SummarizeBackend>,
    /// Clipboard capability (resource, managed outside MVI).
    clipboard: Box<dyn ClipboardWriter>,
    events_tx: Sender<AppEvent>,
    runtime: tokio::runtime::Handle,
}

impl App {
    pub fn new(
        config: Config,
        backend: Arc<dyn SummarizeBackend>,
        clipboard: Box<dyn ClipboardWriter>,
        events_tx: Sender<AppEvent>,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        Self {
            should_quit: false,
            summarizer: SummarizerState::default(),
            config,
            backend,
            clipboard,
            events_tx,
            runtime,
        }
    }

    pub fn state(&self) -> &SummarizerState {
        &self.summarizer
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Dispatch an intent to the summarizer reducer.
    pub fn dispatch(&mut self, intent: SummarizerIntent) {
        dispatch_mvi!(self, summarizer, SummarizerReducer, intent);
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Submit the current input to the summarization service.
    ///
    /// A submit while one is already outstanding is ignored; blank input
    /// fails locally without touching the network or the submit state.
    pub fn submit(&mut self) {
        if self.summarizer.loading {
            tracing::debug!("submit ignored: request already in flight");
            return;
        }

        let text = self.summarizer.input.trim().to_string();
        if text.is_empty() {
            self.dispatch(SummarizerIntent::ValidationFailed {
                message: EMPTY_INPUT_MESSAGE.to_string(),
            });
            return;
        }

        self.dispatch(SummarizerIntent::SubmitStarted);

        let backend = Arc::clone(&self.backend);
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let result = backend.summarize(&text).await;
            // Receiver gone means the UI loop already exited.
            let _ = tx.send(AppEvent::SubmitFinished(result));
        });
    }

    /// Copy the current summary to the clipboard.
    ///
    /// No-op without a summary. On success, opens the 2-second confirmation
    /// window; the timer is tagged with the current generation so a stale
    /// expiry can't clobber a newer confirmation.
    pub fn copy_to_clipboard(&mut self) {
        let Some(summary) = self.summarizer.summary.clone().filter(|s| !s.is_empty()) else {
            return;
        };

        match self.clipboard.write_text(&summary) {
            Ok(()) => {
                self.dispatch(SummarizerIntent::CopySucceeded);

                let generation = self.summarizer.copy_generation;
                let tx = self.events_tx.clone();
                self.runtime.spawn(async move {
                    tokio::time::sleep(Duration::from_millis(COPY_CONFIRMATION_MS)).await;
                    let _ = tx.send(AppEvent::CopyWindowElapsed { generation });
                });
            }
            Err(err) => {
                tracing::warn!(error = %err, "clipboard write failed");
                self.dispatch(SummarizerIntent::CopyFailed {
                    message: err.to_string(),
                });
            }
        }
    }

    // ========================================================================
    // Event handling
    // ========================================================================

    /// Apply a background-task event. Each submit completion is applied as a
    /// single event here, so completions never interleave field writes.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SubmitFinished(Ok(summary)) => {
                self.dispatch(SummarizerIntent::SubmitSucceeded {
                    summary,
                    clear_input: self.config.behavior.clear_input_on_success,
                });
            }
            AppEvent::SubmitFinished(Err(err)) => {
                tracing::warn!(error = %err, "submit failed");
                self.dispatch(SummarizerIntent::SubmitFailed {
                    message: err.user_message(),
                });
            }
            AppEvent::CopyWindowElapsed { generation } => {
                self.dispatch(SummarizerIntent::CopyWindowElapsed { generation });
            }
            // Input events are routed through `input::handle_key` by the
            // runtime; ticks through `on_tick`.
            AppEvent::Key(_) | AppEvent::Paste(_) | AppEvent::Tick | AppEvent::Resize(..) => {}
        }
    }

    pub fn on_paste(&mut self, text: &str) {
        self.dispatch(SummarizerIntent::InsertText(text.to_string()));
    }

    pub fn on_tick(&mut self) {
        self.dispatch(SummarizerIntent::AnimationTick);
    }
}
