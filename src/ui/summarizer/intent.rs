//! Intents for the summarizer view.

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the summarizer view.
#[derive(Debug, Clone)]
pub enum SummarizerIntent {
    /// User typed a character (including '\n').
    InsertChar(char),

    /// User pasted text into the input area.
    InsertText(String),

    /// User deleted the character before the cursor.
    Backspace,

    /// User cleared the whole input area.
    ClearInput,

    /// User dismissed the current error/notice messages.
    DismissMessages,

    /// A submit request was sent.
    SubmitStarted,

    /// The service returned a summary.
    SubmitSucceeded {
        summary: String,
        /// Policy toggle: clear the input area on success.
        clear_input: bool,
    },

    /// The submit failed; `message` is already user-facing.
    SubmitFailed { message: String },

    /// A local validation failure (blank input). Never reaches the network
    /// and must not touch `loading`/`error`/`summary`.
    ValidationFailed { message: String },

    /// The summary was written to the clipboard.
    CopySucceeded,

    /// The clipboard write failed.
    CopyFailed { message: String },

    /// A copy-confirmation timer elapsed. Only honored when `generation`
    /// matches the state's current one.
    CopyWindowElapsed { generation: u64 },

    /// Animation tick (spinner updates).
    AnimationTick,
}

impl Intent for SummarizerIntent {}
