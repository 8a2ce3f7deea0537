//! State for the summarizer view.

use crate::ui::mvi::UiState;

/// How long the copy confirmation stays visible, in milliseconds.
pub const COPY_CONFIRMATION_MS: u64 = 2000;

/// All mutable state owned by the summarizer view.
///
/// Everything initializes empty/false; nothing is persisted across runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummarizerState {
    /// Text the user is editing.
    pub input: String,

    /// Last successful summary. Preserved across failed submits and while a
    /// new request is in flight, so the view doesn't flicker.
    pub summary: Option<String>,

    /// True exactly while a submit request is outstanding.
    pub loading: bool,

    /// Message from the last failed submit. Never set together with a fresh
    /// summary for the same cycle.
    pub error: Option<String>,

    /// Transient notice (validation, clipboard failures). Distinct from
    /// `error` because it does not invalidate the current summary.
    pub notice: Option<String>,

    /// True while the copy-confirmation window is open.
    pub copied: bool,

    /// Token identifying the newest copy-confirmation timer. Expiry events
    /// carrying an older generation are stale and must be ignored.
    pub copy_generation: u64,

    /// Spinner frame counter while loading.
    pub animation_tick: u8,
}

impl UiState for SummarizerState {}

impl SummarizerState {
    /// True when no submit is outstanding (ready for the next one).
    pub fn is_idle(&self) -> bool {
        !self.loading
    }

    /// True when a submit would actually be sent.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// True when there is a summary worth copying.
    pub fn has_summary(&self) -> bool {
        self.summary.as_deref().is_some_and(|s| !s.is_empty())
    }
}
