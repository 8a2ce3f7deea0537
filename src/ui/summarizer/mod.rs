//! Summarizer feature module.
//!
//! Implements the request lifecycle state machine for the summarizer view:
//! idle → submitting → success/failure → idle, plus the copy-confirmation
//! window.
//!
//! Uses the MVI pattern:
//! - `state.rs` - view state struct
//! - `intent.rs` - user/system actions
//! - `reducer.rs` - state transitions

mod intent;
mod reducer;
mod state;

pub use intent::SummarizerIntent;
pub use reducer::SummarizerReducer;
pub use state::{SummarizerState, COPY_CONFIRMATION_MS};
