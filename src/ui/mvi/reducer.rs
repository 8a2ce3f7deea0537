//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state in response to intents.
///
/// Reducers are the only place state transitions happen, and they must be
/// pure: `(State, Intent) -> State`, no side effects. Side effects (network,
/// timers, clipboard) live in the app layer and feed results back in as new
/// intents.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
