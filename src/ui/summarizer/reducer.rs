//! Reducer for the summarizer view.

use crate::ui::mvi::Reducer;

use super::intent::SummarizerIntent;
use super::state::SummarizerState;

/// Reducer for summarizer state transitions.
pub struct SummarizerReducer;

impl Reducer for SummarizerReducer {
    type State = SummarizerState;
    type Intent = SummarizerIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SummarizerIntent::InsertChar(c) => {
                state.input.push(c);
                state
            }

            SummarizerIntent::InsertText(text) => {
                state.input.push_str(&text);
                state
            }

            SummarizerIntent::Backspace => {
                state.input.pop();
                state
            }

            SummarizerIntent::ClearInput => {
                state.input.clear();
                state
            }

            SummarizerIntent::DismissMessages => {
                state.error = None;
                state.notice = None;
                state
            }

            // Submitting is entered only from idle; a second submit while a
            // request is outstanding is ignored (the view shows the button
            // as disabled, so this matches the affordance).
            SummarizerIntent::SubmitStarted => {
                if state.loading {
                    return state;
                }
                state.loading = true;
                state.error = None;
                state.notice = None;
                state.copied = false;
                // Invalidate any pending copy-confirmation timer.
                state.copy_generation = state.copy_generation.wrapping_add(1);
                state.animation_tick = 0;
                state
            }

            SummarizerIntent::SubmitSucceeded {
                summary,
                clear_input,
            } => {
                state.loading = false;
                state.summary = Some(summary);
                state.error = None;
                if clear_input {
                    state.input.clear();
                }
                state
            }

            SummarizerIntent::SubmitFailed { message } => {
                state.loading = false;
                state.error = Some(message);
                state
            }

            SummarizerIntent::ValidationFailed { message } => {
                state.notice = Some(message);
                state
            }

            SummarizerIntent::CopySucceeded => {
                state.copied = true;
                state.notice = None;
                state.copy_generation = state.copy_generation.wrapping_add(1);
                state
            }

            SummarizerIntent::CopyFailed { message } => {
                state.notice = Some(message);
                state
            }

            SummarizerIntent::CopyWindowElapsed { generation } => {
                if generation == state.copy_generation {
                    state.copied = false;
                }
                state
            }

            SummarizerIntent::AnimationTick => {
                if state.loading {
                    state.animation_tick = state.animation_tick.wrapping_add(1);
                }
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: SummarizerState, intent: SummarizerIntent) -> SummarizerState {
        SummarizerReducer::reduce(state, intent)
    }

    #[test]
    fn submit_started_sets_loading_and_clears_flags() {
        let state = SummarizerState {
            input: "article".to_string(),
            error: Some("old error".to_string()),
            copied: true,
            ..SummarizerState::default()
        };
        let state = reduce(state, SummarizerIntent::SubmitStarted);
        assert!(state.loading);
        assert_eq!(state.error, None);
        assert!(!state.copied);
    }

    #[test]
    fn submit_started_preserves_summary() {
        let state = SummarizerState {
            summary: Some("previous".to_string()),
            ..SummarizerState::default()
        };
        let state = reduce(state, SummarizerIntent::SubmitStarted);
        assert_eq!(state.summary.as_deref(), Some("previous"));
    }

    #[test]
    fn submit_started_invalidates_pending_copy_timer() {
        let state = SummarizerState {
            copied: true,
            copy_generation: 3,
            ..SummarizerState::default()
        };
        let state = reduce(state, SummarizerIntent::SubmitStarted);
        // The timer spawned for generation 3 must no longer match.
        let state = reduce(state, SummarizerIntent::CopyWindowElapsed { generation: 3 });
        assert_ne!(state.copy_generation, 3);
        assert!(!state.copied); // cleared by SubmitStarted itself
    }

    #[test]
    fn second_submit_while_loading_is_ignored() {
        let state = SummarizerState {
            loading: true,
            animation_tick: 7,
            ..SummarizerState::default()
        };
        let state = reduce(state, SummarizerIntent::SubmitStarted);
        assert!(state.loading);
        assert_eq!(state.animation_tick, 7);
    }

    #[test]
    fn success_stores_summary_and_returns_to_idle() {
        let state = SummarizerState {
            input: "long article...".to_string(),
            loading: true,
            ..SummarizerState::default()
        };
        let state = reduce(
            state,
            SummarizerIntent::SubmitSucceeded {
                summary: "S".to_string(),
                clear_input: false,
            },
        );
        assert_eq!(state.summary.as_deref(), Some("S"));
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.input, "long article...");
        assert!(state.is_idle());
    }

    #[test]
    fn success_clears_input_when_policy_says_so() {
        let state = SummarizerState {
            input: "long article...".to_string(),
            loading: true,
            ..SummarizerState::default()
        };
        let state = reduce(
            state,
            SummarizerIntent::SubmitSucceeded {
                summary: "S".to_string(),
                clear_input: true,
            },
        );
        assert_eq!(state.input, "");
    }

    #[test]
    fn failure_sets_error_and_keeps_summary() {
        let state = SummarizerState {
            loading: true,
            summary: Some("previous".to_string()),
            ..SummarizerState::default()
        };
        let state = reduce(
            state,
            SummarizerIntent::SubmitFailed {
                message: "model unavailable".to_string(),
            },
        );
        assert_eq!(state.error.as_deref(), Some("model unavailable"));
        assert_eq!(state.summary.as_deref(), Some("previous"));
        assert!(!state.loading);
        assert!(state.is_idle());
    }

    #[test]
    fn validation_failure_only_sets_notice() {
        let before = SummarizerState {
            input: "   ".to_string(),
            summary: Some("kept".to_string()),
            ..SummarizerState::default()
        };
        let after = reduce(
            before.clone(),
            SummarizerIntent::ValidationFailed {
                message: "empty".to_string(),
            },
        );
        assert_eq!(after.notice.as_deref(), Some("empty"));
        assert_eq!(after.loading, before.loading);
        assert_eq!(after.error, before.error);
        assert_eq!(after.summary, before.summary);
    }

    #[test]
    fn copy_succeeded_opens_window_and_bumps_generation() {
        let state = SummarizerState {
            summary: Some("S".to_string()),
            copy_generation: 1,
            ..SummarizerState::default()
        };
        let state = reduce(state, SummarizerIntent::CopySucceeded);
        assert!(state.copied);
        assert_eq!(state.copy_generation, 2);
    }

    #[test]
    fn stale_copy_window_expiry_is_ignored() {
        let state = SummarizerState {
            copied: true,
            copy_generation: 2,
            ..SummarizerState::default()
        };
        let state = reduce(state, SummarizerIntent::CopyWindowElapsed { generation: 1 });
        assert!(state.copied);
    }

    #[test]
    fn current_copy_window_expiry_clears_copied() {
        let state = SummarizerState {
            copied: true,
            copy_generation: 2,
            ..SummarizerState::default()
        };
        let state = reduce(state, SummarizerIntent::CopyWindowElapsed { generation: 2 });
        assert!(!state.copied);
    }

    #[test]
    fn copy_failed_sets_notice_not_error() {
        let state = SummarizerState {
            summary: Some("S".to_string()),
            ..SummarizerState::default()
        };
        let state = reduce(
            state,
            SummarizerIntent::CopyFailed {
                message: "no display".to_string(),
            },
        );
        assert_eq!(state.notice.as_deref(), Some("no display"));
        assert_eq!(state.error, None);
        assert_eq!(state.summary.as_deref(), Some("S"));
    }

    #[test]
    fn animation_only_ticks_while_loading() {
        let state = reduce(SummarizerState::default(), SummarizerIntent::AnimationTick);
        assert_eq!(state.animation_tick, 0);

        let state = SummarizerState {
            loading: true,
            ..SummarizerState::default()
        };
        let state = reduce(state, SummarizerIntent::AnimationTick);
        assert_eq!(state.animation_tick, 1);
    }

    #[test]
    fn editing_intents_mutate_input() {
        let state = reduce(SummarizerState::default(), SummarizerIntent::InsertChar('h'));
        let state = reduce(state, SummarizerIntent::InsertChar('i'));
        assert_eq!(state.input, "hi");

        let state = reduce(state, SummarizerIntent::Backspace);
        assert_eq!(state.input, "h");

        let state = reduce(state, SummarizerIntent::InsertText("ello".to_string()));
        assert_eq!(state.input, "hello");

        let state = reduce(state, SummarizerIntent::ClearInput);
        assert_eq!(state.input, "");
    }
}
