//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// A state is a plain value: cloned to produce the next state, comparable
/// so the view can detect changes, and self-contained enough to render
/// from alone.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
