pub mod app;
pub mod events;
pub mod input;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod summarizer;
pub mod terminal_guard;
pub mod theme;
