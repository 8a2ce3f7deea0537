pub mod backend;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod ui;
