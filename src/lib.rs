pub mod article;
pub mod commands;
pub mod config;
pub mod formatting;
pub mod tui;
