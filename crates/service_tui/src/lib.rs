//! # Slayer Roster
//!
//! Terminal browser for the Demon Slayer character catalog.
//!
//! ## TUI Mode
//! Uses ratatui for rendering and crossterm for terminal handling.
//!
//! ### Screens
//! - **Demon Slayer**: roster of characters, in catalog order or sorted by name
//! - **Detalhes**: one character's card on a demon or human backdrop
//!
//! ### Keys
//! - `Up`/`Down` (`k`/`j`): move the selection or scroll the card
//! - `Enter`: open the selected character
//! - `Esc`/`Backspace`: back to the roster
//! - `q`: quit

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod screens;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::{App, FetchOutcome, FetchPayload, MountedScreen};
    pub use crate::config::{AppConfig, ConfigError};
    pub use crate::error::AppError;
}
