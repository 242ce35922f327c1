//! # roster_core: Domain Layer of the Slayer Roster Browser
//!
//! ## Role
//!
//! roster_core holds everything the browser decides without touching the
//! network or the terminal:
//! - Character records and the response envelope (`model`)
//! - Roster ordering (`ordering`)
//! - Background theme selection (`theme`)
//! - The detail rendering contract with `"??"` placeholders (`card`)
//! - Viewport-derived layout metrics (`layout`)
//! - The two-route navigation stack (`navigation`)
//! - Per-screen Loading → Ready state machines (`screen`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use roster_core::model::Character;
//! use roster_core::theme::Theme;
//! use roster_core::card::DetailCard;
//!
//! let json = r#"{"id":3,"name":"Muzan Kibutsuji","race":"Demon","quote":"","img":"m.png"}"#;
//! let character: Character = serde_json::from_str(json).unwrap();
//!
//! let card = DetailCard::from_character(&character);
//! assert_eq!(card.theme, Theme::Demon);
//! assert!(card.quote.is_none());
//! assert_eq!(card.badges[0].value, "??");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod card;
pub mod layout;
pub mod model;
pub mod navigation;
pub mod ordering;
pub mod screen;
pub mod theme;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::card::{Badge, DetailCard, PLACEHOLDER};
    pub use crate::layout::{AdaptiveLayout, Orientation, Viewport};
    pub use crate::model::{Character, CharacterId, CharacterSummary, Envelope};
    pub use crate::navigation::{NavigationError, Navigator, Route, ScreenId};
    pub use crate::ordering::RosterOrder;
    pub use crate::screen::{DetailScreen, LoadState, RosterScreen};
    pub use crate::theme::Theme;
}
