//! # adapter_catalog: Remote Character Catalog
//!
//! Adapter between the Slayer Roster UI and the public character API.
//!
//! - `GET <base>/characters?limit={N}` → roster
//! - `GET <base>/characters?id={id}` → one character
//!
//! Both answers come wrapped in an `{"content": [...]}` envelope.
//!
//! ```rust,no_run
//! use adapter_catalog::{CharacterClient, DEFAULT_LIST_LIMIT};
//!
//! # async fn demo() -> Result<(), adapter_catalog::CatalogError> {
//! let client = CharacterClient::default();
//! let roster = client.list_characters(DEFAULT_LIST_LIMIT).await?;
//! if let Some(first) = roster.first() {
//!     let character = client.get_character(first.id).await?;
//!     println!("{:?}", character.map(|c| c.name));
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod client;
pub mod error;
pub mod source;

pub use client::{CharacterClient, DEFAULT_BASE_URL, DEFAULT_LIST_LIMIT};
pub use error::CatalogError;
pub use source::CharacterSource;
