//! Character source abstraction.

use crate::error::CatalogError;
use roster_core::model::{Character, CharacterId, CharacterSummary};

/// Anything that can answer the two catalog queries.
///
/// [`crate::CharacterClient`] is the HTTP implementation; tests drive the UI
/// with in-memory sources.
#[async_trait::async_trait]
pub trait CharacterSource: Send + Sync {
    /// List up to `limit` characters in catalog order.
    async fn list_characters(&self, limit: usize) -> Result<Vec<CharacterSummary>, CatalogError>;

    /// Fetch one character; `None` when the catalog has no such id.
    async fn get_character(&self, id: CharacterId) -> Result<Option<Character>, CatalogError>;
}
