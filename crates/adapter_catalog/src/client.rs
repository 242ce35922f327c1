//! HTTP client for the character catalog.

use crate::error::CatalogError;
use crate::source::CharacterSource;
use roster_core::model::{Character, CharacterId, CharacterSummary, Envelope};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Public catalog endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.demonslayer-api.com/api/v1";

/// Roster page size.
pub const DEFAULT_LIST_LIMIT: usize = 45;

/// Read-only client for `<base>/characters`.
///
/// No caching and no retry: every call is one request. No timeout is set
/// beyond what the transport applies.
#[derive(Debug, Clone)]
pub struct CharacterClient {
    base_url: String,
    client: reqwest::Client,
}

impl CharacterClient {
    /// Create a client for a base URL such as [`DEFAULT_BASE_URL`].
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn characters_url(&self) -> String {
        format!("{}/characters", self.base_url)
    }

    async fn fetch_envelope<T: DeserializeOwned>(
        &self,
        query: &[(&str, String)],
    ) -> Result<Envelope<T>, CatalogError> {
        let url = self.characters_url();
        debug!(%url, ?query, "catalog request");

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// List up to `limit` characters.
    pub async fn list_characters(
        &self,
        limit: usize,
    ) -> Result<Vec<CharacterSummary>, CatalogError> {
        if limit == 0 {
            return Err(CatalogError::InvalidLimit(limit));
        }
        let envelope: Envelope<CharacterSummary> =
            self.fetch_envelope(&[("limit", limit.to_string())]).await?;
        let mut roster = envelope.into_content();
        roster.truncate(limit);
        debug!(count = roster.len(), "catalog roster received");
        Ok(roster)
    }

    /// Fetch one character by id.
    pub async fn get_character(&self, id: CharacterId) -> Result<Option<Character>, CatalogError> {
        let envelope: Envelope<Character> = self.fetch_envelope(&[("id", id.to_string())]).await?;
        let character = envelope.into_first();
        debug!(id, found = character.is_some(), "catalog character received");
        Ok(character)
    }
}

impl Default for CharacterClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl CharacterSource for CharacterClient {
    async fn list_characters(&self, limit: usize) -> Result<Vec<CharacterSummary>, CatalogError> {
        CharacterClient::list_characters(self, limit).await
    }

    async fn get_character(&self, id: CharacterId) -> Result<Option<Character>, CatalogError> {
        CharacterClient::get_character(self, id).await
    }
}
