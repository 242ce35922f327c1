//! Character records as served by the catalog API.
//!
//! The catalog wraps every result list in an envelope (`{"content": [...]}`).
//! Two record shapes are used: [`CharacterSummary`] for the roster and
//! [`Character`] for the detail view. On the wire the image field is named
//! `img`.

use serde::{Deserialize, Deserializer, Serialize};

/// Stable character identifier, the only key shared between screens.
pub type CharacterId = u32;

/// Response envelope wrapping the result list under `content`.
///
/// A missing `content` key decodes as an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Envelope<T> {
    /// The wrapped results
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
}

impl<T> Envelope<T> {
    /// Unwrap the result list.
    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Take the first result, if any.
    pub fn into_first(self) -> Option<T> {
        self.content.into_iter().next()
    }
}

/// Reduced record used by the roster.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CharacterSummary {
    /// Character identifier
    pub id: CharacterId,
    /// Display name
    pub name: String,
    /// Avatar image URL
    #[serde(rename = "img")]
    pub image_url: String,
}

/// Complete record used by the detail view.
///
/// The optional text fields accept JSON strings or numbers; the live API
/// sends `age` as a number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Character {
    /// Character identifier
    pub id: CharacterId,
    /// Display name
    pub name: String,
    /// Age, free text
    #[serde(default, deserialize_with = "lenient_text")]
    pub age: Option<String>,
    /// Race, e.g. "Human" or "Demon"
    #[serde(default, deserialize_with = "lenient_text")]
    pub race: Option<String>,
    /// Gender
    #[serde(default, deserialize_with = "lenient_text")]
    pub gender: Option<String>,
    /// Long description
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    /// Signature quote
    #[serde(default, deserialize_with = "lenient_text")]
    pub quote: Option<String>,
    /// Portrait image URL
    #[serde(rename = "img")]
    pub image_url: String,
}

impl Character {
    /// Reduce to the roster shape.
    pub fn summary(&self) -> CharacterSummary {
        CharacterSummary {
            id: self.id,
            name: self.name.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Integer(n) => n.to_string(),
        TextOrNumber::Float(x) => x.to_string(),
        TextOrNumber::Flag(b) => b.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_reads_img_field() {
        let json = r#"{"id":1,"name":"Tanjiro Kamado","img":"https://x/t.png"}"#;
        let summary: CharacterSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.id, 1);
        assert_eq!(summary.image_url, "https://x/t.png");
    }

    #[test]
    fn test_summary_ignores_extra_fields() {
        let json = r#"{"id":2,"name":"Nezuko","img":"n.png","affiliation_id":3,"arc_id":1}"#;
        let summary: CharacterSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.name, "Nezuko");
    }

    #[test]
    fn test_character_optional_fields_absent() {
        let json = r#"{"id":3,"name":"Muzan","img":"m.png"}"#;
        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.age, None);
        assert_eq!(character.race, None);
        assert_eq!(character.quote, None);
    }

    #[test]
    fn test_character_numeric_age_becomes_text() {
        let json = r#"{"id":1,"name":"Tanjiro","age":15,"race":"Human","img":"t.png"}"#;
        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.age.as_deref(), Some("15"));
        assert_eq!(character.race.as_deref(), Some("Human"));
    }

    #[test]
    fn test_character_null_is_absent() {
        let json = r#"{"id":1,"name":"Tanjiro","age":null,"img":"t.png"}"#;
        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.age, None);
    }

    #[test]
    fn test_envelope_first_and_empty() {
        let env: Envelope<CharacterSummary> =
            serde_json::from_str(r#"{"content":[{"id":7,"name":"Zenitsu","img":"z.png"}]}"#)
                .unwrap();
        assert_eq!(env.into_first().map(|c| c.id), Some(7));

        let empty: Envelope<CharacterSummary> = serde_json::from_str(r#"{"content":[]}"#).unwrap();
        assert!(empty.into_first().is_none());
    }

    #[test]
    fn test_envelope_missing_content_is_empty() {
        let env: Envelope<CharacterSummary> = serde_json::from_str(r#"{"total":0}"#).unwrap();
        assert!(env.into_content().is_empty());
    }

    #[test]
    fn test_character_summary_projection() {
        let character = Character {
            id: 9,
            name: "Inosuke".to_string(),
            age: None,
            race: None,
            gender: None,
            description: None,
            quote: None,
            image_url: "i.png".to_string(),
        };
        let summary = character.summary();
        assert_eq!(summary.id, 9);
        assert_eq!(summary.image_url, "i.png");
    }
}
