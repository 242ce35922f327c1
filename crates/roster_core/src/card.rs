//! Detail rendering contract.
//!
//! [`DetailCard`] is what the detail screen draws, derived from a
//! [`Character`] without any terminal types: the name, three labeled badges
//! with `"??"` standing in for missing values, the description as given, and
//! the quote only when it has text.

use crate::model::Character;
use crate::theme::Theme;

/// Stand-in for an absent or empty badge value.
pub const PLACEHOLDER: &str = "??";

/// Badge labels in display order.
pub const BADGE_LABELS: [&str; 3] = ["Idade", "Raça", "Gênero"];

/// A labeled field on the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Field label
    pub label: &'static str,
    /// Field value, or [`PLACEHOLDER`]
    pub value: String,
}

/// Everything the detail screen shows for one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailCard {
    /// Always shown
    pub name: String,
    /// Portrait image
    pub image_url: String,
    /// Age, race, gender
    pub badges: [Badge; 3],
    /// Shown verbatim when present
    pub description: Option<String>,
    /// `Some` only for a non-empty quote
    pub quote: Option<String>,
    /// Background theme
    pub theme: Theme,
}

impl DetailCard {
    /// Build the card for a character.
    pub fn from_character(character: &Character) -> Self {
        let [age, race, gender] = BADGE_LABELS;
        Self {
            name: character.name.clone(),
            image_url: character.image_url.clone(),
            badges: [
                badge(age, character.age.as_deref()),
                badge(race, character.race.as_deref()),
                badge(gender, character.gender.as_deref()),
            ],
            description: character.description.clone(),
            quote: character.quote.clone().filter(|q| !q.is_empty()),
            theme: Theme::for_character(character),
        }
    }

    /// Whether the inverted quote block is drawn.
    pub fn has_quote(&self) -> bool {
        self.quote.is_some()
    }
}

fn badge(label: &'static str, value: Option<&str>) -> Badge {
    Badge {
        label,
        value: or_placeholder(value),
    }
}

/// Substitute [`PLACEHOLDER`] for an absent or empty value.
pub fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}
