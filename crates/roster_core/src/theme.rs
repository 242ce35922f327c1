//! Background theme selection for the detail view.

use crate::model::Character;

/// One of the two detail backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Backdrop for demons
    Demon,
    /// Backdrop for everybody else
    Human,
}

/// RGB triple, kept free of any terminal crate.
pub type Rgb = (u8, u8, u8);

/// Colours a theme paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background
    pub background: Rgb,
    /// Accent for borders and titles
    pub accent: Rgb,
    /// Badge values
    pub highlight: Rgb,
}

impl Theme {
    /// Pick the theme for a race value.
    ///
    /// Demon iff the race, lowercased, contains "demon".
    pub fn for_race(race: Option<&str>) -> Self {
        match race {
            Some(race) if race.to_lowercase().contains("demon") => Self::Demon,
            _ => Self::Human,
        }
    }

    /// Pick the theme for a character.
    pub fn for_character(character: &Character) -> Self {
        Self::for_race(character.race.as_deref())
    }

    /// Background image asset of this theme.
    pub fn background_asset(self) -> &'static str {
        match self {
            Self::Demon => "background-demon.png",
            Self::Human => "background-human.png",
        }
    }

    /// Terminal palette of this theme.
    pub fn palette(self) -> Palette {
        match self {
            Self::Demon => Palette {
                background: (48, 6, 18),
                accent: (220, 40, 70),
                highlight: (204, 0, 0),
            },
            Self::Human => Palette {
                background: (10, 28, 48),
                accent: (90, 170, 220),
                highlight: (204, 0, 0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demon_races() {
        assert_eq!(Theme::for_race(Some("Demon")), Theme::Demon);
        assert_eq!(Theme::for_race(Some("Upper-Rank Demon")), Theme::Demon);
        assert_eq!(Theme::for_race(Some("DEMON (former human)")), Theme::Demon);
        assert_eq!(Theme::for_race(Some("half-demon")), Theme::Demon);
    }

    #[test]
    fn test_human_races() {
        assert_eq!(Theme::for_race(Some("Human")), Theme::Human);
        assert_eq!(Theme::for_race(Some("")), Theme::Human);
        assert_eq!(Theme::for_race(None), Theme::Human);
        assert_eq!(Theme::for_race(Some("Demo n")), Theme::Human);
    }

    #[test]
    fn test_assets() {
        assert_eq!(Theme::Demon.background_asset(), "background-demon.png");
        assert_eq!(Theme::Human.background_asset(), "background-human.png");
    }

    #[test]
    fn test_palettes_differ_by_background() {
        assert_ne!(Theme::Demon.palette().background, Theme::Human.palette().background);
    }
}
