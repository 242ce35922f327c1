//! Property tests for ordering, theme selection and the detail card.

use proptest::prelude::*;
use roster_core::card::{DetailCard, PLACEHOLDER};
use roster_core::model::{Character, CharacterSummary};
use roster_core::ordering::{compare_names, RosterOrder};
use roster_core::theme::Theme;
use std::cmp::Ordering;

fn roster_strategy() -> impl Strategy<Value = Vec<CharacterSummary>> {
    // small alphabet so duplicate and case-variant names are common
    prop::collection::vec("[aAbBkKéÉōŌ ]{0,4}", 0..24).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| CharacterSummary {
                id: i as u32,
                name,
                image_url: String::new(),
            })
            .collect()
    })
}

fn character_with(race: Option<String>, quote: Option<String>, age: Option<String>) -> Character {
    Character {
        id: 1,
        name: "Someone".to_string(),
        age,
        race,
        gender: None,
        description: None,
        quote,
        image_url: String::new(),
    }
}

fn accent(c: char) -> char {
    match c {
        'a' => 'á',
        'e' => 'é',
        'i' => 'í',
        'o' => 'ō',
        'u' => 'ü',
        other => other,
    }
}

proptest! {
    #[test]
    fn alphabetical_roster_is_ordered(roster in roster_strategy()) {
        let sorted = RosterOrder::Alphabetical.apply(roster);
        for pair in sorted.windows(2) {
            prop_assert_ne!(compare_names(&pair[0].name, &pair[1].name), Ordering::Greater);
        }
    }

    #[test]
    fn alphabetical_roster_is_stable(roster in roster_strategy()) {
        let sorted = RosterOrder::Alphabetical.apply(roster);
        for pair in sorted.windows(2) {
            if pair[0].name == pair[1].name {
                // ids were assigned in catalog order
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn alphabetical_roster_is_a_permutation(roster in roster_strategy()) {
        let mut before: Vec<u32> = roster.iter().map(|c| c.id).collect();
        let mut after: Vec<u32> = RosterOrder::Alphabetical.apply(roster).iter().map(|c| c.id).collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn compare_names_is_antisymmetric(a in "[a-zA-Zéōü]{0,6}", b in "[a-zA-Zéōü]{0,6}") {
        prop_assert_eq!(compare_names(&a, &b), compare_names(&b, &a).reverse());
    }

    #[test]
    fn accents_only_break_ties(word in "[a-z]{1,8}", other in "[a-z]{1,8}") {
        let accented: String = word.chars().map(accent).collect();

        // never ahead of the bare spelling, never past a different word
        prop_assert_ne!(compare_names(&accented, &word), Ordering::Less);
        prop_assume!(word != other);
        prop_assert_eq!(compare_names(&accented, &other), compare_names(&word, &other));
    }

    #[test]
    fn race_containing_demon_selects_demon_theme(
        prefix in "[a-zA-Z -]{0,8}",
        demon in "[dD][eE][mM][oO][nN]",
        suffix in "[a-zA-Z -]{0,8}",
    ) {
        let race = format!("{}{}{}", prefix, demon, suffix);
        prop_assert_eq!(Theme::for_race(Some(&race)), Theme::Demon);
    }

    #[test]
    fn race_without_demon_selects_human_theme(race in "[a-zA-Z -]{0,16}") {
        prop_assume!(!race.to_lowercase().contains("demon"));
        prop_assert_eq!(Theme::for_race(Some(&race)), Theme::Human);
    }

    #[test]
    fn quote_block_iff_non_empty(quote in prop::option::of("[a-z ]{0,6}")) {
        let card = DetailCard::from_character(&character_with(None, quote.clone(), None));
        let expected = quote.map_or(false, |q| !q.is_empty());
        prop_assert_eq!(card.has_quote(), expected);
    }

    #[test]
    fn absent_or_empty_age_renders_placeholder(age in prop::option::of("[0-9]{0,3}")) {
        let card = DetailCard::from_character(&character_with(None, None, age.clone()));
        match age {
            Some(a) if !a.is_empty() => prop_assert_eq!(card.badges[0].value.as_str(), a.as_str()),
            _ => prop_assert_eq!(card.badges[0].value.as_str(), PLACEHOLDER),
        }
    }
}

#[test]
fn theme_examples() {
    assert_eq!(Theme::for_race(Some("Demon")), Theme::Demon);
    assert_eq!(Theme::for_race(Some("Upper-Rank Demon")), Theme::Demon);
    assert_eq!(Theme::for_race(Some("Human")), Theme::Human);
    assert_eq!(Theme::for_race(None), Theme::Human);
    assert_eq!(Theme::for_race(Some("")), Theme::Human);
}
