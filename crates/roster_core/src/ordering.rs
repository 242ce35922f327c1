//! Roster ordering.
//!
//! Alphabetical ordering follows the usual collation levels: base letters
//! first (case and accents folded, so "Ōkami" sorts among the O's), then
//! accents with the unaccented form first, then case with lowercase first.
//! This ranks "abe" < "Abe" < "abel" and "eda" < "Eda" < "éda". The sort is
//! stable, so identical names keep their catalog order.

use crate::model::CharacterSummary;
use serde::Deserialize;
use std::cmp::Ordering;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// How the roster is ordered once it arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RosterOrder {
    /// Keep the order the catalog returned
    #[default]
    Catalog,
    /// Sort by name
    Alphabetical,
}

impl RosterOrder {
    /// Apply this ordering to a fetched roster.
    pub fn apply(self, mut roster: Vec<CharacterSummary>) -> Vec<CharacterSummary> {
        if self == Self::Alphabetical {
            // `sort_by` is stable
            roster.sort_by(|a, b| compare_names(&a.name, &b.name));
        }
        roster
    }

    /// Config/CLI spelling of this ordering.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Alphabetical => "alphabetical",
        }
    }
}

impl FromStr for RosterOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "catalog" => Ok(Self::Catalog),
            "alphabetical" | "alpha" | "name" => Ok(Self::Alphabetical),
            other => Err(format!(
                "unknown roster order '{}' (expected 'alphabetical' or 'catalog')",
                other
            )),
        }
    }
}

/// Compare two display names.
///
/// Each level only breaks ties left by the one before: base letters with
/// case and accents folded, then the accents on each letter, then case with
/// lowercase first. Canonically equivalent names compare equal.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accents(a).cmp(&accents(b)))
        .then_with(|| cased(a).cmp(cased(b)))
}

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Combining marks attached to each base letter, in order.
fn accents(name: &str) -> Vec<Vec<char>> {
    let mut letters: Vec<Vec<char>> = Vec::new();
    for c in name.nfd() {
        if !is_combining_mark(c) {
            letters.push(Vec::new());
        } else if let Some(marks) = letters.last_mut() {
            marks.push(c);
        } else {
            letters.push(vec![c]);
        }
    }
    letters
}

fn cased(name: &str) -> impl Iterator<Item = (bool, char)> + '_ {
    name.nfd().map(|c| (!c.is_lowercase(), c))
}
