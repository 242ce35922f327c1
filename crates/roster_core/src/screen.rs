//! Screen state machines.
//!
//! Both screens start in [`LoadState::Loading`] and move to
//! [`LoadState::Ready`] exactly once, when their single fetch settles. A
//! failed fetch settles too: the roster becomes empty and the detail holds no
//! record. Later settles are ignored.

use crate::card::DetailCard;
use crate::model::{Character, CharacterId, CharacterSummary};
use crate::ordering::RosterOrder;

/// Load state of a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Fetch in flight
    Loading,
    /// Fetch settled
    Ready(T),
}

impl<T> LoadState<T> {
    /// Whether the fetch is still in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Settled value, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Loading => None,
            Self::Ready(value) => Some(value),
        }
    }
}

/// The character list screen.
#[derive(Debug, Clone)]
pub struct RosterScreen {
    state: LoadState<Vec<CharacterSummary>>,
    order: RosterOrder,
    selected: usize,
}

impl RosterScreen {
    /// New screen, loading.
    pub fn new(order: RosterOrder) -> Self {
        Self {
            state: LoadState::Loading,
            order,
            selected: 0,
        }
    }

    /// Current load state.
    pub fn state(&self) -> &LoadState<Vec<CharacterSummary>> {
        &self.state
    }

    /// Settle the fetch. `None` means it failed.
    ///
    /// Returns `false` if the screen had already settled.
    pub fn settle(&mut self, roster: Option<Vec<CharacterSummary>>) -> bool {
        if !self.state.is_loading() {
            return false;
        }
        let roster = self.order.apply(roster.unwrap_or_default());
        self.state = LoadState::Ready(roster);
        self.selected = 0;
        true
    }

    /// Rows to display; empty while loading.
    pub fn roster(&self) -> &[CharacterSummary] {
        self.state.ready().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Index of the highlighted row.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Highlighted character, once ready and non-empty.
    pub fn selected(&self) -> Option<&CharacterSummary> {
        self.roster().get(self.selected)
    }

    /// Move the highlight down one row.
    pub fn select_next(&mut self) {
        let last = self.roster().len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }

    /// Move the highlight up one row.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Highlight the first row.
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Highlight the last row.
    pub fn select_last(&mut self) {
        self.selected = self.roster().len().saturating_sub(1);
    }

    /// Id to navigate with when the highlighted row is chosen.
    ///
    /// `None` while loading or when the roster is empty.
    pub fn choose(&self) -> Option<CharacterId> {
        self.selected().map(|c| c.id)
    }
}

/// The character detail screen.
#[derive(Debug, Clone)]
pub struct DetailScreen {
    character_id: CharacterId,
    state: LoadState<Option<DetailCard>>,
    scroll: u16,
}

impl DetailScreen {
    /// New screen for a character, loading.
    pub fn new(character_id: CharacterId) -> Self {
        Self {
            character_id,
            state: LoadState::Loading,
            scroll: 0,
        }
    }

    /// Route parameter this screen was mounted with.
    pub fn character_id(&self) -> CharacterId {
        self.character_id
    }

    /// Current load state.
    pub fn state(&self) -> &LoadState<Option<DetailCard>> {
        &self.state
    }

    /// Settle the fetch. `None` means failed or not found.
    ///
    /// Returns `false` if the screen had already settled.
    pub fn settle(&mut self, character: Option<Character>) -> bool {
        if !self.state.is_loading() {
            return false;
        }
        self.state = LoadState::Ready(character.as_ref().map(DetailCard::from_character));
        true
    }

    /// The card, once a record arrived.
    pub fn card(&self) -> Option<&DetailCard> {
        self.state.ready().and_then(Option::as_ref)
    }

    /// Whether the loading indicator is shown.
    ///
    /// A settled screen without a record keeps the indicator up.
    pub fn shows_indicator(&self) -> bool {
        self.card().is_none()
    }

    /// Vertical scroll offset of the page.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Scroll the page down, never past `max_offset`.
    pub fn scroll_down(&mut self, max_offset: u16) {
        self.scroll = self.scroll.saturating_add(1).min(max_offset);
    }

    /// Pull the offset back within `max_offset` after the page shrank.
    pub fn clamp_scroll(&mut self, max_offset: u16) {
        self.scroll = self.scroll.min(max_offset);
    }

    /// Scroll the page up.
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}
