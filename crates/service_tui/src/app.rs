//! TUI application state and event handling.
//!
//! [`App`] owns the navigator and the state of every mounted screen. Each
//! mount spawns one fetch task; its result comes back over a channel tagged
//! with the screen's [`ScreenId`] and is applied only if that screen is still
//! mounted.

use crate::config::AppConfig;
use crate::screens;
use adapter_catalog::CharacterSource;
use crossterm::event::KeyCode;
use roster_core::layout::{AdaptiveLayout, Viewport};
use roster_core::model::{Character, CharacterId, CharacterSummary};
use roster_core::navigation::{NavigationError, Navigator, Route, ScreenId};
use roster_core::ordering::RosterOrder;
use roster_core::screen::{DetailScreen, RosterScreen};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info, warn};

/// State of one mounted screen.
#[derive(Debug, Clone)]
pub enum MountedScreen {
    /// Character list
    Roster(RosterScreen),
    /// Character detail
    Details(DetailScreen),
}

/// Settled result of a screen's fetch. `None` means failed or not found.
#[derive(Debug, Clone)]
pub enum FetchPayload {
    /// Roster fetch result
    Roster(Option<Vec<CharacterSummary>>),
    /// Detail fetch result
    Character(Option<Character>),
}

/// A fetch result addressed to the screen that asked for it.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Requesting screen
    pub screen: ScreenId,
    /// What came back
    pub payload: FetchPayload,
}

/// TUI application state
pub struct App {
    source: Arc<dyn CharacterSource>,
    navigator: Navigator,
    screens: HashMap<ScreenId, MountedScreen>,
    outcomes_tx: UnboundedSender<FetchOutcome>,
    outcomes_rx: UnboundedReceiver<FetchOutcome>,
    layout: AdaptiveLayout,
    list_limit: usize,
    order: RosterOrder,
    tick: usize,
    should_quit: bool,
}

impl App {
    /// Create the application with the roster mounted but not yet fetching.
    pub fn new(source: Arc<dyn CharacterSource>, config: &AppConfig) -> Self {
        let navigator = Navigator::new();
        let mut screens = HashMap::new();
        screens.insert(
            navigator.root(),
            MountedScreen::Roster(RosterScreen::new(config.roster_order)),
        );
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();

        Self {
            source,
            navigator,
            screens,
            outcomes_tx,
            outcomes_rx,
            layout: AdaptiveLayout::default(),
            list_limit: config.list_limit,
            order: config.roster_order,
            tick: 0,
            should_quit: false,
        }
    }

    /// Start the roster fetch. Must run inside a tokio runtime.
    pub fn start(&mut self) {
        let root = self.navigator.root();
        info!(order = self.order.as_str(), limit = self.list_limit, "mounting roster");
        self.spawn_fetch(root, Route::Roster);
    }

    fn spawn_fetch(&self, screen: ScreenId, route: Route) {
        let source = Arc::clone(&self.source);
        let tx = self.outcomes_tx.clone();
        let limit = self.list_limit;

        tokio::spawn(async move {
            let payload = match route {
                Route::Roster => match source.list_characters(limit).await {
                    Ok(roster) => FetchPayload::Roster(Some(roster)),
                    Err(err) => {
                        error!(%screen, error = %err, "failed to load character list");
                        FetchPayload::Roster(None)
                    }
                },
                Route::Details { character_id } => {
                    match source.get_character(character_id).await {
                        Ok(character) => {
                            if character.is_none() {
                                warn!(%screen, character_id, "character not found");
                            }
                            FetchPayload::Character(character)
                        }
                        Err(err) => {
                            error!(%screen, character_id, error = %err, "failed to load character");
                            FetchPayload::Character(None)
                        }
                    }
                }
            };
            // a closed channel means the app already exited
            let _ = tx.send(FetchOutcome { screen, payload });
        });
    }

    /// Apply a fetch result. Returns `false` when it was dropped.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        if !self.navigator.is_mounted(outcome.screen) {
            debug!(screen = %outcome.screen, "dropping result for unmounted screen");
            return false;
        }
        match (self.screens.get_mut(&outcome.screen), outcome.payload) {
            (Some(MountedScreen::Roster(screen)), FetchPayload::Roster(roster)) => {
                screen.settle(roster)
            }
            (Some(MountedScreen::Details(screen)), FetchPayload::Character(character)) => {
                screen.settle(character)
            }
            _ => {
                warn!(screen = %outcome.screen, "result does not match screen kind");
                false
            }
        }
    }

    /// Apply every result that has already arrived. Returns how many applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcomes_rx.try_recv() {
            if self.apply(outcome) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the next result and apply it.
    ///
    /// Returns whether it was applied; `None` if no sender is left.
    pub async fn settle_next(&mut self) -> Option<bool> {
        let outcome = self.outcomes_rx.recv().await?;
        Some(self.apply(outcome))
    }

    /// Push the detail screen for a character and start its fetch.
    pub fn open_details(&mut self, character_id: CharacterId) -> Result<ScreenId, NavigationError> {
        let route = Route::Details { character_id };
        let screen = self.navigator.push(route)?;
        self.screens
            .insert(screen, MountedScreen::Details(DetailScreen::new(character_id)));
        info!(%screen, character_id, "navigate to {}", route.title());
        self.spawn_fetch(screen, route);
        Ok(screen)
    }

    /// Pop the top screen. Returns `false` on the root.
    pub fn go_back(&mut self) -> bool {
        match self.navigator.pop() {
            Some((screen, route)) => {
                self.screens.remove(&screen);
                info!(%screen, "leaving {}", route.title());
                true
            }
            None => false,
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => {
                if !self.go_back() {
                    self.should_quit = true;
                }
            }
            KeyCode::Backspace | KeyCode::Left => {
                self.go_back();
            }
            _ => self.handle_screen_key(key),
        }
    }

    fn handle_screen_key(&mut self, key: KeyCode) {
        let (current, _) = self.navigator.current();
        let max_offset = self.scroll_limit(current);
        let mut chosen = None;

        match self.screens.get_mut(&current) {
            Some(MountedScreen::Roster(screen)) => match key {
                KeyCode::Up | KeyCode::Char('k') => screen.select_previous(),
                KeyCode::Down | KeyCode::Char('j') => screen.select_next(),
                KeyCode::Home | KeyCode::Char('g') => screen.select_first(),
                KeyCode::End | KeyCode::Char('G') => screen.select_last(),
                KeyCode::Enter | KeyCode::Right => chosen = screen.choose(),
                _ => {}
            },
            Some(MountedScreen::Details(screen)) => match key {
                KeyCode::Up | KeyCode::Char('k') => screen.scroll_up(),
                KeyCode::Down | KeyCode::Char('j') => screen.scroll_down(max_offset),
                _ => {}
            },
            None => {}
        }

        if let Some(character_id) = chosen {
            if let Err(err) = self.open_details(character_id) {
                warn!(error = %err, "navigation rejected");
            }
        }
    }

    /// Scroll bound of a detail screen for the current layout.
    fn scroll_limit(&self, screen: ScreenId) -> u16 {
        match self.screens.get(&screen) {
            Some(MountedScreen::Details(detail)) => detail
                .card()
                .map_or(0, |card| screens::card_scroll_limit(card, &self.layout)),
            _ => 0,
        }
    }

    /// Recompute the layout for a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.layout = AdaptiveLayout::derive(Viewport::new(width, height));
        debug!(width, height, compact = self.layout.compact, "layout recomputed");

        let layout = &self.layout;
        for screen in self.screens.values_mut() {
            if let MountedScreen::Details(detail) = screen {
                let max_offset = detail
                    .card()
                    .map_or(0, |card| screens::card_scroll_limit(card, layout));
                detail.clamp_scroll(max_offset);
            }
        }
    }

    /// Advance the spinner.
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Topmost route.
    pub fn current_route(&self) -> Route {
        self.navigator.current().1
    }

    /// State of the topmost screen.
    pub fn current_screen(&self) -> Option<&MountedScreen> {
        self.screens.get(&self.navigator.current().0)
    }

    /// State of the root roster.
    pub fn roster(&self) -> Option<&RosterScreen> {
        match self.screens.get(&self.navigator.root()) {
            Some(MountedScreen::Roster(screen)) => Some(screen),
            _ => None,
        }
    }

    /// Whether a back transition is possible.
    pub fn can_go_back(&self) -> bool {
        self.navigator.can_go_back()
    }

    /// Number of mounted screens.
    pub fn mounted_screens(&self) -> usize {
        self.screens.len()
    }

    /// Current layout metrics.
    pub fn layout(&self) -> &AdaptiveLayout {
        &self.layout
    }

    /// Spinner frame counter.
    pub fn tick(&self) -> usize {
        self.tick
    }

    /// Exit flag
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
