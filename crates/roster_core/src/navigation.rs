//! Two-route navigation stack.
//!
//! The roster is the root and is mounted exactly once. Detail screens are
//! pushed on top carrying the selected character id. Every mounted screen
//! gets a fresh [`ScreenId`]; a fetch result tagged with an id that is no
//! longer mounted belongs to a discarded screen and must be dropped.

use crate::model::CharacterId;
use thiserror::Error;

/// Named routes and their parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Character list, the root route
    Roster,
    /// Character detail
    Details {
        /// Character to show
        character_id: CharacterId,
    },
}

impl Route {
    /// Route title shown in the header.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Roster => "Demon Slayer",
            Self::Details { .. } => "Detalhes",
        }
    }
}

/// Token naming one mounted screen instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(u64);

impl ScreenId {
    /// Raw value, for logging.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "screen#{}", self.0)
    }
}

/// Navigation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The root route cannot be pushed again
    #[error("Route '{0}' is the root and is already mounted")]
    RootRoute(&'static str),
}

/// Stack of mounted routes.
#[derive(Debug)]
pub struct Navigator {
    stack: Vec<(ScreenId, Route)>,
    next_id: u64,
}

impl Navigator {
    /// Create a navigator with the roster mounted.
    pub fn new() -> Self {
        Self {
            stack: vec![(ScreenId(0), Route::Roster)],
            next_id: 1,
        }
    }

    /// Root screen.
    pub fn root(&self) -> ScreenId {
        self.stack[0].0
    }

    /// Topmost screen and its route.
    pub fn current(&self) -> (ScreenId, Route) {
        // the root is never popped, so the stack is never empty
        self.stack[self.stack.len() - 1]
    }

    /// Number of mounted screens.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether a back transition is possible.
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Whether a screen instance is still mounted.
    pub fn is_mounted(&self, id: ScreenId) -> bool {
        self.stack.iter().any(|(mounted, _)| *mounted == id)
    }

    /// Mount a route on top of the stack.
    pub fn push(&mut self, route: Route) -> Result<ScreenId, NavigationError> {
        if route == Route::Roster {
            return Err(NavigationError::RootRoute(route.title()));
        }
        let id = ScreenId(self.next_id);
        self.next_id += 1;
        self.stack.push((id, route));
        Ok(id)
    }

    /// Unmount the top screen. The root stays.
    pub fn pop(&mut self) -> Option<(ScreenId, Route)> {
        if self.can_go_back() {
            self.stack.pop()
        } else {
            None
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
