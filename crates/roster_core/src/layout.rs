//! Viewport-derived layout metrics.
//!
//! Every padding and panel size used by the screens comes from
//! [`AdaptiveLayout::derive`], a pure function of the current viewport. The
//! UI recomputes it on every resize instead of reading the terminal size once
//! at startup.

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Columns
    pub width: u16,
    /// Rows
    pub height: u16,
}

impl Viewport {
    /// Create a viewport.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Viewport orientation.
///
/// Cells are roughly twice as tall as they are wide, so a terminal is only
/// landscape once it is three times wider than tall in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Taller than wide (in pixels)
    Portrait,
    /// Wider than tall (in pixels)
    Landscape,
}

/// Layout metrics for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptiveLayout {
    /// The viewport these metrics were derived from
    pub viewport: Viewport,
    /// Left/right padding inside the page
    pub horizontal_padding: u16,
    /// Top/bottom padding inside the page
    pub vertical_padding: u16,
    /// Portrait or landscape
    pub orientation: Orientation,
    /// Small screen: collapse the banner
    pub compact: bool,
    /// Rows used by the roster banner
    pub banner_height: u16,
    /// Rows used by the detail image panel in portrait
    pub portrait_height: u16,
    /// Columns used by the detail image panel in landscape
    pub portrait_width: u16,
}

const COMPACT_WIDTH: u16 = 50;
const COMPACT_HEIGHT: u16 = 16;
const FULL_BANNER_HEIGHT: u16 = 5;

impl AdaptiveLayout {
    /// Derive layout metrics from a viewport.
    pub fn derive(viewport: Viewport) -> Self {
        let Viewport { width, height } = viewport;
        let w = u32::from(width);
        let h = u32::from(height);

        let horizontal_padding = percent(w, 4).clamp(1, 6);
        let vertical_padding = percent(h, 2).clamp(0, 2);
        let orientation = if w >= 3 * h && h > 0 {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        };
        let compact = width < COMPACT_WIDTH || height < COMPACT_HEIGHT;
        let banner_height = if compact { 1 } else { FULL_BANNER_HEIGHT };
        let portrait_height = percent(h, 30).clamp(3, 12);
        let portrait_width = percent(w, 35);

        Self {
            viewport,
            horizontal_padding,
            vertical_padding,
            orientation,
            compact,
            banner_height,
            portrait_height,
            portrait_width,
        }
    }

    /// Whether the detail image sits beside the card.
    pub fn is_landscape(&self) -> bool {
        self.orientation == Orientation::Landscape
    }
}

impl Default for AdaptiveLayout {
    fn default() -> Self {
        Self::derive(Viewport::new(80, 24))
    }
}

fn percent(value: u32, pct: u32) -> u16 {
    u16::try_from(value * pct / 100).unwrap_or(u16::MAX)
}
