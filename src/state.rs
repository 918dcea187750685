use std::rc::Rc;

use yew::prelude::Reducible;

/// Scroll offset (px) past which the header switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 20.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

/// Mobile navigation menu. Closed on load; the menu block is only mounted
/// while this is `Open`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Menu {
    #[default]
    Closed,
    Open,
}

impl Menu {
    pub fn toggled(self) -> Self {
        match self {
            Menu::Closed => Menu::Open,
            Menu::Open => Menu::Closed,
        }
    }

    /// Unconditional close; activating a nav link while the mobile menu is
    /// open dismisses it.
    pub fn closed(self) -> Self {
        Menu::Closed
    }

    pub fn is_open(self) -> bool {
        matches!(self, Menu::Open)
    }
}

/// Entrance-animation phase of a content block. The transition is one-way:
/// once `Revealed`, further viewport entries change nothing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Reveal {
    #[default]
    Hidden,
    Revealed,
}

/// A block's bounding box intersected the viewport.
pub struct ViewportEnter;

impl Reducible for Reveal {
    type Action = ViewportEnter;

    fn reduce(self: Rc<Self>, _action: ViewportEnter) -> Rc<Self> {
        Rc::new(Reveal::Revealed)
    }
}

impl Reveal {
    pub fn is_revealed(self) -> bool {
        matches!(self, Reveal::Revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_threshold_boundary() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
        assert!(is_scrolled(21.0));
    }

    #[test]
    fn menu_toggle_is_an_involution() {
        for start in [Menu::Closed, Menu::Open] {
            assert_ne!(start.toggled(), start);
            assert_eq!(start.toggled().toggled(), start);
        }
    }

    #[test]
    fn closing_the_menu_always_closes() {
        for start in [Menu::Closed, Menu::Open] {
            assert!(!start.closed().is_open(), "close from {start:?} left the menu open");
        }
    }

    #[test]
    fn reveal_fires_exactly_once() {
        let mut phase = Rc::new(Reveal::Hidden);
        phase = phase.reduce(ViewportEnter);
        assert!(phase.is_revealed());
        // Re-entering the viewport is a no-op, not a toggle.
        for _ in 0..3 {
            phase = phase.reduce(ViewportEnter);
            assert!(phase.is_revealed());
        }
    }
}
