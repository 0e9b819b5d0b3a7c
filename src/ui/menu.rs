//! Mobile navigation menu

use crate::consts::{MENU_GLYPH_CLOSED, MENU_GLYPH_OPEN};

/// Open/closed state of the mobile nav
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn from_open(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    /// Button text mirroring the state
    pub fn glyph(&self) -> &'static str {
        if self.open {
            MENU_GLYPH_OPEN
        } else {
            MENU_GLYPH_CLOSED
        }
    }
}

/// A document click closes the menu unless it landed on the button or inside the nav
#[inline]
pub fn outside_click(target_in_button: bool, target_in_nav: bool) -> bool {
    !target_in_button && !target_in_nav
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alternates() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.glyph(), "☰");

        for expected in [true, false, true, false] {
            menu = menu.toggled();
            assert_eq!(menu.is_open(), expected);
        }
    }

    #[test]
    fn test_glyph_mirrors_state() {
        assert_eq!(MenuState::from_open(true).glyph(), "✕");
        assert_eq!(MenuState::from_open(true).closed().glyph(), "☰");
    }

    #[test]
    fn test_outside_click() {
        assert!(outside_click(false, false));
        assert!(!outside_click(true, false));
        assert!(!outside_click(false, true));
    }
}
