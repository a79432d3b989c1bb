//! Open/closed state of the collapsible mobile navigation.

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub const fn new() -> Self {
        Self { open: false }
    }

    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Hamburger click. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Nav link click. Returns `true` when the menu was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }
}
