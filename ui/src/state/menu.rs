//! Navbar menu open/close state.
//!
//! DESIGN
//! ======
//! Keeps the hover bookkeeping out of the component bodies: `Menu` and
//! `MenuItem` share one signal holding this struct, so the dropdown logic
//! stays testable without a DOM.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Which top-level menu item currently has its dropdown open, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub active: Option<String>,
}

impl MenuState {
    /// Open the dropdown for `item`, closing any other.
    pub fn activate(&mut self, item: &str) {
        self.active = Some(item.to_owned());
    }

    /// Close any open dropdown.
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Whether `item` is the one with the open dropdown.
    #[must_use]
    pub fn is_active(&self, item: &str) -> bool {
        self.active.as_deref() == Some(item)
    }
}
