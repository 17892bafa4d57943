//! Per-item contextual menu.
//!
//! At most one item's menu is open at a time. The actions offered in it
//! (edit, delete, download) live in the command layer; the menu only tracks
//! which item it belongs to.

use crate::model::ItemId;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ItemMenu {
    open: Option<ItemId>,
}

impl ItemMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the menu for `id`, closing any other. Toggling the open menu
    /// closes it.
    pub fn toggle(&mut self, id: ItemId) {
        self.open = if self.open == Some(id) { None } else { Some(id) };
    }

    pub fn open_for(&self) -> Option<ItemId> {
        self.open
    }

    pub fn is_open(&self, id: ItemId) -> bool {
        self.open == Some(id)
    }

    pub fn close(&mut self) {
        self.open = None;
    }
}
