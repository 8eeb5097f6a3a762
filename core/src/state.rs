//! The ordered in-memory cache of items currently displayed.
//!
//! # Design
//! `ListState` is an explicitly owned value, created empty and handed to the
//! operations that mutate it — there is no ambient or static list. Insertion
//! order is display order. Lookups are id-keyed: two structurally equal items
//! with different ids never alias each other.

use crate::types::{Item, ItemId};

/// Maximum number of items retained after a wholesale load.
pub const MAX_ITEMS: usize = 5;

/// Ordered sequence of items mirrored from the remote collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    items: Vec<Item>,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Wholesale replacement from a load response, truncated to the first
    /// [`MAX_ITEMS`] elements in response order. Destructive: prior contents,
    /// including local edits the server never saw, are discarded.
    pub fn replace(&mut self, mut items: Vec<Item>) {
        items.truncate(MAX_ITEMS);
        self.items = items;
    }

    /// Append a freshly created item.
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Retitle the first item with a matching id. Returns `false` and leaves
    /// the state untouched when the id is not present.
    pub fn set_title(&mut self, id: &ItemId, title: &str) -> bool {
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.title = title.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove the first item with a matching id, keeping the order of the
    /// rest. Returns `false` when the id is not present.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        match self.items.iter().position(|item| &item.id == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}
