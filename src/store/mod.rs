//! The per-session inventory: an ordered list with append and remove-first-match.

use crate::models::{Item, Notice, StockLevel, Variant};

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<Item>,
    added_marker: Option<String>,
}

impl Inventory {
    /// A fresh inventory holding the variant's seed items.
    pub fn seeded(variant: Variant) -> Self {
        Self {
            items: variant.seed_items(),
            added_marker: variant.added_marker().map(str::to_string),
        }
    }

    /// An undecorated inventory starting from `items`.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items,
            added_marker: None,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Displayed labels in order.
    pub fn labels(&self) -> Vec<String> {
        self.items.iter().map(Item::label).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }

    pub fn stock_level(&self, threshold: usize) -> StockLevel {
        StockLevel::for_count(self.items.len(), threshold)
    }

    /// Append `name` (trimmed) to the end of the inventory.
    ///
    /// Blank input leaves the inventory untouched and yields a warning.
    pub fn add(&mut self, name: &str) -> Notice {
        let name = name.trim();
        if name.is_empty() {
            return Notice::warning("Item name cannot be empty.");
        }

        let item = match &self.added_marker {
            Some(marker) => Item::with_marker(name, marker.clone()),
            None => Item::new(name),
        };
        self.items.push(item);
        Notice::success(format!("Added item: {}", name))
    }

    /// Remove the first item whose raw name equals `name`.
    pub fn remove(&mut self, name: &str) -> Notice {
        match self.items.iter().position(|item| item.name == name) {
            Some(index) => {
                self.items.remove(index);
                Notice::success(format!("Removed item: {}", name))
            }
            None => Notice::error(format!("Item {} is not in the inventory.", name)),
        }
    }
}
