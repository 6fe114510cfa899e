use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::item::Variant;
use super::notice::Notice;
use crate::store::Inventory;

/// Whether the inventory is comfortably stocked.
///
/// - `WellStocked`: more items than the restock threshold
/// - `NeedsRestock`: at or below the threshold (including empty)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    WellStocked,
    NeedsRestock,
}

impl StockLevel {
    pub fn for_count(count: usize, threshold: usize) -> Self {
        if count > threshold {
            Self::WellStocked
        } else {
            Self::NeedsRestock
        }
    }

    pub fn notice(&self) -> Notice {
        match self {
            Self::WellStocked => Notice::success("Inventory is well stocked. Keep up the good work."),
            Self::NeedsRestock => Notice::warning("Inventory needs restocking. Add more items."),
        }
    }
}

/// One row of the item table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemRow {
    /// 1-based position in the inventory.
    pub position: usize,
    /// Raw name, submitted back by the row's remove button.
    pub name: String,
    /// Displayed text, including any marker.
    pub label: String,
}

/// Everything the page displays for one session.
///
/// Built fresh from the session state after every interaction, so the page
/// never has to reconcile against a previous render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryView {
    pub session_id: Uuid,
    pub title: String,
    pub caption: String,
    pub variant: Variant,
    pub count: usize,
    pub count_notice: Notice,
    pub stock_level: StockLevel,
    pub stock_notice: Notice,
    pub rows: Vec<ItemRow>,
    /// Outcomes of the interactions since the last render.
    pub notices: Vec<Notice>,
    /// Present only when the inventory has no items.
    pub empty_notice: Option<Notice>,
}

impl InventoryView {
    pub fn build(
        session_id: Uuid,
        variant: Variant,
        inventory: &Inventory,
        restock_threshold: usize,
        notices: Vec<Notice>,
    ) -> Self {
        let stock_level = inventory.stock_level(restock_threshold);
        let rows = inventory
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| ItemRow {
                position: i + 1,
                name: item.name.clone(),
                label: item.label(),
            })
            .collect();
        let empty_notice = inventory
            .is_empty()
            .then(|| Notice::error("The inventory is EMPTY! Add an item to get started."));

        Self {
            session_id,
            title: variant.title().to_string(),
            caption: "Inventory state is kept in memory for this session only.".to_string(),
            variant,
            count: inventory.len(),
            count_notice: Notice::info(format!("Items in stock: {}", inventory.len())),
            stock_level,
            stock_notice: stock_level.notice(),
            rows,
            notices,
            empty_notice,
        }
    }
}
