// menu_cart/src/cart/snapshot.rs

//! The persisted layout of a cart: `[{ id, quantity, specialInstructions }]`.
//!
//! Only ids travel; names and prices are looked up again in the catalog on
//! restore so a reload always shows current prices.

use crate::cart::engine::Cart;
use crate::model::line_item::LineItem;
use crate::model::menu_item::Menu;
use serde::{Deserialize, Serialize};
use tracing::{event, Level};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotEntry {
  pub id: String,
  pub quantity: u32,
  #[serde(default)]
  pub special_instructions: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartSnapshot(pub Vec<SnapshotEntry>);

impl CartSnapshot {
  pub fn entries(&self) -> &[SnapshotEntry] {
    &self.0
  }
}

/// What `Cart::restore` kept and what it had to leave out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RestoreReport {
  pub restored_lines: usize,
  /// Ids that are no longer on the menu.
  pub unknown_ids: Vec<String>,
  /// Entries dropped because their stored quantity was zero.
  pub empty_entries: usize,
}

impl Cart {
  pub fn snapshot(&self) -> CartSnapshot {
    CartSnapshot(
      self
        .items()
        .iter()
        .map(|line| SnapshotEntry {
          id: line.id().to_string(),
          quantity: line.quantity,
          special_instructions: line.special_instructions.clone(),
        })
        .collect(),
    )
  }

  /// Replaces the cart's contents with `snapshot`, resolving each id against
  /// `menu`. Repeated ids are merged (quantities summed, first note wins) so
  /// the restored cart still has one line per id. Any applied discount is
  /// dropped, since it was validated against the old contents.
  pub fn restore(&mut self, snapshot: &CartSnapshot, menu: &Menu) -> RestoreReport {
    let mut report = RestoreReport::default();
    let mut lines: Vec<LineItem> = Vec::with_capacity(snapshot.0.len());

    for entry in &snapshot.0 {
      if entry.quantity == 0 {
        report.empty_entries += 1;
        continue;
      }
      if let Some(existing) = lines.iter_mut().find(|line| line.id() == entry.id) {
        existing.quantity = existing.quantity.saturating_add(entry.quantity);
        continue;
      }
      match menu.find_item(&entry.id) {
        Some(item) => {
          let mut line = LineItem::new(item);
          line.quantity = entry.quantity;
          line.special_instructions = entry.special_instructions.clone();
          lines.push(line);
        }
        None if report.unknown_ids.contains(&entry.id) => {}
        None => {
          event!(Level::WARN, id = %entry.id, "Snapshot entry no longer on the menu, skipping.");
          report.unknown_ids.push(entry.id.clone());
        }
      }
    }

    report.restored_lines = lines.len();
    self.replace_items(lines);
    report
  }
}
