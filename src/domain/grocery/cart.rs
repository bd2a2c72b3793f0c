//! The in-memory grocery cart and the persisted order payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CatalogItem;

/// One line in the cart: a catalog item at a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl CartLine {
    /// Line subtotal.
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// The cart accumulated over one grocery interaction.
///
/// Lines keep insertion order; adding an item already in the cart merges
/// quantities instead of adding a second line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resolved catalog item, merging with an existing line.
    pub fn add(&mut self, item: &CatalogItem, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.name == item.name) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine {
                name: item.name.clone(),
                quantity,
                unit_price: item.price,
            });
        }
    }

    /// Removes the first line whose name contains `query` (case-insensitive).
    ///
    /// Returns the removed line's name, or `None` when nothing in the cart
    /// matches.
    pub fn remove_matching(&mut self, query: &str) -> Option<String> {
        let query = query.to_lowercase();
        let idx = self
            .lines
            .iter()
            .position(|l| l.name.to_lowercase().contains(&query))?;
        Some(self.lines.remove(idx).name)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line subtotals.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Itemized, user-facing cart listing with a grand total.
    pub fn itemized_summary(&self) -> String {
        if self.lines.is_empty() {
            return "Your cart is currently empty.".to_string();
        }
        let mut summary = String::from("Here is what's in your cart:\n");
        for line in &self.lines {
            summary.push_str(&format!(
                "- {} (x{}): ${:.2}\n",
                line.name,
                line.quantity,
                line.subtotal()
            ));
        }
        summary.push_str(&format!("\nTotal: ${:.2}", self.total()));
        summary
    }

    /// Freezes the cart into a persistable order stamped at `at`.
    ///
    /// The caller clears or drops the cart after the order is persisted; an
    /// order id is derived from the timestamp's unix seconds.
    pub fn to_order(&self, at: DateTime<Utc>) -> GroceryOrder {
        GroceryOrder {
            order_id: format!("ORD-{}", at.timestamp()),
            timestamp: at,
            items: self
                .lines
                .iter()
                .map(|line| OrderLine {
                    name: line.name.clone(),
                    quantity: line.quantity,
                    price: line.unit_price,
                    subtotal: line.subtotal(),
                })
                .collect(),
            total_amount: self.total(),
            status: "received".to_string(),
        }
    }

    /// Empties the cart after a placed order.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// One line of a persisted grocery order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub subtotal: f64,
}

/// The persisted grocery order artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryOrder {
    pub order_id: String,
    pub timestamp: DateTime<Utc>,
    pub items: Vec<OrderLine>,
    pub total_amount: f64,
    pub status: String,
}
