//! Grocery ordering: the store catalog, the in-memory cart, and recipe
//! expansion.

mod cart;
mod catalog;
mod recipes;

pub use cart::{Cart, CartLine, GroceryOrder, OrderLine};
pub use catalog::{find_item, CatalogItem};
pub use recipes::{recipe_for, recipe_names};
