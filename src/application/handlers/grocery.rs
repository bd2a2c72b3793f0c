//! Grocery handlers - cart operations, recipe expansion, order placement

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};

use crate::domain::grocery::{recipe_for, recipe_names, Cart};
use crate::ports::{GroceryCatalog, SnapshotStore, SnapshotStoreError};

/// Error type for grocery operations
#[derive(Debug, thiserror::Error)]
pub enum GroceryError {
    #[error("Sorry, I couldn't find '{item}' in our catalog.")]
    ItemNotFound { item: String },

    #[error("Item '{item}' is not in your cart.")]
    NotInCart { item: String },

    #[error("I don't have a recipe for '{dish}' yet. I can help with {}.", .available.join(", "))]
    UnknownDish { dish: String, available: Vec<String> },

    #[error("Your cart is empty. I can't place an empty order.")]
    EmptyCart,

    #[error("Could not save the order: {0}")]
    Storage(#[from] SnapshotStoreError),
}

/// Handler adding catalog items to the cart.
pub struct AddToCartHandler {
    catalog: Arc<dyn GroceryCatalog>,
}

impl AddToCartHandler {
    pub fn new(catalog: Arc<dyn GroceryCatalog>) -> Self {
        Self { catalog }
    }

    /// Resolves `item_name` against the catalog and merges it into the
    /// cart, returning the spoken confirmation.
    ///
    /// # Errors
    ///
    /// `ItemNotFound` when nothing in the catalog matches; the cart is
    /// unchanged.
    pub async fn handle(
        &self,
        cart: &mut Cart,
        item_name: &str,
        quantity: u32,
    ) -> Result<String, GroceryError> {
        let item = self
            .catalog
            .resolve(item_name)
            .await
            .ok_or_else(|| GroceryError::ItemNotFound {
                item: item_name.to_string(),
            })?;
        cart.add(&item, quantity);
        Ok(format!("Added {} x {} to your cart.", quantity, item.name))
    }
}

/// Handler expanding a dish into its ingredients and carting them all.
pub struct AddIngredientsHandler {
    catalog: Arc<dyn GroceryCatalog>,
}

impl AddIngredientsHandler {
    pub fn new(catalog: Arc<dyn GroceryCatalog>) -> Self {
        Self { catalog }
    }

    /// Looks up the dish's recipe and adds each ingredient at quantity
    /// one. Ingredients missing from the catalog are skipped; the
    /// confirmation lists what actually went in.
    ///
    /// # Errors
    ///
    /// `UnknownDish` (listing the known dishes) when no recipe matches.
    pub async fn handle(&self, cart: &mut Cart, dish_name: &str) -> Result<String, GroceryError> {
        let (dish, ingredients) =
            recipe_for(dish_name).ok_or_else(|| GroceryError::UnknownDish {
                dish: dish_name.to_string(),
                available: recipe_names().into_iter().map(String::from).collect(),
            })?;

        let mut added: Vec<String> = Vec::new();
        for ingredient in ingredients {
            match self.catalog.resolve(ingredient).await {
                Some(item) => {
                    cart.add(&item, 1);
                    added.push(item.name);
                }
                None => {
                    tracing::warn!("Recipe ingredient not in catalog: {}", ingredient);
                }
            }
        }

        Ok(format!(
            "I've added the ingredients for {} to your cart: {}.",
            dish,
            added.join(", ")
        ))
    }
}

/// Removes the first cart line matching `item_name`, returning the spoken
/// confirmation.
///
/// # Errors
///
/// `NotInCart` when nothing in the cart matches; the cart is unchanged.
pub fn remove_from_cart(cart: &mut Cart, item_name: &str) -> Result<String, GroceryError> {
    match cart.remove_matching(item_name) {
        Some(removed) => Ok(format!("Removed {} from your cart.", removed)),
        None => Err(GroceryError::NotInCart {
            item: item_name.to_string(),
        }),
    }
}

/// The spoken cart listing with subtotals and the grand total.
pub fn view_cart(cart: &Cart) -> String {
    cart.itemized_summary()
}

/// Result of a placed order.
#[derive(Debug, Clone)]
pub struct GroceryOrderReceipt {
    pub order_id: String,
    pub total_amount: f64,
    pub saved_to: PathBuf,
}

/// Handler freezing the cart into a persisted order.
pub struct PlaceOrderHandler {
    snapshots: Arc<dyn SnapshotStore>,
}

impl PlaceOrderHandler {
    pub fn new(snapshots: Arc<dyn SnapshotStore>) -> Self {
        Self { snapshots }
    }

    /// Persists the cart as an order snapshot and clears the cart.
    ///
    /// # Errors
    ///
    /// `EmptyCart` when there is nothing to order; `Storage` leaves the
    /// cart intact so the order can be retried.
    pub async fn handle(&self, cart: &mut Cart) -> Result<GroceryOrderReceipt, GroceryError> {
        if cart.is_empty() {
            return Err(GroceryError::EmptyCart);
        }

        let order = cart.to_order(Utc::now());
        let payload: Map<String, Value> = match serde_json::to_value(&order) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                return Err(SnapshotStoreError::SerializationFailed(format!(
                    "order serialized to a non-object: {}",
                    other
                ))
                .into())
            }
            Err(e) => return Err(SnapshotStoreError::SerializationFailed(e.to_string()).into()),
        };

        let saved_to = self.snapshots.save("grocery_order", payload).await?;
        cart.clear();

        Ok(GroceryOrderReceipt {
            order_id: order.order_id,
            total_amount: order.total_amount,
            saved_to,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemorySnapshotStore, JsonGroceryCatalog};
    use tempfile::TempDir;

    fn seed_catalog(dir: &TempDir) -> Arc<JsonGroceryCatalog> {
        let path = dir.path().join("grocery_catalog.json");
        std::fs::write(
            &path,
            serde_json::json!([
                {"name": "Whole Wheat Bread", "price": 3.49},
                {"name": "Peanut Butter", "price": 5.99},
                {"name": "Strawberry Jam", "price": 4.25},
                {"name": "Organic Milk", "price": 4.99}
            ])
            .to_string(),
        )
        .unwrap();
        Arc::new(JsonGroceryCatalog::new(path))
    }

    #[tokio::test]
    async fn add_to_cart_resolves_and_confirms() {
        let temp_dir = TempDir::new().unwrap();
        let handler = AddToCartHandler::new(seed_catalog(&temp_dir));
        let mut cart = Cart::new();

        let reply = handler.handle(&mut cart, "peanut butter", 2).await.unwrap();
        assert_eq!(reply, "Added 2 x Peanut Butter to your cart.");
        assert_eq!(cart.lines().len(), 1);
    }

    #[tokio::test]
    async fn unknown_item_is_a_spoken_miss() {
        let temp_dir = TempDir::new().unwrap();
        let handler = AddToCartHandler::new(seed_catalog(&temp_dir));
        let mut cart = Cart::new();

        let err = handler.handle(&mut cart, "durian", 1).await.unwrap_err();
        assert!(err.to_string().contains("couldn't find 'durian'"));
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn recipe_expansion_carts_each_ingredient() {
        let temp_dir = TempDir::new().unwrap();
        let handler = AddIngredientsHandler::new(seed_catalog(&temp_dir));
        let mut cart = Cart::new();

        let reply = handler
            .handle(&mut cart, "a peanut butter sandwich for lunch")
            .await
            .unwrap();

        assert!(reply.contains("peanut butter sandwich"));
        assert_eq!(cart.lines().len(), 3);
        assert!(cart
            .lines()
            .iter()
            .any(|l| l.name == "Whole Wheat Bread" && l.quantity == 1));
    }

    #[tokio::test]
    async fn remove_and_view_follow_the_cart() {
        let temp_dir = TempDir::new().unwrap();
        let add = AddToCartHandler::new(seed_catalog(&temp_dir));
        let mut cart = Cart::new();

        add.handle(&mut cart, "strawberry jam", 1).await.unwrap();
        assert!(view_cart(&cart).contains("- Strawberry Jam (x1): $4.25"));

        let reply = remove_from_cart(&mut cart, "jam").unwrap();
        assert_eq!(reply, "Removed Strawberry Jam from your cart.");
        assert_eq!(view_cart(&cart), "Your cart is currently empty.");

        let err = remove_from_cart(&mut cart, "jam").unwrap_err();
        assert!(matches!(err, GroceryError::NotInCart { .. }));
    }

    #[tokio::test]
    async fn unknown_dish_lists_the_known_recipes() {
        let temp_dir = TempDir::new().unwrap();
        let handler = AddIngredientsHandler::new(seed_catalog(&temp_dir));
        let mut cart = Cart::new();

        let err = handler.handle(&mut cart, "lasagna").await.unwrap_err();
        assert!(err.to_string().contains("peanut butter sandwich"));
        assert!(err.to_string().contains("snack time"));
    }

    #[tokio::test]
    async fn place_order_persists_and_clears_the_cart() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = seed_catalog(&temp_dir);
        let snapshots = Arc::new(InMemorySnapshotStore::new());
        let add = AddToCartHandler::new(catalog);
        let place = PlaceOrderHandler::new(snapshots.clone());
        let mut cart = Cart::new();

        add.handle(&mut cart, "organic milk", 2).await.unwrap();
        let receipt = place.handle(&mut cart).await.unwrap();

        assert!(receipt.order_id.starts_with("ORD-"));
        assert!((receipt.total_amount - 9.98).abs() < 1e-9);
        assert!(cart.is_empty());

        let saves = snapshots.saves().await;
        assert_eq!(saves[0].0, "grocery_order");
        assert_eq!(saves[0].1["status"], "received");
        assert_eq!(saves[0].1["items"][0]["quantity"], 2);
    }

    #[tokio::test]
    async fn empty_cart_cannot_be_ordered() {
        let snapshots = Arc::new(InMemorySnapshotStore::new());
        let place = PlaceOrderHandler::new(snapshots);
        let mut cart = Cart::new();

        let err = place.handle(&mut cart).await.unwrap_err();
        assert!(matches!(err, GroceryError::EmptyCart));
    }
}
