//! The fixed dish-to-ingredients mapping.

use once_cell::sync::Lazy;

static RECIPES: Lazy<Vec<(&'static str, Vec<&'static str>)>> = Lazy::new(|| {
    vec![
        (
            "peanut butter sandwich",
            vec!["Whole Wheat Bread", "Peanut Butter", "Strawberry Jam"],
        ),
        (
            "pasta",
            vec!["Spaghetti Pasta", "Tomato Basil Sauce", "Cheddar Cheese"],
        ),
        (
            "breakfast",
            vec!["Whole Wheat Bread", "Free-Range Eggs (Dozen)", "Organic Milk"],
        ),
        ("snack time", vec!["Potato Chips", "Chocolate Chip Cookies"]),
    ]
});

/// Looks up the ingredient list for a dish.
///
/// A recipe matches when its key appears anywhere in the (lowercased) dish
/// name, so "a quick peanut butter sandwich" still resolves.
pub fn recipe_for(dish_name: &str) -> Option<(&'static str, &'static [&'static str])> {
    let dish = dish_name.to_lowercase();
    RECIPES
        .iter()
        .find(|(key, _)| dish.contains(key))
        .map(|(key, ingredients)| (*key, ingredients.as_slice()))
}

/// The dish names the engine knows recipes for.
pub fn recipe_names() -> Vec<&'static str> {
    RECIPES.iter().map(|(key, _)| *key).collect()
}
