//! Dish model.

use serde::{Deserialize, Serialize};

/// A menu item offered by one restaurant.
///
/// `vegan` and `vegetarian` are drawn independently, so both may be set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Distinct ingredients, sorted
    pub ingredients: Vec<String>,
    #[serde(with = "super::flag")]
    pub vegan: bool,
    #[serde(with = "super::flag")]
    pub vegetarian: bool,
    pub restaurant_id: String,
}
