//! Root document written by a generation run.

use serde::{Deserialize, Serialize};

use super::{Dish, Image, Location, Resto, Swipe, User};

/// All six collections, serialized as one JSON object in this field order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub users: Vec<User>,
    pub restos: Vec<Resto>,
    pub dishes: Vec<Dish>,
    pub images: Vec<Image>,
    pub swipes: Vec<Swipe>,
    pub locations: Vec<Location>,
}

impl Dataset {
    /// Top-level keys of the output document, in output order.
    pub const COLLECTIONS: [&'static str; 6] =
        ["users", "restos", "dishes", "images", "swipes", "locations"];

    /// Record count per collection, in output order.
    pub fn counts(&self) -> [(&'static str, usize); 6] {
        let lens = [
            self.users.len(),
            self.restos.len(),
            self.dishes.len(),
            self.images.len(),
            self.swipes.len(),
            self.locations.len(),
        ];
        std::array::from_fn(|i| (Self::COLLECTIONS[i], lens[i]))
    }
}
