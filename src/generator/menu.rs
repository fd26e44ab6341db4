//! Dishes, generated per restaurant.

use std::collections::BTreeSet;

use rand::Rng;

use super::{food, Generator};
use crate::models::{dish_number, Dish, IdPrefix};

const MAX_INGREDIENTS: usize = 10;
const VEGAN_PROBABILITY: f64 = 0.1;
const VEGETARIAN_PROBABILITY: f64 = 0.3;

impl Generator<'_> {
    pub(super) fn dishes(&mut self) -> Vec<Dish> {
        let per_resto = self.config.n_dishes;
        let mut dishes = Vec::with_capacity(self.config.n_restos * per_resto);

        for resto_index in 0..self.config.n_restos {
            let restaurant_id = IdPrefix::Resto.nth(resto_index);
            for dish_index in 0..per_resto {
                let number = dish_number(per_resto, resto_index, dish_index);
                dishes.push(self.dish(number, &restaurant_id));
            }
        }

        dishes
    }

    fn dish(&mut self, number: u64, restaurant_id: &str) -> Dish {
        let name = food::dish(&mut self.rng);
        let description = food::dish_description(&mut self.rng);

        let n_ingredients = self.rng.gen_range(1..=MAX_INGREDIENTS);
        let ingredients: BTreeSet<String> = (0..n_ingredients)
            .map(|_| food::ingredient(&mut self.rng))
            .collect();

        Dish {
            id: IdPrefix::Dish.format(number),
            name,
            description,
            ingredients: ingredients.into_iter().collect(),
            vegan: self.rng.gen_bool(VEGAN_PROBABILITY),
            vegetarian: self.rng.gen_bool(VEGETARIAN_PROBABILITY),
            restaurant_id: restaurant_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::config::Config;

    #[test]
    fn test_dish_ids_are_unique_and_linked() {
        let config = Config {
            n_restos: 6,
            n_dishes: 4,
            ..Config::default()
        };
        let dishes = Generator::new(&config).dishes();
        assert_eq!(dishes.len(), 24);

        let ids: HashSet<_> = dishes.iter().map(|d| d.id.clone()).collect();
        assert_eq!(ids.len(), 24);

        for (k, dish) in dishes.iter().enumerate() {
            assert_eq!(IdPrefix::Dish.parse(&dish.id), Some(k as u64 + 1));
            assert_eq!(dish.restaurant_id, IdPrefix::Resto.nth(k / 4));
        }
    }

    #[test]
    fn test_ingredients_are_distinct_and_bounded() {
        let config = Config {
            n_restos: 10,
            n_dishes: 10,
            ..Config::default()
        };
        for dish in Generator::new(&config).dishes() {
            let n = dish.ingredients.len();
            assert!((1..=MAX_INGREDIENTS).contains(&n));
            let distinct: HashSet<_> = dish.ingredients.iter().collect();
            assert_eq!(distinct.len(), n);
        }
    }

    #[test]
    fn test_diet_flags_are_independent() {
        let config = Config {
            n_restos: 100,
            n_dishes: 10,
            seed: 123,
            ..Config::default()
        };
        let dishes = Generator::new(&config).dishes();
        assert_eq!(dishes.len(), 1000);

        let vegan = dishes.iter().filter(|d| d.vegan).count();
        let vegetarian = dishes.iter().filter(|d| d.vegetarian).count();
        let both = dishes.iter().filter(|d| d.vegan && d.vegetarian).count();

        assert!(both > 0, "no dish is both vegan and vegetarian");
        assert!((50..=150).contains(&vegan), "vegan rate {} / 1000", vegan);
        assert!((230..=370).contains(&vegetarian), "vegetarian rate {} / 1000", vegetarian);
    }

    #[test]
    fn test_no_dishes_without_restaurants() {
        let config = Config {
            n_restos: 0,
            ..Config::default()
        };
        assert!(Generator::new(&config).dishes().is_empty());
    }
}
