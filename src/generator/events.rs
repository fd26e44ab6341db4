//! Swipe and geofence event streams.

use fake::faker::lorem::en::Word;
use fake::faker::number::en::NumberWithFormat;
use fake::Fake;
use rand::Rng;

use super::Generator;
use crate::config::SwipeImageIds;
use crate::errors::GenError;
use crate::models::{EventType, GeofenceType, IdPrefix, Location, Swipe};

const MAX_RADIUS: u32 = 1000;

impl Generator<'_> {
    /// Swipes on uniformly random users and images among `n_images`.
    pub(super) fn swipes(&mut self, n_images: usize) -> Result<Vec<Swipe>, GenError> {
        let n_swipes = self.config.n_swipes;
        if n_swipes == 0 {
            return Ok(Vec::new());
        }
        if self.config.n_users == 0 || n_images == 0 {
            return Err(GenError::MissingReference(format!(
                "{} swipes need at least one user and one image (have {} users, {} images)",
                n_swipes, self.config.n_users, n_images
            )));
        }

        let image_prefix = match self.config.swipe_image_ids {
            SwipeImageIds::Legacy => IdPrefix::User,
            SwipeImageIds::Image => IdPrefix::Image,
        };

        let mut swipes = Vec::with_capacity(n_swipes);
        for index in 0..n_swipes {
            let timestamp = self.datetime_between(self.clock.epoch, self.clock.now);
            let user_id = IdPrefix::User.nth(self.rng.gen_range(0..self.config.n_users));
            let image_id = image_prefix.nth(self.rng.gen_range(0..n_images));
            swipes.push(Swipe {
                id: IdPrefix::Swipe.nth(index),
                timestamp,
                user_id,
                image_id,
                swipe_left: self.rng.gen_bool(0.5),
            });
        }

        Ok(swipes)
    }

    pub(super) fn locations(&mut self) -> Vec<Location> {
        let mut locations = Vec::with_capacity(self.config.n_locations);
        for index in 0..self.config.n_locations {
            let event_type = EventType::ALL[self.rng.gen_range(0..EventType::ALL.len())];
            let event_lat = self.latitude();
            let event_lng = self.longitude();
            let timestamp = self.datetime_between(self.clock.epoch, self.clock.now);
            let geofence_id: String = NumberWithFormat("###-##-####").fake_with_rng(&mut self.rng);
            let geofence_type = GeofenceType::ALL[self.rng.gen_range(0..GeofenceType::ALL.len())];
            let geofence_name: String = Word().fake_with_rng(&mut self.rng);

            locations.push(Location {
                id: IdPrefix::Location.nth(index),
                event_type,
                event_lat,
                event_lng,
                timestamp,
                geofence_id,
                geofence_type,
                geofence_name,
                radius: self.rng.gen_range(1..=MAX_RADIUS),
                geofence_lat: self.latitude(),
                geofence_lng: self.longitude(),
            });
        }
        locations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn config(swipe_image_ids: SwipeImageIds) -> Config {
        Config {
            n_users: 5,
            n_swipes: 300,
            n_locations: 300,
            swipe_image_ids,
            ..Config::default()
        }
    }

    #[test]
    fn test_legacy_swipes_use_user_prefix_for_images() {
        let config = config(SwipeImageIds::Legacy);
        let swipes = Generator::new(&config).swipes(4).unwrap();
        assert_eq!(swipes.len(), 300);
        for swipe in &swipes {
            let image = IdPrefix::User.parse(&swipe.image_id).unwrap();
            assert!((1..=4).contains(&image));
            let user = IdPrefix::User.parse(&swipe.user_id).unwrap();
            assert!((1..=5).contains(&user));
        }
        assert!(swipes.iter().any(|s| s.swipe_left));
        assert!(swipes.iter().any(|s| !s.swipe_left));
    }

    #[test]
    fn test_image_prefix_swipes() {
        let config = config(SwipeImageIds::Image);
        let swipes = Generator::new(&config).swipes(4).unwrap();
        assert!(swipes
            .iter()
            .all(|s| IdPrefix::Image.parse(&s.image_id).is_some()));
        assert_eq!(swipes[299].id, "S0000000300");
    }

    #[test]
    fn test_swipes_without_images_fail() {
        let config = config(SwipeImageIds::Legacy);
        let err = Generator::new(&config).swipes(0).unwrap_err();
        assert!(matches!(err, GenError::MissingReference(_)));
    }

    #[test]
    fn test_location_fields_in_range() {
        let config = config(SwipeImageIds::Legacy);
        let locations = Generator::new(&config).locations();
        assert_eq!(locations.len(), 300);
        for (i, loc) in locations.iter().enumerate() {
            assert_eq!(IdPrefix::Location.parse(&loc.id), Some(i as u64 + 1));
            assert!((1..=MAX_RADIUS).contains(&loc.radius));
            assert!(loc.timestamp <= config.anchor);
            assert_eq!(loc.geofence_id.len(), 11);
            assert_eq!(loc.geofence_id.matches('-').count(), 2);
        }
    }
}
