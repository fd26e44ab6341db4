//! Users and restaurants.

use std::collections::BTreeSet;

use chrono::Duration;
use fake::faker::address::en::CountryName;
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{FreeEmail, Username};
use fake::faker::job::en::Title;
use fake::Fake;
use rand::Rng;

use super::{food, locale, Generator};
use crate::models::{IdPrefix, Resto, Sex, User};

/// Oldest birthdate offered, in days before the anchor.
const MAX_AGE_DAYS: i64 = 115 * 365;

impl Generator<'_> {
    pub(super) fn users(&mut self) -> Vec<User> {
        (0..self.config.n_users).map(|i| self.user(i)).collect()
    }

    fn user(&mut self, index: usize) -> User {
        let sex = if self.rng.gen_bool(0.5) {
            Sex::Female
        } else {
            Sex::Male
        };
        let name = locale::full_name(&mut self.rng, sex);
        let username: String = Username().fake_with_rng(&mut self.rng);
        let address = locale::address(&mut self.rng);
        let mail: String = FreeEmail().fake_with_rng(&mut self.rng);

        let today = self.clock.now.date();
        let birthdate = self.date_between(today - Duration::days(MAX_AGE_DAYS), today);
        let create_date = self.date_between(self.clock.month_start.date(), today);

        let n_cuisines = self.rng.gen_range(1..=self.config.max_cuisines);
        let cuisines: BTreeSet<String> = (0..n_cuisines)
            .map(|_| food::ethnic_category(&mut self.rng))
            .collect();

        User {
            id: IdPrefix::User.nth(index),
            username,
            name,
            sex,
            address,
            mail,
            birthdate,
            create_date,
            interested_cuisines: cuisines.into_iter().collect(),
            phone: locale::phone_number(&mut self.rng),
            nationality: CountryName().fake_with_rng(&mut self.rng),
            occupation: Title().fake_with_rng(&mut self.rng),
            home_lat: self.latitude(),
            home_lng: self.longitude(),
        }
    }

    pub(super) fn restos(&mut self) -> Vec<Resto> {
        (0..self.config.n_restos)
            .map(|index| Resto {
                id: IdPrefix::Resto.nth(index),
                name: CompanyName().fake_with_rng(&mut self.rng),
                cuisine: food::ethnic_category(&mut self.rng),
                phone: locale::phone_number(&mut self.rng),
                address: locale::address(&mut self.rng),
                resto_lat: self.latitude(),
                resto_lng: self.longitude(),
            })
            .collect()
    }
}
