//! Deterministic record generation.
//!
//! A [`Generator`] owns the only source of randomness for a run. Collections
//! are produced in a fixed order (users, restos, dishes, images, swipes,
//! locations) and every draw happens in call order, so the same seed, anchor
//! and image directory always produce the same dataset. Reordering any step
//! changes every value generated after it.

mod events;
mod food;
mod locale;
mod media;
mod menu;
mod profiles;

pub use media::list_image_files;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::errors::GenError;
use crate::models::Dataset;

/// Reference points derived from the configured anchor.
#[derive(Debug, Clone, Copy)]
struct Clock {
    now: NaiveDateTime,
    month_start: NaiveDateTime,
    epoch: NaiveDateTime,
}

impl Clock {
    fn new(now: NaiveDateTime) -> Self {
        let month_start = now.date().with_day(1).unwrap_or(now.date());
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN);
        Self {
            now,
            month_start: month_start.and_time(NaiveTime::MIN),
            epoch: epoch.and_time(NaiveTime::MIN),
        }
    }
}

/// Randomization context for one generation pass.
pub struct Generator<'a> {
    config: &'a Config,
    rng: StdRng,
    clock: Clock,
}

/// List the image directory and run a full generation pass.
pub fn simulate(config: &Config) -> Result<Dataset, GenError> {
    config.validate()?;
    let image_files = list_image_files(&config.image_dir)?;
    tracing::info!(
        "Found {} image files in {:?}",
        image_files.len(),
        config.image_dir
    );
    Generator::new(config).generate(&image_files)
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(config.seed),
            clock: Clock::new(config.anchor),
        }
    }

    /// Build every collection, linking images to `image_files` in order.
    pub fn generate(mut self, image_files: &[String]) -> Result<Dataset, GenError> {
        let users = self.users();
        tracing::debug!(records = users.len(), "Generated users");

        let restos = self.restos();
        tracing::debug!(records = restos.len(), "Generated restos");

        let dishes = self.dishes();
        tracing::debug!(records = dishes.len(), "Generated dishes");

        let images = self.images(image_files)?;
        tracing::debug!(records = images.len(), "Generated images");

        let swipes = self.swipes(images.len())?;
        tracing::debug!(records = swipes.len(), "Generated swipes");

        let locations = self.locations();
        tracing::debug!(records = locations.len(), "Generated locations");

        Ok(Dataset {
            users,
            restos,
            dishes,
            images,
            swipes,
            locations,
        })
    }

    /// Uniform coordinate in `[-bound, bound]`, rounded to 6 decimals.
    fn coordinate(&mut self, bound: f64) -> f64 {
        let value: f64 = self.rng.gen_range(-bound..=bound);
        (value * 1e6).round() / 1e6
    }

    fn latitude(&mut self) -> f64 {
        self.coordinate(90.0)
    }

    fn longitude(&mut self) -> f64 {
        self.coordinate(180.0)
    }

    fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let span = (end - start).num_days().max(0);
        start + Duration::days(self.rng.gen_range(0..=span))
    }

    fn datetime_between(&mut self, start: NaiveDateTime, end: NaiveDateTime) -> NaiveDateTime {
        let span = (end - start).num_seconds().max(0);
        start + Duration::seconds(self.rng.gen_range(0..=span))
    }
}
