//! Configuration module for the dataset generator.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::errors::GenError;

/// Which id scheme swipe records use for their `imageId` field.
///
/// The historical datasets were produced with the user prefix (`U...`) on
/// image references, and downstream consumers may rely on that shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwipeImageIds {
    /// `imageId` carries the user prefix, e.g. `U0000000003`
    #[default]
    Legacy,
    /// `imageId` carries the image prefix, e.g. `I0000000003`
    Image,
}

impl FromStr for SwipeImageIds {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(SwipeImageIds::Legacy),
            "image" => Ok(SwipeImageIds::Image),
            other => Err(format!("expected `legacy` or `image`, got `{}`", other)),
        }
    }
}

/// Generator configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory whose files become image records
    pub image_dir: PathBuf,
    /// Number of users
    pub n_users: usize,
    /// Number of restaurants
    pub n_restos: usize,
    /// Dishes generated per restaurant
    pub n_dishes: usize,
    /// Upper bound on cuisines a user is interested in
    pub max_cuisines: usize,
    /// Exclusive upper bound on tags per image
    pub max_tags: usize,
    /// Number of swipe events
    pub n_swipes: usize,
    /// Number of geofence events
    pub n_locations: usize,
    /// Path of the JSON file written at the end of the run
    pub output_path: PathBuf,
    /// Seed for the randomization context
    pub seed: u64,
    /// Reference "now" that all generated dates are relative to
    pub anchor: NaiveDateTime,
    /// Id prefix swipe records use for `imageId`
    pub swipe_image_ids: SwipeImageIds,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from("data/images"),
            n_users: 100,
            n_restos: 50,
            n_dishes: 10,
            max_cuisines: 5,
            max_tags: 5,
            n_swipes: 1_000_000,
            n_locations: 1_000_000,
            output_path: PathBuf::from("data/cheezy_data.json"),
            seed: 123,
            anchor: Utc::now().date_naive().and_time(NaiveTime::MIN),
            swipe_image_ids: SwipeImageIds::Legacy,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, GenError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, falling back to defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Self, GenError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            image_dir: lookup("CHEEZY_IMAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.image_dir),
            n_users: parse_var(&lookup, "CHEEZY_USERS", defaults.n_users)?,
            n_restos: parse_var(&lookup, "CHEEZY_RESTOS", defaults.n_restos)?,
            n_dishes: parse_var(&lookup, "CHEEZY_DISHES_PER_RESTO", defaults.n_dishes)?,
            max_cuisines: parse_var(&lookup, "CHEEZY_MAX_CUISINES", defaults.max_cuisines)?,
            max_tags: parse_var(&lookup, "CHEEZY_MAX_TAGS", defaults.max_tags)?,
            n_swipes: parse_var(&lookup, "CHEEZY_SWIPES", defaults.n_swipes)?,
            n_locations: parse_var(&lookup, "CHEEZY_LOCATIONS", defaults.n_locations)?,
            output_path: lookup("CHEEZY_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            seed: parse_var(&lookup, "CHEEZY_SEED", defaults.seed)?,
            anchor: match lookup("CHEEZY_ANCHOR") {
                Some(raw) => parse_anchor(&raw)?,
                None => defaults.anchor,
            },
            swipe_image_ids: parse_var(
                &lookup,
                "CHEEZY_SWIPE_IMAGE_IDS",
                defaults.swipe_image_ids,
            )?,
            log_level: lookup("CHEEZY_LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: parse_var(&lookup, "CHEEZY_LOG_JSON", defaults.log_json)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject bounds that leave no valid range to draw from.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.max_cuisines == 0 {
            return Err(GenError::Config(
                "max_cuisines must be at least 1".to_string(),
            ));
        }
        if self.max_tags == 0 {
            return Err(GenError::Config("max_tags must be at least 1".to_string()));
        }
        if self.anchor.and_utc().timestamp() < 0 {
            return Err(GenError::Config(format!(
                "anchor {} is before 1970-01-01, timestamps start at the Unix epoch",
                self.anchor
            )));
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, GenError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| GenError::Config(format!("{}: {}", key, e))),
        None => Ok(default),
    }
}

/// Accepts `YYYY-MM-DDTHH:MM:SS` or a bare `YYYY-MM-DD` (midnight).
fn parse_anchor(raw: &str) -> Result<NaiveDateTime, GenError> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN)))
        .map_err(|e| GenError::Config(format!("CHEEZY_ANCHOR: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::from_vars(|_| None).unwrap();

        assert_eq!(config.image_dir, PathBuf::from("data/images"));
        assert_eq!(config.n_users, 100);
        assert_eq!(config.n_restos, 50);
        assert_eq!(config.n_dishes, 10);
        assert_eq!(config.max_cuisines, 5);
        assert_eq!(config.max_tags, 5);
        assert_eq!(config.n_swipes, 1_000_000);
        assert_eq!(config.n_locations, 1_000_000);
        assert_eq!(config.output_path, PathBuf::from("data/cheezy_data.json"));
        assert_eq!(config.seed, 123);
        assert_eq!(config.anchor.time(), NaiveTime::MIN);
        assert_eq!(config.swipe_image_ids, SwipeImageIds::Legacy);
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(lookup_from(&[
            ("CHEEZY_USERS", "2"),
            ("CHEEZY_SWIPES", " 3 "),
            ("CHEEZY_OUTPUT", "/tmp/out.json"),
            ("CHEEZY_ANCHOR", "2023-05-17T08:30:00"),
            ("CHEEZY_SWIPE_IMAGE_IDS", "Image"),
            ("CHEEZY_LOG_JSON", "true"),
        ]))
        .unwrap();

        assert_eq!(config.n_users, 2);
        assert_eq!(config.n_swipes, 3);
        assert_eq!(config.output_path, PathBuf::from("/tmp/out.json"));
        assert_eq!(config.anchor.to_string(), "2023-05-17 08:30:00");
        assert_eq!(config.swipe_image_ids, SwipeImageIds::Image);
        assert!(config.log_json);
    }

    #[test]
    fn test_date_only_anchor_is_midnight() {
        let config = Config::from_vars(lookup_from(&[("CHEEZY_ANCHOR", "2023-05-17")])).unwrap();
        assert_eq!(config.anchor.to_string(), "2023-05-17 00:00:00");
    }

    #[test]
    fn test_invalid_number_names_variable() {
        let err = Config::from_vars(lookup_from(&[("CHEEZY_RESTOS", "many")])).unwrap_err();
        assert!(matches!(err, GenError::Config(ref msg) if msg.starts_with("CHEEZY_RESTOS")));
    }

    #[test]
    fn test_zero_bounds_rejected() {
        assert!(Config::from_vars(lookup_from(&[("CHEEZY_MAX_TAGS", "0")])).is_err());
        assert!(Config::from_vars(lookup_from(&[("CHEEZY_MAX_CUISINES", "0")])).is_err());
    }

    #[test]
    fn test_anchor_before_epoch_rejected() {
        let err = Config::from_vars(lookup_from(&[("CHEEZY_ANCHOR", "1960-01-01")])).unwrap_err();
        assert!(matches!(err, GenError::Config(ref msg) if msg.contains("1960-01-01")));

        let config = Config::from_vars(lookup_from(&[("CHEEZY_ANCHOR", "1970-01-01")])).unwrap();
        assert_eq!(config.anchor.to_string(), "1970-01-01 00:00:00");
    }
}
