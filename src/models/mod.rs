//! Record models for the synthetic Cheezy dataset.
//!
//! Field names serialize in camelCase to match the app's JSON documents.

mod dataset;
mod dish;
mod ids;
mod image;
mod location;
mod resto;
mod swipe;
mod user;

pub use dataset::*;
pub use dish::*;
pub use ids::*;
pub use image::*;
pub use location::*;
pub use resto::*;
pub use swipe::*;
pub use user::*;

/// Binary flags are stored as `0`/`1` in the app's documents.
pub(crate) mod flag {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(D::Error::custom(format!("expected 0 or 1, got {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_serialize_as_integers() {
        let swipe = Swipe {
            id: IdPrefix::Swipe.format(1),
            timestamp: chrono::NaiveDate::from_ymd_opt(2023, 5, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            user_id: IdPrefix::User.format(1),
            image_id: IdPrefix::User.format(2),
            swipe_left: true,
        };

        let value = serde_json::to_value(&swipe).unwrap();
        assert_eq!(value["swipeLeft"], 1);
        assert_eq!(value["timestamp"], "2023-05-01T12:00:00");

        let back: Swipe = serde_json::from_value(value).unwrap();
        assert!(back.swipe_left);
    }

    #[test]
    fn test_flag_rejects_other_integers() {
        let raw = serde_json::json!({
            "id": "S0000000001",
            "timestamp": "2023-05-01T12:00:00",
            "userId": "U0000000001",
            "imageId": "U0000000001",
            "swipeLeft": 2
        });
        assert!(serde_json::from_value::<Swipe>(raw).is_err());
    }
}
