//! Swipe interaction model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A left/right swipe by a user on a shown image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Swipe {
    pub id: String,
    pub timestamp: NaiveDateTime,
    pub user_id: String,
    /// See [`crate::config::SwipeImageIds`] for the prefix this carries.
    pub image_id: String,
    #[serde(with = "super::flag")]
    pub swipe_left: bool,
}
