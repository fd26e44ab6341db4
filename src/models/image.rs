//! Uploaded dish image model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: String,
    /// Image path with `/` separators
    pub file: String,
    pub dish_id: String,
    pub uploader_id: String,
    pub upload_dt: NaiveDateTime,
    pub tags: Vec<String>,
}
