//! Restaurant model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resto {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub phone: String,
    pub address: String,
    pub resto_lat: f64,
    pub resto_lng: f64,
}
