//! User profile model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Profile sex marker as it appears in the app's documents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

/// An app user with a home location and cuisine preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    pub sex: Sex,
    pub address: String,
    pub mail: String,
    pub birthdate: NaiveDate,
    pub create_date: NaiveDate,
    /// Distinct cuisine categories, sorted
    pub interested_cuisines: Vec<String>,
    pub phone: String,
    pub nationality: String,
    pub occupation: String,
    pub home_lat: f64,
    pub home_lng: f64,
}
