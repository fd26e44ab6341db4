//! Geofence event model.
//!
//! Mirrors the field set of Foursquare's geofence event schema.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// What the device did relative to the geofence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EventType {
    GeofenceEnter,
    GeofenceDwell,
    GeofencePresence,
    GeofenceExit,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::GeofenceEnter,
        EventType::GeofenceDwell,
        EventType::GeofencePresence,
        EventType::GeofenceExit,
    ];

    #[cfg(test)]
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::GeofenceEnter => "geofenceEnter",
            EventType::GeofenceDwell => "geofenceDwell",
            EventType::GeofencePresence => "geofencePresence",
            EventType::GeofenceExit => "geofenceExit",
        }
    }
}

/// How the geofence boundary is defined.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GeofenceType {
    Venue,
    Chain,
    Category,
    Circle,
    Polygon,
}

impl GeofenceType {
    pub const ALL: [GeofenceType; 5] = [
        GeofenceType::Venue,
        GeofenceType::Chain,
        GeofenceType::Category,
        GeofenceType::Circle,
        GeofenceType::Polygon,
    ];

    #[cfg(test)]
    pub fn as_str(&self) -> &'static str {
        match self {
            GeofenceType::Venue => "venue",
            GeofenceType::Chain => "chain",
            GeofenceType::Category => "category",
            GeofenceType::Circle => "circle",
            GeofenceType::Polygon => "polygon",
        }
    }
}

/// A single geofence trigger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub event_type: EventType,
    pub event_lat: f64,
    pub event_lng: f64,
    pub timestamp: NaiveDateTime,
    pub geofence_id: String,
    pub geofence_type: GeofenceType,
    pub geofence_name: String,
    /// Meters, in `1..=1000`
    pub radius: u32,
    pub geofence_lat: f64,
    pub geofence_lng: f64,
}
