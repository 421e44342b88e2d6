//! Location domain types.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fix as reported by the host position capability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Horizontal accuracy in meters.
    #[serde(default)]
    pub accuracy: Option<f64>,
    /// Altitude in meters.
    #[serde(default)]
    pub altitude: Option<f64>,
    /// Ground speed in meters per second.
    #[serde(default)]
    pub speed: Option<f64>,
    /// Heading in degrees clockwise from true north.
    #[serde(default)]
    pub heading: Option<f64>,
}

impl Position {
    /// Creates a fix with only coordinates.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy: None,
            altitude: None,
            speed: None,
            heading: None,
        }
    }
}

/// Options passed with every position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    /// Ask for the most accurate fix the host can provide.
    pub high_accuracy: bool,
    /// Maximum time to wait for a fix.
    pub timeout: Duration,
    /// Maximum age of a cached fix the host may return instead.
    pub max_cached_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(15),
            max_cached_age: Duration::from_secs(60),
        }
    }
}

/// One recorded GPS sample. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationPoint {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Horizontal accuracy in meters.
    pub accuracy: Option<f64>,
    /// Altitude in meters.
    pub altitude: Option<f64>,
    /// Ground speed in meters per second.
    pub speed: Option<f64>,
    /// Heading in degrees.
    pub heading: Option<f64>,
    /// When the sample was captured.
    pub timestamp: DateTime<Utc>,
}

impl LocationPoint {
    /// Stamps a host fix with its capture time.
    #[must_use]
    pub fn from_position(position: &Position, timestamp: DateTime<Utc>) -> Self {
        Self {
            latitude: position.latitude,
            longitude: position.longitude,
            accuracy: position.accuracy,
            altitude: position.altitude,
            speed: position.speed,
            heading: position.heading,
            timestamp,
        }
    }
}

/// The ordered samples of one inspection session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationTrail {
    /// Samples in capture order.
    pub points: Vec<LocationPoint>,
    /// When tracking started.
    pub started_at: Option<DateTime<Utc>>,
    /// When tracking stopped.
    pub ended_at: Option<DateTime<Utc>>,
    /// Whether the recorder is currently sampling.
    pub is_active: bool,
}

impl LocationTrail {
    /// Number of recorded points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no point was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The first recorded point.
    #[must_use]
    pub fn first_point(&self) -> Option<&LocationPoint> {
        self.points.first()
    }

    /// The most recent point.
    #[must_use]
    pub fn last_point(&self) -> Option<&LocationPoint> {
        self.points.last()
    }

    /// One-line description, e.g. `3 points | 2026-03-01 09:15 to 2026-03-01 10:02`.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.points.is_empty() {
            return "No location data".to_string();
        }

        let fmt = |ts: Option<DateTime<Utc>>| {
            ts.map_or_else(
                || "N/A".to_string(),
                |t| t.format("%Y-%m-%d %H:%M").to_string(),
            )
        };

        format!(
            "{} points | {} to {}",
            self.points.len(),
            fmt(self.started_at),
            fmt(self.ended_at)
        )
    }
}

/// Location fields of the inspection submission payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrailPayload {
    /// Recorded points in capture order.
    #[serde(default)]
    pub location_points: Vec<LocationPoint>,
    /// When tracking started.
    #[serde(default)]
    pub location_start_time: Option<DateTime<Utc>>,
    /// When tracking stopped.
    #[serde(default)]
    pub location_end_time: Option<DateTime<Utc>>,
    /// Always equal to `location_points.len()`.
    #[serde(default)]
    pub total_location_points: usize,
}

impl From<LocationTrail> for TrailPayload {
    fn from(trail: LocationTrail) -> Self {
        Self {
            total_location_points: trail.points.len(),
            location_points: trail.points,
            location_start_time: trail.started_at,
            location_end_time: trail.ended_at,
        }
    }
}

impl From<TrailPayload> for LocationTrail {
    fn from(payload: TrailPayload) -> Self {
        Self {
            points: payload.location_points,
            started_at: payload.location_start_time,
            ended_at: payload.location_end_time,
            is_active: false,
        }
    }
}
