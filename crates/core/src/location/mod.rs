//! GPS breadcrumb trail of an on-site inspection.
//!
//! This module implements periodic location sampling:
//! - Location points and the trail they accumulate into
//! - The host position capability as a provider trait
//! - A recorder with an explicit start/stop lifecycle and a recurring tick
//! - A replay provider for recorded positions
//!
//! State machine: `Idle -> start -> Active -> stop -> Idle`. Re-entering
//! `Active` clears the points. There is no paused state.

mod error;
mod provider;
mod recorder;
mod types;

#[cfg(test)]
mod recorder_props;

pub use error::{PositionError, TrackingError};
pub use provider::{PositionProvider, ReplayProvider};
pub use recorder::{LocationTrailRecorder, RecorderSettings, TrailEvent};
pub use types::{LocationPoint, LocationTrail, Position, PositionOptions, TrailPayload};
