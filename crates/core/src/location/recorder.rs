//! Periodic location trail recorder.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use inspecta_shared::TrackingConfig;

use super::error::{PositionError, TrackingError};
use super::provider::PositionProvider;
use super::types::{LocationPoint, LocationTrail, PositionOptions};

const EVENT_CAPACITY: usize = 64;

/// Sampling settings of a recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecorderSettings {
    /// Time between two samples. The first sample is taken on start.
    pub interval: Duration,
    /// Options passed with every position request.
    pub options: PositionOptions,
}

impl Default for RecorderSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(300),
            options: PositionOptions::default(),
        }
    }
}

impl From<&TrackingConfig> for RecorderSettings {
    fn from(config: &TrackingConfig) -> Self {
        Self {
            interval: Duration::from_secs(config.interval_secs.max(1)),
            options: PositionOptions {
                high_accuracy: config.high_accuracy,
                timeout: Duration::from_secs(config.timeout_secs),
                max_cached_age: Duration::from_secs(config.max_cached_age_secs),
            },
        }
    }
}

/// Lifecycle notifications published by a recorder.
#[derive(Debug, Clone, PartialEq)]
pub enum TrailEvent {
    /// A new trail was started.
    Started {
        /// Start time of the trail.
        started_at: DateTime<Utc>,
    },
    /// A sample was appended to the trail.
    PointRecorded(LocationPoint),
    /// A sample failed. The trail stays active.
    SampleFailed(PositionError),
    /// The trail was stopped.
    Stopped {
        /// Points recorded in the trail.
        total_points: usize,
        /// End time of the trail.
        ended_at: DateTime<Utc>,
    },
}

struct TrailState {
    trail: LocationTrail,
    /// Bumped on every start so late results of an earlier trail are dropped.
    generation: u64,
}

struct Shared<P> {
    provider: P,
    settings: RecorderSettings,
    state: Mutex<TrailState>,
    events: broadcast::Sender<TrailEvent>,
}

impl<P: PositionProvider> Shared<P> {
    fn lock(&self) -> MutexGuard<'_, TrailState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_current(&self, generation: u64) -> bool {
        let state = self.lock();
        state.trail.is_active && state.generation == generation
    }

    fn emit(&self, event: TrailEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    async fn sample(&self, generation: u64) -> Result<Option<LocationPoint>, PositionError> {
        let timeout = self.settings.options.timeout;
        let request = self.provider.current_position(&self.settings.options);
        let outcome = match tokio::time::timeout(timeout, request).await {
            Ok(outcome) => outcome,
            Err(_) => Err(PositionError::Timeout(timeout)),
        };

        match outcome {
            Ok(position) => {
                let point = LocationPoint::from_position(&position, Utc::now());
                let total = {
                    let mut state = self.lock();
                    if !state.trail.is_active || state.generation != generation {
                        debug!("Discarding location sample from a finished trail");
                        return Ok(None);
                    }
                    state.trail.points.push(point.clone());
                    state.trail.points.len()
                };

                debug!(
                    latitude = point.latitude,
                    longitude = point.longitude,
                    accuracy = ?point.accuracy,
                    total_points = total,
                    "Location point recorded"
                );
                self.emit(TrailEvent::PointRecorded(point.clone()));
                Ok(Some(point))
            }
            Err(err) => {
                if self.is_current(generation) {
                    warn!(error = %err, code = err.error_code(), "Failed to get location");
                    self.emit(TrailEvent::SampleFailed(err.clone()));
                }
                Err(err)
            }
        }
    }
}

/// Records a [`LocationTrail`] by sampling a [`PositionProvider`] on a timer.
///
/// All methods take `&self`, so the recorder can be shared between the task
/// driving the form and the one submitting it. Samples that resolve after
/// the trail was stopped, or after a new trail was started, are discarded.
/// Dropping the recorder cancels its timer.
pub struct LocationTrailRecorder<P> {
    shared: Arc<Shared<P>>,
    ticker: Mutex<Option<JoinHandle<()>>>,
}

impl<P: PositionProvider + 'static> LocationTrailRecorder<P> {
    /// Creates an idle recorder with an empty trail.
    pub fn new(provider: P, settings: RecorderSettings) -> Self {
        Self::with_trail(provider, settings, LocationTrail::default())
    }

    /// Creates an idle recorder holding an earlier trail, e.g. when an
    /// inspection is reopened for editing.
    pub fn with_trail(provider: P, settings: RecorderSettings, mut trail: LocationTrail) -> Self {
        trail.is_active = false;
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            shared: Arc::new(Shared {
                provider,
                settings,
                state: Mutex::new(TrailState {
                    trail,
                    generation: 0,
                }),
                events,
            }),
            ticker: Mutex::new(None),
        }
    }

    /// The wrapped provider.
    pub fn provider(&self) -> &P {
        &self.shared.provider
    }

    /// Sampling settings.
    pub fn settings(&self) -> RecorderSettings {
        self.shared.settings
    }

    /// Subscribes to lifecycle events.
    pub fn subscribe(&self) -> broadcast::Receiver<TrailEvent> {
        self.shared.events.subscribe()
    }

    /// Starts a new trail.
    ///
    /// Clears earlier points, records the start time, takes a sample right
    /// away and then one every interval. Must be called inside a Tokio
    /// runtime. Calling it on an active trail changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Unsupported`] if the provider cannot supply
    /// positions. The trail is left untouched.
    pub fn start(&self) -> Result<LocationTrail, TrackingError> {
        if !self.shared.provider.is_supported() {
            warn!("Geolocation is not supported, location tracking not started");
            return Err(TrackingError::Unsupported);
        }

        let (generation, snapshot) = {
            let mut state = self.shared.lock();
            if state.trail.is_active {
                return Ok(state.trail.clone());
            }
            state.generation += 1;
            state.trail = LocationTrail {
                points: Vec::new(),
                started_at: Some(Utc::now()),
                ended_at: None,
                is_active: true,
            };
            (state.generation, state.trail.clone())
        };

        let interval = self.shared.settings.interval.max(Duration::from_millis(1));
        info!(
            interval_secs = interval.as_secs(),
            high_accuracy = self.shared.settings.options.high_accuracy,
            "Location tracking started"
        );
        if let Some(started_at) = snapshot.started_at {
            self.shared.emit(TrailEvent::Started { started_at });
        }

        let shared = Arc::clone(&self.shared);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                // Failures are logged and published by `sample`.
                let _ = shared.sample(generation).await;
            }
        });

        if let Some(previous) = self.lock_ticker().replace(handle) {
            previous.abort();
        }

        Ok(snapshot)
    }

    /// Takes one sample now, outside the timer.
    ///
    /// Returns `Ok(None)` if no trail is active or the trail was stopped
    /// while the request was in flight.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the sample failed.
    pub async fn sample_once(&self) -> Result<Option<LocationPoint>, PositionError> {
        let generation = {
            let state = self.shared.lock();
            if !state.trail.is_active {
                return Ok(None);
            }
            state.generation
        };
        self.shared.sample(generation).await
    }

    /// Stops the active trail and cancels its timer.
    ///
    /// Returns the number of recorded points, or `None` if no trail was
    /// active.
    pub fn stop(&self) -> Option<usize> {
        let (total_points, ended_at) = {
            let mut state = self.shared.lock();
            if !state.trail.is_active {
                return None;
            }
            let ended_at = Utc::now();
            state.trail.is_active = false;
            state.trail.ended_at = Some(ended_at);
            (state.trail.points.len(), ended_at)
        };

        if let Some(handle) = self.lock_ticker().take() {
            handle.abort();
        }

        info!(total_points, "Location tracking stopped");
        self.shared.emit(TrailEvent::Stopped {
            total_points,
            ended_at,
        });
        Some(total_points)
    }

    /// Whether a trail is being recorded.
    pub fn is_active(&self) -> bool {
        self.shared.lock().trail.is_active
    }

    /// Number of recorded points.
    pub fn point_count(&self) -> usize {
        self.shared.lock().trail.points.len()
    }

    /// A copy of the current trail.
    pub fn snapshot(&self) -> LocationTrail {
        self.shared.lock().trail.clone()
    }

    fn lock_ticker(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.ticker.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P> Drop for LocationTrailRecorder<P> {
    fn drop(&mut self) {
        let ticker = self
            .ticker
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = ticker.take() {
            handle.abort();
        }
    }
}

impl<P> std::fmt::Debug for LocationTrailRecorder<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationTrailRecorder")
            .field("settings", &self.shared.settings)
            .finish_non_exhaustive()
    }
}
