//! Host position capability.

use std::future::Future;
use std::io::BufRead;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::error::PositionError;
use super::types::{Position, PositionOptions};

/// Source of GPS fixes.
///
/// Implementations wrap whatever the host offers (a device GPS, a mock, a
/// recorded track). A request resolves exactly once with a fix or an error.
pub trait PositionProvider: Send + Sync {
    /// Whether the host can provide positions at all.
    fn is_supported(&self) -> bool {
        true
    }

    /// Requests the current position.
    fn current_position(
        &self,
        options: &PositionOptions,
    ) -> impl Future<Output = Result<Position, PositionError>> + Send;
}

/// Replays a recorded track, one fix per request.
///
/// Once every fix has been handed out, requests fail with
/// [`PositionError::PositionUnavailable`].
#[derive(Debug)]
pub struct ReplayProvider {
    positions: Vec<Position>,
    cursor: AtomicUsize,
}

impl ReplayProvider {
    /// Creates a provider that replays `positions` in order.
    #[must_use]
    pub fn new(positions: Vec<Position>) -> Self {
        Self {
            positions,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Reads one JSON [`Position`] per line. Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a line cannot be read or parsed.
    pub fn from_json_lines(reader: impl BufRead) -> Result<Self, serde_json::Error> {
        let mut positions = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(serde_json::Error::io)?;
            if line.trim().is_empty() {
                continue;
            }
            positions.push(serde_json::from_str(&line)?);
        }
        Ok(Self::new(positions))
    }

    /// Number of fixes not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.positions
            .len()
            .saturating_sub(self.cursor.load(Ordering::SeqCst))
    }
}

impl PositionProvider for ReplayProvider {
    /// An empty track is reported as unsupported, so starting a recorder on
    /// it fails with `TrackingError::Unsupported` rather than ticking forever
    /// without a fix.
    fn is_supported(&self) -> bool {
        !self.positions.is_empty()
    }

    async fn current_position(&self, _options: &PositionOptions) -> Result<Position, PositionError> {
        let index = self.cursor.fetch_add(1, Ordering::SeqCst);
        self.positions.get(index).copied().ok_or_else(|| {
            PositionError::PositionUnavailable("recorded track exhausted".to_string())
        })
    }
}
