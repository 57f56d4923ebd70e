//! Position sources that do not need a real device.

use super::{AcquisitionError, AcquisitionOptions, PositionSource};
use crate::core::Coordinate;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Always reports the same coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPositionSource {
    coordinate: Coordinate,
}

impl FixedPositionSource {
    pub fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }
}

impl PositionSource for FixedPositionSource {
    async fn acquire(&self, options: &AcquisitionOptions) -> Result<Coordinate, AcquisitionError> {
        tracing::trace!(accuracy = ?options.accuracy, "fixed position acquired");
        Ok(self.coordinate)
    }
}

/// A platform with no location capability at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedPositionSource;

impl PositionSource for UnsupportedPositionSource {
    async fn acquire(&self, _options: &AcquisitionOptions) -> Result<Coordinate, AcquisitionError> {
        Err(AcquisitionError::Unsupported)
    }
}

/// Replays a queue of results, one per acquisition.
///
/// Once the queue is drained every acquisition reports
/// `PositionUnavailable`. An optional delay is applied before each result,
/// which makes it possible to exercise acquisition timeouts.
#[derive(Debug, Default)]
pub struct ScriptedPositionSource {
    script: Mutex<VecDeque<Result<Coordinate, AcquisitionError>>>,
    delay: Option<Duration>,
}

impl ScriptedPositionSource {
    pub fn new<I>(results: I) -> Self
    where
        I: IntoIterator<Item = Result<Coordinate, AcquisitionError>>,
    {
        Self {
            script: Mutex::new(results.into_iter().collect()),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn push(&self, result: Result<Coordinate, AcquisitionError>) {
        self.lock().push_back(result);
    }

    pub fn remaining(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<Coordinate, AcquisitionError>>> {
        // A poisoned queue still holds valid results.
        self.script.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PositionSource for ScriptedPositionSource {
    async fn acquire(&self, _options: &AcquisitionOptions) -> Result<Coordinate, AcquisitionError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let next = self.lock().pop_front();
        next.unwrap_or(Err(AcquisitionError::PositionUnavailable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn office() -> Coordinate {
        Coordinate::new(12.9716, 77.5946).unwrap()
    }

    #[tokio::test]
    async fn fixed_source_always_yields_its_coordinate() {
        let source = FixedPositionSource::new(office());
        let options = AcquisitionOptions::default();

        assert_eq!(source.acquire(&options).await, Ok(office()));
        assert_eq!(source.acquire(&options).await, Ok(office()));
    }

    #[tokio::test]
    async fn unsupported_source_always_fails() {
        let source = UnsupportedPositionSource;
        assert_eq!(
            source.acquire(&AcquisitionOptions::default()).await,
            Err(AcquisitionError::Unsupported)
        );
    }

    #[tokio::test]
    async fn scripted_source_replays_in_order_then_runs_dry() {
        let source = ScriptedPositionSource::new([
            Err(AcquisitionError::PermissionDenied),
            Ok(office()),
        ]);
        let options = AcquisitionOptions::default();

        assert_eq!(
            source.acquire(&options).await,
            Err(AcquisitionError::PermissionDenied)
        );
        assert_eq!(source.acquire(&options).await, Ok(office()));
        assert_eq!(source.remaining(), 0);
        assert_eq!(
            source.acquire(&options).await,
            Err(AcquisitionError::PositionUnavailable)
        );
    }

    #[tokio::test]
    async fn push_extends_the_script() {
        let source = ScriptedPositionSource::default();
        source.push(Ok(office()));
        assert_eq!(source.remaining(), 1);
        assert_eq!(
            source.acquire(&AcquisitionOptions::default()).await,
            Ok(office())
        );
    }
}
