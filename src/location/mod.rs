// SPDX-License-Identifier: GPL-3.0-only

//! Device location acquisition
//!
//! Acquisition is a single attempt: ask for permission, then ask for one
//! position fix. Any failure leaves the location unknown and callers fall back
//! to a default center. Nothing is retried and nothing is shown to the user.
//!
//! - [`LocationProvider`]: the platform location service seam
//! - [`geoclue::GeoClueProvider`]: GeoClue2 over the system D-Bus
//! - [`fixed::FixedProvider`]: a preset position (or denial)
//! - [`LocationTask`]: a scoped background acquisition, aborted on drop

pub mod fixed;
pub mod geoclue;

pub use fixed::FixedProvider;
pub use geoclue::GeoClueProvider;

use crate::errors::LocationError;
use crate::geo::Coordinate;
use futures::future::BoxFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Outcome of a permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Platform location service
pub trait LocationProvider: Send + Sync {
    /// Ask the platform for foreground location access
    fn request_permission(&self) -> BoxFuture<'_, Result<Permission, LocationError>>;

    /// One-shot current position; only meaningful after a granted permission
    fn current_position(&self) -> BoxFuture<'_, Result<Coordinate, LocationError>>;
}

/// Run one acquisition attempt against `provider`
///
/// Returns `None` on denial, error or timeout.
pub async fn acquire<P>(provider: &P, timeout: Duration) -> Option<Coordinate>
where
    P: LocationProvider + ?Sized,
{
    let attempt = async {
        match provider.request_permission().await? {
            Permission::Granted => provider.current_position().await,
            Permission::Denied => Err(LocationError::PermissionDenied),
        }
    };

    let result = match tokio::time::timeout(timeout, attempt).await {
        Ok(result) => result,
        Err(_) => Err(LocationError::Timeout),
    };

    match result {
        Ok(position) if position.is_valid() => {
            info!(latitude = position.latitude, longitude = position.longitude, "Location acquired");
            Some(position)
        }
        Ok(position) => {
            warn!(?position, "Location service returned an invalid position");
            None
        }
        Err(LocationError::PermissionDenied) => {
            info!("Location permission denied, using default center");
            None
        }
        Err(e) => {
            warn!(error = %e, "Location unavailable, using default center");
            None
        }
    }
}

/// Location acquisition bound to the lifetime of its owner
///
/// The attempt runs on the tokio runtime. Dropping the task (for example when
/// the screen that started it goes away) aborts the attempt.
pub struct LocationTask {
    handle: JoinHandle<()>,
    receiver: oneshot::Receiver<Option<Coordinate>>,
    finished: bool,
}

impl LocationTask {
    /// Start acquiring on the current tokio runtime
    ///
    /// Must be called from within a runtime context.
    pub fn spawn(provider: Arc<dyn LocationProvider>, timeout: Duration) -> Self {
        Self::spawn_on(&tokio::runtime::Handle::current(), provider, timeout)
    }

    /// Start acquiring on the given runtime
    pub fn spawn_on(
        runtime: &tokio::runtime::Handle,
        provider: Arc<dyn LocationProvider>,
        timeout: Duration,
    ) -> Self {
        let (sender, receiver) = oneshot::channel();
        let handle = runtime.spawn(async move {
            let position = acquire(provider.as_ref(), timeout).await;
            // Receiver gone means the owner lost interest
            let _ = sender.send(position);
        });

        Self {
            handle,
            receiver,
            finished: false,
        }
    }

    /// Non-blocking check for the result
    ///
    /// Yields `Some(outcome)` exactly once, when the attempt has finished.
    pub fn try_take(&mut self) -> Option<Option<Coordinate>> {
        if self.finished {
            return None;
        }

        match self.receiver.try_recv() {
            Ok(position) => {
                self.finished = true;
                Some(position)
            }
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => {
                self.finished = true;
                Some(None)
            }
        }
    }

    /// Wait for the attempt to finish
    pub async fn wait(&mut self) -> Option<Coordinate> {
        if self.finished {
            return None;
        }
        self.finished = true;
        (&mut self.receiver).await.ok().flatten()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Drop for LocationTask {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            debug!("Cancelling pending location request");
        }
        self.handle.abort();
    }
}
