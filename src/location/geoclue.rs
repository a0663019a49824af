// SPDX-License-Identifier: GPL-3.0-only

//! GeoClue2 location provider
//!
//! Talks to the GeoClue2 service on the system D-Bus. GeoClue asks its agent
//! (the desktop's location permission prompt) when a client starts, so a
//! successful `Start` is the permission grant and an `AccessDenied` error is
//! the refusal. Works in both native and flatpak environments (with the
//! location portal permission).

use super::{LocationProvider, Permission};
use crate::constants::location::GEOCLUE_ACCURACY_STREET;
use crate::errors::LocationError;
use crate::geo::Coordinate;
use futures::StreamExt;
use futures::future::{BoxFuture, FutureExt};
use tokio::sync::Mutex;
use tracing::{debug, info};
use zbus::proxy::SignalStream;
use zbus::zvariant::OwnedObjectPath;

const GEOCLUE_SERVICE: &str = "org.freedesktop.GeoClue2";
const MANAGER_PATH: &str = "/org/freedesktop/GeoClue2/Manager";
const MANAGER_INTERFACE: &str = "org.freedesktop.GeoClue2.Manager";
const CLIENT_INTERFACE: &str = "org.freedesktop.GeoClue2.Client";
const LOCATION_INTERFACE: &str = "org.freedesktop.GeoClue2.Location";
const ACCESS_DENIED_ERROR: &str = "org.freedesktop.DBus.Error.AccessDenied";

/// A started GeoClue client waiting for its first fix
struct ActiveClient {
    connection: zbus::Connection,
    client: zbus::Proxy<'static>,
    updates: SignalStream<'static>,
}

pub struct GeoClueProvider {
    /// Desktop file id GeoClue uses to look up the app's authorization
    desktop_id: String,
    active: Mutex<Option<ActiveClient>>,
}

impl GeoClueProvider {
    pub fn new(desktop_id: impl Into<String>) -> Self {
        Self {
            desktop_id: desktop_id.into(),
            active: Mutex::new(None),
        }
    }

    async fn start_client(&self) -> Result<Permission, LocationError> {
        let connection = zbus::Connection::system()
            .await
            .map_err(|e| LocationError::ServiceUnavailable(e.to_string()))?;

        let manager = zbus::Proxy::new(
            &connection,
            GEOCLUE_SERVICE,
            MANAGER_PATH,
            MANAGER_INTERFACE,
        )
        .await?;

        let client_path: OwnedObjectPath = manager
            .call("GetClient", &())
            .await
            .map_err(|e| LocationError::ServiceUnavailable(e.to_string()))?;
        debug!(path = %client_path.as_str(), "GeoClue client created");

        let client = zbus::Proxy::new(
            &connection,
            GEOCLUE_SERVICE,
            client_path.into_inner(),
            CLIENT_INTERFACE,
        )
        .await?;

        client
            .set_property("DesktopId", self.desktop_id.as_str())
            .await?;
        client
            .set_property("RequestedAccuracyLevel", GEOCLUE_ACCURACY_STREET)
            .await?;

        // Subscribe before starting so the first update cannot be missed
        let updates = client.receive_signal("LocationUpdated").await?;

        let started: zbus::Result<()> = client.call("Start", &()).await;
        match started {
            Ok(()) => {}
            Err(e) if is_access_denied(&e) => {
                info!(desktop_id = %self.desktop_id, "GeoClue denied location access");
                return Ok(Permission::Denied);
            }
            Err(e) => return Err(e.into()),
        }

        *self.active.lock().await = Some(ActiveClient {
            connection,
            client,
            updates,
        });
        Ok(Permission::Granted)
    }

    async fn first_fix(&self) -> Result<Coordinate, LocationError> {
        let Some(mut active) = self.active.lock().await.take() else {
            return Err(LocationError::NotStarted);
        };

        let result = read_first_fix(&mut active).await;

        // One-shot: the client is not needed past the first fix
        let stopped: zbus::Result<()> = active.client.call("Stop", &()).await;
        if let Err(e) = stopped {
            debug!(error = %e, "Failed to stop GeoClue client");
        }

        result
    }
}

impl LocationProvider for GeoClueProvider {
    fn request_permission(&self) -> BoxFuture<'_, Result<Permission, LocationError>> {
        self.start_client().boxed()
    }

    fn current_position(&self) -> BoxFuture<'_, Result<Coordinate, LocationError>> {
        self.first_fix().boxed()
    }
}

/// The agent refused the client
fn is_access_denied(error: &zbus::Error) -> bool {
    match error {
        zbus::Error::MethodError(name, _, _) => name.as_str() == ACCESS_DENIED_ERROR,
        zbus::Error::FDO(fdo) => matches!(**fdo, zbus::fdo::Error::AccessDenied(_)),
        _ => false,
    }
}

async fn read_first_fix(active: &mut ActiveClient) -> Result<Coordinate, LocationError> {
    let message = active.updates.next().await.ok_or_else(|| {
        LocationError::ServiceUnavailable("GeoClue location updates ended".to_string())
    })?;

    let body = message.body();
    let (_previous, current): (OwnedObjectPath, OwnedObjectPath) = body.deserialize()?;

    let location = zbus::Proxy::new(
        &active.connection,
        GEOCLUE_SERVICE,
        current.as_str(),
        LOCATION_INTERFACE,
    )
    .await?;

    let latitude: f64 = location.get_property("Latitude").await?;
    let longitude: f64 = location.get_property("Longitude").await?;
    debug!(latitude, longitude, "GeoClue location update received");

    Ok(Coordinate::new(latitude, longitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fdo_access_denied_is_a_refusal() {
        let error = zbus::Error::FDO(Box::new(zbus::fdo::Error::AccessDenied(
            "Agent rejected".to_string(),
        )));
        assert!(is_access_denied(&error));
    }

    #[test]
    fn test_other_errors_are_not_a_refusal() {
        let failed = zbus::Error::FDO(Box::new(zbus::fdo::Error::Failed(
            "AccessDenied mentioned in a message".to_string(),
        )));
        assert!(!is_access_denied(&failed));
        assert!(!is_access_denied(&zbus::Error::Failure(
            "AccessDenied".to_string()
        )));
    }
}
