// SPDX-License-Identifier: GPL-3.0-only

//! Location provider with a preset answer

use super::{LocationProvider, Permission};
use crate::errors::LocationError;
use crate::geo::Coordinate;
use futures::future::{self, BoxFuture, FutureExt};

/// Answers every request with the same position, or always denies
///
/// Used when the position is given on the command line and when location is
/// switched off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedProvider {
    position: Option<Coordinate>,
}

impl FixedProvider {
    pub fn granted(position: Coordinate) -> Self {
        Self {
            position: Some(position),
        }
    }

    pub fn denied() -> Self {
        Self { position: None }
    }
}

impl LocationProvider for FixedProvider {
    fn request_permission(&self) -> BoxFuture<'_, Result<Permission, LocationError>> {
        let permission = if self.position.is_some() {
            Permission::Granted
        } else {
            Permission::Denied
        };
        future::ready(Ok(permission)).boxed()
    }

    fn current_position(&self) -> BoxFuture<'_, Result<Coordinate, LocationError>> {
        future::ready(self.position.ok_or(LocationError::PermissionDenied)).boxed()
    }
}
