//! Directory-user operations against the cluster manager.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{Identity, RemoteUser, SessionToken};
use crate::error::Result;
use crate::port::ClusterManager;

/// Initial password assigned to directory users created by provisioning.
/// Users are expected to rotate it through the cluster manager's own UI.
pub const INITIAL_PASSWORD: &str = "testtesttest";

/// Find-or-create and login operations for directory users.
pub struct UserDirectory {
    cluster: Arc<dyn ClusterManager>,
}

impl UserDirectory {
    #[must_use]
    pub fn new(cluster: Arc<dyn ClusterManager>) -> Self {
        Self { cluster }
    }

    /// Look the user up by name and create it only on absence.
    ///
    /// The lookup-first order is the idempotency guard: a retried request
    /// finds the user created by the first attempt instead of duplicating it.
    /// Returns the user and whether this call created it.
    pub async fn find_or_create(&self, username: &str) -> Result<(RemoteUser, bool)> {
        if let Some(user) = self.cluster.find_user_by_username(username).await? {
            debug!(username, id = %user.id, "User already exists");
            return Ok((user, false));
        }

        let user = self.cluster.create_user(username, INITIAL_PASSWORD).await?;
        info!(username, id = %user.id, "Created directory user");
        Ok((user, true))
    }

    /// Log a user in. Single call, no retry.
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionToken> {
        self.cluster.login(username, password).await
    }

    /// Resolve a user reference to its display identity.
    ///
    /// Callers listing members treat a failure here as "skip this member",
    /// never as a reason to abort.
    pub async fn resolve_identity(&self, user_ref: &str) -> Result<Identity> {
        self.cluster.get_user_by_id(user_ref).await
    }
}
