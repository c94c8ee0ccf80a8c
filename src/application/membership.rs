//! Project membership: role binding and best-effort member listing.

use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use tracing::warn;

use crate::domain::{MemberRoster, QualifiedProjectId, RoleBinding, UserId};
use crate::error::Result;
use crate::port::ClusterManager;

/// Role template granted to every user bound through provisioning.
pub const ROLE_PROJECT_MEMBER: &str = "project-member";

/// Identity resolutions in flight at once during member listing. `buffered`
/// keeps results in listing order.
const RESOLVE_CONCURRENCY: usize = 4;

/// Membership operations on a project.
pub struct ProjectMembership {
    cluster: Arc<dyn ClusterManager>,
}

impl ProjectMembership {
    #[must_use]
    pub fn new(cluster: Arc<dyn ClusterManager>) -> Self {
        Self { cluster }
    }

    /// Bind a user to an already-qualified project as a project member.
    pub async fn bind(
        &self,
        user_id: &UserId,
        project_id: &QualifiedProjectId,
    ) -> Result<RoleBinding> {
        self.cluster
            .bind_role(user_id, project_id, ROLE_PROJECT_MEMBER)
            .await
    }

    /// List a project's members with their resolved identities.
    ///
    /// A missing project propagates as `NotFoundError`. A member whose
    /// identity cannot be resolved is dropped and counted in
    /// `roster.unresolved`; the listing itself never aborts on a per-member
    /// failure.
    pub async fn list_members(&self, project_id: &QualifiedProjectId) -> Result<MemberRoster> {
        let records = self.cluster.project_members(project_id).await?;

        let resolutions = stream::iter(records.into_iter().map(|record| {
            let cluster = Arc::clone(&self.cluster);
            async move {
                let user_ref = record.user_ref().to_string();
                (user_ref.clone(), cluster.get_user_by_id(&user_ref).await)
            }
        }))
        .buffered(RESOLVE_CONCURRENCY)
        .collect::<Vec<_>>()
        .await;

        let mut roster = MemberRoster::default();
        for (user_ref, resolution) in resolutions {
            match resolution {
                Ok(identity) => roster.members.push(identity),
                Err(err) => {
                    warn!(
                        project = %project_id,
                        user_ref = %user_ref,
                        error = %err,
                        "Dropping member with unresolvable identity"
                    );
                    roster.unresolved += 1;
                }
            }
        }

        Ok(roster)
    }
}
