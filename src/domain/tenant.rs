//! Remote-owned tenant records and workflow results.
//!
//! Every type here mirrors state owned by the cluster manager or the
//! workspace service; this crate holds no durable copies. Workflow results
//! are derived views returned to the boundary layer.

use crate::domain::id::{ProjectId, SessionToken, UserId};

/// A directory user as held by the cluster manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUser {
    pub id: UserId,
    /// Alternate external identities, used for reverse membership lookups.
    pub principal_ids: Vec<String>,
}

/// Resolved display identity of a directory user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: UserId,
    pub username: String,
    pub display_name: String,
}

/// Confirmation record for a user-to-project role binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleBinding {
    pub name: String,
    pub role_template_id: String,
}

/// A namespace as listed by the cluster manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub name: String,
    /// Raw project-association annotation, when present.
    pub project_annotation: Option<String>,
}

/// Raw membership record for a project.
///
/// The remote composes the user id as `<id>/<scope>`; only the segment before
/// the first `/` is a valid identity-lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipRecord {
    pub user_id: String,
}

impl MembershipRecord {
    /// The identity-lookup key: everything before the first `/`.
    #[must_use]
    pub fn user_ref(&self) -> &str {
        self.user_id
            .split_once('/')
            .map_or(self.user_id.as_str(), |(id, _)| id)
    }
}

/// Opaque client-access document rendered for a cluster and session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kubeconfig(pub String);

impl Kubeconfig {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Result of a completed provisioning workflow.
#[derive(Debug, Clone)]
pub struct Provisioned {
    pub project_id: ProjectId,
    /// Namespace name as produced by the workspace service, not echoed from
    /// the request.
    pub namespace: String,
    pub token: SessionToken,
}

/// Result of the login-or-create user workflow.
#[derive(Debug, Clone)]
pub struct UserWorkspace {
    pub user_id: UserId,
    pub token: SessionToken,
    /// The user's existing workspace, when one was resolved.
    pub binding: Option<WorkspaceBinding>,
}

/// A resolved (namespace, project) pair for an existing user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceBinding {
    pub namespace: String,
    pub project_id: String,
}

impl UserWorkspace {
    /// Namespace name, empty when the user has no workspace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.binding.as_ref().map_or("", |b| b.namespace.as_str())
    }

    /// Bare project id, empty when the user has no workspace.
    #[must_use]
    pub fn project_id(&self) -> &str {
        self.binding.as_ref().map_or("", |b| b.project_id.as_str())
    }
}

/// Best-effort membership listing: resolved identities plus the count of
/// members dropped because their identity could not be resolved.
#[derive(Debug, Clone, Default)]
pub struct MemberRoster {
    pub members: Vec<Identity>,
    pub unresolved: usize,
}

impl MemberRoster {
    /// True when every listed member failed to resolve or none were listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// True when at least one member was dropped during resolution.
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        self.unresolved > 0
    }
}
