//! Cluster-manager port.
//!
//! One operation per remote capability of the cluster-manager REST API. All
//! implementations are stateless; every call carries a bearer credential and
//! surfaces its failure as a [`RemoteError`](crate::error::RemoteError)
//! tagged with the operation name. No operation retries.

use async_trait::async_trait;

use crate::domain::{
    Identity, Kubeconfig, MembershipRecord, Namespace, ProjectId, QualifiedProjectId, QuotaDocument,
    RemoteUser, RoleBinding, SessionToken, UserId,
};
use crate::error::Result;

/// Authenticated client for the cluster-manager API.
#[async_trait]
pub trait ClusterManager: Send + Sync {
    /// Create a quota-bounded project. Returns the opaque project id.
    async fn create_project(&self, name: &str, quota: &QuotaDocument) -> Result<ProjectId>;

    /// Register a Git-backed catalog repo. Returns the repo id.
    async fn create_catalog_repo(&self, name: &str, git_url: &str, git_branch: &str)
        -> Result<String>;

    /// Bind a user to a project with the given role template.
    ///
    /// The project id must already be fully qualified; qualification is the
    /// caller's responsibility.
    async fn bind_role(
        &self,
        user_id: &UserId,
        project_id: &QualifiedProjectId,
        role_template_id: &str,
    ) -> Result<RoleBinding>;

    /// Create a directory user with the given initial password.
    async fn create_user(&self, username: &str, password: &str) -> Result<RemoteUser>;

    /// Look up a directory user by username. Absence is a legitimate outcome.
    async fn find_user_by_username(&self, username: &str) -> Result<Option<RemoteUser>>;

    /// Resolve a user id (or the id segment of a membership record) to a
    /// display identity.
    async fn get_user_by_id(&self, user_ref: &str) -> Result<Identity>;

    /// Log a user in and return the session token.
    async fn login(&self, username: &str, password: &str) -> Result<SessionToken>;

    /// List every namespace on the configured cluster.
    async fn list_namespaces(&self) -> Result<Vec<Namespace>>;

    /// List the raw project ids a user belongs to.
    async fn projects_of_user(&self, user_id: &UserId) -> Result<Vec<String>>;

    /// List raw membership records of a project.
    ///
    /// A missing project surfaces as
    /// [`NotFoundError`](crate::error::NotFoundError), distinct from an
    /// existing project with zero members.
    async fn project_members(
        &self,
        project_id: &QualifiedProjectId,
    ) -> Result<Vec<MembershipRecord>>;

    /// Render a kubeconfig for the configured cluster and a session token.
    async fn generate_kubeconfig(&self, token: &SessionToken) -> Result<Kubeconfig>;
}
