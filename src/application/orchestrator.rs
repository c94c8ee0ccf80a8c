//! Provisioning workflows across the cluster manager and workspace service.
//!
//! Each workflow is an ordered sequence of blocking remote calls with no
//! transactional boundary: a step can fail after earlier steps have already
//! taken effect on the remote system. There is no compensation — the target
//! API defines no safe inverses — so an aborted run logs the steps that
//! completed and leaves cleanup to the operator.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::GitConfig;
use crate::domain::{
    ClusterId, Kubeconfig, MemberRoster, Plan, ProvisionRequest, Provisioned, QualifiedProjectId,
    RoleBinding, SessionToken, UserId, UserWorkspace, WorkspaceBinding,
};
use crate::error::Result;
use crate::port::{ClusterManager, NamespaceProvisioner};

use super::directory::{UserDirectory, INITIAL_PASSWORD};
use super::membership::ProjectMembership;

/// Ledger of completed workflow steps, kept so an abort can name what
/// already took effect on the remote system.
#[derive(Default)]
struct StepLog {
    completed: Vec<&'static str>,
}

impl StepLog {
    fn record<T>(&mut self, step: &'static str, result: Result<T>) -> Result<T> {
        match result {
            Ok(value) => {
                self.completed.push(step);
                Ok(value)
            }
            Err(err) => {
                if self.completed.is_empty() {
                    warn!(failed_step = step, error = %err, "Provisioning aborted before any remote mutation");
                } else {
                    warn!(
                        failed_step = step,
                        completed = ?self.completed,
                        error = %err,
                        "Workspace partially provisioned; completed steps remain in effect"
                    );
                }
                Err(err)
            }
        }
    }
}

/// Composes the remote-call wrappers into the public provisioning workflows.
pub struct Orchestrator {
    cluster: Arc<dyn ClusterManager>,
    namespaces: Arc<dyn NamespaceProvisioner>,
    directory: UserDirectory,
    membership: ProjectMembership,
    cluster_id: ClusterId,
    git_repo_url: String,
    git_branch: String,
}

impl Orchestrator {
    #[must_use]
    pub fn new(
        cluster: Arc<dyn ClusterManager>,
        namespaces: Arc<dyn NamespaceProvisioner>,
        cluster_id: ClusterId,
        git: &GitConfig,
    ) -> Self {
        Self {
            directory: UserDirectory::new(Arc::clone(&cluster)),
            membership: ProjectMembership::new(Arc::clone(&cluster)),
            cluster,
            namespaces,
            cluster_id,
            git_repo_url: git.repo_url.clone(),
            git_branch: git.branch.clone(),
        }
    }

    /// Provision a tenant workspace: catalog repo, quota-bounded project,
    /// bound user, namespace, and a session token for the user.
    ///
    /// Validation (including the plan) happens before the first remote call,
    /// so an invalid request mutates nothing. After that the pipeline aborts
    /// on the first failure and earlier steps remain in effect.
    pub async fn provision(&self, request: &ProvisionRequest) -> Result<Provisioned> {
        request.validate()?;
        let plan: Plan = request.plan.parse()?;

        info!(
            project = %request.project_name,
            plan = %plan,
            username = %request.username,
            "Provisioning tenant workspace"
        );

        let mut steps = StepLog::default();

        let (user, _created) = steps.record(
            "find_or_create_user",
            self.directory.find_or_create(&request.username).await,
        )?;

        let repo_id = steps.record(
            "create_catalog_repo",
            self.cluster
                .create_catalog_repo(&request.project_name, &self.git_repo_url, &self.git_branch)
                .await,
        )?;
        info!(repo_id = %repo_id, "Catalog repo created");

        let project_id = steps.record(
            "create_project",
            self.cluster
                .create_project(&request.project_name, plan.quota())
                .await,
        )?;

        let qualified = QualifiedProjectId::qualify(project_id.as_str(), &self.cluster_id);

        steps.record(
            "bind_role",
            self.membership.bind(&user.id, &qualified).await,
        )?;

        let namespace = steps.record(
            "create_namespace",
            self.namespaces
                .create_namespace(&request.project_name, &qualified)
                .await,
        )?;

        let token = steps.record(
            "login",
            self.directory.login(user.id.as_str(), INITIAL_PASSWORD).await,
        )?;

        info!(
            project_id = %project_id,
            namespace = %namespace,
            "Tenant workspace provisioned"
        );

        Ok(Provisioned {
            project_id,
            namespace,
            token,
        })
    }

    /// Log an existing user in and resolve their workspace, or create the
    /// user when absent.
    ///
    /// The create path never attaches a project; an existing user without
    /// project memberships gets an empty binding.
    pub async fn find_user_or_provision(&self, username: &str) -> Result<UserWorkspace> {
        match self.cluster.find_user_by_username(username).await? {
            Some(user) => {
                let token = self.directory.login(username, INITIAL_PASSWORD).await?;
                let projects = self.cluster.projects_of_user(&user.id).await?;

                let binding = if projects.is_empty() {
                    None
                } else {
                    self.locate_workspace(&projects).await?
                };

                Ok(UserWorkspace {
                    user_id: user.id,
                    token,
                    binding,
                })
            }
            None => {
                let user = self.cluster.create_user(username, INITIAL_PASSWORD).await?;
                info!(username, id = %user.id, "Created directory user");
                let token = self.directory.login(username, INITIAL_PASSWORD).await?;
                Ok(UserWorkspace {
                    user_id: user.id,
                    token,
                    binding: None,
                })
            }
        }
    }

    /// List a project's members, qualifying the raw id first.
    pub async fn list_team_members(&self, project_id: &str) -> Result<MemberRoster> {
        let qualified = QualifiedProjectId::qualify(project_id, &self.cluster_id);
        self.membership.list_members(&qualified).await
    }

    /// Bind an existing user to a project, qualifying the raw id first.
    pub async fn add_team_member(&self, user_id: &str, project_id: &str) -> Result<RoleBinding> {
        let qualified = QualifiedProjectId::qualify(project_id, &self.cluster_id);
        self.membership.bind(&UserId::new(user_id), &qualified).await
    }

    /// Log a user in with caller-supplied credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionToken> {
        self.directory.login(username, password).await
    }

    /// Render a kubeconfig for the configured cluster and a session token.
    pub async fn kubeconfig(&self, token: &SessionToken) -> Result<Kubeconfig> {
        self.cluster.generate_kubeconfig(token).await
    }

    /// Scan namespaces for the first one bound to any of the user's
    /// projects. Scan order is the namespace-listing order; first match wins.
    async fn locate_workspace(
        &self,
        project_ids: &[String],
    ) -> Result<Option<WorkspaceBinding>> {
        let qualified: Vec<QualifiedProjectId> = project_ids
            .iter()
            .map(|raw| QualifiedProjectId::qualify(raw, &self.cluster_id))
            .collect();

        let namespaces = self.cluster.list_namespaces().await?;

        for namespace in namespaces {
            let Some(annotation) = namespace.project_annotation.as_deref() else {
                continue;
            };
            let annotated = QualifiedProjectId::qualify(annotation, &self.cluster_id);
            if let Some(matched) = qualified.iter().find(|id| **id == annotated) {
                return Ok(Some(WorkspaceBinding {
                    namespace: namespace.name,
                    project_id: matched.project().to_string(),
                }));
            }
        }

        Ok(None)
    }
}
