//! Scriptable in-memory cluster manager.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{
    Identity, Kubeconfig, MembershipRecord, Namespace, ProjectId, QualifiedProjectId,
    QuotaDocument, RemoteUser, RoleBinding, SessionToken, UserId,
};
use crate::error::{NotFoundError, RemoteError, Result};
use crate::port::ClusterManager;

#[derive(Default)]
struct State {
    calls: Vec<String>,
    fail: HashMap<&'static str, u16>,
    users: HashMap<String, RemoteUser>,
    identities: HashMap<String, Identity>,
    projects: HashMap<String, Vec<MembershipRecord>>,
    user_projects: HashMap<String, Vec<String>>,
    namespaces: Vec<Namespace>,
    project_id: String,
    created_users: usize,
}

/// In-memory [`ClusterManager`] that records every call, serves scripted
/// state, and fails a named operation on demand.
pub struct ScriptedClusterManager {
    state: Mutex<State>,
}

impl Default for ScriptedClusterManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedClusterManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                project_id: "p-9001".into(),
                ..State::default()
            }),
        }
    }

    /// Make the named operation fail with the given HTTP status.
    pub fn fail_with(&self, operation: &'static str, status: u16) {
        self.state.lock().unwrap().fail.insert(operation, status);
    }

    /// Preload a directory user, keyed by username.
    pub fn add_user(&self, username: &str, user: RemoteUser) {
        self.state
            .lock()
            .unwrap()
            .users
            .insert(username.to_string(), user);
    }

    /// Preload a resolvable identity, keyed by user reference.
    pub fn add_identity(&self, user_ref: &str, identity: Identity) {
        self.state
            .lock()
            .unwrap()
            .identities
            .insert(user_ref.to_string(), identity);
    }

    /// Register an existing project and its raw membership records.
    pub fn add_project(&self, qualified_id: &str, members: Vec<MembershipRecord>) {
        self.state
            .lock()
            .unwrap()
            .projects
            .insert(qualified_id.to_string(), members);
    }

    /// Record which raw project ids a user belongs to.
    pub fn add_user_projects(&self, user_id: &str, project_ids: Vec<String>) {
        self.state
            .lock()
            .unwrap()
            .user_projects
            .insert(user_id.to_string(), project_ids);
    }

    /// Append a namespace to the listing, in call order.
    pub fn add_namespace(&self, namespace: Namespace) {
        self.state.lock().unwrap().namespaces.push(namespace);
    }

    /// Set the project id returned by `create_project`.
    pub fn set_project_id(&self, id: &str) {
        self.state.lock().unwrap().project_id = id.to_string();
    }

    /// Every recorded call, as `operation:detail` strings, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    /// How many times the named operation was invoked.
    #[must_use]
    pub fn count(&self, operation: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|call| call.split(':').next() == Some(operation))
            .count()
    }

    /// How many users `create_user` actually created.
    #[must_use]
    pub fn created_users(&self) -> usize {
        self.state.lock().unwrap().created_users
    }

    fn record(&self, operation: &'static str, detail: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("{operation}:{detail}"));
        if let Some(status) = state.fail.get(operation) {
            return Err(RemoteError::Status {
                operation,
                status: *status,
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl ClusterManager for ScriptedClusterManager {
    async fn create_project(&self, name: &str, _quota: &QuotaDocument) -> Result<ProjectId> {
        self.record("create_project", name)?;
        Ok(ProjectId::new(self.state.lock().unwrap().project_id.clone()))
    }

    async fn create_catalog_repo(
        &self,
        name: &str,
        _git_url: &str,
        _git_branch: &str,
    ) -> Result<String> {
        self.record("create_catalog_repo", name)?;
        Ok(format!("repo-{name}"))
    }

    async fn bind_role(
        &self,
        user_id: &UserId,
        project_id: &QualifiedProjectId,
        role_template_id: &str,
    ) -> Result<RoleBinding> {
        self.record("bind_role", &format!("{user_id}@{project_id}"))?;
        Ok(RoleBinding {
            name: format!("binding-{user_id}"),
            role_template_id: role_template_id.to_string(),
        })
    }

    async fn create_user(&self, username: &str, _password: &str) -> Result<RemoteUser> {
        self.record("create_user", username)?;
        let user = RemoteUser {
            id: UserId::new(format!("u-{username}")),
            principal_ids: vec![format!("local://u-{username}")],
        };
        let mut state = self.state.lock().unwrap();
        state.created_users += 1;
        state.users.insert(username.to_string(), user.clone());
        Ok(user)
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<RemoteUser>> {
        self.record("find_user_by_username", username)?;
        Ok(self.state.lock().unwrap().users.get(username).cloned())
    }

    async fn get_user_by_id(&self, user_ref: &str) -> Result<Identity> {
        self.record("get_user_by_id", user_ref)?;
        self.state
            .lock()
            .unwrap()
            .identities
            .get(user_ref)
            .cloned()
            .ok_or_else(|| NotFoundError::user(user_ref).into())
    }

    async fn login(&self, username: &str, _password: &str) -> Result<SessionToken> {
        self.record("login", username)?;
        Ok(SessionToken::new(format!("token-{username}")))
    }

    async fn list_namespaces(&self) -> Result<Vec<Namespace>> {
        self.record("list_namespaces", "")?;
        Ok(self.state.lock().unwrap().namespaces.clone())
    }

    async fn projects_of_user(&self, user_id: &UserId) -> Result<Vec<String>> {
        self.record("projects_of_user", user_id.as_str())?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .user_projects
            .get(user_id.as_str())
            .cloned()
            .unwrap_or_default())
    }

    async fn project_members(
        &self,
        project_id: &QualifiedProjectId,
    ) -> Result<Vec<MembershipRecord>> {
        self.record("project_members", &project_id.to_string())?;
        self.state
            .lock()
            .unwrap()
            .projects
            .get(&project_id.to_string())
            .cloned()
            .ok_or_else(|| NotFoundError::project(project_id.to_string()).into())
    }

    async fn generate_kubeconfig(&self, _token: &SessionToken) -> Result<Kubeconfig> {
        self.record("generate_kubeconfig", "")?;
        Ok(Kubeconfig("apiVersion: v1\nkind: Config\n".into()))
    }
}
