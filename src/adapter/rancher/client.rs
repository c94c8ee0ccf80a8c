//! Cluster-manager REST API client.
//!
//! Every call follows the same shape: build a JSON body (mutating verbs
//! only), attach the bearer credential, issue the request, decode the typed
//! response, and map transport, status, and decode failures into a
//! [`RemoteError`] tagged with the operation name. Nothing here retries; the
//! orchestrator decides whether a failure aborts the workflow.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::dto::{
    BindRoleBody, CatalogRepoBody, CatalogRepoMetadata, CatalogRepoSpec, CreateProjectBody,
    CreateUserBody, CreatedProject, CreatedRepo, EmptyObject, IdentityDto, KubeconfigDto,
    LoginBody, LoginDto, MembershipCollection, NamespaceCollection, ProjectCollection,
    ProjectQuotaEnvelope, QuotaEnvelope, RoleBindingDto, UserCollection, UserDto,
};
use crate::config::RancherConfig;
use crate::domain::{
    ClusterId, Identity, Kubeconfig, MembershipRecord, Namespace, ProjectId, QualifiedProjectId,
    QuotaDocument, RemoteUser, RoleBinding, SessionToken, UserId,
};
use crate::error::{ConfigError, Error, NotFoundError, RemoteError, Result};
use crate::port::ClusterManager;

/// Annotation the cluster manager stamps onto namespaces to record their
/// owning project.
pub const PROJECT_ANNOTATION: &str = "field.cattle.io/projectId";

/// Authenticated HTTP client for the cluster-manager API.
#[derive(Debug)]
pub struct RancherClient {
    http: HttpClient,
    api_url: String,
    cluster: ClusterId,
    token: String,
}

impl RancherClient {
    /// Build a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` when the bearer token was not
    /// supplied through the environment.
    pub fn from_config(config: &RancherConfig) -> Result<Self> {
        let token = config
            .token
            .clone()
            .ok_or(ConfigError::MissingField {
                field: "rancher.token",
            })?;

        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            cluster: config.cluster(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    async fn send<T>(&self, operation: &'static str, request: reqwest::RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|err| RemoteError::transport(operation, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                operation,
                status: status.as_u16(),
            }
            .into());
        }

        response
            .json::<T>()
            .await
            .map_err(|err| RemoteError::Decode {
                operation,
                source: err,
            }
            .into())
    }

    async fn get_json<T>(&self, operation: &'static str, url: String) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!(operation, url = %url, "GET");
        let request = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token));
        self.send(operation, request).await
    }

    async fn post_json<B, T>(&self, operation: &'static str, url: String, body: &B) -> Result<T>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        info!(operation, url = %url, "POST");
        let request = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .json(body);
        self.send(operation, request).await
    }
}

impl From<UserDto> for RemoteUser {
    fn from(dto: UserDto) -> Self {
        Self {
            id: UserId::new(dto.id),
            principal_ids: dto.principal_ids,
        }
    }
}

#[async_trait]
impl ClusterManager for RancherClient {
    async fn create_project(&self, name: &str, quota: &QuotaDocument) -> Result<ProjectId> {
        let body = CreateProjectBody {
            name,
            cluster_id: self.cluster.as_str(),
            namespace_default_resource_quota: QuotaEnvelope {
                limit: &quota.namespace_default_quota,
            },
            resource_quota: ProjectQuotaEnvelope {
                limit: &quota.project_quota,
                used_limit: EmptyObject::default(),
            },
        };

        let created: CreatedProject = self
            .post_json("create_project", self.url("/v3/projects"), &body)
            .await?;
        Ok(ProjectId::new(created.id))
    }

    async fn create_catalog_repo(
        &self,
        name: &str,
        git_url: &str,
        git_branch: &str,
    ) -> Result<String> {
        let body = CatalogRepoBody {
            kind: "catalog.cattle.io.clusterrepo",
            metadata: CatalogRepoMetadata { name },
            spec: CatalogRepoSpec {
                url: "",
                client_secret: None,
                git_repo: git_url,
                git_branch,
            },
        };

        let url = self.url(&format!(
            "/k8s/clusters/{}/v1/catalog.cattle.io.clusterrepos",
            self.cluster
        ));
        let created: CreatedRepo = self.post_json("create_catalog_repo", url, &body).await?;
        Ok(created.id)
    }

    async fn bind_role(
        &self,
        user_id: &UserId,
        project_id: &QualifiedProjectId,
        role_template_id: &str,
    ) -> Result<RoleBinding> {
        let body = BindRoleBody {
            user_id: user_id.as_str(),
            project_id: project_id.to_string(),
            role_template_id,
        };

        let dto: RoleBindingDto = self
            .post_json("bind_role", self.url("/v3/projectroletemplatebindings"), &body)
            .await?;
        Ok(RoleBinding {
            name: dto.name,
            role_template_id: dto.role_template_id,
        })
    }

    async fn create_user(&self, username: &str, password: &str) -> Result<RemoteUser> {
        let body = CreateUserBody {
            username,
            must_change_password: false,
            password,
            principal_ids: [],
        };

        let dto: UserDto = self
            .post_json("create_user", self.url("/v3/users"), &body)
            .await?;
        Ok(dto.into())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<RemoteUser>> {
        let url = self.url(&format!("/v3/users?username={username}"));
        let collection: UserCollection = self.get_json("find_user_by_username", url).await?;
        Ok(collection.data.into_iter().next().map(Into::into))
    }

    async fn get_user_by_id(&self, user_ref: &str) -> Result<Identity> {
        let url = self.url(&format!("/v3/users/{user_ref}"));
        let dto: IdentityDto = self.get_json("get_user_by_id", url).await?;

        // The remote reports unknown ids as a 2xx body with type "error".
        if dto.kind == "error" {
            return Err(NotFoundError::user(user_ref).into());
        }

        Ok(Identity {
            id: UserId::new(dto.id),
            username: dto.username,
            display_name: dto.name,
        })
    }

    async fn login(&self, username: &str, password: &str) -> Result<SessionToken> {
        let body = LoginBody { username, password };
        let url = self.url("/v3-public/localProviders/local?action=login");

        // Login authenticates with the body, not the bearer credential.
        info!(operation = "login", username, "POST");
        let request = self.http.post(&url).json(&body);
        let dto: LoginDto = self.send("login", request).await?;
        Ok(SessionToken::new(dto.token))
    }

    async fn list_namespaces(&self) -> Result<Vec<Namespace>> {
        let url = self.url(&format!("/k8s/clusters/{}/v1/namespaces", self.cluster));
        let collection: NamespaceCollection = self.get_json("list_namespaces", url).await?;

        Ok(collection
            .data
            .into_iter()
            .map(|mut dto| Namespace {
                name: dto.id,
                project_annotation: dto.metadata.annotations.remove(PROJECT_ANNOTATION),
            })
            .collect())
    }

    async fn projects_of_user(&self, user_id: &UserId) -> Result<Vec<String>> {
        let url = self.url(&format!("/v3/projects?userId={user_id}"));
        let collection: ProjectCollection = self.get_json("projects_of_user", url).await?;
        Ok(collection.data.into_iter().map(|p| p.id).collect())
    }

    async fn project_members(
        &self,
        project_id: &QualifiedProjectId,
    ) -> Result<Vec<MembershipRecord>> {
        let url = self.url(&format!(
            "/v3/projectroletemplatebindings?projectId={project_id}"
        ));

        let collection: MembershipCollection = match self.get_json("project_members", url).await {
            Err(Error::Remote(RemoteError::Status { status: 404, .. })) => {
                return Err(NotFoundError::project(project_id.to_string()).into());
            }
            other => other?,
        };

        Ok(collection
            .data
            .into_iter()
            .map(|dto| MembershipRecord {
                user_id: dto.user_id,
            })
            .collect())
    }

    async fn generate_kubeconfig(&self, token: &SessionToken) -> Result<Kubeconfig> {
        let url = self.url(&format!(
            "/v3/clusters/{}?action=generateKubeconfig",
            self.cluster
        ));

        // Rendered for the session's own identity, so the session token is
        // the credential here.
        info!(operation = "generate_kubeconfig", url = %url, "POST");
        let request = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", token.as_str()));
        let dto: KubeconfigDto = self.send("generate_kubeconfig", request).await?;
        Ok(Kubeconfig(dto.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RancherConfig;

    fn config_with_token() -> RancherConfig {
        RancherConfig {
            api_url: "https://rancher.example.com/".into(),
            cluster_id: "c-1".into(),
            token: Some("token-abc".into()),
            timeout_ms: 5_000,
            connect_timeout_ms: 2_000,
        }
    }

    #[test]
    fn from_config_requires_token() {
        let mut config = config_with_token();
        config.token = None;
        let err = RancherClient::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("rancher.token"));
    }

    #[test]
    fn url_joins_without_double_slash() {
        let client = RancherClient::from_config(&config_with_token()).unwrap();
        assert_eq!(
            client.url("/v3/projects"),
            "https://rancher.example.com/v3/projects"
        );
    }

    #[test]
    fn user_dto_converts_to_remote_user() {
        let user: RemoteUser = UserDto {
            id: "u-1".into(),
            principal_ids: vec!["local://u-1".into()],
        }
        .into();
        assert_eq!(user.id.as_str(), "u-1");
        assert_eq!(user.principal_ids, vec!["local://u-1".to_string()]);
    }
}
