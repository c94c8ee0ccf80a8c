//! Wire types for the cluster-manager REST API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::QuotaLimits;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectBody<'a> {
    pub name: &'a str,
    pub cluster_id: &'a str,
    pub namespace_default_resource_quota: QuotaEnvelope<'a>,
    pub resource_quota: ProjectQuotaEnvelope<'a>,
}

#[derive(Serialize)]
pub struct QuotaEnvelope<'a> {
    pub limit: &'a QuotaLimits,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectQuotaEnvelope<'a> {
    pub limit: &'a QuotaLimits,
    pub used_limit: EmptyObject,
}

/// Serializes as `{}`; the cluster manager requires the field to be present.
#[derive(Serialize, Default)]
pub struct EmptyObject {}

#[derive(Serialize)]
pub struct CatalogRepoBody<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub metadata: CatalogRepoMetadata<'a>,
    pub spec: CatalogRepoSpec<'a>,
}

#[derive(Serialize)]
pub struct CatalogRepoMetadata<'a> {
    pub name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRepoSpec<'a> {
    pub url: &'static str,
    pub client_secret: Option<()>,
    pub git_repo: &'a str,
    pub git_branch: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BindRoleBody<'a> {
    pub user_id: &'a str,
    pub project_id: String,
    pub role_template_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserBody<'a> {
    pub username: &'a str,
    pub must_change_password: bool,
    pub password: &'a str,
    pub principal_ids: [&'static str; 0],
}

#[derive(Serialize)]
pub struct LoginBody<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct CreatedProject {
    pub id: String,
}

#[derive(Deserialize)]
pub struct CreatedRepo {
    pub id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleBindingDto {
    #[serde(default)]
    pub role_template_id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    #[serde(default)]
    pub principal_ids: Vec<String>,
}

#[derive(Deserialize, Default)]
pub struct UserCollection {
    #[serde(default)]
    pub data: Vec<UserDto>,
}

#[derive(Deserialize)]
pub struct IdentityDto {
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Deserialize)]
pub struct LoginDto {
    pub token: String,
}

#[derive(Deserialize, Default)]
pub struct NamespaceMetadata {
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

#[derive(Deserialize)]
pub struct NamespaceDto {
    pub id: String,
    #[serde(default)]
    pub metadata: NamespaceMetadata,
}

#[derive(Deserialize, Default)]
pub struct NamespaceCollection {
    #[serde(default)]
    pub data: Vec<NamespaceDto>,
}

#[derive(Deserialize)]
pub struct ProjectDto {
    pub id: String,
}

#[derive(Deserialize, Default)]
pub struct ProjectCollection {
    #[serde(default)]
    pub data: Vec<ProjectDto>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipDto {
    pub user_id: String,
}

#[derive(Deserialize, Default)]
pub struct MembershipCollection {
    #[serde(default)]
    pub data: Vec<MembershipDto>,
}

#[derive(Deserialize)]
pub struct KubeconfigDto {
    pub config: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Plan;

    #[test]
    fn create_project_body_matches_wire_shape() {
        let quota = Plan::Starter.quota();
        let body = CreateProjectBody {
            name: "acme",
            cluster_id: "c-1",
            namespace_default_resource_quota: QuotaEnvelope {
                limit: &quota.namespace_default_quota,
            },
            resource_quota: ProjectQuotaEnvelope {
                limit: &quota.project_quota,
                used_limit: EmptyObject::default(),
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["name"], "acme");
        assert_eq!(json["clusterId"], "c-1");
        assert_eq!(
            json["namespaceDefaultResourceQuota"]["limit"]["limitsCpu"],
            "1000m"
        );
        assert_eq!(json["resourceQuota"]["limit"]["pods"], "100");
        assert!(json["resourceQuota"]["usedLimit"]
            .as_object()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn catalog_repo_body_carries_git_spec() {
        let body = CatalogRepoBody {
            kind: "catalog.cattle.io.clusterrepo",
            metadata: CatalogRepoMetadata { name: "acme" },
            spec: CatalogRepoSpec {
                url: "",
                client_secret: None,
                git_repo: "https://github.com/acme/catalog",
                git_branch: "main",
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "catalog.cattle.io.clusterrepo");
        assert_eq!(json["spec"]["gitRepo"], "https://github.com/acme/catalog");
        assert_eq!(json["spec"]["gitBranch"], "main");
        assert!(json["spec"]["clientSecret"].is_null());
    }

    #[test]
    fn user_collection_tolerates_missing_data() {
        let parsed: UserCollection = serde_json::from_str("{}").unwrap();
        assert!(parsed.data.is_empty());
    }

    #[test]
    fn namespace_dto_reads_annotations() {
        let parsed: NamespaceDto = serde_json::from_str(
            r#"{"id":"acme-ns","metadata":{"annotations":{"field.cattle.io/projectId":"c-1:p-x"}}}"#,
        )
        .unwrap();
        assert_eq!(
            parsed.metadata.annotations.get("field.cattle.io/projectId"),
            Some(&"c-1:p-x".to_string())
        );
    }

    #[test]
    fn membership_dto_reads_composite_user_id() {
        let parsed: MembershipCollection =
            serde_json::from_str(r#"{"data":[{"userId":"u-1/p-x"}]}"#).unwrap();
        assert_eq!(parsed.data[0].user_id, "u-1/p-x");
    }
}
