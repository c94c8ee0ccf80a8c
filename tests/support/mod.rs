//! Builders shared across integration tests.

use std::sync::Arc;

use tenantforge::application::Orchestrator;
use tenantforge::config::GitConfig;
use tenantforge::domain::{ClusterId, Credentials, Identity, ProvisionRequest, UserId};
use tenantforge::port::{ClusterManager, NamespaceProvisioner};
use tenantforge::testkit::{ScriptedClusterManager, ScriptedWorkspaceService};

pub const TEST_CLUSTER: &str = "c-1";

/// Wire an orchestrator against scripted fakes on cluster `c-1`.
pub fn make_orchestrator(
    cluster: &Arc<ScriptedClusterManager>,
    workspace: &Arc<ScriptedWorkspaceService>,
) -> Orchestrator {
    Orchestrator::new(
        Arc::clone(cluster) as Arc<dyn ClusterManager>,
        Arc::clone(workspace) as Arc<dyn NamespaceProvisioner>,
        ClusterId::new(TEST_CLUSTER),
        &GitConfig::default(),
    )
}

/// A complete, valid provisioning request.
pub fn make_request(project: &str, plan: &str, username: &str, namespace: &str) -> ProvisionRequest {
    ProvisionRequest {
        project_name: project.into(),
        namespace: namespace.into(),
        username: username.into(),
        plan: plan.into(),
        credentials: Credentials {
            id_token: "id-token".into(),
            refresh_token: "refresh-token".into(),
        },
    }
}

/// A resolvable identity for the scripted cluster manager.
pub fn make_identity(user_ref: &str) -> Identity {
    Identity {
        id: UserId::new(user_ref),
        username: format!("{user_ref}-name"),
        display_name: format!("{user_ref} display"),
    }
}
