mod support;

use std::sync::Arc;

use tenantforge::domain::MembershipRecord;
use tenantforge::testkit::{ScriptedClusterManager, ScriptedWorkspaceService};

fn member(user_id: &str) -> MembershipRecord {
    MembershipRecord {
        user_id: user_id.into(),
    }
}

#[tokio::test]
async fn unresolvable_member_is_dropped_and_counted() {
    let cluster = Arc::new(ScriptedClusterManager::new());
    cluster.add_project(
        "c-1:p-9001",
        vec![member("u-1/p-9001"), member("u-2/p-9001"), member("u-3/p-9001")],
    );
    // u-2 has no resolvable identity.
    cluster.add_identity("u-1", support::make_identity("u-1"));
    cluster.add_identity("u-3", support::make_identity("u-3"));
    let workspace = Arc::new(ScriptedWorkspaceService::returning("unused"));
    let orchestrator = support::make_orchestrator(&cluster, &workspace);

    let roster = orchestrator.list_team_members("p-9001").await.unwrap();

    assert_eq!(roster.members.len(), 2);
    assert_eq!(roster.unresolved, 1);
    assert!(roster.is_partial());
    // Relative order of the successes follows the listing order.
    assert_eq!(roster.members[0].id.as_str(), "u-1");
    assert_eq!(roster.members[1].id.as_str(), "u-3");
}

#[tokio::test]
async fn resolution_uses_the_id_segment_of_composite_user_ids() {
    let cluster = Arc::new(ScriptedClusterManager::new());
    cluster.add_project("c-1:p-9001", vec![member("u-1/p-9001")]);
    cluster.add_identity("u-1", support::make_identity("u-1"));
    let workspace = Arc::new(ScriptedWorkspaceService::returning("unused"));
    let orchestrator = support::make_orchestrator(&cluster, &workspace);

    orchestrator.list_team_members("p-9001").await.unwrap();

    assert!(cluster
        .calls()
        .contains(&"get_user_by_id:u-1".to_string()));
}

#[tokio::test]
async fn missing_project_is_a_not_found_error() {
    let cluster = Arc::new(ScriptedClusterManager::new());
    let workspace = Arc::new(ScriptedWorkspaceService::returning("unused"));
    let orchestrator = support::make_orchestrator(&cluster, &workspace);

    let err = orchestrator.list_team_members("p-ghost").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn empty_project_yields_an_empty_roster_not_an_error() {
    let cluster = Arc::new(ScriptedClusterManager::new());
    cluster.add_project("c-1:p-empty", vec![]);
    let workspace = Arc::new(ScriptedWorkspaceService::returning("unused"));
    let orchestrator = support::make_orchestrator(&cluster, &workspace);

    let roster = orchestrator.list_team_members("p-empty").await.unwrap();

    assert!(roster.is_empty());
    assert!(!roster.is_partial());
}

#[tokio::test]
async fn bare_and_qualified_ids_hit_the_same_project() {
    let cluster = Arc::new(ScriptedClusterManager::new());
    cluster.add_project("c-1:p-9001", vec![]);
    let workspace = Arc::new(ScriptedWorkspaceService::returning("unused"));
    let orchestrator = support::make_orchestrator(&cluster, &workspace);

    orchestrator.list_team_members("p-9001").await.unwrap();
    orchestrator.list_team_members("c-1:p-9001").await.unwrap();

    assert_eq!(
        cluster.calls(),
        vec![
            "project_members:c-1:p-9001",
            "project_members:c-1:p-9001",
        ]
    );
}

#[tokio::test]
async fn add_member_binds_with_the_member_role() {
    let cluster = Arc::new(ScriptedClusterManager::new());
    let workspace = Arc::new(ScriptedWorkspaceService::returning("unused"));
    let orchestrator = support::make_orchestrator(&cluster, &workspace);

    let binding = orchestrator
        .add_team_member("u-9", "p-9001")
        .await
        .unwrap();

    assert_eq!(binding.role_template_id, "project-member");
    assert_eq!(cluster.calls(), vec!["bind_role:u-9@c-1:p-9001"]);
}
