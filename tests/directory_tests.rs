use std::sync::Arc;

use tenantforge::application::UserDirectory;
use tenantforge::port::ClusterManager;
use tenantforge::testkit::ScriptedClusterManager;

#[tokio::test]
async fn retried_find_or_create_creates_exactly_once() {
    let cluster = Arc::new(ScriptedClusterManager::new());
    let directory = UserDirectory::new(Arc::clone(&cluster) as Arc<dyn ClusterManager>);

    let (first, created_first) = directory.find_or_create("erin").await.unwrap();
    let (second, created_second) = directory.find_or_create("erin").await.unwrap();

    assert!(created_first);
    assert!(!created_second);
    assert_eq!(first.id, second.id);
    // Two lookups, one create: the second invocation found the user and
    // skipped creation.
    assert_eq!(cluster.count("find_user_by_username"), 2);
    assert_eq!(cluster.count("create_user"), 1);
    assert_eq!(cluster.created_users(), 1);
}

#[tokio::test]
async fn login_returns_the_session_token() {
    let cluster = Arc::new(ScriptedClusterManager::new());
    let directory = UserDirectory::new(Arc::clone(&cluster) as Arc<dyn ClusterManager>);

    let token = directory.login("erin", "secret").await.unwrap();

    assert_eq!(token.as_str(), "token-erin");
}

#[tokio::test]
async fn unresolvable_identity_is_a_not_found_error() {
    let cluster = Arc::new(ScriptedClusterManager::new());
    let directory = UserDirectory::new(Arc::clone(&cluster) as Arc<dyn ClusterManager>);

    let err = directory.resolve_identity("u-ghost").await.unwrap_err();

    assert!(err.is_not_found());
}
