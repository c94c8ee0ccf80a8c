//! Namespace-provisioning port.

use async_trait::async_trait;

use crate::domain::QualifiedProjectId;
use crate::error::Result;

/// Client for the namespace-provisioning service.
///
/// Namespace existence is downstream of project existence: the project id is
/// always supplied and the service places the namespace inside that project.
#[async_trait]
pub trait NamespaceProvisioner: Send + Sync {
    /// Create a namespace for the project. Returns the namespace name as
    /// produced by the service (which callers must prefer over any requested
    /// name).
    async fn create_namespace(
        &self,
        project_name: &str,
        project_id: &QualifiedProjectId,
    ) -> Result<String>;
}
