//! Scriptable in-memory namespace-provisioning service.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::QualifiedProjectId;
use crate::error::{RemoteError, Result};
use crate::port::NamespaceProvisioner;

#[derive(Default)]
struct State {
    calls: Vec<(String, String)>,
    namespace: String,
    fail_status: Option<u16>,
    reject_message: Option<String>,
}

/// In-memory [`NamespaceProvisioner`] returning a scripted namespace name.
pub struct ScriptedWorkspaceService {
    state: Mutex<State>,
}

impl ScriptedWorkspaceService {
    /// A service that answers every request with `namespace`.
    #[must_use]
    pub fn returning(namespace: &str) -> Self {
        Self {
            state: Mutex::new(State {
                namespace: namespace.to_string(),
                ..State::default()
            }),
        }
    }

    /// Fail the next calls with the given HTTP status.
    pub fn fail_with(&self, status: u16) {
        self.state.lock().unwrap().fail_status = Some(status);
    }

    /// Answer with a 2xx body carrying an error message.
    pub fn reject_with(&self, message: &str) {
        self.state.lock().unwrap().reject_message = Some(message.to_string());
    }

    /// Recorded `(project_name, qualified_project_id)` pairs, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().calls.clone()
    }
}

#[async_trait]
impl NamespaceProvisioner for ScriptedWorkspaceService {
    async fn create_namespace(
        &self,
        project_name: &str,
        project_id: &QualifiedProjectId,
    ) -> Result<String> {
        let mut state = self.state.lock().unwrap();
        state
            .calls
            .push((project_name.to_string(), project_id.to_string()));

        if let Some(status) = state.fail_status {
            return Err(RemoteError::Status {
                operation: "create_namespace",
                status,
            }
            .into());
        }
        if let Some(message) = &state.reject_message {
            return Err(RemoteError::Rejected {
                operation: "create_namespace",
                message: message.clone(),
            }
            .into());
        }

        Ok(state.namespace.clone())
    }
}
