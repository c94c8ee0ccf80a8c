//! Provision command handler.

use crate::application::Orchestrator;
use crate::domain::{Credentials, ProvisionRequest};
use crate::error::Result;

use super::{output, ProvisionArgs};

/// Run the provisioning workflow and print the resulting workspace.
pub async fn execute(orchestrator: &Orchestrator, args: ProvisionArgs) -> Result<()> {
    let request = ProvisionRequest {
        project_name: args.project_name,
        namespace: args.namespace,
        username: args.username,
        plan: args.plan,
        credentials: Credentials {
            id_token: args.id_token,
            refresh_token: args.refresh_token,
        },
    };

    let provisioned = orchestrator.provision(&request).await?;

    output::ok("Workspace provisioned");
    output::section("Workspace");
    output::key_value("Project", &provisioned.project_id);
    output::key_value("Namespace", &provisioned.namespace);
    output::key_value("Token", provisioned.token.as_str());

    Ok(())
}
