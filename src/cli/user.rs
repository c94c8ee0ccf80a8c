//! User lookup-or-provision and login command handlers.

use crate::application::Orchestrator;
use crate::error::Result;

use super::{output, LoginArgs, UserArgs};

/// Log the user in (creating them when absent) and print their workspace.
pub async fn execute(orchestrator: &Orchestrator, args: UserArgs) -> Result<()> {
    let workspace = orchestrator.find_user_or_provision(&args.username).await?;

    output::section("User");
    output::key_value("Id", &workspace.user_id);
    output::key_value("Token", workspace.token.as_str());
    match &workspace.binding {
        Some(binding) => {
            output::key_value("Namespace", &binding.namespace);
            output::key_value("Project", &binding.project_id);
        }
        None => output::warn("No workspace bound to this user yet"),
    }

    Ok(())
}

/// Log a user in with explicit credentials and print the session token.
pub async fn execute_login(orchestrator: &Orchestrator, args: LoginArgs) -> Result<()> {
    let token = orchestrator.login(&args.username, &args.password).await?;
    output::key_value("Token", token.as_str());
    Ok(())
}
