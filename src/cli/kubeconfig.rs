//! Kubeconfig command handler.

use crate::application::Orchestrator;
use crate::domain::SessionToken;
use crate::error::Result;

use super::KubeconfigArgs;

/// Render and print a kubeconfig for a session token.
pub async fn execute(orchestrator: &Orchestrator, args: KubeconfigArgs) -> Result<()> {
    let token = SessionToken::new(args.token);
    let kubeconfig = orchestrator.kubeconfig(&token).await?;
    println!("{}", kubeconfig.as_str());
    Ok(())
}
