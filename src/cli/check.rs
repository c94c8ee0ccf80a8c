//! Diagnostic checks.

use std::path::Path;

use crate::config::{Config, RANCHER_TOKEN_ENV};
use crate::error::Result;

use super::output;

/// Validate a configuration file without issuing remote calls.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    println!("Checking configuration: {}", path.display());

    let config = Config::load(path)?;

    output::ok("Configuration file is valid");
    output::section("Summary");
    output::key_value("Cluster", &config.rancher.cluster_id);
    output::key_value("Manager", &config.rancher.api_url);
    output::key_value("Workspace", &config.workspace.api_url);
    output::key_value("Catalog", &config.git.repo_url);
    output::key_value("Branch", &config.git.branch);

    println!();
    if config.rancher.token.is_some() {
        output::ok(&format!("Bearer token found (from {RANCHER_TOKEN_ENV})"));
    } else {
        output::warn(&format!(
            "No bearer token configured; set {RANCHER_TOKEN_ENV} before provisioning"
        ));
    }

    Ok(())
}
