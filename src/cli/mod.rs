//! Command-line interface definitions.

pub mod check;
pub mod kubeconfig;
pub mod members;
pub mod output;
pub mod provision;
pub mod user;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::adapter::{RancherClient, WorkspaceServiceClient};
use crate::application::Orchestrator;
use crate::config::Config;
use crate::error::Result;

/// Tenantforge - tenant workspace provisioning on a shared cluster.
#[derive(Parser, Debug)]
#[command(name = "tenantforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Provision a tenant workspace (repo, project, namespace, user, token)
    Provision(ProvisionArgs),

    /// Log a user in or create them, and resolve their workspace
    User(UserArgs),

    /// List the resolved members of a project
    Members(MembersArgs),

    /// Bind an existing user to a project
    AddMember(AddMemberArgs),

    /// Render a kubeconfig for a session token
    Kubeconfig(KubeconfigArgs),

    /// Log a user in with explicit credentials
    Login(LoginArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `tenantforge check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `provision` subcommand.
#[derive(Parser, Debug)]
pub struct ProvisionArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Project (and catalog repo) name
    #[arg(long)]
    pub project_name: String,

    /// Requested namespace name
    #[arg(long)]
    pub namespace: String,

    /// Directory username to bind to the project
    #[arg(long)]
    pub username: String,

    /// Service plan (Starter, Pro, Elite)
    #[arg(long)]
    pub plan: String,

    /// Caller identity token, passed through
    #[arg(long)]
    pub id_token: String,

    /// Caller refresh token, passed through
    #[arg(long)]
    pub refresh_token: String,
}

/// Arguments for the `user` subcommand.
#[derive(Parser, Debug)]
pub struct UserArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Directory username to log in or create
    #[arg(long)]
    pub username: String,
}

/// Arguments for the `members` subcommand.
#[derive(Parser, Debug)]
pub struct MembersArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Project id, bare or cluster-qualified
    #[arg(long)]
    pub project_id: String,
}

/// Arguments for the `add-member` subcommand.
#[derive(Parser, Debug)]
pub struct AddMemberArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Project id, bare or cluster-qualified
    #[arg(long)]
    pub project_id: String,

    /// Directory user id to bind
    #[arg(long)]
    pub user_id: String,
}

/// Arguments for the `kubeconfig` subcommand.
#[derive(Parser, Debug)]
pub struct KubeconfigArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Session token to render the kubeconfig for
    #[arg(long)]
    pub token: String,
}

/// Arguments for the `login` subcommand.
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Directory username
    #[arg(long)]
    pub username: String,

    /// Password
    #[arg(long)]
    pub password: String,
}

/// Wire the HTTP adapters into an orchestrator from loaded configuration.
pub fn build_orchestrator(config: &Config) -> Result<Orchestrator> {
    let cluster = Arc::new(RancherClient::from_config(&config.rancher)?);
    let namespaces = Arc::new(WorkspaceServiceClient::from_config(&config.workspace));
    Ok(Orchestrator::new(
        cluster,
        namespaces,
        config.rancher.cluster(),
        &config.git,
    ))
}
