//! Tenantforge - tenant workspace provisioning on a shared Kubernetes cluster.
//!
//! This crate turns a request ("give me a project named X on plan Y") into a
//! fully configured tenant: a Git-backed catalog repo, a quota-bounded
//! project, a namespace, a bound user, and a session token. It coordinates a
//! cluster-manager REST API and a namespace-provisioning service; every
//! entity is remote-owned and nothing is cached or persisted locally.
//!
//! # Architecture
//!
//! The crate uses a ports-and-adapters layout:
//!
//! - **[`domain`]** - identifiers, plans, quota tables, and remote-owned
//!   records; `QualifiedProjectId` enforces the cluster-qualification
//!   invariant by construction
//! - **[`port`]** - traits for the two external collaborators
//!   (`ClusterManager`, `NamespaceProvisioner`)
//! - **[`adapter`]** - HTTP implementations of the ports
//! - **[`application`]** - the provisioning orchestrator and its
//!   collaborators; the only layer with business rules
//! - **[`cli`]** - the command boundary consuming the orchestrator
//!
//! Workflows are ordered sequences of remote calls with no transactional
//! boundary: a failing step aborts the workflow, earlier steps remain in
//! effect on the remote system, and the abort names them for operator
//! follow-up. Nothing retries; at-least-once with find-before-create guards
//! is the contract.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use tenantforge::adapter::{RancherClient, WorkspaceServiceClient};
//! use tenantforge::application::Orchestrator;
//! use tenantforge::config::Config;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load("config.toml")?;
//! let orchestrator = Orchestrator::new(
//!     Arc::new(RancherClient::from_config(&config.rancher)?),
//!     Arc::new(WorkspaceServiceClient::from_config(&config.workspace)),
//!     config.rancher.cluster(),
//!     &config.git,
//! );
//! let _workspace = orchestrator.find_user_or_provision("alice").await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
