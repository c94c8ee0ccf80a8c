//! Outbound adapters implementing the port traits over HTTP.

pub mod rancher;
pub mod workspace;

pub use rancher::RancherClient;
pub use workspace::WorkspaceServiceClient;
