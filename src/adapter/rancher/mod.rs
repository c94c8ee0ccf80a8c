//! Cluster-manager adapter: REST client and wire types.

mod client;
mod dto;

pub use client::{RancherClient, PROJECT_ANNOTATION};
