//! Identifier newtypes for remote-owned entities.
//!
//! Inner strings are private so all construction goes through the defined
//! constructors. `QualifiedProjectId` enforces the cluster-qualification
//! invariant by construction.

use std::fmt;

/// Identifier of the Kubernetes cluster managed by the cluster manager.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClusterId(String);

impl ClusterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ClusterId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ClusterId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Opaque project identifier as returned by the cluster manager.
///
/// May or may not carry a cluster prefix; use
/// [`QualifiedProjectId::qualify`] before handing it to membership or
/// namespace-lookup calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Directory user identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Short-lived session credential returned by login.
///
/// Deliberately has no `Display` impl so the raw value never lands in logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SessionToken {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// A project id in canonical `<cluster>:<project>` form.
///
/// This is the only way to build a qualified id; [`Self::qualify`] splits on
/// an existing `:` instead of re-prefixing, so qualification is idempotent
/// and double-prefixed ids cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedProjectId {
    cluster: String,
    project: String,
}

impl QualifiedProjectId {
    /// Qualify a raw project id against the configured cluster.
    ///
    /// A raw value already containing a `:` separator is taken as canonical
    /// and split; anything else is treated as local to `cluster`.
    pub fn qualify(raw: &str, cluster: &ClusterId) -> Self {
        match raw.split_once(':') {
            Some((cluster_part, project_part)) => Self {
                cluster: cluster_part.to_string(),
                project: project_part.to_string(),
            },
            None => Self {
                cluster: cluster.as_str().to_string(),
                project: raw.to_string(),
            },
        }
    }

    /// The cluster segment.
    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    /// The bare project segment, without the cluster prefix.
    pub fn project(&self) -> &str {
        &self.project
    }
}

impl fmt::Display for QualifiedProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.cluster, self.project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualify_prefixes_bare_id() {
        let cluster = ClusterId::new("c-1");
        let id = QualifiedProjectId::qualify("p-abc", &cluster);
        assert_eq!(id.to_string(), "c-1:p-abc");
        assert_eq!(id.cluster(), "c-1");
        assert_eq!(id.project(), "p-abc");
    }

    #[test]
    fn qualify_is_noop_for_qualified_id() {
        let cluster = ClusterId::new("c-1");
        let id = QualifiedProjectId::qualify("c-2:p-abc", &cluster);
        assert_eq!(id.to_string(), "c-2:p-abc");
    }

    #[test]
    fn qualify_is_idempotent() {
        let cluster = ClusterId::new("c-1");
        let once = QualifiedProjectId::qualify("p-abc", &cluster);
        let twice = QualifiedProjectId::qualify(&once.to_string(), &cluster);
        assert_eq!(once, twice);
    }

    #[test]
    fn session_token_round_trip() {
        let token = SessionToken::new("kubeconfig-user-abc:xyz");
        assert_eq!(token.as_str(), "kubeconfig-user-abc:xyz");
        assert!(!token.is_empty());
    }

    #[test]
    fn project_id_display() {
        let id = ProjectId::new("p-xyz");
        assert_eq!(format!("{id}"), "p-xyz");
    }
}
