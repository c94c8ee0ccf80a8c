//! Service plans and their resource-quota ceilings.
//!
//! Each plan maps to an immutable pair of quota documents: the default quota
//! stamped onto every namespace in the project, and the project-wide quota.
//! The numeric ceilings only differ between tiers; the shape is identical.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

/// Named service tier. Parsing is exact and case-sensitive; anything else
/// fails before a single remote call is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plan {
    Starter,
    Pro,
    Elite,
}

impl Plan {
    pub const ALL: [Self; 3] = [Self::Starter, Self::Pro, Self::Elite];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Pro => "Pro",
            Self::Elite => "Elite",
        }
    }

    /// The quota pair this plan provisions.
    #[must_use]
    pub const fn quota(self) -> &'static QuotaDocument {
        match self {
            Self::Starter => &STARTER,
            Self::Pro => &PRO,
            Self::Elite => &ELITE,
        }
    }
}

impl FromStr for Plan {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Starter" => Ok(Self::Starter),
            "Pro" => Ok(Self::Pro),
            "Elite" => Ok(Self::Elite),
            other => Err(ValidationError::InvalidPlan {
                plan: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The quota pair provisioned for a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotaDocument {
    /// Quota stamped onto each namespace created inside the project.
    pub namespace_default_quota: QuotaLimits,
    /// Ceiling across the whole project.
    pub project_quota: QuotaLimits,
}

/// Numeric ceilings, kept as the strings the cluster manager expects on the
/// wire (`1000m`, `2000Mi`, plain counts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaLimits {
    pub config_maps: &'static str,
    pub limits_cpu: &'static str,
    pub limits_memory: &'static str,
    pub persistent_volume_claims: &'static str,
    pub pods: &'static str,
    pub replication_controllers: &'static str,
    pub requests_storage: &'static str,
    pub secrets: &'static str,
    pub services: &'static str,
    pub services_load_balancers: &'static str,
    pub services_node_ports: &'static str,
}

static STARTER: QuotaDocument = QuotaDocument {
    namespace_default_quota: QuotaLimits {
        config_maps: "10",
        limits_cpu: "1000m",
        limits_memory: "2000Mi",
        persistent_volume_claims: "10",
        pods: "50",
        replication_controllers: "15",
        requests_storage: "50000Mi",
        secrets: "20",
        services: "50",
        services_load_balancers: "0",
        services_node_ports: "0",
    },
    project_quota: QuotaLimits {
        config_maps: "10",
        limits_cpu: "1000m",
        limits_memory: "2000Mi",
        persistent_volume_claims: "10",
        pods: "100",
        replication_controllers: "30",
        requests_storage: "50000Mi",
        secrets: "20",
        services: "50",
        services_load_balancers: "0",
        services_node_ports: "0",
    },
};

static PRO: QuotaDocument = QuotaDocument {
    namespace_default_quota: QuotaLimits {
        config_maps: "20",
        limits_cpu: "2000m",
        limits_memory: "4000Mi",
        persistent_volume_claims: "20",
        pods: "100",
        replication_controllers: "25",
        requests_storage: "50000Mi",
        secrets: "20",
        services: "50",
        services_load_balancers: "0",
        services_node_ports: "0",
    },
    project_quota: QuotaLimits {
        config_maps: "20",
        limits_cpu: "2000m",
        limits_memory: "4000Mi",
        persistent_volume_claims: "20",
        pods: "100",
        replication_controllers: "25",
        requests_storage: "50000Mi",
        secrets: "20",
        services: "50",
        services_load_balancers: "0",
        services_node_ports: "0",
    },
};

static ELITE: QuotaDocument = QuotaDocument {
    namespace_default_quota: QuotaLimits {
        config_maps: "20",
        limits_cpu: "4000m",
        limits_memory: "8000Mi",
        persistent_volume_claims: "30",
        pods: "200",
        replication_controllers: "50",
        requests_storage: "200000Mi",
        secrets: "20",
        services: "100",
        services_load_balancers: "0",
        services_node_ports: "0",
    },
    project_quota: QuotaLimits {
        config_maps: "20",
        limits_cpu: "4000m",
        limits_memory: "8000Mi",
        persistent_volume_claims: "30",
        pods: "200",
        replication_controllers: "50",
        requests_storage: "200000Mi",
        secrets: "20",
        services: "100",
        services_load_balancers: "0",
        services_node_ports: "0",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_tier_names() {
        assert_eq!("Starter".parse::<Plan>().unwrap(), Plan::Starter);
        assert_eq!("Pro".parse::<Plan>().unwrap(), Plan::Pro);
        assert_eq!("Elite".parse::<Plan>().unwrap(), Plan::Elite);
    }

    #[test]
    fn rejects_case_variants_and_unknown_names() {
        for bad in ["starter", "PRO", "elite", "Gold", "", " Pro"] {
            let err = bad.parse::<Plan>().unwrap_err();
            assert!(matches!(err, ValidationError::InvalidPlan { .. }), "{bad}");
        }
    }

    #[test]
    fn tiers_scale_cpu_and_memory() {
        assert_eq!(Plan::Starter.quota().project_quota.limits_cpu, "1000m");
        assert_eq!(Plan::Pro.quota().project_quota.limits_cpu, "2000m");
        assert_eq!(Plan::Elite.quota().project_quota.limits_cpu, "4000m");
        assert_eq!(Plan::Elite.quota().project_quota.limits_memory, "8000Mi");
    }

    #[test]
    fn starter_namespace_quota_bounds_fewer_pods_than_project() {
        let quota = Plan::Starter.quota();
        assert_eq!(quota.namespace_default_quota.pods, "50");
        assert_eq!(quota.project_quota.pods, "100");
    }

    #[test]
    fn quota_limits_serialize_camel_case() {
        let json = serde_json::to_value(&Plan::Pro.quota().project_quota).unwrap();
        assert_eq!(json["limitsCpu"], "2000m");
        assert_eq!(json["servicesNodePorts"], "0");
        assert_eq!(json["persistentVolumeClaims"], "20");
    }
}
