//! Constraint sets for [`ClusterSchema`].

use super::{Constraint, ConstraintError, Validatable, ValidationContext};
use crate::cluster::ClusterSchema;

type Check = Result<bool, ConstraintError>;

const MIN_DISK_SIZE_GB: i64 = 1;
const MAX_DISK_SIZE_GB: i64 = 16_384;
const LARGE_DISK_SIZE_GB: i64 = 100;

pub static CLUSTER_HARD_CONSTRAINTS: &[Constraint<ClusterSchema>] = &[
    Constraint::new(
        "has-compute",
        "Cluster must have at least one node group or Fargate profile",
        has_compute,
    ),
    Constraint::new(
        "desired-within-range",
        "Node group desired size must be between its min and max size",
        desired_within_range,
    ),
    Constraint::new(
        "min-not-above-max",
        "Node group min size must not exceed its max size",
        min_not_above_max,
    ),
    Constraint::new(
        "node-group-sizes-non-negative",
        "Node group sizes must be non-negative and max size at least 1",
        node_group_sizes_non_negative,
    ),
    Constraint::new(
        "disk-size-within-bounds",
        "Node group disk size must be between 1 and 16384 GB",
        disk_size_within_bounds,
    ),
    Constraint::new(
        "fargate-profile-sizing",
        "Fargate profiles must have positive pod count, vCPU, memory and hours",
        fargate_profile_sizing,
    ),
];

pub static CLUSTER_SOFT_CONSTRAINTS: &[Constraint<ClusterSchema>] = &[
    Constraint::new(
        "multi-az-node-groups",
        "Spread node groups across at least two availability zones for high availability",
        multi_az_node_groups,
    ),
    Constraint::new(
        "spot-interruption-risk",
        "Spot node groups can be interrupted at short notice; keep critical workloads on on-demand capacity",
        spot_interruption_risk,
    ),
    Constraint::new(
        "node-group-redundancy",
        "Node groups with fewer than 2 desired nodes have no redundancy",
        node_group_redundancy,
    ),
    Constraint::new(
        "extended-support-surcharge",
        "Extended support adds a per-hour surcharge to the control plane; plan a version upgrade",
        extended_support_surcharge,
    ),
    Constraint::new(
        "fargate-billing-awareness",
        "Fargate pods are billed per vCPU and memory for every running hour; review pod sizing",
        fargate_billing_awareness,
    ),
    Constraint::new(
        "large-node-disks",
        "Node group disks larger than 100 GB add significant storage cost",
        large_node_disks,
    ),
];

impl Validatable for ClusterSchema {
    fn hard_constraints() -> &'static [Constraint<Self>] {
        CLUSTER_HARD_CONSTRAINTS
    }

    fn soft_constraints() -> &'static [Constraint<Self>] {
        CLUSTER_SOFT_CONSTRAINTS
    }
}

fn has_compute(cluster: &ClusterSchema, _: &ValidationContext) -> Check {
    Ok(!cluster.node_groups.is_empty() || !cluster.fargate_profiles.is_empty())
}

fn desired_within_range(cluster: &ClusterSchema, _: &ValidationContext) -> Check {
    Ok(cluster
        .node_groups
        .iter()
        .all(|ng| ng.min_size <= ng.desired_size && ng.desired_size <= ng.max_size))
}

fn min_not_above_max(cluster: &ClusterSchema, _: &ValidationContext) -> Check {
    Ok(cluster.node_groups.iter().all(|ng| ng.min_size <= ng.max_size))
}

fn node_group_sizes_non_negative(cluster: &ClusterSchema, _: &ValidationContext) -> Check {
    Ok(cluster
        .node_groups
        .iter()
        .all(|ng| ng.min_size >= 0 && ng.desired_size >= 0 && ng.max_size >= 1))
}

fn disk_size_within_bounds(cluster: &ClusterSchema, _: &ValidationContext) -> Check {
    Ok(cluster
        .node_groups
        .iter()
        .all(|ng| (MIN_DISK_SIZE_GB..=MAX_DISK_SIZE_GB).contains(&ng.disk_size_gb)))
}

fn fargate_profile_sizing(cluster: &ClusterSchema, _: &ValidationContext) -> Check {
    Ok(cluster.fargate_profiles.iter().all(|fp| {
        fp.pod_count > 0.0 && fp.vcpu_per_pod > 0.0 && fp.memory_gb_per_pod > 0.0 && fp.hours_per_month > 0.0
    }))
}

fn multi_az_node_groups(cluster: &ClusterSchema, _: &ValidationContext) -> Check {
    Ok(cluster.node_groups.is_empty() || cluster.availability_zones().len() >= 2)
}

fn spot_interruption_risk(cluster: &ClusterSchema, _: &ValidationContext) -> Check {
    Ok(!cluster.node_groups.iter().any(|ng| ng.is_spot()))
}

fn node_group_redundancy(cluster: &ClusterSchema, _: &ValidationContext) -> Check {
    Ok(cluster.node_groups.iter().all(|ng| ng.desired_size >= 2))
}

fn extended_support_surcharge(cluster: &ClusterSchema, _: &ValidationContext) -> Check {
    Ok(!cluster.extended_support)
}

fn fargate_billing_awareness(cluster: &ClusterSchema, _: &ValidationContext) -> Check {
    Ok(cluster.fargate_profiles.is_empty())
}

fn large_node_disks(cluster: &ClusterSchema, _: &ValidationContext) -> Check {
    Ok(cluster.node_groups.iter().all(|ng| ng.disk_size_gb <= LARGE_DISK_SIZE_GB))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::{CapacityType, FargateProfile, NodeGroup};
    use crate::validation::ValidationResult;

    fn node_group(min: i64, desired: i64, max: i64) -> NodeGroup {
        NodeGroup {
            id: "ng-1".to_string(),
            name: "general".to_string(),
            min_size: min,
            desired_size: desired,
            max_size: max,
            availability_zones: vec!["us-east-1a".to_string(), "us-east-1b".to_string()],
            ..Default::default()
        }
    }

    fn cluster(node_groups: Vec<NodeGroup>) -> ClusterSchema {
        ClusterSchema {
            id: "eks-1".to_string(),
            name: "prod".to_string(),
            node_groups,
            ..Default::default()
        }
    }

    fn validate(cluster: &ClusterSchema) -> ValidationResult {
        cluster.validate(&ValidationContext::for_region("us-east-1"))
    }

    #[test]
    fn test_well_formed_cluster_is_clean() {
        let result = validate(&cluster(vec![node_group(2, 3, 6)]));
        assert!(result.valid, "unexpected errors: {:?}", result.errors);
        assert!(result.warnings.is_empty(), "unexpected warnings: {:?}", result.warnings);
    }

    #[test]
    fn test_cluster_without_compute_is_invalid() {
        let result = validate(&cluster(Vec::new()));
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec!["Cluster must have at least one node group or Fargate profile"]
        );
    }

    #[test]
    fn test_desired_size_outside_range() {
        let result = validate(&cluster(vec![node_group(1, 15, 10)]));
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec!["Node group desired size must be between its min and max size"]
        );

        let result = validate(&cluster(vec![node_group(1, 5, 10)]));
        assert!(result.valid);
    }

    #[test]
    fn test_min_above_max() {
        let result = validate(&cluster(vec![node_group(5, 5, 3)]));
        assert_eq!(
            result.errors,
            vec![
                "Node group desired size must be between its min and max size",
                "Node group min size must not exceed its max size",
            ]
        );
    }

    #[test]
    fn test_negative_sizes_are_invalid() {
        let result = validate(&cluster(vec![node_group(-1, 0, 0)]));
        assert!(
            result
                .errors
                .contains(&"Node group sizes must be non-negative and max size at least 1".to_string())
        );
    }

    #[test]
    fn test_disk_size_bounds() {
        let ctx = ValidationContext::default();
        for (disk, ok) in [(0, false), (1, true), (20, true), (16_384, true), (16_385, false)] {
            let schema = cluster(vec![NodeGroup {
                disk_size_gb: disk,
                ..node_group(1, 2, 3)
            }]);
            assert_eq!(disk_size_within_bounds(&schema, &ctx).unwrap(), ok, "{disk} GB");
        }
    }

    #[test]
    fn test_fargate_only_cluster() {
        let schema = ClusterSchema {
            fargate_profiles: vec![FargateProfile {
                name: "serverless".to_string(),
                pod_count: 4.0,
                ..Default::default()
            }],
            ..cluster(Vec::new())
        };
        let result = validate(&schema);
        assert!(result.valid, "unexpected errors: {:?}", result.errors);
        assert_eq!(
            result.warnings,
            vec!["Fargate pods are billed per vCPU and memory for every running hour; review pod sizing"]
        );
    }

    #[test]
    fn test_fargate_profile_with_zero_pods_is_invalid() {
        let schema = ClusterSchema {
            fargate_profiles: vec![FargateProfile {
                pod_count: 0.0,
                ..Default::default()
            }],
            ..cluster(Vec::new())
        };
        let result = validate(&schema);
        assert_eq!(
            result.errors,
            vec!["Fargate profiles must have positive pod count, vCPU, memory and hours"]
        );
    }

    #[test]
    fn test_soft_warnings_for_risky_cluster() {
        let schema = ClusterSchema {
            extended_support: true,
            ..cluster(vec![NodeGroup {
                capacity_type: CapacityType::Spot,
                disk_size_gb: 200,
                availability_zones: vec!["us-east-1a".to_string()],
                ..node_group(1, 1, 3)
            }])
        };

        let result = validate(&schema);
        assert!(result.valid, "unexpected errors: {:?}", result.errors);
        let names: Vec<&str> = CLUSTER_SOFT_CONSTRAINTS
            .iter()
            .filter(|c| result.warnings.contains(&c.message.to_string()))
            .map(|c| c.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "multi-az-node-groups",
                "spot-interruption-risk",
                "node-group-redundancy",
                "extended-support-surcharge",
                "large-node-disks",
            ]
        );
    }
}
