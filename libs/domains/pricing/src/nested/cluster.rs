use domain_cloud_resources::{ClusterSchema, FargateProfile, NodeGroup};
use tracing::debug;

use super::{NestedCostCalculator, component, detail};
use crate::models::{Cost, CostCategory, CostComponent, HOURLY_DISPLAY_UNIT, HOURS_PER_MONTH, ServiceType};
use crate::table::PriceLookup;

/// Managed control plane fee per cluster hour
pub const CONTROL_PLANE_HOURLY: f64 = 0.10;
/// Added to the control plane fee while the version is in extended support
pub const EXTENDED_SUPPORT_HOURLY: f64 = 0.50;
/// Fraction taken off the on-demand rate for spot node groups
pub const SPOT_DISCOUNT: f64 = 0.65;
/// Node root volume price per GB-month
pub const NODE_STORAGE_GB_MONTH: f64 = 0.08;

/// Price a cluster's control plane, node groups and Fargate profiles
///
/// The control plane is always present. Node group instance rates and
/// Fargate vCPU/memory rates come from `lookup`.
pub fn calculate_cluster_cost<L: PriceLookup + ?Sized>(schema: &ClusterSchema, region: &str, lookup: &L) -> Cost {
    let mut breakdown = vec![control_plane(schema)];
    breakdown.extend(schema.node_groups.iter().map(|group| node_group(group, region, lookup)));
    breakdown.extend(
        schema
            .fargate_profiles
            .iter()
            .map(|profile| fargate_profile(profile, region, lookup)),
    );

    debug!(
        cluster = %schema.name,
        region,
        node_groups = schema.node_groups.len(),
        fargate_profiles = schema.fargate_profiles.len(),
        "Priced cluster"
    );
    Cost::from_components(breakdown)
}

fn control_plane(schema: &ClusterSchema) -> CostComponent {
    let mut details = vec![detail("Cluster hours", CONTROL_PLANE_HOURLY * HOURS_PER_MONTH)];
    let mut hourly_rate = CONTROL_PLANE_HOURLY;
    if schema.extended_support {
        details.push(detail("Extended support", EXTENDED_SUPPORT_HOURLY * HOURS_PER_MONTH));
        hourly_rate += EXTENDED_SUPPORT_HOURLY;
    }

    component(
        "control-plane",
        "Control Plane",
        CostCategory::ControlPlane,
        HOURLY_DISPLAY_UNIT,
        HOURS_PER_MONTH,
        hourly_rate,
        details,
    )
}

fn node_group<L: PriceLookup + ?Sized>(group: &NodeGroup, region: &str, lookup: &L) -> CostComponent {
    let on_demand = lookup.get_price(region, ServiceType::Ec2, &group.instance_type).price_per_unit;
    let rate = if group.is_spot() {
        on_demand * (1.0 - SPOT_DISCOUNT)
    } else {
        on_demand
    };
    let nodes = group.desired_size.max(0) as f64;
    let disk_gb = group.disk_size_gb.max(0) as f64;
    let node_hours = nodes * HOURS_PER_MONTH;

    component(
        &group.id,
        &group.name,
        CostCategory::Compute,
        HOURLY_DISPLAY_UNIT,
        node_hours,
        rate,
        vec![
            detail(&format!("{} x {}", nodes, group.instance_type), rate * node_hours),
            detail("Node storage", nodes * disk_gb * NODE_STORAGE_GB_MONTH),
        ],
    )
}

fn fargate_profile<L: PriceLookup + ?Sized>(profile: &FargateProfile, region: &str, lookup: &L) -> CostComponent {
    let vcpu_rate = lookup.get_price(region, ServiceType::Fargate, "vcpu_hourly").price_per_unit;
    let memory_rate = lookup.get_price(region, ServiceType::Fargate, "memory_gb_hourly").price_per_unit;
    let pod_hours = profile.pod_count.max(0.0) * profile.hours_per_month.max(0.0);
    let vcpu_hours = pod_hours * profile.vcpu_per_pod.max(0.0);
    let memory_gb_hours = pod_hours * profile.memory_gb_per_pod.max(0.0);

    component(
        &profile.id,
        &profile.name,
        CostCategory::Compute,
        "vCPU-Hr",
        vcpu_hours,
        vcpu_rate,
        vec![
            detail("vCPU", vcpu_hours * vcpu_rate),
            detail("Memory", memory_gb_hours * memory_rate),
        ],
    )
}

impl NestedCostCalculator for ClusterSchema {
    fn calculate_cost<L: PriceLookup + ?Sized>(&self, lookup: &L) -> Cost {
        calculate_cluster_cost(self, &self.region, lookup)
    }
}
