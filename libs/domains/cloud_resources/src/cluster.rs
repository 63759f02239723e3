//! Nested Kubernetes cluster schema with node groups and serverless
//! (Fargate) profiles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::{AsRefStr, Display, EnumString};

use crate::error::CloudResourceResult;
use crate::models::fill_default_region;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CapacityType {
    #[default]
    #[serde(alias = "on_demand")]
    OnDemand,
    #[serde(alias = "spot")]
    Spot,
}

/// Managed node group. Sizes are signed so out-of-range input survives
/// parsing and is reported by validation instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeGroup {
    pub id: String,
    pub name: String,
    pub instance_type: String,
    pub capacity_type: CapacityType,
    pub min_size: i64,
    pub max_size: i64,
    pub desired_size: i64,
    pub disk_size_gb: i64,
    pub availability_zones: Vec<String>,
}

impl Default for NodeGroup {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            instance_type: "m5.large".to_string(),
            capacity_type: CapacityType::OnDemand,
            min_size: 1,
            max_size: 3,
            desired_size: 2,
            disk_size_gb: 20,
            availability_zones: Vec::new(),
        }
    }
}

impl NodeGroup {
    pub fn is_spot(&self) -> bool {
        self.capacity_type == CapacityType::Spot
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FargateProfile {
    pub id: String,
    pub name: String,
    pub namespace: String,
    pub pod_count: f64,
    pub vcpu_per_pod: f64,
    pub memory_gb_per_pod: f64,
    pub hours_per_month: f64,
}

impl Default for FargateProfile {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            namespace: "default".to_string(),
            pod_count: 1.0,
            vcpu_per_pod: 0.25,
            memory_gb_per_pod: 0.5,
            hours_per_month: 730.0,
        }
    }
}

/// A Kubernetes cluster with its node groups and Fargate profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterSchema {
    pub id: String,
    pub name: String,
    pub region: String,
    pub kubernetes_version: String,
    /// Keep running a version past standard support, billed at a surcharge
    pub extended_support: bool,
    pub node_groups: Vec<NodeGroup>,
    pub fargate_profiles: Vec<FargateProfile>,
}

impl Default for ClusterSchema {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            region: "us-east-1".to_string(),
            kubernetes_version: "1.31".to_string(),
            extended_support: false,
            node_groups: Vec::new(),
            fargate_profiles: Vec::new(),
        }
    }
}

impl ClusterSchema {
    pub fn from_json(json: &str) -> CloudResourceResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a schema, using `default_region` when the document names none
    pub fn from_json_in_region(json: &str, default_region: &str) -> CloudResourceResult<Self> {
        let mut document: serde_json::Value = serde_json::from_str(json)?;
        fill_default_region(&mut document, default_region);
        Ok(serde_json::from_value(document)?)
    }

    /// Distinct availability zones across all node groups
    pub fn availability_zones(&self) -> BTreeSet<&str> {
        self.node_groups
            .iter()
            .flat_map(|ng| ng.availability_zones.iter())
            .map(String::as_str)
            .filter(|az| !az.is_empty())
            .collect()
    }
}
