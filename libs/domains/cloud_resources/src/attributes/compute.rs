use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use super::storage::VolumeType;

/// CPU architecture of a function or task
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Architecture {
    #[default]
    #[serde(alias = "x86")]
    X86_64,
    Arm64,
}

/// EC2 instances of a single instance type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ec2Config {
    /// Instance type, also the EC2 rate key (e.g. "t3.medium")
    pub instance_type: String,
    pub instance_count: u32,
    /// Running hours per month; `None` means always on
    pub hours_per_month: Option<f64>,
    pub spot_enabled: bool,
    /// Spot discount against the on-demand rate, in percent
    pub spot_discount_pct: f64,
    pub root_volume_type: VolumeType,
    pub root_volume_gb: f64,
    pub root_volume_iops: f64,
    pub detailed_monitoring: bool,
    pub elastic_ips: u32,
    pub data_transfer_out_gb: f64,
}

impl Default for Ec2Config {
    fn default() -> Self {
        Self {
            instance_type: "t3.micro".to_string(),
            instance_count: 1,
            hours_per_month: None,
            spot_enabled: false,
            spot_discount_pct: 0.0,
            root_volume_type: VolumeType::Gp3,
            root_volume_gb: 8.0,
            root_volume_iops: 3000.0,
            detailed_monitoring: false,
            elastic_ips: 0,
            data_transfer_out_gb: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LambdaConfig {
    pub functions: Vec<LambdaFunction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LambdaFunction {
    pub name: String,
    pub memory_mb: f64,
    pub avg_duration_ms: f64,
    /// Invocations per month, in millions
    pub requests_millions: f64,
    pub architecture: Architecture,
    pub ephemeral_storage_mb: f64,
    pub provisioned_concurrency: u32,
}

impl Default for LambdaFunction {
    fn default() -> Self {
        Self {
            name: "function".to_string(),
            memory_mb: 128.0,
            avg_duration_ms: 100.0,
            requests_millions: 0.0,
            architecture: Architecture::X86_64,
            ephemeral_storage_mb: 512.0,
            provisioned_concurrency: 0,
        }
    }
}

/// Flat EKS estimate: clusters with one homogeneous node pool
///
/// See [`crate::ClusterSchema`] for the nested representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EksConfig {
    pub cluster_count: u32,
    pub extended_support: bool,
    pub node_instance_type: String,
    pub node_count: u32,
    pub node_disk_gb: f64,
    pub fargate_pods: u32,
    pub fargate_vcpu_per_pod: f64,
    pub fargate_memory_gb_per_pod: f64,
    pub fargate_hours_per_month: Option<f64>,
}

impl Default for EksConfig {
    fn default() -> Self {
        Self {
            cluster_count: 1,
            extended_support: false,
            node_instance_type: "m5.large".to_string(),
            node_count: 2,
            node_disk_gb: 20.0,
            fargate_pods: 0,
            fargate_vcpu_per_pod: 0.25,
            fargate_memory_gb_per_pod: 0.5,
            fargate_hours_per_month: None,
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LaunchType {
    #[default]
    Fargate,
    Ec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EcsConfig {
    pub launch_type: LaunchType,
    pub task_count: u32,
    pub vcpu_per_task: f64,
    pub memory_gb_per_task: f64,
    pub hours_per_month: Option<f64>,
    pub architecture: Architecture,
}

impl Default for EcsConfig {
    fn default() -> Self {
        Self {
            launch_type: LaunchType::Fargate,
            task_count: 1,
            vcpu_per_task: 0.25,
            memory_gb_per_task: 0.5,
            hours_per_month: None,
            architecture: Architecture::X86_64,
        }
    }
}
