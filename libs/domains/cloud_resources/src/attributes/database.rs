use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use super::storage::VolumeType;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DatabaseEngine {
    #[default]
    Postgres,
    Mysql,
    Mariadb,
    Oracle,
    Sqlserver,
}

/// Availability deployment of a database instance
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum Deployment {
    #[default]
    #[serde(rename = "single_az", alias = "Single-AZ")]
    #[strum(serialize = "Single-AZ")]
    SingleAz,
    #[serde(rename = "multi_az", alias = "Multi-AZ")]
    #[strum(serialize = "Multi-AZ")]
    MultiAz,
}

impl Deployment {
    /// Multi-AZ runs a synchronous standby, doubling instance and storage cost
    pub fn multiplier(&self) -> f64 {
        match self {
            Deployment::SingleAz => 1.0,
            Deployment::MultiAz => 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RdsConfig {
    pub engine: DatabaseEngine,
    /// Instance class, also the RDS rate key (e.g. "db.t3.medium")
    pub instance_class: String,
    pub instance_count: u32,
    pub deployment: Deployment,
    pub storage_type: VolumeType,
    pub storage_gb: f64,
    pub provisioned_iops: f64,
    pub backup_storage_gb: f64,
    pub hours_per_month: Option<f64>,
}

impl Default for RdsConfig {
    fn default() -> Self {
        Self {
            engine: DatabaseEngine::Postgres,
            instance_class: "db.t3.micro".to_string(),
            instance_count: 1,
            deployment: Deployment::SingleAz,
            storage_type: VolumeType::Gp3,
            storage_gb: 20.0,
            provisioned_iops: 0.0,
            backup_storage_gb: 0.0,
            hours_per_month: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuroraConfig {
    pub engine: DatabaseEngine,
    pub instances: Vec<AuroraInstance>,
    pub storage_gb: f64,
    pub io_requests_millions: f64,
    pub backup_storage_gb: f64,
    pub hours_per_month: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuroraInstance {
    pub name: String,
    pub instance_class: String,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CapacityMode {
    #[default]
    OnDemand,
    Provisioned,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamoDbConfig {
    pub tables: Vec<DynamoDbTable>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamoDbTable {
    pub name: String,
    pub capacity_mode: CapacityMode,
    pub read_capacity_units: f64,
    pub write_capacity_units: f64,
    pub read_request_millions: f64,
    pub write_request_millions: f64,
    pub storage_gb: f64,
    pub point_in_time_recovery: bool,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CacheEngine {
    #[default]
    Redis,
    Valkey,
    Memcached,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElastiCacheConfig {
    pub clusters: Vec<CacheCluster>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheCluster {
    pub name: String,
    pub engine: CacheEngine,
    pub node_type: String,
    pub node_count: u32,
    pub backup_storage_gb: f64,
}

impl Default for CacheCluster {
    fn default() -> Self {
        Self {
            name: "cache".to_string(),
            engine: CacheEngine::Redis,
            node_type: "cache.t3.micro".to_string(),
            node_count: 1,
            backup_storage_gb: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentDbConfig {
    pub instance_class: String,
    pub instance_count: u32,
    pub storage_gb: f64,
    pub io_requests_millions: f64,
    pub backup_storage_gb: f64,
    pub hours_per_month: Option<f64>,
}

impl Default for DocumentDbConfig {
    fn default() -> Self {
        Self {
            instance_class: "db.t3.medium".to_string(),
            instance_count: 1,
            storage_gb: 10.0,
            io_requests_millions: 0.0,
            backup_storage_gb: 0.0,
            hours_per_month: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedshiftConfig {
    pub node_type: String,
    pub node_count: u32,
    pub managed_storage_gb: f64,
    pub hours_per_month: Option<f64>,
}

impl Default for RedshiftConfig {
    fn default() -> Self {
        Self {
            node_type: "ra3.xlplus".to_string(),
            node_count: 1,
            managed_storage_gb: 0.0,
            hours_per_month: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenSearchConfig {
    pub domains: Vec<OpenSearchDomain>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenSearchDomain {
    pub name: String,
    pub instance_type: String,
    pub instance_count: u32,
    pub dedicated_master_type: Option<String>,
    pub dedicated_master_count: u32,
    pub storage_per_node_gb: f64,
}

impl Default for OpenSearchDomain {
    fn default() -> Self {
        Self {
            name: "search".to_string(),
            instance_type: "t3.small.search".to_string(),
            instance_count: 1,
            dedicated_master_type: None,
            dedicated_master_count: 0,
            storage_per_node_gb: 10.0,
        }
    }
}
