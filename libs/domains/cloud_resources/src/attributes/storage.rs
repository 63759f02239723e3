use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Block storage volume type, shared by EC2 root volumes, EBS and RDS
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VolumeType {
    Gp2,
    #[default]
    Gp3,
    Io1,
    Io2,
    St1,
    Sc1,
    Standard,
}

impl VolumeType {
    /// Volume types whose IOPS are provisioned and billed separately
    pub fn has_provisioned_iops(&self) -> bool {
        matches!(self, VolumeType::Gp3 | VolumeType::Io1 | VolumeType::Io2)
    }

    /// IOPS included in the storage price before provisioned IOPS are billed
    pub fn free_iops(&self) -> f64 {
        match self {
            VolumeType::Gp3 => 3000.0,
            _ => 0.0,
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum S3StorageClass {
    #[default]
    Standard,
    IntelligentTiering,
    StandardIa,
    OneZoneIa,
    GlacierInstantRetrieval,
    GlacierFlexibleRetrieval,
    GlacierDeepArchive,
}

impl S3StorageClass {
    /// Classes that charge a per-GB retrieval fee
    pub fn charges_retrieval(&self) -> bool {
        !matches!(self, S3StorageClass::Standard | S3StorageClass::IntelligentTiering)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct S3Config {
    pub buckets: Vec<S3Bucket>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct S3Bucket {
    pub name: String,
    pub storage_class: S3StorageClass,
    pub storage_gb: f64,
    /// PUT/COPY/POST/LIST requests per month
    pub put_requests: f64,
    /// GET/SELECT requests per month
    pub get_requests: f64,
    pub data_retrieval_gb: f64,
    pub data_transfer_out_gb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EbsConfig {
    pub volume_type: VolumeType,
    pub volume_count: u32,
    pub size_gb: f64,
    pub iops: f64,
    pub throughput_mbps: f64,
    pub snapshot_gb: f64,
}

impl Default for EbsConfig {
    fn default() -> Self {
        Self {
            volume_type: VolumeType::Gp3,
            volume_count: 1,
            size_gb: 100.0,
            iops: 3000.0,
            throughput_mbps: 125.0,
            snapshot_gb: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EfsConfig {
    pub standard_storage_gb: f64,
    pub infrequent_access_gb: f64,
    /// Read/write traffic against infrequent-access data
    pub infrequent_access_requests_gb: f64,
    pub provisioned_throughput_mbps: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupConfig {
    pub vaults: Vec<BackupVault>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupVault {
    pub name: String,
    pub warm_storage_gb: f64,
    pub cold_storage_gb: f64,
    pub restore_gb: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EcrConfig {
    pub storage_gb: f64,
    pub data_transfer_out_gb: f64,
}
