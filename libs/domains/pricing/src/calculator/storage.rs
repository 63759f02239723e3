use domain_cloud_resources::attributes::{BackupConfig, EbsConfig, EcrConfig, EfsConfig, S3Config, VolumeType};

use super::{CostBuilder, above, child_label};
use crate::models::{BillingMode, ServiceType};
use crate::table::PriceLookup;

/// Throughput included with gp3 volumes
const GP3_FREE_THROUGHPUT_MBPS: f64 = 125.0;

pub(super) fn s3<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &S3Config) {
    for (index, bucket) in config.buckets.iter().enumerate() {
        let class = bucket.storage_class;
        costs.add_cost(
            ServiceType::S3,
            &format!("{class}_storage_gb"),
            child_label(&bucket.name, index, &format!("Storage ({class})")),
            bucket.storage_gb,
            BillingMode::Usage,
            None,
        );
        costs.add_cost(
            ServiceType::S3,
            &format!("{class}_put_1k"),
            child_label(&bucket.name, index, "PUT/COPY/POST/LIST Requests"),
            bucket.put_requests / 1000.0,
            BillingMode::Usage,
            None,
        );
        costs.add_cost(
            ServiceType::S3,
            &format!("{class}_get_1k"),
            child_label(&bucket.name, index, "GET/SELECT Requests"),
            bucket.get_requests / 1000.0,
            BillingMode::Usage,
            None,
        );
        if class.charges_retrieval() {
            costs.add_cost(
                ServiceType::S3,
                &format!("{class}_retrieval_gb"),
                child_label(&bucket.name, index, "Data Retrieval"),
                bucket.data_retrieval_gb,
                BillingMode::Usage,
                None,
            );
        }
        costs.add_cost(
            ServiceType::DataTransfer,
            "internet_out_gb",
            child_label(&bucket.name, index, "Data Transfer Out"),
            bucket.data_transfer_out_gb,
            BillingMode::Usage,
            None,
        );
    }
}

pub(super) fn ebs<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &EbsConfig) {
    let volume = config.volume_type;
    let count = f64::from(config.volume_count);

    costs.add_cost(
        ServiceType::Ebs,
        &format!("{volume}_storage_gb"),
        format!("{volume} Storage"),
        count * config.size_gb,
        BillingMode::Usage,
        None,
    );
    if volume.has_provisioned_iops() {
        costs.add_cost(
            ServiceType::Ebs,
            &format!("{volume}_iops"),
            format!("{volume} Provisioned IOPS"),
            count * above(config.iops, volume.free_iops()),
            BillingMode::Usage,
            None,
        );
    }
    if volume == VolumeType::Gp3 {
        costs.add_cost(
            ServiceType::Ebs,
            "gp3_throughput_mbps",
            "gp3 Provisioned Throughput",
            count * above(config.throughput_mbps, GP3_FREE_THROUGHPUT_MBPS),
            BillingMode::Usage,
            None,
        );
    }
    costs.add_cost(
        ServiceType::Ebs,
        "snapshot_storage_gb",
        "Snapshots",
        config.snapshot_gb,
        BillingMode::Usage,
        None,
    );
}

pub(super) fn efs<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &EfsConfig) {
    costs.add_cost(
        ServiceType::Efs,
        "standard_storage_gb",
        "Standard Storage",
        config.standard_storage_gb,
        BillingMode::Usage,
        None,
    );
    costs.add_cost(
        ServiceType::Efs,
        "ia_storage_gb",
        "Infrequent Access Storage",
        config.infrequent_access_gb,
        BillingMode::Usage,
        None,
    );
    costs.add_cost(
        ServiceType::Efs,
        "ia_requests_gb",
        "Infrequent Access Requests",
        config.infrequent_access_requests_gb,
        BillingMode::Usage,
        None,
    );
    costs.add_cost(
        ServiceType::Efs,
        "provisioned_throughput_mbps",
        "Provisioned Throughput",
        config.provisioned_throughput_mbps,
        BillingMode::Flat,
        None,
    );
}

pub(super) fn backup<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &BackupConfig) {
    for (index, vault) in config.vaults.iter().enumerate() {
        costs.add_cost(
            ServiceType::Backup,
            "warm_storage_gb",
            child_label(&vault.name, index, "Warm Storage"),
            vault.warm_storage_gb,
            BillingMode::Usage,
            None,
        );
        costs.add_cost(
            ServiceType::Backup,
            "cold_storage_gb",
            child_label(&vault.name, index, "Cold Storage"),
            vault.cold_storage_gb,
            BillingMode::Usage,
            None,
        );
        costs.add_cost(
            ServiceType::Backup,
            "restore_gb",
            child_label(&vault.name, index, "Restores"),
            vault.restore_gb,
            BillingMode::Usage,
            None,
        );
    }
}

pub(super) fn ecr<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &EcrConfig) {
    costs.add_cost(ServiceType::Ecr, "storage_gb", "Image Storage", config.storage_gb, BillingMode::Usage, None);
    costs.add_cost(
        ServiceType::DataTransfer,
        "internet_out_gb",
        "Data Transfer Out",
        config.data_transfer_out_gb,
        BillingMode::Usage,
        None,
    );
}
