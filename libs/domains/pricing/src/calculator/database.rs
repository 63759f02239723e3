use domain_cloud_resources::attributes::{
    AuroraConfig, CapacityMode, DatabaseEngine, DocumentDbConfig, DynamoDbConfig, ElastiCacheConfig,
    OpenSearchConfig, RdsConfig, RedshiftConfig,
};

use super::{CostBuilder, above, child_label};
use crate::models::{BillingMode, ServiceType};
use crate::table::PriceLookup;

/// Table storage included free each month
const DYNAMODB_FREE_STORAGE_GB: f64 = 25.0;

/// Rate key of a database instance: pricing differs per engine licence
fn instance_key(engine: DatabaseEngine, instance_class: &str) -> String {
    format!("{engine}_{instance_class}")
}

pub(super) fn rds<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &RdsConfig) {
    let multiplier = config.deployment.multiplier();
    let storage = config.storage_type;

    costs.add_cost(
        ServiceType::Rds,
        &instance_key(config.engine, &config.instance_class),
        format!("{} {} ({})", config.engine, config.instance_class, config.deployment),
        f64::from(config.instance_count) * multiplier,
        BillingMode::Hourly,
        config.hours_per_month,
    );
    costs.add_cost(
        ServiceType::Rds,
        &format!("{storage}_storage_gb"),
        format!("Storage ({storage}, {})", config.deployment),
        config.storage_gb * multiplier,
        BillingMode::Usage,
        None,
    );
    if storage.has_provisioned_iops() {
        costs.add_cost(
            ServiceType::Rds,
            &format!("{storage}_iops"),
            format!("Provisioned IOPS ({})", config.deployment),
            above(config.provisioned_iops, storage.free_iops()) * multiplier,
            BillingMode::Usage,
            None,
        );
    }
    costs.add_cost(
        ServiceType::Rds,
        "backup_storage_gb",
        "Backup Storage",
        config.backup_storage_gb,
        BillingMode::Usage,
        None,
    );
}

pub(super) fn aurora<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &AuroraConfig) {
    for (index, instance) in config.instances.iter().enumerate() {
        costs.add_cost(
            ServiceType::Aurora,
            &instance_key(config.engine, &instance.instance_class),
            child_label(&instance.name, index, &instance.instance_class),
            1.0,
            BillingMode::Hourly,
            config.hours_per_month,
        );
    }
    costs.add_cost(
        ServiceType::Aurora,
        "storage_gb",
        "Cluster Storage",
        config.storage_gb,
        BillingMode::Usage,
        None,
    );
    costs.add_cost(
        ServiceType::Aurora,
        "io_requests_million",
        "I/O Requests",
        config.io_requests_millions,
        BillingMode::Usage,
        None,
    );
    costs.add_cost(
        ServiceType::Aurora,
        "backup_storage_gb",
        "Backup Storage",
        config.backup_storage_gb,
        BillingMode::Usage,
        None,
    );
}

pub(super) fn dynamodb<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &DynamoDbConfig) {
    for (index, table) in config.tables.iter().enumerate() {
        match table.capacity_mode {
            CapacityMode::OnDemand => {
                costs.add_cost(
                    ServiceType::DynamoDB,
                    "read_request_million",
                    child_label(&table.name, index, "Read Requests"),
                    table.read_request_millions,
                    BillingMode::Usage,
                    None,
                );
                costs.add_cost(
                    ServiceType::DynamoDB,
                    "write_request_million",
                    child_label(&table.name, index, "Write Requests"),
                    table.write_request_millions,
                    BillingMode::Usage,
                    None,
                );
            }
            CapacityMode::Provisioned => {
                costs.add_cost(
                    ServiceType::DynamoDB,
                    "rcu_hourly",
                    child_label(&table.name, index, "Read Capacity"),
                    table.read_capacity_units,
                    BillingMode::Hourly,
                    None,
                );
                costs.add_cost(
                    ServiceType::DynamoDB,
                    "wcu_hourly",
                    child_label(&table.name, index, "Write Capacity"),
                    table.write_capacity_units,
                    BillingMode::Hourly,
                    None,
                );
            }
        }
        costs.add_cost(
            ServiceType::DynamoDB,
            "storage_gb",
            child_label(&table.name, index, "Storage"),
            above(table.storage_gb, DYNAMODB_FREE_STORAGE_GB),
            BillingMode::Usage,
            None,
        );
        if table.point_in_time_recovery {
            costs.add_cost(
                ServiceType::DynamoDB,
                "pitr_storage_gb",
                child_label(&table.name, index, "Point-in-Time Recovery"),
                table.storage_gb,
                BillingMode::Usage,
                None,
            );
        }
    }
}

pub(super) fn elasticache<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &ElastiCacheConfig) {
    for (index, cluster) in config.clusters.iter().enumerate() {
        costs.add_cost(
            ServiceType::ElastiCache,
            &cluster.node_type,
            child_label(&cluster.name, index, &format!("{} {}", cluster.engine, cluster.node_type)),
            f64::from(cluster.node_count),
            BillingMode::Hourly,
            None,
        );
        costs.add_cost(
            ServiceType::ElastiCache,
            "backup_storage_gb",
            child_label(&cluster.name, index, "Backup Storage"),
            cluster.backup_storage_gb,
            BillingMode::Usage,
            None,
        );
    }
}

pub(super) fn documentdb<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &DocumentDbConfig) {
    costs.add_cost(
        ServiceType::DocumentDB,
        &config.instance_class,
        format!("{} Instances", config.instance_class),
        f64::from(config.instance_count),
        BillingMode::Hourly,
        config.hours_per_month,
    );
    costs.add_cost(ServiceType::DocumentDB, "storage_gb", "Storage", config.storage_gb, BillingMode::Usage, None);
    costs.add_cost(
        ServiceType::DocumentDB,
        "io_requests_million",
        "I/O Requests",
        config.io_requests_millions,
        BillingMode::Usage,
        None,
    );
    costs.add_cost(
        ServiceType::DocumentDB,
        "backup_storage_gb",
        "Backup Storage",
        config.backup_storage_gb,
        BillingMode::Usage,
        None,
    );
}

pub(super) fn redshift<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &RedshiftConfig) {
    costs.add_cost(
        ServiceType::Redshift,
        &config.node_type,
        format!("{} Nodes", config.node_type),
        f64::from(config.node_count),
        BillingMode::Hourly,
        config.hours_per_month,
    );
    costs.add_cost(
        ServiceType::Redshift,
        "managed_storage_gb",
        "Managed Storage",
        config.managed_storage_gb,
        BillingMode::Usage,
        None,
    );
}

pub(super) fn opensearch<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &OpenSearchConfig) {
    for (index, domain) in config.domains.iter().enumerate() {
        costs.add_cost(
            ServiceType::OpenSearch,
            &domain.instance_type,
            child_label(&domain.name, index, &format!("{} Data Nodes", domain.instance_type)),
            f64::from(domain.instance_count),
            BillingMode::Hourly,
            None,
        );
        if let Some(master_type) = &domain.dedicated_master_type {
            costs.add_cost(
                ServiceType::OpenSearch,
                master_type,
                child_label(&domain.name, index, &format!("{master_type} Dedicated Masters")),
                f64::from(domain.dedicated_master_count),
                BillingMode::Hourly,
                None,
            );
        }
        costs.add_cost(
            ServiceType::OpenSearch,
            "gp3_storage_gb",
            child_label(&domain.name, index, "EBS Storage"),
            f64::from(domain.instance_count) * domain.storage_per_node_gb,
            BillingMode::Usage,
            None,
        );
    }
}
