use domain_cloud_resources::attributes::{AthenaConfig, CloudWatchConfig, GlueConfig};

use super::{CostBuilder, above};
use crate::models::{BillingMode, ServiceType};
use crate::table::PriceLookup;

// Monthly free allowances
const FREE_CUSTOM_METRICS: f64 = 10.0;
const FREE_DASHBOARDS: f64 = 3.0;
const FREE_ALARMS: f64 = 10.0;
const FREE_LOGS_GB: f64 = 5.0;
const FREE_CATALOG_OBJECTS_100K: f64 = 10.0;

pub(super) fn cloudwatch<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &CloudWatchConfig) {
    costs.add_cost(
        ServiceType::CloudWatch,
        "custom_metric",
        "Custom Metrics",
        above(config.custom_metrics, FREE_CUSTOM_METRICS),
        BillingMode::Flat,
        None,
    );
    costs.add_cost(
        ServiceType::CloudWatch,
        "dashboard",
        "Dashboards",
        above(config.dashboards, FREE_DASHBOARDS),
        BillingMode::Flat,
        None,
    );
    costs.add_cost(
        ServiceType::CloudWatch,
        "alarm",
        "Alarms",
        above(config.alarms, FREE_ALARMS),
        BillingMode::Flat,
        None,
    );
    costs.add_cost(
        ServiceType::CloudWatch,
        "logs_ingested_gb",
        "Logs Ingested",
        above(config.logs_ingested_gb, FREE_LOGS_GB),
        BillingMode::Usage,
        None,
    );
    costs.add_cost(
        ServiceType::CloudWatch,
        "logs_stored_gb",
        "Logs Stored",
        above(config.logs_stored_gb, FREE_LOGS_GB),
        BillingMode::Usage,
        None,
    );
}

pub(super) fn glue<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &GlueConfig) {
    costs.add_cost(ServiceType::Glue, "etl_dpu_hour", "ETL Jobs", config.etl_dpu_hours, BillingMode::Usage, None);
    costs.add_cost(
        ServiceType::Glue,
        "crawler_dpu_hour",
        "Crawlers",
        config.crawler_dpu_hours,
        BillingMode::Usage,
        None,
    );
    costs.add_cost(
        ServiceType::Glue,
        "catalog_objects_100k",
        "Data Catalog Storage",
        above(config.catalog_objects_100k, FREE_CATALOG_OBJECTS_100K),
        BillingMode::Flat,
        None,
    );
}

pub(super) fn athena<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &AthenaConfig) {
    costs.add_cost(
        ServiceType::Athena,
        "data_scanned_tb",
        "Data Scanned",
        config.data_scanned_tb,
        BillingMode::Usage,
        None,
    );
}
