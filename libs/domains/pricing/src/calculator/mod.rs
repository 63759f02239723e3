//! Flat resource cost calculator
//!
//! Dispatches on [`ResourceConfig`] to one pricing branch per resource type.
//! Branches emit line items through [`CostBuilder::add_cost`]; the builder
//! applies the billing mode, skips non-positive quantities and keeps the
//! running monthly total.

mod compute;
mod database;
mod integration;
mod networking;
mod operations;
mod security;
mod storage;

use domain_cloud_resources::{CloudResource, ResourceConfig};
use tracing::{debug, trace};

use crate::models::{
    BillingMode, CostBreakdownItem, CostEstimation, HOURLY_DISPLAY_UNIT, HOURS_PER_MONTH, PricingRate,
    ServiceType,
};
use crate::table::PriceLookup;

/// Estimate the monthly cost of one flat resource
///
/// Unpriced and unrecognised resource types yield an empty estimate.
pub fn calculate_resource_cost<L: PriceLookup + ?Sized>(resource: &CloudResource, lookup: &L) -> CostEstimation {
    let mut costs = CostBuilder::new(lookup, &resource.region);

    match &resource.config {
        ResourceConfig::Ec2(config) => compute::ec2(&mut costs, config),
        ResourceConfig::Lambda(config) => compute::lambda(&mut costs, config),
        ResourceConfig::Eks(config) => compute::eks(&mut costs, config),
        ResourceConfig::Ecs(config) => compute::ecs(&mut costs, config),

        ResourceConfig::S3(config) => storage::s3(&mut costs, config),
        ResourceConfig::Ebs(config) => storage::ebs(&mut costs, config),
        ResourceConfig::Efs(config) => storage::efs(&mut costs, config),
        ResourceConfig::Backup(config) => storage::backup(&mut costs, config),
        ResourceConfig::Ecr(config) => storage::ecr(&mut costs, config),

        ResourceConfig::Rds(config) => database::rds(&mut costs, config),
        ResourceConfig::Aurora(config) => database::aurora(&mut costs, config),
        ResourceConfig::DynamoDb(config) => database::dynamodb(&mut costs, config),
        ResourceConfig::ElastiCache(config) => database::elasticache(&mut costs, config),
        ResourceConfig::DocumentDb(config) => database::documentdb(&mut costs, config),
        ResourceConfig::Redshift(config) => database::redshift(&mut costs, config),
        ResourceConfig::OpenSearch(config) => database::opensearch(&mut costs, config),

        ResourceConfig::Vpc(config) => networking::vpc(&mut costs, config),
        ResourceConfig::LoadBalancer(config) => networking::load_balancer(&mut costs, config),
        ResourceConfig::CloudFront(config) => networking::cloudfront(&mut costs, config),
        ResourceConfig::Route53(config) => networking::route53(&mut costs, config),
        ResourceConfig::ApiGateway(config) => networking::api_gateway(&mut costs, config),
        ResourceConfig::TransitGateway(config) => networking::transit_gateway(&mut costs, config),
        ResourceConfig::Vpn(config) => networking::vpn(&mut costs, config),
        ResourceConfig::ElasticIp(config) => networking::elastic_ip(&mut costs, config),

        ResourceConfig::Sqs(config) => integration::sqs(&mut costs, config),
        ResourceConfig::Sns(config) => integration::sns(&mut costs, config),
        ResourceConfig::Msk(config) => integration::msk(&mut costs, config),
        ResourceConfig::AmazonMq(config) => integration::amazon_mq(&mut costs, config),
        ResourceConfig::Kinesis(config) => integration::kinesis(&mut costs, config),
        ResourceConfig::StepFunctions(config) => integration::step_functions(&mut costs, config),
        ResourceConfig::EventBridge(config) => integration::eventbridge(&mut costs, config),
        ResourceConfig::Ses(config) => integration::ses(&mut costs, config),

        ResourceConfig::Waf(config) => security::waf(&mut costs, config),
        ResourceConfig::Acm(config) => security::acm(&mut costs, config),
        ResourceConfig::Kms(config) => security::kms(&mut costs, config),
        ResourceConfig::SecretsManager(config) => security::secrets_manager(&mut costs, config),
        ResourceConfig::Cognito(config) => security::cognito(&mut costs, config),

        ResourceConfig::CloudWatch(config) => operations::cloudwatch(&mut costs, config),
        ResourceConfig::Glue(config) => operations::glue(&mut costs, config),
        ResourceConfig::Athena(config) => operations::athena(&mut costs, config),

        ResourceConfig::Unpriced(resource_type) => {
            trace!(resource_id = %resource.id, %resource_type, "Resource type has no billable dimensions");
        }
        ResourceConfig::Unknown(tag) => {
            debug!(resource_id = %resource.id, tag, "Unrecognised resource type, estimating zero");
        }
    }

    costs.finish()
}

/// Accumulates line items for one resource
pub struct CostBuilder<'a, L: ?Sized> {
    lookup: &'a L,
    region: &'a str,
    breakdown: Vec<CostBreakdownItem>,
    monthly_total: f64,
}

impl<'a, L: PriceLookup + ?Sized> CostBuilder<'a, L> {
    pub fn new(lookup: &'a L, region: &'a str) -> Self {
        Self {
            lookup,
            region,
            breakdown: Vec::new(),
            monthly_total: 0.0,
        }
    }

    pub fn rate(&self, service: ServiceType, key: &str) -> PricingRate {
        self.lookup.get_price(self.region, service, key)
    }

    /// Price `quantity` of `service`/`key` and append it as a line item
    ///
    /// For [`BillingMode::Hourly`], `hours` replaces the default
    /// [`HOURS_PER_MONTH`]; the line shows `quantity * hours` in "Hrs".
    /// `hours` is ignored for the other modes.
    pub fn add_cost(
        &mut self,
        service: ServiceType,
        key: &str,
        label: impl Into<String>,
        quantity: f64,
        mode: BillingMode,
        hours: Option<f64>,
    ) {
        if !is_billable(quantity) {
            return;
        }

        let rate = self.rate(service, key);
        let item = match mode {
            BillingMode::Hourly => {
                let billed_hours = quantity * hours.unwrap_or(HOURS_PER_MONTH);
                CostBreakdownItem {
                    label: label.into(),
                    unit_cost: rate.price_per_unit,
                    quantity: billed_hours,
                    unit: HOURLY_DISPLAY_UNIT.to_string(),
                    total: billed_hours * rate.price_per_unit,
                }
            }
            BillingMode::Usage | BillingMode::Flat => CostBreakdownItem {
                label: label.into(),
                unit_cost: rate.price_per_unit,
                quantity,
                unit: rate.unit,
                total: quantity * rate.price_per_unit,
            },
        };
        self.add_item(item);
    }

    /// Append a precomputed line item, for pricing rules `add_cost` cannot express
    pub fn add_item(&mut self, item: CostBreakdownItem) {
        if !is_billable(item.quantity) {
            return;
        }
        self.monthly_total += item.total;
        self.breakdown.push(item);
    }

    pub fn finish(self) -> CostEstimation {
        CostEstimation {
            monthly_total: self.monthly_total,
            breakdown: self.breakdown,
        }
    }
}

fn is_billable(quantity: f64) -> bool {
    quantity > 0.0
}

/// Quantity left after a free allowance
pub(crate) fn above(quantity: f64, free: f64) -> f64 {
    (quantity - free).max(0.0)
}

/// Label of a child entity's line item; unnamed children are numbered by position
pub(crate) fn child_label(child: &str, index: usize, what: &str) -> String {
    if child.trim().is_empty() {
        format!("#{}: {what}", index + 1)
    } else {
        format!("{child}: {what}")
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{REGION, assert_close, table};
    use super::*;
    use crate::table::MockPriceLookup;
    use domain_cloud_resources::ResourceType;
    use domain_cloud_resources::attributes::VpcConfig;
    use mockall::predicate::eq;

    fn builder_table() -> crate::table::PricingTable {
        table(&[(ServiceType::Vpc, "nat_gateway_hourly", 0.045), (ServiceType::S3, "standard_storage_gb", 0.023)])
    }

    #[test]
    fn test_hourly_uses_default_hours() {
        let table = builder_table();
        let mut costs = CostBuilder::new(&table, REGION);
        costs.add_cost(ServiceType::Vpc, "nat_gateway_hourly", "NAT", 2.0, BillingMode::Hourly, None);
        let estimate = costs.finish();

        let item = &estimate.breakdown[0];
        assert_close(item.total, 2.0 * 730.0 * 0.045);
        assert_close(item.quantity, 1460.0);
        assert_eq!(item.unit, "Hrs");
        assert_close(item.unit_cost, 0.045);
    }

    #[test]
    fn test_hourly_override_replaces_default_hours() {
        let table = builder_table();
        let mut costs = CostBuilder::new(&table, REGION);
        costs.add_cost(ServiceType::Vpc, "nat_gateway_hourly", "NAT", 2.0, BillingMode::Hourly, Some(100.0));
        let estimate = costs.finish();
        assert_close(estimate.monthly_total, 2.0 * 100.0 * 0.045);
        assert_close(estimate.breakdown[0].quantity, 200.0);
    }

    #[test]
    fn test_usage_and_flat_keep_rate_unit() {
        let table = builder_table();
        let mut costs = CostBuilder::new(&table, REGION);
        costs.add_cost(ServiceType::S3, "standard_storage_gb", "Storage", 100.0, BillingMode::Usage, Some(5.0));
        costs.add_cost(ServiceType::S3, "standard_storage_gb", "Storage", 10.0, BillingMode::Flat, None);
        let estimate = costs.finish();

        assert_close(estimate.breakdown[0].total, 2.3);
        assert_eq!(estimate.breakdown[0].unit, "Unit");
        assert_close(estimate.breakdown[1].total, 0.23);
        assert_close(estimate.monthly_total, 2.53);
    }

    #[test]
    fn test_non_positive_quantities_emit_nothing() {
        let table = builder_table();
        let mut costs = CostBuilder::new(&table, REGION);
        for quantity in [0.0, -3.0, f64::NAN] {
            costs.add_cost(ServiceType::Vpc, "nat_gateway_hourly", "NAT", quantity, BillingMode::Hourly, None);
            costs.add_cost(ServiceType::S3, "standard_storage_gb", "S3", quantity, BillingMode::Usage, None);
        }
        let estimate = costs.finish();
        assert!(estimate.is_empty());
        assert_eq!(estimate.monthly_total, 0.0);
    }

    #[test]
    fn test_missing_rate_still_emits_zero_cost_line() {
        let table = builder_table();
        let mut costs = CostBuilder::new(&table, REGION);
        costs.add_cost(ServiceType::Glue, "etl_dpu_hour", "ETL", 10.0, BillingMode::Usage, None);
        let estimate = costs.finish();
        assert_eq!(estimate.breakdown.len(), 1);
        assert_eq!(estimate.breakdown[0].unit, "N/A");
        assert_eq!(estimate.monthly_total, 0.0);
    }

    #[test]
    fn test_unpriced_and_unknown_types_estimate_empty() {
        let table = builder_table();
        for config in [
            ResourceConfig::Unpriced(ResourceType::SecurityGroup),
            ResourceConfig::Unknown("hologram_projector".to_string()),
        ] {
            let resource = CloudResource::new("r", "r", REGION, config);
            let estimate = calculate_resource_cost(&resource, &table);
            assert_eq!(estimate, CostEstimation::default());
        }
    }

    #[test]
    fn test_calculator_resolves_rates_for_resource_region() {
        let mut lookup = MockPriceLookup::new();
        lookup
            .expect_get_price()
            .with(eq("eu-central-1"), eq(ServiceType::Vpc), eq("nat_gateway_hourly"))
            .times(1)
            .returning(|_, _, _| PricingRate::new("Hrs", 0.052));
        lookup
            .expect_get_price()
            .with(eq("eu-central-1"), eq(ServiceType::Vpc), eq("nat_gateway_processed_bytes"))
            .times(1)
            .returning(|_, _, _| PricingRate::new("GB", 0.052));

        let resource = CloudResource::new(
            "vpc-1",
            "edge",
            "eu-central-1",
            ResourceConfig::Vpc(VpcConfig {
                nat_gateways: 1,
                nat_data_processed_gb: 10.0,
                ..Default::default()
            }),
        );

        let estimate = calculate_resource_cost(&resource, &lookup);
        assert_eq!(estimate.breakdown.len(), 2);
        assert_close(estimate.monthly_total, 0.052 * 730.0 + 10.0 * 0.052);
    }

    #[test]
    fn test_monthly_total_matches_breakdown_for_every_default_config() {
        use strum::IntoEnumIterator;

        let table = crate::table::PricingTable::bundled().unwrap();
        for resource_type in ResourceType::iter() {
            let Some(config) = ResourceConfig::default_for(resource_type) else {
                continue;
            };
            let resource = CloudResource::new("r", resource_type.to_string(), REGION, config);
            let estimate = calculate_resource_cost(&resource, &table);
            let sum: f64 = estimate.breakdown.iter().map(|i| i.total).sum();
            assert_close(estimate.monthly_total, sum);
            assert!(estimate.breakdown.iter().all(|i| i.quantity > 0.0), "{resource_type}");
            assert_eq!(estimate, calculate_resource_cost(&resource, &table), "{resource_type}");
        }
    }
}
