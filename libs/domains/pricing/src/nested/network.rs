use domain_cloud_resources::{FlowLogDestination, NatGateway, NetworkSchema, VpcEndpoint};
use tracing::debug;

use super::{NestedCostCalculator, component, detail};
use crate::models::{Cost, CostCategory, CostComponent, HOURLY_DISPLAY_UNIT, HOURS_PER_MONTH, ServiceType};
use crate::table::PriceLookup;

/// Price the billable children of a network
///
/// NAT gateways, interface endpoints and flow logs delivered to CloudWatch
/// Logs are billed. The container, subnets, route tables, the internet
/// gateway and gateway endpoints are free.
pub fn calculate_network_cost<L: PriceLookup + ?Sized>(schema: &NetworkSchema, region: &str, lookup: &L) -> Cost {
    let mut breakdown: Vec<CostComponent> = Vec::new();

    breakdown.extend(schema.nat_gateways.iter().map(|nat| nat_gateway(nat, region, lookup)));
    breakdown.extend(
        schema
            .interface_endpoints()
            .map(|endpoint| interface_endpoint(endpoint, region, lookup)),
    );

    let flow_logs = &schema.flow_logs;
    if flow_logs.enabled && flow_logs.estimated_log_volume_gb > 0.0 {
        match flow_logs.destination {
            FlowLogDestination::CloudWatchLogs => {
                let rate = lookup.get_price(region, ServiceType::CloudWatch, "vended_logs_ingestion_gb");
                let volume = flow_logs.estimated_log_volume_gb;
                breakdown.push(component(
                    "flow-logs",
                    "VPC Flow Logs",
                    CostCategory::Monitoring,
                    "GB",
                    volume,
                    rate.price_per_unit,
                    vec![detail("Log ingestion", volume * rate.price_per_unit)],
                ));
            }
            // Billed as S3 storage
            FlowLogDestination::S3 => {}
        }
    }

    debug!(
        network = %schema.name,
        region,
        components = breakdown.len(),
        "Priced network"
    );
    Cost::from_components(breakdown)
}

fn nat_gateway<L: PriceLookup + ?Sized>(nat: &NatGateway, region: &str, lookup: &L) -> CostComponent {
    let hourly = lookup.get_price(region, ServiceType::Vpc, "nat_gateway_hourly");
    let processing = lookup.get_price(region, ServiceType::Vpc, "nat_gateway_processed_bytes");

    component(
        &nat.id,
        &nat.name,
        CostCategory::Networking,
        HOURLY_DISPLAY_UNIT,
        HOURS_PER_MONTH,
        hourly.price_per_unit,
        vec![
            detail("Gateway hours", hourly.price_per_unit * HOURS_PER_MONTH),
            detail(
                "Data processing",
                nat.estimated_data_processed_gb.max(0.0) * processing.price_per_unit,
            ),
        ],
    )
}

fn interface_endpoint<L: PriceLookup + ?Sized>(endpoint: &VpcEndpoint, region: &str, lookup: &L) -> CostComponent {
    let hourly = lookup.get_price(region, ServiceType::Vpc, "vpc_endpoint_hourly");
    let processing = lookup.get_price(region, ServiceType::Vpc, "vpc_endpoint_processed_bytes");
    let endpoint_hours = endpoint.subnet_ids.len() as f64 * HOURS_PER_MONTH;

    component(
        &endpoint.id,
        &endpoint.name,
        CostCategory::Networking,
        HOURLY_DISPLAY_UNIT,
        endpoint_hours,
        hourly.price_per_unit,
        vec![
            detail("Endpoint hours", hourly.price_per_unit * endpoint_hours),
            detail(
                "Data processing",
                endpoint.estimated_data_processed_gb.max(0.0) * processing.price_per_unit,
            ),
        ],
    )
}

impl NestedCostCalculator for NetworkSchema {
    fn calculate_cost<L: PriceLookup + ?Sized>(&self, lookup: &L) -> Cost {
        calculate_network_cost(self, &self.region, lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PricingRate;
    use crate::table::{MockPriceLookup, PricingTable};
    use domain_cloud_resources::{EndpointType, FlowLogs, InternetGateway, RouteTable, Subnet, SubnetType};
    use mockall::predicate::eq;

    const REGION: &str = "us-east-1";

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-6
    }

    fn table() -> PricingTable {
        PricingTable::new()
            .with_rate(REGION, ServiceType::Vpc, "nat_gateway_hourly", PricingRate::new("Hrs", 0.045))
            .with_rate(REGION, ServiceType::Vpc, "nat_gateway_processed_bytes", PricingRate::new("GB", 0.045))
            .with_rate(REGION, ServiceType::Vpc, "vpc_endpoint_hourly", PricingRate::new("Hrs", 0.01))
            .with_rate(REGION, ServiceType::Vpc, "vpc_endpoint_processed_bytes", PricingRate::new("GB", 0.01))
            .with_rate(REGION, ServiceType::CloudWatch, "vended_logs_ingestion_gb", PricingRate::new("GB", 0.5))
    }

    fn subnet(id: &str, subnet_type: SubnetType) -> Subnet {
        Subnet {
            id: id.to_string(),
            name: id.to_string(),
            cidr_block: "10.0.1.0/24".to_string(),
            availability_zone: "us-east-1a".to_string(),
            subnet_type,
        }
    }

    fn network_with_nat(data_gb: f64) -> NetworkSchema {
        NetworkSchema {
            name: "main".to_string(),
            subnets: vec![subnet("pub-a", SubnetType::Public), subnet("priv-a", SubnetType::Private)],
            internet_gateway: Some(InternetGateway {
                id: "igw-1".to_string(),
                name: "igw".to_string(),
            }),
            nat_gateways: vec![NatGateway {
                id: "nat-1".to_string(),
                name: "nat-a".to_string(),
                subnet_id: "pub-a".to_string(),
                estimated_data_processed_gb: data_gb,
            }],
            route_tables: vec![RouteTable {
                id: "rt-1".to_string(),
                subnet_ids: vec!["priv-a".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_single_nat_gateway_is_sole_contributor() {
        let cost = network_with_nat(100.0).calculate_cost(&table());

        assert_eq!(cost.breakdown.len(), 1);
        let nat = &cost.breakdown[0];
        assert_eq!(nat.name, "nat-a");
        assert_eq!(nat.category, CostCategory::Networking);
        assert!(close(nat.details[0].monthly, 32.85));
        assert!(close(nat.details[1].monthly, 4.5));
        assert!(close(nat.monthly, 37.35));
        assert!(close(cost.monthly, 37.35));
        assert!(close(cost.hourly, 37.35 / 730.0));
    }

    #[test]
    fn test_empty_network_costs_nothing() {
        let cost = NetworkSchema::default().calculate_cost(&table());
        assert!(cost.breakdown.is_empty());
        assert_eq!(cost.monthly, 0.0);
        assert_eq!(cost.hourly, 0.0);
    }

    #[test]
    fn test_interface_endpoint_billed_per_subnet() {
        let mut schema = network_with_nat(0.0);
        schema.nat_gateways.clear();
        schema.endpoints = vec![
            VpcEndpoint {
                id: "vpce-s3".to_string(),
                service_name: "com.amazonaws.us-east-1.s3".to_string(),
                endpoint_type: EndpointType::Gateway,
                ..Default::default()
            },
            VpcEndpoint {
                id: "vpce-ecr".to_string(),
                service_name: "com.amazonaws.us-east-1.ecr.api".to_string(),
                endpoint_type: EndpointType::Interface,
                subnet_ids: vec!["priv-a".to_string(), "priv-b".to_string()],
                estimated_data_processed_gb: 50.0,
                ..Default::default()
            },
        ];

        let cost = schema.calculate_cost(&table());
        assert_eq!(cost.breakdown.len(), 1);
        let endpoint = &cost.breakdown[0];
        assert_eq!(endpoint.id, "vpce-ecr");
        // No name given, falls back to the id
        assert_eq!(endpoint.name, "vpce-ecr");
        assert!(close(endpoint.quantity, 1460.0));
        assert!(close(endpoint.monthly, 0.01 * 1460.0 + 50.0 * 0.01));
    }

    #[test]
    fn test_flow_log_destination() {
        let mut schema = network_with_nat(0.0);
        schema.flow_logs = FlowLogs {
            enabled: true,
            destination: FlowLogDestination::CloudWatchLogs,
            estimated_log_volume_gb: 20.0,
        };
        let cost = schema.calculate_cost(&table());
        assert_eq!(cost.breakdown.len(), 2);
        assert_eq!(cost.breakdown[1].category, CostCategory::Monitoring);
        assert!(close(cost.breakdown[1].monthly, 10.0));

        schema.flow_logs.destination = FlowLogDestination::S3;
        assert_eq!(schema.calculate_cost(&table()).breakdown.len(), 1);

        schema.flow_logs.destination = FlowLogDestination::CloudWatchLogs;
        schema.flow_logs.enabled = false;
        assert_eq!(schema.calculate_cost(&table()).breakdown.len(), 1);
    }

    #[test]
    fn test_totals_match_components() {
        let mut schema = network_with_nat(250.0);
        schema.nat_gateways.push(NatGateway {
            id: "nat-2".to_string(),
            subnet_id: "pub-a".to_string(),
            estimated_data_processed_gb: 10.0,
            ..Default::default()
        });
        let cost = schema.calculate_cost(&table());
        let monthly: f64 = cost.breakdown.iter().map(|c| c.monthly).sum();
        let hourly: f64 = cost.breakdown.iter().map(|c| c.hourly).sum();
        assert!(close(cost.monthly, monthly));
        assert!(close(cost.hourly, hourly));
        assert_eq!(cost, schema.calculate_cost(&table()));
    }

    #[test]
    fn test_explicit_region_overrides_schema_region() {
        let mut lookup = MockPriceLookup::new();
        lookup
            .expect_get_price()
            .with(eq("ap-south-1"), eq(ServiceType::Vpc), eq("nat_gateway_hourly"))
            .times(1)
            .returning(|_, _, _| PricingRate::new("Hrs", 0.056));
        lookup
            .expect_get_price()
            .with(eq("ap-south-1"), eq(ServiceType::Vpc), eq("nat_gateway_processed_bytes"))
            .times(1)
            .returning(|_, _, _| PricingRate::new("GB", 0.056));

        let cost = calculate_network_cost(&network_with_nat(0.0), "ap-south-1", &lookup);
        assert!(close(cost.monthly, 0.056 * 730.0));
    }
}
