//! End-to-end estimates against the bundled and file-loaded pricing tables

use domain_cloud_resources::{CloudResource, ClusterSchema, NetworkSchema, ResourceConfig};
use domain_pricing::{
    NestedCostCalculator, PriceLookup, PricingError, PricingTable, ServiceType, calculate_resource_cost,
    estimate_resources,
};
use std::io::Write;

const RESOURCES: &str = r#"[
    {"id": "web", "type": "ec2", "name": "web", "region": "us-east-1",
     "attributes": {"instance_type": "t3.micro", "instance_count": 2}},
    {"id": "db", "type": "rds", "name": "orders", "region": "us-east-1",
     "attributes": {"engine": "postgres", "instance_class": "db.t3.micro", "deployment": "multi_az", "storage_gb": 20}},
    {"id": "role", "type": "iam_role", "name": "deployer", "region": "us-east-1", "attributes": {}},
    {"id": "x", "type": "quantum_annealer", "name": "lab", "region": "us-east-1", "attributes": {}}
]"#;

const NETWORK: &str = r#"{
    "id": "vpc-1",
    "name": "main",
    "region": "us-east-1",
    "cidr_block": "10.0.0.0/16",
    "subnets": [
        {"id": "pub-a", "cidr_block": "10.0.1.0/24", "availability_zone": "us-east-1a", "subnet_type": "public"},
        {"id": "priv-a", "cidr_block": "10.0.10.0/24", "availability_zone": "us-east-1a", "subnet_type": "private"}
    ],
    "internet_gateway": {"id": "igw-1", "name": "igw"},
    "nat_gateways": [{"id": "nat-1", "subnet_id": "pub-a", "estimated_data_processed_gb": 100}]
}"#;

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-6
}

#[test]
fn test_bundled_table_estimates_mixed_resources() {
    let table = PricingTable::bundled().unwrap();
    let resources = CloudResource::list_from_json(RESOURCES).unwrap();
    let summary = estimate_resources(&resources, &table);

    assert_eq!(summary.resources.len(), 4);
    assert!(!summary.resources[0].estimation.is_empty());
    assert!(!summary.resources[1].estimation.is_empty());
    assert!(summary.resources[2].estimation.is_empty());
    assert!(summary.resources[3].estimation.is_empty());
    assert_eq!(summary.resources[3].resource_type, "quantum_annealer");

    let monthly: f64 = summary.resources.iter().map(|r| r.estimation.monthly_total).sum();
    assert!(close(summary.monthly_total, monthly));
    assert!(close(summary.annual_total, monthly * 12.0));
}

#[test]
fn test_resource_without_region_is_priced_in_default_region() {
    let table = PricingTable::bundled().unwrap();
    let resources = CloudResource::list_from_json_in_region(
        r#"[{"id": "vpc", "type": "vpc", "attributes": {"nat_gateways": 1}}]"#,
        "us-east-1",
    )
    .unwrap();

    let summary = estimate_resources(&resources, &table);
    assert_eq!(summary.resources[0].region, "us-east-1");
    assert!(close(summary.monthly_total, 0.045 * 730.0));
}

#[test]
fn test_multi_az_doubles_database_lines() {
    let table = PricingTable::bundled().unwrap();
    let resources = CloudResource::list_from_json(RESOURCES).unwrap();
    let multi_az = &resources[1];

    let ResourceConfig::Rds(mut config) = multi_az.config.clone() else {
        panic!("expected rds config");
    };
    config.deployment = Default::default();
    let single_az = multi_az.with_config(ResourceConfig::Rds(config));

    let doubled = calculate_resource_cost(multi_az, &table);
    let single = calculate_resource_cost(&single_az, &table);
    assert!(close(doubled.breakdown[0].total, 2.0 * single.breakdown[0].total));
    assert!(close(doubled.breakdown[1].total, 2.0 * single.breakdown[1].total));
}

#[test]
fn test_network_nat_scenario_with_bundled_rates() {
    let table = PricingTable::bundled().unwrap();
    let network = NetworkSchema::from_json(NETWORK).unwrap();

    let cost = network.calculate_cost(&table);
    assert_eq!(cost.breakdown.len(), 1);
    assert!(close(cost.monthly, 37.35));
}

#[test]
fn test_cluster_uses_bundled_node_rates() {
    let table = PricingTable::bundled().unwrap();
    let cluster = ClusterSchema::from_json(
        r#"{"name": "prod", "node_groups": [{"id": "ng", "instance_type": "m5.large", "desired_size": 2, "disk_size_gb": 20}]}"#,
    )
    .unwrap();

    let node_rate = table.get_price("us-east-1", ServiceType::Ec2, "m5.large").price_per_unit;
    let cost = cluster.calculate_cost(&table);
    let expected = 0.10 * 730.0 + node_rate * 2.0 * 730.0 + 2.0 * 20.0 * 0.08;
    assert!(close(cost.monthly, expected));
}

#[test]
fn test_table_file_overrides_bundled_rates() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"us-east-1": {{"VPC": {{"nat_gateway_hourly": {{"unit": "Hrs", "pricePerUnit": 0.05}}}}}}}}"#
    )
    .unwrap();

    let overrides = PricingTable::from_path(file.path()).unwrap();
    let table = PricingTable::bundled().unwrap().merge(overrides);

    assert_eq!(table.get_price("us-east-1", ServiceType::Vpc, "nat_gateway_hourly").price_per_unit, 0.05);
    assert_eq!(
        table.get_price("us-east-1", ServiceType::Vpc, "nat_gateway_processed_bytes").price_per_unit,
        0.045
    );
}

#[test]
fn test_table_load_errors() {
    let missing = PricingTable::from_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(missing, PricingError::Io { .. }));

    let malformed = PricingTable::from_json_str("[1, 2, 3]").unwrap_err();
    assert!(matches!(malformed, PricingError::Parse(_)));

    let negative = PricingTable::from_json_str(
        r#"{"us-east-1": {"S3": {"standard_storage_gb": {"unit": "GB", "pricePerUnit": -1}}}}"#,
    )
    .unwrap_err();
    assert!(matches!(negative, PricingError::InvalidInput(_)));
}
