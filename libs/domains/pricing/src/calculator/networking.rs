use domain_cloud_resources::attributes::{
    ApiGatewayConfig, ApiType, CloudFrontConfig, ElasticIpConfig, LoadBalancerConfig, LoadBalancerType,
    Route53Config, TransitGatewayConfig, VpcConfig, VpnConfig,
};

use super::{CostBuilder, child_label};
use crate::models::{BillingMode, ServiceType};
use crate::table::PriceLookup;

pub(super) fn vpc<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &VpcConfig) {
    costs.add_cost(
        ServiceType::Vpc,
        "nat_gateway_hourly",
        "NAT Gateways",
        f64::from(config.nat_gateways),
        BillingMode::Hourly,
        None,
    );
    costs.add_cost(
        ServiceType::Vpc,
        "nat_gateway_processed_bytes",
        "NAT Data Processed",
        config.nat_data_processed_gb,
        BillingMode::Usage,
        None,
    );

    // One ENI per endpoint per AZ
    let endpoint_enis = f64::from(config.interface_endpoints) * f64::from(config.endpoint_az_count.max(1));
    costs.add_cost(
        ServiceType::Vpc,
        "vpc_endpoint_hourly",
        "Interface Endpoints",
        endpoint_enis,
        BillingMode::Hourly,
        None,
    );
    costs.add_cost(
        ServiceType::Vpc,
        "vpc_endpoint_processed_bytes",
        "Endpoint Data Processed",
        config.endpoint_data_processed_gb,
        BillingMode::Usage,
        None,
    );
    costs.add_cost(
        ServiceType::Vpc,
        "public_ipv4_hourly",
        "Public IPv4 Addresses",
        f64::from(config.public_ipv4_addresses),
        BillingMode::Hourly,
        None,
    );
    costs.add_cost(
        ServiceType::CloudWatch,
        "vended_logs_ingestion_gb",
        "Flow Logs Ingestion",
        config.flow_logs_gb,
        BillingMode::Usage,
        None,
    );
}

pub(super) fn load_balancer<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &LoadBalancerConfig) {
    let prefix = config.lb_type.rate_prefix();
    let count = f64::from(config.count);

    costs.add_cost(
        ServiceType::Elb,
        &format!("{prefix}_hourly"),
        format!("Load Balancer ({})", prefix.to_uppercase()),
        count,
        BillingMode::Hourly,
        config.hours_per_month,
    );
    match config.lb_type {
        LoadBalancerType::Classic => costs.add_cost(
            ServiceType::Elb,
            "clb_processed_gb",
            "Data Processed",
            config.processed_gb,
            BillingMode::Usage,
            None,
        ),
        _ => costs.add_cost(
            ServiceType::Elb,
            &format!("{prefix}_lcu_hourly"),
            "Capacity Units",
            count * config.capacity_units,
            BillingMode::Hourly,
            config.hours_per_month,
        ),
    }
}

pub(super) fn cloudfront<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &CloudFrontConfig) {
    for (index, distribution) in config.distributions.iter().enumerate() {
        let name = &distribution.name;
        costs.add_cost(
            ServiceType::CloudFront,
            "data_transfer_out_gb",
            child_label(name, index, "Data Transfer Out"),
            distribution.data_transfer_out_gb,
            BillingMode::Usage,
            None,
        );
        costs.add_cost(
            ServiceType::CloudFront,
            "https_requests_10k",
            child_label(name, index, "HTTPS Requests"),
            distribution.https_requests / 10_000.0,
            BillingMode::Usage,
            None,
        );
        costs.add_cost(
            ServiceType::CloudFront,
            "http_requests_10k",
            child_label(name, index, "HTTP Requests"),
            distribution.http_requests / 10_000.0,
            BillingMode::Usage,
            None,
        );
        if distribution.origin_shield {
            costs.add_cost(
                ServiceType::CloudFront,
                "origin_shield_requests_10k",
                child_label(name, index, "Origin Shield Requests"),
                (distribution.https_requests + distribution.http_requests) / 10_000.0,
                BillingMode::Usage,
                None,
            );
        }
    }
}

pub(super) fn route53<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &Route53Config) {
    for (index, zone) in config.zones.iter().enumerate() {
        costs.add_cost(
            ServiceType::Route53,
            "hosted_zone",
            child_label(&zone.name, index, "Hosted Zone"),
            1.0,
            BillingMode::Flat,
            None,
        );
        costs.add_cost(
            ServiceType::Route53,
            "standard_queries_million",
            child_label(&zone.name, index, "Standard Queries"),
            zone.standard_queries_millions,
            BillingMode::Usage,
            None,
        );
        costs.add_cost(
            ServiceType::Route53,
            "latency_queries_million",
            child_label(&zone.name, index, "Latency-Based Queries"),
            zone.latency_queries_millions,
            BillingMode::Usage,
            None,
        );
        costs.add_cost(
            ServiceType::Route53,
            "health_check",
            child_label(&zone.name, index, "Health Checks"),
            f64::from(zone.health_checks),
            BillingMode::Flat,
            None,
        );
    }
}

pub(super) fn api_gateway<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &ApiGatewayConfig) {
    match config.api_type {
        ApiType::Rest => {
            costs.add_cost(
                ServiceType::APIGateway,
                "rest_requests_million",
                "REST API Requests",
                config.requests_millions,
                BillingMode::Usage,
                None,
            );
            if let Some(size) = config.cache_size_gb.as_deref().filter(|s| !s.is_empty()) {
                costs.add_cost(
                    ServiceType::APIGateway,
                    &format!("cache_{size}gb_hourly"),
                    format!("Cache ({size} GB)"),
                    1.0,
                    BillingMode::Hourly,
                    None,
                );
            }
        }
        ApiType::Http => costs.add_cost(
            ServiceType::APIGateway,
            "http_requests_million",
            "HTTP API Requests",
            config.requests_millions,
            BillingMode::Usage,
            None,
        ),
        ApiType::WebSocket => {
            costs.add_cost(
                ServiceType::APIGateway,
                "websocket_messages_million",
                "WebSocket Messages",
                config.websocket_messages_millions,
                BillingMode::Usage,
                None,
            );
            costs.add_cost(
                ServiceType::APIGateway,
                "websocket_connection_minutes_million",
                "WebSocket Connection Minutes",
                config.connection_minutes_millions,
                BillingMode::Usage,
                None,
            );
        }
    }
}

pub(super) fn transit_gateway<L: PriceLookup + ?Sized>(
    costs: &mut CostBuilder<'_, L>,
    config: &TransitGatewayConfig,
) {
    costs.add_cost(
        ServiceType::TransitGateway,
        "attachment_hourly",
        "Attachments",
        f64::from(config.attachments),
        BillingMode::Hourly,
        None,
    );
    costs.add_cost(
        ServiceType::TransitGateway,
        "data_processed_gb",
        "Data Processed",
        config.data_processed_gb,
        BillingMode::Usage,
        None,
    );
}

pub(super) fn vpn<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &VpnConfig) {
    costs.add_cost(
        ServiceType::Vpn,
        "connection_hourly",
        "Site-to-Site VPN Connections",
        f64::from(config.connections),
        BillingMode::Hourly,
        config.hours_per_month,
    );
    costs.add_cost(
        ServiceType::DataTransfer,
        "internet_out_gb",
        "Data Transfer Out",
        config.data_transfer_out_gb,
        BillingMode::Usage,
        None,
    );
}

pub(super) fn elastic_ip<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &ElasticIpConfig) {
    costs.add_cost(
        ServiceType::Vpc,
        "public_ipv4_hourly",
        "Elastic IPs",
        f64::from(config.count),
        BillingMode::Hourly,
        config.hours_per_month,
    );
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{REGION, assert_close, table};
    use super::*;
    use crate::models::CostEstimation;
    use crate::table::PricingTable;
    use domain_cloud_resources::attributes::{Distribution, HostedZone};

    fn rates() -> PricingTable {
        table(&[
            (ServiceType::Vpc, "nat_gateway_hourly", 0.045),
            (ServiceType::Vpc, "nat_gateway_processed_bytes", 0.045),
            (ServiceType::Vpc, "vpc_endpoint_hourly", 0.01),
            (ServiceType::Vpc, "public_ipv4_hourly", 0.005),
            (ServiceType::Elb, "alb_hourly", 0.0225),
            (ServiceType::Elb, "alb_lcu_hourly", 0.008),
            (ServiceType::Elb, "clb_hourly", 0.025),
            (ServiceType::Elb, "clb_processed_gb", 0.008),
            (ServiceType::CloudFront, "data_transfer_out_gb", 0.085),
            (ServiceType::CloudFront, "https_requests_10k", 0.01),
            (ServiceType::Route53, "hosted_zone", 0.5),
            (ServiceType::APIGateway, "rest_requests_million", 3.5),
            (ServiceType::APIGateway, "cache_0.5gb_hourly", 0.02),
        ])
    }

    fn run<F>(f: F) -> CostEstimation
    where
        F: FnOnce(&mut CostBuilder<'_, PricingTable>),
    {
        let table = rates();
        let mut costs = CostBuilder::new(&table, REGION);
        f(&mut costs);
        costs.finish()
    }

    #[test]
    fn test_flat_vpc_nat_gateway() {
        let config = VpcConfig {
            nat_gateways: 1,
            nat_data_processed_gb: 100.0,
            ..Default::default()
        };
        let estimate = run(|c| vpc(c, &config));
        assert_eq!(estimate.breakdown.len(), 2);
        assert_close(estimate.monthly_total, 37.35);
    }

    #[test]
    fn test_interface_endpoints_bill_per_az() {
        let config = VpcConfig {
            interface_endpoints: 2,
            endpoint_az_count: 3,
            ..Default::default()
        };
        let estimate = run(|c| vpc(c, &config));
        assert_close(estimate.breakdown[0].quantity, 6.0 * 730.0);
        assert_close(estimate.monthly_total, 6.0 * 730.0 * 0.01);
    }

    #[test]
    fn test_load_balancer_types() {
        let alb = LoadBalancerConfig {
            count: 2,
            capacity_units: 1.5,
            ..Default::default()
        };
        let estimate = run(|c| load_balancer(c, &alb));
        assert_eq!(estimate.breakdown[0].label, "Load Balancer (ALB)");
        assert_close(estimate.breakdown[0].total, 2.0 * 730.0 * 0.0225);
        assert_close(estimate.breakdown[1].total, 3.0 * 730.0 * 0.008);

        let clb = LoadBalancerConfig {
            lb_type: LoadBalancerType::Classic,
            processed_gb: 1000.0,
            ..Default::default()
        };
        let estimate = run(|c| load_balancer(c, &clb));
        assert_eq!(estimate.breakdown[1].label, "Data Processed");
        assert_close(estimate.breakdown[1].total, 8.0);
    }

    #[test]
    fn test_cloudfront_requests_per_10k() {
        let config = CloudFrontConfig {
            distributions: vec![Distribution {
                name: "web".to_string(),
                data_transfer_out_gb: 1000.0,
                https_requests: 5_000_000.0,
                ..Default::default()
            }],
        };
        let estimate = run(|c| cloudfront(c, &config));
        assert_eq!(estimate.breakdown.len(), 2);
        assert_eq!(estimate.breakdown[1].label, "web: HTTPS Requests");
        assert_close(estimate.breakdown[1].quantity, 500.0);
        assert_close(estimate.monthly_total, 85.0 + 5.0);
    }

    #[test]
    fn test_route53_zone_fee_per_zone() {
        let config = Route53Config {
            zones: vec![
                HostedZone {
                    name: "example.com".to_string(),
                    ..Default::default()
                },
                HostedZone {
                    name: "example.org".to_string(),
                    ..Default::default()
                },
            ],
        };
        let estimate = run(|c| route53(c, &config));
        assert_eq!(estimate.breakdown.len(), 2);
        assert_close(estimate.monthly_total, 1.0);
    }

    #[test]
    fn test_rest_api_with_cache() {
        let config = ApiGatewayConfig {
            requests_millions: 10.0,
            cache_size_gb: Some("0.5".to_string()),
            ..Default::default()
        };
        let estimate = run(|c| api_gateway(c, &config));
        assert_close(estimate.breakdown[0].total, 35.0);
        assert_eq!(estimate.breakdown[1].label, "Cache (0.5 GB)");
        assert_close(estimate.breakdown[1].total, 730.0 * 0.02);
    }

    #[test]
    fn test_elastic_ip_partial_month() {
        let config = ElasticIpConfig {
            count: 4,
            hours_per_month: Some(24.0),
        };
        let estimate = run(|c| elastic_ip(c, &config));
        assert_close(estimate.monthly_total, 4.0 * 24.0 * 0.005);
    }
}
