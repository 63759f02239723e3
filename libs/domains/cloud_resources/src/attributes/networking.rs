use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Flat VPC estimate built from counters
///
/// See [`crate::NetworkSchema`] for the nested representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VpcConfig {
    pub nat_gateways: u32,
    pub nat_data_processed_gb: f64,
    pub interface_endpoints: u32,
    /// Availability zones each interface endpoint is deployed into
    pub endpoint_az_count: u32,
    pub endpoint_data_processed_gb: f64,
    pub public_ipv4_addresses: u32,
    pub flow_logs_gb: f64,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LoadBalancerType {
    #[default]
    Application,
    Network,
    Gateway,
    Classic,
}

impl LoadBalancerType {
    /// Rate key prefix under the ELB service
    pub fn rate_prefix(&self) -> &'static str {
        match self {
            LoadBalancerType::Application => "alb",
            LoadBalancerType::Network => "nlb",
            LoadBalancerType::Gateway => "gwlb",
            LoadBalancerType::Classic => "clb",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadBalancerConfig {
    pub lb_type: LoadBalancerType,
    pub count: u32,
    /// Average capacity units (LCU/NLCU/GLCU) consumed per hour
    pub capacity_units: f64,
    /// Data processed per month, only billed for classic load balancers
    pub processed_gb: f64,
    pub hours_per_month: Option<f64>,
}

impl Default for LoadBalancerConfig {
    fn default() -> Self {
        Self {
            lb_type: LoadBalancerType::Application,
            count: 1,
            capacity_units: 1.0,
            processed_gb: 0.0,
            hours_per_month: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudFrontConfig {
    pub distributions: Vec<Distribution>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Distribution {
    pub name: String,
    pub data_transfer_out_gb: f64,
    pub https_requests: f64,
    pub http_requests: f64,
    pub origin_shield: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Route53Config {
    pub zones: Vec<HostedZone>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostedZone {
    pub name: String,
    pub standard_queries_millions: f64,
    pub latency_queries_millions: f64,
    pub health_checks: u32,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ApiType {
    #[default]
    Rest,
    Http,
    #[serde(alias = "websocket")]
    WebSocket,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiGatewayConfig {
    pub api_type: ApiType,
    pub requests_millions: f64,
    /// Cache size in GB as offered by API Gateway ("0.5", "1.6", "6.1", ...)
    pub cache_size_gb: Option<String>,
    pub websocket_messages_millions: f64,
    pub connection_minutes_millions: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitGatewayConfig {
    pub attachments: u32,
    pub data_processed_gb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VpnConfig {
    pub connections: u32,
    pub hours_per_month: Option<f64>,
    pub data_transfer_out_gb: f64,
}

impl Default for VpnConfig {
    fn default() -> Self {
        Self {
            connections: 1,
            hours_per_month: None,
            data_transfer_out_gb: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElasticIpConfig {
    pub count: u32,
    pub hours_per_month: Option<f64>,
}

impl Default for ElasticIpConfig {
    fn default() -> Self {
        Self {
            count: 1,
            hours_per_month: None,
        }
    }
}
