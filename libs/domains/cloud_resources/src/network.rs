//! Nested VPC schema: the network container with its subnets, gateways,
//! endpoints and route tables as individually addressable children.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::{AsRefStr, Display, EnumString};

use crate::error::CloudResourceResult;
use crate::models::fill_default_region;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SubnetType {
    Public,
    #[default]
    Private,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum EndpointType {
    #[default]
    Gateway,
    Interface,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FlowLogDestination {
    #[default]
    #[serde(alias = "cloudwatch")]
    CloudWatchLogs,
    S3,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subnet {
    pub id: String,
    pub name: String,
    pub cidr_block: String,
    pub availability_zone: String,
    pub subnet_type: SubnetType,
}

impl Subnet {
    pub fn is_public(&self) -> bool {
        self.subnet_type == SubnetType::Public
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternetGateway {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NatGateway {
    pub id: String,
    pub name: String,
    /// Subnet the gateway is placed in; must be a public subnet
    pub subnet_id: String,
    pub estimated_data_processed_gb: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VpcEndpoint {
    pub id: String,
    pub name: String,
    /// AWS service the endpoint targets (e.g. "com.amazonaws.us-east-1.s3")
    pub service_name: String,
    pub endpoint_type: EndpointType,
    /// Subnets (one per AZ) an interface endpoint places ENIs in
    pub subnet_ids: Vec<String>,
    pub estimated_data_processed_gb: f64,
}

impl VpcEndpoint {
    pub fn is_interface(&self) -> bool {
        self.endpoint_type == EndpointType::Interface
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    pub destination_cidr: String,
    /// Id of the gateway, NAT gateway or endpoint the route points at
    pub target_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteTable {
    pub id: String,
    pub name: String,
    pub subnet_ids: Vec<String>,
    pub routes: Vec<Route>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowLogs {
    pub enabled: bool,
    pub destination: FlowLogDestination,
    pub estimated_log_volume_gb: f64,
}

/// A virtual network with its child entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSchema {
    pub id: String,
    pub name: String,
    pub region: String,
    pub cidr_block: String,
    pub enable_dns_support: bool,
    pub enable_dns_hostnames: bool,
    pub subnets: Vec<Subnet>,
    pub internet_gateway: Option<InternetGateway>,
    pub nat_gateways: Vec<NatGateway>,
    pub endpoints: Vec<VpcEndpoint>,
    pub route_tables: Vec<RouteTable>,
    pub flow_logs: FlowLogs,
}

impl Default for NetworkSchema {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            region: "us-east-1".to_string(),
            cidr_block: String::new(),
            enable_dns_support: true,
            enable_dns_hostnames: true,
            subnets: Vec::new(),
            internet_gateway: None,
            nat_gateways: Vec::new(),
            endpoints: Vec::new(),
            route_tables: Vec::new(),
            flow_logs: FlowLogs::default(),
        }
    }
}

impl NetworkSchema {
    pub fn from_json(json: &str) -> CloudResourceResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a schema, using `default_region` when the document names none
    pub fn from_json_in_region(json: &str, default_region: &str) -> CloudResourceResult<Self> {
        let mut document: serde_json::Value = serde_json::from_str(json)?;
        fill_default_region(&mut document, default_region);
        Ok(serde_json::from_value(document)?)
    }

    pub fn subnet(&self, id: &str) -> Option<&Subnet> {
        self.subnets.iter().find(|s| s.id == id)
    }

    pub fn has_internet_gateway(&self) -> bool {
        self.internet_gateway.is_some()
    }

    pub fn public_subnets(&self) -> impl Iterator<Item = &Subnet> {
        self.subnets.iter().filter(|s| s.is_public())
    }

    pub fn private_subnets(&self) -> impl Iterator<Item = &Subnet> {
        self.subnets.iter().filter(|s| !s.is_public())
    }

    pub fn interface_endpoints(&self) -> impl Iterator<Item = &VpcEndpoint> {
        self.endpoints.iter().filter(|e| e.is_interface())
    }

    /// Distinct availability zones across all subnets
    pub fn availability_zones(&self) -> BTreeSet<&str> {
        self.subnets
            .iter()
            .map(|s| s.availability_zone.as_str())
            .filter(|az| !az.is_empty())
            .collect()
    }

    /// Availability zones hosting at least one NAT gateway
    pub fn nat_gateway_zones(&self) -> BTreeSet<&str> {
        self.nat_gateways
            .iter()
            .filter_map(|nat| self.subnet(&nat.subnet_id))
            .map(|s| s.availability_zone.as_str())
            .collect()
    }
}
