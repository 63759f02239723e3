//! Constraint sets for [`NetworkSchema`].

use std::collections::HashSet;

use super::{Constraint, ConstraintError, Validatable, ValidationContext};
use crate::cidr::{Cidr, is_valid_cidr, prefix_length};
use crate::network::NetworkSchema;

type Check = Result<bool, ConstraintError>;

/// Network prefix lengths accepted by the VPC API
const MIN_NETWORK_PREFIX: u8 = 16;
const MAX_NETWORK_PREFIX: u8 = 28;

/// Networks smaller than this leave little room for new subnets
const GROWTH_PREFIX_THRESHOLD: u8 = 20;

pub static NETWORK_HARD_CONSTRAINTS: &[Constraint<NetworkSchema>] = &[
    Constraint::new("has-subnets", "Network must contain at least one subnet", has_subnets),
    Constraint::new(
        "network-cidr-valid",
        "Network CIDR must be a valid IPv4 block with a prefix between /16 and /28",
        network_cidr_valid,
    ),
    Constraint::new(
        "subnets-within-network-cidr",
        "Every subnet CIDR must fall within the network CIDR",
        subnets_within_network,
    ),
    Constraint::new(
        "no-duplicate-subnet-cidrs",
        "Subnet CIDR blocks must not overlap",
        no_duplicate_subnet_cidrs,
    ),
    Constraint::new(
        "nat-in-public-subnet",
        "NAT gateways must be placed in an existing public subnet",
        nat_in_public_subnet,
    ),
    Constraint::new(
        "public-subnet-requires-igw",
        "Public subnets require an internet gateway attached to the network",
        public_subnet_requires_igw,
    ),
    Constraint::new("subnet-cidr-valid", "Every subnet must have a valid IPv4 CIDR block", subnet_cidr_valid),
    Constraint::new(
        "interface-endpoint-has-subnets",
        "Interface endpoints must be associated with at least one subnet",
        interface_endpoint_has_subnets,
    ),
];

pub static NETWORK_SOFT_CONSTRAINTS: &[Constraint<NetworkSchema>] = &[
    Constraint::new(
        "multi-az-subnets",
        "Spread subnets across at least two availability zones for high availability",
        multi_az_subnets,
    ),
    Constraint::new(
        "nat-per-public-az",
        "Deploy one NAT gateway in each availability zone with a public subnet to avoid cross-AZ traffic",
        nat_per_public_az,
    ),
    Constraint::new(
        "dns-hostnames-enabled",
        "Enable DNS hostnames so instances and endpoints receive resolvable names",
        dns_hostnames_enabled,
    ),
    Constraint::new(
        "flow-logs-enabled",
        "Enable VPC flow logs for traffic auditing and troubleshooting",
        flow_logs_enabled,
    ),
    Constraint::new(
        "interface-endpoint-multi-subnet",
        "Associate interface endpoints with at least two subnets for high availability",
        interface_endpoint_multi_subnet,
    ),
    Constraint::new(
        "private-subnets-have-nat",
        "Private subnets have no NAT gateway and cannot reach the internet",
        private_subnets_have_nat,
    ),
    Constraint::new(
        "network-cidr-room-to-grow",
        "Network CIDR prefix is longer than /20 and leaves few addresses for growth",
        network_cidr_room_to_grow,
    ),
];

impl Validatable for NetworkSchema {
    fn hard_constraints() -> &'static [Constraint<Self>] {
        NETWORK_HARD_CONSTRAINTS
    }

    fn soft_constraints() -> &'static [Constraint<Self>] {
        NETWORK_SOFT_CONSTRAINTS
    }
}

// Hard constraints

fn has_subnets(network: &NetworkSchema, _: &ValidationContext) -> Check {
    Ok(!network.subnets.is_empty())
}

fn network_cidr_valid(network: &NetworkSchema, _: &ValidationContext) -> Check {
    Ok(prefix_length(&network.cidr_block)
        .is_some_and(|p| (MIN_NETWORK_PREFIX..=MAX_NETWORK_PREFIX).contains(&p)))
}

fn subnets_within_network(network: &NetworkSchema, _: &ValidationContext) -> Check {
    // An unparseable network or subnet CIDR is reported by its own constraint
    let Some(outer) = Cidr::parse(&network.cidr_block) else {
        return Ok(true);
    };
    Ok(network
        .subnets
        .iter()
        .filter_map(|s| Cidr::parse(&s.cidr_block))
        .all(|inner| outer.contains(&inner)))
}

fn no_duplicate_subnet_cidrs(network: &NetworkSchema, _: &ValidationContext) -> Check {
    let mut seen = HashSet::new();
    Ok(network.subnets.iter().all(|s| seen.insert(s.cidr_block.as_str())))
}

fn nat_in_public_subnet(network: &NetworkSchema, _: &ValidationContext) -> Check {
    Ok(network
        .nat_gateways
        .iter()
        .all(|nat| network.subnet(&nat.subnet_id).is_some_and(|s| s.is_public())))
}

fn public_subnet_requires_igw(network: &NetworkSchema, _: &ValidationContext) -> Check {
    Ok(network.public_subnets().next().is_none() || network.has_internet_gateway())
}

fn subnet_cidr_valid(network: &NetworkSchema, _: &ValidationContext) -> Check {
    Ok(network.subnets.iter().all(|s| is_valid_cidr(&s.cidr_block)))
}

fn interface_endpoint_has_subnets(network: &NetworkSchema, _: &ValidationContext) -> Check {
    for endpoint in network.interface_endpoints() {
        if let Some(missing) = endpoint.subnet_ids.iter().find(|id| network.subnet(id).is_none()) {
            return Err(ConstraintError::InconsistentInput(format!(
                "endpoint {} references unknown subnet {missing}",
                endpoint.id
            )));
        }
    }
    Ok(network.interface_endpoints().all(|e| !e.subnet_ids.is_empty()))
}

// Soft constraints

fn multi_az_subnets(network: &NetworkSchema, _: &ValidationContext) -> Check {
    Ok(network.availability_zones().len() >= 2)
}

fn nat_per_public_az(network: &NetworkSchema, _: &ValidationContext) -> Check {
    if network.nat_gateways.is_empty() {
        return Ok(true);
    }
    let nat_zones = network.nat_gateway_zones();
    Ok(network
        .public_subnets()
        .all(|s| nat_zones.contains(s.availability_zone.as_str())))
}

fn dns_hostnames_enabled(network: &NetworkSchema, _: &ValidationContext) -> Check {
    Ok(network.enable_dns_hostnames)
}

fn flow_logs_enabled(network: &NetworkSchema, _: &ValidationContext) -> Check {
    Ok(network.flow_logs.enabled)
}

fn interface_endpoint_multi_subnet(network: &NetworkSchema, _: &ValidationContext) -> Check {
    Ok(network.interface_endpoints().all(|e| e.subnet_ids.len() >= 2))
}

fn private_subnets_have_nat(network: &NetworkSchema, _: &ValidationContext) -> Check {
    Ok(network.private_subnets().next().is_none() || !network.nat_gateways.is_empty())
}

fn network_cidr_room_to_grow(network: &NetworkSchema, _: &ValidationContext) -> Check {
    Ok(prefix_length(&network.cidr_block).is_none_or(|p| p <= GROWTH_PREFIX_THRESHOLD))
}
