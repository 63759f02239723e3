//! Cloud Resources Domain
//!
//! Resource model shared by the cost estimator and the validation layer.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────────┐
//! │    models    │   │  network / cluster   │  ← nested schemas
//! │ (flat, typed │   └──────────┬───────────┘
//! │  attributes) │              │
//! └──────────────┘   ┌──────────▼───────────┐
//!                    │      validation      │  ← hard/soft constraint sets
//!                    └──────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use domain_cloud_resources::{NetworkSchema, Validatable, ValidationContext};
//!
//! let network = NetworkSchema::from_json(r#"{"name": "empty"}"#).unwrap();
//! let result = network.validate(&ValidationContext::for_region("us-east-1"));
//! assert!(!result.valid);
//! ```

pub mod attributes;
pub mod cidr;
pub mod cluster;
pub mod error;
pub mod models;
pub mod network;
pub mod validation;

pub use cluster::{CapacityType, ClusterSchema, FargateProfile, NodeGroup};
pub use error::{CloudResourceError, CloudResourceResult};
pub use models::{CloudResource, ResourceConfig, ResourceDocument, ResourceType};
pub use network::{
    EndpointType, FlowLogDestination, FlowLogs, InternetGateway, NatGateway, NetworkSchema, Route, RouteTable,
    Subnet, SubnetType, VpcEndpoint,
};
pub use validation::{
    Constraint, ConstraintError, Validatable, ValidationContext, ValidationResult, validate_resource,
};
