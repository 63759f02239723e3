//! Pricing Domain
//!
//! Cost estimation for cloud resources against a region-partitioned
//! pricing table.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐
//! │  calculator  │   │    nested    │  ← flat resources / nested schemas
//! └──────┬───────┘   └──────┬───────┘
//!        │                  │
//! ┌──────▼──────────────────▼───────┐
//! │     PriceLookup (table.rs)      │  ← region -> service -> key -> rate
//! └──────┬──────────────────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← rates, line items, estimates
//! └─────────────┘
//! ```
//!
//! Lookups and calculators never fail. A missing rate prices at zero, an
//! unrecognised resource type estimates empty. Only loading a table can
//! return a [`PricingError`].
//!
//! # Usage
//!
//! ```rust
//! use domain_cloud_resources::{CloudResource, ResourceConfig, attributes::VpcConfig};
//! use domain_pricing::{PricingTable, calculate_resource_cost};
//!
//! let table = PricingTable::bundled().unwrap();
//! let vpc = CloudResource::new(
//!     "vpc-1",
//!     "main",
//!     "us-east-1",
//!     ResourceConfig::Vpc(VpcConfig { nat_gateways: 1, ..Default::default() }),
//! );
//!
//! let estimate = calculate_resource_cost(&vpc, &table);
//! assert!((estimate.monthly_total - 0.045 * 730.0).abs() < 1e-9);
//! ```

pub mod calculator;
pub mod error;
pub mod estimate;
pub mod models;
pub mod nested;
pub mod table;

pub use calculator::{CostBuilder, calculate_resource_cost};
pub use error::{PricingError, PricingResult};
pub use estimate::{EstimateSummary, ResourceEstimate, estimate_resources};
pub use models::{
    BillingMode, Cost, CostBreakdownItem, CostCategory, CostComponent, CostDetail, CostEstimation,
    HOURS_PER_MONTH, MONTHS_PER_YEAR, PricingRate, ServiceType,
};
pub use nested::{NestedCostCalculator, calculate_cluster_cost, calculate_network_cost};
pub use table::{PriceLookup, PricingTable, get_price};
