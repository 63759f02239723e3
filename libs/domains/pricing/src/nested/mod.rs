//! Cost calculators for nested schemas
//!
//! Each calculator is a reducer over the schema's child arrays that emits
//! one [`CostComponent`] per billable child. Free children contribute
//! nothing.

mod cluster;
mod network;

pub use cluster::{
    CONTROL_PLANE_HOURLY, EXTENDED_SUPPORT_HOURLY, NODE_STORAGE_GB_MONTH, SPOT_DISCOUNT, calculate_cluster_cost,
};
pub use network::calculate_network_cost;

use crate::models::{Cost, CostCategory, CostComponent, CostDetail, HOURS_PER_MONTH};
use crate::table::PriceLookup;

/// A nested schema that prices itself in its own region
pub trait NestedCostCalculator {
    fn calculate_cost<L: PriceLookup + ?Sized>(&self, lookup: &L) -> Cost;
}

/// Component whose hourly figure is its monthly amount spread over the month
fn component(
    id: &str,
    name: &str,
    category: CostCategory,
    unit: &str,
    quantity: f64,
    unit_price: f64,
    details: Vec<CostDetail>,
) -> CostComponent {
    let monthly = details.iter().map(|d| d.monthly).sum();
    CostComponent {
        id: id.to_string(),
        name: display_name(id, name).to_string(),
        category,
        unit: unit.to_string(),
        quantity,
        unit_price,
        hourly: monthly / HOURS_PER_MONTH,
        monthly,
        details,
    }
}

fn detail(name: &str, monthly: f64) -> CostDetail {
    CostDetail {
        name: name.to_string(),
        monthly,
    }
}

fn display_name<'a>(id: &'a str, name: &'a str) -> &'a str {
    if name.is_empty() { id } else { name }
}
