//! Multi-resource estimates

use domain_cloud_resources::CloudResource;
use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;

use crate::calculator::calculate_resource_cost;
use crate::models::{CostEstimation, MONTHS_PER_YEAR};
use crate::table::PriceLookup;

/// Estimate of one resource within a summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ResourceEstimate {
    pub id: String,
    pub name: String,
    pub resource_type: String,
    pub region: String,
    pub estimation: CostEstimation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EstimateSummary {
    pub resources: Vec<ResourceEstimate>,
    pub monthly_total: f64,
    pub annual_total: f64,
}

impl EstimateSummary {
    /// Resources that produced at least one line item
    pub fn priced(&self) -> impl Iterator<Item = &ResourceEstimate> {
        self.resources.iter().filter(|r| !r.estimation.is_empty())
    }
}

/// Estimate every resource independently, keeping input order
pub fn estimate_resources<L: PriceLookup + ?Sized>(resources: &[CloudResource], lookup: &L) -> EstimateSummary {
    let resources: Vec<ResourceEstimate> = resources
        .iter()
        .map(|resource| ResourceEstimate {
            id: resource.id.clone(),
            name: resource.name.clone(),
            resource_type: resource.config.type_tag().to_string(),
            region: resource.region.clone(),
            estimation: calculate_resource_cost(resource, lookup),
        })
        .collect();

    let monthly_total: f64 = resources.iter().map(|r| r.estimation.monthly_total).sum();
    info!(
        resources = resources.len(),
        monthly_total,
        "Estimated resources"
    );

    EstimateSummary {
        resources,
        monthly_total,
        annual_total: monthly_total * MONTHS_PER_YEAR,
    }
}
