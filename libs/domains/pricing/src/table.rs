//! Region-partitioned pricing table and the lookup seam calculators use.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, trace};

use crate::error::{PricingError, PricingResult};
use crate::models::{PricingRate, ServiceType};

/// Pricing table shipped with the crate
const BUNDLED_TABLE: &str = include_str!("../data/pricing.json");

type ServiceRates = HashMap<String, PricingRate>;
type RegionRates = HashMap<String, ServiceRates>;

/// Resolves `(region, service, rate key)` to a unit price
///
/// Implementations must never fail: an unresolved triple returns
/// [`PricingRate::fallback`].
#[cfg_attr(test, mockall::automock)]
pub trait PriceLookup {
    fn get_price(&self, region: &str, service: ServiceType, key: &str) -> PricingRate;
}

/// `region -> service -> rate key -> rate`
///
/// Service keys are kept as strings so a table may carry services this
/// build does not know about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PricingTable {
    regions: HashMap<String, RegionRates>,
}

impl PricingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default table bundled with the crate
    pub fn bundled() -> PricingResult<Self> {
        Self::from_json_str(BUNDLED_TABLE)
    }

    pub fn from_json_str(json: &str) -> PricingResult<Self> {
        let table: Self = serde_json::from_str(json)?;
        table.check_prices()?;
        Ok(table)
    }

    pub fn from_path(path: impl AsRef<Path>) -> PricingResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| PricingError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table = Self::from_json_str(&json)?;
        debug!(path = %path.display(), rates = table.len(), "Loaded pricing table");
        Ok(table)
    }

    fn check_prices(&self) -> PricingResult<()> {
        for (region, services) in &self.regions {
            for (service, rates) in services {
                for (key, rate) in rates {
                    if !rate.price_per_unit.is_finite() || rate.price_per_unit < 0.0 {
                        return Err(PricingError::InvalidInput(format!(
                            "{region}/{service}/{key}: price must be a non-negative number, got {}",
                            rate.price_per_unit
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Add or replace a single rate
    pub fn insert(&mut self, region: &str, service: ServiceType, key: &str, rate: PricingRate) {
        self.regions
            .entry(region.to_string())
            .or_default()
            .entry(service.to_string())
            .or_default()
            .insert(key.to_string(), rate);
    }

    /// Builder form of [`PricingTable::insert`]
    pub fn with_rate(mut self, region: &str, service: ServiceType, key: &str, rate: PricingRate) -> Self {
        self.insert(region, service, key, rate);
        self
    }

    /// Overlay `other` on top of `self`; rates present in both take `other`'s value
    pub fn merge(mut self, other: PricingTable) -> Self {
        for (region, services) in other.regions {
            let target = self.regions.entry(region).or_default();
            for (service, rates) in services {
                target.entry(service).or_default().extend(rates);
            }
        }
        self
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// Total number of rates across all regions
    pub fn len(&self) -> usize {
        self.regions
            .values()
            .flat_map(HashMap::values)
            .map(HashMap::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PriceLookup for PricingTable {
    fn get_price(&self, region: &str, service: ServiceType, key: &str) -> PricingRate {
        let Some(services) = self.regions.get(region) else {
            trace!(region, "No pricing for region, using zero rate");
            return PricingRate::fallback();
        };
        let Some(rates) = services.get(service.as_ref()) else {
            trace!(region, service = %service, "No pricing for service, using zero rate");
            return PricingRate::fallback();
        };
        match rates.get(key) {
            Some(rate) => rate.clone(),
            None => {
                trace!(region, service = %service, key, "No pricing for rate key, using zero rate");
                PricingRate::fallback()
            }
        }
    }
}

/// Free-function form of [`PriceLookup::get_price`]
pub fn get_price(table: &PricingTable, region: &str, service: ServiceType, key: &str) -> PricingRate {
    table.get_price(region, service, key)
}
