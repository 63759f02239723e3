use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudWatchConfig {
    pub custom_metrics: f64,
    pub dashboards: f64,
    pub alarms: f64,
    pub logs_ingested_gb: f64,
    pub logs_stored_gb: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlueConfig {
    pub etl_dpu_hours: f64,
    pub crawler_dpu_hours: f64,
    /// Catalog objects stored, in units of 100,000
    pub catalog_objects_100k: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AthenaConfig {
    pub data_scanned_tb: f64,
}
