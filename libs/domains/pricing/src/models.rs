use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use ts_rs::TS;

/// Billable hours in a month (365 * 24 / 12, rounded)
pub const HOURS_PER_MONTH: f64 = 730.0;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Unit reported on hourly line items, whatever the rate's own unit says
pub const HOURLY_DISPLAY_UNIT: &str = "Hrs";

/// Service key of the pricing table (second level of `region -> service -> rate key`)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
    TS,
)]
#[ts(export)]
pub enum ServiceType {
    // Compute
    #[serde(rename = "EC2")]
    #[strum(serialize = "EC2")]
    Ec2,
    Lambda,
    #[serde(rename = "EKS")]
    #[strum(serialize = "EKS")]
    Eks,
    #[serde(rename = "ECS")]
    #[strum(serialize = "ECS")]
    Ecs,
    Fargate,

    // Storage
    S3,
    #[serde(rename = "EBS")]
    #[strum(serialize = "EBS")]
    Ebs,
    #[serde(rename = "EFS")]
    #[strum(serialize = "EFS")]
    Efs,
    Backup,
    #[serde(rename = "ECR")]
    #[strum(serialize = "ECR")]
    Ecr,

    // Databases
    #[serde(rename = "RDS")]
    #[strum(serialize = "RDS")]
    Rds,
    Aurora,
    DynamoDB,
    ElastiCache,
    DocumentDB,
    Redshift,
    OpenSearch,

    // Networking
    #[serde(rename = "VPC")]
    #[strum(serialize = "VPC")]
    Vpc,
    #[serde(rename = "ELB")]
    #[strum(serialize = "ELB")]
    Elb,
    CloudFront,
    Route53,
    APIGateway,
    TransitGateway,
    #[serde(rename = "VPN")]
    #[strum(serialize = "VPN")]
    Vpn,
    DataTransfer,

    // Application integration
    #[serde(rename = "SQS")]
    #[strum(serialize = "SQS")]
    Sqs,
    #[serde(rename = "SNS")]
    #[strum(serialize = "SNS")]
    Sns,
    #[serde(rename = "MSK")]
    #[strum(serialize = "MSK")]
    Msk,
    AmazonMQ,
    Kinesis,
    StepFunctions,
    EventBridge,
    #[serde(rename = "SES")]
    #[strum(serialize = "SES")]
    Ses,

    // Security
    #[serde(rename = "WAF")]
    #[strum(serialize = "WAF")]
    Waf,
    #[serde(rename = "ACM")]
    #[strum(serialize = "ACM")]
    Acm,
    #[serde(rename = "KMS")]
    #[strum(serialize = "KMS")]
    Kms,
    SecretsManager,
    Cognito,

    // Operations and analytics
    CloudWatch,
    Glue,
    Athena,
}

/// How a line item's quantity turns into a monthly amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BillingMode {
    /// `quantity * hours * price`; hours default to [`HOURS_PER_MONTH`]
    Hourly,
    /// `quantity * price`, quantity already in the rate's billing unit
    Usage,
    /// `quantity * price` as a per-unit monthly fee
    Flat,
}

/// Unit price record from the pricing table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingRate {
    pub unit: String,
    pub price_per_unit: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl PricingRate {
    pub fn new(unit: impl Into<String>, price_per_unit: f64) -> Self {
        Self {
            unit: unit.into(),
            price_per_unit,
            currency: default_currency(),
        }
    }

    /// Zero-cost placeholder returned for any missing table entry
    pub fn fallback() -> Self {
        Self::new("N/A", 0.0)
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }
}

/// One line of a flat resource estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdownItem {
    pub label: String,
    pub unit_cost: f64,
    pub quantity: f64,
    pub unit: String,
    pub total: f64,
}

/// Itemized monthly estimate of a flat resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimation {
    pub monthly_total: f64,
    pub breakdown: Vec<CostBreakdownItem>,
}

impl CostEstimation {
    pub fn is_empty(&self) -> bool {
        self.breakdown.is_empty()
    }

    pub fn annual_total(&self) -> f64 {
        self.monthly_total * MONTHS_PER_YEAR
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CostCategory {
    Compute,
    ControlPlane,
    Networking,
    Storage,
    Monitoring,
}

/// Named sub-amount of a [`CostComponent`], for drill-down
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CostDetail {
    pub name: String,
    pub monthly: f64,
}

/// A priced child of a nested schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CostComponent {
    pub id: String,
    pub name: String,
    pub category: CostCategory,
    pub unit: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub hourly: f64,
    pub monthly: f64,
    pub details: Vec<CostDetail>,
}

/// Estimate of a nested schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cost {
    pub hourly: f64,
    pub monthly: f64,
    pub breakdown: Vec<CostComponent>,
}

impl Cost {
    /// Sum component totals; the only way a `Cost` is assembled
    pub fn from_components(breakdown: Vec<CostComponent>) -> Self {
        let hourly = breakdown.iter().map(|c| c.hourly).sum();
        let monthly = breakdown.iter().map(|c| c.monthly).sum();
        Self {
            hourly,
            monthly,
            breakdown,
        }
    }

    pub fn annual(&self) -> f64 {
        self.monthly * MONTHS_PER_YEAR
    }
}
