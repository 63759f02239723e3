use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum QueueType {
    #[default]
    Standard,
    Fifo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SqsConfig {
    pub queues: Vec<Queue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Queue {
    pub name: String,
    pub queue_type: QueueType,
    pub requests_millions: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnsConfig {
    pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Topic {
    pub name: String,
    pub publishes_millions: f64,
    pub http_deliveries_millions: f64,
    pub email_deliveries: f64,
    pub sms_messages: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MskConfig {
    pub clusters: Vec<KafkaCluster>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KafkaCluster {
    pub name: String,
    pub broker_instance_type: String,
    pub broker_count: u32,
    pub storage_per_broker_gb: f64,
}

impl Default for KafkaCluster {
    fn default() -> Self {
        Self {
            name: "kafka".to_string(),
            broker_instance_type: "kafka.m5.large".to_string(),
            broker_count: 3,
            storage_per_broker_gb: 100.0,
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BrokerDeployment {
    #[default]
    SingleInstance,
    ActiveStandby,
    Cluster,
}

impl BrokerDeployment {
    /// Broker nodes billed for each deployment mode
    pub fn node_count(&self) -> u32 {
        match self {
            BrokerDeployment::SingleInstance => 1,
            BrokerDeployment::ActiveStandby => 2,
            BrokerDeployment::Cluster => 3,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmazonMqConfig {
    pub brokers: Vec<MqBroker>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MqBroker {
    pub name: String,
    pub instance_type: String,
    pub deployment: BrokerDeployment,
    pub storage_gb: f64,
}

impl Default for MqBroker {
    fn default() -> Self {
        Self {
            name: "broker".to_string(),
            instance_type: "mq.m5.large".to_string(),
            deployment: BrokerDeployment::SingleInstance,
            storage_gb: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KinesisConfig {
    pub shard_count: u32,
    pub put_payload_units_millions: f64,
    pub extended_retention: bool,
    pub hours_per_month: Option<f64>,
}

impl Default for KinesisConfig {
    fn default() -> Self {
        Self {
            shard_count: 1,
            put_payload_units_millions: 0.0,
            extended_retention: false,
            hours_per_month: None,
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WorkflowType {
    #[default]
    Standard,
    Express,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepFunctionsConfig {
    pub workflow_type: WorkflowType,
    /// State transitions per month (standard workflows)
    pub state_transitions: f64,
    pub express_requests_millions: f64,
    pub express_avg_duration_ms: f64,
    pub express_memory_mb: f64,
}

impl Default for StepFunctionsConfig {
    fn default() -> Self {
        Self {
            workflow_type: WorkflowType::Standard,
            state_transitions: 0.0,
            express_requests_millions: 0.0,
            express_avg_duration_ms: 100.0,
            express_memory_mb: 64.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventBridgeConfig {
    pub custom_events_millions: f64,
    pub archived_gb: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SesConfig {
    pub emails_sent: f64,
    pub attachments_gb: f64,
    pub dedicated_ips: u32,
}
