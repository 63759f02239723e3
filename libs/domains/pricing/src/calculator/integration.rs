use domain_cloud_resources::attributes::{
    AmazonMqConfig, EventBridgeConfig, KinesisConfig, MskConfig, QueueType, SesConfig, SnsConfig, SqsConfig,
    StepFunctionsConfig, WorkflowType,
};

use super::{CostBuilder, above, child_label};
use crate::models::{BillingMode, ServiceType};
use crate::table::PriceLookup;

/// Standard workflow state transitions included free each month
const STEP_FUNCTIONS_FREE_TRANSITIONS: f64 = 4_000.0;

pub(super) fn sqs<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &SqsConfig) {
    for (index, queue) in config.queues.iter().enumerate() {
        let key = match queue.queue_type {
            QueueType::Standard => "standard_requests_million",
            QueueType::Fifo => "fifo_requests_million",
        };
        costs.add_cost(
            ServiceType::Sqs,
            key,
            child_label(&queue.name, index, &format!("{} Requests", queue.queue_type)),
            queue.requests_millions,
            BillingMode::Usage,
            None,
        );
    }
}

pub(super) fn sns<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &SnsConfig) {
    for (index, topic) in config.topics.iter().enumerate() {
        costs.add_cost(
            ServiceType::Sns,
            "publishes_million",
            child_label(&topic.name, index, "Publishes"),
            topic.publishes_millions,
            BillingMode::Usage,
            None,
        );
        costs.add_cost(
            ServiceType::Sns,
            "http_deliveries_million",
            child_label(&topic.name, index, "HTTP Deliveries"),
            topic.http_deliveries_millions,
            BillingMode::Usage,
            None,
        );
        costs.add_cost(
            ServiceType::Sns,
            "email_deliveries_100k",
            child_label(&topic.name, index, "Email Deliveries"),
            topic.email_deliveries / 100_000.0,
            BillingMode::Usage,
            None,
        );
        costs.add_cost(
            ServiceType::Sns,
            "sms_message",
            child_label(&topic.name, index, "SMS Messages"),
            topic.sms_messages,
            BillingMode::Usage,
            None,
        );
    }
}

pub(super) fn msk<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &MskConfig) {
    for (index, cluster) in config.clusters.iter().enumerate() {
        let brokers = f64::from(cluster.broker_count);
        costs.add_cost(
            ServiceType::Msk,
            &cluster.broker_instance_type,
            child_label(&cluster.name, index, &format!("{} Brokers", cluster.broker_instance_type)),
            brokers,
            BillingMode::Hourly,
            None,
        );
        costs.add_cost(
            ServiceType::Msk,
            "storage_gb",
            child_label(&cluster.name, index, "Broker Storage"),
            brokers * cluster.storage_per_broker_gb,
            BillingMode::Usage,
            None,
        );
    }
}

pub(super) fn amazon_mq<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &AmazonMqConfig) {
    for (index, broker) in config.brokers.iter().enumerate() {
        costs.add_cost(
            ServiceType::AmazonMQ,
            &broker.instance_type,
            child_label(&broker.name, index, &format!("{} ({})", broker.instance_type, broker.deployment)),
            f64::from(broker.deployment.node_count()),
            BillingMode::Hourly,
            None,
        );
        costs.add_cost(
            ServiceType::AmazonMQ,
            "storage_gb",
            child_label(&broker.name, index, "Storage"),
            broker.storage_gb,
            BillingMode::Usage,
            None,
        );
    }
}

pub(super) fn kinesis<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &KinesisConfig) {
    let shards = f64::from(config.shard_count);
    costs.add_cost(
        ServiceType::Kinesis,
        "shard_hourly",
        "Shard Hours",
        shards,
        BillingMode::Hourly,
        config.hours_per_month,
    );
    costs.add_cost(
        ServiceType::Kinesis,
        "put_payload_units_million",
        "PUT Payload Units",
        config.put_payload_units_millions,
        BillingMode::Usage,
        None,
    );
    if config.extended_retention {
        costs.add_cost(
            ServiceType::Kinesis,
            "extended_retention_shard_hourly",
            "Extended Retention",
            shards,
            BillingMode::Hourly,
            config.hours_per_month,
        );
    }
}

pub(super) fn step_functions<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &StepFunctionsConfig) {
    match config.workflow_type {
        WorkflowType::Standard => costs.add_cost(
            ServiceType::StepFunctions,
            "state_transitions_1k",
            "State Transitions",
            above(config.state_transitions, STEP_FUNCTIONS_FREE_TRANSITIONS) / 1000.0,
            BillingMode::Usage,
            None,
        ),
        WorkflowType::Express => {
            let executions = config.express_requests_millions * 1_000_000.0;
            let gb_seconds =
                executions * (config.express_avg_duration_ms / 1000.0) * (config.express_memory_mb / 1024.0);
            costs.add_cost(
                ServiceType::StepFunctions,
                "express_requests_million",
                "Express Requests",
                config.express_requests_millions,
                BillingMode::Usage,
                None,
            );
            costs.add_cost(
                ServiceType::StepFunctions,
                "express_duration_gb_second",
                "Express Duration",
                gb_seconds,
                BillingMode::Usage,
                None,
            );
        }
    }
}

pub(super) fn eventbridge<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &EventBridgeConfig) {
    costs.add_cost(
        ServiceType::EventBridge,
        "custom_events_million",
        "Custom Events",
        config.custom_events_millions,
        BillingMode::Usage,
        None,
    );
    costs.add_cost(
        ServiceType::EventBridge,
        "archived_gb",
        "Event Archive",
        config.archived_gb,
        BillingMode::Usage,
        None,
    );
}

pub(super) fn ses<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &SesConfig) {
    costs.add_cost(
        ServiceType::Ses,
        "emails_1k",
        "Outbound Email",
        config.emails_sent / 1000.0,
        BillingMode::Usage,
        None,
    );
    costs.add_cost(
        ServiceType::Ses,
        "attachments_gb",
        "Attachments",
        config.attachments_gb,
        BillingMode::Usage,
        None,
    );
    costs.add_cost(
        ServiceType::Ses,
        "dedicated_ip",
        "Dedicated IPs",
        f64::from(config.dedicated_ips),
        BillingMode::Flat,
        None,
    );
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{REGION, assert_close, table};
    use super::*;
    use crate::models::CostEstimation;
    use crate::table::PricingTable;
    use domain_cloud_resources::attributes::{BrokerDeployment, KafkaCluster, MqBroker, Queue};

    fn rates() -> PricingTable {
        table(&[
            (ServiceType::Sqs, "standard_requests_million", 0.4),
            (ServiceType::Sqs, "fifo_requests_million", 0.5),
            (ServiceType::Msk, "kafka.m5.large", 0.21),
            (ServiceType::Msk, "storage_gb", 0.1),
            (ServiceType::AmazonMQ, "mq.m5.large", 0.288),
            (ServiceType::StepFunctions, "state_transitions_1k", 0.025),
            (ServiceType::StepFunctions, "express_requests_million", 1.0),
            (ServiceType::StepFunctions, "express_duration_gb_second", 0.00001667),
            (ServiceType::Ses, "emails_1k", 0.1),
        ])
    }

    fn run<F>(f: F) -> CostEstimation
    where
        F: FnOnce(&mut CostBuilder<'_, PricingTable>),
    {
        let table = rates();
        let mut costs = CostBuilder::new(&table, REGION);
        f(&mut costs);
        costs.finish()
    }

    #[test]
    fn test_sqs_queue_types() {
        let config = SqsConfig {
            queues: vec![
                Queue {
                    name: "jobs".to_string(),
                    queue_type: QueueType::Standard,
                    requests_millions: 10.0,
                },
                Queue {
                    name: "orders".to_string(),
                    queue_type: QueueType::Fifo,
                    requests_millions: 2.0,
                },
            ],
        };
        let estimate = run(|c| sqs(c, &config));
        assert_eq!(estimate.breakdown[0].label, "jobs: standard Requests");
        assert_eq!(estimate.breakdown[1].label, "orders: fifo Requests");
        assert_close(estimate.monthly_total, 4.0 + 1.0);
    }

    #[test]
    fn test_msk_brokers_and_storage() {
        let config = MskConfig {
            clusters: vec![KafkaCluster::default()],
        };
        let estimate = run(|c| msk(c, &config));
        assert_close(estimate.breakdown[0].total, 3.0 * 730.0 * 0.21);
        assert_close(estimate.breakdown[1].total, 300.0 * 0.1);
    }

    #[test]
    fn test_mq_deployment_node_count() {
        let config = AmazonMqConfig {
            brokers: vec![MqBroker {
                deployment: BrokerDeployment::ActiveStandby,
                storage_gb: 0.0,
                ..Default::default()
            }],
        };
        let estimate = run(|c| amazon_mq(c, &config));
        assert_eq!(estimate.breakdown.len(), 1);
        assert_close(estimate.breakdown[0].quantity, 2.0 * 730.0);
    }

    #[test]
    fn test_step_functions_free_transitions() {
        let within_free = StepFunctionsConfig {
            state_transitions: 4_000.0,
            ..Default::default()
        };
        assert!(run(|c| step_functions(c, &within_free)).is_empty());

        let standard = StepFunctionsConfig {
            state_transitions: 104_000.0,
            ..Default::default()
        };
        assert_close(run(|c| step_functions(c, &standard)).monthly_total, 100.0 * 0.025);
    }

    #[test]
    fn test_express_workflow_duration() {
        let config = StepFunctionsConfig {
            workflow_type: WorkflowType::Express,
            express_requests_millions: 2.0,
            express_avg_duration_ms: 500.0,
            express_memory_mb: 64.0,
            ..Default::default()
        };
        let estimate = run(|c| step_functions(c, &config));
        // 2M * 0.5s * 0.0625GB
        assert_close(estimate.breakdown[1].quantity, 62_500.0);
        assert_close(estimate.monthly_total, 2.0 + 62_500.0 * 0.00001667);
    }

    #[test]
    fn test_ses_per_thousand_emails() {
        let config = SesConfig {
            emails_sent: 250_000.0,
            ..Default::default()
        };
        let estimate = run(|c| ses(c, &config));
        assert_close(estimate.breakdown[0].quantity, 250.0);
        assert_close(estimate.monthly_total, 25.0);
    }
}
