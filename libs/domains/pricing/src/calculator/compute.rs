use domain_cloud_resources::attributes::{Architecture, EcsConfig, Ec2Config, EksConfig, LambdaConfig, LaunchType};

use super::{CostBuilder, above, child_label};
use crate::models::{BillingMode, CostBreakdownItem, HOURLY_DISPLAY_UNIT, HOURS_PER_MONTH, ServiceType};
use crate::table::PriceLookup;

/// Ephemeral storage included with every Lambda invocation
const LAMBDA_FREE_EPHEMERAL_MB: f64 = 512.0;

const SECONDS_PER_HOUR: f64 = 3600.0;

pub(super) fn ec2<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &Ec2Config) {
    let count = f64::from(config.instance_count);

    if config.spot_enabled {
        let rate = costs.rate(ServiceType::Ec2, &config.instance_type);
        let discount = config.spot_discount_pct.clamp(0.0, 100.0);
        let factor = (100.0 - discount) / 100.0;
        let hours = count * config.hours_per_month.unwrap_or(HOURS_PER_MONTH);
        let unit_cost = rate.price_per_unit * factor;
        costs.add_item(CostBreakdownItem {
            label: format!("{} Spot Instance ({discount}% off)", config.instance_type),
            unit_cost,
            quantity: hours,
            unit: HOURLY_DISPLAY_UNIT.to_string(),
            total: unit_cost * hours,
        });
    } else {
        costs.add_cost(
            ServiceType::Ec2,
            &config.instance_type,
            format!("{} Instance", config.instance_type),
            count,
            BillingMode::Hourly,
            config.hours_per_month,
        );
    }

    let volume = config.root_volume_type;
    costs.add_cost(
        ServiceType::Ebs,
        &format!("{volume}_storage_gb"),
        format!("Root Volume ({volume})"),
        config.root_volume_gb * count,
        BillingMode::Usage,
        None,
    );
    if volume.has_provisioned_iops() {
        costs.add_cost(
            ServiceType::Ebs,
            &format!("{volume}_iops"),
            "Root Volume IOPS",
            above(config.root_volume_iops, volume.free_iops()) * count,
            BillingMode::Usage,
            None,
        );
    }

    if config.detailed_monitoring {
        costs.add_cost(
            ServiceType::CloudWatch,
            "detailed_monitoring_instance",
            "Detailed Monitoring",
            count,
            BillingMode::Flat,
            None,
        );
    }

    costs.add_cost(
        ServiceType::Vpc,
        "public_ipv4_hourly",
        "Elastic IPs",
        f64::from(config.elastic_ips),
        BillingMode::Hourly,
        config.hours_per_month,
    );
    costs.add_cost(
        ServiceType::DataTransfer,
        "internet_out_gb",
        "Data Transfer Out",
        config.data_transfer_out_gb,
        BillingMode::Usage,
        None,
    );
}

pub(super) fn lambda<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &LambdaConfig) {
    for (index, function) in config.functions.iter().enumerate() {
        let invocations = function.requests_millions * 1_000_000.0;
        let seconds = invocations * (function.avg_duration_ms / 1000.0);
        let memory_gb = function.memory_mb / 1024.0;
        let duration_key = match function.architecture {
            Architecture::X86_64 => "duration_gb_second",
            Architecture::Arm64 => "duration_gb_second_arm",
        };

        costs.add_cost(
            ServiceType::Lambda,
            "requests_million",
            child_label(&function.name, index, "Requests"),
            function.requests_millions,
            BillingMode::Usage,
            None,
        );
        costs.add_cost(
            ServiceType::Lambda,
            duration_key,
            child_label(&function.name, index, "Duration"),
            seconds * memory_gb,
            BillingMode::Usage,
            None,
        );
        costs.add_cost(
            ServiceType::Lambda,
            "ephemeral_storage_gb_second",
            child_label(&function.name, index, "Ephemeral Storage"),
            seconds * above(function.ephemeral_storage_mb, LAMBDA_FREE_EPHEMERAL_MB) / 1024.0,
            BillingMode::Usage,
            None,
        );
        costs.add_cost(
            ServiceType::Lambda,
            "provisioned_concurrency_gb_second",
            child_label(&function.name, index, "Provisioned Concurrency"),
            f64::from(function.provisioned_concurrency) * memory_gb * HOURS_PER_MONTH * SECONDS_PER_HOUR,
            BillingMode::Usage,
            None,
        );
    }
}

pub(super) fn eks<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &EksConfig) {
    let clusters = f64::from(config.cluster_count);
    costs.add_cost(ServiceType::Eks, "cluster_hourly", "EKS Control Plane", clusters, BillingMode::Hourly, None);
    if config.extended_support {
        costs.add_cost(
            ServiceType::Eks,
            "extended_support_hourly",
            "Extended Support",
            clusters,
            BillingMode::Hourly,
            None,
        );
    }

    let nodes = f64::from(config.node_count);
    costs.add_cost(
        ServiceType::Ec2,
        &config.node_instance_type,
        format!("Worker Nodes ({})", config.node_instance_type),
        nodes,
        BillingMode::Hourly,
        None,
    );
    costs.add_cost(
        ServiceType::Ebs,
        "gp3_storage_gb",
        "Worker Node Storage",
        nodes * config.node_disk_gb,
        BillingMode::Usage,
        None,
    );

    let pods = f64::from(config.fargate_pods);
    costs.add_cost(
        ServiceType::Fargate,
        "vcpu_hourly",
        "Fargate vCPU",
        pods * config.fargate_vcpu_per_pod,
        BillingMode::Hourly,
        config.fargate_hours_per_month,
    );
    costs.add_cost(
        ServiceType::Fargate,
        "memory_gb_hourly",
        "Fargate Memory",
        pods * config.fargate_memory_gb_per_pod,
        BillingMode::Hourly,
        config.fargate_hours_per_month,
    );
}

pub(super) fn ecs<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &EcsConfig) {
    // EC2 launch type is billed through the instances themselves
    if config.launch_type == LaunchType::Ec2 {
        return;
    }

    let (vcpu_key, memory_key) = match config.architecture {
        Architecture::X86_64 => ("vcpu_hourly", "memory_gb_hourly"),
        Architecture::Arm64 => ("vcpu_hourly_arm", "memory_gb_hourly_arm"),
    };
    let tasks = f64::from(config.task_count);
    costs.add_cost(
        ServiceType::Fargate,
        vcpu_key,
        "Fargate vCPU",
        tasks * config.vcpu_per_task,
        BillingMode::Hourly,
        config.hours_per_month,
    );
    costs.add_cost(
        ServiceType::Fargate,
        memory_key,
        "Fargate Memory",
        tasks * config.memory_gb_per_task,
        BillingMode::Hourly,
        config.hours_per_month,
    );
}
