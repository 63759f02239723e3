use domain_cloud_resources::attributes::{AcmConfig, CertificateType, CognitoConfig, KmsConfig, SecretsManagerConfig, WafConfig};

use super::{CostBuilder, above, child_label};
use crate::models::{BillingMode, ServiceType};
use crate::table::PriceLookup;

const KMS_FREE_REQUESTS: f64 = 20_000.0;
const COGNITO_FREE_MAU: f64 = 50_000.0;

pub(super) fn waf<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &WafConfig) {
    for (index, acl) in config.acls.iter().enumerate() {
        costs.add_cost(ServiceType::Waf, "web_acl", child_label(&acl.name, index, "Web ACL"), 1.0, BillingMode::Flat, None);
        costs.add_cost(
            ServiceType::Waf,
            "rule",
            child_label(&acl.name, index, "Rules"),
            f64::from(acl.rule_count),
            BillingMode::Flat,
            None,
        );
        costs.add_cost(
            ServiceType::Waf,
            "requests_million",
            child_label(&acl.name, index, "Requests"),
            acl.requests_millions,
            BillingMode::Usage,
            None,
        );
    }
}

pub(super) fn acm<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &AcmConfig) {
    // Public certificates are free
    for (index, certificate) in config
        .certificates
        .iter()
        .enumerate()
        .filter(|(_, c)| c.certificate_type == CertificateType::Private)
    {
        costs.add_cost(
            ServiceType::Acm,
            "private_certificate",
            child_label(&certificate.name, index, "Private Certificates"),
            f64::from(certificate.count),
            BillingMode::Flat,
            None,
        );
    }
}

pub(super) fn kms<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &KmsConfig) {
    costs.add_cost(
        ServiceType::Kms,
        "customer_managed_key",
        "Customer Managed Keys",
        f64::from(config.customer_managed_keys),
        BillingMode::Flat,
        None,
    );
    costs.add_cost(
        ServiceType::Kms,
        "requests_10k",
        "API Requests",
        above(config.requests, KMS_FREE_REQUESTS) / 10_000.0,
        BillingMode::Usage,
        None,
    );
}

pub(super) fn secrets_manager<L: PriceLookup + ?Sized>(
    costs: &mut CostBuilder<'_, L>,
    config: &SecretsManagerConfig,
) {
    costs.add_cost(
        ServiceType::SecretsManager,
        "secret",
        "Secrets",
        f64::from(config.secrets),
        BillingMode::Flat,
        None,
    );
    costs.add_cost(
        ServiceType::SecretsManager,
        "api_calls_10k",
        "API Calls",
        config.api_calls / 10_000.0,
        BillingMode::Usage,
        None,
    );
}

pub(super) fn cognito<L: PriceLookup + ?Sized>(costs: &mut CostBuilder<'_, L>, config: &CognitoConfig) {
    costs.add_cost(
        ServiceType::Cognito,
        "mau",
        "Monthly Active Users",
        above(config.monthly_active_users, COGNITO_FREE_MAU),
        BillingMode::Usage,
        None,
    );
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{REGION, assert_close, table};
    use super::*;
    use crate::models::CostEstimation;
    use crate::table::PricingTable;
    use domain_cloud_resources::attributes::{Certificate, WebAcl};

    fn rates() -> PricingTable {
        table(&[
            (ServiceType::Waf, "web_acl", 5.0),
            (ServiceType::Waf, "rule", 1.0),
            (ServiceType::Waf, "requests_million", 0.6),
            (ServiceType::Acm, "private_certificate", 0.75),
            (ServiceType::Kms, "customer_managed_key", 1.0),
            (ServiceType::Kms, "requests_10k", 0.03),
            (ServiceType::Cognito, "mau", 0.0055),
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
    fn test_waf_acl_items() {
        let config = WafConfig {
            acls: vec![WebAcl {
                name: "edge".to_string(),
                rule_count: 10,
                requests_millions: 100.0,
            }],
        };
        let estimate = run(|c| waf(c, &config));
        let labels: Vec<&str> = estimate.breakdown.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["edge: Web ACL", "edge: Rules", "edge: Requests"]);
        assert_close(estimate.monthly_total, 5.0 + 10.0 + 60.0);
    }

    #[test]
    fn test_only_private_certificates_cost() {
        let config = AcmConfig {
            certificates: vec![
                Certificate {
                    name: "www".to_string(),
                    count: 5,
                    ..Default::default()
                },
                Certificate {
                    name: "internal".to_string(),
                    certificate_type: CertificateType::Private,
                    count: 4,
                },
            ],
        };
        let estimate = run(|c| acm(c, &config));
        assert_eq!(estimate.breakdown.len(), 1);
        assert_close(estimate.monthly_total, 3.0);
    }

    #[test]
    fn test_unnamed_certificate_keeps_list_position() {
        let config = AcmConfig {
            certificates: vec![
                Certificate {
                    name: "www".to_string(),
                    count: 5,
                    ..Default::default()
                },
                Certificate {
                    certificate_type: CertificateType::Private,
                    count: 1,
                    ..Default::default()
                },
            ],
        };
        let estimate = run(|c| acm(c, &config));
        assert_eq!(estimate.breakdown[0].label, "#2: Private Certificates");
    }

    #[test]
    fn test_kms_free_requests() {
        let config = KmsConfig {
            customer_managed_keys: 2,
            requests: 1_020_000.0,
        };
        let estimate = run(|c| kms(c, &config));
        assert_close(estimate.breakdown[1].quantity, 100.0);
        assert_close(estimate.monthly_total, 2.0 + 3.0);
    }

    #[test]
    fn test_cognito_free_tier() {
        let small = CognitoConfig {
            monthly_active_users: 10_000.0,
        };
        assert!(run(|c| cognito(c, &small)).is_empty());

        let large = CognitoConfig {
            monthly_active_users: 150_000.0,
        };
        assert_close(run(|c| cognito(c, &large)).monthly_total, 100_000.0 * 0.0055);
    }
}
