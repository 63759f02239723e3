use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::attributes::*;
use crate::error::{CloudResourceError, CloudResourceResult};

/// Resource type tag
///
/// Every tag the estimator UI can produce. Tags with a matching
/// [`ResourceConfig`] variant are priced; the rest are free or not modelled
/// and estimate to zero.
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
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ResourceType {
    // Compute
    Ec2,
    Lambda,
    Eks,
    Ecs,
    // Storage
    S3,
    Ebs,
    Efs,
    Backup,
    Ecr,
    // Databases
    Rds,
    Aurora,
    #[serde(rename = "dynamodb")]
    #[strum(serialize = "dynamodb")]
    DynamoDb,
    #[serde(rename = "elasticache")]
    #[strum(serialize = "elasticache")]
    ElastiCache,
    #[serde(rename = "documentdb")]
    #[strum(serialize = "documentdb")]
    DocumentDb,
    Redshift,
    #[serde(rename = "opensearch")]
    #[strum(serialize = "opensearch")]
    OpenSearch,
    // Networking
    Vpc,
    LoadBalancer,
    #[serde(rename = "cloudfront")]
    #[strum(serialize = "cloudfront")]
    CloudFront,
    Route53,
    ApiGateway,
    TransitGateway,
    Vpn,
    ElasticIp,
    // Application integration
    Sqs,
    Sns,
    Msk,
    AmazonMq,
    Kinesis,
    StepFunctions,
    #[serde(rename = "eventbridge")]
    #[strum(serialize = "eventbridge")]
    EventBridge,
    Ses,
    // Security
    Waf,
    Acm,
    Kms,
    SecretsManager,
    Cognito,
    // Operations and analytics
    #[serde(rename = "cloudwatch")]
    #[strum(serialize = "cloudwatch")]
    CloudWatch,
    Glue,
    Athena,
    // Nested schemas, priced by their own calculators
    VpcNetwork,
    EksCluster,
    // Free or not modelled
    Subnet,
    SecurityGroup,
    InternetGateway,
    RouteTable,
    NetworkAcl,
    VpcPeering,
    IamRole,
    IamPolicy,
    IamUser,
    LaunchTemplate,
    AutoScalingGroup,
    ParameterStore,
    #[serde(rename = "cloudtrail")]
    #[strum(serialize = "cloudtrail")]
    CloudTrail,
    ConfigRecorder,
    #[serde(rename = "xray")]
    #[strum(serialize = "xray")]
    XRay,
    SystemsManager,
    Organizations,
    #[serde(rename = "cloudformation")]
    #[strum(serialize = "cloudformation")]
    CloudFormation,
}

impl ResourceType {
    /// Whether the flat cost calculator has a pricing branch for this tag
    pub fn is_priced(&self) -> bool {
        ResourceConfig::default_for(*self).is_some()
    }
}

macro_rules! resource_configs {
    ($($variant:ident($config:ty)),+ $(,)?) => {
        /// Type-specific attributes of a flat resource.
        ///
        /// Each priced variant carries only the attributes its pricing branch
        /// reads, so fields of one service can never leak onto another.
        #[derive(Debug, Clone, PartialEq)]
        pub enum ResourceConfig {
            $($variant($config),)+
            /// A recognised tag with no billable dimensions
            Unpriced(ResourceType),
            /// A tag this build does not recognise
            Unknown(String),
        }

        impl ResourceConfig {
            /// The recognised type tag, `None` for unknown tags
            pub fn resource_type(&self) -> Option<ResourceType> {
                match self {
                    $(Self::$variant(_) => Some(ResourceType::$variant),)+
                    Self::Unpriced(resource_type) => Some(*resource_type),
                    Self::Unknown(_) => None,
                }
            }

            /// Default attributes for a priced type, `None` otherwise
            pub fn default_for(resource_type: ResourceType) -> Option<Self> {
                match resource_type {
                    $(ResourceType::$variant => Some(Self::$variant(<$config>::default())),)+
                    _ => None,
                }
            }

            /// Build a configuration from a type tag and its attribute bag
            ///
            /// Unknown tags are kept as [`ResourceConfig::Unknown`] rather than
            /// rejected; only malformed attributes of a priced type fail.
            pub fn from_parts(tag: &str, attributes: Value) -> CloudResourceResult<Self> {
                let Ok(resource_type) = ResourceType::from_str(tag) else {
                    return Ok(Self::Unknown(tag.to_string()));
                };

                let attributes = match attributes {
                    Value::Null => Value::Object(Map::new()),
                    other => other,
                };

                let invalid = |e: serde_json::Error| CloudResourceError::InvalidAttributes {
                    resource_type: resource_type.to_string(),
                    details: e.to_string(),
                };

                match resource_type {
                    $(ResourceType::$variant => {
                        serde_json::from_value(attributes).map(Self::$variant).map_err(invalid)
                    })+
                    other => Ok(Self::Unpriced(other)),
                }
            }

            /// The attribute bag as JSON
            pub fn attributes(&self) -> Value {
                let value = match self {
                    $(Self::$variant(config) => serde_json::to_value(config).ok(),)+
                    Self::Unpriced(_) | Self::Unknown(_) => None,
                };
                value.unwrap_or_else(|| Value::Object(Map::new()))
            }
        }
    };
}

resource_configs! {
    Ec2(Ec2Config),
    Lambda(LambdaConfig),
    Eks(EksConfig),
    Ecs(EcsConfig),
    S3(S3Config),
    Ebs(EbsConfig),
    Efs(EfsConfig),
    Backup(BackupConfig),
    Ecr(EcrConfig),
    Rds(RdsConfig),
    Aurora(AuroraConfig),
    DynamoDb(DynamoDbConfig),
    ElastiCache(ElastiCacheConfig),
    DocumentDb(DocumentDbConfig),
    Redshift(RedshiftConfig),
    OpenSearch(OpenSearchConfig),
    Vpc(VpcConfig),
    LoadBalancer(LoadBalancerConfig),
    CloudFront(CloudFrontConfig),
    Route53(Route53Config),
    ApiGateway(ApiGatewayConfig),
    TransitGateway(TransitGatewayConfig),
    Vpn(VpnConfig),
    ElasticIp(ElasticIpConfig),
    Sqs(SqsConfig),
    Sns(SnsConfig),
    Msk(MskConfig),
    AmazonMq(AmazonMqConfig),
    Kinesis(KinesisConfig),
    StepFunctions(StepFunctionsConfig),
    EventBridge(EventBridgeConfig),
    Ses(SesConfig),
    Waf(WafConfig),
    Acm(AcmConfig),
    Kms(KmsConfig),
    SecretsManager(SecretsManagerConfig),
    Cognito(CognitoConfig),
    CloudWatch(CloudWatchConfig),
    Glue(GlueConfig),
    Athena(AthenaConfig),
}

impl ResourceConfig {
    /// The type tag as written in resource documents
    pub fn type_tag(&self) -> &str {
        match self {
            Self::Unknown(tag) => tag,
            other => other.resource_type().map(<&'static str>::from).unwrap_or_default(),
        }
    }
}

/// A flat resource being estimated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ResourceDocument", into = "ResourceDocument")]
pub struct CloudResource {
    pub id: String,
    pub name: String,
    /// Region code; free-form so new regions need no code change
    pub region: String,
    pub config: ResourceConfig,
}

impl CloudResource {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        region: impl Into<String>,
        config: ResourceConfig,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            region: region.into(),
            config,
        }
    }

    pub fn resource_type(&self) -> Option<ResourceType> {
        self.config.resource_type()
    }

    /// Return a copy with new attributes, leaving `self` untouched
    pub fn with_config(&self, config: ResourceConfig) -> Self {
        Self {
            config,
            ..self.clone()
        }
    }

    /// Parse a JSON array of resource documents
    pub fn list_from_json(json: &str) -> CloudResourceResult<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a JSON array of resource documents, placing those without a
    /// region in `default_region`
    pub fn list_from_json_in_region(json: &str, default_region: &str) -> CloudResourceResult<Vec<Self>> {
        let mut documents: Value = serde_json::from_str(json)?;
        if let Some(documents) = documents.as_array_mut() {
            for document in documents {
                fill_default_region(document, default_region);
            }
        }
        Ok(serde_json::from_value(documents)?)
    }
}

/// Set `region` on a JSON document that omits it or leaves it blank
pub(crate) fn fill_default_region(document: &mut Value, region: &str) {
    let Some(fields) = document.as_object_mut() else {
        return;
    };
    let blank = fields
        .get("region")
        .and_then(Value::as_str)
        .is_none_or(|r| r.trim().is_empty());
    if blank {
        fields.insert("region".to_string(), Value::from(region));
    }
}

/// Wire shape of a resource: `{id, type, name, region, attributes}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDocument {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub attributes: Value,
}

impl TryFrom<ResourceDocument> for CloudResource {
    type Error = CloudResourceError;

    fn try_from(doc: ResourceDocument) -> Result<Self, Self::Error> {
        let config = ResourceConfig::from_parts(&doc.resource_type, doc.attributes)?;
        Ok(Self {
            id: doc.id,
            name: doc.name,
            region: doc.region,
            config,
        })
    }
}

impl From<CloudResource> for ResourceDocument {
    fn from(resource: CloudResource) -> Self {
        Self {
            resource_type: resource.config.type_tag().to_string(),
            attributes: resource.config.attributes(),
            id: resource.id,
            name: resource.name,
            region: resource.region,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn test_resource_type_catalogue() {
        let all: Vec<ResourceType> = ResourceType::iter().collect();
        assert_eq!(all.len(), 60);
        assert_eq!(all.iter().filter(|t| t.is_priced()).count(), 40);
        assert!(!ResourceType::Subnet.is_priced());
        assert!(!ResourceType::VpcNetwork.is_priced());
    }

    #[test]
    fn test_resource_type_tags_round_trip_through_strum_and_serde() {
        for resource_type in ResourceType::iter() {
            let tag = resource_type.to_string();
            assert_eq!(ResourceType::from_str(&tag).unwrap(), resource_type);
            assert_eq!(serde_json::to_value(resource_type).unwrap(), json!(tag));
        }
        assert_eq!(ResourceType::from_str("EC2").unwrap(), ResourceType::Ec2);
        assert_eq!(ResourceType::DynamoDb.as_ref(), "dynamodb");
    }

    #[test]
    fn test_parse_priced_resource_with_partial_attributes() {
        let resource: CloudResource = serde_json::from_value(json!({
            "id": "r-1",
            "type": "ec2",
            "name": "web",
            "region": "us-east-1",
            "attributes": { "instance_type": "m5.large", "instance_count": 3 }
        }))
        .unwrap();

        let ResourceConfig::Ec2(ec2) = &resource.config else {
            panic!("expected ec2 config, got {:?}", resource.config);
        };
        assert_eq!(ec2.instance_type, "m5.large");
        assert_eq!(ec2.instance_count, 3);
        assert_eq!(ec2.root_volume_gb, 8.0);
        assert_eq!(resource.resource_type(), Some(ResourceType::Ec2));
    }

    #[test]
    fn test_parse_unknown_and_unpriced_types() {
        let resources = CloudResource::list_from_json(
            r#"[
                {"id": "a", "type": "quantum_annealer", "attributes": {"qubits": 5000}},
                {"id": "b", "type": "security_group", "attributes": {}},
                {"id": "c", "type": "iam_role"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            resources[0].config,
            ResourceConfig::Unknown("quantum_annealer".to_string())
        );
        assert_eq!(resources[0].config.type_tag(), "quantum_annealer");
        assert_eq!(
            resources[1].config,
            ResourceConfig::Unpriced(ResourceType::SecurityGroup)
        );
        assert_eq!(resources[2].resource_type(), Some(ResourceType::IamRole));
    }

    #[test]
    fn test_resources_without_region_take_default() {
        let resources = CloudResource::list_from_json_in_region(
            r#"[
                {"id": "a", "type": "vpc", "attributes": {"nat_gateways": 1}},
                {"id": "b", "type": "vpc", "region": " "},
                {"id": "c", "type": "vpc", "region": "eu-west-1"}
            ]"#,
            "ap-south-1",
        )
        .unwrap();

        let regions: Vec<&str> = resources.iter().map(|r| r.region.as_str()).collect();
        assert_eq!(regions, vec!["ap-south-1", "ap-south-1", "eu-west-1"]);
    }

    #[test]
    fn test_malformed_attributes_are_rejected() {
        let err = ResourceConfig::from_parts("rds", json!({ "instance_count": "two" })).unwrap_err();
        assert!(matches!(
            err,
            CloudResourceError::InvalidAttributes { ref resource_type, .. } if resource_type == "rds"
        ));
    }

    #[test]
    fn test_serialize_uses_document_shape() {
        let resource = CloudResource::new(
            "db-1",
            "orders",
            "eu-west-1",
            ResourceConfig::Rds(RdsConfig {
                deployment: Deployment::MultiAz,
                ..Default::default()
            }),
        );

        let value = serde_json::to_value(&resource).unwrap();
        assert_eq!(value["type"], "rds");
        assert_eq!(value["attributes"]["deployment"], "multi_az");

        let back: CloudResource = serde_json::from_value(value).unwrap();
        assert_eq!(back, resource);
    }

    #[test]
    fn test_with_config_leaves_original_untouched() {
        let original = CloudResource::new("q", "jobs", "us-east-1", ResourceConfig::Sqs(SqsConfig::default()));
        let updated = original.with_config(ResourceConfig::Sns(SnsConfig::default()));

        assert_eq!(original.resource_type(), Some(ResourceType::Sqs));
        assert_eq!(updated.resource_type(), Some(ResourceType::Sns));
        assert_eq!(updated.id, original.id);
    }
}
