//! Cost Estimator
//!
//! Prices flat cloud resources and nested network/cluster schemas against a
//! region-partitioned pricing table, and reports constraint violations.
//! Reports go to stdout, logs to stderr.

use clap::{Parser, Subcommand, ValueEnum};
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv};
use domain_cloud_resources::{
    CloudResource, ClusterSchema, NetworkSchema, Validatable, ValidationContext, ValidationResult,
};
use domain_pricing::{NestedCostCalculator, PriceLookup, PricingTable, ServiceType, estimate_resources};
use eyre::{Result, WrapErr};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

mod config;
mod report;

use config::Config;
use report::{OutputFormat, RateReport, SchemaReport};

/// Exit code when a schema fails validation
const INVALID_EXIT_CODE: u8 = 2;

#[derive(Parser)]
#[command(name = "cost-estimator")]
#[command(about = "Estimate monthly cloud costs and validate network/cluster schemas")]
struct Cli {
    /// Pricing table overlaid on the bundled one (overrides PRICING_TABLE_PATH)
    #[arg(long, global = true)]
    pricing: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate a JSON array of flat resources
    Estimate {
        #[arg(short, long)]
        resources: PathBuf,
    },

    /// Validate and price a nested network schema
    Network {
        #[arg(short, long)]
        schema: PathBuf,
    },

    /// Validate and price a nested cluster schema
    Cluster {
        #[arg(short, long)]
        schema: PathBuf,
    },

    /// Validate a nested schema without pricing it; exits with 2 when invalid
    Validate {
        #[arg(short, long, value_enum)]
        kind: SchemaKind,

        #[arg(short, long)]
        schema: PathBuf,
    },

    /// Look up a single rate
    Price {
        /// Service key, e.g. VPC or DynamoDB
        #[arg(short, long)]
        service: ServiceType,

        /// Rate key, e.g. nat_gateway_hourly
        #[arg(short, long)]
        key: String,

        /// Defaults to DEFAULT_REGION
        #[arg(short, long)]
        region: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SchemaKind {
    Network,
    Cluster,
}

fn main() -> Result<ExitCode> {
    install_color_eyre();

    let environment = Environment::from_env();
    init_tracing(&environment);

    let config = Config::from_env()?;
    let cli = Cli::parse();
    let table = config.load_pricing(cli.pricing.as_deref())?;

    match cli.command {
        Commands::Estimate { resources } => {
            let json = read(&resources)?;
            let resources = CloudResource::list_from_json_in_region(&json, &config.default_region)
                .wrap_err_with(|| format!("Invalid resources in {}", resources.display()))?;
            info!(count = resources.len(), "Estimating resources");
            warn_unknown_regions(resources.iter().map(|r| r.region.as_str()), &table);

            let summary = estimate_resources(&resources, &table);
            info!(priced = summary.priced().count(), "Estimated resources");
            println!("{}", report::render_summary(&summary, cli.format)?);
        }

        Commands::Network { schema } => {
            let network = NetworkSchema::from_json_in_region(&read(&schema)?, &config.default_region)
                .wrap_err_with(|| format!("Invalid network schema in {}", schema.display()))?;
            let validation = network.validate(&ValidationContext::for_region(&network.region));
            warn_if_invalid(&network.name, &validation);

            warn_unknown_regions(std::iter::once(network.region.as_str()), &table);
            let cost = network.calculate_cost(&table);
            let report = SchemaReport {
                kind: "network",
                name: &network.name,
                validation: &validation,
                cost: &cost,
                annual: cost.annual(),
            };
            println!("{}", report::render_schema(report, cli.format)?);
        }

        Commands::Cluster { schema } => {
            let cluster = ClusterSchema::from_json_in_region(&read(&schema)?, &config.default_region)
                .wrap_err_with(|| format!("Invalid cluster schema in {}", schema.display()))?;
            let validation = cluster.validate(&ValidationContext::for_region(&cluster.region));
            warn_if_invalid(&cluster.name, &validation);

            warn_unknown_regions(std::iter::once(cluster.region.as_str()), &table);
            let cost = cluster.calculate_cost(&table);
            let report = SchemaReport {
                kind: "cluster",
                name: &cluster.name,
                validation: &validation,
                cost: &cost,
                annual: cost.annual(),
            };
            println!("{}", report::render_schema(report, cli.format)?);
        }

        Commands::Validate { kind, schema } => {
            let json = read(&schema)?;
            let validation = match kind {
                SchemaKind::Network => {
                    let network = NetworkSchema::from_json_in_region(&json, &config.default_region)
                        .wrap_err_with(|| format!("Invalid network schema in {}", schema.display()))?;
                    network.validate(&ValidationContext::for_region(&network.region))
                }
                SchemaKind::Cluster => {
                    let cluster = ClusterSchema::from_json_in_region(&json, &config.default_region)
                        .wrap_err_with(|| format!("Invalid cluster schema in {}", schema.display()))?;
                    cluster.validate(&ValidationContext::for_region(&cluster.region))
                }
            };

            println!("{}", report::render_validation(&validation, cli.format)?);
            if !validation.valid {
                return Ok(ExitCode::from(INVALID_EXIT_CODE));
            }
        }

        Commands::Price { service, key, region } => {
            let region = region.unwrap_or_else(|| config.default_region.clone());
            let rate = table.get_price(&region, service, &key);
            let report = RateReport {
                region: &region,
                service,
                key: &key,
                fallback: rate.is_fallback(),
                rate: &rate,
            };
            println!("{}", report::render_rate(report, cli.format)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))
}

fn warn_unknown_regions<'a>(regions: impl Iterator<Item = &'a str>, table: &PricingTable) {
    let known: BTreeSet<&str> = table.regions().collect();
    let unknown: BTreeSet<&str> = regions.filter(|r| !known.contains(*r)).collect();
    for region in unknown {
        warn!(region, "No rates for region; its resources are priced at zero");
    }
}

fn warn_if_invalid(name: &str, validation: &ValidationResult) {
    if !validation.valid {
        warn!(schema = name, errors = validation.errors.len(), "Schema failed validation");
    }
}
