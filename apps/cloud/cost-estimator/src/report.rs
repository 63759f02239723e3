//! Rendering of estimates and validation results

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use domain_cloud_resources::ValidationResult;
use domain_pricing::{Cost, EstimateSummary, PricingRate, ServiceType};
use eyre::Result;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

/// Report body stamped with its generation time
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<T: Serialize> {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Report<T> {
    pub fn new(body: T) -> Self {
        Self {
            generated_at: Utc::now(),
            body,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaReport<'a> {
    pub kind: &'a str,
    pub name: &'a str,
    pub validation: &'a ValidationResult,
    pub cost: &'a Cost,
    pub annual: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateReport<'a> {
    pub region: &'a str,
    pub service: ServiceType,
    pub key: &'a str,
    pub rate: &'a PricingRate,
    pub fallback: bool,
}

fn to_json<T: Serialize>(body: T) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Report::new(body))?)
}

pub fn render_summary(summary: &EstimateSummary, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(summary);
    }

    let mut out = String::new();
    for resource in &summary.resources {
        writeln!(
            out,
            "{} ({}, {}) {:>12}",
            resource.name,
            resource.resource_type,
            resource.region,
            money(resource.estimation.monthly_total)
        )?;
        for item in &resource.estimation.breakdown {
            writeln!(
                out,
                "    {:<48} {:>14.2} {:<12} x {:>10.6} = {:>12}",
                item.label,
                item.quantity,
                item.unit,
                item.unit_cost,
                money(item.total)
            )?;
        }
    }
    writeln!(out, "Monthly total: {}", money(summary.monthly_total))?;
    writeln!(out, "Annual total:  {}", money(summary.annual_total))?;
    Ok(out)
}

pub fn render_schema(report: SchemaReport<'_>, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(report);
    }

    let mut out = String::new();
    writeln!(out, "{} {}", report.kind, report.name)?;
    write_validation(&mut out, report.validation)?;
    for component in &report.cost.breakdown {
        writeln!(
            out,
            "  {:<32} {:<14} {:>12}",
            component.name,
            component.category.to_string(),
            money(component.monthly)
        )?;
        for detail in &component.details {
            writeln!(out, "      {:<42} {:>12}", detail.name, money(detail.monthly))?;
        }
    }
    writeln!(out, "Hourly:  {}", money(report.cost.hourly))?;
    writeln!(out, "Monthly: {}", money(report.cost.monthly))?;
    writeln!(out, "Annual:  {}", money(report.annual))?;
    Ok(out)
}

pub fn render_validation(result: &ValidationResult, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(result);
    }

    let mut out = String::new();
    write_validation(&mut out, result)?;
    Ok(out)
}

pub fn render_rate(report: RateReport<'_>, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(report);
    }

    let mut out = String::new();
    writeln!(
        out,
        "{}/{}/{}: {} {} per {}{}",
        report.region,
        report.service,
        report.key,
        report.rate.price_per_unit,
        report.rate.currency,
        report.rate.unit,
        if report.fallback { " (no rate, priced at zero)" } else { "" }
    )?;
    Ok(out)
}

fn write_validation(out: &mut String, result: &ValidationResult) -> std::fmt::Result {
    writeln!(out, "Valid: {}", if result.valid { "yes" } else { "no" })?;
    for error in &result.errors {
        writeln!(out, "  error:   {error}")?;
    }
    for warning in &result.warnings {
        writeln!(out, "  warning: {warning}")?;
    }
    Ok(())
}

fn money(amount: f64) -> String {
    format!("${amount:.2}")
}
