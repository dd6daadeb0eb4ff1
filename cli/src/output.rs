use anyhow::Result;
use azrm_datafactory::pipelines::{Activity, PipelineResource};
use azrm_network::dscpconfigurations::DscpConfiguration;
use serde_json::Value;
use std::fmt::Write;
use strum_macros::{Display, EnumString, VariantNames};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, Display, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Yaml,
    Summary,
}

/// Parse a pipeline document given as JSON or YAML.
pub fn read_document(content: &str) -> Result<Value> {
    match serde_json::from_str::<Value>(content) {
        Ok(v) => Ok(v),
        Err(json_err) => serde_yaml::from_str::<Value>(content).map_err(|yaml_err| {
            anyhow::anyhow!("document is neither json ({json_err}) nor yaml ({yaml_err})")
        }),
    }
}

pub fn parse_parameters(input: &str) -> Result<serde_json::Map<String, Value>> {
    match serde_json::from_str::<Value>(input)? {
        Value::Object(map) => Ok(map),
        other => Err(anyhow::anyhow!(
            "run parameters must be a json object, got: {other}"
        )),
    }
}

pub fn render_pipeline(resource: &PipelineResource, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(resource)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(resource)?),
        OutputFormat::Summary => {
            let mut out = String::new();
            writeln!(out, "{}", resource.name.as_deref().unwrap_or("(unnamed)"))?;
            for activity in resource.properties.activities() {
                write_activity(&mut out, activity, 1)?;
            }
            Ok(out)
        }
    }
}

fn write_activity(out: &mut String, activity: &Activity, depth: usize) -> std::fmt::Result {
    let marker = if activity.is_raw() { " (unknown type)" } else { "" };
    writeln!(
        out,
        "{}- {} [{}]{}",
        "  ".repeat(depth),
        activity.name(),
        activity.discriminator(),
        marker
    )?;
    for child in activity.child_activities() {
        write_activity(out, child, depth + 1)?;
    }
    Ok(())
}

pub fn render_dscp_configurations(
    configurations: &[DscpConfiguration],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(configurations)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(configurations)?),
        OutputFormat::Summary => {
            let mut out = String::new();
            for c in configurations {
                let properties = c.properties.as_ref();
                let markings = properties
                    .and_then(|p| p.markings.as_ref())
                    .map(|m| {
                        m.iter()
                            .map(|v| v.to_string())
                            .collect::<Vec<_>>()
                            .join(",")
                    })
                    .unwrap_or_default();
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}\t{}",
                    c.name.as_deref().unwrap_or("-"),
                    c.location.as_deref().unwrap_or("-"),
                    properties
                        .and_then(|p| p.protocol.as_ref())
                        .map_or("-", |p| p.as_str()),
                    markings,
                    properties
                        .and_then(|p| p.provisioning_state.as_ref())
                        .map_or("-", |s| s.as_str()),
                )?;
            }
            Ok(out)
        }
    }
}
