use anyhow::Result;
use azrm_datafactory::pipelines::client::CreateRunOperationOptions;
use azrm_datafactory::pipelines::{decode_pipeline_resource, PipelineId, PipelinesClient};
use azrm_network::dscpconfigurations::DscpConfigurationClient;
use azrm_sdk::commonids::ResourceGroupId;
use clap::{Parser, Subcommand};
use output::OutputFormat;
use std::path::{Path, PathBuf};

mod output;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a pipeline document (json or yaml) without calling the service.
    DecodePipeline {
        file: PathBuf,
        #[arg(long, short, default_value_t = OutputFormat::Summary)]
        output: OutputFormat,
    },
    /// Start a run of a pipeline.
    CreateRun {
        #[arg(long)]
        pipeline_id: String,
        /// run parameters as a json object
        #[arg(long)]
        parameters: Option<String>,
        #[arg(long)]
        is_recovery: bool,
        #[arg(long)]
        reference_pipeline_run_id: Option<String>,
        #[arg(long)]
        start_activity_name: Option<String>,
        #[arg(long)]
        start_from_failure: bool,
    },
    /// List the DSCP configurations of a resource group.
    DscpList {
        #[arg(long)]
        resource_group_id: String,
        #[arg(long, short, default_value_t = OutputFormat::Summary)]
        output: OutputFormat,
    },
}

fn decode_pipeline(file: &Path, format: OutputFormat) -> Result<String> {
    let content = std::fs::read_to_string(file)?;
    let document = output::read_document(&content)?;
    let resource = decode_pipeline_resource(&serde_json::to_vec(&document)?)?
        .ok_or_else(|| anyhow::anyhow!("empty pipeline document: {}", file.display()))?;
    output::render_pipeline(&resource, format)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let conf = azrm_base::tracing::load_tracing_config_from_env().unwrap_or_default();
    azrm_base::tracing::tracing_init(conf)?;

    match args.command {
        Command::DecodePipeline { file, output } => {
            print!("{}", decode_pipeline(&file, output)?);
        }
        Command::CreateRun {
            pipeline_id,
            parameters,
            is_recovery,
            reference_pipeline_run_id,
            start_activity_name,
            start_from_failure,
        } => {
            let id = PipelineId::parse_insensitively(&pipeline_id)?;
            let parameters = parameters
                .as_deref()
                .map(output::parse_parameters)
                .transpose()?;
            let options = CreateRunOperationOptions {
                is_recovery: is_recovery.then_some(true),
                reference_pipeline_run_id,
                start_activity_name,
                start_from_failure: start_from_failure.then_some(true),
            };
            let client = PipelinesClient::from_config(&azrm_base::ARM_CLIENT_CONFIG)?;
            let res = client.create_run(&id, options, parameters).await?;
            match res.model {
                Some(run) => println!("{}", run.run_id),
                None => tracing::warn!("createRun returned no body (status {})", res.status),
            }
        }
        Command::DscpList {
            resource_group_id,
            output,
        } => {
            let id = ResourceGroupId::parse_insensitively(&resource_group_id)?;
            let client = DscpConfigurationClient::from_config(&azrm_base::ARM_CLIENT_CONFIG)?;
            let result = client.dscp_configuration_list_complete(&id).await?;
            tracing::debug!("fetched {} pages", result.pages);
            print!(
                "{}",
                output::render_dscp_configurations(&result.items, output)?
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_create_run_args() {
        let args = Args::try_parse_from([
            "azrm",
            "create-run",
            "--pipeline-id",
            "/subscriptions/s/resourceGroups/rg/providers/Microsoft.DataFactory/factories/f/pipelines/p",
            "--is-recovery",
            "--start-activity-name",
            "Copy data",
        ])
        .unwrap();
        let Command::CreateRun {
            is_recovery,
            start_from_failure,
            start_activity_name,
            ..
        } = args.command
        else {
            panic!("unexpected command");
        };
        assert!(is_recovery);
        assert!(!start_from_failure);
        assert_eq!(start_activity_name.as_deref(), Some("Copy data"));
    }

    #[test]
    fn test_decode_pipeline_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"name": "p", "properties": {{"activities": [{{"name": "w", "type": "wait", "typeProperties": {{"waitTimeInSeconds": 3}}}}]}}}}"#
        )
        .unwrap();
        let summary = decode_pipeline(file.path(), OutputFormat::Summary).unwrap();
        assert_eq!(summary, "p\n  - w [Wait]\n");

        let args =
            Args::try_parse_from(["azrm", "decode-pipeline", "x.yaml", "-o", "yaml"]).unwrap();
        assert!(matches!(
            args.command,
            Command::DecodePipeline {
                output: OutputFormat::Yaml,
                ..
            }
        ));
    }
}
