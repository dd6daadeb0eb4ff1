use super::ids::{FactoryId, PipelineId};
use super::models::{CreateRunResponse, PipelineResource};
use super::API_VERSION;
use azrm_base::config::ArmClientConfig;
use azrm_base::error::{ArmError, Result};
use azrm_sdk::client::{OperationResponse, Options, RequestOptions, ResourceManagerClient};
use azrm_sdk::credential::TokenCredential;
use azrm_sdk::pager::{CompleteResponse, Page, PageResponse};
use azrm_sdk::resourceids::ResourceId;
use futures::stream::BoxStream;
use reqwest::Method;
use serde_json::{Map, Value};
use std::sync::Arc;

pub type CreateRunOperationResponse = OperationResponse<CreateRunResponse>;
pub type GetOperationResponse = OperationResponse<PipelineResource>;
pub type CreateOrUpdateOperationResponse = OperationResponse<PipelineResource>;
pub type DeleteOperationResponse = OperationResponse<()>;
pub type ListByFactoryOperationResponse = PageResponse<PipelineResource>;
pub type ListByFactoryCompleteResult = CompleteResponse<PipelineResource>;

/// Query parameters of `createRun`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateRunOperationOptions {
    pub is_recovery: Option<bool>,
    pub reference_pipeline_run_id: Option<String>,
    pub start_activity_name: Option<String>,
    pub start_from_failure: Option<bool>,
}

impl Options for CreateRunOperationOptions {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(v) = self.is_recovery {
            query.push(("isRecovery".to_string(), v.to_string()));
        }
        if let Some(v) = &self.reference_pipeline_run_id {
            query.push(("referencePipelineRunId".to_string(), v.clone()));
        }
        if let Some(v) = &self.start_activity_name {
            query.push(("startActivityName".to_string(), v.clone()));
        }
        if let Some(v) = self.start_from_failure {
            query.push(("startFromFailure".to_string(), v.to_string()));
        }
        query
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetOperationOptions {
    pub if_none_match: Option<String>,
}

impl Options for GetOperationOptions {
    fn to_headers(&self) -> Vec<(String, String)> {
        self.if_none_match
            .iter()
            .map(|v| ("If-None-Match".to_string(), v.clone()))
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateOrUpdateOperationOptions {
    /// etag the update is conditional on, `*` for any
    pub if_match: Option<String>,
}

impl Options for CreateOrUpdateOperationOptions {
    fn to_headers(&self) -> Vec<(String, String)> {
        self.if_match
            .iter()
            .map(|v| ("If-Match".to_string(), v.clone()))
            .collect()
    }
}

/// Operations on Data Factory pipelines.
#[derive(Clone, Debug)]
pub struct PipelinesClient {
    client: ResourceManagerClient,
}

impl PipelinesClient {
    pub fn new(config: &ArmClientConfig, credential: Arc<dyn TokenCredential>) -> Result<Self> {
        Ok(Self {
            client: ResourceManagerClient::new(config, API_VERSION, credential)?,
        })
    }

    pub fn from_config(config: &ArmClientConfig) -> Result<Self> {
        Ok(Self {
            client: ResourceManagerClient::from_config(config, API_VERSION)?,
        })
    }

    pub fn with_client(client: ResourceManagerClient) -> Self {
        Self { client }
    }

    pub fn inner(&self) -> &ResourceManagerClient {
        &self.client
    }

    /// Start a run of the pipeline. `parameters` become the run's pipeline parameters.
    pub async fn create_run(
        &self,
        id: &PipelineId,
        options: CreateRunOperationOptions,
        parameters: Option<Map<String, Value>>,
    ) -> Result<CreateRunOperationResponse> {
        let opts = create_run_request(id, &options);
        let body = parameters
            .map(|p| {
                serde_json::to_vec(&p).map_err(|e| ArmError::encode("pipeline run parameters", e))
            })
            .transpose()?;
        let raw = self.client.execute(&opts, body).await?;
        let res: CreateRunOperationResponse = OperationResponse::from_raw(raw)?;
        tracing::info!(
            "created run of {}: {:?}",
            id.pipeline_name,
            res.model.as_ref().map(|m| m.run_id.as_str())
        );
        Ok(res)
    }

    pub async fn get(&self, id: &PipelineId) -> Result<GetOperationResponse> {
        self.get_with_options(id, GetOperationOptions::default())
            .await
    }

    /// A `304 Not Modified` answer (matching `If-None-Match`) yields no model.
    pub async fn get_with_options(
        &self,
        id: &PipelineId,
        options: GetOperationOptions,
    ) -> Result<GetOperationResponse> {
        let opts = get_request(id, &options);
        let raw = self.client.execute(&opts, None).await?;
        if raw.status == 304 {
            return Ok(OperationResponse {
                status: raw.status,
                headers: raw.headers,
                model: None,
            });
        }
        OperationResponse::from_raw(raw)
    }

    pub async fn create_or_update(
        &self,
        id: &PipelineId,
        input: &PipelineResource,
        options: CreateOrUpdateOperationOptions,
    ) -> Result<CreateOrUpdateOperationResponse> {
        let opts = create_or_update_request(id, &options);
        let body = serde_json::to_vec(input).map_err(|e| ArmError::encode("PipelineResource", e))?;
        let raw = self.client.execute(&opts, Some(body)).await?;
        OperationResponse::from_raw(raw)
    }

    pub async fn delete(&self, id: &PipelineId) -> Result<DeleteOperationResponse> {
        let raw = self.client.execute(&delete_request(id), None).await?;
        Ok(OperationResponse::without_model(raw))
    }

    /// First page of the factory's pipelines.
    pub async fn list_by_factory(&self, id: &FactoryId) -> Result<ListByFactoryOperationResponse> {
        self.client.execute_page(&list_by_factory_request(id)).await
    }

    /// Every pipeline of the factory, following `nextLink`.
    pub async fn list_by_factory_complete(
        &self,
        id: &FactoryId,
    ) -> Result<ListByFactoryCompleteResult> {
        self.client
            .execute_paged(list_by_factory_request(id))
            .await
    }

    pub fn list_by_factory_pages(
        &self,
        id: &FactoryId,
    ) -> BoxStream<'_, Result<Page<PipelineResource>>> {
        self.client.list_pages(list_by_factory_request(id))
    }
}

pub fn create_run_request(id: &PipelineId, options: &CreateRunOperationOptions) -> RequestOptions {
    RequestOptions::new(Method::POST, format!("{}/createRun", id.id()), &[200])
        .with_options(options)
}

pub fn get_request(id: &PipelineId, options: &GetOperationOptions) -> RequestOptions {
    RequestOptions::new(Method::GET, id.id(), &[200, 304]).with_options(options)
}

pub fn create_or_update_request(
    id: &PipelineId,
    options: &CreateOrUpdateOperationOptions,
) -> RequestOptions {
    RequestOptions::new(Method::PUT, id.id(), &[200]).with_options(options)
}

pub fn delete_request(id: &PipelineId) -> RequestOptions {
    RequestOptions::new(Method::DELETE, id.id(), &[200, 204])
}

pub fn list_by_factory_request(id: &FactoryId) -> RequestOptions {
    RequestOptions::new(Method::GET, format!("{}/pipelines", id.id()), &[200])
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Url;

    fn pipeline() -> PipelineId {
        PipelineId::new("sub", "rg", "factory", "ingest")
    }

    #[test]
    fn test_create_run_request() {
        let opts = create_run_request(
            &pipeline(),
            &CreateRunOperationOptions {
                is_recovery: Some(true),
                start_activity_name: Some("Copy data".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(opts.http_method, Method::POST);
        assert_eq!(opts.expected_status_codes, vec![200]);
        let endpoint = Url::parse("https://management.azure.com").unwrap();
        let url = opts.url(&endpoint, API_VERSION).unwrap();
        assert_eq!(
            url.as_str(),
            "https://management.azure.com/subscriptions/sub/resourceGroups/rg/providers/Microsoft.DataFactory/factories/factory/pipelines/ingest/createRun?api-version=2018-06-01&isRecovery=true&startActivityName=Copy+data"
        );
    }

    #[test]
    fn test_conditional_headers() {
        let opts = create_or_update_request(
            &pipeline(),
            &CreateOrUpdateOperationOptions {
                if_match: Some("*".to_string()),
            },
        );
        assert_eq!(opts.http_method, Method::PUT);
        assert_eq!(opts.option_headers, vec![("If-Match".to_string(), "*".to_string())]);

        let opts = get_request(&pipeline(), &GetOperationOptions::default());
        assert!(opts.option_headers.is_empty());
        assert_eq!(opts.expected_status_codes, vec![200, 304]);
    }

    #[test]
    fn test_delete_and_list_requests() {
        let opts = delete_request(&pipeline());
        assert_eq!(opts.http_method, Method::DELETE);
        assert_eq!(opts.expected_status_codes, vec![200, 204]);

        let opts = list_by_factory_request(&pipeline().factory());
        assert_eq!(
            opts.path,
            "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.DataFactory/factories/factory/pipelines"
        );
    }

    #[test]
    fn test_from_config() {
        let config = ArmClientConfig {
            token: Some("token".to_string()),
            ..Default::default()
        };
        let client = PipelinesClient::from_config(&config).unwrap();
        assert_eq!(client.inner().api_version(), API_VERSION);
    }
}
