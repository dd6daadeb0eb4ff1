use super::ids::DscpConfigurationId;
use super::models::DscpConfiguration;
use super::API_VERSION;
use azrm_base::config::ArmClientConfig;
use azrm_base::error::{ArmError, Result};
use azrm_sdk::client::{OperationResponse, RequestOptions, ResourceManagerClient};
use azrm_sdk::commonids::{ResourceGroupId, SubscriptionId};
use azrm_sdk::credential::TokenCredential;
use azrm_sdk::pager::{CompleteResponse, Page, PageResponse};
use azrm_sdk::resourceids::ResourceId;
use futures::stream::BoxStream;
use reqwest::Method;
use std::sync::Arc;

pub type DscpConfigurationGetOperationResponse = OperationResponse<DscpConfiguration>;
pub type DscpConfigurationCreateOrUpdateOperationResponse = OperationResponse<DscpConfiguration>;
pub type DscpConfigurationDeleteOperationResponse = OperationResponse<()>;
pub type DscpConfigurationListOperationResponse = PageResponse<DscpConfiguration>;
pub type DscpConfigurationListCompleteResult = CompleteResponse<DscpConfiguration>;

/// Operations on DSCP configurations.
#[derive(Clone, Debug)]
pub struct DscpConfigurationClient {
    client: ResourceManagerClient,
}

impl DscpConfigurationClient {
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

    pub async fn dscp_configuration_get(
        &self,
        id: &DscpConfigurationId,
    ) -> Result<DscpConfigurationGetOperationResponse> {
        let raw = self.client.execute(&get_request(id), None).await?;
        OperationResponse::from_raw(raw)
    }

    /// Create or replace the configuration. Read-only fields of `input` are not sent.
    pub async fn dscp_configuration_create_or_update(
        &self,
        id: &DscpConfigurationId,
        input: &DscpConfiguration,
    ) -> Result<DscpConfigurationCreateOrUpdateOperationResponse> {
        let body = serde_json::to_vec(&input.without_read_only())
            .map_err(|e| ArmError::encode("DscpConfiguration", e))?;
        let raw = self
            .client
            .execute(&create_or_update_request(id), Some(body))
            .await?;
        OperationResponse::from_raw(raw)
    }

    pub async fn dscp_configuration_delete(
        &self,
        id: &DscpConfigurationId,
    ) -> Result<DscpConfigurationDeleteOperationResponse> {
        let raw = self.client.execute(&delete_request(id), None).await?;
        if raw.status == 202 {
            tracing::debug!("delete of {} accepted, completing asynchronously", id);
        }
        Ok(OperationResponse::without_model(raw))
    }

    /// First page of the configurations in a resource group.
    pub async fn dscp_configuration_list(
        &self,
        id: &ResourceGroupId,
    ) -> Result<DscpConfigurationListOperationResponse> {
        self.client.execute_page(&list_request(id)).await
    }

    pub async fn dscp_configuration_list_complete(
        &self,
        id: &ResourceGroupId,
    ) -> Result<DscpConfigurationListCompleteResult> {
        self.client.execute_paged(list_request(id)).await
    }

    pub fn dscp_configuration_list_pages(
        &self,
        id: &ResourceGroupId,
    ) -> BoxStream<'_, Result<Page<DscpConfiguration>>> {
        self.client.list_pages(list_request(id))
    }

    /// First page of the configurations in a subscription.
    pub async fn dscp_configuration_list_all(
        &self,
        id: &SubscriptionId,
    ) -> Result<DscpConfigurationListOperationResponse> {
        self.client.execute_page(&list_all_request(id)).await
    }

    pub async fn dscp_configuration_list_all_complete(
        &self,
        id: &SubscriptionId,
    ) -> Result<DscpConfigurationListCompleteResult> {
        self.client.execute_paged(list_all_request(id)).await
    }
}

pub fn get_request(id: &DscpConfigurationId) -> RequestOptions {
    RequestOptions::new(Method::GET, id.id(), &[200])
}

pub fn create_or_update_request(id: &DscpConfigurationId) -> RequestOptions {
    RequestOptions::new(Method::PUT, id.id(), &[200, 201])
}

pub fn delete_request(id: &DscpConfigurationId) -> RequestOptions {
    RequestOptions::new(Method::DELETE, id.id(), &[200, 202, 204])
}

pub fn list_request(id: &ResourceGroupId) -> RequestOptions {
    RequestOptions::new(
        Method::GET,
        format!("{}/providers/Microsoft.Network/dscpConfigurations", id.id()),
        &[200],
    )
}

pub fn list_all_request(id: &SubscriptionId) -> RequestOptions {
    RequestOptions::new(
        Method::GET,
        format!("{}/providers/Microsoft.Network/dscpConfigurations", id.id()),
        &[200],
    )
}
