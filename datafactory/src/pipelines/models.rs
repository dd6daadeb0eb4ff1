//! Pipeline resource and the reference types shared by activities, sources and sinks.
//!
//! Fields typed `object` by the service (usually an expression or a literal) are kept as
//! [`serde_json::Value`].

use super::activities::Activity;
use super::constants::{
    DatasetReferenceType, DependencyCondition, ExpressionType, IntegrationRuntimeReferenceType,
    ParameterType, PipelineReferenceType, VariableType,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PipelineResource {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub etag: Option<String>,
    #[serde(default)]
    pub properties: Pipeline,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Pipeline {
    pub description: Option<String>,
    pub activities: Option<Vec<Activity>>,
    pub parameters: Option<BTreeMap<String, ParameterSpecification>>,
    pub variables: Option<BTreeMap<String, VariableSpecification>>,
    pub concurrency: Option<i64>,
    pub annotations: Option<Vec<Value>>,
    pub run_dimensions: Option<BTreeMap<String, Value>>,
    pub folder: Option<PipelineFolder>,
    pub policy: Option<PipelinePolicy>,
}

impl Pipeline {
    /// Activities in declaration order (empty when none are declared).
    pub fn activities(&self) -> &[Activity] {
        self.activities.as_deref().unwrap_or_default()
    }
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct PipelineFolder {
    pub name: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PipelinePolicy {
    pub elapsed_time_metric: Option<PipelineElapsedTimeMetricPolicy>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct PipelineElapsedTimeMetricPolicy {
    pub duration: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSpecification {
    #[serde(rename = "type")]
    pub type_: ParameterType,
    pub default_value: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VariableSpecification {
    #[serde(rename = "type")]
    pub type_: VariableType,
    pub default_value: Option<Value>,
}

/// Body of a successful `createRun` call.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateRunResponse {
    pub run_id: String,
}

/// `{"type": "Expression", "value": "@..."}`
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Expression {
    #[serde(rename = "type")]
    pub type_: ExpressionType,
    pub value: String,
}

impl Expression {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            type_: ExpressionType::Expression,
            value: value.into(),
        }
    }
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DatasetReference {
    #[serde(rename = "type")]
    pub type_: DatasetReferenceType,
    pub reference_name: String,
    pub parameters: Option<BTreeMap<String, Value>>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkedServiceReference {
    /// always `LinkedServiceReference`
    #[serde(rename = "type")]
    pub type_: String,
    pub reference_name: String,
    pub parameters: Option<BTreeMap<String, Value>>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PipelineReference {
    #[serde(rename = "type")]
    pub type_: PipelineReferenceType,
    pub reference_name: String,
    pub name: Option<String>,
}

impl PipelineReference {
    pub fn new(reference_name: impl Into<String>) -> Self {
        Self {
            type_: PipelineReferenceType::PipelineReference,
            reference_name: reference_name.into(),
            name: None,
        }
    }
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationRuntimeReference {
    #[serde(rename = "type")]
    pub type_: IntegrationRuntimeReferenceType,
    pub reference_name: String,
    pub parameters: Option<BTreeMap<String, Value>>,
}

/// Execution policy of an activity.
#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPolicy {
    pub timeout: Option<Value>,
    pub retry: Option<Value>,
    pub retry_interval_in_seconds: Option<i64>,
    pub secure_input: Option<bool>,
    pub secure_output: Option<bool>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SecureInputOutputPolicy {
    pub secure_input: Option<bool>,
    pub secure_output: Option<bool>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExecutePipelineActivityPolicy {
    pub secure_input: Option<bool>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDependency {
    pub activity: String,
    pub dependency_conditions: Vec<DependencyCondition>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct UserProperty {
    pub name: String,
    pub value: Value,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct MetadataItem {
    pub name: Option<Value>,
    pub value: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct StoredProcedureParameter {
    /// `String`, `Int`, `Int64`, `Decimal`, `Guid`, `Boolean` or `Date`
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub value: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SqlUpsertSettings {
    pub interim_schema_name: Option<Value>,
    pub keys: Option<Value>,
    #[serde(rename = "useTempDB")]
    pub use_temp_db: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SqlPartitionSettings {
    pub partition_column_name: Option<Value>,
    pub partition_lower_bound: Option<Value>,
    pub partition_upper_bound: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StagingSettings {
    pub linked_service_name: LinkedServiceReference,
    pub enable_compression: Option<Value>,
    pub path: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct SwitchCase {
    pub value: Option<String>,
    pub activities: Option<Vec<Activity>>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebActivityAuthentication {
    /// `Basic`, `ClientCertificate`, `MSI` or `ServicePrincipal`
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub username: Option<Value>,
    pub password: Option<Value>,
    pub pfx: Option<Value>,
    pub resource: Option<Value>,
    pub user_tenant: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogStorageSettings {
    pub linked_service_name: LinkedServiceReference,
    pub path: Option<Value>,
    pub log_level: Option<Value>,
    pub enable_reliable_logging: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SkipErrorFile {
    pub file_missing: Option<Value>,
    pub data_inconsistency: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RedirectIncompatibleRowSettings {
    pub linked_service_name: Value,
    pub path: Option<Value>,
}
