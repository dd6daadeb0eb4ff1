//! Pipeline activities.
//!
//! Every activity shares [`ActivityBase`]; the service-specific payload is nested under
//! `typeProperties` exactly as it appears on the wire.

use super::constants::{ActivityOnInactiveMarkAs, ActivityState, WebActivityMethod};
use super::models::{
    ActivityDependency, ActivityPolicy, DatasetReference, ExecutePipelineActivityPolicy,
    Expression, IntegrationRuntimeReference, LinkedServiceReference, LogStorageSettings,
    PipelineReference, RedirectIncompatibleRowSettings, SecureInputOutputPolicy, SkipErrorFile,
    StagingSettings, StoredProcedureParameter, SwitchCase, UserProperty,
    WebActivityAuthentication,
};
use super::settings::{FormatReadSettings, StoreReadSettings};
use super::sinks::CopySink;
use super::sources::CopySource;
use azrm_sdk::polymorphic_union;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivityBase {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_: String,
    pub description: Option<String>,
    pub state: Option<ActivityState>,
    pub on_inactive_mark_as: Option<ActivityOnInactiveMarkAs>,
    pub depends_on: Option<Vec<ActivityDependency>>,
    pub user_properties: Option<Vec<UserProperty>>,
}

impl ActivityBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Linked service and policy of activities that run against a data store or compute.
#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionOptions {
    pub linked_service_name: Option<LinkedServiceReference>,
    pub policy: Option<ActivityPolicy>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppendVariableActivityTypeProperties {
    pub variable_name: Option<String>,
    pub value: Option<Value>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppendVariableActivity {
    #[serde(flatten)]
    pub base: ActivityBase,
    pub type_properties: AppendVariableActivityTypeProperties,
}

/// Control activity without a payload of its own.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ContainerActivity {
    #[serde(flatten)]
    pub base: ActivityBase,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CopyActivityTypeProperties {
    pub source: CopySource,
    pub sink: CopySink,
    pub translator: Option<Value>,
    pub enable_staging: Option<Value>,
    pub staging_settings: Option<StagingSettings>,
    pub parallel_copies: Option<Value>,
    pub data_integration_units: Option<Value>,
    pub enable_skip_incompatible_row: Option<Value>,
    pub redirect_incompatible_row_settings: Option<RedirectIncompatibleRowSettings>,
    pub log_storage_settings: Option<LogStorageSettings>,
    pub preserve_rules: Option<Vec<Value>>,
    pub preserve: Option<Vec<Value>>,
    pub validate_data_consistency: Option<Value>,
    pub skip_error_file: Option<SkipErrorFile>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CopyActivity {
    #[serde(flatten)]
    pub base: ActivityBase,
    #[serde(flatten)]
    pub execution: ExecutionOptions,
    pub inputs: Option<Vec<DatasetReference>>,
    pub outputs: Option<Vec<DatasetReference>>,
    pub type_properties: CopyActivityTypeProperties,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteActivityTypeProperties {
    pub dataset: DatasetReference,
    pub recursive: Option<Value>,
    pub max_concurrent_connections: Option<i64>,
    pub enable_logging: Option<Value>,
    pub log_storage_settings: Option<LogStorageSettings>,
    pub store_settings: Option<StoreReadSettings>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteActivity {
    #[serde(flatten)]
    pub base: ActivityBase,
    #[serde(flatten)]
    pub execution: ExecutionOptions,
    pub type_properties: DeleteActivityTypeProperties,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExecutePipelineActivityTypeProperties {
    pub pipeline: PipelineReference,
    pub parameters: Option<BTreeMap<String, Value>>,
    pub wait_on_completion: Option<bool>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExecutePipelineActivity {
    #[serde(flatten)]
    pub base: ActivityBase,
    pub policy: Option<ExecutePipelineActivityPolicy>,
    pub type_properties: ExecutePipelineActivityTypeProperties,
}

/// Execution activity without a payload of its own.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ExecutionActivity {
    #[serde(flatten)]
    pub base: ActivityBase,
    #[serde(flatten)]
    pub execution: ExecutionOptions,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FailActivityTypeProperties {
    pub message: Value,
    pub error_code: Value,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FailActivity {
    #[serde(flatten)]
    pub base: ActivityBase,
    pub type_properties: FailActivityTypeProperties,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct FilterActivityTypeProperties {
    pub items: Expression,
    pub condition: Expression,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterActivity {
    #[serde(flatten)]
    pub base: ActivityBase,
    pub type_properties: FilterActivityTypeProperties,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForEachActivityTypeProperties {
    pub is_sequential: Option<bool>,
    pub batch_count: Option<i64>,
    pub items: Expression,
    pub activities: Vec<Activity>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForEachActivity {
    #[serde(flatten)]
    pub base: ActivityBase,
    pub type_properties: ForEachActivityTypeProperties,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetMetadataActivityTypeProperties {
    pub dataset: DatasetReference,
    pub field_list: Option<Vec<Value>>,
    pub store_settings: Option<StoreReadSettings>,
    pub format_settings: Option<FormatReadSettings>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetMetadataActivity {
    #[serde(flatten)]
    pub base: ActivityBase,
    #[serde(flatten)]
    pub execution: ExecutionOptions,
    pub type_properties: GetMetadataActivityTypeProperties,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IfConditionActivityTypeProperties {
    pub expression: Expression,
    pub if_true_activities: Option<Vec<Activity>>,
    pub if_false_activities: Option<Vec<Activity>>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IfConditionActivity {
    #[serde(flatten)]
    pub base: ActivityBase,
    pub type_properties: IfConditionActivityTypeProperties,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LookupActivityTypeProperties {
    pub source: CopySource,
    pub dataset: DatasetReference,
    pub first_row_only: Option<Value>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LookupActivity {
    #[serde(flatten)]
    pub base: ActivityBase,
    #[serde(flatten)]
    pub execution: ExecutionOptions,
    pub type_properties: LookupActivityTypeProperties,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SetVariableActivityTypeProperties {
    pub variable_name: Option<String>,
    pub value: Option<Value>,
    pub set_system_variable: Option<bool>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetVariableActivity {
    #[serde(flatten)]
    pub base: ActivityBase,
    pub policy: Option<SecureInputOutputPolicy>,
    pub type_properties: SetVariableActivityTypeProperties,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SqlServerStoredProcedureActivityTypeProperties {
    pub stored_procedure_name: Value,
    pub stored_procedure_parameters: Option<BTreeMap<String, StoredProcedureParameter>>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SqlServerStoredProcedureActivity {
    #[serde(flatten)]
    pub base: ActivityBase,
    #[serde(flatten)]
    pub execution: ExecutionOptions,
    pub type_properties: SqlServerStoredProcedureActivityTypeProperties,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwitchActivityTypeProperties {
    pub on: Expression,
    pub cases: Option<Vec<SwitchCase>>,
    pub default_activities: Option<Vec<Activity>>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwitchActivity {
    #[serde(flatten)]
    pub base: ActivityBase,
    pub type_properties: SwitchActivityTypeProperties,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct UntilActivityTypeProperties {
    pub expression: Expression,
    pub timeout: Option<Value>,
    pub activities: Vec<Activity>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UntilActivity {
    #[serde(flatten)]
    pub base: ActivityBase,
    pub type_properties: UntilActivityTypeProperties,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationActivityTypeProperties {
    pub dataset: DatasetReference,
    pub timeout: Option<Value>,
    pub sleep: Option<Value>,
    pub minimum_size: Option<Value>,
    pub child_items: Option<Value>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationActivity {
    #[serde(flatten)]
    pub base: ActivityBase,
    pub type_properties: ValidationActivityTypeProperties,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaitActivityTypeProperties {
    pub wait_time_in_seconds: Value,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaitActivity {
    #[serde(flatten)]
    pub base: ActivityBase,
    pub type_properties: WaitActivityTypeProperties,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebActivityTypeProperties {
    pub method: WebActivityMethod,
    pub url: Value,
    pub headers: Option<BTreeMap<String, Value>>,
    pub body: Option<Value>,
    pub authentication: Option<WebActivityAuthentication>,
    pub disable_cert_validation: Option<bool>,
    pub http_request_timeout: Option<Value>,
    pub turn_off_async: Option<bool>,
    pub datasets: Option<Vec<DatasetReference>>,
    pub linked_services: Option<Vec<LinkedServiceReference>>,
    pub connect_via: Option<IntegrationRuntimeReference>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebActivity {
    #[serde(flatten)]
    pub base: ActivityBase,
    #[serde(flatten)]
    pub execution: ExecutionOptions,
    pub type_properties: WebActivityTypeProperties,
}

polymorphic_union! {
    /// A step of a pipeline.
    pub enum Activity: ActivityBase {
        AppendVariable(AppendVariableActivity) = "AppendVariable",
        Container(ContainerActivity) = "Container",
        Copy(CopyActivity) = "Copy",
        Delete(DeleteActivity) = "Delete",
        ExecutePipeline(ExecutePipelineActivity) = "ExecutePipeline",
        Execution(ExecutionActivity) = "Execution",
        Fail(FailActivity) = "Fail",
        Filter(FilterActivity) = "Filter",
        ForEach(ForEachActivity) = "ForEach",
        GetMetadata(GetMetadataActivity) = "GetMetadata",
        IfCondition(IfConditionActivity) = "IfCondition",
        Lookup(LookupActivity) = "Lookup",
        SetVariable(SetVariableActivity) = "SetVariable",
        SqlServerStoredProcedure(SqlServerStoredProcedureActivity) = "SqlServerStoredProcedure",
        Switch(SwitchActivity) = "Switch",
        Until(UntilActivity) = "Until",
        Validation(ValidationActivity) = "Validation",
        Wait(WaitActivity) = "Wait",
        WebActivity(WebActivity) = "WebActivity",
    }
}

impl Activity {
    pub fn name(&self) -> &str {
        &self.base().name
    }

    /// Activities nested directly inside this one (for control-flow activities), in
    /// declaration order. Switch cases come before the default branch.
    pub fn child_activities(&self) -> Vec<&Activity> {
        match self {
            Self::ForEach(a) => a.type_properties.activities.iter().collect(),
            Self::Until(a) => a.type_properties.activities.iter().collect(),
            Self::IfCondition(a) => {
                let p = &a.type_properties;
                p.if_true_activities
                    .iter()
                    .chain(p.if_false_activities.iter())
                    .flatten()
                    .collect()
            }
            Self::Switch(a) => {
                let p = &a.type_properties;
                p.cases
                    .iter()
                    .flatten()
                    .filter_map(|c| c.activities.as_ref())
                    .chain(p.default_activities.iter())
                    .flatten()
                    .collect()
            }
            _ => Vec::new(),
        }
    }
}
