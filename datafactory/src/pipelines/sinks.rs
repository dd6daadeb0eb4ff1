use super::constants::{
    literal_of, CosmosDbWriteBehavior, HttpCompressionType, SqlWriteBehaviorEnum,
};
use super::models::{MetadataItem, SqlUpsertSettings};
use super::settings::{FormatWriteSettings, ImportSettings, StoreWriteSettings};
use azrm_sdk::polymorphic_union;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CopySinkBase {
    #[serde(rename = "type", default)]
    pub type_: String,
    pub write_batch_size: Option<Value>,
    pub write_batch_timeout: Option<Value>,
    pub sink_retry_count: Option<Value>,
    pub sink_retry_wait: Option<Value>,
    pub max_concurrent_connections: Option<Value>,
    pub disable_metrics_collection: Option<Value>,
}

/// Writer options of the SQL family of sinks.
#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SqlWriterOptions {
    pub sql_writer_stored_procedure_name: Option<Value>,
    pub sql_writer_table_type: Option<Value>,
    pub pre_copy_script: Option<Value>,
    pub stored_procedure_parameters: Option<Value>,
    pub stored_procedure_table_type_parameter_name: Option<Value>,
    pub table_option: Option<Value>,
    pub sql_writer_use_table_lock: Option<Value>,
    pub write_behavior: Option<Value>,
    pub upsert_settings: Option<SqlUpsertSettings>,
}

impl SqlWriterOptions {
    pub fn write_behavior(&self) -> Option<SqlWriteBehaviorEnum> {
        literal_of(self.write_behavior.as_ref())
    }
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AvroSink {
    #[serde(flatten)]
    pub base: CopySinkBase,
    pub store_settings: Option<StoreWriteSettings>,
    pub format_settings: Option<FormatWriteSettings>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AzureDatabricksDeltaLakeSink {
    #[serde(flatten)]
    pub base: CopySinkBase,
    pub pre_copy_script: Option<Value>,
    pub import_settings: Option<ImportSettings>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct AzureSqlSink {
    #[serde(flatten)]
    pub base: CopySinkBase,
    #[serde(flatten)]
    pub writer: SqlWriterOptions,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AzureTableSink {
    #[serde(flatten)]
    pub base: CopySinkBase,
    pub azure_table_default_partition_key_value: Option<Value>,
    pub azure_table_partition_key_name: Option<Value>,
    pub azure_table_row_key_name: Option<Value>,
    pub azure_table_insert_type: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BinarySink {
    #[serde(flatten)]
    pub base: CopySinkBase,
    pub store_settings: Option<StoreWriteSettings>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BlobSink {
    #[serde(flatten)]
    pub base: CopySinkBase,
    pub blob_writer_overwrite_files: Option<Value>,
    pub blob_writer_date_time_format: Option<Value>,
    pub blob_writer_add_header: Option<Value>,
    pub copy_behavior: Option<Value>,
    pub metadata: Option<Vec<MetadataItem>>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CosmosDbSqlApiSink {
    #[serde(flatten)]
    pub base: CopySinkBase,
    pub write_behavior: Option<Value>,
}

impl CosmosDbSqlApiSink {
    pub fn write_behavior(&self) -> Option<CosmosDbWriteBehavior> {
        literal_of(self.write_behavior.as_ref())
    }
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DelimitedTextSink {
    #[serde(flatten)]
    pub base: CopySinkBase,
    pub store_settings: Option<StoreWriteSettings>,
    pub format_settings: Option<FormatWriteSettings>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FileSystemSink {
    #[serde(flatten)]
    pub base: CopySinkBase,
    pub copy_behavior: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct JsonSink {
    #[serde(flatten)]
    pub base: CopySinkBase,
    pub store_settings: Option<StoreWriteSettings>,
    pub format_settings: Option<FormatWriteSettings>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrcSink {
    #[serde(flatten)]
    pub base: CopySinkBase,
    pub store_settings: Option<StoreWriteSettings>,
    pub format_settings: Option<FormatWriteSettings>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParquetSink {
    #[serde(flatten)]
    pub base: CopySinkBase,
    pub store_settings: Option<StoreWriteSettings>,
    pub format_settings: Option<FormatWriteSettings>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RestSink {
    #[serde(flatten)]
    pub base: CopySinkBase,
    pub request_method: Option<Value>,
    pub additional_headers: Option<Value>,
    pub http_request_timeout: Option<Value>,
    pub request_interval: Option<Value>,
    pub http_compression_type: Option<Value>,
}

impl RestSink {
    pub fn http_compression_type(&self) -> Option<HttpCompressionType> {
        literal_of(self.http_compression_type.as_ref())
    }
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SnowflakeSink {
    #[serde(flatten)]
    pub base: CopySinkBase,
    pub pre_copy_script: Option<Value>,
    pub import_settings: Option<ImportSettings>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct SqlServerSink {
    #[serde(flatten)]
    pub base: CopySinkBase,
    #[serde(flatten)]
    pub writer: SqlWriterOptions,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct SqlSink {
    #[serde(flatten)]
    pub base: CopySinkBase,
    #[serde(flatten)]
    pub writer: SqlWriterOptions,
}

polymorphic_union! {
    /// Sink side of a copy activity.
    pub enum CopySink: CopySinkBase {
        AvroSink(AvroSink) = "AvroSink",
        AzureDatabricksDeltaLakeSink(AzureDatabricksDeltaLakeSink) = "AzureDatabricksDeltaLakeSink",
        AzureSqlSink(AzureSqlSink) = "AzureSqlSink",
        AzureTableSink(AzureTableSink) = "AzureTableSink",
        BinarySink(BinarySink) = "BinarySink",
        BlobSink(BlobSink) = "BlobSink",
        CosmosDbSqlApiSink(CosmosDbSqlApiSink) = "CosmosDbSqlApiSink",
        DelimitedTextSink(DelimitedTextSink) = "DelimitedTextSink",
        FileSystemSink(FileSystemSink) = "FileSystemSink",
        JsonSink(JsonSink) = "JsonSink",
        OrcSink(OrcSink) = "OrcSink",
        ParquetSink(ParquetSink) = "ParquetSink",
        RestSink(RestSink) = "RestSink",
        SnowflakeSink(SnowflakeSink) = "SnowflakeSink",
        SqlServerSink(SqlServerSink) = "SqlServerSink",
        SqlSink(SqlSink) = "SqlSink",
    }
}
