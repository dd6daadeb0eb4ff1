use super::constants::{literal_of, SqlPartitionOption};
use super::models::SqlPartitionSettings;
use super::settings::{ExportSettings, FormatReadSettings, StoreReadSettings};
use azrm_sdk::polymorphic_union;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CopySourceBase {
    #[serde(rename = "type", default)]
    pub type_: String,
    pub source_retry_count: Option<Value>,
    pub source_retry_wait: Option<Value>,
    pub max_concurrent_connections: Option<Value>,
    pub disable_metrics_collection: Option<Value>,
}

/// Options of every tabular source.
#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TabularOptions {
    pub query_timeout: Option<Value>,
    pub additional_columns: Option<Value>,
}

/// Reader options of the SQL family of sources.
#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SqlReaderOptions {
    pub sql_reader_query: Option<Value>,
    pub sql_reader_stored_procedure_name: Option<Value>,
    pub stored_procedure_parameters: Option<Value>,
    pub isolation_level: Option<Value>,
    pub partition_option: Option<Value>,
    pub partition_settings: Option<SqlPartitionSettings>,
}

impl SqlReaderOptions {
    /// `partitionOption` when it is a literal rather than an expression.
    pub fn partition_option(&self) -> Option<SqlPartitionOption> {
        literal_of(self.partition_option.as_ref())
    }
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AvroSource {
    #[serde(flatten)]
    pub base: CopySourceBase,
    pub store_settings: Option<StoreReadSettings>,
    pub additional_columns: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AzureSqlSource {
    #[serde(flatten)]
    pub base: CopySourceBase,
    #[serde(flatten)]
    pub tabular: TabularOptions,
    #[serde(flatten)]
    pub reader: SqlReaderOptions,
    pub produce_additional_types: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AzureDatabricksDeltaLakeSource {
    #[serde(flatten)]
    pub base: CopySourceBase,
    pub query: Option<Value>,
    pub export_settings: Option<ExportSettings>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AzureTableSource {
    #[serde(flatten)]
    pub base: CopySourceBase,
    #[serde(flatten)]
    pub tabular: TabularOptions,
    pub azure_table_source_query: Option<Value>,
    pub azure_table_source_ignore_table_not_found: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BinarySource {
    #[serde(flatten)]
    pub base: CopySourceBase,
    pub store_settings: Option<StoreReadSettings>,
    pub format_settings: Option<FormatReadSettings>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BlobSource {
    #[serde(flatten)]
    pub base: CopySourceBase,
    pub treat_empty_as_null: Option<Value>,
    pub skip_header_line_count: Option<Value>,
    pub recursive: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CosmosDbSqlApiSource {
    #[serde(flatten)]
    pub base: CopySourceBase,
    pub query: Option<Value>,
    pub page_size: Option<Value>,
    pub preferred_regions: Option<Value>,
    pub detect_datetime: Option<Value>,
    pub additional_columns: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DelimitedTextSource {
    #[serde(flatten)]
    pub base: CopySourceBase,
    pub store_settings: Option<StoreReadSettings>,
    pub format_settings: Option<FormatReadSettings>,
    pub additional_columns: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExcelSource {
    #[serde(flatten)]
    pub base: CopySourceBase,
    pub store_settings: Option<StoreReadSettings>,
    pub additional_columns: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HttpSource {
    #[serde(flatten)]
    pub base: CopySourceBase,
    pub http_request_timeout: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct JsonSource {
    #[serde(flatten)]
    pub base: CopySourceBase,
    pub store_settings: Option<StoreReadSettings>,
    pub format_settings: Option<FormatReadSettings>,
    pub additional_columns: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrcSource {
    #[serde(flatten)]
    pub base: CopySourceBase,
    pub store_settings: Option<StoreReadSettings>,
    pub additional_columns: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParquetSource {
    #[serde(flatten)]
    pub base: CopySourceBase,
    pub store_settings: Option<StoreReadSettings>,
    pub format_settings: Option<FormatReadSettings>,
    pub additional_columns: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RestSource {
    #[serde(flatten)]
    pub base: CopySourceBase,
    pub request_method: Option<Value>,
    pub request_body: Option<Value>,
    pub additional_headers: Option<Value>,
    pub pagination_rules: Option<Value>,
    pub http_request_timeout: Option<Value>,
    pub request_interval: Option<Value>,
    pub additional_columns: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SnowflakeSource {
    #[serde(flatten)]
    pub base: CopySourceBase,
    pub query: Option<Value>,
    pub export_settings: Option<ExportSettings>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SqlServerSource {
    #[serde(flatten)]
    pub base: CopySourceBase,
    #[serde(flatten)]
    pub tabular: TabularOptions,
    #[serde(flatten)]
    pub reader: SqlReaderOptions,
    pub produce_additional_types: Option<Value>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct SqlSource {
    #[serde(flatten)]
    pub base: CopySourceBase,
    #[serde(flatten)]
    pub tabular: TabularOptions,
    #[serde(flatten)]
    pub reader: SqlReaderOptions,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct TabularSource {
    #[serde(flatten)]
    pub base: CopySourceBase,
    #[serde(flatten)]
    pub tabular: TabularOptions,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct XmlSource {
    #[serde(flatten)]
    pub base: CopySourceBase,
    pub store_settings: Option<StoreReadSettings>,
    pub format_settings: Option<FormatReadSettings>,
    pub additional_columns: Option<Value>,
}

polymorphic_union! {
    /// Source side of a copy activity.
    pub enum CopySource: CopySourceBase {
        AvroSource(AvroSource) = "AvroSource",
        AzureSqlSource(AzureSqlSource) = "AzureSqlSource",
        AzureDatabricksDeltaLakeSource(AzureDatabricksDeltaLakeSource) = "AzureDatabricksDeltaLakeSource",
        AzureTableSource(AzureTableSource) = "AzureTableSource",
        BinarySource(BinarySource) = "BinarySource",
        BlobSource(BlobSource) = "BlobSource",
        CosmosDbSqlApiSource(CosmosDbSqlApiSource) = "CosmosDbSqlApiSource",
        DelimitedTextSource(DelimitedTextSource) = "DelimitedTextSource",
        ExcelSource(ExcelSource) = "ExcelSource",
        HttpSource(HttpSource) = "HttpSource",
        JsonSource(JsonSource) = "JsonSource",
        OrcSource(OrcSource) = "OrcSource",
        ParquetSource(ParquetSource) = "ParquetSource",
        RestSource(RestSource) = "RestSource",
        SnowflakeSource(SnowflakeSource) = "SnowflakeSource",
        SqlServerSource(SqlServerSource) = "SqlServerSource",
        SqlSource(SqlSource) = "SqlSource",
        TabularSource(TabularSource) = "TabularSource",
        XmlSource(XmlSource) = "XmlSource",
    }
}

impl CopySource {
    /// Store settings of file based sources.
    pub fn store_settings(&self) -> Option<&StoreReadSettings> {
        match self {
            Self::AvroSource(s) => s.store_settings.as_ref(),
            Self::BinarySource(s) => s.store_settings.as_ref(),
            Self::DelimitedTextSource(s) => s.store_settings.as_ref(),
            Self::ExcelSource(s) => s.store_settings.as_ref(),
            Self::JsonSource(s) => s.store_settings.as_ref(),
            Self::OrcSource(s) => s.store_settings.as_ref(),
            Self::ParquetSource(s) => s.store_settings.as_ref(),
            Self::XmlSource(s) => s.store_settings.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sql_source_flattened_options() {
        let input = json!({
            "type": "AzureSqlSource",
            "sourceRetryCount": 2,
            "queryTimeout": "02:00:00",
            "sqlReaderQuery": "select * from t",
            "partitionOption": "PhysicalPartitionsOfTable",
            "partitionSettings": {"partitionColumnName": "id"}
        });
        let source: CopySource = serde_json::from_value(input.clone()).unwrap();
        let CopySource::AzureSqlSource(sql) = &source else {
            panic!("unexpected {source:?}");
        };
        assert_eq!(sql.base.source_retry_count, Some(json!(2)));
        assert_eq!(sql.tabular.query_timeout, Some(json!("02:00:00")));
        assert_eq!(
            sql.reader.partition_option(),
            Some(SqlPartitionOption::PhysicalPartitionsOfTable)
        );
        assert_eq!(serde_json::to_value(&source).unwrap(), input);
    }

    #[test]
    fn test_snowflake_source_export_settings() {
        let source: CopySource = serde_json::from_value(json!({
            "type": "snowflakeSource",
            "query": "select 1",
            "exportSettings": {
                "type": "SnowflakeExportCopyCommand",
                "additionalCopyOptions": {"MAX_FILE_SIZE": "64000000"}
            }
        }))
        .unwrap();
        let CopySource::SnowflakeSource(snowflake) = source else {
            panic!("expected snowflake source");
        };
        let Some(ExportSettings::SnowflakeExportCopyCommand(command)) = snowflake.export_settings
        else {
            panic!("expected copy command");
        };
        assert_eq!(
            command.additional_copy_options.unwrap()["MAX_FILE_SIZE"],
            json!("64000000")
        );
    }

    #[test]
    fn test_store_settings_accessor() {
        let source: CopySource = serde_json::from_value(json!({
            "type": "ParquetSource",
            "storeSettings": {"type": "AzureBlobFSReadSettings", "recursive": true}
        }))
        .unwrap();
        assert_eq!(
            source.store_settings().map(|s| s.discriminator()),
            Some("AzureBlobFSReadSettings")
        );
        let http: CopySource = serde_json::from_value(json!({"type": "HttpSource"})).unwrap();
        assert!(http.store_settings().is_none());
    }
}
