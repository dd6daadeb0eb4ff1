//! Store, format, compression and copy-command settings attached to copy sources and sinks.

use super::models::MetadataItem;
use azrm_sdk::polymorphic_union;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

// compression

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct CompressionReadSettingsBase {
    #[serde(rename = "type", default)]
    pub type_: String,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TarGZipReadSettings {
    #[serde(flatten)]
    pub base: CompressionReadSettingsBase,
    pub preserve_compression_file_name_as_folder: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TarReadSettings {
    #[serde(flatten)]
    pub base: CompressionReadSettingsBase,
    pub preserve_compression_file_name_as_folder: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZipDeflateReadSettings {
    #[serde(flatten)]
    pub base: CompressionReadSettingsBase,
    pub preserve_zip_file_name_as_folder: Option<Value>,
}

polymorphic_union! {
    pub enum CompressionReadSettings: CompressionReadSettingsBase {
        TarGZipReadSettings(TarGZipReadSettings) = "TarGZipReadSettings",
        TarReadSettings(TarReadSettings) = "TarReadSettings",
        ZipDeflateReadSettings(ZipDeflateReadSettings) = "ZipDeflateReadSettings",
    }
}

// format read

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct FormatReadSettingsBase {
    #[serde(rename = "type", default)]
    pub type_: String,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BinaryReadSettings {
    #[serde(flatten)]
    pub base: FormatReadSettingsBase,
    pub compression_properties: Option<CompressionReadSettings>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DelimitedTextReadSettings {
    #[serde(flatten)]
    pub base: FormatReadSettingsBase,
    pub compression_properties: Option<CompressionReadSettings>,
    pub skip_line_count: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct JsonReadSettings {
    #[serde(flatten)]
    pub base: FormatReadSettingsBase,
    pub compression_properties: Option<CompressionReadSettings>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParquetReadSettings {
    #[serde(flatten)]
    pub base: FormatReadSettingsBase,
    pub compression_properties: Option<CompressionReadSettings>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct XmlReadSettings {
    #[serde(flatten)]
    pub base: FormatReadSettingsBase,
    pub compression_properties: Option<CompressionReadSettings>,
    pub detect_data_type: Option<Value>,
    pub namespace_prefixes: Option<Value>,
    pub namespaces: Option<Value>,
    pub validation_mode: Option<Value>,
}

polymorphic_union! {
    pub enum FormatReadSettings: FormatReadSettingsBase {
        BinaryReadSettings(BinaryReadSettings) = "BinaryReadSettings",
        DelimitedTextReadSettings(DelimitedTextReadSettings) = "DelimitedTextReadSettings",
        JsonReadSettings(JsonReadSettings) = "JsonReadSettings",
        ParquetReadSettings(ParquetReadSettings) = "ParquetReadSettings",
        XmlReadSettings(XmlReadSettings) = "XmlReadSettings",
    }
}

impl FormatReadSettings {
    /// Compression settings of the format, if the format carries any.
    pub fn compression(&self) -> Option<&CompressionReadSettings> {
        match self {
            Self::BinaryReadSettings(s) => s.compression_properties.as_ref(),
            Self::DelimitedTextReadSettings(s) => s.compression_properties.as_ref(),
            Self::JsonReadSettings(s) => s.compression_properties.as_ref(),
            Self::ParquetReadSettings(s) => s.compression_properties.as_ref(),
            Self::XmlReadSettings(s) => s.compression_properties.as_ref(),
            Self::Raw(_) => None,
        }
    }
}

// format write

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct FormatWriteSettingsBase {
    #[serde(rename = "type", default)]
    pub type_: String,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AvroWriteSettings {
    #[serde(flatten)]
    pub base: FormatWriteSettingsBase,
    pub file_name_prefix: Option<Value>,
    pub max_rows_per_file: Option<Value>,
    pub record_name: Option<String>,
    pub record_namespace: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DelimitedTextWriteSettings {
    #[serde(flatten)]
    pub base: FormatWriteSettingsBase,
    pub file_extension: Option<Value>,
    pub file_name_prefix: Option<Value>,
    pub max_rows_per_file: Option<Value>,
    pub quote_all_text: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct JsonWriteSettings {
    #[serde(flatten)]
    pub base: FormatWriteSettingsBase,
    /// `setOfObjects` or `arrayOfObjects`
    pub file_pattern: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrcWriteSettings {
    #[serde(flatten)]
    pub base: FormatWriteSettingsBase,
    pub file_name_prefix: Option<Value>,
    pub max_rows_per_file: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParquetWriteSettings {
    #[serde(flatten)]
    pub base: FormatWriteSettingsBase,
    pub file_name_prefix: Option<Value>,
    pub max_rows_per_file: Option<Value>,
}

polymorphic_union! {
    pub enum FormatWriteSettings: FormatWriteSettingsBase {
        AvroWriteSettings(AvroWriteSettings) = "AvroWriteSettings",
        DelimitedTextWriteSettings(DelimitedTextWriteSettings) = "DelimitedTextWriteSettings",
        JsonWriteSettings(JsonWriteSettings) = "JsonWriteSettings",
        OrcWriteSettings(OrcWriteSettings) = "OrcWriteSettings",
        ParquetWriteSettings(ParquetWriteSettings) = "ParquetWriteSettings",
    }
}

// store read

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StoreReadSettingsBase {
    #[serde(rename = "type", default)]
    pub type_: String,
    pub max_concurrent_connections: Option<Value>,
    pub disable_metrics_collection: Option<Value>,
}

/// File selection options shared by the file based stores.
#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FileSelection {
    pub recursive: Option<Value>,
    pub wildcard_folder_path: Option<Value>,
    pub wildcard_file_name: Option<Value>,
    pub file_list_path: Option<Value>,
    pub enable_partition_discovery: Option<Value>,
    pub partition_root_path: Option<Value>,
    pub delete_files_after_completion: Option<Value>,
    pub modified_datetime_start: Option<Value>,
    pub modified_datetime_end: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AmazonS3ReadSettings {
    #[serde(flatten)]
    pub base: StoreReadSettingsBase,
    #[serde(flatten)]
    pub files: FileSelection,
    pub prefix: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AzureBlobFSReadSettings {
    #[serde(flatten)]
    pub base: StoreReadSettingsBase,
    #[serde(flatten)]
    pub files: FileSelection,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AzureBlobStorageReadSettings {
    #[serde(flatten)]
    pub base: StoreReadSettingsBase,
    #[serde(flatten)]
    pub files: FileSelection,
    pub prefix: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AzureDataLakeStoreReadSettings {
    #[serde(flatten)]
    pub base: StoreReadSettingsBase,
    #[serde(flatten)]
    pub files: FileSelection,
    pub list_after: Option<Value>,
    pub list_before: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FileServerReadSettings {
    #[serde(flatten)]
    pub base: StoreReadSettingsBase,
    #[serde(flatten)]
    pub files: FileSelection,
    pub file_filter: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FtpReadSettings {
    #[serde(flatten)]
    pub base: StoreReadSettingsBase,
    #[serde(flatten)]
    pub files: FileSelection,
    pub disable_chunking: Option<Value>,
    pub use_binary_transfer: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoogleCloudStorageReadSettings {
    #[serde(flatten)]
    pub base: StoreReadSettingsBase,
    #[serde(flatten)]
    pub files: FileSelection,
    pub prefix: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HdfsReadSettings {
    #[serde(flatten)]
    pub base: StoreReadSettingsBase,
    #[serde(flatten)]
    pub files: FileSelection,
    pub distcp_settings: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HttpReadSettings {
    #[serde(flatten)]
    pub base: StoreReadSettingsBase,
    pub additional_columns: Option<Value>,
    pub additional_headers: Option<Value>,
    pub request_body: Option<Value>,
    pub request_method: Option<Value>,
    pub request_timeout: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SftpReadSettings {
    #[serde(flatten)]
    pub base: StoreReadSettingsBase,
    #[serde(flatten)]
    pub files: FileSelection,
    pub disable_chunking: Option<Value>,
}

polymorphic_union! {
    pub enum StoreReadSettings: StoreReadSettingsBase {
        AmazonS3ReadSettings(AmazonS3ReadSettings) = "AmazonS3ReadSettings",
        AzureBlobFSReadSettings(AzureBlobFSReadSettings) = "AzureBlobFSReadSettings",
        AzureBlobStorageReadSettings(AzureBlobStorageReadSettings) = "AzureBlobStorageReadSettings",
        AzureDataLakeStoreReadSettings(AzureDataLakeStoreReadSettings) = "AzureDataLakeStoreReadSettings",
        FileServerReadSettings(FileServerReadSettings) = "FileServerReadSettings",
        FtpReadSettings(FtpReadSettings) = "FtpReadSettings",
        GoogleCloudStorageReadSettings(GoogleCloudStorageReadSettings) = "GoogleCloudStorageReadSettings",
        HdfsReadSettings(HdfsReadSettings) = "HdfsReadSettings",
        HttpReadSettings(HttpReadSettings) = "HttpReadSettings",
        SftpReadSettings(SftpReadSettings) = "SftpReadSettings",
    }
}

// store write

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StoreWriteSettingsBase {
    #[serde(rename = "type", default)]
    pub type_: String,
    pub max_concurrent_connections: Option<Value>,
    pub disable_metrics_collection: Option<Value>,
    pub copy_behavior: Option<Value>,
    pub metadata: Option<Vec<MetadataItem>>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct AzureBlobFSWriteSettings {
    #[serde(flatten)]
    pub base: StoreWriteSettingsBase,
    #[serde(rename = "blockSizeInMB")]
    pub block_size_in_mb: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct AzureBlobStorageWriteSettings {
    #[serde(flatten)]
    pub base: StoreWriteSettingsBase,
    #[serde(rename = "blockSizeInMB")]
    pub block_size_in_mb: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AzureDataLakeStoreWriteSettings {
    #[serde(flatten)]
    pub base: StoreWriteSettingsBase,
    pub expiry_date_time: Option<Value>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct AzureFileStorageWriteSettings {
    #[serde(flatten)]
    pub base: StoreWriteSettingsBase,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct FileServerWriteSettings {
    #[serde(flatten)]
    pub base: StoreWriteSettingsBase,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct LakeHouseWriteSettings {
    #[serde(flatten)]
    pub base: StoreWriteSettingsBase,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SftpWriteSettings {
    #[serde(flatten)]
    pub base: StoreWriteSettingsBase,
    pub operation_timeout: Option<Value>,
    pub use_temp_file_rename: Option<Value>,
}

polymorphic_union! {
    pub enum StoreWriteSettings: StoreWriteSettingsBase {
        AzureBlobFSWriteSettings(AzureBlobFSWriteSettings) = "AzureBlobFSWriteSettings",
        AzureBlobStorageWriteSettings(AzureBlobStorageWriteSettings) = "AzureBlobStorageWriteSettings",
        AzureDataLakeStoreWriteSettings(AzureDataLakeStoreWriteSettings) = "AzureDataLakeStoreWriteSettings",
        AzureFileStorageWriteSettings(AzureFileStorageWriteSettings) = "AzureFileStorageWriteSettings",
        FileServerWriteSettings(FileServerWriteSettings) = "FileServerWriteSettings",
        LakeHouseWriteSettings(LakeHouseWriteSettings) = "LakeHouseWriteSettings",
        SftpWriteSettings(SftpWriteSettings) = "SftpWriteSettings",
    }
}

// export / import commands

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct ExportSettingsBase {
    #[serde(rename = "type", default)]
    pub type_: String,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AzureDatabricksDeltaLakeExportCommand {
    #[serde(flatten)]
    pub base: ExportSettingsBase,
    pub date_format: Option<Value>,
    pub timestamp_format: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SnowflakeExportCopyCommand {
    #[serde(flatten)]
    pub base: ExportSettingsBase,
    pub additional_copy_options: Option<BTreeMap<String, Value>>,
    pub additional_format_options: Option<BTreeMap<String, Value>>,
    pub storage_integration: Option<Value>,
}

polymorphic_union! {
    pub enum ExportSettings: ExportSettingsBase {
        AzureDatabricksDeltaLakeExportCommand(AzureDatabricksDeltaLakeExportCommand) = "AzureDatabricksDeltaLakeExportCommand",
        SnowflakeExportCopyCommand(SnowflakeExportCopyCommand) = "SnowflakeExportCopyCommand",
    }
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct ImportSettingsBase {
    #[serde(rename = "type", default)]
    pub type_: String,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AzureDatabricksDeltaLakeImportCommand {
    #[serde(flatten)]
    pub base: ImportSettingsBase,
    pub date_format: Option<Value>,
    pub timestamp_format: Option<Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SnowflakeImportCopyCommand {
    #[serde(flatten)]
    pub base: ImportSettingsBase,
    pub additional_copy_options: Option<BTreeMap<String, Value>>,
    pub additional_format_options: Option<BTreeMap<String, Value>>,
    pub storage_integration: Option<Value>,
}

polymorphic_union! {
    pub enum ImportSettings: ImportSettingsBase {
        AzureDatabricksDeltaLakeImportCommand(AzureDatabricksDeltaLakeImportCommand) = "AzureDatabricksDeltaLakeImportCommand",
        SnowflakeImportCopyCommand(SnowflakeImportCopyCommand) = "SnowflakeImportCopyCommand",
    }
}
