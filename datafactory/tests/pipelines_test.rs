use azrm_base::config::ArmClientConfig;
use azrm_datafactory::pipelines::activities::Activity;
use azrm_datafactory::pipelines::client::CreateRunOperationOptions;
use azrm_datafactory::pipelines::constants::{DependencyCondition, ParameterType};
use azrm_datafactory::pipelines::settings::{
    CompressionReadSettings, ExportSettings, FormatReadSettings, FormatWriteSettings,
    ImportSettings, StoreReadSettings, StoreWriteSettings,
};
use azrm_datafactory::pipelines::{
    decode_activity, decode_activity_value, decode_pipeline_resource, CopySink, CopySource,
    PipelineId, PipelinesClient,
};
use azrm_sdk::polymorphic::{decode_value, Polymorphic};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use std::fmt::Debug;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const PIPELINE_DOCUMENT: &str = r#"{
  "name": "ingest",
  "properties": {
    "description": "daily ingest",
    "parameters": {"day": {"type": "String"}},
    "activities": [
      {
        "name": "LookupFiles",
        "type": "Lookup",
        "typeProperties": {
          "source": {"type": "JsonSource", "storeSettings": {"type": "AzureBlobFSReadSettings", "recursive": true}},
          "dataset": {"type": "DatasetReference", "referenceName": "files"},
          "firstRowOnly": false
        }
      },
      {
        "name": "EachFile",
        "type": "FOREACH",
        "dependsOn": [{"activity": "LookupFiles", "dependencyConditions": ["Succeeded"]}],
        "typeProperties": {
          "items": {"type": "Expression", "value": "@activity('LookupFiles').output.value"},
          "activities": [
            {
              "name": "CopyFile",
              "type": "Copy",
              "typeProperties": {
                "source": {
                  "type": "ParquetSource",
                  "storeSettings": {"type": "AzureBlobStorageReadSettings", "wildcardFileName": "*.parquet"},
                  "formatSettings": {
                    "type": "ParquetReadSettings",
                    "compressionProperties": {"type": "TarGZipReadSettings"}
                  }
                },
                "sink": {
                  "type": "SnowflakeSink",
                  "importSettings": {"type": "SnowflakeImportCopyCommand", "storageIntegration": "si"}
                }
              }
            },
            {"name": "Notify", "type": "AzureFunctionActivity", "typeProperties": {"functionName": "notify"}},
            {"name": "Pause", "type": "Wait", "typeProperties": {"waitTimeInSeconds": 30}}
          ]
        }
      }
    ]
  }
}"#;

/// Decodes every literal of `U`'s table from `fixture`, encodes it again and checks the result
/// decodes to the same value.
fn assert_variants_round_trip<U>(fixture: impl Fn(&str) -> Value) -> anyhow::Result<()>
where
    U: Polymorphic + Serialize + DeserializeOwned + PartialEq + Debug,
{
    for variant in U::variants() {
        let value = decode_value::<U>(fixture(variant.literal))?
            .ok_or_else(|| anyhow::anyhow!("{} decoded to None", variant.literal))?;
        assert!(value.as_raw().is_none(), "{} fell back to raw", variant.literal);

        let encoded = serde_json::to_value(&value)?;
        assert_eq!(encoded["type"], json!(variant.literal));
        assert_eq!(decode_value::<U>(encoded)?, Some(value), "{}", variant.literal);
    }
    Ok(())
}

fn typed(literal: &str) -> Value {
    json!({"type": literal})
}

#[test]
fn test_settings_and_copy_variants_round_trip() -> anyhow::Result<()> {
    assert_variants_round_trip::<CopySource>(typed)?;
    assert_variants_round_trip::<CopySink>(typed)?;
    assert_variants_round_trip::<CompressionReadSettings>(typed)?;
    assert_variants_round_trip::<FormatReadSettings>(typed)?;
    assert_variants_round_trip::<FormatWriteSettings>(typed)?;
    assert_variants_round_trip::<StoreReadSettings>(typed)?;
    assert_variants_round_trip::<StoreWriteSettings>(typed)?;
    assert_variants_round_trip::<ExportSettings>(typed)?;
    assert_variants_round_trip::<ImportSettings>(typed)?;
    Ok(())
}

fn lowercase_types(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, v) in map.iter_mut() {
                match v {
                    Value::String(s) if key == "type" => *s = s.to_lowercase(),
                    _ => lowercase_types(v),
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(lowercase_types),
        _ => {}
    }
}

/// `input` must encode back unchanged, and the same payload with every discriminator lowercased
/// must decode to the same value.
fn assert_populated_round_trip<U>(input: Value) -> anyhow::Result<()>
where
    U: Polymorphic + Serialize + DeserializeOwned + PartialEq + Debug,
{
    let value = decode_value::<U>(input.clone())?
        .ok_or_else(|| anyhow::anyhow!("{input} decoded to None"))?;
    assert!(value.as_raw().is_none(), "{input} fell back to raw");
    assert_eq!(serde_json::to_value(&value)?, input);

    let mut relaxed = input.clone();
    lowercase_types(&mut relaxed);
    let relaxed = decode_value::<U>(relaxed)?
        .ok_or_else(|| anyhow::anyhow!("{input} decoded to None"))?;
    assert_eq!(relaxed, value);
    assert_eq!(serde_json::to_value(&relaxed)?, input);
    assert_eq!(decode_value::<U>(serde_json::to_value(&relaxed)?)?, Some(value));
    Ok(())
}

#[test]
fn test_populated_variants_round_trip() -> anyhow::Result<()> {
    assert_populated_round_trip::<CopySource>(json!({
        "type": "SqlServerSource",
        "sourceRetryCount": 2,
        "maxConcurrentConnections": 4,
        "queryTimeout": "02:00:00",
        "additionalColumns": [{"name": "origin", "value": "sql"}],
        "sqlReaderQuery": "select * from t",
        "isolationLevel": "ReadCommitted",
        "partitionOption": "DynamicRange",
        "partitionSettings": {
            "partitionColumnName": "id",
            "partitionLowerBound": "1",
            "partitionUpperBound": "100"
        },
        "produceAdditionalTypes": ["geography"]
    }))?;
    assert_populated_round_trip::<CopySource>(json!({
        "type": "ParquetSource",
        "storeSettings": {
            "type": "AzureBlobFSReadSettings",
            "maxConcurrentConnections": 2,
            "recursive": true,
            "wildcardFolderPath": "in/*",
            "wildcardFileName": "*.parquet",
            "modifiedDatetimeStart": "2024-01-01T00:00:00Z"
        },
        "formatSettings": {
            "type": "ParquetReadSettings",
            "compressionProperties": {
                "type": "ZipDeflateReadSettings",
                "preserveZipFileNameAsFolder": false
            }
        },
        "additionalColumns": [{"name": "file", "value": "$$FILEPATH"}]
    }))?;
    assert_populated_round_trip::<CopySource>(json!({
        "type": "SnowflakeSource",
        "query": "select 1",
        "exportSettings": {
            "type": "SnowflakeExportCopyCommand",
            "additionalFormatOptions": {"OVERWRITE": "TRUE"},
            "storageIntegration": "si"
        }
    }))?;
    assert_populated_round_trip::<CopySink>(json!({
        "type": "AzureSqlSink",
        "writeBatchSize": 1000,
        "sinkRetryCount": 3,
        "preCopyScript": "truncate table staging",
        "tableOption": "autoCreate",
        "sqlWriterUseTableLock": true,
        "writeBehavior": "upsert",
        "upsertSettings": {"keys": ["id"], "useTempDB": true}
    }))?;
    assert_populated_round_trip::<CopySink>(json!({
        "type": "DelimitedTextSink",
        "writeBatchTimeout": "00:05:00",
        "storeSettings": {
            "type": "AzureBlobFSWriteSettings",
            "copyBehavior": "FlattenHierarchy",
            "metadata": [{"name": "owner", "value": "etl"}],
            "blockSizeInMB": 8
        },
        "formatSettings": {
            "type": "DelimitedTextWriteSettings",
            "fileExtension": ".csv",
            "maxRowsPerFile": 10000,
            "quoteAllText": true
        }
    }))?;
    assert_populated_round_trip::<CopySink>(json!({
        "type": "SnowflakeSink",
        "preCopyScript": "delete from t",
        "importSettings": {
            "type": "SnowflakeImportCopyCommand",
            "additionalCopyOptions": {"FORCE": "TRUE"},
            "storageIntegration": "si"
        }
    }))?;
    assert_populated_round_trip::<StoreReadSettings>(json!({
        "type": "FtpReadSettings",
        "disableMetricsCollection": true,
        "recursive": false,
        "fileListPath": "lists/files.txt",
        "deleteFilesAfterCompletion": true,
        "useBinaryTransfer": true
    }))?;
    assert_populated_round_trip::<FormatReadSettings>(json!({
        "type": "DelimitedTextReadSettings",
        "skipLineCount": 1,
        "compressionProperties": {
            "type": "TarGZipReadSettings",
            "preserveCompressionFileNameAsFolder": true
        }
    }))?;
    assert_populated_round_trip::<StoreWriteSettings>(json!({
        "type": "SftpWriteSettings",
        "maxConcurrentConnections": 1,
        "operationTimeout": "01:00:00",
        "useTempFileRename": false
    }))?;
    assert_populated_round_trip::<ExportSettings>(json!({
        "type": "AzureDatabricksDeltaLakeExportCommand",
        "dateFormat": "yyyy-MM-dd",
        "timestampFormat": "yyyy-MM-dd HH:mm:ss"
    }))?;
    assert_populated_round_trip::<ImportSettings>(json!({
        "type": "AzureDatabricksDeltaLakeImportCommand",
        "dateFormat": "yyyy-MM-dd"
    }))?;
    Ok(())
}

#[test]
fn test_activity_variants_round_trip() -> anyhow::Result<()> {
    let dataset = json!({"type": "DatasetReference", "referenceName": "ds"});
    let expression = json!({"type": "Expression", "value": "@true"});
    assert_variants_round_trip::<Activity>(|literal| {
        let type_properties = match literal {
            "Copy" => json!({"source": {"type": "BlobSource"}, "sink": {"type": "BlobSink"}}),
            "Delete" | "GetMetadata" | "Validation" => json!({"dataset": dataset}),
            "ExecutePipeline" => {
                json!({"pipeline": {"type": "PipelineReference", "referenceName": "child"}})
            }
            "Fail" => json!({"message": "failed", "errorCode": "500"}),
            "Filter" => json!({"items": expression, "condition": expression}),
            "ForEach" => json!({"items": expression, "activities": []}),
            "IfCondition" => json!({"expression": expression}),
            "Lookup" => json!({"source": {"type": "SqlSource"}, "dataset": dataset}),
            "SqlServerStoredProcedure" => json!({"storedProcedureName": "sp_load"}),
            "Switch" => json!({"on": expression}),
            "Until" => json!({"expression": expression, "activities": []}),
            "Wait" => json!({"waitTimeInSeconds": 5}),
            "WebActivity" => json!({"method": "GET", "url": "https://example.com"}),
            "Container" | "Execution" => Value::Null,
            _ => json!({}),
        };
        let mut activity = json!({"name": format!("{literal}1"), "type": literal});
        if !type_properties.is_null() {
            activity["typeProperties"] = type_properties;
        }
        activity
    })
}

#[test]
fn test_discriminator_is_case_insensitive() -> anyhow::Result<()> {
    for literal in ["AVROSOURCE", "avrosource", "AvroSource"] {
        let source: CopySource = serde_json::from_value(json!({"type": literal}))?;
        assert!(matches!(source, CopySource::AvroSource(_)), "{literal}");
        assert_eq!(serde_json::to_value(&source)?, json!({"type": "AvroSource"}));
    }
    Ok(())
}

#[test]
fn test_decode_pipeline_document() -> anyhow::Result<()> {
    let resource = decode_pipeline_resource(PIPELINE_DOCUMENT.as_bytes())?
        .ok_or_else(|| anyhow::anyhow!("empty document"))?;
    let pipeline = &resource.properties;
    assert_eq!(
        pipeline.parameters.as_ref().map(|p| &p["day"].type_),
        Some(&ParameterType::String)
    );

    let activities = pipeline.activities();
    assert_eq!(activities.len(), 2);
    let Activity::Lookup(lookup) = &activities[0] else {
        panic!("unexpected {:?}", activities[0]);
    };
    assert_eq!(
        lookup.type_properties.source.store_settings().map(|s| s.discriminator()),
        Some("AzureBlobFSReadSettings")
    );

    let Activity::ForEach(each) = &activities[1] else {
        panic!("unexpected {:?}", activities[1]);
    };
    let dependency = &each.base.depends_on.as_ref().unwrap()[0];
    assert_eq!(dependency.dependency_conditions, vec![DependencyCondition::Succeeded]);

    let inner: Vec<&str> = each
        .type_properties
        .activities
        .iter()
        .map(|a| a.discriminator())
        .collect();
    assert_eq!(inner, vec!["Copy", "AzureFunctionActivity", "Wait"]);

    let Activity::Copy(copy) = &each.type_properties.activities[0] else {
        panic!("expected copy activity");
    };
    let CopySource::ParquetSource(parquet) = &copy.type_properties.source else {
        panic!("expected parquet source");
    };
    assert!(matches!(
        parquet.format_settings.as_ref().and_then(|f| f.compression()),
        Some(CompressionReadSettings::TarGZipReadSettings(_))
    ));
    let CopySink::SnowflakeSink(snowflake) = &copy.type_properties.sink else {
        panic!("expected snowflake sink");
    };
    assert!(matches!(
        snowflake.import_settings,
        Some(ImportSettings::SnowflakeImportCopyCommand(_))
    ));
    Ok(())
}

#[test]
fn test_unknown_activity_survives_round_trip() -> anyhow::Result<()> {
    let resource = decode_pipeline_resource(PIPELINE_DOCUMENT.as_bytes())?
        .ok_or_else(|| anyhow::anyhow!("empty document"))?;
    let Activity::ForEach(each) = &resource.properties.activities()[1] else {
        panic!("expected for each");
    };
    let notify = each.type_properties.activities[1]
        .as_raw()
        .ok_or_else(|| anyhow::anyhow!("expected raw activity"))?;
    assert_eq!(notify.base.name, "Notify");
    assert_eq!(notify.discriminator, "AzureFunctionActivity");
    assert_eq!(
        notify.values.get("typeProperties"),
        Some(&json!({"functionName": "notify"}))
    );

    let encoded = serde_json::to_vec(&resource)?;
    let again = decode_pipeline_resource(&encoded)?;
    assert_eq!(again.as_ref(), Some(&resource));

    let original: Value = serde_json::from_str(PIPELINE_DOCUMENT)?;
    let encoded: Value = serde_json::from_slice(&encoded)?;
    assert_eq!(
        encoded["properties"]["activities"][1]["typeProperties"]["activities"][1],
        original["properties"]["activities"][1]["typeProperties"]["activities"][1]
    );
    // the known variant is re-emitted with its canonical literal
    assert_eq!(encoded["properties"]["activities"][1]["type"], json!("ForEach"));
    Ok(())
}

#[test]
fn test_empty_activity_input() -> anyhow::Result<()> {
    assert!(decode_activity(b"")?.is_none());
    assert!(decode_activity(b"null")?.is_none());
    assert!(decode_activity_value(Value::Null)?.is_none());

    let activity = decode_activity(br#"{"name": "n", "type": 7}"#)?
        .ok_or_else(|| anyhow::anyhow!("expected activity"))?;
    assert_eq!(activity.discriminator(), "7");
    assert!(activity.is_raw());
    Ok(())
}

#[test]
fn test_variant_decode_error_names_union_and_variant() {
    let err = decode_activity(br#"{"name": "w", "type": "Wait"}"#).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Activity \"Wait\""), "{message}");
    assert!(message.contains("typeProperties"), "{message}");
}

#[tokio::test]
async fn test_create_run_decodes_run_id() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let endpoint = format!("http://{}", listener.local_addr()?);
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await?;
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        // the request body is a small json object, so wait for its closing brace
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") || !buf.ends_with(b"}") {
            let n = socket.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        let body = r#"{"runId":"2f91a6a4"}"#;
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await?;
        socket.shutdown().await?;
        anyhow::Ok(String::from_utf8_lossy(&buf).into_owned())
    });

    let config = ArmClientConfig {
        endpoint,
        token: Some("test-token".to_string()),
        ..Default::default()
    };
    let client = PipelinesClient::from_config(&config)?;
    let id = PipelineId::new("sub", "rg", "f", "p");
    let parameters = json!({"day": "2024-01-01"});
    let res = client
        .create_run(
            &id,
            CreateRunOperationOptions::default(),
            parameters.as_object().cloned(),
        )
        .await?;
    assert_eq!(res.status, 200);
    assert_eq!(res.model.map(|m| m.run_id).as_deref(), Some("2f91a6a4"));

    let request = server.await??;
    assert!(request.starts_with(
        "POST /subscriptions/sub/resourceGroups/rg/providers/Microsoft.DataFactory/factories/f/pipelines/p/createRun?"
    ), "{request}");
    assert!(request.ends_with(r#"{"day":"2024-01-01"}"#), "{request}");
    Ok(())
}
