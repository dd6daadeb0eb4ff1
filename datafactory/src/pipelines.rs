//! Data Factory pipelines: the pipeline document model, its IDs and the REST operations.

pub mod activities;
pub mod client;
pub mod constants;
pub mod ids;
pub mod models;
pub mod settings;
pub mod sinks;
pub mod sources;

pub use activities::{Activity, ActivityBase};
pub use client::PipelinesClient;
pub use ids::{FactoryId, PipelineId};
pub use models::{Pipeline, PipelineResource};
pub use sinks::CopySink;
pub use sources::CopySource;

/// REST API version of the pipeline operations
pub const API_VERSION: &str = "2018-06-01";

use azrm_base::error::Result;
use azrm_sdk::polymorphic::{decode_slice, decode_value};

/// Decode a pipeline resource document. Activities with unknown types are kept as raw values.
pub fn decode_pipeline_resource(input: &[u8]) -> Result<Option<PipelineResource>> {
    azrm_sdk::client::decode_model(input)
}

/// Decode one activity; empty input or `null` yields `None`.
pub fn decode_activity(input: &[u8]) -> Result<Option<Activity>> {
    decode_slice(input)
}

pub fn decode_activity_value(value: serde_json::Value) -> Result<Option<Activity>> {
    decode_value(value)
}
