//! Network DSCP configurations (QoS markings applied to matching traffic).

pub mod client;
pub mod constants;
pub mod ids;
pub mod models;

pub use client::DscpConfigurationClient;
pub use ids::DscpConfigurationId;
pub use models::{DscpConfiguration, DscpConfigurationPropertiesFormat};

/// REST API version of the DSCP configuration operations
pub const API_VERSION: &str = "2023-11-01";
