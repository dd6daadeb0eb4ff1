use super::constants::{ProtocolType, ProvisioningState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct DscpConfiguration {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub location: Option<String>,
    pub tags: Option<BTreeMap<String, String>>,
    pub etag: Option<String>,
    pub properties: Option<DscpConfigurationPropertiesFormat>,
}

impl DscpConfiguration {
    /// Copy without the fields the service computes, as sent on create or update.
    pub fn without_read_only(&self) -> Self {
        Self {
            id: None,
            name: None,
            type_: None,
            etag: None,
            properties: self.properties.as_ref().map(|p| DscpConfigurationPropertiesFormat {
                qos_collection_id: None,
                associated_network_interfaces: None,
                resource_guid: None,
                provisioning_state: None,
                ..p.clone()
            }),
            ..self.clone()
        }
    }
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DscpConfigurationPropertiesFormat {
    pub markings: Option<Vec<i64>>,
    pub source_ip_ranges: Option<Vec<QosIpRange>>,
    pub destination_ip_ranges: Option<Vec<QosIpRange>>,
    pub source_port_ranges: Option<Vec<QosPortRange>>,
    pub destination_port_ranges: Option<Vec<QosPortRange>>,
    pub protocol: Option<ProtocolType>,
    pub qos_definition_collection: Option<Vec<QosDefinition>>,
    /// read-only
    pub qos_collection_id: Option<String>,
    /// read-only
    pub associated_network_interfaces: Option<Vec<NetworkInterface>>,
    /// read-only
    pub resource_guid: Option<String>,
    /// read-only
    pub provisioning_state: Option<ProvisioningState>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct QosIpRange {
    #[serde(rename = "startIP")]
    pub start_ip: Option<String>,
    #[serde(rename = "endIP")]
    pub end_ip: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct QosPortRange {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct QosDefinition {
    pub markings: Option<Vec<i64>>,
    pub source_ip_ranges: Option<Vec<QosIpRange>>,
    pub destination_ip_ranges: Option<Vec<QosIpRange>>,
    pub source_port_ranges: Option<Vec<QosPortRange>>,
    pub destination_port_ranges: Option<Vec<QosPortRange>>,
    pub protocol: Option<ProtocolType>,
}

/// Network interface associated with a configuration, reduced to its identity.
#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct NetworkInterface {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub etag: Option<String>,
}
