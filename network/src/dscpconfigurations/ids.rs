use azrm_base::error::Result;
use azrm_sdk::commonids::ResourceGroupId;
use azrm_sdk::resourceids::{check_segment, ParseResult, ResourceId, Segment};
use std::fmt;

static DSCP_CONFIGURATION_SEGMENTS: &[Segment] = &[
    Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
    Segment::subscription_id("subscriptionId"),
    Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
    Segment::resource_group("resourceGroupName"),
    Segment::static_segment("staticProviders", "providers", "providers"),
    Segment::resource_provider("staticMicrosoftNetwork", "Microsoft.Network"),
    Segment::static_segment("staticDscpConfigurations", "dscpConfigurations", "dscpConfigurations"),
    Segment::user_specified("dscpConfigurationName", "dscpConfigurationValue"),
];

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DscpConfigurationId {
    pub subscription_id: String,
    pub resource_group_name: String,
    pub dscp_configuration_name: String,
}

impl DscpConfigurationId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        dscp_configuration_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
            dscp_configuration_name: dscp_configuration_name.into(),
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with(input, false)
    }

    pub fn parse_insensitively(input: &str) -> Result<Self> {
        Self::parse_with(input, true)
    }

    pub fn validate(input: &str) -> Result<()> {
        Self::parse(input).map(|_| ())
    }

    pub fn resource_group(&self) -> ResourceGroupId {
        ResourceGroupId::new(&self.subscription_id, &self.resource_group_name)
    }

    pub fn check(&self) -> Result<()> {
        check_segment(Self::KIND, "subscriptionId", &self.subscription_id)?;
        check_segment(Self::KIND, "resourceGroupName", &self.resource_group_name)?;
        check_segment(
            Self::KIND,
            "dscpConfigurationName",
            &self.dscp_configuration_name,
        )
    }
}

impl ResourceId for DscpConfigurationId {
    const KIND: &'static str = "Dscp Configuration";

    fn segments() -> &'static [Segment] {
        DSCP_CONFIGURATION_SEGMENTS
    }

    fn from_parse_result(parsed: &ParseResult) -> Result<Self> {
        Ok(Self {
            subscription_id: parsed.get(Self::KIND, "subscriptionId")?,
            resource_group_name: parsed.get(Self::KIND, "resourceGroupName")?,
            dscp_configuration_name: parsed.get(Self::KIND, "dscpConfigurationName")?,
        })
    }

    fn describe(&self) -> String {
        let components = [
            format!("Subscription: {:?}", self.subscription_id),
            format!("Resource Group Name: {:?}", self.resource_group_name),
            format!("Dscp Configuration Name: {:?}", self.dscp_configuration_name),
        ];
        format!("{} ({})", Self::KIND, components.join("\n"))
    }
}

impl fmt::Display for DscpConfigurationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/providers/Microsoft.Network/dscpConfigurations/{}",
            self.resource_group(),
            self.dscp_configuration_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let id = DscpConfigurationId::new("sub", "rg", "voice");
        assert_eq!(
            id.id(),
            "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Network/dscpConfigurations/voice"
        );
        assert_eq!(DscpConfigurationId::parse(&id.id()).unwrap(), id);
        assert!(id.check().is_ok());
    }

    #[test]
    fn test_service_casing() {
        let input =
            "/subscriptions/sub/resourcegroups/rg/providers/microsoft.network/dscpconfigurations/voice";
        assert!(DscpConfigurationId::parse(input).is_err());
        let id = DscpConfigurationId::parse_insensitively(input).unwrap();
        assert_eq!(id.dscp_configuration_name, "voice");
        assert!(id.describe().contains("Dscp Configuration Name: \"voice\""));
    }

    #[test]
    fn test_missing_name() {
        let err = DscpConfigurationId::parse(
            "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Network/dscpConfigurations",
        )
        .unwrap_err();
        assert!(err.to_string().contains("dscpConfigurationName"), "{err}");
    }
}
