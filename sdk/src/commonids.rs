//! IDs shared by every resource provider.

use crate::resourceids::{ParseResult, ResourceId, Segment};
use azrm_base::error::Result;
use std::fmt;

/// `/subscriptions/{subscriptionId}`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId {
    pub subscription_id: String,
}

impl SubscriptionId {
    pub fn new(subscription_id: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with(input, false)
    }

    pub fn parse_insensitively(input: &str) -> Result<Self> {
        Self::parse_with(input, true)
    }
}

static SUBSCRIPTION_SEGMENTS: &[Segment] = &[
    Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
    Segment::subscription_id("subscriptionId"),
];

impl ResourceId for SubscriptionId {
    const KIND: &'static str = "Subscription";

    fn segments() -> &'static [Segment] {
        SUBSCRIPTION_SEGMENTS
    }

    fn from_parse_result(parsed: &ParseResult) -> Result<Self> {
        Ok(Self {
            subscription_id: parsed.get(Self::KIND, "subscriptionId")?,
        })
    }

    fn describe(&self) -> String {
        format!("Subscription (Subscription: {:?})", self.subscription_id)
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/subscriptions/{}", self.subscription_id)
    }
}

/// `/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceGroupId {
    pub subscription_id: String,
    pub resource_group_name: String,
}

impl ResourceGroupId {
    pub fn new(subscription_id: impl Into<String>, resource_group_name: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with(input, false)
    }

    pub fn parse_insensitively(input: &str) -> Result<Self> {
        Self::parse_with(input, true)
    }

    pub fn subscription(&self) -> SubscriptionId {
        SubscriptionId::new(self.subscription_id.clone())
    }
}

static RESOURCE_GROUP_SEGMENTS: &[Segment] = &[
    Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
    Segment::subscription_id("subscriptionId"),
    Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
    Segment::resource_group("resourceGroupName"),
];

impl ResourceId for ResourceGroupId {
    const KIND: &'static str = "Resource Group";

    fn segments() -> &'static [Segment] {
        RESOURCE_GROUP_SEGMENTS
    }

    fn from_parse_result(parsed: &ParseResult) -> Result<Self> {
        Ok(Self {
            subscription_id: parsed.get(Self::KIND, "subscriptionId")?,
            resource_group_name: parsed.get(Self::KIND, "resourceGroupName")?,
        })
    }

    fn describe(&self) -> String {
        format!(
            "Resource Group (Subscription: {:?}\nResource Group Name: {:?})",
            self.subscription_id, self.resource_group_name
        )
    }
}

impl fmt::Display for ResourceGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/subscriptions/{}/resourceGroups/{}",
            self.subscription_id, self.resource_group_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_round_trip() {
        let id = SubscriptionId::new("0000-1111");
        assert_eq!(id.id(), "/subscriptions/0000-1111");
        assert_eq!(SubscriptionId::parse(&id.id()).unwrap(), id);
        assert!(SubscriptionId::parse("/subscriptions").is_err());
    }

    #[test]
    fn test_resource_group_round_trip() {
        let id = ResourceGroupId::new("sub", "my-rg");
        assert_eq!(id.to_string(), "/subscriptions/sub/resourceGroups/my-rg");
        assert_eq!(ResourceGroupId::parse(&id.id()).unwrap(), id);
        let relaxed = "/Subscriptions/sub/RESOURCEGROUPS/my-rg";
        assert_eq!(ResourceGroupId::parse_insensitively(relaxed).unwrap(), id);
        assert_eq!(id.subscription(), SubscriptionId::new("sub"));
        assert!(id.describe().contains("Resource Group Name: \"my-rg\""));
    }
}
