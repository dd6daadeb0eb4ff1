use azrm_base::error::Result;
use azrm_sdk::commonids::ResourceGroupId;
use azrm_sdk::resourceids::{check_segment, ParseResult, ResourceId, Segment};
use std::fmt;

static FACTORY_SEGMENTS: &[Segment] = &[
    Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
    Segment::subscription_id("subscriptionId"),
    Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
    Segment::resource_group("resourceGroupName"),
    Segment::static_segment("staticProviders", "providers", "providers"),
    Segment::resource_provider("staticMicrosoftDataFactory", "Microsoft.DataFactory"),
    Segment::static_segment("staticFactories", "factories", "factories"),
    Segment::user_specified("factoryName", "factoryValue"),
];

static PIPELINE_SEGMENTS: &[Segment] = &[
    Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
    Segment::subscription_id("subscriptionId"),
    Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
    Segment::resource_group("resourceGroupName"),
    Segment::static_segment("staticProviders", "providers", "providers"),
    Segment::resource_provider("staticMicrosoftDataFactory", "Microsoft.DataFactory"),
    Segment::static_segment("staticFactories", "factories", "factories"),
    Segment::user_specified("factoryName", "factoryValue"),
    Segment::static_segment("staticPipelines", "pipelines", "pipelines"),
    Segment::user_specified("pipelineName", "pipelineValue"),
];

/// A Data Factory instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FactoryId {
    pub subscription_id: String,
    pub resource_group_name: String,
    pub factory_name: String,
}

impl FactoryId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        factory_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
            factory_name: factory_name.into(),
        }
    }

    /// Parse user input; literal segments must match exactly.
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with(input, false)
    }

    /// Parse an ID returned by the service; literal segments match in any case.
    pub fn parse_insensitively(input: &str) -> Result<Self> {
        Self::parse_with(input, true)
    }

    pub fn validate(input: &str) -> Result<()> {
        Self::parse(input).map(|_| ())
    }

    pub fn resource_group(&self) -> ResourceGroupId {
        ResourceGroupId::new(&self.subscription_id, &self.resource_group_name)
    }

    pub fn pipeline(&self, pipeline_name: impl Into<String>) -> PipelineId {
        PipelineId {
            subscription_id: self.subscription_id.clone(),
            resource_group_name: self.resource_group_name.clone(),
            factory_name: self.factory_name.clone(),
            pipeline_name: pipeline_name.into(),
        }
    }
}

impl ResourceId for FactoryId {
    const KIND: &'static str = "Factory";

    fn segments() -> &'static [Segment] {
        FACTORY_SEGMENTS
    }

    fn from_parse_result(parsed: &ParseResult) -> Result<Self> {
        Ok(Self {
            subscription_id: parsed.get(Self::KIND, "subscriptionId")?,
            resource_group_name: parsed.get(Self::KIND, "resourceGroupName")?,
            factory_name: parsed.get(Self::KIND, "factoryName")?,
        })
    }

    fn describe(&self) -> String {
        let components = [
            format!("Subscription: {:?}", self.subscription_id),
            format!("Resource Group Name: {:?}", self.resource_group_name),
            format!("Factory Name: {:?}", self.factory_name),
        ];
        format!("{} ({})", Self::KIND, components.join("\n"))
    }
}

impl fmt::Display for FactoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.DataFactory/factories/{}",
            self.subscription_id, self.resource_group_name, self.factory_name
        )
    }
}

/// A pipeline inside a Data Factory.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PipelineId {
    pub subscription_id: String,
    pub resource_group_name: String,
    pub factory_name: String,
    pub pipeline_name: String,
}

impl PipelineId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        factory_name: impl Into<String>,
        pipeline_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
            factory_name: factory_name.into(),
            pipeline_name: pipeline_name.into(),
        }
    }

    /// Parse user input; literal segments must match exactly.
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with(input, false)
    }

    /// Parse an ID returned by the service; literal segments match in any case.
    pub fn parse_insensitively(input: &str) -> Result<Self> {
        Self::parse_with(input, true)
    }

    pub fn validate(input: &str) -> Result<()> {
        Self::parse(input).map(|_| ())
    }

    pub fn factory(&self) -> FactoryId {
        FactoryId::new(
            &self.subscription_id,
            &self.resource_group_name,
            &self.factory_name,
        )
    }

    /// Checks every component can be formatted into a parseable ID.
    pub fn check(&self) -> Result<()> {
        check_segment(Self::KIND, "subscriptionId", &self.subscription_id)?;
        check_segment(Self::KIND, "resourceGroupName", &self.resource_group_name)?;
        check_segment(Self::KIND, "factoryName", &self.factory_name)?;
        check_segment(Self::KIND, "pipelineName", &self.pipeline_name)
    }
}

impl ResourceId for PipelineId {
    const KIND: &'static str = "Pipeline";

    fn segments() -> &'static [Segment] {
        PIPELINE_SEGMENTS
    }

    fn from_parse_result(parsed: &ParseResult) -> Result<Self> {
        Ok(Self {
            subscription_id: parsed.get(Self::KIND, "subscriptionId")?,
            resource_group_name: parsed.get(Self::KIND, "resourceGroupName")?,
            factory_name: parsed.get(Self::KIND, "factoryName")?,
            pipeline_name: parsed.get(Self::KIND, "pipelineName")?,
        })
    }

    fn describe(&self) -> String {
        let components = [
            format!("Subscription: {:?}", self.subscription_id),
            format!("Resource Group Name: {:?}", self.resource_group_name),
            format!("Factory Name: {:?}", self.factory_name),
            format!("Pipeline Name: {:?}", self.pipeline_name),
        ];
        format!("{} ({})", Self::KIND, components.join("\n"))
    }
}

impl fmt::Display for PipelineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/pipelines/{}", self.factory(), self.pipeline_name)
    }
}
