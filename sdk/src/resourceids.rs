//! Segment based parsing and formatting of resource-manager IDs.
//!
//! An ID kind is described by an ordered list of [`Segment`]s. Static and resource-provider
//! segments are literals that must be present in the path; user-specified, subscription and
//! resource-group segments capture the path component found at their position.

use azrm_base::error::{ArmError, Result};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    Static,
    ResourceProvider,
    SubscriptionId,
    ResourceGroup,
    UserSpecified,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub name: &'static str,
    pub kind: SegmentKind,
    /// literal for static and resource-provider segments
    pub fixed_value: Option<&'static str>,
    pub example_value: &'static str,
}

impl Segment {
    pub const fn static_segment(
        name: &'static str,
        fixed_value: &'static str,
        example_value: &'static str,
    ) -> Self {
        Self {
            name,
            kind: SegmentKind::Static,
            fixed_value: Some(fixed_value),
            example_value,
        }
    }

    pub const fn resource_provider(name: &'static str, fixed_value: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::ResourceProvider,
            fixed_value: Some(fixed_value),
            example_value: fixed_value,
        }
    }

    pub const fn subscription_id(name: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::SubscriptionId,
            fixed_value: None,
            example_value: "12345678-1234-9876-4563-123456789012",
        }
    }

    pub const fn resource_group(name: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::ResourceGroup,
            fixed_value: None,
            example_value: "example-resource-group",
        }
    }

    pub const fn user_specified(name: &'static str, example_value: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::UserSpecified,
            fixed_value: None,
            example_value,
        }
    }

    fn is_fixed(&self) -> bool {
        self.fixed_value.is_some()
    }
}

/// Values captured by [`Parser::parse`], keyed by segment name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParseResult {
    pub parsed: HashMap<String, String>,
    pub raw_input: String,
}

impl ParseResult {
    /// Value of a user-specified segment; errors name the segment when it is absent.
    pub fn get(&self, kind: &str, segment: &str) -> Result<String> {
        match self.parsed.get(segment) {
            Some(v) if !v.is_empty() => Ok(v.clone()),
            _ => Err(segment_not_specified(kind, segment, &self.raw_input)),
        }
    }
}

fn segment_not_specified(kind: &str, segment: &str, input: &str) -> ArmError {
    ArmError::ResourceId(format!(
        "parsing {kind} ID {input:?}: the segment {segment:?} was not specified"
    ))
}

#[derive(Clone, Debug)]
pub struct Parser {
    kind: &'static str,
    segments: &'static [Segment],
}

impl Parser {
    pub fn new(kind: &'static str, segments: &'static [Segment]) -> Self {
        Self { kind, segments }
    }

    /// Split `input` against the segment list. `insensitively` relaxes literal segment
    /// matching (used for IDs returned by the service).
    pub fn parse(&self, input: &str, insensitively: bool) -> Result<ParseResult> {
        if input.is_empty() {
            return Err(ArmError::ResourceId(format!(
                "parsing {} ID: cannot parse an empty string",
                self.kind
            )));
        }
        let trimmed = input.strip_prefix('/').unwrap_or(input);
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        let components: Vec<&str> = trimmed.split('/').collect();

        let mut parsed = HashMap::with_capacity(self.segments.len());
        for (i, segment) in self.segments.iter().enumerate() {
            let Some(raw) = components.get(i).copied().filter(|c| !c.is_empty()) else {
                return Err(self.missing(segment, input));
            };
            match segment.fixed_value {
                Some(fixed) => {
                    let matched = if insensitively {
                        raw.eq_ignore_ascii_case(fixed)
                    } else {
                        raw == fixed
                    };
                    if !matched {
                        return Err(self.missing(segment, input));
                    }
                    parsed.insert(segment.name.to_string(), fixed.to_string());
                }
                None => {
                    parsed.insert(segment.name.to_string(), raw.to_string());
                }
            }
        }
        if components.len() > self.segments.len() {
            return Err(ArmError::ResourceId(format!(
                "parsing {} ID {input:?}: unexpected trailing segments {:?}",
                self.kind,
                components[self.segments.len()..].join("/")
            )));
        }
        Ok(ParseResult {
            parsed,
            raw_input: input.to_string(),
        })
    }

    fn missing(&self, segment: &Segment, input: &str) -> ArmError {
        if segment.is_fixed() {
            ArmError::ResourceId(format!(
                "parsing {} ID {input:?}: the segment {:?} was not found, \
                 expected {:?} (example: {})",
                self.kind,
                segment.name,
                segment.fixed_value.unwrap_or_default(),
                example_id(self.segments),
            ))
        } else {
            segment_not_specified(self.kind, segment.name, input)
        }
    }
}

/// Example path built from the segments' example values.
pub fn example_id(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| format!("/{}", s.fixed_value.unwrap_or(s.example_value)))
        .collect()
}

/// Reject a component that cannot be formatted as a single path segment.
pub fn check_segment(kind: &str, name: &str, value: &str) -> Result<()> {
    if value.is_empty() || value.contains('/') {
        return Err(ArmError::InvalidParameter(format!(
            "{kind}: {name} must be a non-empty path segment without '/', got {value:?}"
        )));
    }
    Ok(())
}

/// A typed resource-manager ID.
pub trait ResourceId: Sized + std::fmt::Display {
    /// human readable kind, e.g. "Pipeline"
    const KIND: &'static str;

    fn segments() -> &'static [Segment];

    fn from_parse_result(parsed: &ParseResult) -> Result<Self>;

    /// Canonical path form of the ID.
    fn id(&self) -> String {
        self.to_string()
    }

    /// Multi-line description listing every user-specified component.
    fn describe(&self) -> String;

    fn parse_with(input: &str, insensitively: bool) -> Result<Self> {
        let parsed = Parser::new(Self::KIND, Self::segments()).parse(input, insensitively)?;
        Self::from_parse_result(&parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SEGMENTS: &[Segment] = &[
        Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_segment("staticProviders", "providers", "providers"),
        Segment::resource_provider("staticMicrosoftWeb", "Microsoft.Web"),
        Segment::static_segment("staticSites", "sites", "sites"),
        Segment::user_specified("siteName", "siteValue"),
    ];

    fn parser() -> Parser {
        Parser::new("Site", SEGMENTS)
    }

    #[test]
    fn test_parse_captures_user_segments() {
        let r = parser()
            .parse("/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Web/sites/app", false)
            .unwrap();
        assert_eq!(r.get("Site", "subscriptionId").unwrap(), "sub");
        assert_eq!(r.get("Site", "resourceGroupName").unwrap(), "rg");
        assert_eq!(r.get("Site", "siteName").unwrap(), "app");
    }

    #[test]
    fn test_case_sensitivity_of_literals() {
        let input = "/SUBSCRIPTIONS/sub/resourcegroups/rg/providers/microsoft.web/SITES/app";
        let err = parser().parse(input, false).unwrap_err();
        assert!(err.to_string().contains("staticSubscriptions"), "{err}");
        let r = parser().parse(input, true).unwrap();
        assert_eq!(r.get("Site", "siteName").unwrap(), "app");
        assert_eq!(r.parsed.get("staticMicrosoftWeb").unwrap(), "Microsoft.Web");
    }

    #[test]
    fn test_missing_segments_are_named() {
        let err = parser()
            .parse("/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Web/sites", false)
            .unwrap_err();
        assert!(err.to_string().contains("\"siteName\" was not specified"), "{err}");

        let err = parser().parse("", false).unwrap_err();
        assert!(err.to_string().contains("empty string"));

        let err = parser()
            .parse("/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Web/sites/a/b", false)
            .unwrap_err();
        assert!(err.to_string().contains("trailing"));
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let base = "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Web/sites/app";
        let r = parser().parse(&format!("{base}/"), false).unwrap();
        assert_eq!(r.get("Site", "siteName").unwrap(), "app");

        let err = parser().parse(&format!("{base}//"), false).unwrap_err();
        assert!(err.to_string().contains("trailing"), "{err}");
    }

    #[test]
    fn test_check_segment() {
        assert!(check_segment("Site", "siteName", "app").is_ok());
        assert!(check_segment("Site", "siteName", "").is_err());
        let err = check_segment("Site", "siteName", "a/b").unwrap_err();
        assert!(err.to_string().contains("siteName"));
    }

    #[test]
    fn test_example_id() {
        assert_eq!(
            example_id(SEGMENTS),
            "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group/providers/Microsoft.Web/sites/siteValue"
        );
    }
}
