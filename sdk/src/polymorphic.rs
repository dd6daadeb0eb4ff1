//! Discriminated-union decoding.
//!
//! A union is a closed Rust enum with one variant per known wire shape plus a `Raw` variant
//! for shapes this crate does not know about yet. Every union owns a static dispatch table
//! (discriminator literal -> decode function); decoding peeks at the `type` field, picks the
//! first entry whose literal matches case-insensitively and decodes the whole object into that
//! shape. Unmatched objects become `Raw` values carrying the base projection, the literal
//! discriminator and the complete field map.
//!
//! Use [`polymorphic_union!`](crate::polymorphic_union) to declare a union.

use azrm_base::error::{ArmError, Result};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

/// JSON field carrying the discriminator
pub const DISCRIMINATOR: &str = "type";

/// One entry of a union's dispatch table.
pub struct Variant<U> {
    pub literal: &'static str,
    pub decode: fn(Value) -> std::result::Result<U, serde_json::Error>,
}

/// Fallback value for an unrecognized discriminator.
#[derive(Clone, Debug, PartialEq)]
pub struct Raw<B> {
    /// fields shared by every variant of the union
    pub base: B,
    /// discriminator as found in the input (empty when absent)
    pub discriminator: String,
    /// every field of the original object, discriminator included
    pub values: Map<String, Value>,
}

pub trait Polymorphic: Sized + 'static {
    /// union name used in error messages
    const NAME: &'static str;
    /// shared-fields projection, also used to decode unknown shapes
    type Base: DeserializeOwned;

    /// dispatch table, in match priority order
    fn variants() -> &'static [Variant<Self>];

    fn from_raw(raw: Raw<Self::Base>) -> Self;

    /// The captured fallback value, for shapes outside the dispatch table.
    fn as_raw(&self) -> Option<&Raw<Self::Base>>;
}

/// Decode a variant struct and convert it into its union. Used as the table decode function.
pub fn decode_as<T, U>(value: Value) -> std::result::Result<U, serde_json::Error>
where
    T: DeserializeOwned + Into<U>,
{
    serde_json::from_value::<T>(value).map(Into::into)
}

/// Case-insensitive literal comparison (simple Unicode folding).
pub fn literal_matches(literal: &str, discriminator: &str) -> bool {
    literal.eq_ignore_ascii_case(discriminator)
        || literal
            .chars()
            .flat_map(char::to_lowercase)
            .eq(discriminator.chars().flat_map(char::to_lowercase))
}

/// Discriminator of a decoded object. Missing or null is the empty string; non-string values
/// are stringified as JSON text.
pub fn discriminator_of(values: &Map<String, Value>) -> String {
    match values.get(DISCRIMINATOR) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub fn find_variant<U: Polymorphic>(discriminator: &str) -> Option<&'static Variant<U>> {
    U::variants()
        .iter()
        .find(|v| literal_matches(v.literal, discriminator))
}

/// Decode an already parsed JSON value. `null` yields `None`.
pub fn decode_value<U: Polymorphic>(value: Value) -> Result<Option<U>> {
    if value.is_null() {
        return Ok(None);
    }
    let values: Map<String, Value> =
        serde_json::from_value(value).map_err(|e| ArmError::decode(U::NAME, e))?;
    let discriminator = discriminator_of(&values);

    if let Some(variant) = find_variant::<U>(&discriminator) {
        // known variants carry the canonical literal, whatever spelling matched
        let mut values = values;
        values.insert(
            DISCRIMINATOR.to_string(),
            Value::String(variant.literal.to_string()),
        );
        return (variant.decode)(Value::Object(values))
            .map(Some)
            .map_err(|e| ArmError::decode(format!("{} {:?}", U::NAME, variant.literal), e));
    }

    // the base projection always sees the discriminator as a string
    let mut base_fields = values.clone();
    base_fields.insert(
        DISCRIMINATOR.to_string(),
        Value::String(discriminator.clone()),
    );
    let base = serde_json::from_value::<U::Base>(Value::Object(base_fields))
        .map_err(|e| ArmError::decode(format!("{} (raw {:?})", U::NAME, discriminator), e))?;
    Ok(Some(U::from_raw(Raw {
        base,
        discriminator,
        values,
    })))
}

/// Decode raw bytes. Empty (or whitespace only) input and `null` yield `None`.
pub fn decode_slice<U: Polymorphic>(input: &[u8]) -> Result<Option<U>> {
    if input.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let value: Value = serde_json::from_slice(input).map_err(|e| ArmError::decode(U::NAME, e))?;
    decode_value(value)
}

/// Serialize a known variant and force its discriminator to `literal`.
pub fn encode_variant<T: Serialize>(union: &str, literal: &str, variant: &T) -> Result<Value> {
    let mut value = serde_json::to_value(variant)
        .map_err(|e| ArmError::encode(format!("{union} {literal:?}"), e))?;
    match value.as_object_mut() {
        Some(fields) => {
            fields.insert(DISCRIMINATOR.to_string(), Value::String(literal.to_string()));
            Ok(value)
        }
        None => Err(ArmError::InvalidParameter(format!(
            "{union} {literal:?} did not serialize to a JSON object"
        ))),
    }
}

/// Declares a union enum, its dispatch table and its serde implementations.
///
/// Every variant type must carry the shared fields in a field named `base` of the union's base
/// type (usually `#[serde(flatten)]`).
///
/// ```ignore
/// polymorphic_union! {
///     /// Compression settings
///     pub enum CompressionReadSettings: CompressionReadSettingsBase {
///         TarReadSettings(TarReadSettings) = "TarReadSettings",
///         ZipDeflateReadSettings(ZipDeflateReadSettings) = "ZipDeflateReadSettings",
///     }
/// }
/// ```
#[macro_export]
macro_rules! polymorphic_union {
    (
        $(#[$meta:meta])*
        pub enum $union:ident : $base:ty {
            $( $variant:ident ( $ty:ty ) = $literal:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        #[allow(clippy::large_enum_variant)]
        pub enum $union {
            $( $variant($ty), )+
            /// shape not known to this crate, kept as received
            Raw($crate::polymorphic::Raw<$base>),
        }

        impl $union {
            /// Discriminator this value encodes with.
            pub fn discriminator(&self) -> &str {
                match self {
                    $( Self::$variant(_) => $literal, )+
                    Self::Raw(raw) => raw.discriminator.as_str(),
                }
            }

            /// Shared fields of the value.
            pub fn base(&self) -> &$base {
                match self {
                    $( Self::$variant(v) => &v.base, )+
                    Self::Raw(raw) => &raw.base,
                }
            }

            pub fn is_raw(&self) -> bool {
                matches!(self, Self::Raw(_))
            }
        }

        impl $crate::polymorphic::Polymorphic for $union {
            const NAME: &'static str = stringify!($union);
            type Base = $base;

            fn variants() -> &'static [$crate::polymorphic::Variant<Self>] {
                static VARIANTS: &[$crate::polymorphic::Variant<$union>] = &[
                    $(
                        $crate::polymorphic::Variant {
                            literal: $literal,
                            decode: $crate::polymorphic::decode_as::<$ty, $union>,
                        },
                    )+
                ];
                VARIANTS
            }

            fn from_raw(raw: $crate::polymorphic::Raw<$base>) -> Self {
                Self::Raw(raw)
            }

            fn as_raw(&self) -> ::std::option::Option<&$crate::polymorphic::Raw<$base>> {
                match self {
                    Self::Raw(raw) => ::std::option::Option::Some(raw),
                    _ => ::std::option::Option::None,
                }
            }
        }

        $(
            impl ::std::convert::From<$ty> for $union {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+

        impl $crate::serde::Serialize for $union {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                let encoded = match self {
                    $(
                        Self::$variant(v) => $crate::polymorphic::encode_variant(
                            stringify!($union),
                            $literal,
                            v,
                        ),
                    )+
                    Self::Raw(raw) => {
                        return $crate::serde::Serialize::serialize(&raw.values, serializer)
                    }
                };
                let value = encoded.map_err(<S::Error as $crate::serde::ser::Error>::custom)?;
                $crate::serde::Serialize::serialize(&value, serializer)
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $union {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                let value = <$crate::serde_json::Value as $crate::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                $crate::polymorphic::decode_value::<Self>(value)
                    .map_err(<D::Error as $crate::serde::de::Error>::custom)?
                    .ok_or_else(|| {
                        <D::Error as $crate::serde::de::Error>::custom(concat!(
                            "expected ",
                            stringify!($union),
                            " object, found null"
                        ))
                    })
            }
        }
    };
}
