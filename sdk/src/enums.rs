//! String enumerations that tolerate values outside their vocabulary.
//!
//! Parsing is a case-insensitive lookup over the known constants; anything else is kept
//! verbatim in the `Other` case so a value added by the service round-trips unchanged.
//! `Display`, `FromStr` and the constant list come from the strum derives; the macro adds the
//! serde impls and `parse`. Crates invoking it need `strum` among their dependencies.

/// Declares an open string enum.
///
/// ```ignore
/// open_enum! {
///     pub enum ActivityState {
///         Active = "Active",
///         Inactive = "Inactive",
///     }
/// }
/// ```
#[macro_export]
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $literal:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Debug,
            PartialEq,
            Eq,
            Hash,
            $crate::strum_macros::Display,
            $crate::strum_macros::EnumString,
            $crate::strum_macros::VariantNames,
        )]
        #[strum(ascii_case_insensitive)]
        pub enum $name {
            $( $(#[$vmeta])* #[strum(serialize = $literal)] $variant, )+
            /// value outside the known vocabulary, kept verbatim
            #[strum(default)]
            Other(::std::string::String),
        }

        impl $name {
            /// Known constants in declaration order.
            pub fn possible_values() -> &'static [&'static str] {
                let variants = <Self as ::strum::VariantNames>::VARIANTS;
                // `Other` is always declared last
                &variants[..variants.len() - 1]
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $literal, )+
                    Self::Other(value) => value.as_str(),
                }
            }

            /// Never fails: unknown input becomes `Other(input)`.
            pub fn parse(input: &str) -> Self {
                match <Self as ::std::str::FromStr>::from_str(input) {
                    Ok(value) => value,
                    Err(_) => Self::Other(input.to_string()),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                let value = <::std::string::String as $crate::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Ok(Self::parse(&value))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    crate::open_enum! {
        pub enum Color {
            Red = "Red",
            DarkBlue = "DarkBlue",
        }
    }

    #[test]
    fn test_parse_known_values_case_insensitively() {
        assert_eq!(Color::parse("red"), Color::Red);
        assert_eq!(Color::parse("DARKBLUE"), Color::DarkBlue);
        assert_eq!("Red".parse::<Color>().unwrap(), Color::Red);
        assert_eq!(Color::possible_values(), &["Red", "DarkBlue"]);
    }

    #[test]
    fn test_unknown_value_passthrough() {
        let color = Color::parse("Ultraviolet");
        assert_eq!(color, Color::Other("Ultraviolet".to_string()));
        assert!(!color.is_known());
        assert_eq!(color.as_str(), "Ultraviolet");

        let decoded: Color = serde_json::from_str("\"Ultraviolet\"").unwrap();
        assert_eq!(serde_json::to_string(&decoded).unwrap(), "\"Ultraviolet\"");
    }

    #[test]
    fn test_serializes_canonical_spelling() {
        let decoded: Color = serde_json::from_str("\"darkblue\"").unwrap();
        assert_eq!(decoded, Color::DarkBlue);
        assert_eq!(serde_json::to_string(&decoded).unwrap(), "\"DarkBlue\"");
        assert_eq!(decoded.to_string(), "DarkBlue");
    }

    #[test]
    fn test_strum_derives() {
        use std::str::FromStr;
        use strum::VariantNames;

        assert_eq!(Color::VARIANTS, &["Red", "DarkBlue", "Other"]);
        assert_eq!(Color::from_str("dArKbLuE").unwrap(), Color::DarkBlue);
        assert_eq!(
            Color::from_str("Teal").unwrap(),
            Color::Other("Teal".to_string())
        );
        assert_eq!(Color::Other("Teal".to_string()).to_string(), "Teal");
        assert_eq!(Color::try_from("RED").unwrap(), Color::Red);
    }
}
