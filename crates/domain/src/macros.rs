//! Macro for implementing Display and FromStr for label enums
//!
//! Status bands, sort directions and date presets all travel as short string
//! labels between the reporting layer and the engine. This macro gives each
//! of them one canonical spelling for `Display` and a case-insensitive
//! `FromStr` that also accepts legacy spellings.
//!
//! # Example
//!
//! ```rust
//! use opsboard_domain::impl_domain_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Band {
//!     Low,
//!     High,
//! }
//!
//! impl_domain_label_conversions!(Band {
//!     Low => "low",
//!     High => "high" | "top",
//! });
//!
//! assert_eq!(Band::High.to_string(), "high");
//! assert_eq!("TOP".parse::<Band>(), Ok(Band::High));
//! ```

/// Implements Display and FromStr traits for label enums
///
/// This macro generates:
/// - Display trait: writes the canonical label of each variant
/// - FromStr trait: parses the canonical label or any listed alias,
///   ignoring ASCII case
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str | $alias...` - Mapping of enum variants to their
///   canonical label and optional accepted aliases
#[macro_export]
macro_rules! impl_domain_label_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let candidate = s.trim();
                $(
                    if candidate.eq_ignore_ascii_case($str)
                        $(|| candidate.eq_ignore_ascii_case($alias))*
                    {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
