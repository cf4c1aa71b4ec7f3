//! Macro for implementing Display and FromStr for label enums
//!
//! Stage and kind enums are printed in reports and logs and parsed back from
//! CLI flags; this macro keeps both directions in one mapping.
//!
//! # Example
//!
//! ```rust
//! use podpublish_domain::impl_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Side {
//!     Front,
//!     Back,
//! }
//!
//! impl_label_conversions!(Side {
//!     Front => "front",
//!     Back => "back",
//! });
//!
//! assert_eq!(Side::Front.to_string(), "front");
//! assert_eq!("BACK".parse::<Side>(), Ok(Side::Back));
//! ```

/// Implements Display and FromStr traits for label enums
///
/// - Display writes the mapped lowercase label
/// - FromStr parses case-insensitively and names the enum in its error
#[macro_export]
macro_rules! impl_label_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
