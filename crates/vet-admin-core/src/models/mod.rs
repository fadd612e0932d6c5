//! Domain models for the admin panel.

use std::fmt;

/// Declares a closed enum whose variants map one-to-one onto wire strings.
///
/// Generates serde renames, `ALL`, `as_str`, `Display`, `FromStr` and [`WireEnum`].
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire representation.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl $crate::models::WireEnum for $name {
            fn variants() -> &'static [Self] {
                Self::ALL
            }

            fn wire_name(&self) -> &'static str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::PanelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err($crate::error::PanelError::InvalidValue(format!(
                        "{} is not a valid {}",
                        other,
                        stringify!($name)
                    ))),
                }
            }
        }
    };
}

mod address;
mod appointment;
mod doctor;
mod donation;
mod moderator;
mod pet_parent;
mod review;

pub use address::*;
pub use appointment::*;
pub use doctor::*;
pub use donation::*;
pub use moderator::*;
pub use pet_parent::*;
pub use review::*;

/// A closed set of values with fixed wire names.
pub trait WireEnum: Copy + 'static {
    fn variants() -> &'static [Self];

    fn wire_name(&self) -> &'static str;

    /// Wire names of every variant, in declaration order.
    fn wire_names() -> Vec<&'static str> {
        Self::variants().iter().map(|v| v.wire_name()).collect()
    }
}

/// A record held in a page's record store.
pub trait Record {
    /// Identifier, unique within one record store.
    type Id: PartialEq + Clone + fmt::Display + fmt::Debug;

    /// Human-readable record kind (for logs and errors).
    const KIND: &'static str;

    fn id(&self) -> &Self::Id;
}
