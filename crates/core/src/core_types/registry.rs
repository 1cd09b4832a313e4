//! Unit-type registry: root categories and the `Opaque` contract
//!
//! Every concrete unit type is a single private field wrapped in a
//! `#[repr(transparent)]` struct, so its runtime layout is exactly that of its
//! primitive while its static identity is distinct from the primitive and from
//! every sibling type.
//!
//! # Design Philosophy
//! - A root category (`DoubleBased`, `StringBased`, `IntBased`) carries no data;
//!   it only fixes the primitive and scopes which generic operations apply
//! - Construction is total: any primitive is accepted
//! - No `From<primitive>` or `Deref` impls, so nothing coerces silently
//! - Same-type `+` is guaranteed for every registered type (`Opaque: Add`)
//! - Serde support is transparent: a unit serializes exactly like its primitive
//!
//! # Usage
//! ```
//! use typed_units_core::core_types::registry::{sum, Opaque};
//! use typed_units_core::core_types::physics::Velocity;
//!
//! let v = Velocity::construct(13.0);
//! assert_eq!(v.into_inner(), 13.0);
//! assert_eq!(sum(v, Velocity::new(20.0)), Velocity::new(33.0));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

// ============================================================================
// ROOT CATEGORIES
// ============================================================================

/// Marker for a family of unit types sharing one primitive representation.
pub trait RootCategory: Copy + fmt::Debug + Send + Sync + 'static {
    /// Primitive shared by every member of the family.
    type Repr: Clone + fmt::Debug + PartialEq + Send + Sync + 'static;

    /// Category name, used in diagnostics.
    const NAME: &'static str;
}

/// Family of units over `f64` (the physics quantities).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DoubleBased;

impl RootCategory for DoubleBased {
    type Repr = f64;
    const NAME: &'static str = "DoubleBased";
}

/// Family of units over `String`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StringBased;

impl RootCategory for StringBased {
    type Repr = String;
    const NAME: &'static str = "StringBased";
}

/// Family of units over `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntBased;

impl RootCategory for IntBased {
    type Repr = i64;
    const NAME: &'static str = "IntBased";
}

// ============================================================================
// CONCRETE UNIT CONTRACT
// ============================================================================

/// Primitive representation of the unit type `T`.
pub type Repr<T> = <<T as Opaque>::Category as RootCategory>::Repr;

/// Contract implemented by every concrete unit type.
///
/// `construct` and `into_inner` are the only sanctioned crossings between a
/// unit and its primitive. Both are total and pure.
pub trait Opaque:
    Clone + fmt::Debug + fmt::Display + PartialEq + Add<Output = Self> + Send + Sync + 'static
{
    /// Root category this type belongs to.
    type Category: RootCategory;

    /// Type name, used in diagnostics and by the runtime transformer table.
    const NAME: &'static str;

    /// Wrap a primitive.
    fn construct(repr: Repr<Self>) -> Self;

    /// Unwrap to the primitive.
    fn into_inner(self) -> Repr<Self>;

    /// Borrow the primitive.
    fn repr(&self) -> &Repr<Self>;
}

/// Add two values of the same unit type.
#[inline]
pub fn sum<T: Opaque>(a: T, b: T) -> T {
    a + b
}

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
/// NaN sorts above every other value
#[inline]
pub(crate) fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// DECLARATION MACRO
// ============================================================================

/// Declare a concrete unit type in one of the three root categories.
///
/// Emits the transparent struct, inherent constructors, `Display`, the
/// `Opaque` impl, same-type `Add`/`AddAssign` and `Sum`.
macro_rules! opaque_type {
    (
        $(#[$meta:meta])*
        $name:ident: DoubleBased, symbol = $symbol:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(f64);

        impl $name {
            /// Additive identity
            pub const ZERO: $name = $name(0.0);

            /// Printable unit symbol (empty for dimensionless values)
            pub const SYMBOL: &'static str = $symbol;

            /// Wrap a raw `f64`
            #[inline]
            #[must_use]
            pub const fn new(value: f64) -> Self {
                $name(value)
            }

            /// Raw `f64` value
            #[inline]
            #[must_use]
            pub const fn as_double(self) -> f64 {
                self.0
            }

            /// Consume into the raw `f64`
            #[inline]
            #[must_use]
            pub const fn into_inner(self) -> f64 {
                self.0
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                crate::core_types::registry::f64_total_cmp(self.0, other.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)?;
                if !Self::SYMBOL.is_empty() {
                    write!(f, " {}", Self::SYMBOL)?;
                }
                Ok(())
            }
        }

        impl crate::core_types::registry::Opaque for $name {
            type Category = crate::core_types::registry::DoubleBased;
            const NAME: &'static str = stringify!($name);

            #[inline]
            fn construct(repr: f64) -> Self {
                $name(repr)
            }

            #[inline]
            fn into_inner(self) -> f64 {
                self.0
            }

            #[inline]
            fn repr(&self) -> &f64 {
                &self.0
            }
        }

        impl std::ops::Add for $name {
            type Output = $name;
            #[inline]
            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl std::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: $name) {
                self.0 += rhs.0;
            }
        }

        impl std::iter::Sum for $name {
            fn sum<I: Iterator<Item = $name>>(iter: I) -> $name {
                iter.fold($name::ZERO, std::ops::Add::add)
            }
        }
    };

    (
        $(#[$meta:meta])*
        $name:ident: StringBased
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a string
            #[inline]
            pub fn new(value: impl Into<String>) -> Self {
                $name(value.into())
            }

            /// Borrow the text
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume into the owned `String`
            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl crate::core_types::registry::Opaque for $name {
            type Category = crate::core_types::registry::StringBased;
            const NAME: &'static str = stringify!($name);

            #[inline]
            fn construct(repr: String) -> Self {
                $name(repr)
            }

            #[inline]
            fn into_inner(self) -> String {
                self.0
            }

            #[inline]
            fn repr(&self) -> &String {
                &self.0
            }
        }

        // Concatenation
        impl std::ops::Add for $name {
            type Output = $name;
            #[inline]
            fn add(self, rhs: $name) -> $name {
                $name(self.0 + &rhs.0)
            }
        }

        impl std::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: $name) {
                self.0.push_str(&rhs.0);
            }
        }

        impl std::iter::Sum for $name {
            fn sum<I: Iterator<Item = $name>>(iter: I) -> $name {
                iter.fold($name::default(), std::ops::Add::add)
            }
        }
    };

    (
        $(#[$meta:meta])*
        $name:ident: IntBased
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Additive identity
            pub const ZERO: $name = $name(0);

            /// Wrap a raw `i64`
            #[inline]
            #[must_use]
            pub const fn new(value: i64) -> Self {
                $name(value)
            }

            /// Raw `i64` value
            #[inline]
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }

            /// Consume into the raw `i64`
            #[inline]
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl crate::core_types::registry::Opaque for $name {
            type Category = crate::core_types::registry::IntBased;
            const NAME: &'static str = stringify!($name);

            #[inline]
            fn construct(repr: i64) -> Self {
                $name(repr)
            }

            #[inline]
            fn into_inner(self) -> i64 {
                self.0
            }

            #[inline]
            fn repr(&self) -> &i64 {
                &self.0
            }
        }

        // Two's-complement wrap, same result in every build profile
        impl std::ops::Add for $name {
            type Output = $name;
            #[inline]
            fn add(self, rhs: $name) -> $name {
                $name(self.0.wrapping_add(rhs.0))
            }
        }

        impl std::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: $name) {
                self.0 = self.0.wrapping_add(rhs.0);
            }
        }

        impl std::iter::Sum for $name {
            fn sum<I: Iterator<Item = $name>>(iter: I) -> $name {
                iter.fold($name::ZERO, std::ops::Add::add)
            }
        }
    };
}

pub(crate) use opaque_type;
