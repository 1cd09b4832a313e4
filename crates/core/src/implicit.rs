//! Opt-in primitive-to-unit conversion
//!
//! Importing [`Wrap`] enables `primitive.wrap::<Unit>()` in the importing
//! module only. Without the import, a primitive where a unit is expected is a
//! type error and the only way in is [`Opaque::construct`] or `Unit::new`.
//!
//! ```
//! use typed_units_core::core_types::physics::{Time, Velocity};
//! use typed_units_core::core_types::text::TString1;
//! use typed_units_core::implicit::Wrap;
//!
//! let v: Velocity = 13.0_f64.wrap();
//! let t = 1.0_f64.wrap::<Time>();
//! let s: TString1 = "Hello".wrap();
//! assert_eq!(v.as_double() * t.as_double(), 13.0);
//! assert_eq!(s.as_str(), "Hello");
//! ```
//!
//! Numeric literals need a suffix (`13.0_f64`) since the receiver type must be
//! known before the method is found.

use crate::core_types::registry::{Opaque, RootCategory};

/// Primitive that can be wrapped into any unit of the matching category.
pub trait Wrap {
    /// Category representation this primitive converts into
    type Repr;

    fn wrap<T>(self) -> T
    where
        T: Opaque,
        T::Category: RootCategory<Repr = Self::Repr>;
}

impl Wrap for f64 {
    type Repr = f64;

    #[inline]
    fn wrap<T>(self) -> T
    where
        T: Opaque,
        T::Category: RootCategory<Repr = Self::Repr>,
    {
        T::construct(self)
    }
}

impl Wrap for i64 {
    type Repr = i64;

    #[inline]
    fn wrap<T>(self) -> T
    where
        T: Opaque,
        T::Category: RootCategory<Repr = Self::Repr>,
    {
        T::construct(self)
    }
}

impl Wrap for String {
    type Repr = String;

    #[inline]
    fn wrap<T>(self) -> T
    where
        T: Opaque,
        T::Category: RootCategory<Repr = Self::Repr>,
    {
        T::construct(self)
    }
}

impl Wrap for &str {
    type Repr = String;

    #[inline]
    fn wrap<T>(self) -> T
    where
        T: Opaque,
        T::Category: RootCategory<Repr = Self::Repr>,
    {
        T::construct(self.to_owned())
    }
}
