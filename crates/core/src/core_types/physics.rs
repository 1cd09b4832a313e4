//! Physics quantities over `f64`
//!
//! Seven `DoubleBased` unit types and the closed product table between them:
//!
//! | lhs            | rhs      | output   |
//! |----------------|----------|----------|
//! | `Acceleration` | `Time`   | `Velocity` |
//! | `Mass`         | `Velocity` | `Momentum` |
//! | `Momentum`     | `Velocity` | `Energy` |
//! | `Constant`     | any `T`  | `T`      |
//!
//! # Usage
//! ```
//! use typed_units_core::core_types::physics::{velocity, Acceleration, Time, Velocity};
//!
//! let v = velocity(Velocity::new(10.0), Acceleration::new(10.0), Time::new(1.0));
//! assert_eq!((v + Velocity::new(13.0)).as_double(), 33.0);
//! ```

use crate::core_types::registry::{opaque_type, DoubleBased, Opaque};
use crate::ops::{product_table, ProductEntry};
use serde::{Deserialize, Serialize};
use std::ops::Mul;

opaque_type! {
    /// Velocity in metres per second
    Velocity: DoubleBased, symbol = "m/s"
}

opaque_type! {
    /// Acceleration in metres per second squared
    Acceleration: DoubleBased, symbol = "m/s²"
}

opaque_type! {
    /// Elapsed time in seconds
    Time: DoubleBased, symbol = "s"
}

opaque_type! {
    /// Mass in kilograms
    Mass: DoubleBased, symbol = "kg"
}

opaque_type! {
    /// Linear momentum in kilogram metres per second
    Momentum: DoubleBased, symbol = "kg·m/s"
}

opaque_type! {
    /// Energy in joules
    Energy: DoubleBased, symbol = "J"
}

opaque_type! {
    /// Pure scalar. Multiplies any `DoubleBased` unit and keeps its type.
    Constant: DoubleBased, symbol = ""
}

product_table! {
    /// Every declared per-pair product, in declaration order
    pub const PRODUCTS = {
        Acceleration * Time => Velocity,
        Mass * Velocity => Momentum,
        Momentum * Velocity => Energy,
    }
}

/// The one generic row: `Constant * T -> T`.
pub const SCALAR_PRODUCT: ProductEntry = ProductEntry {
    lhs: "Constant",
    rhs: "T",
    output: "T",
};

impl<T> Mul<T> for Constant
where
    T: Opaque<Category = DoubleBased>,
{
    type Output = T;

    #[inline]
    fn mul(self, rhs: T) -> T {
        T::construct(self.0 * rhs.into_inner())
    }
}

/// Final velocity after accelerating for `t`: `u + a·t`
#[inline]
pub fn velocity(u: Velocity, a: Acceleration, t: Time) -> Velocity {
    u + a * t
}

/// Momentum `m·v`
#[inline]
pub fn momentum(m: Mass, v: Velocity) -> Momentum {
    m * v
}

/// Kinetic energy `½·m·v²`
#[inline]
pub fn kinetic_energy(m: Mass, v: Velocity) -> Energy {
    Constant::new(0.5) * (m * v * v)
}

/// Explicit inputs for [`energy`].
///
/// `energy` is the energy already stored in the body; `mass` is accelerated
/// from rest at `acceleration` for `time`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnergyContext {
    pub energy: Energy,
    pub mass: Mass,
    pub acceleration: Acceleration,
    pub time: Time,
}

impl EnergyContext {
    pub fn new(energy: Energy, mass: Mass, acceleration: Acceleration, time: Time) -> Self {
        Self {
            energy,
            mass,
            acceleration,
            time,
        }
    }

    /// Stored energy plus the kinetic energy gained from rest
    pub fn total_energy(&self) -> Energy {
        energy(self)
    }
}

/// Stored energy plus `½·m·(a·t)²`
pub fn energy(ctx: &EnergyContext) -> Energy {
    ctx.energy + kinetic_energy(ctx.mass, ctx.acceleration * ctx.time)
}
