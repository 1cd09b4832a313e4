//! Typed Units Core Library
//!
//! Zero-overhead newtype units over a shared primitive, with a closed table of
//! typed products and a two-level transformer dispatch. Every illegal
//! combination is rejected by the type checker; there is no runtime tag.
//!
//! ## Modules
//!
//! - [`core_types::registry`]: root categories, the `Opaque` contract, generic same-type sum
//! - [`core_types::physics`]: `f64` quantities, their product table and formulas
//! - [`core_types::text`]: `String` and `i64` families
//! - [`transform`]: compile-time transformer resolution (override, then category default)
//! - [`dispatch`]: the same lookup at runtime for dynamically typed values
//! - [`implicit`]: opt-in `primitive.wrap()` conversions, scoped by import
//!
//! ## Quick start
//!
//! ```
//! use typed_units_core::{describe, velocity, Acceleration, TString1, TString2, Time, Velocity};
//!
//! let v = velocity(Velocity::new(10.0), Acceleration::new(10.0), Time::new(1.0));
//! assert_eq!(v.as_double(), 20.0);
//! assert_eq!((v + Velocity::new(13.0)).as_double(), 33.0);
//!
//! assert_eq!(describe(&TString1::new("Hello")), "string transformer: Hello");
//! assert_eq!(describe(&TString2::new("Hello2")), "tString2 transformer: Hello2");
//! ```
//!
//! ## Rejected at compile time
//!
//! Product with no table entry:
//!
//! ```compile_fail
//! use typed_units_core::Velocity;
//!
//! let _ = Velocity::new(1.0) * Velocity::new(1.0);
//! ```
//!
//! Entries are not commutative:
//!
//! ```compile_fail
//! use typed_units_core::{Acceleration, Time};
//!
//! let _ = Time::new(1.0) * Acceleration::new(1.0);
//! ```
//!
//! Sum of two different units:
//!
//! ```compile_fail
//! use typed_units_core::{Energy, Velocity};
//!
//! let _ = Energy::new(1.0) + Velocity::new(1.0);
//! ```
//!
//! Bare primitive where a unit is expected:
//!
//! ```compile_fail
//! use typed_units_core::{velocity, Acceleration, Time};
//!
//! let _ = velocity(10.0, Acceleration::new(10.0), Time::new(1.0));
//! ```
//!
//! Conversion without opting in:
//!
//! ```compile_fail
//! use typed_units_core::Velocity;
//!
//! let _: Velocity = 13.0_f64.wrap();
//! ```
//!
//! No transformer for the category:
//!
//! ```compile_fail
//! use typed_units_core::{describe, Velocity};
//!
//! let _ = describe(&Velocity::new(1.0));
//! ```

pub mod core_types;
pub mod dispatch;
pub mod error;
pub mod implicit;
pub mod ops;
pub mod transform;

pub use core_types::{
    energy, kinetic_energy, momentum, sum, velocity, Acceleration, Constant, DoubleBased, Energy,
    EnergyContext, IntBased, Mass, Momentum, Opaque, Repr, RootCategory, StringBased, TInt1,
    TInt2, TString1, TString2, Time, Velocity,
};
pub use dispatch::{AnyOpaque, Resolution, TransformerTable};
pub use error::{TransformError, TransformResult};
pub use ops::ProductEntry;
pub use transform::{describe, CategoryTransformer, Transformer};
