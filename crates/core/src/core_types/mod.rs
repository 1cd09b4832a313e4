//! Core types: the unit registry and the concrete unit families

pub mod physics;
pub mod registry;
pub mod text;

pub use physics::{
    energy, kinetic_energy, momentum, velocity, Acceleration, Constant, Energy, EnergyContext,
    Mass, Momentum, Time, Velocity,
};
pub use registry::{sum, DoubleBased, IntBased, Opaque, Repr, RootCategory, StringBased};
pub use text::{TInt1, TInt2, TString1, TString2};
