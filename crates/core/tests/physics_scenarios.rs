//! Physics scenarios: kinematics, momentum and the energy context

use approx::assert_abs_diff_eq;
use typed_units_core::core_types::physics::{PRODUCTS, SCALAR_PRODUCT};
use typed_units_core::ops::lookup;
use typed_units_core::{
    energy, kinetic_energy, momentum, velocity, Acceleration, Constant, Energy, EnergyContext,
    Mass, Opaque, Time, Velocity,
};

#[test]
fn test_velocity_scenario() {
    let extra = Velocity::new(13.0);
    let v = velocity(Velocity::new(10.0), Acceleration::new(10.0), Time::new(1.0));
    assert_eq!(v.as_double(), 20.0);

    let total = v + extra;
    assert_eq!(total.as_double(), 33.0);
    assert_eq!(total.into_inner(), 33.0);
}

#[test]
fn test_chained_products_reach_energy() {
    let m = Mass::new(2.0);
    let v: Velocity = Acceleration::new(3.0) * Time::new(2.0);
    let p = momentum(m, v);
    let e: Energy = p * v;

    assert_eq!(p.as_double(), 12.0);
    assert_eq!(e.as_double(), 72.0);
    assert_abs_diff_eq!(kinetic_energy(m, v).as_double(), 36.0, epsilon = 1e-12);
}

#[test]
fn test_constant_scaling_keeps_type() {
    let half = Constant::new(0.5);
    let t: Time = half * Time::new(4.0);
    let p = half * momentum(Mass::new(1.0), Velocity::new(8.0));
    assert_eq!(t, Time::new(2.0));
    assert_eq!(p.as_double(), 4.0);
}

#[test]
fn test_energy_context_from_json() {
    let ctx: EnergyContext = serde_json::from_str(
        r#"{ "energy": 10.0, "mass": 4.0, "acceleration": 2.0, "time": 3.0 }"#,
    )
    .unwrap();

    assert_eq!(ctx.mass, Mass::new(4.0));
    // v = 6 m/s, ½·4·36 = 72 J, plus 10 J stored
    assert_abs_diff_eq!(energy(&ctx).as_double(), 82.0, epsilon = 1e-12);
}

#[test]
fn test_product_listing() {
    assert_eq!(PRODUCTS.len(), 3);
    let outputs: Vec<_> = PRODUCTS.iter().map(|e| e.output).collect();
    assert_eq!(outputs, ["Velocity", "Momentum", "Energy"]);
    assert_eq!(lookup(PRODUCTS, "Momentum", "Velocity").map(|e| e.output), Some("Energy"));
    assert_eq!(SCALAR_PRODUCT.lhs, <Constant as Opaque>::NAME);
}

#[test]
fn test_ordering_and_extremes() {
    let slow = Velocity::new(1.0);
    let fast = Velocity::new(100.0);
    assert!(slow < fast);
    assert_eq!(slow.max(fast), fast);

    let inf = Acceleration::new(f64::INFINITY) * Time::new(1.0);
    assert!(inf.as_double().is_infinite());
}
