use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;
use typed_units_core::core_types::physics::{PRODUCTS, SCALAR_PRODUCT};
use typed_units_core::{
    describe, energy, momentum, velocity, Acceleration, Energy, EnergyContext, Mass, Momentum,
    ProductEntry, TInt1, TInt2, TString1, TString2, Time, TransformerTable, Velocity,
};

/// Typed units demo: kinematics with checked units and typed transformers
#[derive(Parser, Debug)]
#[command(name = "typed-units-demo")]
#[command(about = "Typed unit arithmetic and transformer dispatch demo", long_about = None)]
struct Args {
    /// Initial velocity u in m/s
    #[arg(short = 'u', long, default_value_t = 10.0)]
    initial_velocity: f64,

    /// Acceleration a in m/s²
    #[arg(short, long, default_value_t = 10.0)]
    acceleration: f64,

    /// Duration t in seconds
    #[arg(short, long, default_value_t = 1.0)]
    time: f64,

    /// Velocity added to the computed final velocity, in m/s
    #[arg(short, long, default_value_t = 13.0)]
    extra_velocity: f64,

    /// Mass in kg
    #[arg(short, long, default_value_t = 2.0)]
    mass: f64,

    /// Energy already stored in the body, in J
    #[arg(long, default_value_t = 0.0)]
    stored_energy: f64,

    /// Text for the category-default string kind
    #[arg(long, default_value = "Hello")]
    text: String,

    /// Text for the overridden string kind
    #[arg(long, default_value = "Hello2")]
    text_override: String,

    /// Integer for both int kinds
    #[arg(short, long, default_value_t = 5)]
    number: i64,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    products: Vec<ProductEntry>,
    velocity: Velocity,
    total_velocity: Velocity,
    momentum: Momentum,
    energy_context: EnergyContext,
    energy: Energy,
    descriptions: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    info!(?args, "Starting typed units demo");

    let u = Velocity::new(args.initial_velocity);
    let a = Acceleration::new(args.acceleration);
    let t = Time::new(args.time);
    let m = Mass::new(args.mass);

    let v = velocity(u, a, t);
    let total_velocity = v + Velocity::new(args.extra_velocity);
    let p = momentum(m, total_velocity);

    let energy_context = EnergyContext::new(Energy::new(args.stored_energy), m, a, t);
    let e = energy(&energy_context);

    // Static dispatch for the known types, runtime table as a cross-check
    let table = TransformerTable::standard();
    let s1 = TString1::new(args.text);
    let s2 = TString2::new(args.text_override);
    let i1 = TInt1::new(args.number);
    let i2 = TInt2::new(args.number);
    let descriptions = vec![describe(&s1), describe(&s2), describe(&i1), describe(&i2)];
    for (static_desc, dynamic) in descriptions.iter().zip([
        table.describe(&s1),
        table.describe(&s2),
        table.describe(&i1),
        table.describe(&i2),
    ]) {
        match dynamic {
            Ok(dynamic_desc) if &dynamic_desc == static_desc => {}
            Ok(dynamic_desc) => {
                tracing::warn!(%static_desc, %dynamic_desc, "Runtime table disagrees with static dispatch");
            }
            Err(err) => tracing::warn!("Runtime table lookup failed: {err}"),
        }
    }

    let report = Report {
        products: PRODUCTS.iter().copied().chain([SCALAR_PRODUCT]).collect(),
        velocity: v,
        total_velocity,
        momentum: p,
        energy_context,
        energy: e,
        descriptions,
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize report: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    print_report(&report);
}

fn print_report(report: &Report) {
    println!("=== Typed Units Demo ===\n");

    println!("Product table:");
    for entry in &report.products {
        println!("  {entry}");
    }

    println!("\nKinematics:");
    println!("  v = u + a·t          = {}", report.velocity);
    println!("  v + extra            = {}", report.total_velocity);
    println!("  p = m·v              = {:.3}", report.momentum);

    let ctx = &report.energy_context;
    println!("\nEnergy:");
    println!(
        "  E0 = {}, m = {}, a = {}, t = {}",
        ctx.energy, ctx.mass, ctx.acceleration, ctx.time
    );
    println!("  E = E0 + ½·m·(a·t)²  = {:.3}", report.energy);

    println!("\nTransformers:");
    for description in &report.descriptions {
        println!("  {description}");
    }
}
