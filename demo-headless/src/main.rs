use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wake_sim_core::{
    downwind_transform, generate_random_layout, AinslieWake, DomainPolicy, GclWake, LayoutConfig,
    NojWake, RelativePosition, WakeModel, WakeTurbine,
};

/// Single-wake deficit demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "wake-sim-demo")]
#[command(about = "Wind turbine wake deficit demo", long_about = None)]
struct Args {
    /// Wake model (noj, gcl, ainslie)
    #[arg(short, long, default_value = "noj")]
    model: String,

    /// Thrust coefficient (0-1 exclusive)
    #[arg(short, long, default_value_t = 0.8)]
    ct: f64,

    /// Rotor diameter in meters
    #[arg(short, long, default_value_t = 80.0)]
    diameter: f64,

    /// Ambient turbulence intensity (0-1]
    #[arg(short, long, default_value_t = 0.1)]
    turbulence: f64,

    /// NOJ wake expansion coefficient
    #[arg(short = 'k', long, default_value_t = 0.05)]
    wake_expansion: f64,

    /// Clamp out-of-domain thrust coefficients instead of rejecting them
    #[arg(long)]
    clamp: bool,

    /// Transect length in meters (centerline sweep downstream)
    #[arg(long, default_value_t = 2000.0)]
    transect: f64,

    /// Transect step in meters
    #[arg(long, default_value_t = 100.0)]
    step: f64,

    /// Lateral offset of the transect from the wake centerline, meters
    #[arg(long, default_value_t = 0.0)]
    offset: f64,

    /// Generate a random layout of this many turbines and report the worst
    /// single-wake deficit each one sees (0 = skip)
    #[arg(long, default_value_t = 0)]
    layout: usize,

    /// Layout radius in meters
    #[arg(long, default_value_t = 2000.0)]
    layout_radius: f64,

    /// Minimum turbine spacing in meters
    #[arg(long, default_value_t = 300.0)]
    layout_spacing: f64,

    /// Wind direction in meteorological degrees (0 = northerly, 90 = easterly)
    #[arg(short, long, default_value_t = 270.0)]
    wind_direction: f64,

    /// Layout RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Wake Deficit Demo ===\n");

    let policy = if args.clamp { DomainPolicy::Clamp } else { DomainPolicy::Reject };
    let turbine = WakeTurbine::new(args.ct, args.diameter, args.turbulence)?;

    let model: Box<dyn WakeModel> = match args.model.to_lowercase().as_str() {
        "noj" | "jensen" => {
            Box::new(NojWake { wake_expansion: args.wake_expansion, policy })
        }
        "gcl" | "larsen" => Box::new(GclWake { policy }),
        "ainslie" | "eddy-viscosity" => Box::new(AinslieWake { policy, ..Default::default() }),
        other => {
            println!("Unknown model '{other}', using NOJ");
            Box::new(NojWake { wake_expansion: args.wake_expansion, policy })
        }
    };

    println!(
        "Turbine: Ct = {:.3}, D = {:.1} m, TI = {:.1}%",
        turbine.thrust_coefficient(),
        turbine.rotor_diameter(),
        turbine.turbulence_intensity() * 100.0
    );
    println!("Model: {}, transect offset {:.1} m\n", args.model, args.offset);

    let steps = (args.transect / args.step).floor() as usize;
    let positions: Vec<RelativePosition> = (1..=steps)
        .map(|i| RelativePosition::new(i as f64 * args.step, args.offset, 0.0))
        .collect();
    let deficits = model.wake_deficits(&turbine, &positions)?;

    println!("Distance(m) | x/D    | Deficit   | Speed fraction");
    println!("------------|--------|-----------|---------------");
    for (p, du) in positions.iter().zip(&deficits) {
        println!(
            "{:11.1} | {:6.2} | {:9.4} | {:14.4}",
            p.downstream,
            p.downstream / args.diameter,
            du,
            1.0 + du
        );
    }

    if args.layout > 0 {
        run_layout_demo(args, &turbine, model.as_ref())?;
    }

    Ok(())
}

/// Scatter turbines, rotate every pair into the downwind frame of the wind
/// direction, and report the deepest single wake seen by each turbine.
fn run_layout_demo(
    args: &Args,
    turbine: &WakeTurbine,
    model: &dyn WakeModel,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n=== Random Layout ===\n");

    let config = LayoutConfig {
        turbines: args.layout,
        max_radius: args.layout_radius,
        min_distance: args.layout_spacing,
    };
    let mut rng = StdRng::seed_from_u64(args.seed);
    let layout = generate_random_layout(&config, &mut rng)?;
    println!(
        "Placed {} turbines (radius {:.0} m, spacing {:.0} m, seed {}), wind {:.0} deg\n",
        layout.len(),
        config.max_radius,
        config.min_distance,
        args.seed,
        args.wind_direction
    );

    println!("Turbine |        x |        y | Worst deficit");
    println!("--------|----------|----------|--------------");
    for (i, target) in layout.iter().enumerate() {
        let positions: Vec<RelativePosition> = layout
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, source)| {
                let offset = target - source;
                let frame = downwind_transform(offset.x, offset.y, 0.0, args.wind_direction);
                RelativePosition::new(frame.downstream, frame.radial, 0.0)
            })
            .collect();
        let deficits = model.wake_deficits(turbine, &positions)?;
        let worst = deficits.iter().copied().fold(0.0, f64::min);
        println!("{i:7} | {:8.1} | {:8.1} | {worst:13.4}", target.x, target.y);
    }

    Ok(())
}
