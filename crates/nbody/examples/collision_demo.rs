//! Merging balls example
//!
//! Drops a handful of heavy balls into an arena at rest and lets gravity
//! pull them together. Each merge folds the lighter ball into the heavier
//! one, so the count only goes down.
//!
//! Run with: cargo run --package nbody --example collision_demo

use nbody::body::Body;
use nbody::system::{System, SystemConfig};

const FRAME_MS: f64 = 20.0;

fn main() -> Result<(), nbody::NbodyError> {
    println!("Merging Balls Demo\n");
    println!("{}", "=".repeat(60));

    let layout = [
        (1.0e12, [100.0, 120.0]),
        (1.8e12, [160.0, 140.0]),
        (1.2e12, [130.0, 200.0]),
        (1.5e12, [220.0, 110.0]),
        (1.9e12, [200.0, 210.0]),
    ];

    let bodies = layout
        .iter()
        .map(|&(mass, position)| Body::new(mass, position, [0.0, 0.0], 1e9))
        .collect::<Result<Vec<_>, _>>()?;

    let config = SystemConfig {
        time_scale: 10.0,
        ..SystemConfig::default()
    };
    let mut system = System::new(bodies, config);
    let initial = system.info()?;

    println!("\nInitial bodies:\n{}", system);
    println!("\nTotal mass: {:.3e} kg", system.total_mass());

    let mut frame = 0;
    let mut count = system.body_count();
    while system.body_count() > 1 && frame < 50_000 {
        system.update(FRAME_MS)?;
        frame += 1;

        if system.body_count() != count {
            count = system.body_count();
            println!(
                "t={:8.2} s: {} ball(s) left, total mass {:.3e} kg",
                system.time(),
                count,
                system.total_mass()
            );
        }
    }

    let info = system.info()?;
    println!("\n{}", "=".repeat(60));
    println!("Final bodies:\n{}", system);
    println!(
        "\nmomentum {:.3e} -> {:.3e}, angular momentum {:.3e} -> {:.3e}",
        initial.momentum, info.momentum, initial.angular_momentum, info.angular_momentum
    );

    Ok(())
}
