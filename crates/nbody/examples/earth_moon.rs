//! Earth-Moon orbit example
//!
//! Puts the Moon on a near-circular orbit around the Earth and steps it one
//! minute at a time for a little over a sidereal month, printing the
//! conserved totals every few days.
//!
//! Run with: cargo run --package nbody --example earth_moon

use nbody::body::Body;
use nbody::system::{System, SystemConfig};
use units::{Density, Length, Mass, Time};

fn main() -> Result<(), nbody::NbodyError> {
    println!("Earth-Moon Orbit Demo\n");
    println!("{}", "=".repeat(60));

    let earth = Body::from_quantities(
        Mass::from_earth_masses(1.0),
        [Length::zero(), Length::zero()],
        [0.0, 0.0],
        Density::from_grams_per_cm3(5.51),
    )?;
    let moon = Body::from_quantities(
        Mass::from_moon_masses(1.0),
        [Length::from_lunar_distances(1.0), Length::zero()],
        [0.0, 1022.0],
        Density::from_grams_per_cm3(3.34),
    )?;

    let mut system = System::new([earth, moon], SystemConfig::default());
    let initial = system.info()?;

    println!("\nInitial state:");
    println!("  momentum:         {:.4e} kg m/s", initial.momentum);
    println!("  angular momentum: {:.4e} kg m²/s", initial.angular_momentum);
    println!("  energy:           {:.6e} J", initial.energy);

    let step = Time::from_hours(1.0 / 60.0);
    let steps_per_day = (Time::from_days(1.0) / step).round() as usize;
    let days = 28;

    println!("\n{}", "=".repeat(60));
    for day in 1..=days {
        for _ in 0..steps_per_day {
            system.update(step.to_milliseconds())?;
        }

        if day % 4 == 0 {
            let info = system.info()?;
            let bodies = system.bodies();
            let separation = Length::from_meters(bodies[0].distance_to(&bodies[1]));
            println!(
                "day {:2}: separation {:.4} LD, energy drift {:+.3e}",
                day,
                separation.to_lunar_distances(),
                (info.energy - initial.energy) / initial.energy.abs()
            );
        }
    }

    let com = system.center_of_mass()?;
    println!("\n{}", "=".repeat(60));
    println!(
        "Barycentre after {:.1} days: ({:.4e}, {:.4e}) m",
        Time::from_seconds(system.time()).to_days(),
        com.x,
        com.y
    );
    println!("Final bodies:\n{}", system);

    Ok(())
}
