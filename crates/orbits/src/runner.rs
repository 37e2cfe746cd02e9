//! Fixed-tick frame loop
//!
//! A frame advances the frame clock by one tick of `1000 / framerate` ms and
//! calls [`System::update`] `speed` times with that tick. The loop stops
//! after the configured number of frames or as soon as a single body is
//! left, whichever comes first.

use std::thread;
use std::time::{Duration, Instant};

use log::info;
use nbody::{NbodyError, System, SystemInfo};
use serde::{Deserialize, Serialize};

use crate::config::RunConfig;

/// What a finished run looked like
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Frames actually run
    pub frames: u64,
    /// Frame clock at the end of the run (ms)
    pub elapsed_ms: f64,
    /// Host time spent in the loop (ms)
    pub wall_clock_ms: f64,
    /// Simulated time at the end of the run (s)
    pub simulated_seconds: f64,
    pub info: SystemInfo,
    pub final_count: usize,
}

/// Runs `system` frame by frame until the frame budget is spent or only one
/// body is left
///
/// # Errors
///
/// Whatever [`System::update`] or [`System::info`] report; the frame that
/// failed is not counted.
///
/// # Examples
///
/// ```
/// use nbody::SystemConfig;
/// use orbits::{RunConfig, run, scenarios};
///
/// let mut system = scenarios::head_on(SystemConfig::default()).unwrap();
/// let config = RunConfig { frames: 100, report_every: 0, ..RunConfig::default() };
///
/// let summary = run(&mut system, &config).unwrap();
/// assert_eq!(summary.final_count, 1);
/// assert!(summary.frames < 100);
/// ```
pub fn run(system: &mut System, config: &RunConfig) -> Result<RunSummary, NbodyError> {
    let tick = config.tick_ms();
    let tick_duration = Duration::from_secs_f64(tick / 1000.0);
    let started = Instant::now();

    let initial = system.info()?;
    info!(
        "starting with {} bodies: tick {:.1} ms, {} updates per frame",
        system.body_count(),
        tick,
        config.speed
    );
    report(system, 0, &initial)?;

    let mut frames = 0;
    while frames < config.frames && system.body_count() > 1 {
        let frame_start = Instant::now();

        for _ in 0..config.speed {
            system.update(tick)?;
        }
        frames += 1;

        if config.report_every > 0 && frames % config.report_every == 0 {
            report(system, frames, &system.info()?)?;
        }

        if config.realtime {
            if let Some(rest) = tick_duration.checked_sub(frame_start.elapsed()) {
                thread::sleep(rest);
            }
        }
    }

    let info = system.info()?;
    let summary = RunSummary {
        frames,
        elapsed_ms: frames as f64 * tick,
        wall_clock_ms: started.elapsed().as_secs_f64() * 1000.0,
        simulated_seconds: system.time(),
        info,
        final_count: system.body_count(),
    };

    info!(
        "finished after {} frames: {} bodies left, {:.1} s simulated",
        summary.frames, summary.final_count, summary.simulated_seconds
    );

    Ok(summary)
}

/// Logs the totals the way the on-screen readout shows them
fn report(system: &System, frame: u64, totals: &SystemInfo) -> Result<(), NbodyError> {
    let com = system.center_of_mass()?;

    // Sub-unit residue is noise
    info!(
        "frame {}: momentum: {:.2e}, energy: {:.2e}, angular momentum: {:.2e}, time elapsed: {}",
        frame,
        totals.momentum.round(),
        totals.energy.round(),
        totals.angular_momentum,
        system.time() as u64
    );
    info!(
        "frame {}: {} bodies, centre of mass ({:.1}, {:.1})",
        frame,
        system.body_count(),
        com.x,
        com.y
    );

    Ok(())
}
