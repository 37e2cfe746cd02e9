use approx::assert_relative_eq;

use nbody::{Body, NbodyError, System, SystemConfig};

use crate::config::RunConfig;
use crate::runner::run;
use crate::scenarios::head_on;

fn quiet(frames: u64) -> RunConfig {
    RunConfig {
        frames,
        report_every: 0,
        ..RunConfig::default()
    }
}

fn far_apart() -> System {
    System::new(
        [
            Body::new(1e12, [100.0, 100.0], [0.0, 0.0], 1e9).unwrap(),
            Body::new(1e12, [900.0, 600.0], [0.0, 0.0], 1e9).unwrap(),
        ],
        SystemConfig::default(),
    )
}

#[test]
fn test_runs_the_frame_budget() {
    let mut system = far_apart();

    let summary = run(&mut system, &quiet(30)).unwrap();

    assert_eq!(summary.frames, 30);
    assert_eq!(summary.final_count, 2);
    assert_relative_eq!(summary.elapsed_ms, 600.0);
    // speed 10 updates of a 20 ms tick per frame
    assert_relative_eq!(summary.simulated_seconds, 6.0, max_relative = 1e-9);
    assert_relative_eq!(system.time(), summary.simulated_seconds);
}

#[test]
fn test_stops_when_one_body_is_left() {
    let mut system = head_on(SystemConfig::default()).unwrap();

    let summary = run(&mut system, &quiet(10_000)).unwrap();

    assert!(summary.frames < 10_000);
    assert_eq!(summary.final_count, 1);
    assert_relative_eq!(summary.info.momentum, 5e12, max_relative = 1e-9);
}

#[test]
fn test_single_body_runs_no_frames() {
    let mut system = System::new(
        [Body::new(1e12, [100.0, 100.0], [1.0, 0.0], 1e9).unwrap()],
        SystemConfig::default(),
    );

    let summary = run(&mut system, &quiet(10)).unwrap();

    assert_eq!(summary.frames, 0);
    assert_eq!(summary.simulated_seconds, 0.0);
}

#[test]
fn test_speed_and_time_scale_multiply() {
    let config = RunConfig {
        speed: 3,
        ..quiet(5)
    };
    let mut plain = far_apart();
    let mut scaled = System::new(
        plain.bodies().to_vec(),
        SystemConfig {
            time_scale: 2.0,
            ..SystemConfig::default()
        },
    );

    let normal = run(&mut plain, &config).unwrap();
    let fast = run(&mut scaled, &config).unwrap();

    assert_relative_eq!(normal.simulated_seconds, 5.0 * 3.0 * 0.02, max_relative = 1e-9);
    assert_relative_eq!(
        fast.simulated_seconds,
        2.0 * normal.simulated_seconds,
        max_relative = 1e-9
    );
    assert_eq!(normal.elapsed_ms, fast.elapsed_ms);
}

#[test]
fn test_reports_do_not_change_the_outcome() {
    let mut quiet_system = far_apart();
    let mut chatty_system = far_apart();

    let a = run(&mut quiet_system, &quiet(20)).unwrap();
    let b = run(
        &mut chatty_system,
        &RunConfig {
            report_every: 1,
            ..quiet(20)
        },
    )
    .unwrap();

    assert_eq!(a.info, b.info);
    assert_eq!(quiet_system.to_records(), chatty_system.to_records());
}

#[test]
fn test_empty_system_is_an_error() {
    let mut system = System::new(Vec::new(), SystemConfig::default());

    assert_eq!(run(&mut system, &quiet(10)), Err(NbodyError::EmptySystem));
}
