//! Save a generated run, load it back by id and simulate it again.

use std::fs;
use std::path::{Path, PathBuf};

use nbody::{System, SystemConfig};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use uuid::Uuid;

use orbits::saves::{RunRecord, UnitLabels, seed_from_id};
use orbits::{RunConfig, append_record, create_system, load_record, run};

/// Fresh directory under the system temp dir, removed on drop
struct Scratch(PathBuf);

impl Scratch {
    fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("orbits-test-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn generate(id: &Uuid, config: &RunConfig) -> System {
    let mut rng = ChaChaRng::seed_from_u64(seed_from_id(id));
    create_system(config.balls, &config.arena, &mut rng, config.system).unwrap()
}

#[test]
fn saved_run_replays_identically() {
    let dir = Scratch::new();
    let path = dir.path().join("saves.txt");
    let config = RunConfig {
        frames: 200,
        report_every: 0,
        ..RunConfig::default()
    };

    let id = Uuid::new_v4();
    let mut original = generate(&id, &config);
    let initial = original.to_records();
    let summary = run(&mut original, &config).unwrap();

    let record = RunRecord {
        id,
        framerate: config.framerate,
        time_elapsed: summary.elapsed_ms,
        init_num_balls: config.balls,
        final_num_balls: summary.final_count,
        units: UnitLabels::default(),
        system: initial.clone(),
    };
    // Unrelated runs around the one we want
    append_record(&path, &RunRecord { id: Uuid::new_v4(), ..record.clone() }).unwrap();
    append_record(&path, &record).unwrap();
    append_record(&path, &RunRecord { id: Uuid::new_v4(), ..record.clone() }).unwrap();

    let loaded = load_record(&path, id).unwrap();
    assert_eq!(loaded, record);

    let mut replayed = System::from_records(&loaded.system, config.system).unwrap();
    let again = run(&mut replayed, &config).unwrap();

    assert_eq!(again.frames, summary.frames);
    assert_eq!(again.final_count, loaded.final_num_balls);
    assert_eq!(again.info, summary.info);
    assert_eq!(replayed.to_records(), original.to_records());
}

#[test]
fn run_id_regenerates_the_same_balls() {
    let config = RunConfig::default();
    let id = Uuid::new_v4();

    let first = generate(&id, &config);
    let second = generate(&id, &config);

    assert_eq!(first.to_records(), second.to_records());
    assert_eq!(first.body_count(), config.balls);
}

#[test]
fn collisionless_replay_keeps_every_ball() {
    let config = RunConfig {
        frames: 100,
        report_every: 0,
        system: SystemConfig {
            collisions: false,
            ..SystemConfig::default()
        },
        ..RunConfig::default()
    };
    let id = Uuid::new_v4();
    let mut system = generate(&id, &config);

    // Balls that start overlapping would merge otherwise
    let summary = run(&mut system, &config).unwrap();

    assert_eq!(summary.final_count, config.balls);
}
