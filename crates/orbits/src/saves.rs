//! Append-only JSON-lines file of finished runs
//!
//! Each line is one [`RunRecord`]: the run's UUID, a few counters, the unit
//! labels and the initial bodies. Loading scans the file from the top and
//! returns the first line whose id matches.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use log::{debug, warn};
use nbody::BodyRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("no saved run with id {0}")]
    NotFound(Uuid),

    #[error("could not encode run record: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Labels for the units the bodies are stored in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitLabels {
    pub mass: String,
    pub dens: String,
    pub pos: String,
    pub vel: String,
    pub time: String,
}

impl Default for UnitLabels {
    fn default() -> Self {
        Self {
            mass: "kg".to_string(),
            dens: "kg/m^3".to_string(),
            pos: "m".to_string(),
            vel: "m/s".to_string(),
            time: "s".to_string(),
        }
    }
}

/// One saved run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Unique identifier, also the seed source for the run's rng
    pub id: Uuid,
    pub framerate: u32,
    /// Frame clock at the end of the run (ms)
    pub time_elapsed: f64,
    pub init_num_balls: usize,
    pub final_num_balls: usize,
    #[serde(default)]
    pub units: UnitLabels,
    /// Bodies as they were before the first update
    pub system: Vec<BodyRecord>,
}

impl RunRecord {
    /// Derive a u64 seed from the UUID for RNG initialization
    ///
    /// Uses the first 8 bytes of the UUID, so the same id always gives the
    /// same seed.
    pub fn seed(&self) -> u64 {
        seed_from_id(&self.id)
    }
}

pub fn seed_from_id(id: &Uuid) -> u64 {
    id.as_u64_pair().0
}

/// Appends `record` as one line at the end of `path`, creating the file if
/// needed
///
/// # Examples
///
/// ```
/// use orbits::saves::{RunRecord, UnitLabels, append_record, load_record};
/// use uuid::Uuid;
///
/// let dir = std::env::temp_dir().join(format!("orbits-doc-{}", Uuid::new_v4()));
/// std::fs::create_dir_all(&dir).unwrap();
/// let path = dir.join("saves.txt");
///
/// let record = RunRecord {
///     id: Uuid::new_v4(),
///     framerate: 50,
///     time_elapsed: 1000.0,
///     init_num_balls: 0,
///     final_num_balls: 0,
///     units: UnitLabels::default(),
///     system: Vec::new(),
/// };
/// append_record(&path, &record).unwrap();
///
/// assert_eq!(load_record(&path, record.id).unwrap(), record);
/// std::fs::remove_dir_all(&dir).unwrap();
/// ```
pub fn append_record(path: impl AsRef<Path>, record: &RunRecord) -> Result<(), SaveError> {
    let path = path.as_ref();
    let line = serde_json::to_string(record).map_err(SaveError::Serialize)?;

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")?;

    debug!("saved run {} to {}", record.id, path.display());
    Ok(())
}

/// Finds the run saved under `id`
///
/// Blank lines are skipped, and so are lines that are not a run record
/// (a run killed mid-append leaves a partial line). Anything after the
/// match is never read.
///
/// # Errors
///
/// [`SaveError::NotFound`] when no line carries `id`, [`SaveError::Io`] if
/// the file cannot be read.
pub fn load_record(path: impl AsRef<Path>, id: Uuid) -> Result<RunRecord, SaveError> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record: RunRecord = match serde_json::from_str(&line) {
            Ok(record) => record,
            Err(err) => {
                warn!("skipping line {} of {}: {}", index + 1, path.display(), err);
                continue;
            }
        };

        if record.id == id {
            debug!("loaded run {} from line {}", id, index + 1);
            return Ok(record);
        }
    }

    warn!("run {} not found in {}", id, path.display());
    Err(SaveError::NotFound(id))
}
