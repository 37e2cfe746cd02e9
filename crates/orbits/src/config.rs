//! Run configuration for the host

use std::ops::RangeInclusive;

use nbody::SystemConfig;
use serde::{Deserialize, Serialize};

/// The rectangle balls are dropped into, in metres (one metre per pixel at
/// the default distance scale)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arena {
    pub width: u32,
    pub height: u32,
}

impl Arena {
    /// Distance kept clear between generated balls and the arena edge
    pub const MARGIN: u32 = 100;

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Admissible x coordinates for a generated ball
    ///
    /// Collapses to the single value `MARGIN` when the arena is too narrow
    /// to leave a margin on both sides.
    pub fn x_range(&self) -> RangeInclusive<u32> {
        Self::inner(self.width)
    }

    /// Admissible y coordinates for a generated ball
    pub fn y_range(&self) -> RangeInclusive<u32> {
        Self::inner(self.height)
    }

    /// Number of distinct integer positions a ball can be generated at
    pub fn capacity(&self) -> u64 {
        let count = |r: RangeInclusive<u32>| u64::from(r.end() - r.start()) + 1;
        count(self.x_range()) * count(self.y_range())
    }

    fn inner(extent: u32) -> RangeInclusive<u32> {
        let hi = extent.saturating_sub(Self::MARGIN).max(Self::MARGIN);
        Self::MARGIN..=hi
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(1000, 700)
    }
}

/// Everything the frame loop needs to know
///
/// # Examples
///
/// ```
/// use orbits::RunConfig;
///
/// let config = RunConfig::default();
/// assert_eq!(config.tick_ms(), 20.0);
/// assert_eq!(config.speed, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub arena: Arena,
    /// Balls in a randomly generated system
    pub balls: usize,
    /// Frames per second of the frame clock
    pub framerate: u32,
    /// `System::update` calls per frame
    pub speed: u32,
    /// Frames to run before stopping
    pub frames: u64,
    /// Log the totals every this many frames; 0 turns reports off
    pub report_every: u64,
    /// Sleep out the rest of each tick instead of running flat out
    pub realtime: bool,
    pub system: SystemConfig,
}

impl RunConfig {
    /// Length of one frame tick in milliseconds
    pub fn tick_ms(&self) -> f64 {
        1000.0 / f64::from(self.framerate.max(1))
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            arena: Arena::default(),
            balls: 10,
            framerate: 50,
            speed: 10,
            frames: 3_000,
            report_every: 50,
            realtime: false,
            system: SystemConfig::default(),
        }
    }
}
