//! World state management.
//!
//! Owns the blobs, moves them each tick and applies the collision mode.

use crate::blob::{random_velocity, Blob, Motion};
use crate::collision::find_colliders;
use crate::config::{CollisionMode, Config};
use crate::error::ConfigError;
use geometry::Bounds;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Seeded RNG, or one drawn from OS entropy.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Outcome of a single tick.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub tick: u64,
    /// Blobs remaining after the collision mode was applied.
    pub alive: usize,
    /// IDs of blobs found colliding this tick.
    pub colliding: Vec<u32>,
}

/// Totals over a run of ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub steps: u64,
    pub initial: usize,
    pub survivors: usize,
    /// Sum over ticks of blobs found colliding.
    pub total_collisions: usize,
    /// Most blobs colliding in one tick.
    pub peak_colliding: usize,
}

/// The simulated world.
#[derive(Debug)]
pub struct World {
    border: Bounds,
    blobs: Vec<Blob>,
    rng: StdRng,
    mode: CollisionMode,
    /// Per-axis speed limit for movement.
    speed: f32,
    tick: u64,
    next_id: u32,
}

impl World {
    /// Create an empty world of the given size.
    pub fn new(width: f32, height: f32, mode: CollisionMode, speed: f32, rng: StdRng) -> Self {
        Self {
            border: Bounds::new(0.0, 0.0, width as f64, height as f64),
            blobs: Vec::new(),
            rng,
            mode,
            speed,
            tick: 0,
            next_id: 1,
        }
    }

    /// Create a world populated as `config` describes.
    ///
    /// The config is validated first, so hand-built values are held to the
    /// same limits as a loaded file.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut world = Self::new(
            config.world.width,
            config.world.height,
            config.simulation.mode,
            config.blobs.speed,
            rng_from_seed(config.simulation.seed),
        );
        world.spawn_random(config.blobs.count, config.blobs.radius, config.blobs.bouncer_ratio);
        Ok(world)
    }

    #[inline]
    pub fn border(&self) -> &Bounds {
        &self.border
    }

    #[inline]
    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Add a blob at `position`, clamped into the world. Returns its ID.
    pub fn spawn_blob(&mut self, position: Vec2, radius: f32, motion: Motion) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        let min = Vec2::new(self.border.min_x as f32, self.border.min_y as f32);
        let max = Vec2::new(self.border.max_x as f32, self.border.max_y as f32);
        let mut blob = Blob::new(id, position.clamp(min, max), radius, motion);
        if motion == Motion::Bouncer {
            blob.velocity = random_velocity(&mut self.rng, self.speed);
        }
        self.blobs.push(blob);
        id
    }

    /// Scatter `count` blobs uniformly; each bounces with probability `bouncer_ratio`.
    pub fn spawn_random(&mut self, count: usize, radius: f32, bouncer_ratio: f64) {
        self.blobs.reserve(count);
        for _ in 0..count {
            let position = Vec2::new(
                self.rng.random_range(self.border.min_x as f32..=self.border.max_x as f32),
                self.rng.random_range(self.border.min_y as f32..=self.border.max_y as f32),
            );
            let motion = if self.rng.random_bool(bouncer_ratio) {
                Motion::Bouncer
            } else {
                Motion::Wanderer
            };
            self.spawn_blob(position, radius, motion);
        }
    }

    /// Advance one tick: move every blob, then find and handle colliders.
    pub fn step(&mut self) -> StepReport {
        self.tick += 1;
        for blob in &mut self.blobs {
            blob.step(&mut self.rng, &self.border, self.speed);
        }

        let colliders = find_colliders(&self.blobs, &self.border);
        let colliding: Vec<u32> = colliders.ones().map(|i| self.blobs[i].id).collect();

        if self.mode == CollisionMode::Destroy && !colliding.is_empty() {
            let mut index = 0;
            self.blobs.retain(|_| {
                let keep = !colliders.contains(index);
                index += 1;
                keep
            });
        }

        debug!(tick = self.tick, alive = self.blobs.len(), colliding = colliding.len(), "step");
        StepReport {
            tick: self.tick,
            alive: self.blobs.len(),
            colliding,
        }
    }

    /// Run `steps` ticks and summarise them.
    pub fn run(&mut self, steps: u64) -> RunSummary {
        let mut summary = RunSummary {
            initial: self.blobs.len(),
            ..RunSummary::default()
        };
        for _ in 0..steps {
            let report = self.step();
            summary.steps += 1;
            summary.total_collisions += report.colliding.len();
            summary.peak_colliding = summary.peak_colliding.max(report.colliding.len());
        }
        summary.survivors = self.blobs.len();
        info!(
            steps = summary.steps,
            initial = summary.initial,
            survivors = summary.survivors,
            "run finished"
        );
        summary
    }
}
