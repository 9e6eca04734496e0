//! Moving circular blobs.

use geometry::{Bounds, Point2D};
use glam::Vec2;
use rand::Rng;

/// How a blob moves each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    /// Picks a fresh random velocity every step.
    #[default]
    Wanderer,
    /// Keeps its velocity and reflects off the world border.
    Bouncer,
}

/// A circle moving around the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blob {
    /// Unique blob ID.
    pub id: u32,
    /// Centre in world coordinates.
    pub position: Vec2,
    /// Displacement per step.
    pub velocity: Vec2,
    pub radius: f32,
    pub motion: Motion,
}

impl Blob {
    /// Create a resting blob.
    pub fn new(id: u32, position: Vec2, radius: f32, motion: Motion) -> Self {
        Self {
            id,
            position,
            velocity: Vec2::ZERO,
            radius,
            motion,
        }
    }

    /// Move one step, keeping the centre inside `border`.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R, border: &Bounds, speed: f32) {
        if self.motion == Motion::Wanderer {
            self.velocity = random_velocity(rng, speed);
        }
        self.position += self.velocity;

        let min = Vec2::new(border.min_x as f32, border.min_y as f32);
        let max = Vec2::new(border.max_x as f32, border.max_y as f32);
        if self.motion == Motion::Bouncer {
            if self.position.x < min.x || self.position.x > max.x {
                self.velocity.x = -self.velocity.x;
            }
            if self.position.y < min.y || self.position.y > max.y {
                self.velocity.y = -self.velocity.y;
            }
        }
        self.position = self.position.clamp(min, max);
    }

    /// Check if this blob overlaps or touches `other`.
    #[inline]
    pub fn touches(&self, other: &Blob) -> bool {
        let reach = self.radius as f64 + other.radius as f64;
        geometry::point_in_circle(other.x(), other.y(), self.x(), self.y(), reach)
    }
}

impl Point2D for Blob {
    #[inline]
    fn x(&self) -> f64 {
        self.position.x as f64
    }

    #[inline]
    fn y(&self) -> f64 {
        self.position.y as f64
    }
}

/// Uniform velocity with each component in `-speed..=speed`.
pub fn random_velocity<R: Rng + ?Sized>(rng: &mut R, speed: f32) -> Vec2 {
    Vec2::new(rng.random_range(-speed..=speed), rng.random_range(-speed..=speed))
}
