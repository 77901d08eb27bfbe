use std::f64::consts::TAU;

use rand::Rng;

use super::{
    config::Config,
    pos::{Pos, PosOffset},
};

/// A moving point that contributes to the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Source {
    pub pos: Pos,
    pub vel: PosOffset,
    /// Drawn radius, also the margin kept from the domain edges.
    pub radius: f64,
}

//===================================================================
// Constructors
//===================================================================

impl Source {
    pub const fn new(pos: Pos, vel: PosOffset, radius: f64) -> Self {
        Self { pos, vel, radius }
    }

    pub const fn stationary(pos: Pos, radius: f64) -> Self {
        Self::new(pos, PosOffset::ZERO, radius)
    }

    /// Spawn `config.source_count` sources at the spawn point, each heading
    /// in a random direction.
    pub fn spawn_all(config: &Config, rng: &mut impl Rng) -> Vec<Self> {
        let spawn = Pos::new(config.spawn_x, config.spawn_y);

        (0..config.source_count)
            .map(|_| {
                let theta = rng.random_range(0.0..TAU);
                let vel = PosOffset::new(
                    theta.cos() * config.speed_x,
                    theta.sin() * config.speed_y,
                );
                Self::new(spawn, vel, config.source_radius)
            })
            .collect()
    }
}

//===================================================================
// Public Methods
//===================================================================

impl Source {
    /// Move by one step of velocity, then flip the velocity on every axis
    /// that left `[radius, domain_size - radius]`.
    ///
    /// The position is not pulled back inside.
    pub fn advance(&mut self, domain_size: f64) {
        self.pos += self.vel;

        let range = self.radius..=domain_size - self.radius;

        if !range.contains(&self.pos.x) {
            self.vel.dx = -self.vel.dx;
        }

        if !range.contains(&self.pos.y) {
            self.vel.dy = -self.vel.dy;
        }
    }
}
