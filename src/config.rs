use std::time::Duration;

use clap::Parser;

use crate::{
    algorithm::{Grid, MAX_CELLS, THRESHOLD},
    error::{ConfigError, ConfigResult},
};

/// Animated metaballs drawn as a marching squares isoline.
#[derive(Parser, Clone, Debug)]
#[command(name = "metaballs-draw")]
pub struct Config {
    /// Width of one grid cell
    #[arg(long, default_value_t = 5.)]
    pub cell_width: f64,

    /// Side length of the square domain
    #[arg(long, default_value_t = 1000.)]
    pub domain_size: f64,

    /// Field value at which the isoline is drawn
    #[arg(long, default_value_t = THRESHOLD)]
    pub threshold: f64,

    /// Number of sources
    #[arg(long = "sources", default_value_t = 20)]
    pub source_count: usize,

    /// Drawn radius of a source, also its bounce margin
    #[arg(long, default_value_t = 30.)]
    pub source_radius: f64,

    /// Falloff scale of the field, `r` in `r² / d²`
    #[arg(long, default_value_t = 60.)]
    pub falloff_radius: f64,

    #[arg(long, default_value_t = 200.)]
    pub spawn_x: f64,

    #[arg(long, default_value_t = 200.)]
    pub spawn_y: f64,

    /// Horizontal scale of the random unit velocity
    #[arg(long, default_value_t = 1.)]
    pub speed_x: f64,

    /// Vertical scale of the random unit velocity
    #[arg(long, default_value_t = 2.)]
    pub speed_y: f64,

    /// Seed for the source velocities, random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Animation timer period in milliseconds
    #[arg(long, default_value_t = 16)]
    pub frame_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::parse_from(["metaballs-draw"])
    }
}

impl Config {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        for (name, value) in [
            ("cell width", self.cell_width),
            ("domain size", self.domain_size),
            ("threshold", self.threshold),
            ("source radius", self.source_radius),
            ("falloff radius", self.falloff_radius),
        ] {
            if !(value.is_finite() && value > 0.) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        if self.cell_width > self.domain_size {
            return Err(ConfigError::CellLargerThanDomain {
                cell_width: self.cell_width,
                domain_size: self.domain_size,
            });
        }

        let cells = Grid::cell_count(self.domain_size, self.cell_width);
        if !cells.is_some_and(|cells| cells <= MAX_CELLS) {
            return Err(ConfigError::TooManyCells {
                cell_width: self.cell_width,
                cells_per_side: Grid::side_count(
                    self.domain_size,
                    self.cell_width,
                ),
                max: MAX_CELLS,
            });
        }

        if 2. * self.source_radius >= self.domain_size {
            return Err(ConfigError::SourceTooLarge {
                radius: self.source_radius,
                domain_size: self.domain_size,
            });
        }

        let in_domain = |v: f64| (0.0..=self.domain_size).contains(&v);
        if !in_domain(self.spawn_x) || !in_domain(self.spawn_y) {
            return Err(ConfigError::SpawnOutsideDomain {
                x: self.spawn_x,
                y: self.spawn_y,
                domain_size: self.domain_size,
            });
        }

        if self.frame_interval_ms == 0 {
            return Err(ConfigError::ZeroFrameInterval);
        }

        Ok(())
    }
}
