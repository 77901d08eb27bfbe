use rand::{SeedableRng, rngs::StdRng};

use super::{
    algorithm::{Field, Grid, Segment, march},
    config::Config,
    error::ConfigResult,
    source::Source,
};

/// Everything one frame needs: the sources, the fixed grid, and a reusable
/// segment buffer.
pub struct Scene {
    grid: Grid,
    field: Field,
    threshold: f64,
    domain_size: f64,
    sources: Vec<Source>,
    segments: Vec<Segment>,
    frame: u64,
}

//===================================================================
// Constructors
//===================================================================

impl Scene {
    pub fn new(config: &Config) -> ConfigResult<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let sources = Source::spawn_all(config, &mut rng);

        Ok(Self::with_sources(config, sources))
    }

    /// Build a scene around caller-provided sources. `config` is assumed to
    /// be valid.
    pub fn with_sources(config: &Config, sources: Vec<Source>) -> Self {
        let grid = Grid::new(config.domain_size, config.cell_width);

        tracing::debug!(
            cells = grid.len(),
            sources = sources.len(),
            "scene created"
        );

        Self {
            grid,
            field: Field::new(config.falloff_radius),
            threshold: config.threshold,
            domain_size: config.domain_size,
            sources,
            segments: Vec::new(),
            frame: 0,
        }
    }
}

//===================================================================
// Public Methods
//===================================================================

impl Scene {
    /// Advance every source by one frame.
    pub fn step(&mut self) {
        for source in &mut self.sources {
            source.advance(self.domain_size);
        }
        self.frame += 1;
    }

    /// Extract the isoline for the current source positions.
    ///
    /// The returned slice is only valid until the next call.
    #[tracing::instrument(level = "trace", skip(self), fields(frame = self.frame))]
    pub fn contour(&mut self) -> &[Segment] {
        self.segments.clear();

        let n = march(
            &self.grid,
            &self.field,
            &self.sources,
            self.threshold,
            &mut self.segments,
        );

        if self.frame % 120 == 0 {
            tracing::debug!(frame = self.frame, segments = n, "contour");
        }

        &self.segments
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}
