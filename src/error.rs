use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("cell width {cell_width} is larger than the domain size {domain_size}")]
    CellLargerThanDomain { cell_width: f64, domain_size: f64 },

    #[error("sources of radius {radius} do not fit in a domain of size {domain_size}")]
    SourceTooLarge { radius: f64, domain_size: f64 },

    #[error("spawn point ({x}, {y}) is outside the domain [0, {domain_size}]")]
    SpawnOutsideDomain { x: f64, y: f64, domain_size: f64 },

    #[error("a cell width of {cell_width} gives {cells_per_side} cells per side, more than {max} in total")]
    TooManyCells {
        cell_width: f64,
        cells_per_side: usize,
        max: usize,
    },

    #[error("frame interval must be at least 1ms")]
    ZeroFrameInterval,
}

pub type ConfigResult<T> = Result<T, ConfigError>;
