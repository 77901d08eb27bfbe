//! Metaballs drawn as a marching squares isoline over an inverse-square
//! field of moving sources.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod pos;
pub mod scene;
pub mod source;

pub use config::Config;
pub use error::ConfigError;
pub use scene::Scene;
