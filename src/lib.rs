//! tilesweep: swept AABB collision against a solid/empty tile grid

pub mod types;
pub mod api;
pub mod error;
pub mod config;
pub mod tilemap;
pub mod sweep;

pub use crate::types::*;
pub use crate::api::*;
pub use crate::error::{ConfigError, MapError};
pub use crate::config::CollisionConfig;
pub use crate::tilemap::TileMap;
pub use crate::sweep::SweepResolver;
