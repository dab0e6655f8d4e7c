//! World sizing, coordinate mapping, voxel storage, and terrain generation.
#![forbid(unsafe_code)]

mod config;
mod coord;
mod terrain;
mod world;

pub use config::{GenParams, WorldConfig, load_gen_params};
pub use coord::ChunkCoord;
pub use world::{ChunkMeta, VoxelHit, World};

/// Block id stored per voxel. Zero is empty space.
pub type BlockId = u8;

pub const EMPTY: BlockId = 0;
