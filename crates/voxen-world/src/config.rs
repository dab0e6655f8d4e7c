use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Terrain-shaping parameters, loadable from a TOML file.
///
/// The heightfield for a column at world (x, z) is
/// `noise2d(x, z) * amplitude + offset`, with the noise frequency baked into
/// the sampler.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct GenParams {
    #[serde(default = "default_frequency")]
    pub frequency: f32,
    #[serde(default = "default_amplitude")]
    pub amplitude: f32,
    #[serde(default = "default_offset")]
    pub offset: f32,
    /// Inclusive range the per-chunk block id is drawn from.
    #[serde(default = "default_min_block_id")]
    pub min_block_id: u8,
    #[serde(default = "default_max_block_id")]
    pub max_block_id: u8,
}

fn default_frequency() -> f32 {
    0.01
}
fn default_amplitude() -> f32 {
    32.0
}
fn default_offset() -> f32 {
    32.0
}
fn default_min_block_id() -> u8 {
    1
}
fn default_max_block_id() -> u8 {
    99
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            frequency: default_frequency(),
            amplitude: default_amplitude(),
            offset: default_offset(),
            min_block_id: default_min_block_id(),
            max_block_id: default_max_block_id(),
        }
    }
}

pub fn load_gen_params(path: &Path) -> Result<GenParams, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let params: GenParams = toml::from_str(&s)?;
    Ok(params)
}

/// Immutable session configuration. Constructed once at startup and borrowed
/// by every component that needs world extents or terrain parameters.
#[derive(Clone, Copy, Debug)]
pub struct WorldConfig {
    /// World extent in chunks per axis.
    pub chunks_x: usize,
    pub chunks_y: usize,
    pub chunks_z: usize,
    /// Cubic chunk edge length in voxels. Must be <= 63 so corner
    /// coordinates (which reach `chunk_size`) fit the 6-bit vertex fields.
    pub chunk_size: usize,
    pub seed: i32,
    /// Max interaction (raycast) distance in voxels.
    pub reach: f32,
    /// Block id written by Place when no override is given.
    pub default_block_id: u8,
    pub r#gen: GenParams,
}

impl WorldConfig {
    pub fn new(chunks_x: usize, chunks_y: usize, chunks_z: usize, chunk_size: usize) -> Self {
        assert!(chunks_x > 0 && chunks_y > 0 && chunks_z > 0);
        assert!(chunk_size > 0 && chunk_size <= 63);
        Self {
            chunks_x,
            chunks_y,
            chunks_z,
            chunk_size,
            seed: 0,
            reach: 6.0,
            default_block_id: 1,
            r#gen: GenParams::default(),
        }
    }

    pub fn with_seed(mut self, seed: i32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_gen(mut self, r#gen: GenParams) -> Self {
        self.r#gen = r#gen;
        self
    }

    #[inline]
    pub fn chunk_area(&self) -> usize {
        self.chunk_size * self.chunk_size
    }

    #[inline]
    pub fn chunk_volume(&self) -> usize {
        self.chunk_area() * self.chunk_size
    }

    /// Chunks in one horizontal layer; the `y` stride of the chunk index.
    #[inline]
    pub fn world_area(&self) -> usize {
        self.chunks_x * self.chunks_z
    }

    #[inline]
    pub fn world_volume(&self) -> usize {
        self.world_area() * self.chunks_y
    }

    #[inline]
    pub fn world_size_x(&self) -> usize {
        self.chunks_x * self.chunk_size
    }

    #[inline]
    pub fn world_size_y(&self) -> usize {
        self.chunks_y * self.chunk_size
    }

    #[inline]
    pub fn world_size_z(&self) -> usize {
        self.chunks_z * self.chunk_size
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::new(8, 3, 8, 32)
    }
}
