use fastnoise_lite::{FastNoiseLite, NoiseType};

use crate::config::WorldConfig;
use crate::coord::ChunkCoord;
use crate::{BlockId, EMPTY};

/// Seeded 2D height sampler. Frequency is baked in, so callers sample with
/// raw world coordinates.
pub(crate) fn make_height_noise(cfg: &WorldConfig) -> FastNoiseLite {
    let mut noise = FastNoiseLite::with_seed(cfg.seed);
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    noise.set_frequency(Some(cfg.r#gen.frequency));
    noise
}

#[inline]
pub(crate) fn surface_height(cfg: &WorldConfig, noise: &FastNoiseLite, wx: i32, wz: i32) -> i32 {
    let n = noise.get_noise_2d(wx as f32, wz as f32);
    (n * cfg.r#gen.amplitude + cfg.r#gen.offset) as i32
}

/// Stable per-chunk block id, uniform in `[min_block_id, max_block_id]`.
/// FNV-1a over (seed, chunk coord) so worlds reproduce under a fixed seed.
pub(crate) fn chunk_block_id(cfg: &WorldConfig, coord: ChunkCoord) -> BlockId {
    let mut h: u64 = 0xcbf29ce484222325;
    let mut write = |v: u64| {
        h ^= v;
        h = h.wrapping_mul(0x100000001b3);
    };
    write(cfg.seed as u32 as u64);
    write(coord.cx as u32 as u64);
    write(coord.cy as u32 as u64);
    write(coord.cz as u32 as u64);
    let lo = cfg.r#gen.min_block_id.max(1) as u64;
    let hi = (cfg.r#gen.max_block_id as u64).max(lo);
    (lo + h % (hi - lo + 1)) as BlockId
}

/// Fills one chunk's voxel grid from the heightfield. Returns the grid and
/// whether anything solid was written.
pub(crate) fn generate_chunk(
    cfg: &WorldConfig,
    noise: &FastNoiseLite,
    coord: ChunkCoord,
) -> (Vec<BlockId>, bool) {
    let s = cfg.chunk_size;
    let mut voxels = vec![EMPTY; cfg.chunk_volume()];
    let origin = coord.origin(s);
    let block = chunk_block_id(cfg, coord);
    let mut has_blocks = false;
    for x in 0..s {
        for z in 0..s {
            let wx = origin.x + x as i32;
            let wz = origin.z + z as i32;
            let world_height = surface_height(cfg, noise, wx, wz);
            let local_height = (world_height - origin.y).min(s as i32);
            for y in 0..local_height.max(0) as usize {
                voxels[x + s * z + cfg.chunk_area() * y] = block;
                has_blocks = true;
            }
        }
    }
    (voxels, has_blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_id_stable_and_in_range() {
        let cfg = WorldConfig::new(2, 2, 2, 8).with_seed(42);
        for i in 0..cfg.world_volume() {
            let c = cfg.chunk_coord_of(i);
            let id = chunk_block_id(&cfg, c);
            assert_eq!(id, chunk_block_id(&cfg, c));
            assert!(id >= cfg.r#gen.min_block_id && id <= cfg.r#gen.max_block_id);
        }
    }

    #[test]
    fn columns_respect_height_band() {
        let cfg = WorldConfig::new(1, 1, 1, 16).with_seed(7);
        let noise = make_height_noise(&cfg);
        // Amplitude 32 offset 32 keeps every height in [0, 64].
        for w in [-50, -1, 0, 3, 99] {
            let h = surface_height(&cfg, &noise, w, -w);
            assert!((0..=64).contains(&h), "height {h} out of band");
        }
    }

    #[test]
    fn generated_chunk_is_column_filled() {
        let cfg = WorldConfig::new(2, 2, 2, 8).with_seed(3);
        let noise = make_height_noise(&cfg);
        let (voxels, _) = generate_chunk(&cfg, &noise, ChunkCoord::new(0, 0, 0));
        // Within a column, solid voxels are contiguous from y=0 upward.
        let s = cfg.chunk_size;
        for x in 0..s {
            for z in 0..s {
                let mut seen_air = false;
                for y in 0..s {
                    let id = voxels[x + s * z + cfg.chunk_area() * y];
                    if id == EMPTY {
                        seen_air = true;
                    } else {
                        assert!(!seen_air, "solid voxel above air at ({x},{y},{z})");
                    }
                }
            }
        }
    }
}
