use serde::{Deserialize, Serialize};
use voxen_geom::IVec3;

use crate::config::WorldConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cy: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cy: i32, cz: i32) -> Self {
        Self { cx, cy, cz }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            cx: self.cx + dx,
            cy: self.cy + dy,
            cz: self.cz + dz,
        }
    }

    /// World voxel position of this chunk's minimum corner.
    #[inline]
    pub fn origin(self, chunk_size: usize) -> IVec3 {
        let s = chunk_size as i32;
        IVec3::new(self.cx * s, self.cy * s, self.cz * s)
    }
}

// World <-> chunk <-> local mapping. One flat-index formula is canonical for
// every caller (construction, meshing, raycast, edits):
// `cx + chunks_x * cz + chunks_x * chunks_z * cy`, and within a chunk
// `x + chunk_size * z + chunk_size^2 * y` (z varies before y).
impl WorldConfig {
    /// Chunk coordinates containing a world voxel position. Floor division,
    /// so negative coordinates resolve to negative chunk coords.
    #[inline]
    pub fn chunk_coord_at(&self, p: IVec3) -> ChunkCoord {
        let s = self.chunk_size as i32;
        ChunkCoord::new(p.x.div_euclid(s), p.y.div_euclid(s), p.z.div_euclid(s))
    }

    /// Flat chunk index for a world voxel position, or `None` outside the
    /// world extents.
    #[inline]
    pub fn chunk_index_of(&self, p: IVec3) -> Option<usize> {
        self.chunk_index(self.chunk_coord_at(p))
    }

    /// Flat index of a chunk coordinate, or `None` outside the world.
    #[inline]
    pub fn chunk_index(&self, c: ChunkCoord) -> Option<usize> {
        let (w, h, d) = (
            self.chunks_x as i32,
            self.chunks_y as i32,
            self.chunks_z as i32,
        );
        if c.cx < 0 || c.cx >= w || c.cy < 0 || c.cy >= h || c.cz < 0 || c.cz >= d {
            return None;
        }
        Some(c.cx as usize + self.chunks_x * c.cz as usize + self.world_area() * c.cy as usize)
    }

    /// Inverse of `chunk_index`.
    #[inline]
    pub fn chunk_coord_of(&self, index: usize) -> ChunkCoord {
        debug_assert!(index < self.world_volume());
        let area = self.world_area();
        ChunkCoord::new(
            (index % self.chunks_x) as i32,
            (index / area) as i32,
            (index % area / self.chunks_x) as i32,
        )
    }

    /// Chunk-local coordinates of a world voxel position. True mathematical
    /// modulo, so negatives wrap into `[0, chunk_size)`.
    #[inline]
    pub fn local_of(&self, p: IVec3) -> IVec3 {
        let s = self.chunk_size as i32;
        IVec3::new(p.x.rem_euclid(s), p.y.rem_euclid(s), p.z.rem_euclid(s))
    }

    /// Flat voxel index within a chunk for local coordinates.
    #[inline]
    pub fn local_index_of(&self, local: IVec3) -> usize {
        debug_assert!(
            (local.x as usize) < self.chunk_size
                && (local.y as usize) < self.chunk_size
                && (local.z as usize) < self.chunk_size
        );
        local.x as usize + self.chunk_size * local.z as usize + self.chunk_area() * local.y as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_index_rejects_out_of_bounds() {
        let cfg = WorldConfig::new(2, 2, 2, 8);
        assert_eq!(cfg.chunk_index_of(IVec3::new(-1, 0, 0)), None);
        assert_eq!(cfg.chunk_index_of(IVec3::new(0, 0, 16)), None);
        assert_eq!(cfg.chunk_index_of(IVec3::new(15, 15, 15)), Some(7));
        assert_eq!(cfg.chunk_index_of(IVec3::new(0, 0, 0)), Some(0));
    }

    #[test]
    fn negative_world_coords_wrap_locally() {
        let cfg = WorldConfig::new(2, 2, 2, 8);
        let local = cfg.local_of(IVec3::new(-1, -8, -9));
        assert_eq!(local, IVec3::new(7, 0, 7));
    }

    #[test]
    fn coord_of_inverts_index() {
        let cfg = WorldConfig::new(3, 2, 4, 8);
        for i in 0..cfg.world_volume() {
            let c = cfg.chunk_coord_of(i);
            assert_eq!(cfg.chunk_index(c), Some(i));
        }
    }
}
