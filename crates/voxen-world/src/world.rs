use voxen_geom::{IVec3, Vec3};

use crate::config::WorldConfig;
use crate::coord::ChunkCoord;
use crate::terrain;
use crate::{BlockId, EMPTY};

/// Per-chunk metadata. Voxel data lives in the parallel grid arena on
/// `World` so neighbor lookups never chase chunk references.
#[derive(Clone, Copy, Debug)]
pub struct ChunkMeta {
    pub coord: ChunkCoord,
    /// True until any voxel in the chunk is set; empty chunks are skipped by
    /// render dispatch.
    pub is_empty: bool,
}

impl ChunkMeta {
    /// Model transform handed to the upload layer: translate by chunk
    /// position times chunk size.
    #[inline]
    pub fn model_translation(&self, chunk_size: usize) -> Vec3 {
        self.coord.origin(chunk_size).as_vec3()
    }
}

/// Full resolution of a world voxel position into its owning chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoxelHit {
    pub chunk_index: usize,
    pub local_index: usize,
    pub local: IVec3,
    pub id: BlockId,
}

/// Arena-owned world: chunk metadata and voxel grids in two parallel arrays
/// of `world_volume` slots, flat-indexed by the canonical chunk formula.
/// Built once at startup; voxels are mutated in place by edits afterward.
pub struct World {
    cfg: WorldConfig,
    chunks: Vec<ChunkMeta>,
    grids: Vec<Vec<BlockId>>,
}

impl World {
    /// Builds every chunk's voxels from the terrain generator.
    pub fn generate(cfg: WorldConfig) -> World {
        let noise = terrain::make_height_noise(&cfg);
        let volume = cfg.world_volume();
        let mut chunks = Vec::with_capacity(volume);
        let mut grids = Vec::with_capacity(volume);
        // Iteration order matches the flat-index formula, so slot i holds
        // chunk_coord_of(i).
        for cy in 0..cfg.chunks_y as i32 {
            for cz in 0..cfg.chunks_z as i32 {
                for cx in 0..cfg.chunks_x as i32 {
                    let coord = ChunkCoord::new(cx, cy, cz);
                    let (voxels, has_blocks) = terrain::generate_chunk(&cfg, &noise, coord);
                    chunks.push(ChunkMeta {
                        coord,
                        is_empty: !has_blocks,
                    });
                    grids.push(voxels);
                }
            }
        }
        debug_assert!(chunks.iter().enumerate().all(|(i, c)| {
            cfg.chunk_index(c.coord) == Some(i)
        }));
        World { cfg, chunks, grids }
    }

    /// An all-empty world with the same shape; used by tests and tools that
    /// author voxels by hand.
    pub fn empty(cfg: WorldConfig) -> World {
        let volume = cfg.world_volume();
        let chunks = (0..volume)
            .map(|i| ChunkMeta {
                coord: cfg.chunk_coord_of(i),
                is_empty: true,
            })
            .collect();
        let grids = (0..volume).map(|_| vec![EMPTY; cfg.chunk_volume()]).collect();
        World { cfg, chunks, grids }
    }

    #[inline]
    pub fn cfg(&self) -> &WorldConfig {
        &self.cfg
    }

    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    #[inline]
    pub fn chunk(&self, index: usize) -> &ChunkMeta {
        &self.chunks[index]
    }

    #[inline]
    pub fn chunk_voxels(&self, index: usize) -> &[BlockId] {
        &self.grids[index]
    }

    /// Block id at a world voxel position; the empty sentinel outside world
    /// bounds.
    #[inline]
    pub fn voxel_at(&self, p: IVec3) -> BlockId {
        match self.cfg.chunk_index_of(p) {
            Some(ci) => self.grids[ci][self.cfg.local_index_of(self.cfg.local_of(p))],
            None => EMPTY,
        }
    }

    #[inline]
    pub fn is_solid(&self, p: IVec3) -> bool {
        self.voxel_at(p) != EMPTY
    }

    /// Resolves a world voxel position to chunk + local indices, or `None`
    /// outside world bounds.
    #[inline]
    pub fn lookup(&self, p: IVec3) -> Option<VoxelHit> {
        let chunk_index = self.cfg.chunk_index_of(p)?;
        let local = self.cfg.local_of(p);
        let local_index = self.cfg.local_index_of(local);
        Some(VoxelHit {
            chunk_index,
            local_index,
            local,
            id: self.grids[chunk_index][local_index],
        })
    }

    /// Writes a block id at a world voxel position, updating the owning
    /// chunk's emptiness flag. Returns the owning chunk index, or `None`
    /// outside world bounds.
    pub fn set_voxel(&mut self, p: IVec3, id: BlockId) -> Option<usize> {
        let hit = self.lookup(p)?;
        self.grids[hit.chunk_index][hit.local_index] = id;
        if id != EMPTY {
            self.chunks[hit.chunk_index].is_empty = false;
        }
        Some(hit.chunk_index)
    }
}
