use std::time::Instant;

use voxen_geom::IVec3;
use voxen_world::{EMPTY, World};

use crate::ao::face_corner_ao;
use crate::face::{FACE_CORNERS, Face, WINDING, WINDING_FLIPPED};
use crate::mesh::{ChunkMesh, FlatMesh};
use crate::pack::{FLAT_STRIDE, PackedVertex};

/// Whether the voxel at a world position can be seen through. Positions
/// outside the world count as occupied so no face is ever drawn across the
/// world boundary.
#[inline]
pub(crate) fn is_void(world: &World, p: IVec3) -> bool {
    match world.lookup(p) {
        Some(hit) => hit.id == EMPTY,
        None => false,
    }
}

// Empirical per-voxel vertex bound for terrain-like content; the buffer
// grows past it for pathological grids (a full checkerboard needs 36).
const RESERVE_VERTS_PER_VOXEL: usize = 18;

/// Builds the packed triangle mesh for one chunk. Every solid voxel is
/// tested against its six neighbors (crossing into adjacent chunks where
/// needed); each exposed face gets four-corner ambient occlusion, a
/// diagonal-flip decision, and six packed vertices in a fixed winding.
///
/// Emission order is x-outer, y-middle, z-inner over the chunk, faces in
/// `Face::ALL` order within a voxel.
pub fn build_chunk_mesh(world: &World, chunk_index: usize) -> ChunkMesh {
    let t0 = Instant::now();
    let cfg = world.cfg();
    let meta = world.chunk(chunk_index);
    let origin = meta.coord.origin(cfg.chunk_size);
    let voxels = world.chunk_voxels(chunk_index);
    let s = cfg.chunk_size as i32;

    let mut verts: Vec<u32> = Vec::new();
    if !meta.is_empty {
        verts.reserve(cfg.chunk_volume() * RESERVE_VERTS_PER_VOXEL);
        for x in 0..s {
            for y in 0..s {
                for z in 0..s {
                    let local = IVec3::new(x, y, z);
                    let id = voxels[cfg.local_index_of(local)];
                    if id == EMPTY {
                        continue;
                    }
                    let w = origin + local;
                    for face in Face::ALL {
                        let (dx, dy, dz) = face.delta();
                        let neighbor = w.offset(dx, dy, dz);
                        if !is_void(world, neighbor) {
                            continue;
                        }
                        let ao = face_corner_ao(world, neighbor, face.plane());
                        let flip = ao[1] + ao[3] > ao[0] + ao[2];
                        let fi = face.index();
                        let mut quad = [0u32; 4];
                        for (ci, (cx, cy, cz)) in FACE_CORNERS[fi].into_iter().enumerate() {
                            quad[ci] =
                                PackedVertex::pack(x + cx, y + cy, z + cz, id, face, ao[ci], flip)
                                    .0;
                        }
                        let order = if flip {
                            &WINDING_FLIPPED[fi]
                        } else {
                            &WINDING[fi]
                        };
                        for &ci in order {
                            verts.push(quad[ci]);
                        }
                    }
                }
            }
        }
    }

    log::debug!(
        target: "perf",
        "ms={} chunk_mesh_build chunk={} verts={}",
        t0.elapsed().as_millis(),
        chunk_index,
        verts.len()
    );
    ChunkMesh::new(chunk_index, meta.model_translation(cfg.chunk_size), verts)
}

/// Builds the reduced no-AO mesh for one chunk: same traversal and culling,
/// byte-packed vertices, and a fixed diagonal (never flipped).
pub fn build_chunk_mesh_flat(world: &World, chunk_index: usize) -> FlatMesh {
    let cfg = world.cfg();
    let meta = world.chunk(chunk_index);
    let origin = meta.coord.origin(cfg.chunk_size);
    let voxels = world.chunk_voxels(chunk_index);
    let s = cfg.chunk_size as i32;

    let mut bytes: Vec<u8> = Vec::new();
    if !meta.is_empty {
        bytes.reserve(cfg.chunk_volume() * RESERVE_VERTS_PER_VOXEL * FLAT_STRIDE);
        for x in 0..s {
            for y in 0..s {
                for z in 0..s {
                    let local = IVec3::new(x, y, z);
                    let id = voxels[cfg.local_index_of(local)];
                    if id == EMPTY {
                        continue;
                    }
                    let w = origin + local;
                    for face in Face::ALL {
                        let (dx, dy, dz) = face.delta();
                        if !is_void(world, w.offset(dx, dy, dz)) {
                            continue;
                        }
                        let fi = face.index();
                        let corners = FACE_CORNERS[fi];
                        for &ci in &WINDING[fi] {
                            let (cx, cy, cz) = corners[ci];
                            bytes.extend_from_slice(&[
                                (x + cx) as u8,
                                (y + cy) as u8,
                                (z + cz) as u8,
                                id,
                                fi as u8,
                            ]);
                        }
                    }
                }
            }
        }
    }

    FlatMesh::new(chunk_index, meta.model_translation(cfg.chunk_size), bytes)
}
