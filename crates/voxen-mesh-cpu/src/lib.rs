//! CPU chunk mesher: face culling, per-vertex ambient occlusion, and packed
//! vertex emission.
#![forbid(unsafe_code)]

mod ao;
mod build;
mod face;
mod mesh;
mod pack;

pub use build::{build_chunk_mesh, build_chunk_mesh_flat};
pub use face::{Face, Plane};
pub use mesh::{
    ChunkMesh, FLAT_LAYOUT, FlatMesh, PACKED_LAYOUT, VertexData, VertexField, VertexLayout,
    VertexSource,
};
pub use pack::{FLAT_STRIDE, PackedVertex};
