use voxen_geom::Vec3;

/// One attribute of the vertex encoding, in bit order.
#[derive(Copy, Clone, Debug)]
pub struct VertexField {
    pub name: &'static str,
    pub bits: u32,
}

/// Layout descriptor consumed by the GPU-upload collaborator alongside the
/// vertex buffer.
#[derive(Copy, Clone, Debug)]
pub struct VertexLayout {
    pub stride_bytes: usize,
    pub fields: &'static [VertexField],
}

/// Bit fields of [`crate::PackedVertex`], most significant first.
pub const PACKED_LAYOUT: VertexLayout = VertexLayout {
    stride_bytes: 4,
    fields: &[
        VertexField { name: "x", bits: 6 },
        VertexField { name: "y", bits: 6 },
        VertexField { name: "z", bits: 6 },
        VertexField {
            name: "block_id",
            bits: 8,
        },
        VertexField {
            name: "face_id",
            bits: 3,
        },
        VertexField { name: "ao", bits: 2 },
        VertexField {
            name: "flip",
            bits: 1,
        },
    ],
};

/// Byte fields of the reduced no-AO encoding.
pub const FLAT_LAYOUT: VertexLayout = VertexLayout {
    stride_bytes: crate::pack::FLAT_STRIDE,
    fields: &[
        VertexField { name: "x", bits: 8 },
        VertexField { name: "y", bits: 8 },
        VertexField { name: "z", bits: 8 },
        VertexField {
            name: "block_id",
            bits: 8,
        },
        VertexField {
            name: "face_id",
            bits: 8,
        },
    ],
};

/// Borrowed view of a mesh's vertex buffer in whichever encoding it uses.
pub enum VertexData<'a> {
    Packed(&'a [u32]),
    Bytes(&'a [u8]),
}

/// Capability interface between built meshes and the render/upload layer.
pub trait VertexSource {
    fn vertex_data(&self) -> VertexData<'_>;
    fn layout(&self) -> &'static VertexLayout;
    fn vertex_count(&self) -> usize;
}

/// Triangle mesh for one chunk in the packed 32-bit encoding.
pub struct ChunkMesh {
    pub chunk_index: usize,
    /// Model transform for the upload layer: chunk position times chunk size.
    pub model_translation: Vec3,
    verts: Vec<u32>,
}

impl ChunkMesh {
    pub(crate) fn new(chunk_index: usize, model_translation: Vec3, verts: Vec<u32>) -> Self {
        Self {
            chunk_index,
            model_translation,
            verts,
        }
    }

    #[inline]
    pub fn verts(&self) -> &[u32] {
        &self.verts
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }
}

impl VertexSource for ChunkMesh {
    fn vertex_data(&self) -> VertexData<'_> {
        VertexData::Packed(&self.verts)
    }

    fn layout(&self) -> &'static VertexLayout {
        &PACKED_LAYOUT
    }

    fn vertex_count(&self) -> usize {
        self.verts.len()
    }
}

/// Triangle mesh in the reduced byte-per-field encoding, without ambient
/// occlusion.
pub struct FlatMesh {
    pub chunk_index: usize,
    pub model_translation: Vec3,
    bytes: Vec<u8>,
}

impl FlatMesh {
    pub(crate) fn new(chunk_index: usize, model_translation: Vec3, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len() % crate::pack::FLAT_STRIDE, 0);
        Self {
            chunk_index,
            model_translation,
            bytes,
        }
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl VertexSource for FlatMesh {
    fn vertex_data(&self) -> VertexData<'_> {
        VertexData::Bytes(&self.bytes)
    }

    fn layout(&self) -> &'static VertexLayout {
        &FLAT_LAYOUT
    }

    fn vertex_count(&self) -> usize {
        self.bytes.len() / crate::pack::FLAT_STRIDE
    }
}
