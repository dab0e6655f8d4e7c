use voxen_geom::Vec3;

/// Axis-aligned voxel faces. The discriminants are the wire face ids the
/// shader decodes: 0 top, 1 bottom, 2 right, 3 left, 4 back, 5 front.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    PosY = 0,
    NegY = 1,
    PosX = 2,
    NegX = 3,
    NegZ = 4,
    PosZ = 5,
}

/// Plane orthogonal to a face normal; selects the ambient-occlusion
/// neighborhood pattern.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Plane {
    X,
    Y,
    Z,
}

impl Face {
    /// Faces in emission order within a voxel.
    pub const ALL: [Face; 6] = [
        Face::PosY,
        Face::NegY,
        Face::PosX,
        Face::NegX,
        Face::NegZ,
        Face::PosZ,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a face index `[0..6)` back into a `Face` value.
    /// Falls back to `PosY` for out-of-range indices.
    #[inline]
    pub fn from_index(i: usize) -> Face {
        match i {
            0 => Face::PosY,
            1 => Face::NegY,
            2 => Face::PosX,
            3 => Face::NegX,
            4 => Face::NegZ,
            5 => Face::PosZ,
            _ => Face::PosY,
        }
    }

    /// Integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
            Face::PosX => (1, 0, 0),
            Face::NegX => (-1, 0, 0),
            Face::NegZ => (0, 0, -1),
            Face::PosZ => (0, 0, 1),
        }
    }

    #[inline]
    pub fn normal(self) -> Vec3 {
        let (dx, dy, dz) = self.delta();
        Vec3::new(dx as f32, dy as f32, dz as f32)
    }

    #[inline]
    pub fn plane(self) -> Plane {
        match self {
            Face::PosY | Face::NegY => Plane::Y,
            Face::PosX | Face::NegX => Plane::X,
            Face::NegZ | Face::PosZ => Plane::Z,
        }
    }
}

/// Quad corner offsets per face, in emission order `v0..v3`. Added to the
/// voxel's local coordinates.
pub(crate) const FACE_CORNERS: [[(i32, i32, i32); 4]; 6] = [
    // PosY
    [(0, 1, 0), (1, 1, 0), (1, 1, 1), (0, 1, 1)],
    // NegY
    [(0, 0, 0), (1, 0, 0), (1, 0, 1), (0, 0, 1)],
    // PosX
    [(1, 0, 0), (1, 1, 0), (1, 1, 1), (1, 0, 1)],
    // NegX
    [(0, 0, 0), (0, 1, 0), (0, 1, 1), (0, 0, 1)],
    // NegZ
    [(0, 0, 0), (0, 1, 0), (1, 1, 0), (1, 0, 0)],
    // PosZ
    [(0, 0, 1), (0, 1, 1), (1, 1, 1), (1, 0, 1)],
];

/// Corner emission order for the two triangles of each face, keeping a
/// clockwise winding as seen from outside the voxel.
pub(crate) const WINDING: [[usize; 6]; 6] = [
    [0, 3, 2, 0, 2, 1], // PosY
    [0, 2, 3, 0, 1, 2], // NegY
    [0, 1, 2, 0, 2, 3], // PosX
    [0, 2, 1, 0, 3, 2], // NegX
    [0, 1, 2, 0, 2, 3], // NegZ
    [0, 2, 1, 0, 3, 2], // PosZ
];

/// Same, with the quad split along the other diagonal. Used when the
/// ambient-occlusion flip test fires; winding direction is unchanged.
pub(crate) const WINDING_FLIPPED: [[usize; 6]; 6] = [
    [1, 0, 3, 1, 3, 2], // PosY
    [1, 3, 0, 1, 2, 3], // NegY
    [3, 0, 1, 3, 1, 2], // PosX
    [3, 1, 0, 3, 2, 1], // NegX
    [3, 0, 1, 3, 1, 2], // NegZ
    [3, 1, 0, 3, 2, 1], // PosZ
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for f in Face::ALL {
            assert_eq!(Face::from_index(f.index()), f);
        }
    }

    #[test]
    fn corners_lie_on_the_face_plane() {
        for f in Face::ALL {
            let (dx, dy, dz) = f.delta();
            for c in FACE_CORNERS[f.index()] {
                // On the positive side the face plane is at offset 1, on the
                // negative side at 0, and the corner is pinned to it.
                if dx != 0 {
                    assert_eq!(c.0, if dx > 0 { 1 } else { 0 });
                }
                if dy != 0 {
                    assert_eq!(c.1, if dy > 0 { 1 } else { 0 });
                }
                if dz != 0 {
                    assert_eq!(c.2, if dz > 0 { 1 } else { 0 });
                }
            }
        }
    }

    #[test]
    fn windings_cover_the_same_quad() {
        for f in 0..6 {
            let mut base: Vec<usize> = WINDING[f].to_vec();
            let mut flip: Vec<usize> = WINDING_FLIPPED[f].to_vec();
            base.sort_unstable();
            flip.sort_unstable();
            // Two triangles share one diagonal: each corner pair appears,
            // with the shared diagonal's corners twice.
            assert_eq!(base.iter().filter(|&&i| i < 4).count(), 6);
            assert_eq!(flip.iter().filter(|&&i| i < 4).count(), 6);
            let covered: std::collections::HashSet<_> = base.iter().copied().collect();
            assert_eq!(covered.len(), 4);
            let covered: std::collections::HashSet<_> = flip.iter().copied().collect();
            assert_eq!(covered.len(), 4);
        }
    }
}
