use crate::face::Face;

// Bit layout of the packed vertex, LSB first:
// flip:1 | ao:2 | face:3 | block_id:8 | z:6 | y:6 | x:6
const FLIP_SHIFT: u32 = 0;
const AO_SHIFT: u32 = 1;
const FACE_SHIFT: u32 = 3;
const ID_SHIFT: u32 = 6;
const Z_SHIFT: u32 = 14;
const Y_SHIFT: u32 = 20;
const X_SHIFT: u32 = 26;

/// Bytes per vertex in the reduced no-AO encoding: x, y, z, block id, face.
pub const FLAT_STRIDE: usize = 5;

/// One mesh vertex packed into 32 bits. Local corner coordinates occupy six
/// bits each (corners reach `chunk_size`, so values up to 63 fit), the block
/// id eight, the face id three, the ambient-occlusion value two, and the
/// diagonal-flip flag one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PackedVertex(pub u32);

impl PackedVertex {
    #[inline]
    pub fn pack(x: i32, y: i32, z: i32, block_id: u8, face: Face, ao: u8, flip: bool) -> Self {
        debug_assert!((0..64).contains(&x) && (0..64).contains(&y) && (0..64).contains(&z));
        debug_assert!(ao <= 3);
        PackedVertex(
            (x as u32) << X_SHIFT
                | (y as u32) << Y_SHIFT
                | (z as u32) << Z_SHIFT
                | (block_id as u32) << ID_SHIFT
                | (face.index() as u32) << FACE_SHIFT
                | (ao as u32) << AO_SHIFT
                | (flip as u32) << FLIP_SHIFT,
        )
    }

    #[inline]
    pub fn x(self) -> i32 {
        (self.0 >> X_SHIFT & 0x3f) as i32
    }

    #[inline]
    pub fn y(self) -> i32 {
        (self.0 >> Y_SHIFT & 0x3f) as i32
    }

    #[inline]
    pub fn z(self) -> i32 {
        (self.0 >> Z_SHIFT & 0x3f) as i32
    }

    #[inline]
    pub fn block_id(self) -> u8 {
        (self.0 >> ID_SHIFT & 0xff) as u8
    }

    #[inline]
    pub fn face(self) -> Face {
        Face::from_index((self.0 >> FACE_SHIFT & 0x7) as usize)
    }

    #[inline]
    pub fn ao(self) -> u8 {
        (self.0 >> AO_SHIFT & 0x3) as u8
    }

    #[inline]
    pub fn flip(self) -> bool {
        self.0 >> FLIP_SHIFT & 0x1 != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_round_trip() {
        for face in Face::ALL {
            for ao in 0..=3u8 {
                for flip in [false, true] {
                    let v = PackedVertex::pack(32, 0, 63, 255, face, ao, flip);
                    assert_eq!(v.x(), 32);
                    assert_eq!(v.y(), 0);
                    assert_eq!(v.z(), 63);
                    assert_eq!(v.block_id(), 255);
                    assert_eq!(v.face(), face);
                    assert_eq!(v.ao(), ao);
                    assert_eq!(v.flip(), flip);
                }
            }
        }
    }

    #[test]
    fn fields_do_not_overlap() {
        let v = PackedVertex::pack(0, 0, 0, 0, Face::PosY, 0, true);
        assert_eq!(v.0, 1);
        let v = PackedVertex::pack(63, 63, 63, 255, Face::PosZ, 3, true);
        let expect =
            (63u32 << 26) | (63 << 20) | (63 << 14) | (255 << 6) | (5 << 3) | (3 << 1) | 1;
        assert_eq!(v.0, expect);
    }
}
