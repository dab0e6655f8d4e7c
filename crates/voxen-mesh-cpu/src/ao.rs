use voxen_geom::IVec3;
use voxen_world::World;

use crate::build::is_void;
use crate::face::Plane;

/// Ambient occlusion for the four corners of an exposed face, sampled at the
/// face-neighbor cell `cell` in the plane orthogonal to the face normal.
///
/// The eight samples around the face are named like a compass:
///
/// ```text
/// +----+---+----+
/// | nw | n | ne |
/// +----+---+----+
/// |  w | F |  e |
/// +----+---+----+
/// | sw | s | se |
/// +----+---+----+
/// ```
///
/// Each corner's value is the number of void cells among its three
/// surrounding samples, so 3 is fully open and 0 fully occluded. Cells
/// outside the world count as occupied, matching the mesher's boundary
/// policy.
pub(crate) fn face_corner_ao(world: &World, cell: IVec3, plane: Plane) -> [u8; 4] {
    let v = |dx: i32, dy: i32, dz: i32| is_void(world, cell.offset(dx, dy, dz)) as u8;
    let (n, nw, w, sw, s, se, e, ne) = match plane {
        Plane::Y => (
            v(0, 0, -1),
            v(-1, 0, -1),
            v(-1, 0, 0),
            v(-1, 0, 1),
            v(0, 0, 1),
            v(1, 0, 1),
            v(1, 0, 0),
            v(1, 0, -1),
        ),
        Plane::X => (
            v(0, 0, -1),
            v(0, -1, -1),
            v(0, -1, 0),
            v(0, -1, 1),
            v(0, 0, 1),
            v(0, 1, 1),
            v(0, 1, 0),
            v(0, 1, -1),
        ),
        Plane::Z => (
            v(-1, 0, 0),
            v(-1, -1, 0),
            v(0, -1, 0),
            v(1, -1, 0),
            v(1, 0, 0),
            v(1, 1, 0),
            v(0, 1, 0),
            v(-1, 1, 0),
        ),
    };
    [n + nw + w, e + ne + n, s + se + e, w + sw + s]
}
