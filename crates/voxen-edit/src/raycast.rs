use voxen_geom::{IVec3, Vec3};

/// First solid cell hit by a ray, with the entry face normal. The normal is
/// zero when the ray starts inside a solid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RayHit {
    pub cell: IVec3,
    pub normal: IVec3,
}

// Parametric increment substituted for degenerate ray axes. Large enough
// that the axis never wins the advance comparison, finite so accumulation
// stays ordered.
const DEGENERATE_STEP: f32 = 1.0e30;

#[derive(Clone, Copy)]
struct Axis {
    step: i32,
    delta: f32,
    tmax: f32,
}

impl Axis {
    /// Sets up DDA bookkeeping for one axis of the segment. `span` is the
    /// axis extent of the whole segment, so `tmax`/`delta` are in units of
    /// the normalized segment parameter `[0, 1]`.
    fn new(origin: f32, span: f32) -> Axis {
        if span == 0.0 {
            return Axis {
                step: 0,
                delta: DEGENERATE_STEP,
                tmax: DEGENERATE_STEP,
            };
        }
        let step = if span > 0.0 { 1 } else { -1 };
        let delta = (1.0 / span.abs()).min(DEGENERATE_STEP);
        let fract = origin - origin.floor();
        let tmax = if step > 0 {
            delta * (1.0 - fract)
        } else {
            delta * fract
        };
        Axis { step, delta, tmax }
    }
}

/// Amanatides–Woo traversal of the voxel grid along the segment from
/// `origin` to `origin + dir * max_dist`, visiting every cell the segment
/// passes through in order. Returns the first cell where `is_solid` reports
/// true. Ties advance X before Z before Y.
pub fn raycast<F>(origin: Vec3, dir: Vec3, max_dist: f32, mut is_solid: F) -> Option<RayHit>
where
    F: FnMut(IVec3) -> bool,
{
    let end = origin + dir * max_dist;
    let mut ax = Axis::new(origin.x, end.x - origin.x);
    let mut ay = Axis::new(origin.y, end.y - origin.y);
    let mut az = Axis::new(origin.z, end.z - origin.z);

    let mut cell = origin.floor_cell();
    let mut normal = IVec3::ZERO;

    while !(ax.tmax > 1.0 && ay.tmax > 1.0 && az.tmax > 1.0) {
        if is_solid(cell) {
            return Some(RayHit { cell, normal });
        }
        // Smallest accumulated parameter advances; ties prefer X, then Z,
        // then Y.
        if ax.tmax <= ay.tmax && ax.tmax <= az.tmax {
            cell.x += ax.step;
            ax.tmax += ax.delta;
            normal = IVec3::new(-ax.step, 0, 0);
        } else if az.tmax <= ay.tmax {
            cell.z += az.step;
            az.tmax += az.delta;
            normal = IVec3::new(0, 0, -az.step);
        } else {
            cell.y += ay.step;
            ay.tmax += ay.delta;
            normal = IVec3::new(0, -ay.step, 0);
        }
    }
    None
}
