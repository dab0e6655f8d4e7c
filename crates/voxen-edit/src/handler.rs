use hashbrown::HashSet;
use voxen_geom::{IVec3, Vec3};
use voxen_world::{BlockId, EMPTY, World};

use crate::raycast::raycast;

/// What a click does to the voxel under the crosshair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    Remove,
    Place,
}

/// Resolved result of the last raycast: the solid voxel the player is
/// looking at and the face it was entered through.
#[derive(Clone, Copy, Debug)]
pub struct RayTarget {
    pub id: BlockId,
    pub chunk_index: usize,
    pub local_index: usize,
    pub local: IVec3,
    pub world_pos: IVec3,
    pub normal: IVec3,
}

/// Chunks whose meshes must be rebuilt after an edit: the edited chunk
/// first, then any neighbors sharing an edited boundary voxel. Empty when
/// the edit was a no-op.
#[derive(Clone, Debug, Default)]
pub struct EditOutcome {
    pub rebuilt: Vec<usize>,
}

impl EditOutcome {
    #[inline]
    pub fn changed(&self) -> bool {
        !self.rebuilt.is_empty()
    }
}

/// Mediates player interaction with world voxels. `update` re-raycasts from
/// the viewer; `apply_edit` mutates the grid and reports which chunk meshes
/// the caller must rebuild, inline, before the next frame.
pub struct VoxelHandler {
    pub mode: InteractionMode,
    pub new_block_id: BlockId,
    last_hit: Option<RayTarget>,
}

impl VoxelHandler {
    pub fn new(new_block_id: BlockId) -> Self {
        Self {
            mode: InteractionMode::Remove,
            new_block_id,
            last_hit: None,
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            InteractionMode::Remove => InteractionMode::Place,
            InteractionMode::Place => InteractionMode::Remove,
        };
    }

    #[inline]
    pub fn last_hit(&self) -> Option<&RayTarget> {
        self.last_hit.as_ref()
    }

    /// Raycasts from the viewer and caches the result for the next edit.
    pub fn update(&mut self, world: &World, origin: Vec3, dir: Vec3) -> bool {
        self.last_hit = raycast(origin, dir, world.cfg().reach, |c| world.is_solid(c))
            .and_then(|hit| {
                let v = world.lookup(hit.cell)?;
                Some(RayTarget {
                    id: v.id,
                    chunk_index: v.chunk_index,
                    local_index: v.local_index,
                    local: v.local,
                    world_pos: hit.cell,
                    normal: hit.normal,
                })
            });
        self.last_hit.is_some()
    }

    /// Applies the current mode at the cached raycast target. With no
    /// target, or a placement that lands outside the world or on a solid
    /// cell, nothing changes and no rebuilds are reported.
    pub fn apply_edit(&mut self, world: &mut World) -> EditOutcome {
        match self.mode {
            InteractionMode::Remove => self.remove_voxel(world),
            InteractionMode::Place => self.place_voxel(world),
        }
    }

    fn remove_voxel(&mut self, world: &mut World) -> EditOutcome {
        let Some(hit) = self.last_hit else {
            return EditOutcome::default();
        };
        let _ = world.set_voxel(hit.world_pos, EMPTY);
        rebuild_set(world, hit.chunk_index, hit.local, hit.world_pos)
    }

    fn place_voxel(&mut self, world: &mut World) -> EditOutcome {
        let Some(hit) = self.last_hit else {
            return EditOutcome::default();
        };
        let target = hit.world_pos + hit.normal;
        let Some(v) = world.lookup(target) else {
            return EditOutcome::default();
        };
        if v.id != EMPTY {
            return EditOutcome::default();
        }
        let _ = world.set_voxel(target, self.new_block_id);
        rebuild_set(world, v.chunk_index, v.local, target)
    }
}

/// The edited chunk plus every neighbor across a boundary plane the edited
/// voxel touches. Face culling at chunk borders reads the neighbor's
/// voxels, so those meshes are stale too.
fn rebuild_set(world: &World, chunk_index: usize, local: IVec3, world_pos: IVec3) -> EditOutcome {
    let cfg = world.cfg();
    let edge = cfg.chunk_size as i32 - 1;
    let mut seen: HashSet<usize> = HashSet::new();
    let mut rebuilt = vec![chunk_index];
    seen.insert(chunk_index);

    let mut push_neighbor = |p: IVec3| {
        if let Some(i) = cfg.chunk_index_of(p)
            && seen.insert(i)
        {
            rebuilt.push(i);
        }
    };

    if local.x == 0 {
        push_neighbor(world_pos.offset(-1, 0, 0));
    } else if local.x == edge {
        push_neighbor(world_pos.offset(1, 0, 0));
    }
    if local.y == 0 {
        push_neighbor(world_pos.offset(0, -1, 0));
    } else if local.y == edge {
        push_neighbor(world_pos.offset(0, 1, 0));
    }
    if local.z == 0 {
        push_neighbor(world_pos.offset(0, 0, -1));
    } else if local.z == edge {
        push_neighbor(world_pos.offset(0, 0, 1));
    }

    EditOutcome { rebuilt }
}
