use log::info;
use voxen_edit::{EditOutcome, InteractionMode, VoxelHandler};
use voxen_geom::Vec3;
use voxen_mesh_cpu::{ChunkMesh, VertexSource, build_chunk_mesh};
use voxen_world::{World, WorldConfig};

/// Interact events arriving from the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// One synchronous world session: the voxel arena, the interaction handler,
/// and a mesh per chunk slot. Everything runs inline on the caller's
/// thread; a mesh is rebuilt at the moment its chunk is invalidated.
pub struct Session {
    world: World,
    handler: VoxelHandler,
    meshes: Vec<ChunkMesh>,
}

impl Session {
    /// Generates terrain for every chunk, then meshes the whole world.
    pub fn create(cfg: WorldConfig) -> Session {
        let world = World::generate(cfg);
        let meshes = (0..world.chunk_count())
            .map(|i| build_chunk_mesh(&world, i))
            .collect();
        let session = Session {
            handler: VoxelHandler::new(cfg.default_block_id),
            world,
            meshes,
        };
        info!(
            "session up: {} chunks, {} non-empty, {} vertices",
            session.world.chunk_count(),
            session.non_empty_chunks(),
            session.total_vertices()
        );
        session
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[inline]
    pub fn mesh(&self, chunk_index: usize) -> &ChunkMesh {
        &self.meshes[chunk_index]
    }

    /// Left removes the voxel under the crosshair, right places against its
    /// hit face. The affected chunk meshes are rebuilt before returning.
    pub fn apply_interaction(
        &mut self,
        origin: Vec3,
        dir: Vec3,
        button: MouseButton,
    ) -> EditOutcome {
        self.handler.mode = match button {
            MouseButton::Left => InteractionMode::Remove,
            MouseButton::Right => InteractionMode::Place,
        };
        self.handler.update(&self.world, origin, dir);
        let out = self.handler.apply_edit(&mut self.world);
        for &i in &out.rebuilt {
            self.meshes[i] = build_chunk_mesh(&self.world, i);
        }
        out
    }

    pub fn total_vertices(&self) -> usize {
        self.meshes.iter().map(|m| m.vertex_count()).sum()
    }

    pub fn non_empty_chunks(&self) -> usize {
        (0..self.world.chunk_count())
            .filter(|&i| !self.world.chunk(i).is_empty)
            .count()
    }

    /// Meshes with geometry, paired with their model translation, in draw
    /// order for the upload/render layer.
    pub fn render_batches(&self) -> impl Iterator<Item = (&ChunkMesh, Vec3)> {
        self.meshes
            .iter()
            .filter(|m| !m.is_empty())
            .map(|m| (m, m.model_translation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxen_geom::IVec3;

    fn flat_floor_session() -> Session {
        // Deterministic low terrain: amplitude 0, offset 4 gives a flat
        // 4-voxel floor in a 2x1x2 chunk world.
        let mut cfg = WorldConfig::new(2, 1, 2, 8).with_seed(1);
        cfg.r#gen.amplitude = 0.0;
        cfg.r#gen.offset = 4.0;
        Session::create(cfg)
    }

    #[test]
    fn floor_world_meshes_every_chunk() {
        let s = flat_floor_session();
        assert_eq!(s.non_empty_chunks(), 4);
        assert!(s.total_vertices() > 0);
        // A flat floor spanning the whole world only shows its top: one
        // quad (6 verts) per surface voxel.
        let surface = s.world().cfg().world_size_x() * s.world().cfg().world_size_z();
        assert_eq!(s.total_vertices(), surface * 6);
        assert_eq!(s.render_batches().count(), 4);
    }

    #[test]
    fn remove_digs_a_hole_and_remeshes() {
        let mut s = flat_floor_session();
        let before = s.total_vertices();
        // Look straight down at the floor from above (4,_,4).
        let out = s.apply_interaction(
            Vec3::new(4.5, 8.5, 4.5),
            Vec3::new(0.0, -1.0, 0.0),
            MouseButton::Left,
        );
        assert_eq!(out.rebuilt, vec![0]);
        assert_eq!(s.world().voxel_at(IVec3::new(4, 3, 4)), 0);
        // The hole exposes four walls and a floor where one top quad was.
        assert_eq!(s.total_vertices(), before - 6 + 30);
    }

    #[test]
    fn place_fills_and_remeshes_inline() {
        let mut s = flat_floor_session();
        let before = s.total_vertices();
        let out = s.apply_interaction(
            Vec3::new(4.5, 8.5, 4.5),
            Vec3::new(0.0, -1.0, 0.0),
            MouseButton::Right,
        );
        assert_eq!(out.rebuilt, vec![0]);
        // The placed block sits on the floor: its top and four sides are
        // new, the covered floor quad is gone.
        assert_eq!(s.world().voxel_at(IVec3::new(4, 4, 4)), 1);
        assert_eq!(s.total_vertices(), before - 6 + 30);
    }

    #[test]
    fn boundary_interaction_rebuilds_neighbors_inline() {
        let mut s = flat_floor_session();
        // Dig at the seam between chunk (0,0,0) and chunk (1,0,0).
        let out = s.apply_interaction(
            Vec3::new(7.5, 8.5, 4.5),
            Vec3::new(0.0, -1.0, 0.0),
            MouseButton::Left,
        );
        assert_eq!(out.rebuilt.len(), 2);
        assert!(out.rebuilt.contains(&0) && out.rebuilt.contains(&1));
    }

    #[test]
    fn miss_changes_nothing() {
        let mut s = flat_floor_session();
        let before = s.total_vertices();
        let out = s.apply_interaction(
            Vec3::new(4.5, 8.5, 4.5),
            Vec3::new(0.0, 1.0, 0.0),
            MouseButton::Left,
        );
        assert!(!out.changed());
        assert_eq!(s.total_vertices(), before);
    }
}
