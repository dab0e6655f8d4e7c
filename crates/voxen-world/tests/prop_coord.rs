use proptest::prelude::*;
use voxen_geom::IVec3;
use voxen_world::WorldConfig;

fn dims() -> impl Strategy<Value = (usize, usize, usize, usize)> {
    (1usize..=4, 1usize..=4, 1usize..=4, 1usize..=16)
}

proptest! {
    // Decomposing a world coordinate into chunk + local and recomposing it
    // recovers the original position and local index.
    #[test]
    fn chunk_local_round_trip((w, h, d, s) in dims(), seed in any::<u64>()) {
        let cfg = WorldConfig::new(w, h, d, s);
        let mut rng = seed;
        let mut next = move |bound: usize| {
            // xorshift64, plenty for coordinate sampling
            rng ^= rng << 13;
            rng ^= rng >> 7;
            rng ^= rng << 17;
            (rng % bound as u64) as i32
        };
        for _ in 0..32 {
            let p = IVec3::new(
                next(cfg.world_size_x()),
                next(cfg.world_size_y()),
                next(cfg.world_size_z()),
            );
            let ci = cfg.chunk_index_of(p).expect("in-bounds position");
            let local = cfg.local_of(p);
            let rebuilt = cfg.chunk_coord_of(ci).origin(cfg.chunk_size) + local;
            prop_assert_eq!(rebuilt, p);
            prop_assert_eq!(
                cfg.local_index_of(cfg.local_of(rebuilt)),
                cfg.local_index_of(local)
            );
        }
    }

    // Every chunk flat index is hit exactly once over the chunk extents.
    #[test]
    fn chunk_index_is_a_bijection((w, h, d, s) in dims()) {
        let cfg = WorldConfig::new(w, h, d, s);
        let mut seen = vec![false; cfg.world_volume()];
        for cy in 0..h as i32 {
            for cz in 0..d as i32 {
                for cx in 0..w as i32 {
                    let i = cfg
                        .chunk_index(voxen_world::ChunkCoord::new(cx, cy, cz))
                        .expect("in-bounds coord");
                    prop_assert!(!seen[i]);
                    seen[i] = true;
                }
            }
        }
        prop_assert!(seen.into_iter().all(|b| b));
    }

    // Local indices cover [0, chunk_volume) uniquely in z-before-y order.
    #[test]
    fn local_index_is_a_bijection(s in 1usize..=16) {
        let cfg = WorldConfig::new(1, 1, 1, s);
        let mut seen = vec![false; cfg.chunk_volume()];
        for y in 0..s as i32 {
            for z in 0..s as i32 {
                for x in 0..s as i32 {
                    let i = cfg.local_index_of(IVec3::new(x, y, z));
                    prop_assert!(i < cfg.chunk_volume());
                    prop_assert!(!seen[i]);
                    seen[i] = true;
                }
            }
        }
        prop_assert!(seen.into_iter().all(|b| b));
    }
}
