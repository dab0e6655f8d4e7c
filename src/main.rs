use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use voxen_geom::{IVec3, Vec3};
use voxen_mesh_cpu::{VertexSource, build_chunk_mesh_flat};
use voxen_world::{WorldConfig, load_gen_params};

mod session;

use session::{MouseButton, Session};

/// Headless voxel-world session: generates terrain, meshes every chunk, and
/// optionally runs a scripted edit exchange.
#[derive(Parser, Debug)]
#[command(name = "voxen", version)]
struct Args {
    #[arg(long, default_value_t = 1337)]
    seed: i32,
    /// World extent in chunks.
    #[arg(long, default_value_t = 8)]
    width: usize,
    #[arg(long, default_value_t = 3)]
    height: usize,
    #[arg(long, default_value_t = 8)]
    depth: usize,
    /// Chunk edge length in voxels (max 63).
    #[arg(long, default_value_t = 32)]
    chunk_size: usize,
    /// Max interaction distance in voxels.
    #[arg(long, default_value_t = 6.0)]
    reach: f32,
    /// TOML file with terrain parameters.
    #[arg(long)]
    gen_config: Option<PathBuf>,
    /// Also report buffer sizes for the reduced no-AO vertex encoding.
    #[arg(long)]
    flat_stats: bool,
    /// Run a scripted remove/place at the world center.
    #[arg(long)]
    demo_edits: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut cfg =
        WorldConfig::new(args.width, args.height, args.depth, args.chunk_size).with_seed(args.seed);
    cfg.reach = args.reach;
    if let Some(path) = &args.gen_config {
        cfg = cfg.with_gen(load_gen_params(path)?);
    }

    let mut session = Session::create(cfg);
    info!(
        "world {}x{}x{} chunks of {}^3, seed {}",
        cfg.chunks_x, cfg.chunks_y, cfg.chunks_z, cfg.chunk_size, cfg.seed
    );
    info!(
        "packed mesh: {} vertices across {} visible chunks",
        session.total_vertices(),
        session.render_batches().count()
    );

    if args.flat_stats {
        let bytes: usize = (0..session.world().chunk_count())
            .map(|i| {
                let m = build_chunk_mesh_flat(session.world(), i);
                m.vertex_count() * m.layout().stride_bytes
            })
            .sum();
        info!("flat (no-AO) mesh: {} bytes total", bytes);
    }

    if args.demo_edits {
        run_demo_edits(&mut session);
    }

    Ok(())
}

/// Stands a viewer above the center column, looks straight down, removes
/// the surface voxel, then places one back.
fn run_demo_edits(session: &mut Session) {
    let cfg = *session.world().cfg();
    let cx = cfg.world_size_x() as i32 / 2;
    let cz = cfg.world_size_z() as i32 / 2;
    let Some(top) = (0..cfg.world_size_y() as i32)
        .rev()
        .find(|&y| session.world().is_solid(IVec3::new(cx, y, cz)))
    else {
        info!("demo: no terrain under the center column, skipping edits");
        return;
    };

    let origin = Vec3::new(cx as f32 + 0.5, top as f32 + 3.5, cz as f32 + 0.5);
    let down = Vec3::new(0.0, -1.0, 0.0);
    for button in [MouseButton::Left, MouseButton::Right] {
        let out = session.apply_interaction(origin, down, button);
        info!(
            "demo: {:?} at column ({cx},{cz}) rebuilt {} chunk meshes, {} vertices now",
            button,
            out.rebuilt.len(),
            session.total_vertices()
        );
    }
}
