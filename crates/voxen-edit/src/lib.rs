//! Player interaction with world voxels: raycasting and edits.
#![forbid(unsafe_code)]

mod handler;
mod raycast;

pub use handler::{EditOutcome, InteractionMode, RayTarget, VoxelHandler};
pub use raycast::{RayHit, raycast};
