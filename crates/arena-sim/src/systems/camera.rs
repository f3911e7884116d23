//! Camera follower — recomputes the chase-camera pose from the player.
//!
//! Pure presentation math: the fixed offset is rotated by the player's
//! yaw, translated to the player, and the camera looks at the player.

use glam::DQuat;

use arena_core::constants::CAMERA_OFFSET;
use arena_core::state::CameraView;
use arena_core::types::Position;

/// Compute the camera pose for the given player transform.
pub fn follow_pose(player_pos: &Position, yaw: f64) -> CameraView {
    let rotated = DQuat::from_rotation_y(yaw) * CAMERA_OFFSET;
    CameraView {
        position: Position::from_dvec3(player_pos.as_dvec3() + rotated),
        look_at: *player_pos,
    }
}
