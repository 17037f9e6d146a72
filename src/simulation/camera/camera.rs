use glam::Vec3;

/// Move the camera up by `step` if it is below `target_y`.
///
/// Returns whether it moved. A camera at or above the target is left alone.
pub fn raise_camera(camera: &mut Vec3, target_y: f32, step: f32) -> bool {
    if camera.y < target_y {
        camera.y += step;
        true
    } else {
        false
    }
}
