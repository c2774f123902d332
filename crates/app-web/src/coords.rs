// Pointer-to-stage coordinate mapping. Kept free of web-sys types so the
// host-side test harness can include this module directly.

use app_core::constants::{STAGE_HEIGHT, STAGE_WIDTH};
use glam::Vec2;

/// Map a pointer position in client (CSS px) coordinates into stage
/// units, given the stage element's bounding rect. The shell keeps the
/// stage at the 3:4 stage aspect, so a plain proportional mapping holds.
/// Returns `None` for a degenerate rect (zero layout, display: none).
pub fn client_to_stage(
    client_x: f32,
    client_y: f32,
    rect_left: f32,
    rect_top: f32,
    rect_width: f32,
    rect_height: f32,
) -> Option<Vec2> {
    if rect_width <= 0.0 || rect_height <= 0.0 {
        return None;
    }
    let u = (client_x - rect_left) / rect_width;
    let v = (client_y - rect_top) / rect_height;
    Some(Vec2::new(u * STAGE_WIDTH, v * STAGE_HEIGHT))
}
