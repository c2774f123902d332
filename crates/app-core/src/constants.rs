use glam::Vec2;

use crate::types::BodyView;

// Stage layout constants shared by the zone geometry and the web frontend.

// Stage space
pub const STAGE_WIDTH: f32 = 100.0; // zone geometry is authored against this width
pub const STAGE_HEIGHT: f32 = 400.0 / 3.0; // 3:4 aspect against the width

/// Fallback overlay anchor for a lookup with no matching zone.
pub const DEFAULT_ANCHOR: Vec2 = Vec2::new(50.0, 70.0);

// Overlay sizing
pub const TATTOO_BASE_SIZE: f32 = 18.0; // unscaled overlay box side, in stage units

// The silhouette sprite sheet holds both views side by side: front half
// then back half, each one stage wide.
pub const MODEL_SPRITE_WIDTH: f32 = 200.0;

#[inline]
pub fn model_sprite_offset_x(view: BodyView) -> f32 {
    match view {
        BodyView::Front => 0.0,
        BodyView::Back => -STAGE_WIDTH,
    }
}
