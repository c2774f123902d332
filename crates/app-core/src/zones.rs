//! Per-view body zone geometry: hit polygons, anchors, and the
//! view-crossing normalization rule.
//!
//! Zones live in the normalized stage space (x in \[0, 100\], y in
//! \[0, 400/3\]). Each view has a fixed, disjoint-by-body-part zone set;
//! `chest` is only visible from the front and `back` only from behind.

use glam::Vec2;

use crate::constants::DEFAULT_ANCHOR;
use crate::types::{BodyPart, BodyView};

/// A hit-testable region of the silhouette, tied to one body part and one
/// view, with the anchor the tattoo overlay is centered on.
#[derive(Clone, Copy, Debug)]
pub struct Zone {
    pub id: &'static str,
    pub body_part: BodyPart,
    pub outline: &'static [Vec2],
    pub anchor: Vec2,
}

const fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

pub const ZONES_FRONT: [Zone; 7] = [
    Zone {
        id: "arm_l_front",
        body_part: BodyPart::Arm,
        outline: &[v(18.0, 34.0), v(30.0, 34.0), v(28.0, 76.0), v(16.0, 78.0)],
        anchor: v(24.0, 50.0),
    },
    Zone {
        id: "arm_r_front",
        body_part: BodyPart::Arm,
        outline: &[v(70.0, 34.0), v(82.0, 34.0), v(84.0, 78.0), v(72.0, 76.0)],
        anchor: v(76.0, 50.0),
    },
    Zone {
        id: "leg_l_front",
        body_part: BodyPart::Leg,
        outline: &[v(37.0, 76.0), v(48.0, 76.0), v(45.0, 130.0), v(34.0, 130.0)],
        anchor: v(40.0, 102.0),
    },
    Zone {
        id: "leg_r_front",
        body_part: BodyPart::Leg,
        outline: &[v(52.0, 76.0), v(63.0, 76.0), v(66.0, 130.0), v(55.0, 130.0)],
        anchor: v(60.0, 102.0),
    },
    Zone {
        id: "chest_front",
        body_part: BodyPart::Chest,
        outline: &[v(33.0, 35.0), v(67.0, 35.0), v(63.0, 62.0), v(37.0, 62.0)],
        anchor: v(50.0, 48.0),
    },
    Zone {
        id: "neck_front",
        body_part: BodyPart::Neck,
        outline: &[v(44.0, 22.0), v(56.0, 22.0), v(55.0, 34.0), v(45.0, 34.0)],
        anchor: v(50.0, 27.0),
    },
    Zone {
        id: "other_front",
        body_part: BodyPart::Other,
        outline: &[v(36.0, 62.0), v(64.0, 62.0), v(61.0, 78.0), v(39.0, 78.0)],
        anchor: v(50.0, 70.0),
    },
];

pub const ZONES_BACK: [Zone; 7] = [
    Zone {
        id: "arm_l_back",
        body_part: BodyPart::Arm,
        outline: &[v(18.0, 34.0), v(30.0, 34.0), v(28.0, 76.0), v(16.0, 78.0)],
        anchor: v(24.0, 50.0),
    },
    Zone {
        id: "arm_r_back",
        body_part: BodyPart::Arm,
        outline: &[v(70.0, 34.0), v(82.0, 34.0), v(84.0, 78.0), v(72.0, 76.0)],
        anchor: v(76.0, 50.0),
    },
    Zone {
        id: "leg_l_back",
        body_part: BodyPart::Leg,
        outline: &[v(37.0, 76.0), v(48.0, 76.0), v(45.0, 130.0), v(34.0, 130.0)],
        anchor: v(40.0, 102.0),
    },
    Zone {
        id: "leg_r_back",
        body_part: BodyPart::Leg,
        outline: &[v(52.0, 76.0), v(63.0, 76.0), v(66.0, 130.0), v(55.0, 130.0)],
        anchor: v(60.0, 102.0),
    },
    Zone {
        id: "back_back",
        body_part: BodyPart::Back,
        outline: &[v(33.0, 35.0), v(67.0, 35.0), v(63.0, 70.0), v(37.0, 70.0)],
        anchor: v(50.0, 52.0),
    },
    Zone {
        id: "neck_back",
        body_part: BodyPart::Neck,
        outline: &[v(44.0, 22.0), v(56.0, 22.0), v(55.0, 34.0), v(45.0, 34.0)],
        anchor: v(50.0, 27.0),
    },
    Zone {
        id: "other_back",
        body_part: BodyPart::Other,
        outline: &[v(36.0, 70.0), v(64.0, 70.0), v(61.0, 82.0), v(39.0, 82.0)],
        anchor: v(50.0, 76.0),
    },
];

pub fn zones_for_view(view: BodyView) -> &'static [Zone] {
    match view {
        BodyView::Front => &ZONES_FRONT,
        BodyView::Back => &ZONES_BACK,
    }
}

/// Remap a body-part selection when the new view has no zone for it:
/// `back` becomes `chest` entering the front view and vice versa; every
/// other part exists on both views and passes through. Idempotent.
pub fn normalize_body_part(part: BodyPart, view: BodyView) -> BodyPart {
    match (part, view) {
        (BodyPart::Back, BodyView::Front) => BodyPart::Chest,
        (BodyPart::Chest, BodyView::Back) => BodyPart::Back,
        _ => part,
    }
}

/// Overlay anchor for a body part on a view. A part with no zone on the
/// view (unreachable after normalization) falls back to a fixed point.
pub fn anchor_for(part: BodyPart, view: BodyView) -> Vec2 {
    zones_for_view(view)
        .iter()
        .find(|zone| zone.body_part == part)
        .map(|zone| zone.anchor)
        .unwrap_or(DEFAULT_ANCHOR)
}

/// Even-odd point-in-polygon via horizontal ray crossing count.
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    let n = polygon.len();
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        let crosses = (a.y <= point.y && b.y > point.y) || (b.y <= point.y && a.y > point.y);
        if crosses {
            let t = (point.y - a.y) / (b.y - a.y);
            let x_intersect = a.x + t * (b.x - a.x);
            if x_intersect > point.x {
                inside = !inside;
            }
        }
    }
    inside
}

/// Resolve a stage-space point to a body part. Zones are scanned in the
/// view's declared order and the first hit wins; the regions themselves
/// are authored not to overlap, so order is only the tie-break of record.
pub fn hit_test(view: BodyView, point: Vec2) -> Option<BodyPart> {
    zones_for_view(view)
        .iter()
        .find(|zone| point_in_polygon(point, zone.outline))
        .map(|zone| zone.body_part)
}
