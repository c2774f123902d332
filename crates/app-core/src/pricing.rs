//! Price derivation and the visual size scale.
//!
//! The price is a multiplicative model over three closed-set inputs; the
//! separate [`size_scale`] table only drives the rendered overlay size and
//! must never feed the price.

use crate::types::{BodyPart, TattooSize, TattooStyle};

/// Base price of a small linework piece, in rubles.
pub const BASE_PRICE: u32 = 5900;
/// Hard floor, applied after rounding.
pub const MIN_PRICE: u32 = 4900;

#[inline]
pub fn size_factor(size: TattooSize) -> f64 {
    match size {
        TattooSize::S => 1.0,
        TattooSize::M => 1.25,
        TattooSize::L => 1.55,
    }
}

#[inline]
pub fn style_factor(style: TattooStyle) -> f64 {
    match style {
        TattooStyle::Linework => 1.0,
        TattooStyle::Blackwork => 1.15,
        TattooStyle::Minimal => 0.95,
        TattooStyle::Japan => 1.2,
    }
}

// TODO: tune per-zone coefficients once the studio settles on them
#[inline]
pub fn body_part_factor(part: BodyPart) -> f64 {
    match part {
        BodyPart::Arm => 1.0,
        BodyPart::Leg => 1.0,
        BodyPart::Back => 1.0,
        BodyPart::Chest => 1.0,
        BodyPart::Neck => 1.0,
        BodyPart::Other => 1.0,
    }
}

/// Total price: `BASE_PRICE` times the three coefficients, rounded half-up
/// to a whole ruble, then floored at `MIN_PRICE`.
pub fn calc_price(size: TattooSize, style: TattooStyle, part: BodyPart) -> u32 {
    let raw = BASE_PRICE as f64 * size_factor(size) * style_factor(style) * body_part_factor(part);
    (raw.round() as u32).max(MIN_PRICE)
}

/// Visual overlay scale per size. Distinct from [`size_factor`].
#[inline]
pub fn size_scale(size: TattooSize) -> f32 {
    match size {
        TattooSize::S => 0.92,
        TattooSize::M => 1.05,
        TattooSize::L => 1.18,
    }
}

/// Display formatting: ru-RU digit grouping (no-break spaces) plus the
/// ruble sign.
pub fn format_rub(price: u32) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{a0}');
        }
        out.push(ch);
    }
    out.push('\u{a0}');
    out.push('₽');
    out
}
