// Pricing model: multiplicative coefficients, half-up rounding, the
// post-rounding floor, and the visual scale table staying separate.

use app_core::pricing::{
    calc_price, format_rub, size_factor, size_scale, style_factor, BASE_PRICE, MIN_PRICE,
};
use app_core::types::{BodyPart, TattooSize, TattooStyle};

#[test]
fn small_linework_arm_costs_base_price() {
    assert_eq!(
        calc_price(TattooSize::S, TattooStyle::Linework, BodyPart::Arm),
        BASE_PRICE
    );
}

#[test]
fn large_japan_back_price() {
    // 5900 * 1.55 * 1.20, rounded half-up
    assert_eq!(
        calc_price(TattooSize::L, TattooStyle::Japan, BodyPart::Back),
        10974
    );
}

#[test]
fn medium_blackwork_rounds_to_whole_rubles() {
    // 5900 * 1.25 * 1.15 = 8481.25 -> 8481
    assert_eq!(
        calc_price(TattooSize::M, TattooStyle::Blackwork, BodyPart::Leg),
        8481
    );
}

#[test]
fn small_minimal_stays_above_floor() {
    // 5900 * 0.95 = 5605; the floor only binds below 4900
    assert_eq!(
        calc_price(TattooSize::S, TattooStyle::Minimal, BodyPart::Neck),
        5605
    );
}

#[test]
fn price_never_below_floor_for_any_combination() {
    for size in TattooSize::ALL {
        for style in TattooStyle::ALL {
            for part in BodyPart::ALL {
                let price = calc_price(size, style, part);
                assert!(
                    price >= MIN_PRICE,
                    "{}/{}/{} priced below floor: {price}",
                    size.as_str(),
                    style,
                    part
                );
            }
        }
    }
}

#[test]
fn body_part_factor_is_currently_uniform() {
    // The per-zone table is a placeholder; every part prices the same
    // until it is tuned.
    let reference = calc_price(TattooSize::M, TattooStyle::Japan, BodyPart::Arm);
    for part in BodyPart::ALL {
        assert_eq!(calc_price(TattooSize::M, TattooStyle::Japan, part), reference);
    }
}

#[test]
fn size_factor_and_size_scale_are_distinct_tables() {
    for size in TattooSize::ALL {
        assert_ne!(size_factor(size), f64::from(size_scale(size)));
    }
}

#[test]
fn style_factor_matches_price_table() {
    assert_eq!(style_factor(TattooStyle::Linework), 1.0);
    assert_eq!(style_factor(TattooStyle::Blackwork), 1.15);
    assert_eq!(style_factor(TattooStyle::Minimal), 0.95);
    assert_eq!(style_factor(TattooStyle::Japan), 1.2);
}

#[test]
fn format_rub_groups_thousands() {
    assert_eq!(format_rub(499), "499\u{a0}₽");
    assert_eq!(format_rub(5900), "5\u{a0}900\u{a0}₽");
    assert_eq!(format_rub(10974), "10\u{a0}974\u{a0}₽");
    assert_eq!(format_rub(1_234_567), "1\u{a0}234\u{a0}567\u{a0}₽");
}
