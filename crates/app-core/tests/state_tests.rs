// Selection state: startup defaults, the coupling rules between fields,
// and the derived values staying consistent with their sources.

use app_core::catalog::{Catalog, StyleFilter};
use app_core::state::SelectionState;
use app_core::types::{BodyPart, BodyType, BodyView, Gender, TattooSize, TattooStyle};
use app_core::zones::anchor_for;
use app_core::{calc_price, size_scale};

fn fixture() -> (Catalog, SelectionState) {
    let catalog = Catalog::builtin();
    let state = SelectionState::new(&catalog);
    (catalog, state)
}

#[test]
fn startup_defaults() {
    let (catalog, state) = fixture();
    assert_eq!(state.gender, Gender::M);
    assert_eq!(state.body_type, BodyType::Std);
    assert_eq!(state.view, BodyView::Front);
    assert_eq!(state.size, TattooSize::M);
    assert_eq!(state.selected_body_part, BodyPart::Other);
    assert_eq!(state.selected_tattoo_id, catalog.first().id);
    assert_eq!(state.search, "");
    assert_eq!(state.style_filter, StyleFilter::All);
    assert!(!state.gallery_open);
}

#[test]
fn view_switch_normalizes_the_selected_part() {
    let (_catalog, mut state) = fixture();
    state.select_body_part(BodyPart::Chest);
    state.set_view(BodyView::Back);
    assert_eq!(state.selected_body_part, BodyPart::Back);
    state.set_view(BodyView::Front);
    assert_eq!(state.selected_body_part, BodyPart::Chest);
    // the rendered anchor follows the remapped part
    assert_eq!(state.anchor(), anchor_for(BodyPart::Chest, BodyView::Front));
}

#[test]
fn view_switch_leaves_shared_parts_alone() {
    let (_catalog, mut state) = fixture();
    state.select_body_part(BodyPart::Arm);
    state.set_view(BodyView::Back);
    assert_eq!(state.selected_body_part, BodyPart::Arm);
}

#[test]
fn gender_and_body_type_only_change_the_silhouette() {
    let (catalog, mut state) = fixture();
    state.select_body_part(BodyPart::Arm);
    state.select_tattoo("dragon");
    let price_before = state.price(&catalog);

    state.set_gender(Gender::F);
    state.set_body_type(BodyType::Bulk);

    assert_eq!(state.selected_body_part, BodyPart::Arm);
    assert_eq!(state.selected_tattoo_id, "dragon");
    assert_eq!(state.price(&catalog), price_before);
    assert_eq!(state.model_ref(), "f_bulk");
}

#[test]
fn selecting_a_design_closes_the_gallery() {
    let (_catalog, mut state) = fixture();
    state.open_gallery();
    state.select_tattoo("wave");
    assert_eq!(state.selected_tattoo_id, "wave");
    assert!(!state.gallery_open);
}

#[test]
fn gallery_cycle_preserves_search_and_filter() {
    let (_catalog, mut state) = fixture();
    state.set_search("dark".to_owned());
    state.set_style_filter(StyleFilter::Only(TattooStyle::Blackwork));
    state.open_gallery();
    state.close_gallery();
    assert_eq!(state.search, "dark");
    assert_eq!(state.style_filter, StyleFilter::Only(TattooStyle::Blackwork));
}

#[test]
fn unknown_selected_id_falls_back_to_first_entry() {
    let (catalog, mut state) = fixture();
    state.select_tattoo("ghost");
    assert_eq!(state.selected_tattoo(&catalog).id, catalog.first().id);
    // price stays derivable from the fallback design
    assert_eq!(
        state.price(&catalog),
        calc_price(state.size, catalog.first().style, state.selected_body_part)
    );
}

#[test]
fn price_follows_size_style_and_part() {
    let (catalog, mut state) = fixture();
    state.set_view(BodyView::Back);
    state.select_body_part(BodyPart::Back);
    state.select_tattoo("dragon");
    state.set_size(TattooSize::L);
    assert_eq!(state.price(&catalog), 10974);
}

#[test]
fn filtered_designs_follow_state_fields() {
    let (catalog, mut state) = fixture();
    assert_eq!(state.filtered(&catalog).len(), catalog.items().len());
    state.set_search("coil".to_owned());
    let filtered = state.filtered(&catalog);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "snake");
}

#[test]
fn overlay_scale_uses_the_visual_table() {
    let (_catalog, mut state) = fixture();
    state.set_size(TattooSize::L);
    assert_eq!(state.overlay_scale(), size_scale(TattooSize::L));
}

#[test]
fn model_ref_uses_the_asset_token_convention() {
    let (_catalog, state) = fixture();
    assert_eq!(state.model_ref(), "m_std");
}
