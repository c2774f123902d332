//! Mutable selection state and its derived values.
//!
//! The frontend owns one `SelectionState`, mutates it synchronously inside
//! an event handler, and re-renders from the resulting snapshot. Derived
//! values are recomputed on demand so they can never drift from the source
//! fields.

use glam::Vec2;
use smallvec::SmallVec;

use crate::catalog::{Catalog, StyleFilter};
use crate::pricing::{calc_price, size_scale};
use crate::types::{BodyPart, BodyType, BodyView, Gender, TattooDesign, TattooSize};
use crate::zones::{anchor_for, normalize_body_part};

#[derive(Clone, Debug)]
pub struct SelectionState {
    pub gender: Gender,
    pub body_type: BodyType,
    pub view: BodyView,
    pub size: TattooSize,
    pub selected_body_part: BodyPart,
    pub selected_tattoo_id: String,
    pub search: String,
    pub style_filter: StyleFilter,
    pub gallery_open: bool,
}

impl SelectionState {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            gender: Gender::M,
            body_type: BodyType::Std,
            view: BodyView::Front,
            size: TattooSize::M,
            selected_body_part: BodyPart::Other,
            selected_tattoo_id: catalog.first().id.to_owned(),
            search: String::new(),
            style_filter: StyleFilter::All,
            gallery_open: false,
        }
    }

    // ---------------- setters ----------------

    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    pub fn set_body_type(&mut self, body_type: BodyType) {
        self.body_type = body_type;
    }

    /// Switching the view renormalizes the selected body part so it always
    /// resolves to a zone on the new view.
    pub fn set_view(&mut self, view: BodyView) {
        self.view = view;
        let normalized = normalize_body_part(self.selected_body_part, view);
        if normalized != self.selected_body_part {
            log::debug!(
                "[view] {} remapped to {} on {}",
                self.selected_body_part,
                normalized,
                view.as_str()
            );
            self.selected_body_part = normalized;
        }
    }

    pub fn set_size(&mut self, size: TattooSize) {
        self.size = size;
    }

    pub fn select_body_part(&mut self, part: BodyPart) {
        self.selected_body_part = part;
    }

    /// Picking a design from the gallery also closes the sheet; the two
    /// are one user-visible action.
    pub fn select_tattoo(&mut self, id: &str) {
        self.selected_tattoo_id = id.to_owned();
        self.gallery_open = false;
    }

    pub fn open_gallery(&mut self) {
        self.gallery_open = true;
    }

    /// Every close path (close button, backdrop, Escape) funnels here.
    /// Search text and style filter survive the close.
    pub fn close_gallery(&mut self) {
        self.gallery_open = false;
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
    }

    pub fn set_style_filter(&mut self, filter: StyleFilter) {
        self.style_filter = filter;
    }

    // ---------------- derived values ----------------

    /// The selected design; an id that no longer resolves falls back to
    /// the first catalog entry.
    pub fn selected_tattoo(&self, catalog: &Catalog) -> &'static TattooDesign {
        catalog.resolve(&self.selected_tattoo_id)
    }

    pub fn filtered(&self, catalog: &Catalog) -> SmallVec<[&'static TattooDesign; 8]> {
        catalog.filter(&self.search, self.style_filter)
    }

    /// Overlay anchor for the current part and view.
    pub fn anchor(&self) -> Vec2 {
        anchor_for(self.selected_body_part, self.view)
    }

    pub fn price(&self, catalog: &Catalog) -> u32 {
        calc_price(
            self.size,
            self.selected_tattoo(catalog).style,
            self.selected_body_part,
        )
    }

    /// Silhouette asset token, `{gender}_{body_type}` (`m_std`).
    pub fn model_ref(&self) -> String {
        format!("{}_{}", self.gender.as_str(), self.body_type.as_str())
    }

    pub fn overlay_scale(&self) -> f32 {
        size_scale(self.size)
    }
}
