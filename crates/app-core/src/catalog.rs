//! Static design catalog and gallery filtering.

use fnv::FnvHashMap;
use smallvec::SmallVec;

use crate::types::{TattooDesign, TattooStyle};

/// Built-in designs, in gallery display order.
const DESIGNS: &[TattooDesign] = &[
    TattooDesign {
        id: "rose",
        name: "Rose Bloom",
        style: TattooStyle::Linework,
        tags: &["flower", "soft"],
    },
    TattooDesign {
        id: "dragon",
        name: "Dragon Arc",
        style: TattooStyle::Japan,
        tags: &["myth", "bold"],
    },
    TattooDesign {
        id: "snake",
        name: "Snake Coil",
        style: TattooStyle::Blackwork,
        tags: &["dark", "sharp"],
    },
    TattooDesign {
        id: "lotus",
        name: "Lotus Calm",
        style: TattooStyle::Minimal,
        tags: &["zen", "clean"],
    },
    TattooDesign {
        id: "wave",
        name: "Wave Crest",
        style: TattooStyle::Linework,
        tags: &["sea", "motion"],
    },
    TattooDesign {
        id: "mask",
        name: "Mask Echo",
        style: TattooStyle::Blackwork,
        tags: &["neo", "contrast"],
    },
];

/// Gallery style filter: everything, or one style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleFilter {
    All,
    Only(TattooStyle),
}

impl StyleFilter {
    pub fn matches(self, style: TattooStyle) -> bool {
        match self {
            StyleFilter::All => true,
            StyleFilter::Only(only) => only == style,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            StyleFilter::All => "all",
            StyleFilter::Only(style) => style.as_str(),
        }
    }

    pub fn from_token(token: &str) -> Result<Self, crate::types::ParseTokenError> {
        if token == "all" {
            Ok(StyleFilter::All)
        } else {
            token.parse::<TattooStyle>().map(StyleFilter::Only)
        }
    }
}

/// Filter chips shown in the gallery, in display order.
pub const STYLE_FILTERS: [(StyleFilter, &str); 5] = [
    (StyleFilter::All, "Все"),
    (StyleFilter::Only(TattooStyle::Linework), "Linework"),
    (StyleFilter::Only(TattooStyle::Blackwork), "Blackwork"),
    (StyleFilter::Only(TattooStyle::Minimal), "Minimal"),
    (StyleFilter::Only(TattooStyle::Japan), "Japan"),
];

/// The design catalog plus an id index for O(1) selection lookups.
pub struct Catalog {
    items: &'static [TattooDesign],
    by_id: FnvHashMap<&'static str, usize>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self::from_designs(DESIGNS)
    }

    fn from_designs(items: &'static [TattooDesign]) -> Self {
        let by_id = items
            .iter()
            .enumerate()
            .map(|(i, design)| (design.id, i))
            .collect::<FnvHashMap<_, _>>();
        Self { items, by_id }
    }

    pub fn items(&self) -> &'static [TattooDesign] {
        self.items
    }

    pub fn first(&self) -> &'static TattooDesign {
        // the built-in catalog is never empty
        &self.items[0]
    }

    pub fn get(&self, id: &str) -> Option<&'static TattooDesign> {
        self.by_id.get(id).map(|&i| &self.items[i])
    }

    /// Selection lookup with the fallback rule: an id that no longer
    /// resolves yields the first entry instead of an error.
    pub fn resolve(&self, id: &str) -> &'static TattooDesign {
        self.get(id).unwrap_or_else(|| self.first())
    }

    /// Filter the catalog for the gallery. Results keep insertion order;
    /// an empty result is a normal, displayable state.
    pub fn filter(&self, search: &str, style: StyleFilter) -> SmallVec<[&'static TattooDesign; 8]> {
        let query = search.trim().to_lowercase();
        self.items
            .iter()
            .filter(|design| {
                style.matches(design.style) && (query.is_empty() || haystack(design).contains(&query))
            })
            .collect()
    }
}

/// Search space of one design: name, style token and tags, lowercased.
fn haystack(design: &TattooDesign) -> String {
    let mut text = String::new();
    text.push_str(design.name);
    text.push(' ');
    text.push_str(design.style.as_str());
    for tag in design.tags {
        text.push(' ');
        text.push_str(tag);
    }
    text.to_lowercase()
}
