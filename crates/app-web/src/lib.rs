#![cfg(target_arch = "wasm32")]
//! Browser frontend: binds the configurator core to the static DOM shell.
//!
//! The shell provides these elements (ids are the contract):
//! - `#stage`: the try-on SVG with the stage viewBox, holding
//!   `#model-img` (silhouette sprite sheet), `#zone-layer` (hit polygons)
//!   and `#tattoo-overlay` (the placed design image)
//! - segmented controls `#gender-m`/`#gender-f`, `#body-slim`/`#body-std`/
//!   `#body-bulk`, `#view-front`/`#view-back`, `#size-s`/`#size-m`/`#size-l`
//! - selected-design card `#tattoo-thumb`, `#tattoo-name`, `#tattoo-style`,
//!   `#body-part-label`; running total `#price-value`
//! - gallery sheet `#open-gallery`, `#gallery-sheet`, `#gallery-backdrop`,
//!   `#gallery-close`, `#gallery-search`, `#style-chips` (chip buttons have
//!   ids `#style-all`, `#style-linework`, ... and carry `data-style`
//!   tokens), `#gallery-grid`, `#gallery-empty`

use std::cell::RefCell;
use std::rc::Rc;

use app_core::{Catalog, SelectionState};
use wasm_bindgen::prelude::*;
use web_sys as web;

pub mod coords;
pub mod dom;
pub mod events;
pub mod overlay;
pub mod render;
pub mod telegram;

/// Shared handles threaded through every event closure.
#[derive(Clone)]
pub struct App {
    pub document: web::Document,
    pub catalog: Rc<Catalog>,
    pub state: Rc<RefCell<SelectionState>>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Host handshake first; it must not depend on the shell being complete.
    telegram::init_host(&window);

    let catalog = Rc::new(Catalog::builtin());
    let state = Rc::new(RefCell::new(SelectionState::new(&catalog)));
    let app = App {
        document,
        catalog,
        state,
    };

    events::wire_all(&app)?;
    render::render_all(&app);
    log::info!("app-web ready");
    Ok(())
}
