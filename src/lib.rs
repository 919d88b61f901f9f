//! # toc-page
//!
//! Page behavior for generated table-of-contents documents: a persisted
//! dark/light theme toggle and a navigation bar that hides while the reader
//! scrolls down.
//!
//! The decision logic (`state`, `util`) is host-independent and driven through
//! small traits for storage, document surfaces, and scheduling. The `hydrate`
//! feature binds those traits to the browser (`dom`) and mounts both behaviors
//! when the WASM module starts (`page`).

pub mod config;
pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod page;

/// WASM entry point.
///
/// Installs the console logger and panic hook, reads the optional config
/// override from the page, and mounts the theme toggle and scroll-hide nav.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let parsed = page::read_config();
    let config = parsed.as_ref().cloned().unwrap_or_default();
    let level = config.level().unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);
    if let Err(e) = &parsed {
        log::warn!("ignoring page config override: {e}");
    }

    match page::mount(&config) {
        Ok(ctx) => log::debug!("page behavior mounted: {ctx:?}"),
        Err(e) => log::warn!("page behavior not mounted: {e}"),
    }
}
