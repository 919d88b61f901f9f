//! Browser bindings for the page behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `web-sys` lives here. Feature detection runs once
//! at mount time and picks a concrete strategy, so per-event code never
//! re-checks what the browser supports.

pub mod scheduler;
pub mod storage;
pub mod surface;

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

use crate::error::PageError;
use crate::state::nav::resolve_scroll_top;
use crate::util::class_list;
use crate::util::schedule::Capabilities;

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, PageError> {
    window.document().ok_or(PageError::NoDocument)
}

fn has_property(target: &JsValue, name: &str) -> bool {
    Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

pub fn probe_capabilities(window: &Window) -> Capabilities {
    let caps = Capabilities {
        animation_frame: has_property(window.as_ref(), "requestAnimationFrame"),
        event_listener: has_property(window.as_ref(), "addEventListener"),
    };
    log::debug!("browser capabilities {caps:?}");
    caps
}

/// `(prefers-color-scheme: dark)`; false when media queries are unavailable.
pub fn system_prefers_dark(window: &Window) -> bool {
    window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches())
}

/// Current page scroll offset, `documentElement.scrollTop || body.scrollTop || 0`.
pub fn scroll_top(document: &Document) -> f64 {
    let root = document.document_element().map_or(0, |el| el.scroll_top());
    let body = document.body().map_or(0, |body| body.scroll_top());
    resolve_scroll_top(f64::from(root), f64::from(body))
}

/// How class tokens are edited on an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassEditor {
    TokenList,
    /// No `classList`: rewrite the `className` string.
    ClassName,
}

impl ClassEditor {
    pub fn probe(el: &Element) -> Self {
        if has_property(el.as_ref(), "classList") {
            Self::TokenList
        } else {
            log::debug!("classList unsupported, editing className");
            Self::ClassName
        }
    }

    pub fn contains(self, el: &Element, token: &str) -> bool {
        match self {
            Self::TokenList => el.class_list().contains(token),
            Self::ClassName => class_list::has_class(&el.class_name(), token),
        }
    }

    pub fn add(self, el: &Element, token: &str) -> Result<(), PageError> {
        match self {
            Self::TokenList => el.class_list().add_1(token)?,
            Self::ClassName => el.set_class_name(&class_list::add_class(&el.class_name(), token)),
        }
        Ok(())
    }

    pub fn remove(self, el: &Element, token: &str) -> Result<(), PageError> {
        match self {
            Self::TokenList => el.class_list().remove_1(token)?,
            Self::ClassName => el.set_class_name(&class_list::remove_class(&el.class_name(), token)),
        }
        Ok(())
    }

    pub fn set(self, el: &Element, token: &str, present: bool) -> Result<(), PageError> {
        if present { self.add(el, token) } else { self.remove(el, token) }
    }
}
