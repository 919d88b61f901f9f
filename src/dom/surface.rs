//! DOM elements behind the theme and nav traits.

use web_sys::{Document, Element};

use super::ClassEditor;
use crate::config::PageConfig;
use crate::state::theme::Theme;
use crate::util::dark_mode::ThemeSurface;
use crate::util::scroll_hide::NavHost;

/// Theme classes on the document root plus the optional toggle control.
#[derive(Debug)]
pub struct DocumentTheme {
    root: Element,
    toggle: Option<Element>,
    editor: ClassEditor,
    dark_class: String,
    light_class: String,
}

impl DocumentTheme {
    pub fn new(root: Element, toggle: Option<Element>, config: &PageConfig) -> Self {
        let editor = ClassEditor::probe(&root);
        Self {
            root,
            toggle,
            editor,
            dark_class: config.dark_class.clone(),
            light_class: config.light_class.clone(),
        }
    }
}

impl ThemeSurface for DocumentTheme {
    fn is_dark(&self) -> bool {
        self.editor.contains(&self.root, &self.dark_class)
    }

    fn apply(&mut self, theme: Theme) {
        let (on, off) = match theme {
            Theme::Dark => (&self.dark_class, &self.light_class),
            Theme::Light => (&self.light_class, &self.dark_class),
        };
        let result = self
            .editor
            .remove(&self.root, off)
            .and_then(|()| self.editor.add(&self.root, on));
        if let Err(e) = result {
            log::warn!("failed to apply {} theme class: {e}", theme.as_str());
        }
    }

    fn set_glyph(&mut self, glyph: &str) {
        if let Some(toggle) = &self.toggle {
            toggle.set_inner_html(glyph);
        }
    }
}

/// The navigation element and the document it scrolls with.
#[derive(Debug)]
pub struct NavElement {
    nav: Element,
    document: Document,
    editor: ClassEditor,
    hidden_class: String,
}

impl NavElement {
    pub fn new(nav: Element, document: Document, config: &PageConfig) -> Self {
        let editor = ClassEditor::probe(&nav);
        Self { nav, document, editor, hidden_class: config.hidden_class.clone() }
    }
}

impl NavHost for NavElement {
    fn scroll_top(&self) -> f64 {
        super::scroll_top(&self.document)
    }

    fn set_hidden(&mut self, hidden: bool) {
        if let Err(e) = self.editor.set(&self.nav, &self.hidden_class, hidden) {
            log::warn!("failed to update nav visibility: {e}");
        }
    }
}
